use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// One parsed `"<low>-<high>"` temperature band in °C
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl TemperatureRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance from `value` to the nearer edge of the band
    pub fn distance_to_nearest_edge(&self, value: f64) -> f64 {
        (value - self.min).abs().min((value - self.max).abs())
    }
}

/// A crop's tolerance bands: survivable minimum, optimal, survivable maximum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropTemperatureProfile {
    pub min: TemperatureRange,
    pub optimal: TemperatureRange,
    pub max: TemperatureRange,
}

impl CropTemperatureProfile {
    pub fn new(min: TemperatureRange, optimal: TemperatureRange, max: TemperatureRange) -> Self {
        Self { min, optimal, max }
    }

    /// Lowest temperature the crop survives
    pub fn absolute_min(&self) -> f64 {
        self.min.min
    }

    /// Highest temperature the crop survives
    pub fn absolute_max(&self) -> f64 {
        self.max.max
    }

    /// Enforces `min.min <= optimal.min <= optimal.max <= max.max`
    pub fn validate_ordering(&self) -> Result<()> {
        if self.min.min > self.optimal.min {
            return Err(AdvisorError::InconsistentProfile(format!(
                "crop minimum {} is above optimal minimum {}",
                self.min.min, self.optimal.min
            )));
        }

        if self.optimal.min > self.optimal.max {
            return Err(AdvisorError::InconsistentProfile(format!(
                "optimal minimum {} is above optimal maximum {}",
                self.optimal.min, self.optimal.max
            )));
        }

        if self.optimal.max > self.max.max {
            return Err(AdvisorError::InconsistentProfile(format!(
                "optimal maximum {} is above crop maximum {}",
                self.optimal.max, self.max.max
            )));
        }

        Ok(())
    }
}

/// Summary statistics of a forecast or observation period, °C
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSample {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

impl TemperatureSample {
    pub fn new(avg: f64, min: f64, max: f64) -> Self {
        Self { avg, min, max }
    }

    /// Mean, minimum and maximum of a series of readings
    pub fn from_readings(readings: &[f64]) -> Result<Self> {
        if readings.is_empty() {
            return Err(AdvisorError::EmptySample);
        }

        if let Some(bad) = readings.iter().find(|r| !r.is_finite()) {
            return Err(AdvisorError::InvalidFormat(format!(
                "Temperature reading {} is not a finite number",
                bad
            )));
        }

        let sum: f64 = readings.iter().sum();
        let min = readings.iter().copied().fold(f64::INFINITY, f64::min);
        let max = readings.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            avg: sum / readings.len() as f64,
            min,
            max,
        })
    }

    /// Average rounded to one decimal, as shown in weather summaries
    pub fn rounded_avg(&self) -> f64 {
        (self.avg * 10.0).round() / 10.0
    }
}
