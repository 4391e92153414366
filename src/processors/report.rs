use serde::{Deserialize, Serialize};

use crate::models::{SowingWindow, TemperatureSample};

/// Weather figures echoed back alongside every batch result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Mean temperature rounded to one decimal
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl From<&TemperatureSample> for WeatherSummary {
    fn from(sample: &TemperatureSample) -> Self {
        Self {
            average: sample.rounded_avg(),
            min: sample.min,
            max: sample.max,
        }
    }
}

/// Sowing window as `"day/month"` labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SowingDates {
    pub early: String,
    pub late: String,
}

impl From<&SowingWindow> for SowingDates {
    fn from(window: &SowingWindow) -> Self {
        Self {
            early: window.early.to_string(),
            late: window.late.to_string(),
        }
    }
}

/// A crop left out of a batch because its record could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCrop {
    pub crop: String,
    pub reason: String,
}
