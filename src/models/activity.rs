use serde::{Deserialize, Serialize};
use validator::Validate;

/// Field weather supplied by the caller for activity scheduling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct FieldConditions {
    /// °C
    pub temperature: f64,

    /// Relative humidity, percent
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,

    /// mm
    #[validate(range(min = 0.0))]
    pub precipitation: f64,
}

impl FieldConditions {
    pub fn new(temperature: f64, humidity: f64, precipitation: f64) -> Self {
        Self {
            temperature,
            humidity,
            precipitation,
        }
    }
}

/// Shortest and longest growing period in whole days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySpan {
    pub shortest_days: u32,
    pub longest_days: u32,
}

impl DaySpan {
    pub fn new(shortest_days: u32, longest_days: u32) -> Self {
        Self {
            shortest_days,
            longest_days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Recommended,
    #[serde(rename = "High Priority")]
    HighPriority,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    TemperatureLow,
    TemperatureHigh,
    PrecipitationLow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertSeverity {
    High,
    Medium,
}
