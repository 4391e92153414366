use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AdvisorError, Result};
use crate::models::calendar::{CalendarDate, SowingWindow};

/// Day/month text cells as exported from the crop calendar spreadsheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarCell {
    #[serde(rename = "Day", default)]
    pub day: String,

    #[serde(rename = "Month", default)]
    pub month: String,
}

impl CalendarCell {
    pub fn new(day: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
        }
    }

    pub fn has_month(&self) -> bool {
        !self.month.trim().is_empty()
    }

    pub fn to_calendar_date(&self) -> Result<CalendarDate> {
        let month = parse_calendar_number(&self.month, "month")?;
        let day = parse_calendar_number(&self.day, "day")?;
        CalendarDate::new(month, day)
    }
}

/// Accepts `"7"` as well as the `"7.0"` some spreadsheet exports produce
pub(crate) fn parse_calendar_number(cell: &str, field: &str) -> Result<u32> {
    let trimmed = cell.trim();

    if let Ok(value) = trimmed.parse::<u32>() {
        return Ok(value);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64 => {
            Ok(value as u32)
        }
        _ => Err(AdvisorError::InvalidFormat(format!(
            "Invalid {} value: '{}'",
            field, cell
        ))),
    }
}

/// Raw `"<low>-<high>"` strings for the three tolerance bands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTemperatureRanges {
    #[serde(rename = "Min", default)]
    pub min: String,

    #[serde(rename = "Optimal", default)]
    pub optimal: String,

    #[serde(rename = "Max", default)]
    pub max: String,
}

impl RawTemperatureRanges {
    pub fn new(min: impl Into<String>, optimal: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            optimal: optimal.into(),
            max: max.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SowingRate {
    #[serde(rename = "Value", default)]
    pub value: String,

    #[serde(rename = "Unit", default)]
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowingPeriod {
    #[serde(rename = "Value", default)]
    pub value: String,

    #[serde(rename = "Period", default)]
    pub period: String,
}

/// Seasonal rainfall need, e.g. `"500 - 800"` mm
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "Value", default)]
    pub value: String,

    #[serde(rename = "Unit", default)]
    pub unit: String,
}

/// One crop calendar row: a crop grown in one agro-ecological zone of one country
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CropRecord {
    #[serde(rename = "Country Name")]
    #[validate(length(min = 1))]
    pub country: String,

    #[serde(rename = "Crop")]
    #[validate(length(min = 1))]
    pub crop: String,

    #[serde(rename = "AgroEcological Zone", default)]
    pub agro_ecological_zone: String,

    #[serde(rename = "Additional information", default)]
    pub additional_information: String,

    #[serde(rename = "Early Sowing", default)]
    pub early_sowing: CalendarCell,

    #[serde(rename = "Later Sowing", default)]
    pub later_sowing: CalendarCell,

    #[serde(rename = "All year", default)]
    pub all_year: String,

    #[serde(rename = "Sowing rate", default)]
    pub sowing_rate: SowingRate,

    #[serde(rename = "Growing period", default)]
    pub growing_period: GrowingPeriod,

    #[serde(rename = "Early harvest", default)]
    pub early_harvest: CalendarCell,

    #[serde(rename = "Late harvest", default)]
    pub late_harvest: CalendarCell,

    #[serde(rename = "Temperature", default)]
    pub temperature: RawTemperatureRanges,

    #[serde(rename = "Precipitation", default)]
    pub precipitation: Precipitation,
}

impl CropRecord {
    pub fn sowing_window(&self) -> Result<SowingWindow> {
        Ok(SowingWindow::new(
            self.early_sowing.to_calendar_date()?,
            self.later_sowing.to_calendar_date()?,
        ))
    }

    pub fn is_in_region(&self, country: &str, region: &str) -> bool {
        self.country == country && self.agro_ecological_zone == region
    }
}
