use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::error::{AdvisorError, Result};
use crate::models::{
    ActivityStatus, AlertKind, AlertSeverity, CalendarDate, CropRecord, DaySpan, FieldConditions,
    SowingWindow,
};
use crate::processors::report::SowingDates;
use crate::readers::range_parser::{parse_day_span, parse_span, parse_temperature_profile};
use crate::utils::constants::{
    EARLY_PEST_PROTECTION_DAYS, HIGH_HUMIDITY_PERCENT, IRRIGATION_INTERVAL_DAYS,
    LATE_FERTILIZATION_LEAD_DAYS, LOW_HUMIDITY_PERCENT, LOW_PRECIPITATION_MM,
    PEST_FAVOURING_TEMPERATURE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationEvent {
    pub date: NaiveDate,
    pub days_after_sowing: u32,
    pub status: ActivityStatus,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertilizationEvent {
    pub stage: String,
    pub days_after_sowing: u32,
    pub recommended_date: NaiveDate,
    pub nutrient_focus: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PesticideEvent {
    pub stage: String,
    pub days_after_sowing: u32,
    pub recommended_date: NaiveDate,
    pub risk_factor: String,
    pub status: ActivityStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,
}

/// Irrigation, fertilization and pest-control dates for one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPlan {
    pub sowing_date: NaiveDate,
    pub growing_period: DaySpan,
    pub irrigation: Vec<IrrigationEvent>,
    pub fertilization: Vec<FertilizationEvent>,
    pub pesticide: Vec<PesticideEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropDetails {
    pub name: String,
    pub country: String,
    pub region: String,
}

/// The catalog's raw tolerance bands, echoed for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureBands {
    pub min: String,
    pub optimal: String,
    pub max: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherIntegration {
    pub forecast_used: bool,
    pub temperature_range: TemperatureBands,
    pub precipitation_requirement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmingCalendar {
    pub crop_details: CropDetails,
    pub sowing_period: SowingDates,
    pub activities: ActivityPlan,
    pub weather_integration: WeatherIntegration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAlert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
    pub recommendation: String,
}

struct Stage {
    name: &'static str,
    days_after_sowing: u32,
    focus: &'static str,
}

/// Schedules field work for a single crop calendar record
///
/// Dates count from the season's sowing date: the reference date itself when
/// it falls inside the sowing window, otherwise the next early-sowing date on
/// or after it. Every schedule spans the longest growing period.
#[derive(Debug, Clone, Copy)]
pub struct ActivityPlanner {
    irrigation_interval_days: u32,
}

impl ActivityPlanner {
    pub fn new() -> Self {
        Self {
            irrigation_interval_days: IRRIGATION_INTERVAL_DAYS,
        }
    }

    pub fn plan(
        &self,
        record: &CropRecord,
        conditions: Option<&FieldConditions>,
        reference: NaiveDate,
    ) -> Result<ActivityPlan> {
        if let Some(conditions) = conditions {
            conditions.validate()?;
        }

        let window = record.sowing_window()?;
        let growing_period = parse_day_span(&record.growing_period.value)?;
        let sowing_date = season_start(&window, reference)?;

        debug!(
            crop = %record.crop,
            %sowing_date,
            days = growing_period.longest_days,
            "planning crop activities"
        );

        Ok(ActivityPlan {
            sowing_date,
            growing_period,
            irrigation: self.irrigation(sowing_date, growing_period, conditions),
            fertilization: fertilization(sowing_date, growing_period),
            pesticide: pesticide(sowing_date, growing_period, conditions),
        })
    }

    /// Activity plan together with the crop's identity and climate needs
    pub fn farming_calendar(
        &self,
        record: &CropRecord,
        conditions: Option<&FieldConditions>,
        reference: NaiveDate,
    ) -> Result<FarmingCalendar> {
        let activities = self.plan(record, conditions, reference)?;
        let window = record.sowing_window()?;

        Ok(FarmingCalendar {
            crop_details: CropDetails {
                name: record.crop.clone(),
                country: record.country.clone(),
                region: record.agro_ecological_zone.clone(),
            },
            sowing_period: SowingDates::from(&window),
            activities,
            weather_integration: WeatherIntegration {
                forecast_used: conditions.is_some(),
                temperature_range: TemperatureBands {
                    min: record.temperature.min.clone(),
                    optimal: record.temperature.optimal.clone(),
                    max: record.temperature.max.clone(),
                },
                precipitation_requirement: format!(
                    "{} {}",
                    record.precipitation.value.trim(),
                    record.precipitation.unit.trim()
                )
                .trim()
                .to_string(),
            },
        })
    }

    /// Alerts for conditions outside the crop's tolerances. The rainfall
    /// check is skipped when the record has no precipitation requirement.
    pub fn alerts(
        &self,
        record: &CropRecord,
        conditions: &FieldConditions,
    ) -> Result<Vec<ActivityAlert>> {
        conditions.validate()?;
        let profile = parse_temperature_profile(&record.temperature)?;
        let mut alerts = Vec::new();

        if conditions.temperature < profile.absolute_min() {
            alerts.push(ActivityAlert {
                kind: AlertKind::TemperatureLow,
                severity: AlertSeverity::High,
                message: "Current temperature is below crop's minimum tolerance".to_string(),
                recommendation: "Consider protective measures like row covers or greenhouse"
                    .to_string(),
            });
        }

        if conditions.temperature > profile.absolute_max() {
            alerts.push(ActivityAlert {
                kind: AlertKind::TemperatureHigh,
                severity: AlertSeverity::High,
                message: "Current temperature exceeds crop's maximum tolerance".to_string(),
                recommendation: "Implement cooling methods like shade nets or increased irrigation"
                    .to_string(),
            });
        }

        if !record.precipitation.value.trim().is_empty() {
            let requirement = parse_span(&record.precipitation.value)?;
            if conditions.precipitation < requirement.min {
                alerts.push(ActivityAlert {
                    kind: AlertKind::PrecipitationLow,
                    severity: AlertSeverity::Medium,
                    message: "Precipitation is lower than crop requirements".to_string(),
                    recommendation: "Supplemental irrigation may be necessary".to_string(),
                });
            }
        }

        debug!(crop = %record.crop, alerts = alerts.len(), "activity alerts evaluated");
        Ok(alerts)
    }

    fn irrigation(
        &self,
        sowing_date: NaiveDate,
        growing_period: DaySpan,
        conditions: Option<&FieldConditions>,
    ) -> Vec<IrrigationEvent> {
        let (status, reason) = match conditions {
            Some(c) if c.precipitation < LOW_PRECIPITATION_MM => (
                ActivityStatus::Urgent,
                "Low precipitation, immediate irrigation needed",
            ),
            Some(c) if c.humidity < LOW_HUMIDITY_PERCENT => (
                ActivityStatus::HighPriority,
                "Low humidity increases water needs",
            ),
            _ => (ActivityStatus::Recommended, "Standard irrigation interval"),
        };

        (0..growing_period.longest_days)
            .step_by(self.irrigation_interval_days.max(1) as usize)
            .map(|offset| IrrigationEvent {
                date: days_after(sowing_date, offset),
                days_after_sowing: offset,
                status,
                reason: reason.to_string(),
            })
            .collect()
    }
}

impl Default for ActivityPlanner {
    fn default() -> Self {
        Self::new()
    }
}

fn fertilization(sowing_date: NaiveDate, growing_period: DaySpan) -> Vec<FertilizationEvent> {
    let length = growing_period.longest_days;
    let stages = [
        Stage {
            name: "Base Fertilization",
            days_after_sowing: 0,
            focus: "Initial growth support",
        },
        Stage {
            name: "Mid-Season Fertilization",
            days_after_sowing: length / 2,
            focus: "Vegetative growth boost",
        },
        Stage {
            name: "Late-Season Fertilization",
            days_after_sowing: length.saturating_sub(LATE_FERTILIZATION_LEAD_DAYS),
            focus: "Fruit/Grain development",
        },
    ];

    stages
        .iter()
        .map(|stage| FertilizationEvent {
            stage: stage.name.to_string(),
            days_after_sowing: stage.days_after_sowing,
            recommended_date: days_after(sowing_date, stage.days_after_sowing),
            nutrient_focus: stage.focus.to_string(),
        })
        .collect()
}

fn pesticide(
    sowing_date: NaiveDate,
    growing_period: DaySpan,
    conditions: Option<&FieldConditions>,
) -> Vec<PesticideEvent> {
    let stages = [
        Stage {
            name: "Early Protection",
            days_after_sowing: EARLY_PEST_PROTECTION_DAYS,
            focus: "Seedling vulnerability",
        },
        Stage {
            name: "Mid-Season Protection",
            days_after_sowing: growing_period.longest_days / 2,
            focus: "Pest population growth",
        },
    ];

    // Heat outranks humidity
    let (status, reason) = match conditions {
        Some(c) if c.temperature > PEST_FAVOURING_TEMPERATURE => (
            ActivityStatus::Urgent,
            Some("High temperature favors pest proliferation"),
        ),
        Some(c) if c.humidity > HIGH_HUMIDITY_PERCENT => (
            ActivityStatus::HighPriority,
            Some("High humidity increases pest risk"),
        ),
        _ => (ActivityStatus::Recommended, None),
    };

    stages
        .iter()
        .map(|stage| PesticideEvent {
            stage: stage.name.to_string(),
            days_after_sowing: stage.days_after_sowing,
            recommended_date: days_after(sowing_date, stage.days_after_sowing),
            risk_factor: stage.focus.to_string(),
            status,
            reason: reason.map(str::to_string),
        })
        .collect()
}

fn days_after(date: NaiveDate, days: u32) -> NaiveDate {
    date + Duration::days(i64::from(days))
}

/// Sowing date of the season the reference date belongs to
fn season_start(window: &SowingWindow, reference: NaiveDate) -> Result<NaiveDate> {
    if window.contains(CalendarDate::from(reference)) {
        return Ok(reference);
    }
    next_occurrence(window.early, reference)
}

/// First date on or after `from` with the given month and day. 29 February
/// falls on 1 March in common years.
fn next_occurrence(date: CalendarDate, from: NaiveDate) -> Result<NaiveDate> {
    (from.year()..=from.year() + 1)
        .filter_map(|year| {
            NaiveDate::from_ymd_opt(year, date.month(), date.day())
                .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        })
        .find(|candidate| *candidate >= from)
        .ok_or(AdvisorError::InvalidDate {
            month: date.month(),
            day: date.day(),
        })
}
