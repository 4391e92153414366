use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::analyzers::{aggregate_risk, recommend, DangerAssessor, SowingWindowScorer};
use crate::error::Result;
use crate::models::{
    CalendarDate, CropRecord, CropTemperatureProfile, DangerReport, RiskScore, TemperatureSample,
};
use crate::processors::crop_evaluator::CropEvaluator;
use crate::processors::report::{SkippedCrop, SowingDates, WeatherSummary};
use crate::readers::range_parser::parse_temperature_profile;
use crate::utils::progress::ProgressReporter;

/// Sampled temperatures as shown beside a crop's ideal profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentTemperature {
    /// Rounded to one decimal
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

impl From<&TemperatureSample> for CurrentTemperature {
    fn from(sample: &TemperatureSample) -> Self {
        Self {
            avg: sample.rounded_avg(),
            min: sample.min,
            max: sample.max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureComparison {
    pub current: CurrentTemperature,
    pub ideal: CropTemperatureProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndangermentDetails {
    pub temperature: TemperatureComparison,
    pub risks: DangerReport,
    pub sowing_dates: SowingDates,
    pub recommendations: Vec<String>,
    pub additional_info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndangeredCrop {
    pub crop: String,
    pub risk_level: RiskScore,
    pub details: EndangermentDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndangermentReport {
    pub weather_summary: WeatherSummary,
    pub endangered_crops: Vec<EndangeredCrop>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<SkippedCrop>,
}

/// Finds crops of one country/zone that are in their growing period and
/// threatened by the sampled temperatures
pub struct EndangermentProcessor {
    evaluator: CropEvaluator,
    assessor: DangerAssessor,
    window_scorer: SowingWindowScorer,
}

impl EndangermentProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            evaluator: CropEvaluator::new(max_workers),
            assessor: DangerAssessor::new(),
            window_scorer: SowingWindowScorer::new(),
        }
    }

    pub fn find_endangered(
        &self,
        catalog: &[CropRecord],
        country: &str,
        region: &str,
        sample: &TemperatureSample,
        today: CalendarDate,
        progress: Option<&ProgressReporter>,
    ) -> Result<EndangermentReport> {
        let regional: Vec<&CropRecord> = catalog
            .iter()
            .filter(|record| record.is_in_region(country, region))
            .collect();

        if regional.is_empty() {
            warn!(country, region, "no crops in catalog for region");
        }
        debug!(crops = regional.len(), %today, "assessing regional crops");

        if let Some(p) = progress {
            p.set_message(&format!("Assessing {} crops...", regional.len()));
        }

        let (assessed, skipped) = self
            .evaluator
            .evaluate(&regional, progress, |crop| self.assess_crop(crop, sample, today))?;

        let mut endangered: Vec<EndangeredCrop> = assessed
            .into_iter()
            .flatten()
            .filter(|crop| crop.risk_level > 0.0)
            .collect();
        endangered.sort_by(|a, b| b.risk_level.total_cmp(&a.risk_level));

        info!(
            country,
            region,
            endangered = endangered.len(),
            skipped = skipped.len(),
            "endangered crop analysis completed"
        );

        if let Some(p) = progress {
            p.finish_with_message(&format!("{} crops at risk", endangered.len()));
        }

        Ok(EndangermentReport {
            weather_summary: WeatherSummary::from(sample),
            endangered_crops: endangered,
            skipped,
        })
    }

    /// Assess one crop; `None` when it is not near its sowing window
    pub fn assess_crop(
        &self,
        crop: &CropRecord,
        sample: &TemperatureSample,
        today: CalendarDate,
    ) -> Result<Option<EndangeredCrop>> {
        let profile = parse_temperature_profile(&crop.temperature)?;
        let window = crop.sowing_window()?;

        if self.window_scorer.score(today, &window) <= 0.0 {
            return Ok(None);
        }

        let dangers = self.assessor.assess(sample, &profile);

        Ok(Some(EndangeredCrop {
            crop: crop.crop.clone(),
            risk_level: aggregate_risk(&dangers),
            details: EndangermentDetails {
                temperature: TemperatureComparison {
                    current: CurrentTemperature::from(sample),
                    ideal: profile,
                },
                recommendations: recommend(&dangers),
                risks: dangers,
                sowing_dates: SowingDates::from(&window),
                additional_info: crop.additional_information.clone(),
            },
        }))
    }
}

impl Default for EndangermentProcessor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}
