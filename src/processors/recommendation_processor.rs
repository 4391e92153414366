use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::analyzers::{SowingWindowScorer, TemperatureScorer};
use crate::error::Result;
use crate::models::{
    CalendarDate, CropRecord, CropTemperatureProfile, SuitabilityScore, TemperatureSample,
};
use crate::processors::crop_evaluator::CropEvaluator;
use crate::processors::report::{SkippedCrop, SowingDates, WeatherSummary};
use crate::readers::range_parser::parse_temperature_profile;
use crate::utils::constants::DEFAULT_MIN_SUITABILITY;
use crate::utils::progress::ProgressReporter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityDetails {
    pub temperature_compatibility: SuitabilityScore,
    pub sowing_time_compatibility: SuitabilityScore,
    pub ideal_temp_range: CropTemperatureProfile,
    pub sowing_dates: SowingDates,
    pub additional_info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop: String,
    /// Mean of the temperature and sowing-time scores
    pub suitability: SuitabilityScore,
    pub details: SuitabilityDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub weather_summary: WeatherSummary,
    pub recommendations: Vec<CropRecommendation>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<SkippedCrop>,
}

/// Ranks the crops of one country/zone by how well they suit sowing now
pub struct RecommendationProcessor {
    evaluator: CropEvaluator,
    temperature_scorer: TemperatureScorer,
    window_scorer: SowingWindowScorer,
    min_suitability: f64,
}

impl RecommendationProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            evaluator: CropEvaluator::new(max_workers),
            temperature_scorer: TemperatureScorer::new(),
            window_scorer: SowingWindowScorer::new(),
            min_suitability: DEFAULT_MIN_SUITABILITY,
        }
    }

    /// Crops scoring at or below this overall suitability are dropped
    pub fn with_min_suitability(mut self, min_suitability: f64) -> Self {
        self.min_suitability = min_suitability;
        self
    }

    pub fn recommend(
        &self,
        catalog: &[CropRecord],
        country: &str,
        region: &str,
        sample: &TemperatureSample,
        today: CalendarDate,
        progress: Option<&ProgressReporter>,
    ) -> Result<RecommendationReport> {
        let regional: Vec<&CropRecord> = catalog
            .iter()
            .filter(|record| record.is_in_region(country, region))
            .collect();

        if regional.is_empty() {
            warn!(country, region, "no crops in catalog for region");
        }
        debug!(crops = regional.len(), %today, "scoring regional crops");

        if let Some(p) = progress {
            p.set_message(&format!("Scoring {} crops...", regional.len()));
        }

        let (mut recommendations, skipped) =
            self.evaluator
                .evaluate(&regional, progress, |crop| self.score_crop(crop, sample, today))?;

        recommendations.retain(|r| r.suitability > self.min_suitability);
        recommendations.sort_by(|a, b| b.suitability.total_cmp(&a.suitability));

        info!(
            country,
            region,
            recommended = recommendations.len(),
            skipped = skipped.len(),
            "crop recommendations generated"
        );

        if let Some(p) = progress {
            p.finish_with_message(&format!("Recommended {} crops", recommendations.len()));
        }

        Ok(RecommendationReport {
            weather_summary: WeatherSummary::from(sample),
            recommendations,
            skipped,
        })
    }

    /// Score a single crop record; errors come from malformed ranges or dates
    pub fn score_crop(
        &self,
        crop: &CropRecord,
        sample: &TemperatureSample,
        today: CalendarDate,
    ) -> Result<CropRecommendation> {
        let profile = parse_temperature_profile(&crop.temperature)?;
        let window = crop.sowing_window()?;

        let temperature_score = self.temperature_scorer.score(sample, &profile);
        let date_score = self.window_scorer.score(today, &window);

        Ok(CropRecommendation {
            crop: crop.crop.clone(),
            suitability: (temperature_score + date_score) / 2.0,
            details: SuitabilityDetails {
                temperature_compatibility: temperature_score,
                sowing_time_compatibility: date_score,
                ideal_temp_range: profile,
                sowing_dates: SowingDates::from(&window),
                additional_info: crop.additional_information.clone(),
            },
        })
    }
}

impl Default for RecommendationProcessor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarCell, RawTemperatureRanges};

    const EPSILON: f64 = 1e-9;

    fn crop(name: &str, ranges: (&str, &str, &str), early: (&str, &str), late: (&str, &str)) -> CropRecord {
        CropRecord {
            country: "Kenya".to_string(),
            crop: name.to_string(),
            agro_ecological_zone: "Highlands".to_string(),
            early_sowing: CalendarCell::new(early.0, early.1),
            later_sowing: CalendarCell::new(late.0, late.1),
            temperature: RawTemperatureRanges::new(ranges.0, ranges.1, ranges.2),
            ..Default::default()
        }
    }

    fn today() -> CalendarDate {
        CalendarDate::new(4, 1).unwrap()
    }

    #[test]
    fn test_score_crop_averages_components() {
        let maize = crop("Maize", ("0-5", "15-25", "35-40"), ("15", "3"), ("30", "4"));
        let sample = TemperatureSample::new(30.0, 10.0, 30.0);

        let scored = RecommendationProcessor::new(1)
            .score_crop(&maize, &sample, today())
            .unwrap();

        assert!((scored.details.temperature_compatibility - 0.5).abs() < EPSILON);
        assert_eq!(scored.details.sowing_time_compatibility, 1.0);
        assert!((scored.suitability - 0.75).abs() < EPSILON);
        assert_eq!(scored.details.sowing_dates.early, "15/3");
        assert_eq!(scored.details.sowing_dates.late, "30/4");
    }

    #[test]
    fn test_ranking_filters_and_sorts() {
        let catalog = vec![
            // In window, ideal temperature: 1.0
            crop("Maize", ("0-5", "15-25", "35-40"), ("15", "3"), ("30", "4")),
            // In window, 5 degrees off optimal: 0.75
            crop("Beans", ("0-5", "10-15", "35-40"), ("1", "3"), ("30", "4")),
            // Out of window and too hot: 0.0
            crop("Wheat", ("0-5", "5-10", "15-18"), ("1", "10"), ("30", "11")),
            crop("Broken", ("0-5", "hot-25", "35-40"), ("15", "3"), ("30", "4")),
        ];
        let sample = TemperatureSample::new(20.0, 10.0, 30.0);

        let report = RecommendationProcessor::new(2)
            .recommend(&catalog, "Kenya", "Highlands", &sample, today(), None)
            .unwrap();

        let names: Vec<&str> = report.recommendations.iter().map(|r| r.crop.as_str()).collect();
        assert_eq!(names, vec!["Maize", "Beans"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].crop, "Broken");
        assert_eq!(report.weather_summary.average, 20.0);
    }

    #[test]
    fn test_other_regions_ignored() {
        let mut coastal = crop("Cassava", ("0-5", "15-25", "35-40"), ("15", "3"), ("30", "4"));
        coastal.agro_ecological_zone = "Coast".to_string();

        let report = RecommendationProcessor::new(1)
            .recommend(
                &[coastal],
                "Kenya",
                "Highlands",
                &TemperatureSample::new(20.0, 10.0, 30.0),
                today(),
                None,
            )
            .unwrap();

        assert!(report.recommendations.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Temperature 0.0 (too hot), date 1.0 → exactly 0.5
        let catalog = vec![crop("Peas", ("0-5", "10-15", "20-25"), ("15", "3"), ("30", "4"))];
        let sample = TemperatureSample::new(20.0, 10.0, 30.0);

        let strict = RecommendationProcessor::new(1)
            .with_min_suitability(0.5)
            .recommend(&catalog, "Kenya", "Highlands", &sample, today(), None)
            .unwrap();
        assert!(strict.recommendations.is_empty());

        let lenient = RecommendationProcessor::new(1)
            .recommend(&catalog, "Kenya", "Highlands", &sample, today(), None)
            .unwrap();
        assert_eq!(lenient.recommendations.len(), 1);
    }
}
