use serde::{Deserialize, Serialize};

use crate::analyzers::{aggregate_risk, recommend, DangerAssessor, TemperatureScorer};
use crate::error::Result;
use crate::models::{
    CropTemperatureProfile, DangerReport, RawTemperatureRanges, RiskScore, SuitabilityScore,
    TemperatureSample,
};
use crate::readers::range_parser::parse_temperature_profile;

/// Suitability and risk of one temperature profile against one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAssessment {
    pub profile: CropTemperatureProfile,
    pub temperature_score: SuitabilityScore,
    pub risk_level: RiskScore,
    pub risks: DangerReport,
    pub recommendations: Vec<String>,
}

pub fn assess_profile(
    raw: &RawTemperatureRanges,
    sample: &TemperatureSample,
) -> Result<ProfileAssessment> {
    let profile = parse_temperature_profile(raw)?;
    let risks = DangerAssessor::new().assess(sample, &profile);

    Ok(ProfileAssessment {
        profile,
        temperature_score: TemperatureScorer::new().score(sample, &profile),
        risk_level: aggregate_risk(&risks),
        recommendations: recommend(&risks),
        risks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_reference_profile() {
        let raw = RawTemperatureRanges::new("0-5", "15-25", "35-40");

        let ideal = assess_profile(&raw, &TemperatureSample::new(20.0, 10.0, 30.0)).unwrap();
        assert_eq!(ideal.temperature_score, 1.0);
        // 30°C exceeds the optimal maximum
        assert!(ideal.risks.heat_stress);
        assert!((ideal.risk_level - 0.3).abs() < EPSILON);

        let warm = assess_profile(&raw, &TemperatureSample::new(30.0, 10.0, 30.0)).unwrap();
        assert!((warm.temperature_score - 0.5).abs() < EPSILON);

        let scorching = assess_profile(&raw, &TemperatureSample::new(30.0, 10.0, 45.0)).unwrap();
        assert_eq!(scorching.temperature_score, 0.0);
        assert!(scorching.risks.extreme_heat);
        assert!(scorching.risks.heat_stress);
        assert!((scorching.risk_level - 0.7).abs() < EPSILON);
    }

    #[test]
    fn test_malformed_profile_propagates() {
        let raw = RawTemperatureRanges::new("0-5", "15-25", "35");
        assert!(assess_profile(&raw, &TemperatureSample::new(20.0, 10.0, 30.0)).is_err());
    }
}
