use crate::models::{DangerReport, RiskScore};
use crate::utils::constants::{
    COLD_STRESS_WEIGHT, EXTREME_HEAT_WEIGHT, FREEZING_RISK_WEIGHT, HEAT_STRESS_WEIGHT, MAX_RISK,
};

const FROST_MEASURES: [&str; 2] = [
    "Consider using frost protection methods like row covers or sprinkler systems",
    "Monitor nighttime temperatures closely",
];

const COLD_MEASURES: [&str; 2] = [
    "Add mulch to regulate soil temperature",
    "Consider using cold frames or tunnels",
];

const HEAT_MEASURES: [&str; 3] = [
    "Ensure adequate irrigation",
    "Consider shade cloth or other cooling methods",
    "Monitor soil moisture levels carefully",
];

const EXTREME_HEAT_MEASURES: [&str; 3] = [
    "Implement emergency irrigation measures",
    "Apply reflective mulch if available",
    "Consider temporary shade structures",
];

/// Weighted sum of the active danger flags, capped at 1.0
///
/// The weights add up to 1.4, so the cap matters when several flags fire.
pub fn aggregate_risk(report: &DangerReport) -> RiskScore {
    let weighted = [
        (report.freezing_risk, FREEZING_RISK_WEIGHT),
        (report.cold_stress, COLD_STRESS_WEIGHT),
        (report.heat_stress, HEAT_STRESS_WEIGHT),
        (report.extreme_heat, EXTREME_HEAT_WEIGHT),
    ];

    let risk: f64 = weighted
        .iter()
        .filter(|(active, _)| *active)
        .map(|(_, weight)| weight)
        .sum();

    risk.min(MAX_RISK)
}

/// Mitigation advice for each active flag, in flag order
pub fn recommend(report: &DangerReport) -> Vec<String> {
    let blocks: [(bool, &[&str]); 4] = [
        (report.freezing_risk, &FROST_MEASURES),
        (report.cold_stress, &COLD_MEASURES),
        (report.heat_stress, &HEAT_MEASURES),
        (report.extreme_heat, &EXTREME_HEAT_MEASURES),
    ];

    blocks
        .iter()
        .filter(|(active, _)| *active)
        .flat_map(|(_, measures)| measures.iter().map(|m| m.to_string()))
        .collect()
}
