use crate::models::{CropTemperatureProfile, DangerReport, TemperatureSample};
use crate::utils::constants::FREEZING_POINT;

/// Flags temperature extremes that threaten a planted crop
///
/// The four rules are independent; heat stress and extreme heat may fire
/// together.
#[derive(Debug, Clone, Copy, Default)]
pub struct DangerAssessor;

impl DangerAssessor {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(
        &self,
        sample: &TemperatureSample,
        profile: &CropTemperatureProfile,
    ) -> DangerReport {
        let mut report = DangerReport::default();

        if sample.min <= FREEZING_POINT {
            report.freezing_risk = true;
            report
                .details
                .push(format!("Risk of frost damage at {}°C", sample.min));
        }

        if sample.min < profile.absolute_min() {
            report.cold_stress = true;
            report.details.push(format!(
                "Cold stress: minimum temperature {}°C below crop minimum {}°C",
                sample.min,
                profile.absolute_min()
            ));
        }

        if sample.max > profile.optimal.max {
            report.heat_stress = true;
            report.details.push(format!(
                "Heat stress: maximum temperature {}°C above optimal maximum {}°C",
                sample.max, profile.optimal.max
            ));
        }

        if sample.max > profile.absolute_max() {
            report.extreme_heat = true;
            report.details.push(format!(
                "Extreme heat: maximum temperature {}°C above crop maximum {}°C",
                sample.max,
                profile.absolute_max()
            ));
        }

        report
    }
}
