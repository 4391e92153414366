use serde::{Deserialize, Serialize};

/// Danger flags raised by one (crop, sample) evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DangerReport {
    pub freezing_risk: bool,
    pub cold_stress: bool,
    pub heat_stress: bool,
    pub extreme_heat: bool,
    pub details: Vec<String>,
}

impl DangerReport {
    pub fn is_clear(&self) -> bool {
        !(self.freezing_risk || self.cold_stress || self.heat_stress || self.extreme_heat)
    }
}
