pub mod danger_assessor;
pub mod risk_aggregator;
pub mod sowing_window_scorer;
pub mod temperature_scorer;

pub use danger_assessor::DangerAssessor;
pub use risk_aggregator::{aggregate_risk, recommend};
pub use sowing_window_scorer::SowingWindowScorer;
pub use temperature_scorer::TemperatureScorer;
