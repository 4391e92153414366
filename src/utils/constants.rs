/// Temperature suitability decay: score lost per degree outside the optimal band is 1/N
pub const TEMPERATURE_DECAY_DEGREES: f64 = 10.0;

/// Sowing-window decay: score lost per day outside the window is 1/N
pub const SOWING_DECAY_DAYS: f64 = 30.0;

/// Absolute frost threshold (°C), independent of the crop
pub const FREEZING_POINT: f64 = 0.0;

/// Risk weights per danger flag
pub const FREEZING_RISK_WEIGHT: f64 = 0.4;
pub const COLD_STRESS_WEIGHT: f64 = 0.3;
pub const HEAT_STRESS_WEIGHT: f64 = 0.3;
pub const EXTREME_HEAT_WEIGHT: f64 = 0.4;
pub const MAX_RISK: f64 = 1.0;

/// Crops at or below this overall suitability are dropped from rankings
pub const DEFAULT_MIN_SUITABILITY: f64 = 0.4;

/// Activity scheduling
pub const IRRIGATION_INTERVAL_DAYS: u32 = 10;
pub const EARLY_PEST_PROTECTION_DAYS: u32 = 30;
pub const LATE_FERTILIZATION_LEAD_DAYS: u32 = 30;

/// Field condition thresholds for activity priority
pub const LOW_PRECIPITATION_MM: f64 = 10.0;
pub const LOW_HUMIDITY_PERCENT: f64 = 30.0;
pub const HIGH_HUMIDITY_PERCENT: f64 = 70.0;
pub const PEST_FAVOURING_TEMPERATURE: f64 = 30.0;

/// File names
pub const DEFAULT_CATALOG_FILE: &str = "data/Crop_Calendar_Data_All.json";
pub const DEFAULT_CONFIG_FILE: &str = "crop-advisor.toml";
pub const ENV_PREFIX: &str = "CROP_ADVISOR";

/// Reported in place of an absent catalog filter
pub const NO_FILTER: &str = "none";
