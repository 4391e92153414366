pub mod activity;
pub mod calendar;
pub mod crop;
pub mod danger;
pub mod temperature;

pub use activity::{ActivityStatus, AlertKind, AlertSeverity, DaySpan, FieldConditions};
pub use calendar::{CalendarDate, SowingWindow};
pub use crop::{
    CalendarCell, CropRecord, GrowingPeriod, Precipitation, RawTemperatureRanges, SowingRate,
};
pub use danger::DangerReport;
pub use temperature::{CropTemperatureProfile, TemperatureRange, TemperatureSample};

/// Bounded [0, 1] favourability of a temperature sample or a date; 1.0 is ideal
pub type SuitabilityScore = f64;

/// Bounded [0, 1] severity derived from weighted danger flags
pub type RiskScore = f64;
