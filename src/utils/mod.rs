pub mod calendar;
pub mod constants;
pub mod progress;

pub use calendar::{day_of_year, month_name, validate_month_day};
pub use constants::*;
pub use progress::ProgressReporter;
