pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConditionArgs, CropTargetArgs, ForecastArgs};
pub use commands::{init_logging, resolve_reference_date, resolve_start_date, run};
