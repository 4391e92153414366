use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Invalid temperature range '{input}': {reason}")]
    RangeFormat { input: String, reason: String },

    #[error("Inconsistent temperature profile: {0}")]
    InconsistentProfile(String),

    #[error("Invalid calendar date: month {month}, day {day}")]
    InvalidDate { month: u32, day: u32 },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Temperature sample contains no readings")]
    EmptySample,

    #[error("{0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
