use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::FieldConditions;

#[derive(Parser)]
#[command(name = "crop-advisor")]
#[command(about = "Crop sowing suitability and temperature risk advisor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide the progress spinner")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Settings file [default: crop-advisor.toml if present]"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Crop calendar catalog JSON file")]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Write JSON to this file instead of stdout")]
    pub output: Option<PathBuf>,
}

/// Forecast inputs shared by the batch commands
#[derive(Args, Debug, Clone)]
pub struct ForecastArgs {
    #[arg(long, help = "Country name as it appears in the catalog")]
    pub country: String,

    #[arg(long, help = "Agro-ecological zone within the country")]
    pub region: String,

    #[arg(
        short,
        long,
        required = true,
        value_delimiter = ',',
        allow_negative_numbers = true,
        help = "Forecast temperatures in °C, comma separated"
    )]
    pub temperatures: Vec<f64>,

    #[arg(long, help = "Reference date YYYY-MM-DD [default: today]")]
    pub start_date: Option<String>,

    #[arg(long, help = "Worker threads [default: from settings]")]
    pub max_workers: Option<usize>,
}

/// Identifies one catalog record
#[derive(Args, Debug, Clone)]
pub struct CropTargetArgs {
    #[arg(long)]
    pub country: String,

    #[arg(long)]
    pub crop: String,

    #[arg(long, help = "Agro-ecological zone within the country")]
    pub region: String,
}

/// Optional field weather; all three values go together
#[derive(Args, Debug, Clone, Default)]
pub struct ConditionArgs {
    #[arg(
        long,
        allow_negative_numbers = true,
        requires_all = ["humidity", "precipitation"],
        help = "Current temperature in °C"
    )]
    pub temperature: Option<f64>,

    #[arg(long, requires_all = ["temperature", "precipitation"], help = "Relative humidity in %")]
    pub humidity: Option<f64>,

    #[arg(long, requires_all = ["temperature", "humidity"], help = "Precipitation in mm")]
    pub precipitation: Option<f64>,
}

impl ConditionArgs {
    pub fn to_conditions(&self) -> Option<FieldConditions> {
        match (self.temperature, self.humidity, self.precipitation) {
            (Some(temperature), Some(humidity), Some(precipitation)) => {
                Some(FieldConditions::new(temperature, humidity, precipitation))
            }
            _ => None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a region's crops by sowing suitability
    Recommend {
        #[command(flatten)]
        forecast: ForecastArgs,

        #[arg(long, help = "Minimum overall suitability [default: from settings]")]
        min_suitability: Option<f64>,
    },

    /// List crops of a region endangered by the forecast temperatures
    Endangered {
        #[command(flatten)]
        forecast: ForecastArgs,
    },

    /// Score one temperature profile against one sample
    Assess {
        #[arg(long, help = "Crop minimum range, e.g. \"0-5\"")]
        min_range: String,

        #[arg(long, help = "Optimal range, e.g. \"15-25\"")]
        optimal_range: String,

        #[arg(long, help = "Crop maximum range, e.g. \"35-40\"")]
        max_range: String,

        #[arg(long, allow_negative_numbers = true)]
        avg: f64,

        #[arg(long, allow_negative_numbers = true)]
        min: f64,

        #[arg(long, allow_negative_numbers = true)]
        max: f64,
    },

    /// List countries in the catalog
    Countries,

    /// List crops, optionally for a country and zone
    Crops {
        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        region: Option<String>,
    },

    /// List agro-ecological zones, optionally for a country and crop
    Regions {
        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        crop: Option<String>,
    },

    /// Show every catalog record for a crop in a country
    CropData {
        #[arg(long)]
        country: String,

        #[arg(long)]
        crop: String,
    },

    /// Show sowing dates and rate for a crop
    Sowing {
        #[arg(long)]
        country: String,

        #[arg(long)]
        crop: String,

        #[arg(long)]
        region: String,
    },

    /// Show harvest dates and growing period for a crop
    Harvest {
        #[arg(long)]
        country: String,

        #[arg(long)]
        crop: String,

        #[arg(long)]
        region: String,
    },

    /// Irrigation, fertilization and pest-control schedule for a crop
    Activities {
        #[command(flatten)]
        target: CropTargetArgs,

        #[command(flatten)]
        conditions: ConditionArgs,

        #[arg(long, help = "Reference date YYYY-MM-DD [default: today]")]
        start_date: Option<String>,
    },

    /// Activity schedule with crop details and climate needs
    Calendar {
        #[command(flatten)]
        target: CropTargetArgs,

        #[command(flatten)]
        conditions: ConditionArgs,

        #[arg(long, help = "Reference date YYYY-MM-DD [default: today]")]
        start_date: Option<String>,
    },

    /// Alerts for field weather outside a crop's tolerances
    Alerts {
        #[command(flatten)]
        target: CropTargetArgs,

        #[arg(long, allow_negative_numbers = true, help = "Current temperature in °C")]
        temperature: f64,

        #[arg(long, help = "Relative humidity in %")]
        humidity: f64,

        #[arg(long, help = "Precipitation in mm")]
        precipitation: f64,
    },
}
