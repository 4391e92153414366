//! Runtime settings
//!
//! Values come from built-in defaults, then an optional TOML file
//! (`crop-advisor.toml` in the working directory, or an explicit path),
//! then `CROP_ADVISOR_*` environment variables.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CATALOG_FILE, DEFAULT_CONFIG_FILE, DEFAULT_MIN_SUITABILITY, ENV_PREFIX,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AdvisorSettings {
    /// Crop calendar catalog JSON
    pub catalog_path: PathBuf,

    /// Crops at or below this overall suitability are left out of rankings
    #[validate(range(min = 0.0, max = 1.0))]
    pub min_suitability: f64,

    /// Worker threads for per-crop evaluation
    #[validate(range(min = 1))]
    pub max_workers: usize,

    /// Default tracing filter when `RUST_LOG` is unset
    #[validate(length(min = 1))]
    pub log_level: String,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
            min_suitability: DEFAULT_MIN_SUITABILITY,
            max_workers: num_cpus::get(),
            log_level: "info".to_string(),
        }
    }
}

impl AdvisorSettings {
    /// Layer defaults, the settings file and the environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let builder = Config::builder()
            .set_default(
                "catalog_path",
                defaults.catalog_path.to_string_lossy().to_string(),
            )?
            .set_default("min_suitability", defaults.min_suitability)?
            .set_default("max_workers", defaults.max_workers as i64)?
            .set_default("log_level", defaults.log_level)?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false)),
        };

        let settings: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        debug!(?settings, "settings loaded");

        Ok(settings)
    }
}
