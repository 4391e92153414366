use chrono::{Local, NaiveDate};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands, CropTargetArgs, ForecastArgs};
use crate::config::AdvisorSettings;
use crate::error::{AdvisorError, Result};
use crate::models::{
    CalendarDate, CropRecord, FieldConditions, RawTemperatureRanges, TemperatureSample,
};
use crate::processors::{
    assess_profile, ActivityPlanner, CatalogQuery, EndangermentProcessor, RecommendationProcessor,
};
use crate::readers::CatalogReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::JsonWriter;

pub async fn run(cli: Cli) -> Result<()> {
    let settings = AdvisorSettings::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &settings.log_level, cli.log_file.as_deref())?;

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| settings.catalog_path.clone());
    let output = cli.output.as_deref();
    let writer = JsonWriter::new();

    match cli.command {
        Commands::Recommend {
            forecast,
            min_suitability,
        } => {
            let catalog = load_catalog(&catalog_path).await?;
            let (sample, today) = resolve_forecast(&forecast)?;
            info!(
                country = %forecast.country,
                region = %forecast.region,
                %today,
                "ranking crops"
            );

            let processor =
                RecommendationProcessor::new(forecast.max_workers.unwrap_or(settings.max_workers))
                    .with_min_suitability(min_suitability.unwrap_or(settings.min_suitability));
            let quiet = cli.quiet;

            let report = tokio::task::spawn_blocking(move || {
                let progress = ProgressReporter::new_spinner("Scoring crops...", quiet);
                processor.recommend(
                    &catalog,
                    &forecast.country,
                    &forecast.region,
                    &sample,
                    today,
                    Some(&progress),
                )
            })
            .await??;

            writer.write(&report, output)?;
        }

        Commands::Endangered { forecast } => {
            let catalog = load_catalog(&catalog_path).await?;
            let (sample, today) = resolve_forecast(&forecast)?;
            info!(
                country = %forecast.country,
                region = %forecast.region,
                %today,
                "assessing endangered crops"
            );

            let processor =
                EndangermentProcessor::new(forecast.max_workers.unwrap_or(settings.max_workers));
            let quiet = cli.quiet;

            let report = tokio::task::spawn_blocking(move || {
                let progress = ProgressReporter::new_spinner("Assessing crops...", quiet);
                processor.find_endangered(
                    &catalog,
                    &forecast.country,
                    &forecast.region,
                    &sample,
                    today,
                    Some(&progress),
                )
            })
            .await??;

            writer.write(&report, output)?;
        }

        Commands::Assess {
            min_range,
            optimal_range,
            max_range,
            avg,
            min,
            max,
        } => {
            let raw = RawTemperatureRanges::new(min_range, optimal_range, max_range);
            let assessment = assess_profile(&raw, &TemperatureSample::new(avg, min, max))?;
            writer.write(&assessment, output)?;
        }

        Commands::Countries => {
            let catalog = load_catalog(&catalog_path).await?;
            writer.write(&CatalogQuery::new(&catalog).countries(), output)?;
        }

        Commands::Crops { country, region } => {
            let catalog = load_catalog(&catalog_path).await?;
            let listing =
                CatalogQuery::new(&catalog).crops(country.as_deref(), region.as_deref())?;
            writer.write(&listing, output)?;
        }

        Commands::Regions { country, crop } => {
            let catalog = load_catalog(&catalog_path).await?;
            let listing =
                CatalogQuery::new(&catalog).regions(country.as_deref(), crop.as_deref())?;
            writer.write(&listing, output)?;
        }

        Commands::CropData { country, crop } => {
            let catalog = load_catalog(&catalog_path).await?;
            let records = CatalogQuery::new(&catalog).crop_data(&country, &crop);
            writer.write(&records, output)?;
        }

        Commands::Sowing {
            country,
            crop,
            region,
        } => {
            let catalog = load_catalog(&catalog_path).await?;
            let sowing = CatalogQuery::new(&catalog).sowing_info(&country, &crop, &region)?;
            writer.write(&sowing, output)?;
        }

        Commands::Harvest {
            country,
            crop,
            region,
        } => {
            let catalog = load_catalog(&catalog_path).await?;
            let harvest = CatalogQuery::new(&catalog).harvest_info(&country, &crop, &region)?;
            writer.write(&harvest, output)?;
        }

        Commands::Activities {
            target,
            conditions,
            start_date,
        } => {
            let catalog = load_catalog(&catalog_path).await?;
            let record = find_target(&catalog, &target)?;
            let reference = resolve_reference_date(start_date.as_deref())?;
            info!(crop = %target.crop, %reference, "planning crop activities");

            let plan =
                ActivityPlanner::new().plan(record, conditions.to_conditions().as_ref(), reference)?;
            writer.write(&plan, output)?;
        }

        Commands::Calendar {
            target,
            conditions,
            start_date,
        } => {
            let catalog = load_catalog(&catalog_path).await?;
            let record = find_target(&catalog, &target)?;
            let reference = resolve_reference_date(start_date.as_deref())?;
            info!(crop = %target.crop, %reference, "building farming calendar");

            let calendar = ActivityPlanner::new().farming_calendar(
                record,
                conditions.to_conditions().as_ref(),
                reference,
            )?;
            writer.write(&calendar, output)?;
        }

        Commands::Alerts {
            target,
            temperature,
            humidity,
            precipitation,
        } => {
            let catalog = load_catalog(&catalog_path).await?;
            let record = find_target(&catalog, &target)?;
            let conditions = FieldConditions::new(temperature, humidity, precipitation);

            let alerts = ActivityPlanner::new().alerts(record, &conditions)?;
            info!(crop = %target.crop, alerts = alerts.len(), "activity alerts generated");
            writer.write(&alerts, output)?;
        }
    }

    Ok(())
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `--verbose`
/// and the configured level.
pub fn init_logging(verbose: bool, default_level: &str, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { default_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match log_file {
        Some(path) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| AdvisorError::Config(format!("Failed to initialise logging: {}", e)))
}

async fn load_catalog(path: &Path) -> Result<Vec<CropRecord>> {
    CatalogReader::new().read_catalog(path).await
}

fn find_target<'a>(catalog: &'a [CropRecord], target: &CropTargetArgs) -> Result<&'a CropRecord> {
    CatalogQuery::new(catalog).find_record(&target.country, &target.crop, &target.region)
}

fn resolve_forecast(forecast: &ForecastArgs) -> Result<(TemperatureSample, CalendarDate)> {
    let sample = TemperatureSample::from_readings(&forecast.temperatures)?;
    let today = resolve_start_date(forecast.start_date.as_deref())?;
    debug!(?sample, %today, "forecast resolved");
    Ok((sample, today))
}

/// `YYYY-MM-DD`, or the local date when absent
pub fn resolve_reference_date(start_date: Option<&str>) -> Result<NaiveDate> {
    match start_date {
        Some(text) => Ok(NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")?),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn resolve_start_date(start_date: Option<&str>) -> Result<CalendarDate> {
    resolve_reference_date(start_date).map(CalendarDate::from)
}
