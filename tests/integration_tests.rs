use crop_advisor::analyzers::{aggregate_risk, DangerAssessor, SowingWindowScorer, TemperatureScorer};
use chrono::NaiveDate;
use crop_advisor::models::{
    AlertKind, CalendarDate, FieldConditions, RawTemperatureRanges, SowingWindow, TemperatureSample,
};
use crop_advisor::processors::{
    ActivityPlanner, CatalogQuery, EndangermentProcessor, RecommendationProcessor,
};
use crop_advisor::readers::{parse_range, parse_temperature_profile, CatalogReader};
use crop_advisor::writers::JsonWriter;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const EPSILON: f64 = 1e-9;

const CATALOG: &str = r#"[
    {
        "Country Name": "Kenya",
        "Crop": "Maize",
        "AgroEcological Zone": "Highlands",
        "Additional information": "Long rains season",
        "Early Sowing": {"Day": "15", "Month": "3"},
        "Later Sowing": {"Day": "30", "Month": "4"},
        "All year": "No",
        "Sowing rate": {"Value": "25", "Unit": "kg/ha"},
        "Growing period": {"Value": "120 - 150", "Period": "days"},
        "Early harvest": {"Day": "1", "Month": "8"},
        "Late harvest": {"Day": "30", "Month": "9"},
        "Temperature": {"Min": "8-10", "Optimal": "18-27", "Max": "32-35"},
        "Precipitation": {"Value": "500 - 800", "Unit": "mm"}
    },
    {
        "Country Name": "Kenya",
        "Crop": "Wheat",
        "AgroEcological Zone": "Highlands",
        "Early Sowing": {"Day": "1", "Month": "12"},
        "Later Sowing": {"Day": "31", "Month": "1"},
        "Temperature": {"Min": "0-3", "Optimal": "12-22", "Max": "30-32"}
    },
    {
        "Country Name": "Kenya",
        "Crop": "Potato",
        "AgroEcological Zone": "Highlands",
        "Early Sowing": {"Day": "1", "Month": "4"},
        "Later Sowing": {"Day": "31", "Month": "5"},
        "Temperature": {"Min": "4-7", "Optimal": "15-20", "Max": "not recorded"}
    },
    {
        "Country Name": "Kenya",
        "Crop": "Cassava",
        "AgroEcological Zone": "Coast",
        "Early Sowing": {"Day": "1", "Month": "3"},
        "Later Sowing": {"Day": "30", "Month": "5"},
        "Temperature": {"Min": "10-15", "Optimal": "25-29", "Max": "35-40"}
    }
]"#;

fn catalog_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

fn date(month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(month, day).unwrap()
}

#[test]
fn test_reference_scenario() {
    let raw = RawTemperatureRanges::new("0-5", "15-25", "35-40");
    let profile = parse_temperature_profile(&raw).unwrap();
    let scorer = TemperatureScorer::new();

    assert_eq!(scorer.score(&TemperatureSample::new(20.0, 10.0, 30.0), &profile), 1.0);

    let warm = scorer.score(&TemperatureSample::new(30.0, 10.0, 30.0), &profile);
    assert!((warm - 0.5).abs() < EPSILON);

    let scorching = TemperatureSample::new(30.0, 10.0, 45.0);
    assert_eq!(scorer.score(&scorching, &profile), 0.0);

    let report = DangerAssessor::new().assess(&scorching, &profile);
    assert!(report.extreme_heat);
    assert!(report.heat_stress);
    assert!((aggregate_risk(&report) - 0.7).abs() < EPSILON);
}

#[test]
fn test_range_parsing_round_trip() {
    for (low, high) in [(0.0, 5.0), (-3.5, 2.0), (12.25, 30.0), (-10.0, -4.0)] {
        let parsed = parse_range(&format!("{}-{}", low, high)).unwrap();
        assert_eq!((parsed.min, parsed.max), (low, high));
    }
}

#[test]
fn test_sowing_window_wraparound() {
    let scorer = SowingWindowScorer::new();
    let window = SowingWindow::new(date(12, 1), date(1, 31));

    assert_eq!(scorer.score(date(12, 15), &window), 1.0);
    assert_eq!(scorer.score(date(1, 10), &window), 1.0);
    assert!(scorer.score(date(6, 15), &window) < 1.0);
}

#[test]
fn test_risk_never_exceeds_one() {
    let raw = RawTemperatureRanges::new("5-8", "15-20", "25-28");
    let profile = parse_temperature_profile(&raw).unwrap();

    // Frost and a heat spike in the same period trips all four flags
    let report = DangerAssessor::new().assess(&TemperatureSample::new(15.0, -4.0, 35.0), &profile);
    assert!(report.freezing_risk && report.cold_stress && report.heat_stress && report.extreme_heat);
    assert_eq!(aggregate_risk(&report), 1.0);
}

#[tokio::test]
async fn test_recommend_from_catalog_file() {
    let file = catalog_file();
    let catalog = CatalogReader::new().read_catalog(file.path()).await.unwrap();
    let sample = TemperatureSample::from_readings(&[16.0, 20.0, 24.0, 22.0, 18.0]).unwrap();

    let processor = RecommendationProcessor::new(2);
    let first = processor
        .recommend(&catalog, "Kenya", "Highlands", &sample, date(4, 10), None)
        .unwrap();

    let names: Vec<&str> = first.recommendations.iter().map(|r| r.crop.as_str()).collect();
    // Wheat scores 0.5 (ideal temperature, far outside its window)
    assert_eq!(names, vec!["Maize", "Wheat"]);
    assert!((first.recommendations[0].suitability - 1.0).abs() < EPSILON);
    assert!((first.recommendations[1].suitability - 0.5).abs() < EPSILON);

    // Potato has an unparseable maximum range
    assert_eq!(first.skipped.len(), 1);
    assert_eq!(first.skipped[0].crop, "Potato");

    let second = processor
        .recommend(&catalog, "Kenya", "Highlands", &sample, date(4, 10), None)
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_endangered_from_catalog_file() {
    let file = catalog_file();
    let catalog = CatalogReader::new().read_catalog(file.path()).await.unwrap();
    let sample = TemperatureSample::from_readings(&[6.0, 14.0, 29.0]).unwrap();

    let report = EndangermentProcessor::new(2)
        .find_endangered(&catalog, "Kenya", "Highlands", &sample, date(4, 10), None)
        .unwrap();

    // Wheat is out of season, Potato is malformed
    assert_eq!(report.endangered_crops.len(), 1);
    let maize = &report.endangered_crops[0];
    assert_eq!(maize.crop, "Maize");
    assert!(maize.details.risks.cold_stress);
    assert!(maize.details.risks.heat_stress);
    assert!((maize.risk_level - 0.6).abs() < EPSILON);
    assert_eq!(maize.details.sowing_dates.early, "15/3");

    let json = JsonWriter::with_pretty(false).to_string(&report).unwrap();
    assert!(json.contains("\"endangeredCrops\""));
    assert!(json.contains("\"riskLevel\":0.6"));
}

#[tokio::test]
async fn test_catalog_queries() {
    let file = catalog_file();
    let catalog = CatalogReader::new().read_catalog(file.path()).await.unwrap();
    let query = CatalogQuery::new(&catalog);

    assert_eq!(query.countries(), vec!["Kenya"]);
    assert_eq!(
        query.crops(Some("KENYA"), Some("highlands")).unwrap().crops,
        vec!["Maize", "Potato", "Wheat"]
    );
    assert_eq!(
        query.regions(Some("Kenya"), None).unwrap().regions,
        vec!["Coast", "Highlands"]
    );

    let sowing = query.sowing_info("Kenya", "Maize", "Highlands").unwrap();
    assert_eq!(sowing.early_sowing.formatted_date.as_deref(), Some("15 March"));

    let harvest = query.harvest_info("Kenya", "Maize", "Highlands").unwrap();
    assert_eq!(harvest.late_harvest.formatted_date.as_deref(), Some("30 September"));
}

#[tokio::test]
async fn test_activity_calendar_from_catalog_file() {
    let file = catalog_file();
    let catalog = CatalogReader::new().read_catalog(file.path()).await.unwrap();
    let maize = CatalogQuery::new(&catalog)
        .find_record("Kenya", "Maize", "Highlands")
        .unwrap();

    let planner = ActivityPlanner::new();
    let reference = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
    let calendar = planner.farming_calendar(maize, None, reference).unwrap();

    // Season already over: schedule starts at next year's early sowing
    assert_eq!(
        calendar.activities.sowing_date,
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    );
    assert_eq!(calendar.activities.irrigation.len(), 15);
    assert!(!calendar.weather_integration.forecast_used);

    let dry_frost = FieldConditions::new(4.0, 45.0, 120.0);
    let kinds: Vec<AlertKind> = planner
        .alerts(maize, &dry_frost)
        .unwrap()
        .into_iter()
        .map(|a| a.kind)
        .collect();
    assert_eq!(kinds, vec![AlertKind::TemperatureLow, AlertKind::PrecipitationLow]);
}

#[test]
fn test_invalid_dates_rejected_on_deserialize() {
    assert!(serde_json::from_str::<CalendarDate>(r#"{"month":13,"day":40}"#).is_err());
    assert!(serde_json::from_str::<CalendarDate>(r#"{"month":12,"day":31}"#).is_ok());
}
