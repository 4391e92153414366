pub mod activity_planner;
pub mod assessment;
pub mod catalog_query;
pub mod crop_evaluator;
pub mod endangerment_processor;
pub mod recommendation_processor;
pub mod report;

pub use activity_planner::{
    ActivityAlert, ActivityPlan, ActivityPlanner, FarmingCalendar, FertilizationEvent,
    IrrigationEvent, PesticideEvent,
};
pub use assessment::{assess_profile, ProfileAssessment};
pub use catalog_query::{
    CatalogQuery, CropListing, DateInfo, HarvestInfo, RegionListing, SowingInfo,
};
pub use crop_evaluator::CropEvaluator;
pub use endangerment_processor::{CurrentTemperature, EndangeredCrop, EndangermentProcessor, EndangermentReport};
pub use recommendation_processor::{
    CropRecommendation, RecommendationProcessor, RecommendationReport,
};
pub use report::{SkippedCrop, SowingDates, WeatherSummary};
