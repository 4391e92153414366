use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::error::{AdvisorError, Result};
use crate::models::crop::parse_calendar_number;
use crate::models::{CalendarCell, CropRecord};
use crate::utils::calendar::month_name;
use crate::utils::constants::NO_FILTER;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropFilters {
    pub country: String,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionFilters {
    pub country: String,
    pub crop: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingMetadata<F> {
    pub total: usize,
    pub filters: F,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropListing {
    pub crops: Vec<String>,
    pub metadata: ListingMetadata<CropFilters>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionListing {
    pub regions: Vec<String>,
    pub metadata: ListingMetadata<RegionFilters>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInfo {
    pub day: String,
    pub month: String,
    /// `"15 March"`; absent when the month cell is empty
    pub formatted_date: Option<String>,
}

impl From<&CalendarCell> for DateInfo {
    fn from(cell: &CalendarCell) -> Self {
        let formatted_date = cell.has_month().then(|| match cell.to_calendar_date() {
            Ok(date) => date.formatted(),
            Err(_) => {
                let name = parse_calendar_number(&cell.month, "month")
                    .ok()
                    .and_then(month_name)
                    .unwrap_or_default();
                format!("{} {}", cell.day.trim(), name)
            }
        });

        Self {
            day: cell.day.clone(),
            month: cell.month.clone(),
            formatted_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SowingRateInfo {
    pub value: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SowingInfo {
    pub early_sowing: DateInfo,
    pub late_sowing: DateInfo,
    pub sowing_rate: SowingRateInfo,
    pub additional_information: String,
    pub all_year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowingPeriodInfo {
    pub value: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestInfo {
    pub early_harvest: DateInfo,
    pub late_harvest: DateInfo,
    pub growing_period: GrowingPeriodInfo,
}

/// Read-only lookups over a loaded crop catalog
pub struct CatalogQuery<'a> {
    records: &'a [CropRecord],
}

impl<'a> CatalogQuery<'a> {
    pub fn new(records: &'a [CropRecord]) -> Self {
        Self { records }
    }

    /// Distinct countries in catalog order
    pub fn countries(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.country.as_str()))
            .map(|r| r.country.clone())
            .collect()
    }

    /// Distinct crop names, optionally narrowed to a country and a zone
    /// within it. Matching is case-insensitive.
    pub fn crops(&self, country: Option<&str>, region: Option<&str>) -> Result<CropListing> {
        let mut selected: Vec<&CropRecord> = self.records.iter().collect();

        if let Some(country) = country {
            selected.retain(|r| r.country.eq_ignore_ascii_case(country));
            if selected.is_empty() {
                return Err(AdvisorError::NotFound(format!(
                    "No crops found for country: {}",
                    country
                )));
            }

            if let Some(region) = region {
                selected.retain(|r| r.agro_ecological_zone.eq_ignore_ascii_case(region));
                if selected.is_empty() {
                    return Err(AdvisorError::NotFound(format!(
                        "No crops found for region: {} in country: {}",
                        region, country
                    )));
                }
            }
        }

        let crops = sorted_unique(selected.iter().map(|r| r.crop.as_str()));

        Ok(CropListing {
            metadata: ListingMetadata {
                total: crops.len(),
                filters: CropFilters {
                    country: country.unwrap_or(NO_FILTER).to_string(),
                    region: region.unwrap_or(NO_FILTER).to_string(),
                },
            },
            crops,
        })
    }

    /// Distinct agro-ecological zones, optionally narrowed to a country and
    /// a crop grown there. Matching is case-insensitive.
    pub fn regions(&self, country: Option<&str>, crop: Option<&str>) -> Result<RegionListing> {
        let mut selected: Vec<&CropRecord> = self.records.iter().collect();

        if let Some(country) = country {
            selected.retain(|r| r.country.eq_ignore_ascii_case(country));
            if selected.is_empty() {
                return Err(AdvisorError::NotFound(format!(
                    "No regions found for country: {}",
                    country
                )));
            }

            if let Some(crop) = crop {
                selected.retain(|r| r.crop.eq_ignore_ascii_case(crop));
                if selected.is_empty() {
                    return Err(AdvisorError::NotFound(format!(
                        "No regions found for crop: {} in country: {}",
                        crop, country
                    )));
                }
            }
        }

        let regions = sorted_unique(selected.iter().map(|r| r.agro_ecological_zone.as_str()));

        Ok(RegionListing {
            metadata: ListingMetadata {
                total: regions.len(),
                filters: RegionFilters {
                    country: country.unwrap_or(NO_FILTER).to_string(),
                    crop: crop.unwrap_or(NO_FILTER).to_string(),
                },
            },
            regions,
        })
    }

    /// Every record for an exact crop/country pair, across all zones
    pub fn crop_data(&self, country: &str, crop: &str) -> Vec<&'a CropRecord> {
        self.records
            .iter()
            .filter(|r| r.crop == crop && r.country == country)
            .collect()
    }

    pub fn find_record(&self, country: &str, crop: &str, region: &str) -> Result<&'a CropRecord> {
        self.records
            .iter()
            .find(|r| r.crop == crop && r.is_in_region(country, region))
            .ok_or_else(|| {
                AdvisorError::NotFound("No data found for the specified criteria".to_string())
            })
    }

    pub fn sowing_info(&self, country: &str, crop: &str, region: &str) -> Result<SowingInfo> {
        let record = self.find_record(country, crop, region)?;

        Ok(SowingInfo {
            early_sowing: DateInfo::from(&record.early_sowing),
            late_sowing: DateInfo::from(&record.later_sowing),
            sowing_rate: SowingRateInfo {
                value: record.sowing_rate.value.clone(),
                unit: record.sowing_rate.unit.clone(),
            },
            additional_information: record.additional_information.clone(),
            all_year: record.all_year.clone(),
        })
    }

    pub fn harvest_info(&self, country: &str, crop: &str, region: &str) -> Result<HarvestInfo> {
        let record = self.find_record(country, crop, region)?;

        Ok(HarvestInfo {
            early_harvest: DateInfo::from(&record.early_harvest),
            late_harvest: DateInfo::from(&record.late_harvest),
            growing_period: GrowingPeriodInfo {
                value: record.growing_period.value.clone(),
                period: record.growing_period.period.clone(),
            },
        })
    }
}

fn sorted_unique<'s>(values: impl Iterator<Item = &'s str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
