use crate::error::{AdvisorError, Result};
use crate::models::CropRecord;
use std::path::Path;
use tracing::{debug, info};
use validator::Validate;

/// Loads the crop calendar catalog exported as a JSON array of records
pub struct CatalogReader {
    validate_records: bool,
}

impl CatalogReader {
    pub fn new() -> Self {
        Self {
            validate_records: true,
        }
    }

    pub fn with_validation(validate_records: bool) -> Self {
        Self { validate_records }
    }

    pub async fn read_catalog(&self, path: &Path) -> Result<Vec<CropRecord>> {
        debug!(path = %path.display(), "reading crop catalog");

        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            AdvisorError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;

        let records = self.parse_catalog(&contents)?;
        info!(
            path = %path.display(),
            records = records.len(),
            "loaded crop catalog"
        );

        Ok(records)
    }

    pub fn parse_catalog(&self, contents: &str) -> Result<Vec<CropRecord>> {
        let records: Vec<CropRecord> = serde_json::from_str(contents)?;

        if self.validate_records {
            for (index, record) in records.iter().enumerate() {
                record.validate().inspect_err(|e| {
                    debug!(index, error = %e, "catalog record failed validation");
                })?;
            }
        }

        Ok(records)
    }
}

impl Default for CatalogReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"[
        {
            "Country Name": "Kenya",
            "Crop": "Maize",
            "AgroEcological Zone": "Highlands",
            "Early Sowing": {"Day": "15", "Month": "3"},
            "Later Sowing": {"Day": "30", "Month": "4"},
            "Temperature": {"Min": "8-10", "Optimal": "18-27", "Max": "32-35"}
        },
        {
            "Country Name": "Kenya",
            "Crop": "Beans",
            "AgroEcological Zone": "Highlands"
        }
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let records = CatalogReader::new().parse_catalog(CATALOG).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].crop, "Maize");
        assert_eq!(records[1].temperature.min, "");
    }

    #[test]
    fn test_invalid_record_rejected() {
        let catalog = r#"[{"Country Name": "", "Crop": "Maize"}]"#;
        assert!(matches!(
            CatalogReader::new().parse_catalog(catalog),
            Err(AdvisorError::Validation(_))
        ));
        assert!(CatalogReader::with_validation(false)
            .parse_catalog(catalog)
            .is_ok());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CatalogReader::new().parse_catalog("{not json"),
            Err(AdvisorError::Json(_))
        ));
    }

    #[tokio::test]
    async fn test_read_catalog_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let records = CatalogReader::new().read_catalog(file.path()).await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = CatalogReader::new()
            .read_catalog(Path::new("/nonexistent/catalog.json"))
            .await;
        assert!(matches!(result, Err(AdvisorError::Io(_))));
    }
}
