use crate::error::{AdvisorError, Result};
use crate::models::CropRecord;
use crate::processors::report::SkippedCrop;
use crate::utils::progress::ProgressReporter;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::warn;

/// Runs a per-crop evaluation over a rayon pool, isolating failures
///
/// One bad record never aborts the batch: its error is logged and returned
/// as a [`SkippedCrop`] next to the successful results. Output order
/// follows input order.
pub struct CropEvaluator {
    max_workers: usize,
}

impl CropEvaluator {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
        }
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    pub fn evaluate<T, F>(
        &self,
        crops: &[&CropRecord],
        progress: Option<&ProgressReporter>,
        evaluate_crop: F,
    ) -> Result<(Vec<T>, Vec<SkippedCrop>)>
    where
        T: Send,
        F: Fn(&CropRecord) -> Result<T> + Sync + Send,
    {
        let processed_count = AtomicUsize::new(0);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| AdvisorError::Config(e.to_string()))?;

        let outcomes: Vec<Result<T>> = pool.install(|| {
            crops
                .par_iter()
                .map(|crop| {
                    let result = evaluate_crop(*crop);

                    let count = processed_count.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(p) = progress {
                        p.update(count as u64);
                    }

                    result
                })
                .collect()
        });

        let mut evaluated = Vec::with_capacity(outcomes.len());
        let mut skipped = Vec::new();

        for (crop, outcome) in crops.iter().zip(outcomes) {
            match outcome {
                Ok(value) => evaluated.push(value),
                Err(e) => {
                    warn!(
                        crop = %crop.crop,
                        zone = %crop.agro_ecological_zone,
                        error = %e,
                        "skipping crop record"
                    );
                    skipped.push(SkippedCrop {
                        crop: crop.crop.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok((evaluated, skipped))
    }
}

impl Default for CropEvaluator {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(crop: &str) -> CropRecord {
        CropRecord {
            country: "Kenya".to_string(),
            crop: crop.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_failures_are_isolated() {
        let records = vec![record("Maize"), record("Bad"), record("Sorghum")];
        let crops: Vec<&CropRecord> = records.iter().collect();

        let (names, skipped) = CropEvaluator::new(2)
            .evaluate(&crops, None, |crop| {
                if crop.crop == "Bad" {
                    Err(AdvisorError::InvalidFormat("broken".to_string()))
                } else {
                    Ok(crop.crop.clone())
                }
            })
            .unwrap();

        assert_eq!(names, vec!["Maize".to_string(), "Sorghum".to_string()]);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].crop, "Bad");
        assert_eq!(skipped[0].reason, "Invalid data format: broken");
    }

    #[test]
    fn test_zero_workers_clamped() {
        assert_eq!(CropEvaluator::new(0).max_workers(), 1);
    }
}
