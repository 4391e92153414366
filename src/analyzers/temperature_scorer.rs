use crate::models::{CropTemperatureProfile, SuitabilityScore, TemperatureSample};
use crate::utils::constants::TEMPERATURE_DECAY_DEGREES;

/// Scores how well a temperature sample suits a crop's tolerance bands
///
/// A sample whose extremes leave the crop's survivable range scores 0. An
/// average inside the optimal band scores 1. Anything else decays linearly
/// with distance from the nearer optimal edge, reaching 0 after
/// `decay_degrees`.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureScorer {
    decay_degrees: f64,
}

impl TemperatureScorer {
    pub fn new() -> Self {
        Self {
            decay_degrees: TEMPERATURE_DECAY_DEGREES,
        }
    }

    pub fn with_decay_degrees(decay_degrees: f64) -> Self {
        Self { decay_degrees }
    }

    pub fn score(
        &self,
        sample: &TemperatureSample,
        profile: &CropTemperatureProfile,
    ) -> SuitabilityScore {
        if sample.max > profile.absolute_max() || sample.min < profile.absolute_min() {
            return 0.0;
        }

        if profile.optimal.contains(sample.avg) {
            return 1.0;
        }

        let distance = profile.optimal.distance_to_nearest_edge(sample.avg);
        (1.0 - distance / self.decay_degrees).max(0.0)
    }
}

impl Default for TemperatureScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TemperatureRange;

    const EPSILON: f64 = 1e-9;

    fn profile() -> CropTemperatureProfile {
        CropTemperatureProfile::new(
            TemperatureRange::new(0.0, 5.0),
            TemperatureRange::new(15.0, 25.0),
            TemperatureRange::new(35.0, 40.0),
        )
    }

    #[test]
    fn test_inside_optimal_band() {
        let scorer = TemperatureScorer::new();
        for avg in [15.0, 20.0, 25.0] {
            let sample = TemperatureSample::new(avg, 10.0, 30.0);
            assert_eq!(scorer.score(&sample, &profile()), 1.0);
        }
    }

    #[test]
    fn test_linear_decay() {
        let scorer = TemperatureScorer::new();

        let warm = TemperatureSample::new(30.0, 10.0, 30.0);
        assert!((scorer.score(&warm, &profile()) - 0.5).abs() < EPSILON);

        let cool = TemperatureSample::new(12.0, 10.0, 30.0);
        assert!((scorer.score(&cool, &profile()) - 0.7).abs() < EPSILON);

        let far = TemperatureSample::new(2.0, 1.0, 30.0);
        assert_eq!(scorer.score(&far, &profile()), 0.0);
    }

    #[test]
    fn test_score_non_increasing_outside_band() {
        let scorer = TemperatureScorer::new();
        let mut previous = 1.0;
        let mut avg = 25.5;
        while avg < 40.0 {
            let score = scorer.score(&TemperatureSample::new(avg, 10.0, 39.0), &profile());
            assert!(score <= previous);
            assert!((0.0..=1.0).contains(&score));
            previous = score;
            avg += 0.5;
        }
    }

    #[test]
    fn test_hard_bound_rejection() {
        let scorer = TemperatureScorer::new();

        let too_hot = TemperatureSample::new(20.0, 10.0, 45.0);
        assert_eq!(scorer.score(&too_hot, &profile()), 0.0);

        let too_cold = TemperatureSample::new(20.0, -1.0, 30.0);
        assert_eq!(scorer.score(&too_cold, &profile()), 0.0);

        // Edges of the survivable range are still acceptable
        let edge = TemperatureSample::new(20.0, 0.0, 40.0);
        assert_eq!(scorer.score(&edge, &profile()), 1.0);
    }

    #[test]
    fn test_custom_decay() {
        let scorer = TemperatureScorer::with_decay_degrees(20.0);
        let warm = TemperatureSample::new(30.0, 10.0, 30.0);
        assert!((scorer.score(&warm, &profile()) - 0.75).abs() < EPSILON);
    }
}
