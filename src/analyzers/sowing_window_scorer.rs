use crate::models::{CalendarDate, SowingWindow, SuitabilityScore};
use crate::utils::constants::SOWING_DECAY_DAYS;

/// Scores how well a calendar date fits a crop's sowing window
///
/// Dates inside the window score 1, including windows that run across the
/// new year. Outside it the score decays linearly with the ordinal distance
/// to the nearer window edge and bottoms out at 0 after `decay_days`.
#[derive(Debug, Clone, Copy)]
pub struct SowingWindowScorer {
    decay_days: f64,
}

impl SowingWindowScorer {
    pub fn new() -> Self {
        Self {
            decay_days: SOWING_DECAY_DAYS,
        }
    }

    pub fn score(&self, current: CalendarDate, window: &SowingWindow) -> SuitabilityScore {
        if window.contains(current) {
            return 1.0;
        }

        let current = i64::from(current.day_of_year());
        let early = i64::from(window.early.day_of_year());
        let late = i64::from(window.late.day_of_year());

        // Plain ordinal distance; it does not wrap around the year end.
        let distance = (current - early).abs().min((current - late).abs());

        (1.0 - distance as f64 / self.decay_days).max(0.0)
    }
}

impl Default for SowingWindowScorer {
    fn default() -> Self {
        Self::new()
    }
}
