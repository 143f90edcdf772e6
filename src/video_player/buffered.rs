// SPDX-License-Identifier: MPL-2.0
//! Buffered-progress tracking.
//!
//! The raw buffered ranges reported by a resource can shrink for reasons that
//! are not user visible (range coalescing, eviction). The progress bar should
//! only move backwards when a seek genuinely invalidated what was buffered, so
//! [`BufferedProgress`] keeps a high-water mark that is released once per
//! confirmed seek.

use crate::application::port::TimeRange;

/// Furthest buffered end across all ranges, in seconds.
#[must_use]
pub fn furthest_end(ranges: &[TimeRange]) -> Option<f64> {
    ranges
        .iter()
        .map(|range| range.end)
        .filter(|end| end.is_finite())
        .reduce(f64::max)
}

/// Furthest buffered end divided by `duration`, clamped to [0, 1].
///
/// Returns `0.0` for an unknown, zero or non-finite duration.
#[must_use]
pub fn buffered_fraction(ranges: &[TimeRange], duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    furthest_end(ranges).map_or(0.0, |end| (end / duration).clamp(0.0, 1.0))
}

/// Monotonic buffered fraction with an explicit seek reset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BufferedProgress {
    fraction: f64,
    /// Set by a seek; the next reading is taken as-is, even if lower.
    reset_pending: bool,
}

impl BufferedProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fraction in [0, 1].
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Marks prior buffered data as invalidated by a seek.
    pub fn invalidate(&mut self) {
        self.reset_pending = true;
    }

    /// Feeds a new raw reading and returns the fraction to display.
    pub fn update(&mut self, raw: f64) -> f64 {
        let raw = if raw.is_finite() {
            raw.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if self.reset_pending {
            self.reset_pending = false;
            self.fraction = raw;
        } else if raw > self.fraction {
            self.fraction = raw;
        }
        self.fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn fraction_uses_furthest_range() {
        let ranges = [TimeRange::new(0.0, 30.0), TimeRange::new(60.0, 90.0)];
        assert_abs_diff_eq!(buffered_fraction(&ranges, 120.0), 0.75);
    }

    #[test]
    fn fraction_is_zero_without_duration() {
        let ranges = [TimeRange::new(0.0, 30.0)];
        assert_abs_diff_eq!(buffered_fraction(&ranges, 0.0), 0.0);
        assert_abs_diff_eq!(buffered_fraction(&ranges, f64::NAN), 0.0);
        assert_abs_diff_eq!(buffered_fraction(&ranges, f64::INFINITY), 0.0);
        assert_abs_diff_eq!(buffered_fraction(&[], 120.0), 0.0);
    }

    #[test]
    fn fraction_is_clamped_to_one() {
        let ranges = [TimeRange::new(0.0, 130.0)];
        assert_abs_diff_eq!(buffered_fraction(&ranges, 120.0), 1.0);
    }

    #[test]
    fn progress_never_decreases_between_seeks() {
        let mut progress = BufferedProgress::new();
        let readings = [0.1, 0.3, 0.2, 0.25, 0.5, 0.0];
        let mut last = 0.0;
        for raw in readings {
            let shown = progress.update(raw);
            assert!(shown >= last, "{shown} dropped below {last}");
            last = shown;
        }
        assert_abs_diff_eq!(progress.fraction(), 0.5);
    }

    #[test]
    fn seek_allows_one_decrease_then_monotonic_again() {
        let mut progress = BufferedProgress::new();
        progress.update(0.8);

        progress.invalidate();
        assert_abs_diff_eq!(progress.update(0.1), 0.1);

        // Back to high-water behaviour.
        assert_abs_diff_eq!(progress.update(0.05), 0.1);
        assert_abs_diff_eq!(progress.update(0.4), 0.4);
    }

    #[test]
    fn non_finite_reading_is_zero() {
        let mut progress = BufferedProgress::new();
        assert_abs_diff_eq!(progress.update(f64::NAN), 0.0);
    }
}
