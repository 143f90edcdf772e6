// SPDX-License-Identifier: MPL-2.0
//! Media resource port definition.
//!
//! This module defines the [`MediaResource`] trait that models the platform's
//! live media object (an HTML video element, a native player instance, ...),
//! plus the [`MediaEvent`] signals that object emits.
//!
//! # Design Notes
//!
//! - Setters return nothing. A call is a *request*; whether it took effect is
//!   only observable through a later [`MediaEvent`].
//! - Events are plain signals. Whoever reacts to one reads the new values back
//!   through the getters, exactly like DOM media events.
//! - `duration()` may be `NaN` or infinite until metadata is known.

use std::fmt;

// =============================================================================
// TimeRange
// =============================================================================

/// A contiguous span of media time the resource holds data for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    /// Start of the span in seconds.
    pub start: f64,
    /// End of the span in seconds.
    pub end: f64,
}

impl TimeRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns true if `secs` lies inside the span (end inclusive).
    #[must_use]
    pub fn contains(&self, secs: f64) -> bool {
        secs >= self.start && secs <= self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}s, {:.2}s]", self.start, self.end)
    }
}

// =============================================================================
// MediaEvent
// =============================================================================

/// Signals emitted by a media resource, delivered in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Duration and natural dimensions are now known.
    LoadedMetadata,
    /// The resource left the paused state.
    Play,
    /// The resource entered the paused state.
    Pause,
    /// The playback position changed.
    TimeUpdate,
    /// More data was buffered.
    Progress,
    /// Playback stalled waiting for data.
    Waiting,
    /// Enough data is available to (re)start playback.
    CanPlay,
    /// A seek started; earlier positions and buffered ranges are stale.
    Seeking,
    /// A seek completed.
    Seeked,
    /// Playback reached the end and loop is off.
    Ended,
    /// Volume or muted flag changed.
    VolumeChange,
    /// Playback rate changed.
    RateChange,
}

// =============================================================================
// MediaResource Trait
// =============================================================================

/// Port for the platform's live media object.
///
/// Only the playback engine adapter talks to an implementation of this trait;
/// everything else goes through the adapter.
///
/// # Example
///
/// ```ignore
/// use watch_player::application::port::MediaResource;
///
/// fn rewind(resource: &mut impl MediaResource) {
///     resource.set_current_time(0.0);
///     // No return value: wait for `MediaEvent::Seeked` to observe the result.
/// }
/// ```
pub trait MediaResource {
    /// Requests playback to start or resume.
    fn play(&mut self);

    /// Requests playback to pause.
    fn pause(&mut self);

    /// Requests a seek to `secs`.
    fn set_current_time(&mut self, secs: f64);

    /// Sets the output volume (0.0–1.0).
    fn set_volume(&mut self, volume: f32);

    /// Sets the muted flag.
    fn set_muted(&mut self, muted: bool);

    /// Sets the playback rate multiplier.
    fn set_playback_rate(&mut self, rate: f64);

    /// Sets whether playback restarts from zero instead of ending.
    fn set_loop(&mut self, enabled: bool);

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Total duration in seconds; `NaN` before metadata.
    fn duration(&self) -> f64;

    /// Buffered spans, in ascending order.
    fn buffered(&self) -> Vec<TimeRange>;

    /// Intrinsic frame size in pixels; `(0, 0)` before metadata.
    fn natural_size(&self) -> (u32, u32);

    /// Current output volume.
    fn volume(&self) -> f32;

    /// Current muted flag.
    fn muted(&self) -> bool;

    /// Current playback rate.
    fn playback_rate(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_range_contains_is_end_inclusive() {
        let range = TimeRange::new(10.0, 20.0);
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(20.5));
        assert!(!range.contains(9.9));
    }

    #[test]
    fn time_range_display() {
        assert_eq!(TimeRange::new(0.0, 1.5).to_string(), "[0.00s, 1.50s]");
    }
}
