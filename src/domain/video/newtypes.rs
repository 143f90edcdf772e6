// SPDX-License-Identifier: MPL-2.0
//! Playback value types.
//!
//! [`Volume`] and [`PlaybackRate`] can only hold values the media resource
//! accepts, so the controller never has to re-validate them.

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, where 1.0 = 100%).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f32 = 1.0;
    /// Volume adjustment step per key press (10%).
    pub const STEP: f32 = 0.1;
}

/// Output level in [0, 1]. `NaN` collapses to silence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Clamps `volume` into [0, 1].
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the level is exactly zero.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 <= volume_bounds::MIN
    }

    /// One key step louder, saturating at full volume.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::new(snap_to_hundredths(self.0 + volume_bounds::STEP))
    }

    /// One key step quieter, saturating at silence.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self::new(snap_to_hundredths(self.0 - volume_bounds::STEP))
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// Repeated 0.1 steps drift in f32; without snapping ten presses down from 1.0
// would leave a tiny positive level instead of silence.
fn snap_to_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate presets offered by the settings panel.
pub mod rate_bounds {
    /// The only rates the player accepts.
    pub const PRESETS: &[f64] = &[0.5, 0.75, 1.0, 1.25, 1.5, 2.0];
    /// Default playback rate (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
    /// Tolerance used when matching a requested rate against a preset.
    pub const TOLERANCE: f64 = 0.001;
}

/// Playback rate, guaranteed to be one of [`rate_bounds::PRESETS`].
///
/// Unlike [`Volume`], out-of-set values are not clamped: [`PlaybackRate::from_value`]
/// rejects them so callers can treat the request as a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Returns the preset matching `rate`, or `None` if it is not in the set.
    #[must_use]
    pub fn from_value(rate: f64) -> Option<Self> {
        rate_bounds::PRESETS
            .iter()
            .find(|&&preset| (preset - rate).abs() < rate_bounds::TOLERANCE)
            .map(|&preset| Self(preset))
    }

    /// Returns the rate as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Iterates over every accepted rate in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        rate_bounds::PRESETS.iter().map(|&preset| Self(preset))
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(rate_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
