// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Value bounds are owned by the domain newtypes; this module re-states them
//! under configuration names and adds the constants that only the
//! application shell cares about.
//!
//! # Categories
//!
//! - **Volume**: Audio level and key step
//! - **Playback**: Rate and skip step
//! - **Controls**: Overlay auto-hide delay
//! - **Shell**: Window size and platform tick

use crate::domain::ui::newtypes::hide_delay_bounds;
use crate::domain::video::newtypes::{rate_bounds, volume_bounds};

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = volume_bounds::DEFAULT;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = volume_bounds::MIN;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = volume_bounds::MAX;

/// Volume adjustment step per key press (10%).
pub const VOLUME_STEP: f32 = volume_bounds::STEP;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default playback rate multiplier.
pub const DEFAULT_PLAYBACK_RATE: f64 = rate_bounds::DEFAULT;

/// Seconds skipped by the arrow keys.
pub const SKIP_STEP_SECS: f64 = 10.0;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default quiet period before the overlay hides (in milliseconds).
pub const DEFAULT_HIDE_DELAY_MS: u64 = hide_delay_bounds::DEFAULT_MS;

/// Minimum hide delay (in milliseconds).
pub const MIN_HIDE_DELAY_MS: u64 = hide_delay_bounds::MIN_MS;

/// Maximum hide delay (in milliseconds).
pub const MAX_HIDE_DELAY_MS: u64 = hide_delay_bounds::MAX_MS;

// ==========================================================================
// Shell Defaults
// ==========================================================================

/// Interval at which the host advances the media platform (in milliseconds).
pub const PLATFORM_TICK_MS: u64 = 50;

/// Duration used when no `--duration` is given (in seconds).
pub const DEFAULT_MEDIA_DURATION_SECS: f64 = 90.0;

/// Natural frame size reported by the simulated media.
pub const DEFAULT_NATURAL_SIZE: (u32, u32) = (1920, 1080);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(VOLUME_STEP > 0.0);

    // Playback validation
    assert!(DEFAULT_PLAYBACK_RATE > 0.0);
    assert!(SKIP_STEP_SECS > 0.0);

    // Hide delay validation
    assert!(MIN_HIDE_DELAY_MS > 0);
    assert!(MAX_HIDE_DELAY_MS >= MIN_HIDE_DELAY_MS);
    assert!(DEFAULT_HIDE_DELAY_MS >= MIN_HIDE_DELAY_MS);
    assert!(DEFAULT_HIDE_DELAY_MS <= MAX_HIDE_DELAY_MS);

    // Shell validation
    assert!(PLATFORM_TICK_MS > 0);
    assert!(PLATFORM_TICK_MS < MIN_HIDE_DELAY_MS);
    assert!(DEFAULT_MEDIA_DURATION_SECS > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn volume_defaults_are_valid() {
        assert_abs_diff_eq!(DEFAULT_VOLUME, 1.0);
        assert_abs_diff_eq!(VOLUME_STEP, 0.1);
    }

    #[test]
    fn hide_delay_default_is_three_seconds() {
        assert_eq!(DEFAULT_HIDE_DELAY_MS, 3_000);
    }

    #[test]
    fn skip_step_matches_key_binding() {
        assert_abs_diff_eq!(SKIP_STEP_SECS, crate::video_player::keyboard::SKIP_STEP_SECS);
    }
}
