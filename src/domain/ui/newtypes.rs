// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// HideDelay
// =============================================================================

/// Controls auto-hide delay bounds (in milliseconds).
pub mod hide_delay_bounds {
    /// Minimum delay before controls hide.
    pub const MIN_MS: u64 = 500;
    /// Maximum delay before controls hide.
    pub const MAX_MS: u64 = 30_000;
    /// Default delay before controls hide.
    pub const DEFAULT_MS: u64 = 3_000;
}

/// Quiet period after the last interaction before the overlay hides.
///
/// # Example
///
/// ```
/// use watch_player::domain::ui::HideDelay;
///
/// assert_eq!(HideDelay::default().as_duration().as_millis(), 3000);
/// assert_eq!(HideDelay::new(100).value_ms(), 500); // clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn new(ms: u64) -> Self {
        Self(ms.clamp(hide_delay_bounds::MIN_MS, hide_delay_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn value_ms(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(hide_delay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns true if both sides are finite and strictly positive.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle, origin at the container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns true if the rectangle covers no area.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// =============================================================================
// Tests
// =============================================================================
