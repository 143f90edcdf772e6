// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the player overlay.
//!
//! Colors, opacities and sizes used by the controls. Components read these
//! instead of hard-coding numbers so the overlay stays visually consistent.
//!
//! ```
//! use watch_player::ui::design_tokens::{alpha, palette};
//! use iced::Color;
//!
//! let scrim = Color {
//!     a: alpha::SCRIM,
//!     ..palette::STAGE
//! };
//! assert!(scrim.a < 1.0);
//! ```

use iced::Color;

/// Player colors. The stage is pure black so letterbox bars disappear.
pub mod palette {
    use super::Color;

    pub const STAGE: Color = Color::BLACK;
    /// Placeholder drawn where the decoded frame goes.
    pub const FRAME: Color = Color::from_rgb(0.08, 0.08, 0.1);
    pub const TEXT: Color = Color::WHITE;
    pub const ACCENT: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.4, 0.7, 1.0);
}

/// Alpha values applied to [`palette`] colors.
pub mod alpha {
    pub const HAIRLINE: f32 = 0.2;
    pub const BUTTON_REST: f32 = 0.45;
    pub const SCRIM: f32 = 0.65;
    pub const BUTTON_HOVER: f32 = 0.8;
    pub const BUTTON_PRESSED: f32 = 0.9;
}

// 4px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    /// Thickness of the buffered-range bar under the scrubber.
    pub const TIMELINE_TRACK: f32 = 4.0;
    pub const VOLUME_SLIDER_WIDTH: f32 = 80.0;
}

pub mod typography {
    /// Media title in the top bar.
    pub const TITLE_MD: f32 = 20.0;
    /// Control labels and time display.
    pub const BODY: f32 = 14.0;
    /// Description and hints.
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const BUTTON: f32 = 4.0;
    pub const PANEL: f32 = 8.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_doubles_per_step() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }

    #[test]
    fn button_feedback_gets_more_opaque() {
        assert!(alpha::BUTTON_REST < alpha::BUTTON_HOVER);
        assert!(alpha::BUTTON_HOVER < alpha::BUTTON_PRESSED);
        assert!(alpha::HAIRLINE < alpha::SCRIM);
    }
}
