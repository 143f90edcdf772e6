// SPDX-License-Identifier: MPL-2.0
//! Container styles for the player surface and its overlay bars.

use crate::ui::design_tokens::{alpha, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn scrim() -> Background {
    Background::Color(Color {
        a: alpha::SCRIM,
        ..palette::STAGE
    })
}

/// Letterbox area around the frame.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STAGE)),
        text_color: Some(palette::TEXT),
        ..Default::default()
    }
}

/// The fitted frame rectangle.
pub fn frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::FRAME)),
        ..Default::default()
    }
}

/// Top and bottom control bars.
pub fn bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(scrim()),
        text_color: Some(palette::TEXT),
        ..Default::default()
    }
}

/// Settings panel and the loading/buffering badge.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(scrim()),
        text_color: Some(palette::TEXT),
        border: Border {
            color: Color {
                a: alpha::HAIRLINE,
                ..palette::TEXT
            },
            width: 1.0,
            radius: radius::PANEL.into(),
        },
        ..Default::default()
    }
}
