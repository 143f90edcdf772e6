// SPDX-License-Identifier: MPL-2.0
//! Overlay button styles.

use crate::ui::design_tokens::{alpha, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn rounded(background: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::TEXT,
        border: Border {
            radius: radius::BUTTON.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Translucent button used for every overlay control.
pub fn control(_theme: &Theme, status: button::Status) -> button::Style {
    let a = match status {
        button::Status::Active => alpha::BUTTON_REST,
        button::Status::Hovered => alpha::BUTTON_HOVER,
        button::Status::Pressed => alpha::BUTTON_PRESSED,
        button::Status::Disabled => alpha::HAIRLINE,
    };
    rounded(Color {
        a,
        ..palette::STAGE
    })
}

/// Toggles that are on (mute, loop, settings, current rate).
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => rounded(palette::ACCENT_HOVER),
        button::Status::Active | button::Status::Disabled => rounded(palette::ACCENT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_darkens_on_hover() {
        let theme = Theme::Dark;
        let rest = control(&theme, button::Status::Active);
        let hover = control(&theme, button::Status::Hovered);
        let alpha_of = |style: button::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha_of(hover) > alpha_of(rest));
    }

    #[test]
    fn selected_uses_accent() {
        let style = selected(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::ACCENT)));
    }
}
