// SPDX-License-Identifier: MPL-2.0
//! Letterbox / pillarbox fitting of the video frame inside its container.

use crate::domain::ui::{Rect, Size};

/// Computes the largest rectangle with the media's aspect ratio that fits
/// inside `container`, centred on both axes.
///
/// - An undrawable container (zero, negative or non-finite side) yields an
///   empty rectangle.
/// - An undrawable natural size (metadata not loaded) fills the container,
///   since there is no aspect ratio to preserve yet.
///
/// # Examples
///
/// ```
/// use watch_player::domain::ui::Size;
/// use watch_player::video_player::fit::fit_rect;
///
/// let rect = fit_rect(Size::new(800.0, 800.0), Size::new(1920.0, 1080.0));
/// assert_eq!((rect.width.round(), rect.height.round()), (800.0, 450.0));
/// assert_eq!((rect.x.round(), rect.y.round()), (0.0, 175.0));
/// ```
#[must_use]
pub fn fit_rect(container: Size, natural: Size) -> Rect {
    if !container.is_drawable() {
        return Rect::default();
    }
    if !natural.is_drawable() {
        return Rect {
            x: 0.0,
            y: 0.0,
            width: container.width,
            height: container.height,
        };
    }

    let scale = (container.width / natural.width).min(container.height / natural.height);
    // Snap the constrained axis to the container edge so float error never
    // leaves a sub-pixel bar on the side that should be flush.
    let (width, height) = if container.width / natural.width <= container.height / natural.height
    {
        (container.width, natural.height * scale)
    } else {
        (natural.width * scale, container.height)
    };

    Rect {
        x: (container.width - width) / 2.0,
        y: (container.height - height) / 2.0,
        width,
        height,
    }
}

/// Convenience wrapper for pixel dimensions reported by a media resource.
#[must_use]
pub fn fit_natural_pixels(container: Size, natural: (u32, u32)) -> Rect {
    fit_rect(container, Size::new(natural.0 as f32, natural.1 as f32))
}
