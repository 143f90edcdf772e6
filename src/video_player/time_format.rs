// SPDX-License-Identifier: MPL-2.0
//! Time display helpers for the overlay.
//!
//! Positions are shown as `m:ss`: minutes are not zero-padded and keep
//! counting past 59, seconds are always two digits.

/// Formats a position in seconds as `m:ss`.
///
/// Negative, `NaN` and infinite inputs format as `0:00`.
///
/// # Examples
///
/// ```
/// use watch_player::video_player::time_format::format_time;
///
/// assert_eq!(format_time(75.4), "1:15");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Like [`format_time`], for values that may be unknown.
#[must_use]
pub fn format_optional_time(seconds: Option<f64>) -> String {
    seconds.map_or_else(|| format_time(0.0), format_time)
}

/// Ratio of `position` to `duration` in [0, 1].
///
/// Yields `0.0` whenever the duration is unknown, zero or not finite so that
/// callers never divide by a bad duration.
#[must_use]
pub fn fraction_of(position: f64, duration: Option<f64>) -> f64 {
    match duration {
        Some(total) if total.is_finite() && total > 0.0 && position.is_finite() => {
            (position / total).clamp(0.0, 1.0)
        }
        _ => 0.0,
    }
}
