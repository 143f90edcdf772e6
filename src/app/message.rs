// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::video::ContentKind;
use crate::video_player::controller;
use crate::video_player::hide_timer::HideToken;
use crate::video_player::keyboard::{PhysicalKey, SessionId};
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Player messages are
/// forwarded to the controller; the rest are host plumbing.
#[derive(Debug, Clone)]
pub enum Message {
    Player(controller::Message),
    /// Key press not captured by a widget.
    KeyPressed {
        window: window::Id,
        key: PhysicalKey,
    },
    /// Window opened or resized (logical pixels).
    Resized {
        window: window::Id,
        size: iced::Size,
    },
    /// Periodic tick that advances the media platform.
    Tick(Instant),
    /// A hide timer scheduled for `session` ran out.
    HideTimerElapsed { session: SessionId, token: HideToken },
    /// The user asked to close the window; preferences are saved first.
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed from the launcher to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Media source identifier shown in logs.
    pub source: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: ContentKind,
    /// Length of the simulated media in seconds.
    pub duration: f64,
    /// Optional config directory override.
    pub config_dir: Option<PathBuf>,
}
