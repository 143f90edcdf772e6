// SPDX-License-Identifier: MPL-2.0
//! `watch_player` is a media playback controller with an auto-hiding control
//! overlay, built with the Iced GUI framework.
//!
//! The core is [`video_player::PlaybackController`]: it sends play, pause,
//! seek, volume and rate requests to a platform media resource and only
//! believes what the resource reports back. Fullscreen follows the same
//! request/confirm discipline and is the single signal exposed to the
//! surrounding application.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod video_player;

#[cfg(test)]
mod test_utils;
