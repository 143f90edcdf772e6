// SPDX-License-Identifier: MPL-2.0
//! Media playback controller for `watch_player`.
//!
//! The controller drives a platform [`MediaResource`](crate::application::port::MediaResource)
//! through the [`PlaybackEngine`] adapter and keeps overlay state (auto-hiding
//! controls, settings panel, fitted viewport) in step with the events the
//! resource reports back.

pub mod buffered;
pub mod controller;
pub mod engine;
pub mod fit;
pub mod hide_timer;
pub mod keyboard;
pub mod simulated;
pub mod time_format;

pub use controller::{ControllerSettings, Effect, Message, PlaybackController};
pub use engine::PlaybackEngine;
pub use fit::fit_rect;
pub use hide_timer::{HideTimer, HideToken};
pub use keyboard::{KeyCommand, KeyDispatcher, KeyboardLease, PhysicalKey, SessionId};
pub use simulated::{simulated, MediaDriver, SimulatedResource};
pub use time_format::format_time;
