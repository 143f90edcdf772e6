// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`HideDelay`](ui::HideDelay), [`Size`](ui::Size),
//!   [`Rect`](ui::Rect))
//! - [`video`]: Video playback types ([`PlaybackState`](video::PlaybackState),
//!   [`BufferState`](video::BufferState), [`Volume`](video::Volume),
//!   [`PlaybackRate`](video::PlaybackRate), [`MediaInfo`](video::MediaInfo))

pub mod ui;
pub mod video;
