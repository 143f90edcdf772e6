// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains video-related value objects and enums that are
//! independent of any presentation or infrastructure concerns.

pub mod media_info;
pub mod newtypes;
pub mod playback;

// Re-export commonly used types
pub use media_info::{ContentKind, MediaInfo};
pub use newtypes::{PlaybackRate, Volume};
pub use playback::{BufferState, PlaybackState};
