// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that platform adapters implement.
//! These traits use only plain data, ensuring the playback controller remains
//! independent of any concrete media backend.
//!
//! # Available Ports
//!
//! - [`media`]: The live media resource and the events it emits
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no decoder types)
//! - Commands are fire-and-forget; results arrive as events
//! - No `async fn` - hosts deliver events through Iced messages

pub mod media;

// Re-export main types for convenience
pub use media::{MediaEvent, MediaResource, TimeRange};
