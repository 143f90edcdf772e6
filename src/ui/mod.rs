// SPDX-License-Identifier: MPL-2.0
//! User interface for the player window.
//!
//! # Modules
//!
//! - [`controls`] - Player surface: fitted frame, control bars, settings panel
//! - [`styles`] - Centralized styling (buttons, overlay containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod controls;
pub mod design_tokens;
pub mod styles;
