// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between the controller and the platform.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Platform adapters implement application layer ports
//! - The playback controller only sees the ports

pub mod port;
