// SPDX-License-Identifier: MPL-2.0
//! Styles for the player overlay widgets.

pub mod button;
pub mod overlay;
