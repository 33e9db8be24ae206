// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`snack_bar`] - Iced rendering of a host's snack bars
//! - [`design_tokens`] - Design system constants (colors, spacing, fonts)

pub mod design_tokens;
pub mod snack_bar;
