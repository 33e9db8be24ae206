// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Snack bar height and resting offset
//! - **Typography**: Message and action text sizes
//! - **Animation**: Slide and hold durations, easing curve
//! - **Colors**: Background, message and action colors

use crate::animation::Interpolator;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Height of the snack bar. Also the distance it travels below the bottom
/// edge when hidden.
pub const DEFAULT_HEIGHT: f32 = 48.0;

/// Minimum snack bar height.
pub const MIN_HEIGHT: f32 = 32.0;

/// Maximum snack bar height.
pub const MAX_HEIGHT: f32 = 128.0;

/// Distance between the bottom edge and the snack bar while it rests.
pub const DEFAULT_ANIMATION_HEIGHT: f32 = 16.0;

/// Minimum resting offset.
pub const MIN_ANIMATION_HEIGHT: f32 = 0.0;

/// Maximum resting offset.
pub const MAX_ANIMATION_HEIGHT: f32 = 64.0;

// ==========================================================================
// Typography Defaults
// ==========================================================================

/// Message text size.
pub const DEFAULT_MESSAGE_TEXT_SIZE: f32 = 14.0;

/// Action button text size.
pub const DEFAULT_ACTION_TEXT_SIZE: f32 = 14.0;

/// Minimum text size for message and action.
pub const MIN_TEXT_SIZE: f32 = 8.0;

/// Maximum text size for message and action.
pub const MAX_TEXT_SIZE: f32 = 32.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the slide-in and slide-out transitions (in milliseconds).
pub const DEFAULT_SLIDE_DURATION_MS: u64 = 500;

/// Maximum slide duration (in milliseconds).
pub const MAX_SLIDE_DURATION_MS: u64 = 5_000;

/// How long the snack bar rests on screen (in milliseconds).
pub const DEFAULT_HOLD_DURATION_MS: u64 = 2_000;

/// Maximum hold duration (in milliseconds).
pub const MAX_HOLD_DURATION_MS: u64 = 60_000;

/// Easing curve used when an item does not set its own.
pub const DEFAULT_INTERPOLATOR: Interpolator = Interpolator::AccelerateDecelerate;

/// Interval of the animation clock driving `tick` (in milliseconds).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Color Defaults
// ==========================================================================

/// Snack bar background.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#323232";

/// Message text color.
pub const DEFAULT_MESSAGE_COLOR: &str = "#FFFFFF";

/// Action label color while released.
pub const DEFAULT_ACTION_COLOR: &str = "#FFFF00";

/// Action label color while pressed.
pub const DEFAULT_ACTION_PRESSED_COLOR: &str = "#FFFFFF";
