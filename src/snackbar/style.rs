// SPDX-License-Identifier: MPL-2.0
//! Resolved visual parameters shared by every snack bar of a host.

use crate::animation::Interpolator;
use crate::config::defaults;
use crate::config::parse_hex_color;
use iced::Color;
use std::time::Duration;

/// Visual and timing parameters for snack bars.
///
/// Produced from the configuration file by [`crate::config::Config::style`];
/// [`Default`] yields the built-in values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnackBarStyle {
    /// Bar height, also the distance travelled below the bottom edge when hidden.
    pub height: f32,
    /// Distance between the bottom edge and the bar while resting.
    pub animation_height: f32,
    pub message_text_size: f32,
    pub action_text_size: f32,
    pub slide_duration: Duration,
    /// Hold duration for items that do not set their own.
    pub hold_duration: Duration,
    /// Easing curve for items that do not set their own.
    pub interpolator: Interpolator,
    pub background: Color,
    pub message_color: Color,
    /// Action color for items that do not set their own.
    pub action_color: Color,
    /// Pressed action color for items that do not set their own.
    pub action_pressed_color: Color,
}

impl SnackBarStyle {
    /// Translation at which the bar is fully below the bottom edge.
    #[must_use]
    pub fn hidden_offset(&self) -> f32 {
        self.height
    }

    /// Translation at which the bar rests on screen.
    #[must_use]
    pub fn resting_offset(&self) -> f32 {
        -self.animation_height
    }
}

impl Default for SnackBarStyle {
    fn default() -> Self {
        Self {
            height: defaults::DEFAULT_HEIGHT,
            animation_height: defaults::DEFAULT_ANIMATION_HEIGHT,
            message_text_size: defaults::DEFAULT_MESSAGE_TEXT_SIZE,
            action_text_size: defaults::DEFAULT_ACTION_TEXT_SIZE,
            slide_duration: Duration::from_millis(defaults::DEFAULT_SLIDE_DURATION_MS),
            hold_duration: Duration::from_millis(defaults::DEFAULT_HOLD_DURATION_MS),
            interpolator: defaults::DEFAULT_INTERPOLATOR,
            background: parse_hex_color(defaults::DEFAULT_BACKGROUND_COLOR)
                .unwrap_or(Color::BLACK),
            message_color: parse_hex_color(defaults::DEFAULT_MESSAGE_COLOR)
                .unwrap_or(Color::WHITE),
            action_color: parse_hex_color(defaults::DEFAULT_ACTION_COLOR)
                .unwrap_or(Color::WHITE),
            action_pressed_color: parse_hex_color(defaults::DEFAULT_ACTION_PRESSED_COLOR)
                .unwrap_or(Color::WHITE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offsets_straddle_bottom_edge() {
        let style = SnackBarStyle::default();
        assert!(style.hidden_offset() > 0.0);
        assert!(style.resting_offset() < 0.0);
    }

    #[test]
    fn default_action_colors_are_yellow_and_white() {
        let style = SnackBarStyle::default();
        assert_eq!(style.action_color, Color::from_rgb8(0xFF, 0xFF, 0x00));
        assert_eq!(style.action_pressed_color, Color::WHITE);
    }
}
