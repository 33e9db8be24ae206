// SPDX-License-Identifier: MPL-2.0
//! Two-state action button drawable.
//!
//! The label is drawn as text in a fixed font, once per state, and the state
//! list picks the pressed or default drawable at render time.

use crate::ui::design_tokens::typography;
use iced::{Color, Font};

/// Interaction state of the action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Default,
    Pressed,
}

/// Text rendered as an image: label, size, color and font.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDrawable {
    text: String,
    size: f32,
    color: Color,
    font: Font,
}

impl TextDrawable {
    #[must_use]
    pub fn new(text: impl Into<String>, size: f32, color: Color, font: Font) -> Self {
        Self {
            text: text.into(),
            size,
            color,
            font,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn font(&self) -> Font {
        self.font
    }
}

/// Selects a drawable by button state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateListDrawable {
    pressed: TextDrawable,
    default: TextDrawable,
}

impl StateListDrawable {
    #[must_use]
    pub fn new(pressed: TextDrawable, default: TextDrawable) -> Self {
        Self { pressed, default }
    }

    #[must_use]
    pub fn resolve(&self, state: ButtonState) -> &TextDrawable {
        match state {
            ButtonState::Pressed => &self.pressed,
            ButtonState::Default => &self.default,
        }
    }
}

/// The action control of a snack bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionButton {
    drawable: StateListDrawable,
}

impl ActionButton {
    /// Builds the pressed/default pair for `label` in the action font.
    #[must_use]
    pub fn new(label: &str, size: f32, default_color: Color, pressed_color: Color) -> Self {
        let regular = TextDrawable::new(label, size, default_color, typography::ACTION_FONT);
        let pressed = TextDrawable::new(label, size, pressed_color, typography::ACTION_FONT);

        Self {
            drawable: StateListDrawable::new(pressed, regular),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.drawable.default.text()
    }

    #[must_use]
    pub fn drawable(&self) -> &StateListDrawable {
        &self.drawable
    }
}
