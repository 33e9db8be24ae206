// SPDX-License-Identifier: MPL-2.0
//! Fluent configuration for custom snack bars.

use super::item::{normalize_action, SnackBarItem};
use super::listener::SnackBarListener;
use crate::animation::Interpolator;
use iced::Color;
use std::any::Any;
use std::rc::Rc;
use std::time::Duration;

/// Accumulates configuration onto a fresh [`SnackBarItem`].
///
/// Each builder owns its own item, so two builders never share state.
///
/// ```
/// use iced_snackbar::snackbar::SnackBarItem;
/// use std::time::Duration;
///
/// let item = SnackBarItem::builder()
///     .message("Photo deleted")
///     .action_message("undo")
///     .on_action(|| println!("restoring"))
///     .duration(Duration::from_secs(4))
///     .object(42_u32)
///     .build();
///
/// assert_eq!(item.action_message(), Some("UNDO"));
/// ```
#[must_use]
pub struct Builder {
    item: SnackBarItem,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            item: SnackBarItem::empty(),
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.item.message = Some(message.into());
        self
    }

    /// Sets the action label, upper cased. Empty labels are ignored.
    pub fn action_message(mut self, action_message: &str) -> Self {
        if let Some(action) = normalize_action(action_message) {
            self.item.action_message = Some(action);
        }
        self
    }

    /// Callback run when the action button is pressed.
    pub fn on_action(mut self, on_action: impl FnMut() + 'static) -> Self {
        self.item.on_action = Some(Box::new(on_action));
        self
    }

    pub fn action_color(mut self, color: Color) -> Self {
        self.item.action_color = Some(color);
        self
    }

    pub fn action_pressed_color(mut self, color: Color) -> Self {
        self.item.action_pressed_color = Some(color);
        self
    }

    /// How long the bar rests on screen between slide-in and slide-out.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.item.duration = Some(duration);
        self
    }

    pub fn interpolator(mut self, interpolator: Interpolator) -> Self {
        self.item.interpolator = Some(interpolator);
        self
    }

    /// Correlation object handed to every [`SnackBarListener`] callback.
    pub fn object(mut self, object: impl Any) -> Self {
        self.item.object = Some(Rc::new(object));
        self
    }

    pub fn listener(mut self, listener: impl SnackBarListener + 'static) -> Self {
        self.item.listener = Some(Box::new(listener));
        self
    }

    pub fn build(self) -> SnackBarItem {
        self.item
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_every_field() {
        let item = Builder::new()
            .message("Saved")
            .action_message("view")
            .action_color(Color::BLACK)
            .action_pressed_color(Color::WHITE)
            .duration(Duration::from_secs(5))
            .interpolator(Interpolator::Linear)
            .object("correlation")
            .build();

        assert_eq!(item.message(), Some("Saved"));
        assert_eq!(item.action_message(), Some("VIEW"));
        assert_eq!(item.action_color(), Some(Color::BLACK));
        assert_eq!(item.action_pressed_color(), Some(Color::WHITE));
        assert_eq!(item.duration(), Some(Duration::from_secs(5)));
        assert_eq!(item.interpolator(), Some(Interpolator::Linear));
        let object = item.object().expect("object set");
        assert_eq!(object.downcast_ref::<&str>(), Some(&"correlation"));
    }

    #[test]
    fn empty_action_message_keeps_previous_value() {
        let item = Builder::new()
            .message("Saved")
            .action_message("open")
            .action_message("")
            .build();
        assert_eq!(item.action_message(), Some("OPEN"));
    }

    #[test]
    fn builders_do_not_share_state() {
        let first = Builder::new()
            .message("first")
            .action_color(Color::BLACK);
        let second = Builder::new().message("second");

        let second = second.action_color(Color::WHITE).build();
        let first = first.build();

        assert_eq!(first.action_color(), Some(Color::BLACK));
        assert_eq!(second.action_color(), Some(Color::WHITE));
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn unset_fields_defer_to_host_style() {
        let item = Builder::default().message("Saved").build();
        assert!(item.action_color().is_none());
        assert!(item.duration().is_none());
        assert!(item.interpolator().is_none());
        assert!(item.object().is_none());
    }
}
