// SPDX-License-Identifier: MPL-2.0
//! Records the last snack bar notification so the demo can display it.

use crate::snackbar::{Payload, SnackBarListener};
use std::cell::RefCell;
use std::rc::Rc;

/// A listener notification, tagged with the serial number the demo stored
/// as the item's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackBarEvent {
    Started(u32),
    Action(u32),
    Finished(u32),
}

impl SnackBarEvent {
    /// Fluent key describing the event.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::Started(_) => "event-started",
            Self::Action(_) => "event-action",
            Self::Finished(_) => "event-finished",
        }
    }

    pub fn serial(&self) -> u32 {
        match self {
            Self::Started(serial) | Self::Action(serial) | Self::Finished(serial) => *serial,
        }
    }
}

/// Shared listener; clones observe the same log.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Option<SnackBarEvent>>>);

impl EventLog {
    pub fn last(&self) -> Option<SnackBarEvent> {
        *self.0.borrow()
    }

    fn record(&self, object: Option<&Payload>, event: fn(u32) -> SnackBarEvent) {
        let Some(serial) = object.and_then(|object| (**object).downcast_ref::<u32>()) else {
            return;
        };
        let event = event(*serial);
        tracing::debug!(?event, "snack bar event");
        *self.0.borrow_mut() = Some(event);
    }
}

impl SnackBarListener for EventLog {
    fn on_started(&mut self, object: Option<&Payload>) {
        self.record(object, SnackBarEvent::Started);
    }

    fn on_action(&mut self, object: Option<&Payload>) {
        self.record(object, SnackBarEvent::Action);
    }

    fn on_finished(&mut self, object: Option<&Payload>) {
        self.record(object, SnackBarEvent::Finished);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[test]
    fn clones_share_the_log() {
        let log = EventLog::default();
        let mut listener = log.clone();
        let payload: Payload = Rc::new(7_u32);

        listener.on_started(Some(&payload));
        assert_eq!(log.last(), Some(SnackBarEvent::Started(7)));

        listener.on_finished(Some(&payload));
        assert_eq!(log.last(), Some(SnackBarEvent::Finished(7)));
    }

    #[test]
    fn foreign_payload_is_ignored() {
        let mut log = EventLog::default();
        let payload: Rc<dyn Any> = Rc::new("not a serial");

        log.on_action(Some(&payload));
        log.on_action(None);
        assert_eq!(log.last(), None);
    }

    #[test]
    fn event_keys_exist() {
        assert_eq!(SnackBarEvent::Action(1).i18n_key(), "event-action");
        assert_eq!(SnackBarEvent::Finished(3).serial(), 3);
    }

    #[test]
    fn event_keys_translate_in_every_locale() {
        use crate::config::Config;
        use crate::i18n::fluent::I18n;

        let events = [
            SnackBarEvent::Started(1),
            SnackBarEvent::Action(1),
            SnackBarEvent::Finished(1),
        ];
        for lang in ["en-US", "fr"] {
            let i18n = I18n::new(Some(lang.to_string()), &Config::default());
            for event in events {
                let text = i18n.tr_with_args(event.i18n_key(), &[("id", "1")]);
                assert!(!text.starts_with("MISSING:"), "{lang}: {text}");
            }
        }
    }
}
