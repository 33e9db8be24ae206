// SPDX-License-Identifier: MPL-2.0
//! Callback interfaces for snack bar collaborators.

use super::host::Host;
use super::item::SnackBarItem;
use std::any::Any;
use std::rc::Rc;

/// Opaque correlation object handed back to [`SnackBarListener`] callbacks.
pub type Payload = Rc<dyn Any>;

/// Notified exactly once when an item has been cleaned up.
///
/// This is the integration point for a display queue: the collaborator
/// learns the host is free for the next item. Closures taking
/// `(&mut Host, &SnackBarItem)` implement it.
pub trait DisposeListener {
    fn on_dispose(&mut self, host: &mut Host, item: &SnackBarItem);
}

impl<F> DisposeListener for F
where
    F: FnMut(&mut Host, &SnackBarItem),
{
    fn on_dispose(&mut self, host: &mut Host, item: &SnackBarItem) {
        self(host, item);
    }
}

/// Optional per-item notifications, each given the item's payload.
///
/// `on_started` always precedes `on_action` and `on_finished`. `on_finished`
/// fires only when an exit animation runs to completion, not when the item
/// is cancelled.
pub trait SnackBarListener {
    fn on_started(&mut self, _object: Option<&Payload>) {}

    fn on_action(&mut self, _object: Option<&Payload>) {}

    fn on_finished(&mut self, _object: Option<&Payload>) {}
}
