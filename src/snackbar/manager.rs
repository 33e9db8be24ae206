// SPDX-License-Identifier: MPL-2.0
//! Snack bar display queue.
//!
//! The `Manager` shows one snack bar at a time on each host and queues the
//! rest per host. It learns that an item is gone through its own
//! [`DisposeListener`], then promotes the next item queued for that host.
//! Items queued for a host are only ever shown on that host.

use super::host::{Host, HostId, ViewId};
use super::item::{ItemId, SnackBarItem};
use super::listener::DisposeListener;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Instant;

/// Disposal notifications recorded for the manager.
#[derive(Debug, Clone, Default)]
struct DisposalLog(Rc<RefCell<Vec<ItemId>>>);

impl DisposalLog {
    fn take(&self) -> Vec<ItemId> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl DisposeListener for DisposalLog {
    fn on_dispose(&mut self, _host: &mut Host, item: &SnackBarItem) {
        self.0.borrow_mut().push(item.id());
    }
}

/// Display state of one host.
#[derive(Debug, Default)]
struct Slot {
    /// The item on screen.
    current: Option<SnackBarItem>,
    /// Items waiting to be shown, oldest first.
    queue: VecDeque<SnackBarItem>,
}

impl Slot {
    fn is_idle(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }

    fn display(
        &mut self,
        mut item: SnackBarItem,
        host: &mut Host,
        now: Instant,
        disposals: &DisposalLog,
    ) {
        match item.show(host, disposals.clone(), now) {
            Ok(()) => self.current = Some(item),
            Err(err) => tracing::warn!(item = ?item.id(), %err, "skipping snack bar"),
        }
    }

    /// Fills an empty slot from the queue.
    fn fill(&mut self, host: &mut Host, now: Instant, disposals: &DisposalLog) {
        while self.current.is_none() {
            let Some(next) = self.queue.pop_front() else {
                break;
            };
            self.display(next, host, now, disposals);
        }
    }
}

/// Shows snack bars one after another, independently on every host.
#[derive(Debug, Default)]
pub struct Manager {
    /// Slots with something on screen or queued.
    slots: HashMap<HostId, Slot>,
    disposals: DisposalLog,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `item` on `host` now if nothing is on screen there, otherwise
    /// queues it for that host.
    pub fn show(&mut self, item: SnackBarItem, host: &mut Host, now: Instant) {
        let slot = self.slots.entry(host.id()).or_default();
        if slot.current.is_some() {
            tracing::debug!(item = ?item.id(), host = ?host.id(), queued = slot.queue.len() + 1, "queueing snack bar");
            slot.queue.push_back(item);
        } else {
            slot.display(item, host, now, &self.disposals);
        }
        self.advance(host, now);
    }

    /// Cancels the item on screen on `host` and shows `item` in its place.
    ///
    /// Items queued for the host stay queued behind it.
    pub fn show_now(&mut self, item: SnackBarItem, host: &mut Host, now: Instant) {
        let slot = self.slots.entry(host.id()).or_default();
        if let Some(mut current) = slot.current.take() {
            current.cancel(host);
        }
        self.disposals.take();
        slot.display(item, host, now, &self.disposals);
        self.advance(host, now);
    }

    /// Advances the item on screen on `host` and promotes the next one queued
    /// for it once it is gone.
    pub fn tick(&mut self, host: &mut Host, now: Instant) {
        if let Some(current) = self
            .slots
            .get_mut(&host.id())
            .and_then(|slot| slot.current.as_mut())
        {
            current.tick(host, now);
        }
        self.advance(host, now);
    }

    /// Forwards an action press to the item owning `view` on `host`.
    ///
    /// Returns `false` if `view` is not the view of the item on screen there.
    pub fn press_action(&mut self, view: ViewId, host: &mut Host, now: Instant) -> bool {
        let pressed = match self
            .slots
            .get_mut(&host.id())
            .and_then(|slot| slot.current.as_mut())
        {
            Some(current) if current.view_id() == Some(view) => current.press_action(host, now),
            _ => false,
        };
        self.advance(host, now);
        pressed
    }

    /// Cancels the item on screen on `host` and drops its queue.
    pub fn clear(&mut self, host: &mut Host) {
        if let Some(mut current) = self
            .slots
            .remove(&host.id())
            .and_then(|slot| slot.current)
        {
            current.cancel(host);
        }
        self.disposals.take();
    }

    /// The item on screen on the given host.
    #[must_use]
    pub fn current(&self, host: HostId) -> Option<&SnackBarItem> {
        self.slots.get(&host).and_then(|slot| slot.current.as_ref())
    }

    /// Number of items waiting for the given host.
    #[must_use]
    pub fn queued_count(&self, host: HostId) -> usize {
        self.slots.get(&host).map_or(0, |slot| slot.queue.len())
    }

    /// Returns whether any snack bar is on screen or queued on any host.
    #[must_use]
    pub fn has_snack_bars(&self) -> bool {
        self.slots.values().any(|slot| !slot.is_idle())
    }

    /// Drops items that reported disposal and refills `host`'s slot from its
    /// queue. Other hosts are refilled on their own next call.
    fn advance(&mut self, host: &mut Host, now: Instant) {
        let disposed = self.disposals.take();
        for slot in self.slots.values_mut() {
            if slot
                .current
                .as_ref()
                .is_some_and(|current| disposed.contains(&current.id()))
            {
                slot.current = None;
            }
        }

        if let Some(slot) = self.slots.get_mut(&host.id()) {
            slot.fill(host, now, &self.disposals);
        }
        self.slots.retain(|_, slot| !slot.is_idle());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let host = Host::default();
        let manager = Manager::new();
        assert!(manager.current(host.id()).is_none());
        assert_eq!(manager.queued_count(host.id()), 0);
        assert!(!manager.has_snack_bars());
    }

    #[test]
    fn second_item_waits_for_first() {
        let mut host = Host::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        manager.show(SnackBarItem::new("first"), &mut host, t0);
        manager.show(SnackBarItem::new("second"), &mut host, t0);

        assert_eq!(manager.current(host.id()).and_then(SnackBarItem::message), Some("first"));
        assert_eq!(manager.queued_count(host.id()), 1);
        assert_eq!(host.content().len(), 1);
    }

    #[test]
    fn finished_item_promotes_next() {
        let mut host = Host::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        manager.show(SnackBarItem::new("first"), &mut host, t0);
        manager.show(SnackBarItem::new("second"), &mut host, t0);
        manager.tick(&mut host, t0 + ms(3_000));

        assert_eq!(manager.current(host.id()).and_then(SnackBarItem::message), Some("second"));
        assert_eq!(manager.queued_count(host.id()), 0);
        assert_eq!(host.content().len(), 1);
    }

    #[test]
    fn show_now_preempts_current() {
        let mut host = Host::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        manager.show(SnackBarItem::new("old"), &mut host, t0);
        manager.show_now(SnackBarItem::new("urgent"), &mut host, t0 + ms(100));

        assert_eq!(manager.current(host.id()).and_then(SnackBarItem::message), Some("urgent"));
        assert_eq!(host.content().len(), 1);
        assert_eq!(host.content().iter().next().map(|v| v.message()), Some("urgent"));
    }

    #[test]
    fn items_without_message_are_skipped() {
        let mut host = Host::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        manager.show(SnackBarItem::new(""), &mut host, t0);
        assert!(manager.current(host.id()).is_none());

        manager.show(SnackBarItem::new("valid"), &mut host, t0);
        manager.show(SnackBarItem::new(""), &mut host, t0);
        manager.show(SnackBarItem::new("after"), &mut host, t0);
        manager.tick(&mut host, t0 + ms(3_000));

        assert_eq!(manager.current(host.id()).and_then(SnackBarItem::message), Some("after"));
        assert_eq!(manager.queued_count(host.id()), 0);
    }

    #[test]
    fn press_action_on_unknown_view_is_ignored() {
        let mut host = Host::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();
        manager.show(SnackBarItem::with_action("msg", "ok", || {}), &mut host, t0);

        let mut other_host = Host::default();
        let mut other = SnackBarItem::new("elsewhere");
        other
            .show(&mut other_host, |_: &mut Host, _: &SnackBarItem| {}, t0)
            .expect("show");
        let foreign_view = other.view_id().expect("view");

        assert!(!manager.press_action(foreign_view, &mut host, t0));
    }

    #[test]
    fn hosts_have_independent_slots() {
        let mut a = Host::default();
        let mut b = Host::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        manager.show(SnackBarItem::new("for-a"), &mut a, t0);
        manager.show(SnackBarItem::new("for-b"), &mut b, t0);

        assert_eq!(manager.current(a.id()).and_then(SnackBarItem::message), Some("for-a"));
        assert_eq!(manager.current(b.id()).and_then(SnackBarItem::message), Some("for-b"));
        assert_eq!(manager.queued_count(a.id()), 0);
        assert_eq!(manager.queued_count(b.id()), 0);
        assert_eq!(a.content().len(), 1);
        assert_eq!(b.content().len(), 1);

        manager.tick(&mut a, t0 + ms(3_000));

        assert!(a.content().is_empty());
        assert!(manager.current(a.id()).is_none());
        assert_eq!(b.content().iter().next().map(|v| v.message()), Some("for-b"));
        assert!(manager.has_snack_bars());
    }

    #[test]
    fn queued_item_waits_for_its_own_host() {
        let mut a = Host::default();
        let mut b = Host::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        manager.show(SnackBarItem::new("a-1"), &mut a, t0);
        manager.show(SnackBarItem::new("b-1"), &mut b, t0);
        manager.show(SnackBarItem::new("b-2"), &mut b, t0);

        manager.tick(&mut a, t0 + ms(3_000));
        assert!(a.content().is_empty());
        assert_eq!(manager.queued_count(b.id()), 1);
        assert_eq!(b.content().len(), 1);

        manager.tick(&mut b, t0 + ms(3_000));
        assert_eq!(manager.current(b.id()).and_then(SnackBarItem::message), Some("b-2"));
        assert_eq!(b.content().iter().next().map(|v| v.message()), Some("b-2"));
        assert!(a.content().is_empty());
    }

    #[test]
    fn clear_only_affects_its_host() {
        let mut a = Host::default();
        let mut b = Host::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        manager.show(SnackBarItem::new("a-1"), &mut a, t0);
        manager.show(SnackBarItem::new("b-1"), &mut b, t0);
        manager.clear(&mut a);

        assert!(a.content().is_empty());
        assert_eq!(b.content().len(), 1);
        assert_eq!(manager.current(b.id()).and_then(SnackBarItem::message), Some("b-1"));
    }

    #[test]
    fn clear_removes_everything() {
        let mut host = Host::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        for i in 0..4 {
            manager.show(SnackBarItem::new(format!("item-{i}")), &mut host, t0);
        }
        manager.clear(&mut host);

        assert!(!manager.has_snack_bars());
        assert!(host.content().is_empty());
    }
}
