// SPDX-License-Identifier: MPL-2.0
//! A single snack bar and its lifecycle.
//!
//! ```text
//! Created ──show──▶ Showing ──timeline ends──────────────▶ Disposed (Auto)
//!    │                 │  └──press_action──▶ Dismissing ──▶ Disposed (UserAction)
//!    └──cancel─────────┴──cancel──────────────────┴───────▶ Disposed (ExternalCancel)
//! ```
//!
//! Every path into `Disposed` goes through one routine that detaches the
//! view and notifies the [`DisposeListener`]. Leaving the `Showing` state
//! for the action exit replaces the timeline instead of cancelling into
//! disposal, so an item is disposed exactly once.

use super::action::ActionButton;
use super::builder::Builder;
use super::host::{Host, HostId, SnackBarView, ViewId};
use super::listener::{DisposeListener, Payload, SnackBarListener};
use crate::animation::{AnimationEvent, Animator, Frame, Interpolator, Property, Tick, Tween};
use crate::error::{Error, Result};
use iced::Color;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Index of the slide-out stage in the show timeline.
const EXIT_STAGE: usize = 2;

/// Unique identifier for a snack bar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u64);

impl ItemId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Why an item left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The timeline ran to the end.
    Auto,
    /// The action button was pressed.
    UserAction,
    /// [`SnackBarItem::cancel`] was called.
    ExternalCancel,
}

/// Externally visible lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    /// Sliding in or resting.
    Showing,
    /// Sliding out.
    Dismissing(ExitReason),
    Disposed,
}

/// Resources held while the item is on screen.
struct Session {
    host: HostId,
    view: ViewId,
    animator: Animator,
    dispose_listener: Box<dyn DisposeListener>,
}

enum State {
    Created,
    Showing(Session),
    /// Slide-out started by the action button.
    ActionExit(Session),
    Disposed { reason: ExitReason },
}

/// A transient bottom-anchored message with an optional action.
pub struct SnackBarItem {
    id: ItemId,
    pub(super) message: Option<String>,
    pub(super) action_message: Option<String>,
    pub(super) on_action: Option<Box<dyn FnMut()>>,
    pub(super) action_color: Option<Color>,
    pub(super) action_pressed_color: Option<Color>,
    pub(super) duration: Option<Duration>,
    pub(super) interpolator: Option<Interpolator>,
    pub(super) object: Option<Payload>,
    pub(super) listener: Option<Box<dyn SnackBarListener>>,
    state: State,
}

impl SnackBarItem {
    /// Creates an item with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::empty()
        }
    }

    /// Creates an item with a message and an action.
    ///
    /// The action label is upper cased. An empty label leaves the item
    /// without an action button.
    pub fn with_action(
        message: impl Into<String>,
        action_message: &str,
        on_action: impl FnMut() + 'static,
    ) -> Self {
        Self {
            message: Some(message.into()),
            action_message: normalize_action(action_message),
            on_action: Some(Box::new(on_action)),
            ..Self::empty()
        }
    }

    /// Starts a [`Builder`] for a custom item.
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub(super) fn empty() -> Self {
        Self {
            id: ItemId::new(),
            message: None,
            action_message: None,
            on_action: None,
            action_color: None,
            action_pressed_color: None,
            duration: None,
            interpolator: None,
            object: None,
            listener: None,
            state: State::Created,
        }
    }

    /// Attaches the item to `host` and starts its timeline at `now`.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyMessage`] if no message was set. The host is untouched.
    /// - [`Error::AlreadyShown`] if the item was shown, cancelled or disposed before.
    pub fn show(
        &mut self,
        host: &mut Host,
        dispose_listener: impl DisposeListener + 'static,
        now: Instant,
    ) -> Result<()> {
        self.show_boxed(host, Box::new(dispose_listener), now)
    }

    /// [`SnackBarItem::show`] with an already boxed listener.
    pub fn show_boxed(
        &mut self,
        host: &mut Host,
        dispose_listener: Box<dyn DisposeListener>,
        now: Instant,
    ) -> Result<()> {
        let message = match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => return Err(Error::EmptyMessage),
        };
        if !matches!(self.state, State::Created) {
            return Err(Error::AlreadyShown);
        }

        let style = *host.style();
        let mut view = SnackBarView::inflate(&style, message);

        if let Some(label) = self.action_message.as_deref() {
            view.set_action(ActionButton::new(
                label,
                style.action_text_size,
                self.action_color.unwrap_or(style.action_color),
                self.action_pressed_color
                    .unwrap_or(style.action_pressed_color),
            ));
        }

        let hidden = style.hidden_offset();
        let resting = style.resting_offset();
        let mut animator = Animator::sequential(
            [
                Tween::new(Property::TranslationY, hidden, resting, style.slide_duration),
                Tween::new(
                    Property::Alpha,
                    1.0,
                    1.0,
                    self.duration.unwrap_or(style.hold_duration),
                ),
                Tween::new(Property::TranslationY, resting, hidden, style.slide_duration),
            ],
            self.interpolator.unwrap_or(style.interpolator),
        );

        let view = host.content_mut().add(view);
        tracing::debug!(item = ?self.id, ?view, "showing snack bar");

        let tick = animator.start(now);
        self.state = State::Showing(Session {
            host: host.id(),
            view,
            animator,
            dispose_listener,
        });
        self.handle_tick(host, view, tick);

        Ok(())
    }

    /// Advances the active animation to `now` and returns the resulting phase.
    ///
    /// Completing the timeline (or the action slide-out) disposes the item.
    pub fn tick(&mut self, host: &mut Host, now: Instant) -> Phase {
        let (view, tick) = match &mut self.state {
            State::Showing(session) | State::ActionExit(session) => {
                if session.host != host.id() {
                    tracing::warn!(item = ?self.id, "tick from a host the snack bar is not shown on");
                    return self.phase();
                }
                (session.view, session.animator.advance(now))
            }
            State::Created | State::Disposed { .. } => return self.phase(),
        };

        self.handle_tick(host, view, tick);
        self.phase()
    }

    /// Handles a press on the action button.
    ///
    /// Replaces the running timeline with a slide-out from the current
    /// position, then fires the action callback and `on_action`. Returns
    /// `false` (and does nothing) if the item has no action or is not showing.
    pub fn press_action(&mut self, host: &mut Host, now: Instant) -> bool {
        if self.action_message.is_none() {
            return false;
        }

        let mut session = match std::mem::replace(
            &mut self.state,
            State::Disposed {
                reason: ExitReason::UserAction,
            },
        ) {
            State::Showing(session) if session.host == host.id() => session,
            other => {
                self.state = other;
                return false;
            }
        };

        // Cancelling here hands over to the exit animation without disposing.
        session.animator.cancel();

        let style = *host.style();
        let from = host
            .content()
            .get(session.view)
            .map_or(style.resting_offset(), SnackBarView::translation_y);
        let mut exit = Animator::single(
            Tween::new(
                Property::TranslationY,
                from,
                style.hidden_offset(),
                style.slide_duration,
            ),
            self.interpolator.unwrap_or(style.interpolator),
        );
        let tick = exit.start(now);
        let view = session.view;
        session.animator = exit;
        self.state = State::ActionExit(session);
        apply_frames(host, view, &tick.frames);

        tracing::debug!(item = ?self.id, "snack bar action pressed");

        if let Some(on_action) = self.on_action.as_mut() {
            on_action();
        }
        if let Some(listener) = self.listener.as_mut() {
            listener.on_action(self.object.as_ref());
        }

        true
    }

    /// Stops any animation and disposes immediately.
    ///
    /// Used when the item is dismissed from outside, e.g. pre-empted by a
    /// newer one. An item that was never shown becomes unusable without
    /// notifying anyone. Calling it again is a no-op, and so is a call with
    /// a host the item is not shown on.
    pub fn cancel(&mut self, host: &mut Host) {
        match &mut self.state {
            State::Created => {
                self.on_action = None;
                self.listener = None;
                self.state = State::Disposed {
                    reason: ExitReason::ExternalCancel,
                };
            }
            State::Showing(session) | State::ActionExit(session) => {
                if session.host != host.id() {
                    tracing::warn!(item = ?self.id, "cancel from a host the snack bar is not shown on");
                    return;
                }
                session.animator.cancel();
                self.dispose(host, ExitReason::ExternalCancel);
            }
            State::Disposed { .. } => {}
        }
    }

    fn handle_tick(&mut self, host: &mut Host, view: ViewId, tick: Tick) {
        apply_frames(host, view, &tick.frames);

        match tick.event {
            Some(AnimationEvent::Started) => {
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_started(self.object.as_ref());
                }
            }
            Some(AnimationEvent::Ended) => {
                let reason = if matches!(self.state, State::ActionExit(_)) {
                    ExitReason::UserAction
                } else {
                    ExitReason::Auto
                };
                self.dispose(host, reason);
            }
            Some(AnimationEvent::Cancelled) | None => {}
        }
    }

    /// Detaches the view, releases the session and notifies collaborators.
    ///
    /// Only the first call per item does anything. The view can only be
    /// detached from the host it is attached to, so any other host leaves
    /// the item untouched.
    fn dispose(&mut self, host: &mut Host, reason: ExitReason) {
        let session = match std::mem::replace(&mut self.state, State::Disposed { reason }) {
            State::Showing(session) | State::ActionExit(session) if session.host == host.id() => {
                session
            }
            other => {
                self.state = other;
                return;
            }
        };

        if host.content_mut().remove(session.view).is_none() {
            tracing::debug!(item = ?self.id, view = ?session.view, "view already detached");
        }
        tracing::debug!(item = ?self.id, ?reason, "snack bar disposed");

        self.on_action = None;
        let listener = self.listener.take();
        let Session {
            mut dispose_listener,
            ..
        } = session;

        dispose_listener.on_dispose(host, self);

        if reason != ExitReason::ExternalCancel {
            if let Some(mut listener) = listener {
                listener.on_finished(self.object.as_ref());
            }
        }
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Upper-cased action label, if any.
    #[must_use]
    pub fn action_message(&self) -> Option<&str> {
        self.action_message.as_deref()
    }

    /// Action color set on this item; the host style applies when `None`.
    #[must_use]
    pub fn action_color(&self) -> Option<Color> {
        self.action_color
    }

    /// Pressed action color set on this item; the host style applies when `None`.
    #[must_use]
    pub fn action_pressed_color(&self) -> Option<Color> {
        self.action_pressed_color
    }

    /// Hold duration set on this item; the host style applies when `None`.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn interpolator(&self) -> Option<Interpolator> {
        self.interpolator
    }

    #[must_use]
    pub fn object(&self) -> Option<&Payload> {
        self.object.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.state {
            State::Created => Phase::Created,
            State::Showing(session) => {
                if session.animator.current_stage() == Some(EXIT_STAGE) {
                    Phase::Dismissing(ExitReason::Auto)
                } else {
                    Phase::Showing
                }
            }
            State::ActionExit(_) => Phase::Dismissing(ExitReason::UserAction),
            State::Disposed { .. } => Phase::Disposed,
        }
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        matches!(self.state, State::Disposed { .. })
    }

    /// Why the item left the screen, once disposed.
    #[must_use]
    pub fn exit_reason(&self) -> Option<ExitReason> {
        match self.state {
            State::Disposed { reason } => Some(reason),
            _ => None,
        }
    }

    /// The attached view while the item is on screen.
    #[must_use]
    pub fn view_id(&self) -> Option<ViewId> {
        match &self.state {
            State::Showing(session) | State::ActionExit(session) => Some(session.view),
            State::Created | State::Disposed { .. } => None,
        }
    }
}

impl fmt::Debug for SnackBarItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnackBarItem")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("action_message", &self.action_message)
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

pub(super) fn normalize_action(action_message: &str) -> Option<String> {
    if action_message.is_empty() {
        None
    } else {
        Some(action_message.to_uppercase())
    }
}

fn apply_frames(host: &mut Host, view: ViewId, frames: &[Frame]) {
    if let Some(view) = host.content_mut().get_mut(view) {
        for frame in frames {
            view.apply(*frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snackbar::SnackBarStyle;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn noop(_: &mut Host, _: &SnackBarItem) {}

    #[test]
    fn show_attaches_view_below_the_edge() {
        let mut host = Host::default();
        let mut item = SnackBarItem::new("Saved");

        item.show(&mut host, noop, Instant::now()).expect("show");

        let view = host.content().get(item.view_id().expect("view")).expect("attached");
        assert_eq!(view.message(), "Saved");
        assert_eq!(view.translation_y(), host.style().hidden_offset());
        assert!(view.action().is_none());
        assert_eq!(item.phase(), Phase::Showing);
    }

    #[test]
    fn empty_message_is_rejected_before_attachment() {
        let mut host = Host::default();
        let mut item = SnackBarItem::new("");

        assert_eq!(item.show(&mut host, noop, Instant::now()), Err(Error::EmptyMessage));
        assert!(host.content().is_empty());
        assert_eq!(item.phase(), Phase::Created);
    }

    #[test]
    fn action_label_is_upper_cased() {
        let item = SnackBarItem::with_action("Deleted", "undo", || {});
        assert_eq!(item.action_message(), Some("UNDO"));
    }

    #[test]
    fn empty_action_label_means_no_button() {
        let mut host = Host::default();
        let mut item = SnackBarItem::with_action("Deleted", "", || {});
        item.show(&mut host, noop, Instant::now()).expect("show");

        let view = host.content().get(item.view_id().expect("view")).expect("attached");
        assert!(view.action().is_none());
        assert!(!item.press_action(&mut host, Instant::now()));
    }

    #[test]
    fn timeline_rests_then_dismisses() {
        let mut host = Host::default();
        let style = *host.style();
        let t0 = Instant::now();
        let mut item = SnackBarItem::new("Saved");
        item.show(&mut host, noop, t0).expect("show");
        let view = item.view_id().expect("view");

        assert_eq!(item.tick(&mut host, t0 + ms(1_000)), Phase::Showing);
        let resting = host.content().get(view).expect("attached").translation_y();
        assert_eq!(resting, style.resting_offset());

        assert_eq!(
            item.tick(&mut host, t0 + ms(2_700)),
            Phase::Dismissing(ExitReason::Auto)
        );
        assert_eq!(item.tick(&mut host, t0 + ms(3_000)), Phase::Disposed);
        assert_eq!(item.exit_reason(), Some(ExitReason::Auto));
        assert!(!host.content().contains(view));
    }

    #[test]
    fn item_duration_overrides_style_hold() {
        let mut host = Host::new(SnackBarStyle {
            hold_duration: ms(10_000),
            ..SnackBarStyle::default()
        });
        let t0 = Instant::now();
        let mut item = SnackBarItem::builder()
            .message("Quick")
            .duration(ms(100))
            .build();
        item.show(&mut host, noop, t0).expect("show");

        assert_eq!(item.tick(&mut host, t0 + ms(1_100)), Phase::Disposed);
    }

    #[test]
    fn action_press_slides_out_from_current_position() {
        let mut host = Host::default();
        let style = *host.style();
        let t0 = Instant::now();
        let mut item = SnackBarItem::with_action("Deleted", "undo", || {});
        item.show(&mut host, noop, t0).expect("show");
        item.tick(&mut host, t0 + ms(1_000));

        assert!(item.press_action(&mut host, t0 + ms(1_000)));
        assert_eq!(item.phase(), Phase::Dismissing(ExitReason::UserAction));

        // A second press is ignored while dismissing
        assert!(!item.press_action(&mut host, t0 + ms(1_100)));

        item.tick(&mut host, t0 + ms(1_000) + style.slide_duration);
        assert_eq!(item.exit_reason(), Some(ExitReason::UserAction));
    }

    #[test]
    fn action_callback_runs_once() {
        let presses = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&presses);
        let mut host = Host::default();
        let t0 = Instant::now();
        let mut item = SnackBarItem::with_action("Deleted", "undo", move || {
            *counter.borrow_mut() += 1;
        });
        item.show(&mut host, noop, t0).expect("show");

        item.press_action(&mut host, t0);
        item.press_action(&mut host, t0);
        assert_eq!(*presses.borrow(), 1);
    }

    #[test]
    fn cancel_before_show_makes_item_unusable() {
        let mut host = Host::default();
        let mut item = SnackBarItem::new("Later");
        item.cancel(&mut host);

        assert!(item.is_disposed());
        assert_eq!(item.show(&mut host, noop, Instant::now()), Err(Error::AlreadyShown));
        assert!(host.content().is_empty());
    }

    #[test]
    fn tick_from_other_host_is_ignored() {
        let mut host = Host::default();
        let mut other = Host::default();
        let t0 = Instant::now();
        let mut item = SnackBarItem::new("Saved");
        item.show(&mut host, noop, t0).expect("show");

        assert_eq!(item.tick(&mut other, t0 + ms(60_000)), Phase::Showing);
        assert!(!item.is_disposed());
    }

    #[test]
    fn cancel_from_other_host_keeps_item_showing() {
        let disposals = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&disposals);
        let mut host = Host::default();
        let mut other = Host::default();
        let t0 = Instant::now();
        let mut item = SnackBarItem::new("Saved");
        item.show(
            &mut host,
            move |_: &mut Host, _: &SnackBarItem| *counter.borrow_mut() += 1,
            t0,
        )
        .expect("show");

        item.cancel(&mut other);
        assert_eq!(item.phase(), Phase::Showing);
        assert_eq!(*disposals.borrow(), 0);
        assert_eq!(host.content().len(), 1);

        // The timeline keeps running on the real host
        assert_eq!(item.tick(&mut host, t0 + ms(3_000)), Phase::Disposed);
        assert!(host.content().is_empty());
        assert_eq!(*disposals.borrow(), 1);
    }

    #[test]
    fn cancel_from_real_host_after_foreign_cancel_detaches() {
        let mut host = Host::default();
        let mut other = Host::default();
        let mut item = SnackBarItem::with_action("Deleted", "undo", || {});
        let t0 = Instant::now();
        item.show(&mut host, noop, t0).expect("show");
        assert!(item.press_action(&mut host, t0));

        item.cancel(&mut other);
        assert_eq!(item.phase(), Phase::Dismissing(ExitReason::UserAction));

        item.cancel(&mut host);
        assert_eq!(item.exit_reason(), Some(ExitReason::ExternalCancel));
        assert!(host.content().is_empty());
    }

    #[test]
    fn debug_output_includes_phase() {
        let item = SnackBarItem::new("Saved");
        let debug = format!("{item:?}");
        assert!(debug.contains("Created"));
        assert!(debug.contains("Saved"));
    }
}
