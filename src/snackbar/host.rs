// SPDX-License-Identifier: MPL-2.0
//! The screen a snack bar is shown on.
//!
//! A [`Host`] owns a [`ContentLayer`], the container snack bar views are
//! attached to, plus the [`SnackBarStyle`] every view on it is built from.
//! Items keep only the [`ViewId`] of their view; the layer owns the view.

use super::action::ActionButton;
use super::style::SnackBarStyle;
use crate::animation::{Frame, Property};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(u64);

impl HostId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Unique identifier for an attached view. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl ViewId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Render state of one snack bar.
#[derive(Debug, Clone, PartialEq)]
pub struct SnackBarView {
    id: ViewId,
    message: String,
    action: Option<ActionButton>,
    translation_y: f32,
    alpha: f32,
    height: f32,
}

impl SnackBarView {
    /// Builds a view from the host template, parked below the bottom edge.
    pub(crate) fn inflate(style: &SnackBarStyle, message: impl Into<String>) -> Self {
        Self {
            id: ViewId::new(),
            message: message.into(),
            action: None,
            translation_y: style.hidden_offset(),
            alpha: 1.0,
            height: style.height,
        }
    }

    pub(crate) fn set_action(&mut self, action: ActionButton) {
        self.action = Some(action);
    }

    pub(crate) fn apply(&mut self, frame: Frame) {
        match frame.property {
            Property::TranslationY => self.translation_y = frame.value,
            Property::Alpha => self.alpha = frame.value.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn id(&self) -> ViewId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The action button, present only when the item has an action message.
    #[must_use]
    pub fn action(&self) -> Option<&ActionButton> {
        self.action.as_ref()
    }

    /// Offset from the resting bottom edge; positive values are below it.
    #[must_use]
    pub fn translation_y(&self) -> f32 {
        self.translation_y
    }

    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Container of attached views, in attachment order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentLayer {
    views: Vec<SnackBarView>,
}

impl ContentLayer {
    pub(crate) fn add(&mut self, view: SnackBarView) -> ViewId {
        let id = view.id;
        self.views.push(view);
        id
    }

    /// Detaches a view. Returns `None` if it is not attached.
    pub(crate) fn remove(&mut self, id: ViewId) -> Option<SnackBarView> {
        let pos = self.views.iter().position(|view| view.id == id)?;
        Some(self.views.remove(pos))
    }

    pub(crate) fn get_mut(&mut self, id: ViewId) -> Option<&mut SnackBarView> {
        self.views.iter_mut().find(|view| view.id == id)
    }

    #[must_use]
    pub fn get(&self, id: ViewId) -> Option<&SnackBarView> {
        self.views.iter().find(|view| view.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ViewId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SnackBarView> {
        self.views.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

/// A screen snack bars are attached to.
#[derive(Debug, Clone, PartialEq)]
pub struct Host {
    id: HostId,
    style: SnackBarStyle,
    content: ContentLayer,
}

impl Host {
    #[must_use]
    pub fn new(style: SnackBarStyle) -> Self {
        Self {
            id: HostId::new(),
            style,
            content: ContentLayer::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> HostId {
        self.id
    }

    #[must_use]
    pub fn style(&self) -> &SnackBarStyle {
        &self.style
    }

    /// Replaces the style. Views already attached keep their geometry.
    pub fn set_style(&mut self, style: SnackBarStyle) {
        self.style = style;
    }

    #[must_use]
    pub fn content(&self) -> &ContentLayer {
        &self.content
    }

    pub(crate) fn content_mut(&mut self) -> &mut ContentLayer {
        &mut self.content
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new(SnackBarStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_ids_are_unique() {
        assert_ne!(Host::default().id(), Host::default().id());
    }

    #[test]
    fn inflated_view_starts_hidden() {
        let style = SnackBarStyle::default();
        let view = SnackBarView::inflate(&style, "Saved");
        assert_eq!(view.translation_y(), style.hidden_offset());
        assert_eq!(view.alpha(), 1.0);
        assert!(view.action().is_none());
    }

    #[test]
    fn remove_detaches_only_once() {
        let mut layer = ContentLayer::default();
        let id = layer.add(SnackBarView::inflate(&SnackBarStyle::default(), "one"));

        assert!(layer.contains(id));
        assert!(layer.remove(id).is_some());
        assert!(!layer.contains(id));
        assert!(layer.remove(id).is_none());
    }

    #[test]
    fn apply_clamps_alpha() {
        let mut view = SnackBarView::inflate(&SnackBarStyle::default(), "msg");
        view.apply(Frame {
            property: Property::Alpha,
            value: 3.0,
        });
        assert_eq!(view.alpha(), 1.0);

        view.apply(Frame {
            property: Property::TranslationY,
            value: -16.0,
        });
        assert_eq!(view.translation_y(), -16.0);
    }
}
