// SPDX-License-Identifier: MPL-2.0
//! Snack bar notifications.
//!
//! A snack bar is a bottom-anchored message that slides in, rests for a
//! while, and slides out again. It may carry one action button; pressing it
//! dismisses the bar early.
//!
//! # Components
//!
//! - [`item`] - `SnackBarItem` and its lifecycle state machine
//! - [`builder`] - fluent `Builder` for custom items
//! - [`listener`] - `DisposeListener` and `SnackBarListener` callbacks
//! - [`host`] - `Host`, the screen views are attached to
//! - [`action`] - two-state action button drawable
//! - [`manager`] - `Manager` that shows queued items one at a time
//!
//! # Usage
//!
//! ```
//! use iced_snackbar::snackbar::{Host, Manager, SnackBarItem};
//! use std::time::Instant;
//!
//! let mut host = Host::default();
//! let mut manager = Manager::new();
//!
//! manager.show(SnackBarItem::new("Image saved"), &mut host, Instant::now());
//!
//! // Drive the animation from the UI clock
//! manager.tick(&mut host, Instant::now());
//! assert_eq!(host.content().len(), 1);
//! ```

pub mod action;
pub mod builder;
pub mod host;
pub mod item;
pub mod listener;
pub mod manager;
mod style;

pub use action::{ActionButton, ButtonState, StateListDrawable, TextDrawable};
pub use builder::Builder;
pub use host::{ContentLayer, Host, HostId, SnackBarView, ViewId};
pub use item::{ExitReason, ItemId, Phase, SnackBarItem};
pub use listener::{DisposeListener, Payload, SnackBarListener};
pub use manager::Manager;
pub use style::SnackBarStyle;
