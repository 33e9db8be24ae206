// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` provides bottom-anchored snack bar notifications for the
//! Iced GUI framework.
//!
//! Items slide in, rest, and slide out again on an animation clock supplied
//! by the application. A [`snackbar::Manager`] queues items so only one is on
//! screen at a time, and [`ui::snack_bar::view`] renders them as an overlay.

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod snackbar;
pub mod ui;
