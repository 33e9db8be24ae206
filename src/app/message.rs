// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::snack_bar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Queue a plain snack bar.
    ShowMessage,
    /// Queue a snack bar with an undo action.
    ShowWithAction,
    /// Replace the snack bar on screen, keeping the queue.
    Interrupt,
    /// Cancel the snack bar on screen and drop the queue.
    Clear,
    SnackBar(snack_bar::Message),
    Tick(Instant), // Animation frame
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
}
