// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::defaults::FRAME_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the animation clock. It only runs while a snack bar is on screen
/// or queued, so an idle window does not wake up.
pub fn create_tick_subscription(has_snack_bars: bool) -> Subscription<Message> {
    if has_snack_bars {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
