// SPDX-License-Identifier: MPL-2.0
//! Demo application showing snack bars on an Iced window.
//!
//! The `App` owns one [`Host`] and a [`Manager`] queueing items onto it. The
//! snack bar animation is driven by the tick subscription, which only runs
//! while something is on screen or queued.

mod events;
mod message;
mod subscription;
mod view;

pub use events::{EventLog, SnackBarEvent};
pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::snackbar::{Host, Manager, SnackBarItem};
use crate::ui::snack_bar;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    host: Host,
    manager: Manager,
    /// Last listener notification, shared with every shown item.
    events: EventLog,
    /// Serial number stored as the payload of the next item.
    next_serial: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("manager", &self.manager)
            .field("last_event", &self.events.last())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 360;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 240;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(None, &Config::default())
    }
}

impl App {
    /// Loads the configuration and shows its load warning, if any, as the
    /// first snack bar.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(flags.lang, &config);

        if let Some(key) = config_warning {
            let item = SnackBarItem::new(app.i18n.tr(&key));
            app.manager.show(item, &mut app.host, Instant::now());
        }

        (app, Task::none())
    }

    fn with_config(lang: Option<String>, config: &Config) -> Self {
        Self {
            i18n: I18n::new(lang, config),
            host: Host::new(config.style()),
            manager: Manager::new(),
            events: EventLog::default(),
            next_serial: 1,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.manager.has_snack_bars())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowMessage => {
                let item = self.item("snack-saved", None);
                self.manager.show(item, &mut self.host, Instant::now());
            }
            Message::ShowWithAction => {
                let item = self.item("snack-deleted", Some("snack-action-undo"));
                self.manager.show(item, &mut self.host, Instant::now());
            }
            Message::Interrupt => {
                let item = self.item("snack-interrupt", Some("snack-action-retry"));
                self.manager.show_now(item, &mut self.host, Instant::now());
            }
            Message::Clear => self.manager.clear(&mut self.host),
            Message::SnackBar(snack_bar::Message::ActionPressed(view)) => {
                if !self.manager.press_action(view, &mut self.host, Instant::now()) {
                    tracing::debug!(?view, "ignoring press on a snack bar that is leaving");
                }
            }
            Message::Tick(now) => self.manager.tick(&mut self.host, now),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            host: &self.host,
            queued: self.manager.queued_count(self.host.id()),
            last_event: self.events.last(),
        })
    }

    /// Builds a demo item tagged with the next serial number.
    fn item(&mut self, message_key: &str, action_key: Option<&str>) -> SnackBarItem {
        let serial = self.next_serial;
        self.next_serial += 1;

        let mut builder = SnackBarItem::builder()
            .message(self.i18n.tr(message_key))
            .object(serial)
            .listener(self.events.clone());

        if let Some(action_key) = action_key {
            builder = builder
                .action_message(&self.i18n.tr(action_key))
                .on_action(move || tracing::info!(serial, "snack bar action"));
        }

        builder.build()
    }
}
