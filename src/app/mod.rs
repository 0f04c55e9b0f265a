// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the storefront
//! screens and the stores.
//!
//! The `App` struct wires together the domains (catalog cards,
//! feedback, favorites, localization) and translates messages into side
//! effects like store persistence or image loading. This file keeps the
//! policy decisions (window sizing, theme resolution, store wiring)
//! close to the main update loop so user-facing behavior is easy to
//! audit.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::store::{FeedbackStore, LocalFavorites};
use crate::i18n::I18n;
use crate::infrastructure::catalog;
use crate::infrastructure::storage::FileStore;
use crate::ui::feedback;
use crate::ui::home;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{time, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// How often the notification manager checks auto-dismiss timers while
/// toasts are on screen.
const NOTIFICATION_TICK: Duration = Duration::from_millis(500);

/// Root Iced application state that bridges the storefront screens,
/// localization, and persisted stores.
pub struct App {
    i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    /// Size of the recent-feedback list, from config.
    recent_limit: usize,
    home: home::State,
    feedback_form: feedback::State,
    feedback_store: FeedbackStore<FileStore>,
    favorites: LocalFavorites<FileStore>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("cards", &self.home.card_count())
            .field("feedback_count", &self.feedback_store.count())
            .finish()
    }
}

/// Builds the window settings.
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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application state: config, localization, stores and
    /// catalog cards, plus the startup image-fetch task.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load();
        let i18n = I18n::new(flags.lang, &config);

        // Storage degrades to a temp directory when no data dir exists:
        // the session still works, persistence just won't outlive it in
        // any meaningful location.
        let storage = FileStore::open_default().unwrap_or_else(|error| {
            eprintln!("Falling back to temporary storage: {error}");
            FileStore::new(std::env::temp_dir().join("EcoFly"))
        });

        let mut feedback_store = FeedbackStore::new(storage.clone());
        feedback_store.hydrate();
        let mut favorites = LocalFavorites::new(storage);
        favorites.hydrate();

        let products = catalog::load().unwrap_or_else(|error| {
            eprintln!("Failed to load product catalog: {error}");
            Vec::new()
        });
        let mut home = home::State::new(products);
        let startup = home.load_visible().map(Message::Home);

        let app = Self {
            i18n,
            screen: Screen::Home,
            theme_mode: config.general.theme_mode,
            recent_limit: config.recent_limit(),
            home,
            feedback_form: feedback::State::new(),
            feedback_store,
            favorites,
            notifications: notifications::Manager::new(),
        };

        (app, startup)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Only tick while toasts are on screen; otherwise stay idle.
        if self.notifications.has_notifications() {
            time::every(NOTIFICATION_TICK)
                .map(|_| Message::Notification(notifications::Message::Tick))
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            home: &mut self.home,
            feedback_form: &mut self.feedback_form,
            feedback_store: &mut self.feedback_store,
            favorites: &mut self.favorites,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Feedback(feedback_message) => {
                update::handle_feedback_message(&mut ctx, feedback_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            theme_mode: self.theme_mode,
            home: &self.home,
            feedback_form: &self.feedback_form,
            recent: self.feedback_store.recent(self.recent_limit),
            total: self.feedback_store.count(),
            favorites: &self.favorites,
            notifications: &self.notifications,
        })
    }
}
