// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the pieces of
//! application state it may touch, keeping `App::update` a thin router.

use super::{persistence, Message, Screen};
use crate::application::store::{FeedbackStore, LocalFavorites};
use crate::i18n::I18n;
use crate::infrastructure::storage::FileStore;
use crate::ui::feedback;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::product_card;
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Mutable view over the application state for one update cycle.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub home: &'a mut home::State,
    pub feedback_form: &'a mut feedback::State,
    pub feedback_store: &'a mut FeedbackStore<FileStore>,
    pub favorites: &'a mut LocalFavorites<FileStore>,
    pub notifications: &'a mut notifications::Manager,
}

/// Routes a home-screen message and turns card events into toasts.
pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    let (task, event) = ctx.home.update(message, ctx.favorites);

    if let Some(product_card::Event::FavoriteToggled { name, outcome }) = event {
        ctx.notifications
            .push(Notification::success(outcome.i18n_key()).with_arg("name", name));
    }

    task.map(Message::Home)
}

/// Routes a feedback-form message; a submission mutates the store and
/// confirms (or rejects) with a toast.
pub fn handle_feedback_message(
    ctx: &mut UpdateContext<'_>,
    message: feedback::Message,
) -> Task<Message> {
    match ctx.feedback_form.update(message) {
        Some(feedback::Event::Submitted(draft)) => {
            ctx.feedback_store.add(draft);
            ctx.notifications
                .push(Notification::success("feedback-success"));
        }
        Some(feedback::Event::Invalid(error)) => {
            ctx.notifications
                .push(Notification::warning(error.i18n_key()));
        }
        None => {}
    }
    Task::none()
}

/// Routes a navbar message: screen switching and preference changes.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match message {
        navbar::Message::ScreenSelected(screen) => {
            *ctx.screen = screen;
        }
        navbar::Message::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, locale);
        }
        navbar::Message::ThemeToggled => {
            *ctx.theme_mode = ctx.theme_mode.cycled();
            persistence::apply_theme_change(*ctx.theme_mode);
        }
    }
    Task::none()
}

/// Routes a notification message to the manager.
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::Message,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::domain::catalog::{Product, ProductId, ProductImage};
    use crate::ui::notifications::Severity;

    struct Harness {
        i18n: I18n,
        screen: Screen,
        theme_mode: ThemeMode,
        home: home::State,
        feedback_form: feedback::State,
        feedback_store: FeedbackStore<FileStore>,
        favorites: LocalFavorites<FileStore>,
        notifications: notifications::Manager,
        _dir: tempfile::TempDir,
    }

    impl Harness {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let storage = FileStore::new(dir.path().to_path_buf());
            let mut feedback_store = FeedbackStore::new(storage.clone());
            feedback_store.hydrate();
            let mut favorites = LocalFavorites::new(storage);
            favorites.hydrate();

            let products = vec![Product::new(
                ProductId(6),
                "Cinzeiro Universo Místico",
                "Cinzeiros",
                vec![ProductImage {
                    url: "/images/universo.jpg".to_string(),
                    alt: "Vista superior".to_string(),
                }],
                "Design cósmico",
            )];

            Self {
                i18n: I18n::default(),
                screen: Screen::Home,
                theme_mode: ThemeMode::default(),
                home: home::State::new(products),
                feedback_form: feedback::State::new(),
                feedback_store,
                favorites,
                notifications: notifications::Manager::new(),
                _dir: dir,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &mut self.i18n,
                screen: &mut self.screen,
                theme_mode: &mut self.theme_mode,
                home: &mut self.home,
                feedback_form: &mut self.feedback_form,
                feedback_store: &mut self.feedback_store,
                favorites: &mut self.favorites,
                notifications: &mut self.notifications,
            }
        }
    }

    #[test]
    fn favorite_toggle_shows_added_then_removed_toast() {
        let mut harness = Harness::new();

        let toggle = home::Message::Card {
            index: 0,
            message: product_card::Message::ToggleFavorite,
        };

        handle_home_message(&mut harness.ctx(), toggle.clone());
        {
            let toast = harness.notifications.visible().next().unwrap();
            assert_eq!(toast.message_key(), "favorite-added");
            assert_eq!(toast.severity(), Severity::Success);
        }
        use crate::application::port::favorites::Favorites;
        assert!(harness.favorites.is_favorite(ProductId(6)));

        handle_home_message(&mut harness.ctx(), toggle);
        let keys: Vec<String> = harness
            .notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect();
        assert!(keys.contains(&"favorite-removed".to_string()));
        assert!(!harness.favorites.is_favorite(ProductId(6)));
    }

    #[test]
    fn invalid_submission_warns_and_stores_nothing() {
        let mut harness = Harness::new();

        handle_feedback_message(&mut harness.ctx(), feedback::Message::Submit);

        assert_eq!(harness.feedback_store.count(), 0);
        let toast = harness.notifications.visible().next().unwrap();
        assert_eq!(toast.severity(), Severity::Warning);
        assert_eq!(toast.message_key(), "error-feedback-missing-field");
    }

    #[test]
    fn valid_submission_stores_and_confirms() {
        let mut harness = Harness::new();

        handle_feedback_message(
            &mut harness.ctx(),
            feedback::Message::NameChanged("Ana".to_string()),
        );
        handle_feedback_message(
            &mut harness.ctx(),
            feedback::Message::MessageEdited(iced::widget::text_editor::Action::Edit(
                iced::widget::text_editor::Edit::Paste(std::sync::Arc::new(
                    "Ótimo produto".to_string(),
                )),
            )),
        );
        handle_feedback_message(&mut harness.ctx(), feedback::Message::RatingSelected(5));
        handle_feedback_message(&mut harness.ctx(), feedback::Message::Submit);

        assert_eq!(harness.feedback_store.count(), 1);
        let recent = harness.feedback_store.recent(5);
        assert_eq!(recent[0].name, "Ana");
        assert_eq!(recent[0].rating.stars(), 5);

        let toast = harness.notifications.visible().next().unwrap();
        assert_eq!(toast.message_key(), "feedback-success");
    }

    #[test]
    fn navbar_switches_screens_and_cycles_theme() {
        let mut harness = Harness::new();

        handle_navbar_message(
            &mut harness.ctx(),
            navbar::Message::ScreenSelected(Screen::Feedback),
        );
        assert_eq!(harness.screen, Screen::Feedback);

        let before = harness.theme_mode;
        handle_navbar_message(&mut harness.ctx(), navbar::Message::ThemeToggled);
        assert_ne!(harness.theme_mode, before);
    }

    #[test]
    fn navbar_language_change_applies_to_i18n() {
        let mut harness = Harness::new();
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        harness.i18n = I18n::new(None, &config);

        handle_navbar_message(
            &mut harness.ctx(),
            navbar::Message::LanguageSelected("pt-BR".parse().unwrap()),
        );
        assert_eq!(harness.i18n.current_locale().to_string(), "pt-BR");
    }
}
