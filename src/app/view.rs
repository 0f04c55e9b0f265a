// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar plus the active screen, then stacks the zoom-modal
//! overlay (when a card has one open) and the toast overlay on top.

use super::{Message, Screen};
use crate::application::port::favorites::Favorites;
use crate::domain::feedback::FeedbackMessage;
use crate::i18n::I18n;
use crate::ui::design_tokens::opacity;
use crate::ui::feedback;
use crate::ui::home;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications;
use crate::ui::notifications::Toast;
use crate::ui::product_card;
use crate::ui::theming::ThemeMode;
use iced::widget::{center, container, mouse_area, opaque, stack, Column};
use iced::{Color, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub home: &'a home::State,
    pub feedback_form: &'a feedback::State,
    /// Recent feedback entries for the feedback screen.
    pub recent: &'a [FeedbackMessage],
    /// Total stored feedback count.
    pub total: usize,
    pub favorites: &'a dyn Favorites,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let screen_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => ctx
            .home
            .view(home::ViewContext {
                i18n: ctx.i18n,
                favorites: ctx.favorites,
            })
            .map(Message::Home),
        Screen::Feedback => ctx
            .feedback_form
            .view(feedback::ViewContext {
                i18n: ctx.i18n,
                recent: ctx.recent,
                total: ctx.total,
            })
            .map(Message::Feedback),
    };

    let base: Element<'_, Message> = Column::new()
        .push(navbar_view)
        .push(
            container(screen_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into();

    let mut layers: Vec<Element<'_, Message>> = vec![base];

    // Zoom modal: a dimmed backdrop that closes on click, hosting the
    // card's enlarged view.
    if let Some((index, card)) = ctx.home.modal_card() {
        let is_favorite = ctx.favorites.is_favorite(card.product().id());
        let modal = card
            .modal_view(product_card::ViewContext {
                i18n: ctx.i18n,
                is_favorite,
            })
            .map(move |message| Message::Home(home::Message::Card { index, message }));

        let backdrop = center(opaque(modal)).style(|_theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_HOVER,
                ..Color::BLACK
            })),
            ..container::Style::default()
        });

        layers.push(opaque(
            mouse_area(backdrop).on_press(Message::Home(home::Message::Card {
                index,
                message: product_card::Message::CloseModal,
            })),
        ));
    }

    // Toasts render above everything, bottom-right.
    layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    stack(layers).into()
}
