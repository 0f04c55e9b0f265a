// SPDX-License-Identifier: MPL-2.0
//! Home screen: brand header, sustainability stats and the
//! featured-product grid of carousel cards.
//!
//! The screen owns one [`product_card::State`] per catalog product and
//! routes card messages by index. Card events (favorite toggles) are
//! passed through to the app root untouched.

use crate::application::port::favorites::Favorites;
use crate::domain::catalog::Product;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::product_card;
use iced::font::Weight;
use iced::widget::{container, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Font, Length, Task, Theme};

/// Cards per grid row.
const GRID_COLUMNS: usize = 3;

/// Messages produced by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    Card {
        index: usize,
        message: product_card::Message,
    },
}

/// Home screen state.
#[derive(Debug)]
pub struct State {
    cards: Vec<product_card::State>,
}

impl State {
    /// Builds one card per catalog product, in catalog order.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            cards: products.into_iter().map(product_card::State::new).collect(),
        }
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Startup task: fetch every card's visible image.
    pub fn load_visible(&mut self) -> Task<Message> {
        let tasks: Vec<Task<Message>> = self
            .cards
            .iter_mut()
            .enumerate()
            .map(|(index, card)| {
                card.load_visible()
                    .map(move |message| Message::Card { index, message })
            })
            .collect();
        Task::batch(tasks)
    }

    /// The card whose zoom modal is open, if any.
    ///
    /// At most one modal can be open: opening requires a click on a
    /// card, and the modal overlay covers every other card.
    #[must_use]
    pub fn modal_card(&self) -> Option<(usize, &product_card::State)> {
        self.cards
            .iter()
            .enumerate()
            .find(|(_, card)| card.modal_open())
    }

    /// Handles a home message, forwarding to the addressed card.
    pub fn update(
        &mut self,
        message: Message,
        favorites: &mut dyn Favorites,
    ) -> (Task<Message>, Option<product_card::Event>) {
        match message {
            Message::Card { index, message } => {
                let Some(card) = self.cards.get_mut(index) else {
                    return (Task::none(), None);
                };
                let (task, event) = card.update(message, favorites);
                (
                    task.map(move |message| Message::Card { index, message }),
                    event,
                )
            }
        }
    }

    /// Renders the home screen (without the modal overlay; the app
    /// root stacks that above everything).
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new("ECOFLY")
                    .size(typography::HEADLINE)
                    .font(bold())
                    .style(|_theme: &Theme| iced::widget::text::Style {
                        color: Some(palette::PRIMARY_500),
                    }),
            )
            .push(
                Text::new(ctx.i18n.tr("home-tagline"))
                    .size(typography::SUBTITLE)
                    .style(muted),
            );

        let stats = Row::new()
            .spacing(spacing::XL)
            .push(stat("100%", ctx.i18n.tr("home-stat-materials")))
            .push(stat("0%", ctx.i18n.tr("home-stat-waste")))
            .push(stat("∞", ctx.i18n.tr("home-stat-reuse")));

        let featured = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(ctx.i18n.tr("home-featured-title"))
                    .size(typography::TITLE)
                    .font(bold()),
            )
            .push(
                Text::new(ctx.i18n.tr("home-featured-subtitle"))
                    .size(typography::BODY)
                    .style(muted),
            );

        let mut grid = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center);
        let mut row = Row::new().spacing(spacing::LG);
        let mut in_row = 0;
        for (index, card) in self.cards.iter().enumerate() {
            let is_favorite = ctx.favorites.is_favorite(card.product().id());
            let card_view = card
                .view(product_card::ViewContext {
                    i18n: ctx.i18n,
                    is_favorite,
                })
                .map(move |message| Message::Card { index, message });

            row = row.push(card_view);
            in_row += 1;
            if in_row == GRID_COLUMNS {
                grid = grid.push(row);
                row = Row::new().spacing(spacing::LG);
                in_row = 0;
            }
        }
        if in_row > 0 {
            grid = grid.push(row);
        }

        let page = Column::new()
            .spacing(spacing::XL)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(header)
            .push(
                Container::new(stats)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            )
            .push(featured)
            .push(grid);

        scrollable(
            Container::new(page)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .height(Length::Fill)
        .into()
    }
}

/// Context required to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Read access to the favorites list for heart states.
    pub favorites: &'a dyn Favorites,
}

fn stat(value: &str, label: String) -> Element<'_, Message> {
    let block = Column::new()
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(value)
                .size(typography::TITLE)
                .font(bold())
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::PRIMARY_600),
                }),
        )
        .push(Text::new(label).size(typography::CAPTION).style(muted));

    container(block).into()
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

fn muted(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}
