// SPDX-License-Identifier: MPL-2.0
//! Feedback screen: star-rating form plus the recent-feedback list.
//!
//! The form owns the raw input fields and the hover state of the star
//! row. Submission validates through
//! [`FeedbackDraft::from_form`] before anything reaches the store: a
//! rejected submission surfaces as [`Event::Invalid`] and mutates
//! nothing. A valid one resets the form and hands the draft upward as
//! [`Event::Submitted`]; persistence is the app root's business.

use crate::domain::feedback::{FeedbackDraft, FeedbackMessage, Rating, ValidationError};
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use iced::widget::{
    button, container, mouse_area, scrollable, text_editor, text_input, Column, Container, Row,
    Space, Text,
};
use iced::{alignment, Element, Font, Length, Theme};

/// Messages produced by the feedback form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    ProductChanged(String),
    MessageEdited(text_editor::Action),
    RatingSelected(u8),
    RatingHovered(u8),
    RatingUnhovered,
    Submit,
}

/// Events the screen surfaces to the application root.
#[derive(Debug, Clone)]
pub enum Event {
    /// A validated draft ready to be stored.
    Submitted(FeedbackDraft),
    /// The submission was rejected; nothing was stored.
    Invalid(ValidationError),
}

/// Feedback form state.
pub struct State {
    name: String,
    email: String,
    product: String,
    message: text_editor::Content,
    /// Selected star count; 0 = nothing selected yet.
    rating: u8,
    /// Star under the cursor; 0 = none. Drives the preview only.
    hovered_rating: u8,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("rating", &self.rating)
            .finish()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            product: String::new(),
            message: text_editor::Content::new(),
            rating: 0,
            hovered_rating: 0,
        }
    }

    /// Selected star count (0 when nothing is selected).
    #[must_use]
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Handles a form message.
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::NameChanged(name) => {
                self.name = name;
                None
            }
            Message::EmailChanged(email) => {
                self.email = email;
                None
            }
            Message::ProductChanged(product) => {
                self.product = product;
                None
            }
            Message::MessageEdited(action) => {
                self.message.perform(action);
                None
            }
            Message::RatingSelected(stars) => {
                self.rating = stars;
                None
            }
            Message::RatingHovered(stars) => {
                self.hovered_rating = stars;
                None
            }
            Message::RatingUnhovered => {
                self.hovered_rating = 0;
                None
            }
            Message::Submit => {
                let draft = FeedbackDraft::from_form(
                    &self.name,
                    &self.email,
                    &self.product,
                    &self.message.text(),
                    self.rating,
                );
                match draft {
                    Ok(draft) => {
                        self.reset();
                        Some(Event::Submitted(draft))
                    }
                    Err(error) => Some(Event::Invalid(error)),
                }
            }
        }
    }

    /// Clears all fields after a successful submission.
    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.product.clear();
        self.message = text_editor::Content::new();
        self.rating = 0;
        self.hovered_rating = 0;
    }

    /// Renders the whole feedback screen: header, form card, recent list.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let mut header = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(ctx.i18n.tr("feedback-title"))
                    .size(typography::HEADLINE)
                    .font(bold())
                    .style(|_theme: &Theme| tinted(palette::PRIMARY_600)),
            )
            .push(
                Text::new(ctx.i18n.tr("feedback-subtitle"))
                    .size(typography::SUBTITLE)
                    .style(muted),
            );
        if ctx.total > 0 {
            header = header.push(
                Text::new(ctx.i18n.tr_count("feedback-count", ctx.total))
                    .size(typography::BODY)
                    .style(muted),
            );
        }

        let columns = Row::new()
            .spacing(spacing::XL)
            .push(self.form_card(ctx.i18n))
            .push(recent_column(ctx.i18n, ctx.recent, ctx.total));

        let page = Column::new()
            .spacing(spacing::XL)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(header)
            .push(columns);

        scrollable(
            Container::new(page)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .height(Length::Fill)
        .into()
    }

    fn form_card<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let display_rating = if self.hovered_rating > 0 {
            self.hovered_rating
        } else {
            self.rating
        };

        let mut stars = Row::new().spacing(spacing::XS);
        for n in 1..=Rating::MAX {
            stars = stars.push(star(n, display_rating));
        }

        let mut rating_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(stars);
        if let Some(rating) = Rating::new(display_rating) {
            rating_row = rating_row.push(
                Text::new(i18n.tr(rating.i18n_key()))
                    .size(typography::BODY)
                    .style(muted),
            );
        }

        let form = Column::new()
            .spacing(spacing::MD)
            .push(field_label(i18n.tr("feedback-rating-label")))
            .push(rating_row)
            .push(field_label(i18n.tr("feedback-name-label")))
            .push(
                text_input(&i18n.tr("feedback-name-placeholder"), &self.name)
                    .on_input(Message::NameChanged)
                    .padding(spacing::SM),
            )
            .push(field_label(i18n.tr("feedback-email-label")))
            .push(
                text_input(&i18n.tr("feedback-email-placeholder"), &self.email)
                    .on_input(Message::EmailChanged)
                    .padding(spacing::SM),
            )
            .push(field_label(i18n.tr("feedback-product-label")))
            .push(
                text_input(&i18n.tr("feedback-product-placeholder"), &self.product)
                    .on_input(Message::ProductChanged)
                    .padding(spacing::SM),
            )
            .push(field_label(i18n.tr("feedback-message-label")))
            .push(
                text_editor(&self.message)
                    .on_action(Message::MessageEdited)
                    .placeholder(i18n.tr("feedback-message-placeholder"))
                    .height(Length::Fixed(120.0))
                    .padding(spacing::SM),
            )
            .push(
                button(
                    Text::new(i18n.tr("feedback-submit"))
                        .size(typography::BODY)
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Center),
                )
                .on_press(Message::Submit)
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(submit_style),
            );

        let card = Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(i18n.tr("feedback-form-title"))
                    .size(typography::TITLE)
                    .font(bold()),
            )
            .push(form);

        Container::new(card)
            .width(Length::Fixed(380.0))
            .padding(spacing::LG)
            .style(card_style)
            .into()
    }
}

/// Context required to render the feedback screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Most-recent-first slice from the store.
    pub recent: &'a [FeedbackMessage],
    /// Total number of stored entries.
    pub total: usize,
}

fn star(n: u8, display_rating: u8) -> Element<'static, Message> {
    let active = n <= display_rating;
    let glyph = if active { "★" } else { "☆" };

    let star_button = button(Text::new(glyph).size(typography::STAR).style(
        move |theme: &Theme| {
            if active {
                tinted(palette::STAR_ACTIVE)
            } else {
                iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.strong.color),
                }
            }
        },
    ))
    .on_press(Message::RatingSelected(n))
    .padding(0.0)
    .style(|_theme: &Theme, _status| button::Style {
        background: None,
        ..button::Style::default()
    });

    mouse_area(star_button)
        .on_enter(Message::RatingHovered(n))
        .on_exit(Message::RatingUnhovered)
        .into()
}

fn recent_column<'a>(
    i18n: &'a I18n,
    recent: &'a [FeedbackMessage],
    total: usize,
) -> Element<'a, Message> {
    let mut header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("feedback-recent-title"))
                .size(typography::TITLE)
                .font(bold()),
        )
        .push(Space::new().width(Length::Fill));
    if total > 0 {
        header = header.push(
            Text::new(i18n.tr_count("feedback-total", total))
                .size(typography::CAPTION)
                .style(muted),
        );
    }

    let mut column = Column::new().spacing(spacing::MD).push(header);

    if recent.is_empty() {
        let empty = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr("feedback-empty-title"))
                    .size(typography::SUBTITLE)
                    .font(bold()),
            )
            .push(
                Text::new(i18n.tr("feedback-empty-subtitle"))
                    .size(typography::BODY)
                    .style(muted),
            );
        column = column.push(
            Container::new(empty)
                .width(Length::Fill)
                .padding(spacing::XL)
                .align_x(alignment::Horizontal::Center)
                .style(card_style),
        );
    } else {
        for entry in recent {
            column = column.push(entry_card(i18n, entry));
        }
    }

    Container::new(column)
        .width(Length::Fixed(420.0))
        .into()
}

fn entry_card<'a>(i18n: &'a I18n, entry: &'a FeedbackMessage) -> Element<'a, Message> {
    let initial = entry
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let avatar = Container::new(
        Text::new(initial)
            .size(typography::SUBTITLE)
            .style(|_theme: &Theme| tinted(palette::PRIMARY_600)),
    )
    .width(Length::Fixed(40.0))
    .height(Length::Fixed(40.0))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(palette::PRIMARY_100)),
        border: iced::Border {
            radius: radius::LG.into(),
            ..iced::Border::default()
        },
        ..container::Style::default()
    });

    let mut title = Column::new().push(Text::new(&entry.name).size(typography::SUBTITLE).font(bold()));
    if let Some(product) = &entry.product {
        title = title.push(
            Text::new(i18n.tr_with_args("feedback-product-prefix", &[("product", product)]))
                .size(typography::CAPTION)
                .style(muted),
        );
    }

    let heading = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(Text::new(&entry.date).size(typography::CAPTION).style(muted));

    let stars_given = entry.rating.stars();
    let mut star_row = Row::new().spacing(spacing::XXS);
    for n in 1..=Rating::MAX {
        let active = n <= stars_given;
        star_row = star_row.push(
            Text::new(if active { "★" } else { "☆" })
                .size(typography::BODY)
                .style(move |theme: &Theme| {
                    if active {
                        tinted(palette::STAR_ACTIVE)
                    } else {
                        iced::widget::text::Style {
                            color: Some(theme.extended_palette().background.strong.color),
                        }
                    }
                }),
        );
    }
    star_row = star_row.push(
        Text::new(i18n.tr(entry.rating.i18n_key()))
            .size(typography::CAPTION)
            .style(muted),
    );

    let quote = Container::new(
        Text::new(format!("\u{201c}{}\u{201d}", entry.message)).size(typography::BODY),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(|theme: &Theme| container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            radius: radius::MD.into(),
            ..iced::Border::default()
        },
        ..container::Style::default()
    });

    let body = Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(star_row)
        .push(quote);

    let card = Row::new()
        .spacing(spacing::SM)
        .push(avatar)
        .push(body);

    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(card_style)
        .into()
}

fn field_label(label: String) -> Element<'static, Message> {
    Text::new(label).size(typography::BODY).font(bold()).into()
}

fn bold() -> Font {
    Font {
        weight: iced::font::Weight::Bold,
        ..Font::default()
    }
}

fn tinted(color: iced::Color) -> iced::widget::text::Style {
    iced::widget::text::Style { color: Some(color) }
}

fn muted(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

fn card_style(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(palette_ext.background.base.color)),
        border: iced::Border {
            color: palette_ext.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..container::Style::default()
    }
}

fn submit_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_600,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::MD.into(),
            ..iced::Border::default()
        },
        ..button::Style::default()
    }
}
