// SPDX-License-Identifier: MPL-2.0
//! Product card widget: inline image carousel, thumbnail strip, zoom
//! modal content and favorite button for one catalog product.
//!
//! The card owns a [`GalleryState`] plus the image handles fetched so
//! far. Image bytes are loaded lazily: the visible image on creation,
//! then whatever navigation reveals, and the full list once the zoom
//! modal opens (for its thumbnail strip).
//!
//! Favorite toggling goes through the [`Favorites`] capability and is
//! reported upwards as an [`Event`] so the app root can show the
//! confirmation toast. The card never persists anything itself.

use crate::application::port::favorites::{FavoriteToggle, Favorites};
use crate::application::query::gallery::GalleryState;
use crate::domain::catalog::Product;
use crate::i18n::I18n;
use crate::infrastructure::fetch::{self, FetchError};
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use iced::widget::image::Handle;
use iced::widget::{button, container, stack, Column, Container, Image, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Task, Theme};
use std::collections::{HashMap, HashSet};

/// Messages produced by one product card.
#[derive(Debug, Clone)]
pub enum Message {
    NextImage,
    PreviousImage,
    SelectImage(usize),
    OpenModal,
    CloseModal,
    NextModalImage,
    PreviousModalImage,
    SelectModalImage(usize),
    ToggleFavorite,
    /// An image fetch finished, successfully or not.
    ImageFetched {
        index: usize,
        result: Result<Handle, FetchError>,
    },
}

/// Events the card surfaces to the application root.
#[derive(Debug, Clone)]
pub enum Event {
    /// The favorite state changed; the root shows the confirmation.
    FavoriteToggled {
        name: String,
        outcome: FavoriteToggle,
    },
}

/// State of one product card.
#[derive(Debug)]
pub struct State {
    product: Product,
    gallery: GalleryState,
    /// Fetched image handles by image index.
    handles: HashMap<usize, Handle>,
    /// Indices whose fetch has been started (pending or finished).
    requested: HashSet<usize>,
    /// Indices whose fetch failed; rendered as the placeholder block.
    failed: HashSet<usize>,
}

impl State {
    /// Creates a card for a product. Call [`State::load_visible`] for the
    /// startup fetch task.
    #[must_use]
    pub fn new(product: Product) -> Self {
        let gallery = GalleryState::new(product.image_count());
        Self {
            product,
            gallery,
            handles: HashMap::new(),
            requested: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    /// Whether this card's zoom modal is open.
    #[must_use]
    pub fn modal_open(&self) -> bool {
        self.gallery.modal_open()
    }

    /// Starts fetching the image currently shown inline.
    pub fn load_visible(&mut self) -> Task<Message> {
        self.fetch_image(self.gallery.current_index())
    }

    /// Starts a fetch for the image at `index`, once.
    ///
    /// Placeholder entries (empty URL) have nothing to fetch: they end
    /// the skeleton state immediately and render as the alt-text block.
    fn fetch_image(&mut self, index: usize) -> Task<Message> {
        if !self.requested.insert(index) {
            return Task::none();
        }
        let Some(image) = self.product.image(index) else {
            return Task::none();
        };
        if image.is_placeholder() {
            self.gallery.mark_image_loaded();
            self.failed.insert(index);
            return Task::none();
        }

        let url = image.url.clone();
        Task::perform(
            async move { fetch::load_image_bytes(&url).await },
            move |result| Message::ImageFetched {
                index,
                result: result.map(Handle::from_bytes),
            },
        )
    }

    /// Fetches every image of the product (modal thumbnail strip).
    fn fetch_all(&mut self) -> Task<Message> {
        let tasks: Vec<Task<Message>> = (0..self.product.image_count())
            .map(|index| self.fetch_image(index))
            .collect();
        Task::batch(tasks)
    }

    /// Handles a card message.
    ///
    /// Returns follow-up work (image fetches) plus an optional event for
    /// the application root.
    pub fn update(
        &mut self,
        message: Message,
        favorites: &mut dyn Favorites,
    ) -> (Task<Message>, Option<Event>) {
        match message {
            Message::NextImage => {
                self.gallery.next();
                (self.load_visible(), None)
            }
            Message::PreviousImage => {
                self.gallery.previous();
                (self.load_visible(), None)
            }
            Message::SelectImage(index) => {
                if let Err(error) = self.gallery.select(index) {
                    eprintln!("Ignoring thumbnail selection: {error}");
                    return (Task::none(), None);
                }
                (self.load_visible(), None)
            }
            Message::OpenModal => {
                self.gallery.open_modal();
                (self.fetch_all(), None)
            }
            Message::CloseModal => {
                self.gallery.close_modal();
                (Task::none(), None)
            }
            Message::NextModalImage => {
                self.gallery.next_modal();
                (self.fetch_image(self.gallery.modal_index()), None)
            }
            Message::PreviousModalImage => {
                self.gallery.previous_modal();
                (self.fetch_image(self.gallery.modal_index()), None)
            }
            Message::SelectModalImage(index) => {
                if let Err(error) = self.gallery.select_modal(index) {
                    eprintln!("Ignoring modal thumbnail selection: {error}");
                    return (Task::none(), None);
                }
                (self.fetch_image(index), None)
            }
            Message::ToggleFavorite => {
                let outcome = favorites.toggle(self.product.favorite_snapshot());
                let event = Event::FavoriteToggled {
                    name: self.product.name().to_string(),
                    outcome,
                };
                (Task::none(), Some(event))
            }
            Message::ImageFetched { index, result } => {
                match result {
                    Ok(handle) => {
                        self.handles.insert(index, handle);
                    }
                    Err(error) => {
                        // Cosmetic only: the card keeps its placeholder.
                        eprintln!("Failed to load product image: {error}");
                        self.failed.insert(index);
                    }
                }
                self.gallery.mark_image_loaded();
                (Task::none(), None)
            }
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Renders the inline card.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let info = self.gallery.info();

        let mut layers: Vec<Element<'a, Message>> = vec![self.image_block(
            info.current_index,
            info.image_loaded,
            Length::Fixed(sizing::CARD_IMAGE),
            iced::ContentFit::Cover,
        )];

        if info.has_multiple {
            layers.push(self.arrow_layer(Message::PreviousImage, Message::NextImage));
            layers.push(counter_badge(info.current_index, info.total));
        }
        layers.push(action_layer(ctx.is_favorite));

        let image_area = Container::new(stack(layers))
            .width(Length::Fixed(sizing::CARD_IMAGE))
            .height(Length::Fixed(sizing::CARD_IMAGE))
            .clip(true);

        let mut card = Column::new().push(
            Container::new(image_area)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );

        if info.has_multiple {
            card = card.push(self.thumbnail_strip(
                info.current_index,
                sizing::THUMBNAIL,
                Message::SelectImage,
            ));
        }

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(category_badge(self.product.category()))
            .push(Space::new().width(Length::Fill))
            .push(favorite_button(ctx.is_favorite));

        let content = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(header)
            .push(
                Text::new(self.product.name())
                    .size(typography::SUBTITLE)
                    .style(|theme: &Theme| text_style(theme.palette().text)),
            )
            .push(
                Text::new(self.product.description())
                    .size(typography::BODY)
                    .style(|theme: &Theme| muted_text_style(theme)),
            );

        Container::new(card.push(content))
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .style(card_container_style)
            .into()
    }

    /// Renders the zoom modal content for this card.
    ///
    /// The caller (home screen) hosts it inside a backdrop overlay.
    pub fn modal_view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let info = self.gallery.info();

        let mut layers: Vec<Element<'a, Message>> = vec![self.image_block(
            info.modal_index,
            true,
            Length::Fixed(sizing::MODAL_IMAGE),
            iced::ContentFit::Contain,
        )];
        if info.has_multiple {
            layers.push(self.arrow_layer(Message::PreviousModalImage, Message::NextModalImage));
        }
        layers.push(close_layer());

        let image_area = Container::new(stack(layers))
            .width(Length::Fixed(sizing::MODAL_IMAGE))
            .height(Length::Fixed(sizing::MODAL_IMAGE))
            .clip(true);

        let mut modal = Column::new().push(
            Container::new(image_area)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );

        if info.has_multiple {
            modal = modal.push(self.thumbnail_strip(
                info.modal_index,
                sizing::THUMBNAIL_LG,
                Message::SelectModalImage,
            ));
        }

        let mut meta = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(category_badge(self.product.category()))
            .push(Space::new().width(Length::Fill));
        if info.has_multiple {
            let position = ctx.i18n.tr_with_args(
                "modal-position",
                &[
                    ("current", &(info.modal_index + 1).to_string()),
                    ("total", &info.total.to_string()),
                ],
            );
            meta = meta.push(
                Text::new(position)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| muted_text_style(theme)),
            );
        }

        let details = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(meta)
            .push(
                Text::new(self.product.name())
                    .size(typography::TITLE)
                    .style(|theme: &Theme| text_style(theme.palette().text)),
            )
            .push(
                Text::new(self.product.description())
                    .size(typography::BODY)
                    .style(|theme: &Theme| muted_text_style(theme)),
            );

        Container::new(modal.push(details))
            .width(Length::Fixed(sizing::MODAL_WIDTH))
            .style(card_container_style)
            .into()
    }

    /// The image at `index`, or the skeleton/placeholder block.
    fn image_block<'a>(
        &'a self,
        index: usize,
        loaded: bool,
        side: Length,
        fit: iced::ContentFit,
    ) -> Element<'a, Message> {
        if let Some(handle) = self.handles.get(&index) {
            return Image::new(handle.clone())
                .width(side)
                .height(side)
                .content_fit(fit)
                .into();
        }

        // Placeholder block: alt text once loading ended, nothing while
        // the skeleton is still up.
        let alt = self
            .product
            .image(index)
            .map(|image| image.alt.as_str())
            .unwrap_or_default();
        let label: Element<'a, Message> = if loaded || self.failed.contains(&index) {
            Text::new(alt)
                .size(typography::BODY)
                .style(|theme: &Theme| muted_text_style(theme))
                .into()
        } else {
            Space::new().into()
        };

        Container::new(label)
            .width(side)
            .height(side)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::MD)
            .style(placeholder_style)
            .into()
    }

    /// Previous/next arrows, vertically centered at the image edges.
    fn arrow_layer<'a>(&self, previous: Message, next: Message) -> Element<'a, Message> {
        let row = Row::new()
            .align_y(alignment::Vertical::Center)
            .padding(spacing::XS)
            .push(nav_button("‹", previous))
            .push(Space::new().width(Length::Fill))
            .push(nav_button("›", next));

        Container::new(row)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center)
            .into()
    }

    /// Row of selectable thumbnails below the image.
    fn thumbnail_strip<'a>(
        &'a self,
        selected: usize,
        side: f32,
        on_select: fn(usize) -> Message,
    ) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::SM);
        for index in 0..self.product.image_count() {
            let inner: Element<'a, Message> = if let Some(handle) = self.handles.get(&index) {
                Image::new(handle.clone())
                    .width(Length::Fixed(side))
                    .height(Length::Fixed(side))
                    .content_fit(iced::ContentFit::Cover)
                    .into()
            } else {
                Container::new(Space::new())
                    .width(Length::Fixed(side))
                    .height(Length::Fixed(side))
                    .style(placeholder_style)
                    .into()
            };

            let is_selected = index == selected;
            row = row.push(
                button(inner)
                    .on_press(on_select(index))
                    .padding(0.0)
                    .style(move |theme: &Theme, status| {
                        thumbnail_style(theme, status, is_selected)
                    }),
            );
        }

        Container::new(row)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::SM)
            .into()
    }
}

/// Context required to render a card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Favorite state of this card's product, read by the caller.
    pub is_favorite: bool,
}

// =============================================================================
// Shared view pieces
// =============================================================================

/// Zoom + favorite buttons in the top-left corner of the image area.
fn action_layer(is_favorite: bool) -> Element<'static, Message> {
    let actions = Column::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new("⊕").size(typography::SUBTITLE))
                .on_press(Message::OpenModal)
                .padding(spacing::XS)
                .style(overlay_button_style),
        )
        .push(
            button(heart_glyph(is_favorite))
                .on_press(Message::ToggleFavorite)
                .padding(spacing::XS)
                .style(move |theme: &Theme, status| {
                    overlay_favorite_style(theme, status, is_favorite)
                }),
        );

    Container::new(actions)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::SM)
        .into()
}

fn counter_badge<'a>(current: usize, total: usize) -> Element<'a, Message> {
    let badge = Container::new(
        Text::new(format!("{}/{}", current + 1, total))
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text_style(palette::WHITE)),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        border: iced::Border {
            radius: radius::LG.into(),
            ..iced::Border::default()
        },
        ..container::Style::default()
    });

    Container::new(badge)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::SM)
        .into()
}

fn close_layer<'a>() -> Element<'a, Message> {
    let close = button(Text::new("✕").size(typography::SUBTITLE))
        .on_press(Message::CloseModal)
        .padding(spacing::XS)
        .style(overlay_button_style);

    Container::new(close)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::SM)
        .into()
}

fn category_badge<'a>(category: &'a str) -> Element<'a, Message> {
    Container::new(
        Text::new(category)
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text_style(palette::PRIMARY_700)),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(palette::PRIMARY_100)),
        border: iced::Border {
            radius: radius::LG.into(),
            ..iced::Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

fn heart_glyph<'a>(is_favorite: bool) -> Text<'a> {
    let glyph = if is_favorite { "♥" } else { "♡" };
    Text::new(glyph).size(typography::SUBTITLE)
}

fn favorite_button(is_favorite: bool) -> Element<'static, Message> {
    button(heart_glyph(is_favorite))
        .on_press(Message::ToggleFavorite)
        .padding(spacing::XXS)
        .style(move |theme: &Theme, _status| button::Style {
            background: None,
            text_color: if is_favorite {
                palette::FAVORITE_500
            } else {
                theme.extended_palette().background.strong.color
            },
            ..button::Style::default()
        })
        .into()
}

fn nav_button<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(Text::new(glyph).size(typography::TITLE))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(overlay_button_style)
        .into()
}

// =============================================================================
// Styles
// =============================================================================

fn text_style(color: Color) -> iced::widget::text::Style {
    iced::widget::text::Style { color: Some(color) }
}

fn muted_text_style(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

fn card_container_style(theme: &Theme) -> container::Style {
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

fn placeholder_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        ..container::Style::default()
    }
}

fn overlay_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 1.0,
        _ => opacity::OVERLAY_HOVER,
    };
    button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        text_color: palette::GRAY_900,
        border: iced::Border {
            radius: radius::LG.into(),
            ..iced::Border::default()
        },
        ..button::Style::default()
    }
}

fn overlay_favorite_style(
    theme: &Theme,
    status: button::Status,
    is_favorite: bool,
) -> button::Style {
    let mut style = overlay_button_style(theme, status);
    if is_favorite {
        style.background = Some(iced::Background::Color(palette::FAVORITE_500));
        style.text_color = palette::WHITE;
    }
    style
}

fn thumbnail_style(theme: &Theme, _status: button::Status, is_selected: bool) -> button::Style {
    button::Style {
        background: None,
        border: iced::Border {
            color: if is_selected {
                palette::PRIMARY_500
            } else {
                theme.extended_palette().background.strong.color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..button::Style::default()
    }
}
