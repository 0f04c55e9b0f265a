// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: brand mark, screen tabs, language picker and
//! theme toggle.

use crate::app::Screen;
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::font::Weight;
use iced::widget::{button, container, Container, Row, Space, Text};
use iced::{alignment, Element, Font, Length, Theme};
use unic_langid::LanguageIdentifier;

/// Messages produced by the navigation bar.
#[derive(Debug, Clone)]
pub enum Message {
    ScreenSelected(Screen),
    LanguageSelected(LanguageIdentifier),
    ThemeToggled,
}

/// Context required to render the navigation bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    pub theme_mode: ThemeMode,
}

/// Renders the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = Text::new("ECOFLY")
        .size(typography::TITLE)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::PRIMARY_500),
        });

    let tabs = Row::new()
        .spacing(spacing::XS)
        .push(tab(ctx.i18n.tr("nav-home"), Screen::Home, ctx.active))
        .push(tab(ctx.i18n.tr("nav-feedback"), Screen::Feedback, ctx.active));

    let mut languages = Row::new().spacing(spacing::XXS);
    for locale in &ctx.i18n.available_locales {
        languages = languages.push(language_button(locale, ctx.i18n.current_locale() == locale));
    }

    let theme_toggle = button(Text::new(ctx.theme_mode.glyph()).size(typography::SUBTITLE))
        .on_press(Message::ThemeToggled)
        .padding([spacing::XXS, spacing::SM])
        .style(plain_button_style);

    let bar = Row::new()
        .spacing(spacing::LG)
        .padding([spacing::SM, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .push(brand)
        .push(tabs)
        .push(Space::new().width(Length::Fill))
        .push(languages)
        .push(theme_toggle);

    Container::new(bar)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            ..container::Style::default()
        })
        .into()
}

fn tab(label: String, target: Screen, active: Screen) -> Element<'static, Message> {
    let is_active = target == active;
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::ScreenSelected(target))
        .padding([spacing::XS, spacing::SM])
        .style(move |theme: &Theme, status| tab_style(theme, status, is_active))
        .into()
}

fn language_button(locale: &LanguageIdentifier, is_active: bool) -> Element<'static, Message> {
    let label = locale.language.as_str().to_uppercase();
    button(Text::new(label).size(typography::CAPTION))
        .on_press(Message::LanguageSelected(locale.clone()))
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme: &Theme, status| tab_style(theme, status, is_active))
        .into()
}

fn tab_style(theme: &Theme, _status: button::Status, is_active: bool) -> button::Style {
    if is_active {
        button::Style {
            background: Some(iced::Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: iced::Border {
                radius: radius::MD.into(),
                ..iced::Border::default()
            },
            ..button::Style::default()
        }
    } else {
        button::Style {
            background: None,
            text_color: theme.palette().text,
            border: iced::Border {
                color: theme.extended_palette().background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..button::Style::default()
        }
    }
}

fn plain_button_style(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: theme.palette().text,
        ..button::Style::default()
    }
}
