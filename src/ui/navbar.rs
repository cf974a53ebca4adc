// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! This module provides the brand mark, the section links, and the theme
//! toggle that sit in a fixed bar above the scrollable page. Links never
//! scroll the page themselves; they emit events the application resolves
//! into eased scroll runs.

use crate::app::section::SectionId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    BrandPressed,
    LinkPressed(SectionId),
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(SectionId),
    ThemeChanged(ThemeMode),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, theme_mode: &mut ThemeMode) -> Event {
    match message {
        Message::BrandPressed => Event::Navigate(SectionId::Hero),
        Message::LinkPressed(section) => Event::Navigate(section),
        Message::CycleTheme => {
            *theme_mode = theme_mode.cycle();
            Event::ThemeChanged(*theme_mode)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand_color = ctx.colors.brand_primary;
    let brand = button(
        Text::new(ctx.i18n.tr("navbar-brand"))
            .size(typography::TITLE_MD)
            .style(move |_theme: &Theme| iced::widget::text::Style {
                color: Some(brand_color),
            }),
    )
    .on_press(Message::BrandPressed)
    .padding([spacing::XS, spacing::SM])
    .style(link_button_style);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    for section in SectionId::ALL {
        let label = ctx.i18n.tr(section.label_key());
        row = row.push(
            button(Text::new(label).size(typography::BODY_LG))
                .on_press(Message::LinkPressed(section))
                .padding([spacing::XS, spacing::SM])
                .style(link_button_style),
        );
    }

    let toggle_label = ctx.i18n.tr(ctx.theme_mode.label_key());
    row = row.push(
        button(Text::new(toggle_label).size(typography::BODY))
            .on_press(Message::CycleTheme)
            .padding([spacing::XS, spacing::SM])
            .style(toggle_button_style),
    );

    let surface = ctx.colors.surface_primary;
    let hairline = ctx.colors.surface_tertiary;
    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface)),
            border: Border {
                color: hairline,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Style function for the brand and section links.
fn link_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.weak.color.into()),
            text_color: palette.primary.strong.color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

/// Style function for the theme toggle: an outlined pill.
fn toggle_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let outline = Border {
        color: palette.background.strong.color,
        width: 1.0,
        radius: radius::FULL.into(),
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: outline,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.weak.color.into()),
            text_color: palette.background.base.text,
            border: outline,
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.weak.color.into()),
            text_color: palette.primary.weak.text,
            border: outline,
            ..Default::default()
        },
    }
}
