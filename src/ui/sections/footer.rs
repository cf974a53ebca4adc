// SPDX-License-Identifier: MPL-2.0
//! Footer: tagline, contact line, anchor shortcuts, and the copyright.
//!
//! The anchor shortcuts go through the string-anchor path on purpose, the
//! same one external "skillforge://" style links would take.

use chrono::Datelike;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{Border, Element, Length, Theme};

use crate::app::section::{RevealTarget, SectionId, FOOTER_HEIGHT};
use crate::app::{App, Message};
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::sections::faded;

pub fn view(app: &App) -> Element<'_, Message> {
    let colors = &app.theme.colors;
    let entrance = app.entrance(RevealTarget::Footer);

    let tagline_color = faded(colors.text_primary, entrance);
    let tagline = Text::new(app.i18n.tr("footer-tagline"))
        .size(typography::BODY_LG)
        .style(move |_theme: &Theme| text::Style {
            color: Some(tagline_color),
        });

    let contact_color = faded(colors.text_secondary, entrance);
    let contact = Text::new(app.i18n.tr("footer-contact"))
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(contact_color),
        });

    let mut shortcuts = Row::new().spacing(spacing::SM);
    for section in SectionId::ALL {
        let label = app.i18n.tr(section.label_key());
        shortcuts = shortcuts.push(
            button(Text::new(label).size(typography::BODY_SM))
                .on_press(Message::ScrollToAnchor(section.anchor().to_string()))
                .padding([spacing::XXS, spacing::XS])
                .style(shortcut_style),
        );
    }

    let year = chrono::Local::now().year().to_string();
    let copyright_color = faded(colors.text_tertiary, entrance);
    let copyright = Text::new(
        app.i18n
            .tr_with_args("footer-copyright", &[("year", year.as_str())]),
    )
    .size(typography::CAPTION)
    .style(move |_theme: &Theme| text::Style {
        color: Some(copyright_color),
    });

    let surface = faded(colors.surface_secondary, entrance);
    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(tagline)
            .push(contact)
            .push(shortcuts)
            .push(copyright),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(FOOTER_HEIGHT))
    .style(move |_theme: &Theme| container::Style {
        background: Some(surface.into()),
        ..Default::default()
    })
    .into()
}

/// Quiet text links that pick up the brand color on hover.
fn shortcut_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: None,
            text_color: palette.primary.strong.color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..Default::default()
        },
    }
}
