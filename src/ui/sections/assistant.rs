// SPDX-License-Identifier: MPL-2.0
//! Mentor section: a brand-tinted panel inviting the user to summon the
//! assistant. The panel fades in once the reveal tracker latches it.

use iced::alignment::Horizontal;
use iced::widget::{container, text, Column, Container, Text};
use iced::{Border, Color, Element, Length, Theme};

use crate::app::section::{RevealTarget, MENTOR_HEIGHT};
use crate::app::{App, Message};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::sections::{faded, hero};

/// Background alpha of the fully revealed panel tint.
const PANEL_TINT: f32 = 0.08;

pub fn view(app: &App) -> Element<'_, Message> {
    let colors = &app.theme.colors;
    let entrance = app.entrance(RevealTarget::MentorPanel);

    let heading_color = faded(colors.text_primary, entrance);
    let heading = Text::new(app.i18n.tr("mentor-heading"))
        .size(typography::TITLE_LG)
        .align_x(Horizontal::Center)
        .style(move |_theme: &Theme| text::Style {
            color: Some(heading_color),
        });

    let body_color = faded(colors.text_secondary, entrance);
    let body = Text::new(app.i18n.tr("mentor-body"))
        .size(typography::BODY_LG)
        .align_x(Horizontal::Center)
        .style(move |_theme: &Theme| text::Style {
            color: Some(body_color),
        });

    let cta = hero::cta_button(app.i18n.tr("mentor-cta"))
        .on_press(Message::MentorCtaPressed)
        .style(hero::primary_cta_style);

    let tint = faded(
        Color {
            a: PANEL_TINT,
            ..colors.brand_primary
        },
        entrance,
    );
    let hairline = faded(colors.surface_tertiary, entrance);
    let panel = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(heading)
            .push(body)
            .push(cta),
    )
    .max_width(sizing::CONTENT_MAX_WIDTH)
    .padding(spacing::XL)
    .style(move |_theme: &Theme| container::Style {
        background: Some(tint.into()),
        border: Border {
            color: hairline,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    });

    Container::new(panel)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(MENTOR_HEIGHT))
        .padding([0.0, spacing::XL])
        .into()
}
