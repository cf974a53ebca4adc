// SPDX-License-Identifier: MPL-2.0
//! Hero section: headline, the call-to-action pair, and the orb backdrop.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Stack, Text};
use iced::{Border, Element, Length, Theme};

use crate::app::section::{SectionId, HERO_HEIGHT};
use crate::app::{App, Message};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::widgets::OrbField;

pub fn view(app: &App) -> Element<'_, Message> {
    let colors = &app.theme.colors;

    let orbs = OrbField::new(
        &app.orb_cache,
        &app.parallax,
        colors.brand_primary,
        colors.brand_secondary,
    )
    .into_element();

    let title_color = colors.text_primary;
    let title = Text::new(app.i18n.tr("hero-title"))
        .size(typography::DISPLAY)
        .align_x(Horizontal::Center)
        .style(move |_theme: &Theme| text::Style {
            color: Some(title_color),
        });

    let subtitle_color = colors.text_secondary;
    let subtitle = Text::new(app.i18n.tr("hero-subtitle"))
        .size(typography::BODY_LG)
        .align_x(Horizontal::Center)
        .style(move |_theme: &Theme| text::Style {
            color: Some(subtitle_color),
        });

    let explore = cta_button(app.i18n.tr("hero-cta-explore"))
        .on_press(Message::ScrollTo(SectionId::Features))
        .style(primary_cta_style);

    let mentor = cta_button(app.i18n.tr("hero-cta-mentor"))
        .on_press(Message::ScrollTo(SectionId::Mentor))
        .style(secondary_cta_style);

    let ctas = Row::new().spacing(spacing::MD).push(explore).push(mentor);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(subtitle)
        .push(ctas);

    let centered = Container::new(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding([0.0, spacing::XL]);

    Container::new(Stack::new().push(orbs).push(centered))
        .width(Length::Fill)
        .height(Length::Fixed(HERO_HEIGHT))
        .clip(true)
        .into()
}

/// A pill-shaped call-to-action with a vertically centered label.
pub(crate) fn cta_button(label: String) -> iced::widget::Button<'static, Message> {
    button(
        Text::new(label)
            .size(typography::BODY_LG)
            .height(Length::Fill)
            .align_y(Vertical::Center),
    )
    .height(Length::Fixed(sizing::CTA_HEIGHT))
    .padding([0.0, spacing::XL])
}

/// Filled brand pill for the primary action.
pub(crate) fn primary_cta_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let pill = Border {
        radius: radius::FULL.into(),
        ..Border::default()
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: palette.primary.base.text,
            border: pill,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: pill,
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.weak.color.into()),
            text_color: palette.primary.weak.text,
            border: pill,
            ..Default::default()
        },
    }
}

/// Outlined pill for the secondary action.
fn secondary_cta_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let outline = Border {
        color: palette.primary.base.color,
        width: 1.0,
        radius: radius::FULL.into(),
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.primary.base.color,
            border: outline,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.primary.weak.color.into()),
            text_color: palette.primary.weak.text,
            border: outline,
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: palette.primary.base.text,
            border: outline,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Color;

    #[test]
    fn hero_view_renders() {
        let app = App::default();
        let _element = view(&app);
    }

    #[test]
    fn primary_cta_is_filled_and_secondary_is_outlined() {
        let theme = Theme::Light;

        let primary = primary_cta_style(&theme, button::Status::Active);
        assert!(primary.background.is_some());

        let secondary = secondary_cta_style(&theme, button::Status::Active);
        assert!(secondary.background.is_none());
        assert!(secondary.border.width > 0.0);
        assert_ne!(secondary.border.color, Color::TRANSPARENT);
    }
}
