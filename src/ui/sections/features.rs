// SPDX-License-Identifier: MPL-2.0
//! Feature card grid: reveal cascade, hover lift and tilt, press ripples.
//!
//! Cards below the fold start fully transparent and fade in once the reveal
//! tracker latches them, each offset by its stagger delay. The copy rises
//! through the last stretch of the fade inside the clipped card face.

use iced::alignment::Horizontal;
use iced::widget::{container, mouse_area, text, Column, Container, Row, Stack, Text};
use iced::{Border, Color, Element, Length, Padding, Shadow, Theme, Vector};

use crate::app::section::{
    FeatureId, RevealTarget, FEATURES_HEADING_BLOCK, FEATURES_HEIGHT,
};
use crate::app::{App, Message};
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::ui::sections::faded;
use crate::ui::state::TiltState;
use crate::ui::widgets::RippleOverlay;

/// How far the card copy rises during its entrance.
const ENTRANCE_RISE: f32 = 30.0;

/// Pixels of shadow displacement per degree of tilt.
const TILT_SHADOW_SCALE: f32 = 0.6;

pub fn view(app: &App) -> Element<'_, Message> {
    let colors = &app.theme.colors;

    let heading_color = colors.text_primary;
    let heading = Text::new(app.i18n.tr("features-heading"))
        .size(typography::TITLE_LG)
        .align_x(Horizontal::Center)
        .style(move |_theme: &Theme| text::Style {
            color: Some(heading_color),
        });

    let subheading_color = colors.text_secondary;
    let subheading = Text::new(app.i18n.tr("features-subheading"))
        .size(typography::BODY_LG)
        .align_x(Horizontal::Center)
        .style(move |_theme: &Theme| text::Style {
            color: Some(subheading_color),
        });

    let heading_block = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(heading)
            .push(subheading),
    )
    .center_x(Length::Fill)
    .height(Length::Fixed(FEATURES_HEADING_BLOCK));

    let rows = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(card_row(app, FeatureId::Roadmaps, FeatureId::Plans))
        .push(card_row(app, FeatureId::Mentor, FeatureId::Playlists));

    Container::new(Column::new().push(heading_block).push(rows))
        .width(Length::Fill)
        .height(Length::Fixed(FEATURES_HEIGHT))
        .padding([spacing::XL, 0.0])
        .into()
}

fn card_row(app: &App, left: FeatureId, right: FeatureId) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::LG)
        .push(feature_card(app, left))
        .push(feature_card(app, right))
        .into()
}

fn feature_card(app: &App, card: FeatureId) -> Element<'_, Message> {
    let index = card.index();
    let colors = &app.theme.colors;
    let tilt = &app.tilts[index];
    let entrance = app.entrance(RevealTarget::FeatureCard(card));
    let lifted = tilt.is_hovered();

    let rise = (1.0 - entrance) * ENTRANCE_RISE;

    let title_color = faded(colors.text_primary, entrance);
    let title = Text::new(app.i18n.tr(card.title_key()))
        .size(typography::TITLE_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(title_color),
        });

    let body_color = faded(colors.text_secondary, entrance);
    let body = Text::new(app.i18n.tr(card.body_key()))
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(body_color),
        });

    let copy = Column::new().spacing(spacing::SM).push(title).push(body);

    let surface = faded(colors.surface_secondary, entrance);
    let hairline = faded(colors.surface_tertiary, entrance);
    // Reduced motion keeps the hover elevation but not the cursor-following
    // shadow slide.
    let shadow_tilt = if app.reduced_motion {
        TiltState::default()
    } else {
        *tilt
    };
    let card_shadow = shadow_for(&shadow_tilt, lifted, entrance);
    let face = Container::new(copy)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .padding(Padding {
            top: spacing::LG + rise,
            right: spacing::LG,
            bottom: spacing::LG,
            left: spacing::LG,
        })
        .clip(true)
        .style(move |_theme: &Theme| container::Style {
            background: Some(surface.into()),
            border: Border {
                color: hairline,
                width: 1.0,
                radius: radius::LG.into(),
            },
            shadow: card_shadow,
            ..Default::default()
        });

    let face: Element<'_, Message> = if app.ripples[index].is_empty() {
        face.into()
    } else {
        Stack::new()
            .push(face)
            .push(RippleOverlay::new(&app.ripples[index], app.now, Color::WHITE).into_element())
            .into()
    };

    let interactive = mouse_area(face)
        .on_move(move |position| Message::CardHovered { card, position })
        .on_exit(Message::CardUnhovered(card))
        .on_press(Message::CardPressed(card));

    // The wrapper reserves the lift travel; hovering removes the top gap so
    // the card rises without moving anything around it.
    let lift_gap = if lifted { 0.0 } else { sizing::CARD_LIFT };
    Container::new(interactive)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_LIFT + sizing::CARD_HEIGHT))
        .padding(Padding {
            top: lift_gap,
            ..Padding::ZERO
        })
        .into()
}

/// Shadow carrying both the hover elevation and the tilt direction.
///
/// The tilt cannot rotate flat widgets, so it shows up as the shadow
/// sliding away from the cursor instead.
fn shadow_for(tilt: &TiltState, lifted: bool, entrance: f32) -> Shadow {
    let base = if lifted { shadow::LG } else { shadow::SM };
    Shadow {
        color: faded(base.color, entrance),
        offset: Vector::new(
            base.offset.x + tilt.rotate_y() * TILT_SHADOW_SCALE,
            base.offset.y - tilt.rotate_x() * TILT_SHADOW_SCALE,
        ),
        blur_radius: base.blur_radius,
    }
}
