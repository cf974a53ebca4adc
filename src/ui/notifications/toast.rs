// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small severity-colored cards stacked in the top-right corner.
//! The slide-in and slide-out are driven by notification age: the card sits
//! inside a clipped, fixed-width container and is pushed right by a spacer,
//! so an offset equal to the card width hides it completely.

use super::notification::{Notification, DISPLAY_UNTIL, ENTRY_DELAY, EXIT_RUN, REMOVE_AFTER};
use super::presenter::Presenter;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use iced::widget::{text, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Horizontal travel of the slide, equal to the card width so that a fully
/// offset card is fully clipped.
const SLIDE_DISTANCE: f32 = sizing::TOAST_WIDTH;

/// Screen corner the toast stack anchors to.
const STACK_ANCHOR_X: alignment::Horizontal = alignment::Horizontal::Right;
const STACK_ANCHOR_Y: alignment::Vertical = alignment::Vertical::Top;

/// Rightward offset of the card at the given age, in `[0, SLIDE_DISTANCE]`.
///
/// Entry and exit share the same 300 ms ease. The card starts fully hidden,
/// slides in after the entry delay, rests at zero, and slides back out over
/// the exit window.
#[must_use]
pub fn slide_offset(age: Duration) -> f32 {
    let entry_settled = ENTRY_DELAY + EXIT_RUN;
    if age < ENTRY_DELAY {
        SLIDE_DISTANCE
    } else if age < entry_settled {
        let progress = (age - ENTRY_DELAY).as_secs_f32() / EXIT_RUN.as_secs_f32();
        SLIDE_DISTANCE * (1.0 - progress)
    } else if age < DISPLAY_UNTIL {
        0.0
    } else if age < REMOVE_AFTER {
        let progress = (age - DISPLAY_UNTIL).as_secs_f32() / EXIT_RUN.as_secs_f32();
        SLIDE_DISTANCE * progress
    } else {
        SLIDE_DISTANCE
    }
}

/// Card opacity at the given age: fully opaque until the exit begins, then
/// fades out alongside the exit slide.
#[must_use]
pub fn alpha(age: Duration) -> f32 {
    if age < DISPLAY_UNTIL {
        1.0
    } else if age < REMOVE_AFTER {
        1.0 - (age - DISPLAY_UNTIL).as_secs_f32() / EXIT_RUN.as_secs_f32()
    } else {
        0.0
    }
}

/// Slide offset and opacity for a card of the given age.
///
/// Reduced motion trades the slide for a fade: the card stays put, hidden
/// through the entry beat, then follows the normal opacity curve.
fn presentation(age: Duration, reduced_motion: bool) -> (f32, f32) {
    if reduced_motion {
        let card_alpha = if age < ENTRY_DELAY { 0.0 } else { alpha(age) };
        (0.0, card_alpha)
    } else {
        (slide_offset(age), alpha(age))
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast at its age-appropriate slide position.
    ///
    /// With `reduced_motion` the card keeps its lifecycle clock but fades in
    /// place instead of sliding.
    pub fn view<'a, M: 'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        now: Instant,
        reduced_motion: bool,
    ) -> Element<'a, M> {
        let age = notification.age_at(now);
        let accent_color = notification.severity().color();
        let (offset, card_alpha) = presentation(age, reduced_motion);

        // Resolve the message text using i18n with optional arguments
        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let message_widget = text(message_text)
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: card_alpha,
                    ..Color::WHITE
                }),
            });

        let card = Container::new(message_widget)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding([spacing::SM, spacing::MD])
            .style(move |_theme: &Theme| toast_card_style(accent_color, card_alpha));

        // Spacer pushes the card right; the clipped outer container crops
        // whatever sticks out, emulating a horizontal translation.
        let shifted = Row::new()
            .push(Space::new().width(Length::Fixed(offset)))
            .push(card);

        Container::new(shifted)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .clip(true)
            .into()
    }

    /// Renders the toast overlay with all live notifications.
    ///
    /// Positions toasts in the top-right corner, stacked vertically with
    /// the oldest on top, which matches their arrival order.
    pub fn view_overlay<'a, M: 'a>(
        presenter: &'a Presenter,
        i18n: &'a I18n,
        now: Instant,
        reduced_motion: bool,
    ) -> Element<'a, M> {
        let toasts: Vec<Element<'a, M>> = presenter
            .iter()
            .map(|notification| Self::view(notification, i18n, now, reduced_motion))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(STACK_ANCHOR_X)
                .align_y(STACK_ANCHOR_Y)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Style function for the toast card.
fn toast_card_style(accent_color: Color, card_alpha: f32) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(iced::Background::Color(Color {
            a: card_alpha,
            ..accent_color
        })),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(Color {
            a: card_alpha,
            ..Color::WHITE
        }),
        ..Default::default()
    }
}
