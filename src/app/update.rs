// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler takes the whole [`App`] because most of them touch several
//! pieces of state at once: a scroll event moves the viewport, feeds the
//! progress debouncer, and re-evaluates the reveal tracker in one go.

use iced::widget::operation;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::Id;
use iced::{window, Point, Size, Task};

use crate::config;
use crate::telemetry;
use crate::ui::design_tokens::sizing;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Notification;
use crate::ui::state::{scroll_progress, Ripple};
use crate::ui::theming::AppTheme;

use super::section::{self, FeatureId, SectionId};
use super::view::SCROLLABLE_ID;
use super::{App, Message};

/// Advances every time-driven piece of state by one animation frame.
///
/// Ticks only arrive while something is moving (see `App::needs_frames`),
/// so this is also where the debouncers get their trailing-edge polls.
pub fn handle_tick(app: &mut App) -> Task<Message> {
    let now = app.now;

    if let Some(pointer) = app.pointer_debounce.poll(now) {
        app.parallax
            .retarget(pointer, (app.window_size.width, app.window_size.height));
        app.orb_cache.clear();
    }

    if app.progress_debounce.poll(now).is_some() {
        // Recompute from the live offset rather than the sampled one, so a
        // collapsed burst still lands on the final scroll position.
        let fraction = scroll_progress::fraction(
            app.page_offset,
            section::page_height(),
            app.viewport_height,
        );
        if (fraction - app.progress_fraction).abs() > f32::EPSILON {
            app.progress_fraction = fraction;
            app.ribbon_cache.clear();
        }
    }

    app.notifications.tick(now);
    for layer in &mut app.ripples {
        layer.retain(|ripple| !ripple.is_expired(now));
    }

    if let Some(offset) = app.smooth_scroll.tick() {
        app.page_offset = offset;
        return snap_page_to(offset, app.viewport_height);
    }

    Task::none()
}

/// Drives the page scrollable to an absolute content offset.
fn snap_page_to(offset: f32, viewport_height: f32) -> Task<Message> {
    let travel = scroll_progress::max_offset(section::page_height(), viewport_height);
    let fraction = if travel > 0.0 {
        (offset / travel).clamp(0.0, 1.0)
    } else {
        0.0
    };
    operation::snap_to(
        Id::new(SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: fraction,
        },
    )
}

pub fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    let mut mode = app.theme.mode;
    match navbar::update(message, &mut mode) {
        NavbarEvent::Navigate(section) => handle_scroll_to(app, section),
        NavbarEvent::ThemeChanged(mode) => {
            app.theme = AppTheme::new(mode);
            app.config.theme_mode = mode;
            if let Err(error) = save_config(app) {
                telemetry::log(&format!("Failed to persist settings: {error}"));
            }
            Task::none()
        }
    }
}

/// Writes the settings back where they were read from.
fn save_config(app: &App) -> crate::error::Result<()> {
    match app.config_dir.as_deref() {
        Some(dir) => config::save_to_dir(&app.config, dir),
        None => config::save(&app.config),
    }
}

/// Starts an eased scroll run toward a section's top edge.
///
/// The target is clamped to the scrollable travel so sections near the
/// bottom of the page settle at the page end instead of overshooting.
pub fn handle_scroll_to(app: &mut App, section: SectionId) -> Task<Message> {
    let travel = scroll_progress::max_offset(section::page_height(), app.viewport_height);
    let target = section::section_offset(section).min(travel);
    if app.reduced_motion {
        app.page_offset = target;
        return snap_page_to(target, app.viewport_height);
    }
    app.smooth_scroll.begin(app.page_offset, target);
    Task::none()
}

pub fn handle_scroll_to_anchor(app: &mut App, anchor: &str) -> Task<Message> {
    match SectionId::from_anchor(anchor) {
        Some(section) => handle_scroll_to(app, section),
        None => Task::none(),
    }
}

pub fn handle_page_scrolled(
    app: &mut App,
    offset_y: f32,
    viewport_height: f32,
) -> Task<Message> {
    app.page_offset = offset_y;
    app.viewport_height = viewport_height;
    app.progress_debounce.observe((), app.now);
    app.reveal.viewport_changed(offset_y, viewport_height, app.now);
    Task::none()
}

pub fn handle_pointer_moved(app: &mut App, position: Point) -> Task<Message> {
    if app.reduced_motion {
        return Task::none();
    }
    app.pointer_debounce
        .observe((position.x, position.y), app.now);
    Task::none()
}

/// Parks the backdrop when the pointer leaves the window.
pub fn handle_pointer_left(app: &mut App) -> Task<Message> {
    app.pointer_debounce.cancel();
    app.parallax.reset();
    app.orb_cache.clear();
    Task::none()
}

pub fn handle_card_hovered(app: &mut App, card: FeatureId, position: Point) -> Task<Message> {
    app.tilts[card.index()].set_cursor(
        (position.x, position.y),
        (sizing::CARD_WIDTH, sizing::CARD_HEIGHT),
    );
    Task::none()
}

pub fn handle_card_unhovered(app: &mut App, card: FeatureId) -> Task<Message> {
    app.tilts[card.index()].reset();
    Task::none()
}

/// Spawns a press ripple on the card and announces the feature in a toast.
///
/// The ripple anchors at the last hovered position; a press that arrives
/// without one (keyboard activation) falls back to the card center.
pub fn handle_card_pressed(app: &mut App, card: FeatureId) -> Task<Message> {
    if !app.reduced_motion {
        let index = card.index();
        let center = app.tilts[index]
            .cursor()
            .unwrap_or((sizing::CARD_WIDTH / 2.0, sizing::CARD_HEIGHT / 2.0));
        app.ripples[index].push(Ripple::new(center, app.now));
    }

    let feature = app.i18n.tr(card.title_key());
    app.notifications.present(
        Notification::info("notification-exploring").with_arg("feature", feature),
    );
    Task::none()
}

pub fn handle_mentor_cta(app: &mut App) -> Task<Message> {
    app.notifications
        .present(Notification::success("notification-assistant-thinking"));
    Task::perform(
        async { tokio::time::sleep(super::ASSISTANT_REPLY_DELAY).await },
        |()| Message::AssistantReady,
    )
}

pub fn handle_assistant_ready(app: &mut App) -> Task<Message> {
    app.notifications
        .present(Notification::success("notification-assistant-ready"));
    Task::none()
}

pub fn handle_welcome_due(app: &mut App) -> Task<Message> {
    app.notifications
        .present(Notification::info("notification-welcome"));
    Task::none()
}

pub fn handle_window_opened(app: &mut App) -> Task<Message> {
    if let Some(launched_at) = app.launched_at.take() {
        telemetry::report_startup(launched_at);
    }
    Task::none()
}

pub fn handle_window_resized(app: &mut App, size: Size) -> Task<Message> {
    app.window_size = size;
    app.viewport_height = super::viewport_height_for(size.height);
    // A taller window can pull below-the-fold regions into view.
    app.reveal
        .viewport_changed(app.page_offset, app.viewport_height, app.now);
    Task::none()
}

pub fn handle_visibility_changed(app: &mut App, visible: bool) -> Task<Message> {
    app.engagement.set_visible(visible, app.now);
    Task::none()
}

/// Reports the engagement summary and lets the window close.
pub fn handle_close_requested(app: &mut App, id: window::Id) -> Task<Message> {
    telemetry::report_engagement(&app.engagement, app.now);
    window::close(id)
}
