// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the fixed chrome (navbar and progress ribbon) above the
//! scrollable page column, then stacks the toast overlay on top.

use iced::widget::{container, Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};

use super::{App, Message};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::sections::{assistant, features, footer, hero};
use crate::ui::widgets::ProgressRibbon;

/// Widget id of the page scrollable, shared with the scripted scroll task.
pub const SCROLLABLE_ID: &str = "landing-page";

pub fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        colors: &app.theme.colors,
        theme_mode: app.theme.mode,
    })
    .map(Message::Navbar);

    let ribbon = ProgressRibbon::new(
        &app.ribbon_cache,
        app.progress_fraction,
        app.theme.colors.brand_primary,
    )
    .into_element();

    let page = Scrollable::new(
        Column::new()
            .push(hero::view(app))
            .push(features::view(app))
            .push(assistant::view(app))
            .push(footer::view(app)),
    )
    .id(Id::new(SCROLLABLE_ID))
    .width(Length::Fill)
    .height(Length::Fill)
    .on_scroll(|viewport| Message::PageScrolled {
        offset_y: viewport.absolute_offset().y,
        viewport_height: viewport.bounds().height,
    });

    let chrome_and_page = Column::new().push(navbar).push(ribbon).push(page);

    let surface = app.theme.colors.surface_primary;
    let text = app.theme.colors.text_primary;
    let themed = Container::new(
        Stack::new().push(chrome_and_page).push(Toast::view_overlay(
            &app.notifications,
            &app.i18n,
            app.now,
            app.reduced_motion,
        )),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_theme| container::Style {
        background: Some(surface.into()),
        text_color: Some(text),
        ..container::Style::default()
    });

    themed.into()
}
