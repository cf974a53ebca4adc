// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::app::section::{FeatureId, SectionId};
use crate::ui::navbar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    /// Begin an eased scroll run to a section's top edge.
    ScrollTo(SectionId),
    /// Resolve an anchor name and scroll to it; unknown anchors are ignored.
    ScrollToAnchor(String),
    /// The scrollable reported a new viewport after a user scroll.
    PageScrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    /// Raw pointer position in window coordinates, pre-debounce.
    PointerMoved(iced::Point),
    /// Pointer left the window; decorative motion parks at rest.
    PointerLeft,
    /// Pointer moved over a feature card; `position` is card-local.
    CardHovered {
        card: FeatureId,
        position: iced::Point,
    },
    CardUnhovered(FeatureId),
    CardPressed(FeatureId),
    MentorCtaPressed,
    /// The mentor's delayed reply is ready to present.
    AssistantReady,
    /// The post-launch welcome toast is due.
    WelcomeToastDue,
    Tick(Instant), // Periodic tick for animation and debouncer polling
    /// The window finished opening; startup telemetry is reported here.
    WindowOpened,
    WindowResized(iced::Size),
    WindowFocused,
    WindowUnfocused,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Directory to read and write `settings.toml` in, instead of the
    /// platform config directory.
    pub config_dir: Option<std::path::PathBuf>,
    /// When the process started, for the startup telemetry line.
    pub launched_at: Option<Instant>,
}
