// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the landing window.
//!
//! The `App` struct owns every piece of page state: scroll position, motion
//! state machines, notifications, and the persisted preferences. This file
//! intentionally keeps policy decisions (window sizing, debounce windows,
//! scripted toast timing) close to the main update loop so it is easy to
//! audit user-facing behavior.

mod message;
pub mod section;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use iced::widget::canvas;
use iced::{Element, Size, Subscription, Task, Theme};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::telemetry::EngagementTracker;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::Presenter;
use crate::ui::state::{
    Debouncer, ParallaxField, RevealTracker, Ripple, SmoothScroll, TiltState,
};
use crate::ui::theming::{AppTheme, ThemeMode};
use section::{FeatureId, RevealTarget};

pub const WINDOW_DEFAULT_WIDTH: f32 = 1080.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 860.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Animation frame cadence, roughly 60 Hz.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Quiet window for pointer samples feeding the parallax field.
const POINTER_QUIET: Duration = Duration::from_millis(16);

/// Quiet window for scroll samples feeding the progress ribbon.
const PROGRESS_QUIET: Duration = Duration::from_millis(10);

/// Pause before the welcome toast greets a fresh session.
const WELCOME_DELAY: Duration = Duration::from_millis(1_000);

/// Simulated mentor turnaround between the thinking and ready toasts.
const ASSISTANT_REPLY_DELAY: Duration = Duration::from_millis(1_500);

/// Height of the scroll viewport for a given window height.
///
/// The navbar and the progress ribbon are fixed chrome above the page and
/// eat into what the scrollable can show.
fn viewport_height_for(window_height: f32) -> f32 {
    (window_height - sizing::NAVBAR_HEIGHT - sizing::RIBBON_HEIGHT).max(0.0)
}

/// Root Iced application state that bridges page sections, motion state,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    /// Persisted user settings.
    config: Config,
    /// Config directory override from the CLI; settings are read from and
    /// written back to the same place.
    config_dir: Option<PathBuf>,
    /// Skip decorative motion, per the persisted accessibility preference.
    pub(crate) reduced_motion: bool,
    /// Active color scheme together with the mode that produced it.
    pub(crate) theme: AppTheme,
    /// Launch instant, consumed when the window first opens.
    launched_at: Option<Instant>,
    /// Current window size, used to normalize pointer positions.
    window_size: Size,
    /// Scroll offset of the page in content coordinates.
    page_offset: f32,
    /// Height of the scroll viewport.
    viewport_height: f32,
    /// Read progress shown by the ribbon, in `[0, 1]`.
    pub(crate) progress_fraction: f32,
    /// Eased scripted scrolling toward an anchor target.
    smooth_scroll: SmoothScroll,
    /// Collapses pointer bursts before they reach the parallax field.
    pointer_debounce: Debouncer<(f32, f32)>,
    /// Collapses scroll bursts before the ribbon recomputes.
    progress_debounce: Debouncer<()>,
    /// One-way reveal latches for below-the-fold content.
    pub(crate) reveal: RevealTracker<RevealTarget>,
    /// Pointer-driven drift of the hero orbs.
    pub(crate) parallax: ParallaxField,
    /// Per-card hover tilt, indexed by `FeatureId::index`.
    pub(crate) tilts: [TiltState; 4],
    /// In-flight press ripples, indexed by `FeatureId::index`.
    pub(crate) ripples: [Vec<Ripple>; 4],
    /// Queued toast notifications.
    pub(crate) notifications: Presenter,
    /// Foreground-time accounting for the session summary.
    engagement: EngagementTracker,
    /// Clock the view renders against, refreshed on every update.
    pub(crate) now: Instant,
    /// Geometry cache for the hero orb canvas.
    pub(crate) orb_cache: canvas::Cache,
    /// Geometry cache for the progress ribbon canvas.
    pub(crate) ribbon_cache: canvas::Cache,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page_offset", &self.page_offset)
            .field("revealed", &self.reveal.active_count())
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            config_dir: None,
            reduced_motion: false,
            theme: AppTheme::new(ThemeMode::default()),
            launched_at: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            page_offset: 0.0,
            viewport_height: viewport_height_for(WINDOW_DEFAULT_HEIGHT),
            progress_fraction: 0.0,
            smooth_scroll: SmoothScroll::default(),
            pointer_debounce: Debouncer::new(POINTER_QUIET),
            progress_debounce: Debouncer::new(PROGRESS_QUIET),
            reveal: RevealTracker::new(),
            parallax: ParallaxField::new(),
            tilts: [TiltState::default(); 4],
            ripples: std::array::from_fn(|_| Vec::new()),
            notifications: Presenter::new(),
            engagement: EngagementTracker::new(),
            now: Instant::now(),
            orb_cache: canvas::Cache::default(),
            ribbon_cache: canvas::Cache::default(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and schedules
    /// the welcome toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match flags.config_dir.as_deref() {
            Some(dir) => config::load_from_dir(dir).unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };
        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme = AppTheme::new(config.theme_mode);
        let welcome_enabled = config.welcome_toast_enabled();
        let reduced_motion = config.reduced_motion_enabled();

        let mut app = App {
            i18n,
            theme,
            config,
            reduced_motion,
            ..Self::default()
        };
        app.config_dir = flags.config_dir;
        app.launched_at = flags.launched_at;
        app.engagement.start(app.now);
        app.register_reveal_targets();

        // The hero fills the first viewport, but a tall window could already
        // show part of the features row before any scrolling happens.
        app.reveal.viewport_changed(0.0, app.viewport_height, app.now);

        let task = if welcome_enabled {
            Task::perform(async { tokio::time::sleep(WELCOME_DELAY).await }, |()| {
                Message::WelcomeToastDue
            })
        } else {
            Task::none()
        };

        (app, task)
    }

    /// Registers every below-the-fold region with the reveal tracker.
    ///
    /// The feature cards join the staggered group in reading order; the
    /// mentor panel and the footer reveal on their own.
    fn register_reveal_targets(&mut self) {
        for card in FeatureId::ALL {
            self.reveal.observe_staggered(
                RevealTarget::FeatureCard(card),
                section::feature_card_region(card),
            );
        }
        self.reveal
            .observe(RevealTarget::MentorPanel, section::mentor_region());
        self.reveal
            .observe(RevealTarget::Footer, section::footer_region());
    }

    /// Entrance progress for a reveal target in `[0, 1]`.
    ///
    /// Under reduced motion revealed content appears settled immediately
    /// instead of sliding in.
    pub(crate) fn entrance(&self, target: RevealTarget) -> f32 {
        if self.reduced_motion {
            if self.reveal.is_active(target) {
                1.0
            } else {
                0.0
            }
        } else {
            self.reveal.entrance_progress(target, self.now)
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme.mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.needs_frames());
        Subscription::batch([event_sub, tick_sub])
    }

    /// Whether anything on screen is mid-animation and needs frame ticks.
    fn needs_frames(&self) -> bool {
        self.pointer_debounce.is_pending()
            || self.progress_debounce.is_pending()
            || self.smooth_scroll.is_animating()
            || (!self.reduced_motion && self.reveal.is_animating(self.now))
            || self.notifications.has_notifications()
            || self.ripples.iter().any(|layer| !layer.is_empty())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(self, navbar_message)
            }
            Message::ScrollTo(section) => update::handle_scroll_to(self, section),
            Message::ScrollToAnchor(anchor) => update::handle_scroll_to_anchor(self, &anchor),
            Message::PageScrolled {
                offset_y,
                viewport_height,
            } => update::handle_page_scrolled(self, offset_y, viewport_height),
            Message::PointerMoved(position) => update::handle_pointer_moved(self, position),
            Message::PointerLeft => update::handle_pointer_left(self),
            Message::CardHovered { card, position } => {
                update::handle_card_hovered(self, card, position)
            }
            Message::CardUnhovered(card) => update::handle_card_unhovered(self, card),
            Message::CardPressed(card) => update::handle_card_pressed(self, card),
            Message::MentorCtaPressed => update::handle_mentor_cta(self),
            Message::AssistantReady => update::handle_assistant_ready(self),
            Message::WelcomeToastDue => update::handle_welcome_due(self),
            Message::Tick(_instant) => update::handle_tick(self),
            Message::WindowOpened => update::handle_window_opened(self),
            Message::WindowResized(size) => update::handle_window_resized(self, size),
            Message::WindowFocused => update::handle_visibility_changed(self, true),
            Message::WindowUnfocused => update::handle_visibility_changed(self, false),
            Message::WindowCloseRequested(id) => update::handle_close_requested(self, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navbar;
    use crate::ui::notifications::Severity;
    use iced::{window, Point};
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    /// An app with English strings regardless of the host locale.
    fn english_app() -> App {
        let mut app = App::default();
        app.i18n
            .set_locale("en-US".parse().expect("valid locale"));
        app
    }

    fn past(millis: u64) -> Instant {
        Instant::now() - Duration::from_millis(millis)
    }

    #[test]
    fn new_starts_unrevealed_at_the_top() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.page_offset, 0.0);
            assert_eq!(app.progress_fraction, 0.0);
            assert_eq!(app.reveal.active_count(), 0);
            assert!(app.notifications.is_empty());
            assert!(app.engagement.is_visible());
        });
    }

    #[test]
    fn scrolling_past_the_fold_reveals_cards_in_group_order() {
        let mut app = App::default();
        app.register_reveal_targets();

        // First card row enters the biased viewport; the second stays below.
        let _ = app.update(Message::PageScrolled {
            offset_y: 200.0,
            viewport_height: 693.0,
        });
        assert!(app
            .reveal
            .is_active(RevealTarget::FeatureCard(FeatureId::Roadmaps)));
        assert!(app
            .reveal
            .is_active(RevealTarget::FeatureCard(FeatureId::Plans)));
        assert!(!app
            .reveal
            .is_active(RevealTarget::FeatureCard(FeatureId::Mentor)));

        // One activation assigns the stagger across the whole group.
        for card in FeatureId::ALL {
            assert_eq!(
                app.reveal.entrance_delay(RevealTarget::FeatureCard(card)),
                crate::ui::state::reveal::STAGGER_STEP * card.index() as u32
            );
        }

        // Deeper scroll reveals the rest.
        let _ = app.update(Message::PageScrolled {
            offset_y: 400.0,
            viewport_height: 693.0,
        });
        assert!(app
            .reveal
            .is_active(RevealTarget::FeatureCard(FeatureId::Playlists)));

        // Scrolling back up never un-reveals.
        let _ = app.update(Message::PageScrolled {
            offset_y: 0.0,
            viewport_height: 693.0,
        });
        assert_eq!(app.reveal.active_count(), 4);
    }

    #[test]
    fn welcome_toast_presents_as_info() {
        let mut app = App::default();
        let _ = app.update(Message::WelcomeToastDue);

        let toast = app.notifications.iter().next().expect("one toast");
        assert_eq!(toast.message_key(), "notification-welcome");
        assert_eq!(toast.severity(), Severity::Info);
    }

    #[test]
    fn theme_cycle_from_navbar_persists_to_config() {
        with_temp_config_dir(|_| {
            let (mut app, _task) = App::new(Flags::default());
            assert_eq!(app.theme.mode, ThemeMode::System);

            let _ = app.update(Message::Navbar(navbar::Message::CycleTheme));
            assert_eq!(app.theme.mode, ThemeMode::Light);

            let reloaded = config::load().expect("reload config");
            assert_eq!(reloaded.theme_mode, ThemeMode::Light);

            let _ = app.update(Message::Navbar(navbar::Message::CycleTheme));
            assert_eq!(app.theme.mode, ThemeMode::Dark);
        });
    }

    #[test]
    fn config_dir_flag_overrides_where_settings_live() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let stored = Config {
            theme_mode: ThemeMode::Dark,
            reduced_motion: Some(true),
            ..Config::default()
        };
        config::save_to_dir(&stored, temp_dir.path()).expect("failed to seed settings");

        let (mut app, _task) = App::new(Flags {
            config_dir: Some(temp_dir.path().to_path_buf()),
            ..Flags::default()
        });
        assert_eq!(app.theme.mode, ThemeMode::Dark);
        assert!(app.reduced_motion);

        // Theme changes persist back into the same directory.
        let _ = app.update(Message::Navbar(navbar::Message::CycleTheme));
        let reloaded = config::load_from_dir(temp_dir.path()).expect("reload settings");
        assert_eq!(reloaded.theme_mode, app.theme.mode);
    }

    #[test]
    fn reduced_motion_skips_the_decorative_effects() {
        let mut app = App::default();
        app.reduced_motion = true;

        // Pointer bursts stop at the gate, so the parallax never arms.
        let _ = app.update(Message::PointerMoved(Point::new(5.0, 5.0)));
        assert!(!app.pointer_debounce.is_pending());

        // Presses still announce the feature but spawn no ripple.
        let _ = app.update(Message::CardPressed(FeatureId::Plans));
        assert!(app.ripples[FeatureId::Plans.index()].is_empty());
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn reduced_motion_jumps_to_sections_without_easing() {
        let mut app = App::default();
        app.reduced_motion = true;

        let _ = app.update(Message::ScrollTo(section::SectionId::Features));
        assert_eq!(app.page_offset, section::HERO_HEIGHT);
        assert!(!app.smooth_scroll.is_animating());
    }

    #[test]
    fn reduced_motion_entrance_snaps_to_settled() {
        let mut app = App::default();
        app.reduced_motion = true;
        app.register_reveal_targets();

        let target = RevealTarget::FeatureCard(FeatureId::Roadmaps);
        assert_eq!(app.entrance(target), 0.0);

        let _ = app.update(Message::PageScrolled {
            offset_y: 200.0,
            viewport_height: 693.0,
        });
        assert_eq!(app.entrance(target), 1.0);

        // A fresh activation would normally animate for a while; without
        // motion there is nothing left to drive once the debounce clears.
        app.progress_debounce.cancel();
        assert!(!app.needs_frames());
    }

    #[test]
    fn known_anchor_starts_a_scroll_run() {
        let mut app = App::default();
        let _ = app.update(Message::ScrollToAnchor("features".to_string()));

        assert!(app.smooth_scroll.is_animating());
        assert_eq!(app.smooth_scroll.target(), Some(section::HERO_HEIGHT));
    }

    #[test]
    fn unknown_anchor_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::ScrollToAnchor("pricing".to_string()));
        assert!(!app.smooth_scroll.is_animating());
    }

    #[test]
    fn footer_navigation_clamps_to_page_end() {
        let mut app = App::default();
        let _ = app.update(Message::ScrollTo(section::SectionId::Footer));

        // The footer's top edge sits past the maximum scroll offset.
        let travel = section::page_height() - app.viewport_height;
        assert_eq!(app.smooth_scroll.target(), Some(travel));
    }

    #[test]
    fn smooth_scroll_settles_on_ticks() {
        let mut app = App::default();
        let _ = app.update(Message::ScrollTo(section::SectionId::Features));

        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.page_offset > 0.0);
        assert!(app.page_offset < section::HERO_HEIGHT);

        for _ in 0..200 {
            let _ = app.update(Message::Tick(Instant::now()));
        }
        assert_eq!(app.page_offset, section::HERO_HEIGHT);
        assert!(!app.smooth_scroll.is_animating());
    }

    #[test]
    fn card_press_spawns_ripple_and_toast_at_the_cursor() {
        let mut app = english_app();
        let _ = app.update(Message::CardHovered {
            card: FeatureId::Mentor,
            position: Point::new(40.0, 20.0),
        });
        let _ = app.update(Message::CardPressed(FeatureId::Mentor));

        let index = FeatureId::Mentor.index();
        assert_eq!(app.ripples[index].len(), 1);
        assert_eq!(app.ripples[index][0].center(), (40.0, 20.0));

        let toast = app.notifications.iter().next().expect("one toast");
        assert_eq!(toast.message_key(), "notification-exploring");
        let feature = app.i18n.tr(FeatureId::Mentor.title_key());
        assert!(toast
            .message_args()
            .contains(&("feature".to_string(), feature)));
    }

    #[test]
    fn card_press_without_hover_centers_the_ripple() {
        let mut app = App::default();
        let _ = app.update(Message::CardPressed(FeatureId::Roadmaps));

        let ripple = &app.ripples[0][0];
        assert_eq!(
            ripple.center(),
            (sizing::CARD_WIDTH / 2.0, sizing::CARD_HEIGHT / 2.0)
        );
    }

    #[test]
    fn mentor_cta_queues_thinking_then_ready() {
        let mut app = App::default();
        let _ = app.update(Message::MentorCtaPressed);

        assert_eq!(app.notifications.len(), 1);
        let first = app.notifications.iter().next().expect("thinking toast");
        assert_eq!(first.message_key(), "notification-assistant-thinking");
        assert_eq!(first.severity(), Severity::Success);

        let _ = app.update(Message::AssistantReady);
        assert_eq!(app.notifications.len(), 2);
        let last = app.notifications.iter().last().expect("ready toast");
        assert_eq!(last.message_key(), "notification-assistant-ready");
        assert_eq!(last.severity(), Severity::Success);
    }

    #[test]
    fn pointer_burst_reaches_parallax_after_the_quiet_window() {
        let mut app = App::default();

        // Window top-left corner, observed long enough ago to be due.
        app.pointer_debounce.observe((0.0, 0.0), past(50));
        let _ = app.update(Message::Tick(Instant::now()));

        let (x, y) = app.parallax.layer_offset(0);
        assert!(x < 0.0);
        assert!(y < 0.0);
    }

    #[test]
    fn pointer_moves_alone_do_not_move_the_parallax() {
        let mut app = App::default();
        let _ = app.update(Message::PointerMoved(Point::new(0.0, 0.0)));

        assert!(app.pointer_debounce.is_pending());
        assert_eq!(app.parallax.layer_offset(0), (0.0, 0.0));
    }

    #[test]
    fn pointer_leaving_the_window_parks_the_backdrop() {
        let mut app = App::default();

        // Displace the layers with a delivered burst, then leave one in flight.
        app.pointer_debounce.observe((0.0, 0.0), past(50));
        let _ = app.update(Message::Tick(Instant::now()));
        assert_ne!(app.parallax.layer_offset(0), (0.0, 0.0));
        let _ = app.update(Message::PointerMoved(Point::new(900.0, 700.0)));

        let _ = app.update(Message::PointerLeft);
        assert_eq!(app.parallax.layer_offset(0), (0.0, 0.0));
        assert!(!app.pointer_debounce.is_pending());
    }

    #[test]
    fn scroll_updates_ribbon_after_debounce() {
        let mut app = App::default();
        let _ = app.update(Message::PageScrolled {
            offset_y: 577.5,
            viewport_height: 693.0,
        });
        assert_eq!(app.progress_fraction, 0.0);

        // Re-arm the debouncer in the past so the next tick delivers.
        app.progress_debounce.observe((), past(50));
        let _ = app.update(Message::Tick(Instant::now()));

        // Travel is 1848 - 693 = 1155, so 577.5 sits exactly halfway.
        assert!((app.progress_fraction - 0.5).abs() < 1e-6);
    }

    #[test]
    fn tick_prunes_finished_ripples() {
        let mut app = App::default();
        app.ripples[1].push(Ripple::new((10.0, 10.0), past(700)));
        app.ripples[1].push(Ripple::new((20.0, 20.0), Instant::now()));

        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.ripples[1].len(), 1);
        assert_eq!(app.ripples[1][0].center(), (20.0, 20.0));
    }

    #[test]
    fn needs_frames_follows_live_state() {
        let mut app = App::default();
        assert!(!app.needs_frames());

        let _ = app.update(Message::PointerMoved(Point::new(5.0, 5.0)));
        assert!(app.needs_frames());

        app.pointer_debounce.cancel();
        assert!(!app.needs_frames());

        let _ = app.update(Message::WelcomeToastDue);
        assert!(app.needs_frames());
    }

    #[test]
    fn resize_recomputes_viewport_height() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(Size::new(1_000.0, 800.0)));

        assert_eq!(app.window_size, Size::new(1_000.0, 800.0));
        assert_eq!(app.viewport_height, viewport_height_for(800.0));
    }

    #[test]
    fn focus_changes_gate_engagement() {
        let mut app = App::default();
        app.engagement.start(app.now);
        assert!(app.engagement.is_visible());

        let _ = app.update(Message::WindowUnfocused);
        assert!(!app.engagement.is_visible());

        let _ = app.update(Message::WindowFocused);
        assert!(app.engagement.is_visible());
    }

    #[test]
    fn window_open_consumes_the_launch_instant() {
        let mut app = App::default();
        app.launched_at = Some(past(25));

        let _ = app.update(Message::WindowOpened);
        assert!(app.launched_at.is_none());

        // A second open event has nothing left to report.
        let _ = app.update(Message::WindowOpened);
        assert!(app.launched_at.is_none());
    }

    #[test]
    fn close_request_produces_a_close_task() {
        let mut app = App::default();
        // Returns a window-close task; the engagement line goes to stderr.
        let _task = app.update(Message::WindowCloseRequested(window::Id::unique()));
    }

    #[test]
    fn window_title_is_localized() {
        let app = english_app();
        assert_eq!(app.title(), "SkillForge");
    }

    #[test]
    fn explicit_theme_modes_map_to_iced_themes() {
        let mut app = App::default();

        app.theme = AppTheme::new(ThemeMode::Light);
        assert!(matches!(app.theme(), Theme::Light));

        app.theme = AppTheme::new(ThemeMode::Dark);
        assert!(matches!(app.theme(), Theme::Dark));
    }
}
