// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window and pointer events into top-level messages, and
//! provides the animation tick that only runs while something is moving.

use super::{Message, FRAME_INTERVAL};
use iced::{event, mouse, time, window, Subscription};

/// Window lifecycle and pointer events the update loop cares about.
///
/// Pointer positions are forwarded regardless of capture status: the
/// parallax field tracks the pointer across the whole window, including
/// spans where some widget is handling the same event.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::Opened { .. }) => Some(Message::WindowOpened),
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Window(window::Event::Focused) => Some(Message::WindowFocused),
        event::Event::Window(window::Event::Unfocused) => Some(Message::WindowUnfocused),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
        _ => None,
    })
}

/// Emits animation frames while any animation or pending debounce needs them.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
