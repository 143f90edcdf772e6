// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are turned into host messages; pointer
//! movement is reported by the overlay's mouse area instead.

use super::Message;
use crate::config::PLATFORM_TICK_MS;
use crate::video_player::keyboard::PhysicalKey;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Routes uncaptured key presses, window size changes and close requests.
///
/// Shortcuts holding Ctrl/Cmd or Alt belong to the platform and are left
/// alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            if status == event::Status::Captured || modifiers.command() || modifiers.alt() {
                return None;
            }
            Some(Message::KeyPressed {
                window: window_id,
                key: PhysicalKey::from(&key),
            })
        }
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => Some(Message::Resized {
            window: window_id,
            size,
        }),
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Drives the media platform at a fixed cadence.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(Duration::from_millis(PLATFORM_TICK_MS)).map(Message::Tick)
}
