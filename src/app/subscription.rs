// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resize events feed the viewport-dependent layout branch of the
//! partners overview screen; a periodic tick drives notification
//! auto-dismiss and only runs while notifications are on screen.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Listens for window resize events so the layout can react to the current
/// viewport size.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Creates the periodic tick subscription for notification auto-dismiss.
///
/// Idle applications should not wake up; the timer exists only while
/// notifications are visible.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
