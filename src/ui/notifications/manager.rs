// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It limits the number of visible toasts and promotes
//! queued notifications as space frees up.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's
    /// displayed immediately. Otherwise it's queued and shown when space
    /// becomes available.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Whether any notification is visible or queued.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Iterates over the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Advances auto-dismiss timers, removing expired notifications and
    /// promoting queued ones.
    pub fn tick(&mut self) {
        self.visible.retain(|notification| !notification.is_expired());
        self.promote_queued();
    }

    /// Applies a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
        }
    }

    /// Removes a notification by ID, promoting queued ones.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.visible.retain(|notification| notification.id() != id);
        self.promote_queued();
    }

    fn promote_queued(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            // The dismiss window starts when the toast becomes visible.
            notification.mark_displayed();
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manager_has_no_notifications() {
        let manager = Manager::new();
        assert!(!manager.has_notifications());
        assert_eq!(manager.visible().count(), 0);
    }

    #[test]
    fn push_makes_notification_visible() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-config-load-error"));

        assert!(manager.has_notifications());
        assert_eq!(manager.visible().count(), 1);
    }

    #[test]
    fn overflow_is_queued_until_dismissal() {
        let mut manager = Manager::new();
        for _ in 0..4 {
            manager.push(Notification::error("notification-state-write-error"));
        }

        assert_eq!(manager.visible().count(), MAX_VISIBLE);

        let first_id = manager.visible().next().map(Notification::id).unwrap();
        manager.handle_message(Message::Dismiss(first_id));

        // The queued notification takes the freed slot.
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-state-read-error"));
        manager.push(Notification::warning("notification-state-parse-error"));

        let ids: Vec<NotificationId> = manager.visible().map(Notification::id).collect();
        manager.dismiss(ids[0]);

        let remaining: Vec<NotificationId> = manager.visible().map(Notification::id).collect();
        assert_eq!(remaining, vec![ids[1]]);
    }

    #[test]
    fn tick_keeps_unexpired_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-config-load-error"));

        manager.tick();

        assert_eq!(manager.visible().count(), 1);
    }
}
