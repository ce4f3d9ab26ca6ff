// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user-facing warnings.
//!
//! Notifications carry i18n message keys, not text; the message is
//! resolved at render time so locale switches apply retroactively.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
