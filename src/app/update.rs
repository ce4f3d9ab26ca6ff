// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Screen components translate raw widget messages into events; the
//! handlers here apply those events to application state. This is the only
//! place where navigation happens and where the auto-subscription flag is
//! written, so every side effect of a user gesture is auditable in one
//! file.

use super::persisted_state::AppState;
use super::{Message, Screen};
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::partners;
use crate::ui::partners_edit;
use iced::Task;

/// Mutable references to the pieces of `App` the handlers operate on.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

/// Applies a partners overview event: navigation into the edit screen, or
/// a dispatched change of the auto-subscription flag.
pub fn handle_partners_message(
    ctx: &mut UpdateContext<'_>,
    message: partners::Message,
) -> Task<Message> {
    match partners::update(message) {
        partners::Event::OpenEdit => {
            *ctx.screen = Screen::PartnersEdit;
        }
        partners::Event::SetAutoSubscription(enabled) => {
            ctx.app_state.auto_subscription_enabled = enabled;
            if let Some(key) = ctx.app_state.save() {
                ctx.notifications
                    .push(notifications::Notification::warning(&key));
            }
        }
    }
    Task::none()
}

/// Applies a partners edit event; the only one is going back.
pub fn handle_partners_edit_message(
    ctx: &mut UpdateContext<'_>,
    message: partners_edit::Message,
) -> Task<Message> {
    match partners_edit::update(message) {
        partners_edit::Event::Back => {
            *ctx.screen = Screen::PartnersOverview;
        }
    }
    Task::none()
}

/// Applies a navbar event.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::Back => {
            *ctx.screen = Screen::PartnersOverview;
        }
    }
    Task::none()
}
