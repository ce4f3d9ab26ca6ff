// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state, and overlays toast notifications
//! when any are alive.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications;
use crate::ui::partners;
use crate::ui::partners_edit;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length, Size,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    /// Current logical window size; drives the overview layout branch.
    pub viewport: Size,
    /// Current value of the auto-subscription flag, read from app state.
    pub auto_subscription_enabled: bool,
    /// Whether development-only controls are shown.
    pub dev_controls: bool,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::PartnersOverview => view_partners_overview(&ctx),
        Screen::PartnersEdit => view_partners_edit(&ctx),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.has_notifications() {
        let toasts = notifications::Toast::view_overlay(ctx.notifications, ctx.i18n)
            .map(Message::Notification);
        Stack::new().push(base).push(toasts).into()
    } else {
        base.into()
    }
}

fn view_partners_overview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        title: ctx.i18n.tr("authorities-title"),
        back_label: None,
    })
    .map(Message::Navbar);

    let body = partners::view(partners::ViewContext {
        i18n: ctx.i18n,
        viewport: ctx.viewport,
        auto_subscription_enabled: ctx.auto_subscription_enabled,
        dev_controls: ctx.dev_controls,
    })
    .map(Message::Partners);

    Column::new()
        .push(navbar_view)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_partners_edit<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        title: ctx.i18n.tr("partners-edit-title"),
        back_label: Some(ctx.i18n.tr("partners-edit-back-button")),
    })
    .map(Message::Navbar);

    let body = partners_edit::view(partners_edit::ViewContext { i18n: ctx.i18n })
        .map(Message::PartnersEdit);

    Column::new()
        .push(navbar_view)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
