// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::partners;
use crate::ui::partners_edit;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Partners(partners::Message),
    PartnersEdit(partners_edit::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// The window was resized; carries the new logical size.
    WindowResized(iced::Size),
    /// Periodic tick while notifications are on screen.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Whether development-only controls (the auto-subscription toggle row)
    /// are shown. Injected explicitly so tests and QA builds can opt in.
    pub dev_controls: bool,
    /// Optional data directory override (for state files).
    /// Takes precedence over `PARTNER_HUB_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PARTNER_HUB_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
