// SPDX-License-Identifier: MPL-2.0
//! `partner_hub` is a small healthcare-authority companion app built with
//! the Iced GUI framework.
//!
//! It renders a partners overview screen with a navigation row into the
//! authority management screen, and demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/partner_hub/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
