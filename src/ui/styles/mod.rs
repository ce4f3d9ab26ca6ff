// SPDX-License-Identifier: MPL-2.0
//! Reusable style functions for Iced widgets.
//!
//! Styles derive their colors from the active Iced `Theme` so every
//! component stays readable in both light and dark modes without
//! hard-coding colors.

pub mod button;
pub mod container;
