// SPDX-License-Identifier: MPL-2.0
//! UI components and visual system.

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod partners;
pub mod partners_edit;
pub mod styles;
pub mod theming;
