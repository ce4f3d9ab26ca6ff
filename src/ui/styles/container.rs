// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Top bar surface behind the navbar.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        ..Default::default()
    }
}

/// Hairline rule between content sections.
pub fn divider(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        ..Default::default()
    }
}

/// Bottom sheet surface hosting the development-only toggle row.
pub fn bottom_sheet(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::NONE.into(),
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_are_callable_for_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = toolbar(&theme);
            let _ = divider(&theme);
            let _ = bottom_sheet(&theme);
        }
    }

    #[test]
    fn divider_has_a_background() {
        assert!(divider(&Theme::Light).background.is_some());
    }
}
