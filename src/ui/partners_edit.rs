// SPDX-License-Identifier: MPL-2.0
//! Partners edit screen.
//!
//! The registered navigation target of the overview screen's row. Authority
//! management itself lives in external services; this screen renders the
//! localized description and empty state, plus a way back.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, scrollable, Column, Container, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the edit screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the edit screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Back,
}

/// Process an edit screen message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::BackPressed => Event::Back,
    }
}

/// Render the partners edit screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body = Text::new(ctx.i18n.tr("partners-edit-body")).size(typography::BODY);

    let empty_state = Text::new(ctx.i18n.tr("partners-edit-empty"))
        .size(typography::BODY)
        .style(|theme: &iced::Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    let back_button = button(
        Text::new(ctx.i18n.tr("partners-edit-back-button")).size(typography::BODY),
    )
    .on_press(Message::BackPressed)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::plain);

    let content = Column::new()
        .spacing(spacing::LG)
        .push(body)
        .push(empty_state)
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(back_button);

    let inset = Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG);

    scrollable(inset).width(Length::Fill).height(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_press_emits_back_event() {
        let event = update(Message::BackPressed);
        assert!(matches!(event, Event::Back));
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
