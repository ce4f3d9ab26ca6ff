// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for screen titles and the back control.
//!
//! Each screen renders this bar at the top. The overview screen shows a
//! bare title; the edit screen adds a back button on the left.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    /// Already-translated screen title.
    pub title: String,
    /// Already-translated back button label, or `None` to hide the button.
    pub back_label: Option<String>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Back,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Back => Event::Back,
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext) -> Element<'static, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .width(Length::Fill);

    if let Some(label) = ctx.back_label {
        let back_button = button(Text::new(format!("← {label}")).size(typography::BODY))
            .on_press(Message::Back)
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::plain);
        row = row.push(back_button);
    }

    let title = Container::new(Text::new(ctx.title).size(typography::TITLE_MD))
        .width(Length::Fill)
        .align_x(Horizontal::Center);
    row = row.push(title);

    let bar = Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar);

    Column::new().push(bar).width(Length::Fill).into()
}
