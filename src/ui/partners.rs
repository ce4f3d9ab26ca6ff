// SPDX-License-Identifier: MPL-2.0
//! Partners overview screen.
//!
//! Composes the hero illustration, the title/body text block, the
//! navigation row into the edit screen, and (when development controls are
//! enabled) the bottom sheet with the auto-subscription toggle. The screen
//! owns no state: the toggle value arrives through [`ViewContext`] on every
//! render and changes leave as [`Event`]s for the update loop.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{
    button, scrollable, svg, toggler, tooltip, Column, Container, Row, Space, Stack, Text,
};
use iced::{
    alignment::Vertical,
    font::Weight,
    ContentFit, Element, Font, Length, Size,
};
use std::sync::OnceLock;

/// Source artwork width the illustration sizing is derived from.
const ILLUSTRATION_SOURCE_WIDTH: f32 = 1125.0;

/// Source artwork height of the hero illustration.
const ILLUSTRATION_SOURCE_HEIGHT: f32 = 900.0;

/// Source artwork height of the bottom curve mask strip.
const MASK_SOURCE_HEIGHT: f32 = 120.0;

/// Viewports shorter than this drop the illustration for a small spacer.
const COMPACT_VIEWPORT_HEIGHT: f32 = 600.0;

/// Spacer height used in place of the illustration on short viewports.
const COMPACT_SPACER_HEIGHT: f32 = 20.0;

static DOCTORS_IMAGE: &[u8] = include_bytes!("../../assets/illustrations/doctors.png");
static CURVE_MASK_IMAGE: &[u8] = include_bytes!("../../assets/illustrations/curve_mask.png");
const CHEVRON_RIGHT_SVG: &str = include_str!("../../assets/icons/chevron_right.svg");

/// Contextual data needed to render the overview screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Current logical window size.
    pub viewport: Size,
    /// Current auto-subscription flag, read from app state each render.
    pub auto_subscription_enabled: bool,
    /// Whether the development-only toggle row is shown.
    pub dev_controls: bool,
}

/// Messages emitted by the overview screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The "View Healthcare Authorities" row was pressed.
    ViewAuthoritiesPressed,
    /// The auto-subscription toggler was flipped; carries the new value.
    AutoSubscriptionToggled(bool),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// Navigate to the partners edit screen.
    OpenEdit,
    /// Dispatch the new auto-subscription value to app state.
    SetAutoSubscription(bool),
}

/// Process an overview screen message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ViewAuthoritiesPressed => Event::OpenEdit,
        Message::AutoSubscriptionToggled(enabled) => Event::SetAutoSubscription(enabled),
    }
}

/// Height of the illustration region for a given viewport width.
pub fn illustration_height(width: f32) -> f32 {
    width * ILLUSTRATION_SOURCE_HEIGHT / ILLUSTRATION_SOURCE_WIDTH
}

/// Height of the bottom curve mask for a given viewport width.
pub fn mask_height(width: f32) -> f32 {
    width * MASK_SOURCE_HEIGHT / ILLUSTRATION_SOURCE_WIDTH
}

/// Whether the viewport is too short for the illustration.
pub fn uses_compact_layout(viewport_height: f32) -> bool {
    viewport_height < COMPACT_VIEWPORT_HEIGHT
}

fn doctors_handle() -> Handle {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    HANDLE
        .get_or_init(|| Handle::from_bytes(DOCTORS_IMAGE))
        .clone()
}

fn curve_mask_handle() -> Handle {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    HANDLE
        .get_or_init(|| Handle::from_bytes(CURVE_MASK_IMAGE))
        .clone()
}

/// Hero illustration with the curve mask anchored to the bottom edge, so
/// the image ends in a curve regardless of its rendered height.
fn illustration<'a>(i18n: &'a I18n, width: f32) -> Element<'a, Message> {
    let hero = Image::new(doctors_handle())
        .content_fit(ContentFit::Contain)
        .width(Length::Fixed(width))
        .height(Length::Fixed(illustration_height(width)));

    let mask = Image::new(curve_mask_handle())
        .content_fit(ContentFit::Cover)
        .width(Length::Fixed(width))
        .height(Length::Fixed(mask_height(width)));

    let masked = Stack::new().push(hero).push(
        Container::new(mask)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Bottom),
    );

    let region = Container::new(masked)
        .width(Length::Fill)
        .height(Length::Fixed(illustration_height(width)))
        .clip(true);

    tooltip(
        region,
        Text::new(i18n.tr("label-doctors-image")).size(typography::CAPTION),
        tooltip::Position::FollowCursor,
    )
    .gap(4)
    .into()
}

/// Hairline rule, inset like the text block.
fn divider<'a>() -> Element<'a, Message> {
    let rule = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::divider);

    Container::new(rule)
        .width(Length::Fill)
        .padding([0.0, spacing::LG])
        .into()
}

/// Full-width pressable row leading to the edit screen.
fn view_authorities_row<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let medium = Font {
        weight: Weight::Medium,
        ..Font::DEFAULT
    };

    let label = Text::new(i18n.tr("authorities-view-button-label"))
        .size(typography::BODY_LG)
        .font(medium);

    let chevron = svg::Svg::new(svg::Handle::from_memory(CHEVRON_RIGHT_SVG.as_bytes()))
        .width(Length::Fixed(sizing::ICON_MD))
        .height(Length::Fixed(sizing::ICON_MD));

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(label)
        .push(Space::new().width(Length::Fill))
        .push(chevron);

    // The button spans the full width so the touch target is not limited
    // to the inset text column.
    button(row)
        .on_press(Message::ViewAuthoritiesPressed)
        .padding([20.0, spacing::LG])
        .width(Length::Fill)
        .style(styles::button::nav_row)
        .into()
}

/// Bottom sheet with the auto-subscription toggle, development builds only.
fn auto_subscription_sheet<'a>(i18n: &'a I18n, enabled: bool) -> Element<'a, Message> {
    let label = Text::new(i18n.tr("authorities-automatically-follow")).size(typography::BODY);

    let toggle = toggler(enabled)
        .on_toggle(Message::AutoSubscriptionToggled)
        .size(20.0);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Container::new(label).width(Length::Fill))
        .push(toggle);

    Column::new()
        .push(divider())
        .push(
            Container::new(row)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::bottom_sheet),
        )
        .width(Length::Fill)
        .into()
}

/// Render the partners overview screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let width = ctx.viewport.width;

    let mut content = Column::new().width(Length::Fill);

    if uses_compact_layout(ctx.viewport.height) {
        content = content.push(Space::new().height(Length::Fixed(COMPACT_SPACER_HEIGHT)));
    } else {
        content = content.push(illustration(ctx.i18n, width));
    }

    let text_block = Column::new()
        .push(Text::new(ctx.i18n.tr("authorities-title")).size(typography::TITLE_LG))
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(Text::new(ctx.i18n.tr("authorities-info-body")).size(typography::BODY));

    content = content
        .push(
            Container::new(text_block)
                .width(Length::Fill)
                .padding([0.0, spacing::LG]),
        )
        .push(Space::new().height(Length::Fixed(20.0)))
        .push(divider())
        .push(view_authorities_row(ctx.i18n))
        .push(divider())
        .push(Space::new().height(Length::Fixed(spacing::LG)));

    let scroll = scrollable(content).width(Length::Fill).height(Length::Fill);

    let mut screen = Column::new().push(scroll).width(Length::Fill).height(Length::Fill);

    if ctx.dev_controls {
        screen = screen.push(auto_subscription_sheet(
            ctx.i18n,
            ctx.auto_subscription_enabled,
        ));
    }

    screen.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illustration_height_follows_source_ratio() {
        for width in [320.0_f32, 375.0, 420.0, 1125.0, 1.0] {
            assert_eq!(illustration_height(width), width * 900.0 / 1125.0);
        }
    }

    #[test]
    fn mask_height_follows_source_ratio() {
        for width in [320.0_f32, 375.0, 420.0, 1125.0, 1.0] {
            assert_eq!(mask_height(width), width * 120.0 / 1125.0);
        }
    }

    #[test]
    fn mask_is_shorter_than_illustration() {
        assert!(mask_height(420.0) < illustration_height(420.0));
    }

    #[test]
    fn compact_layout_boundary_is_exclusive_at_600() {
        assert!(uses_compact_layout(599.0));
        assert!(!uses_compact_layout(600.0));
        assert!(!uses_compact_layout(601.0));
    }

    #[test]
    fn row_press_opens_edit() {
        let event = update(Message::ViewAuthoritiesPressed);
        assert!(matches!(event, Event::OpenEdit));
    }

    #[test]
    fn toggle_carries_new_value() {
        let event = update(Message::AutoSubscriptionToggled(true));
        assert!(matches!(event, Event::SetAutoSubscription(true)));

        let event = update(Message::AutoSubscriptionToggled(false));
        assert!(matches!(event, Event::SetAutoSubscription(false)));
    }

    #[test]
    fn view_renders_tall_viewport() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            viewport: Size::new(420.0, 760.0),
            auto_subscription_enabled: false,
            dev_controls: false,
        });
    }

    #[test]
    fn view_renders_compact_viewport() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            viewport: Size::new(420.0, 599.0),
            auto_subscription_enabled: false,
            dev_controls: false,
        });
    }

    #[test]
    fn view_renders_with_dev_controls() {
        let i18n = I18n::default();
        for enabled in [true, false] {
            let _element = view(ViewContext {
                i18n: &i18n,
                viewport: Size::new(420.0, 760.0),
                auto_subscription_enabled: enabled,
                dev_controls: true,
            });
        }
    }

    #[test]
    fn embedded_artwork_is_present() {
        assert!(!DOCTORS_IMAGE.is_empty());
        assert!(!CURVE_MASK_IMAGE.is_empty());
        assert!(CHEVRON_RIGHT_SVG.contains("svg"));
    }
}
