// SPDX-License-Identifier: MPL-2.0
//! Renders the snack bars attached to a host.
//!
//! Bars are anchored to the bottom edge. A positive translation pushes the
//! bar below the edge (the hidden part is clipped); a negative one lifts it.

use crate::snackbar::{ButtonState, Host, SnackBarStyle, SnackBarView, StateListDrawable, ViewId};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Messages emitted by rendered snack bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The action button of the given view was pressed.
    ActionPressed(ViewId),
}

/// Renders every view attached to `host` as a full-size overlay.
pub fn view(host: &Host) -> Element<'_, Message> {
    let style = host.style();
    let bars: Vec<Element<'_, Message>> = host
        .content()
        .iter()
        .map(|snack_bar| bar(snack_bar, style))
        .collect();

    if bars.is_empty() {
        // Empty overlay that takes no space
        Space::new()
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        Stack::with_children(bars)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Vertical placement derived from a view's translation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Geometry {
    /// Part of the bar above the bottom edge.
    visible_height: f32,
    /// Gap between the bottom edge and the bar.
    lift: f32,
}

impl Geometry {
    fn of(view: &SnackBarView) -> Self {
        let translation = view.translation_y();
        let height = view.height();

        Self {
            visible_height: (height - translation.max(0.0)).clamp(0.0, height),
            lift: (-translation).max(0.0),
        }
    }
}

fn bar<'a>(view: &'a SnackBarView, style: &SnackBarStyle) -> Element<'a, Message> {
    let geometry = Geometry::of(view);
    let alpha = view.alpha();
    let message_color = faded(style.message_color, alpha);
    let background = faded(style.background, alpha);

    let message = Text::new(view.message())
        .size(style.message_text_size)
        .font(typography::MESSAGE_FONT)
        .color(message_color);

    let mut content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fixed(view.height()))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if let Some(action) = view.action() {
        let drawable = action.drawable().clone();
        let regular = drawable.resolve(ButtonState::Default);
        let label = Text::new(action.label())
            .size(regular.size())
            .font(regular.font());

        content = content.push(
            button(label)
                .on_press(Message::ActionPressed(view.id()))
                .padding(spacing::XS)
                .style(move |_theme: &Theme, status| {
                    action_button_style(&drawable, status, alpha)
                }),
        );
    }

    let surface = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(view.height()))
        .padding([0.0, spacing::MD])
        .style(move |_theme: &Theme| surface_style(background, message_color));

    // Keep the top of the bar while its lower part is below the edge
    let clipped = Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fixed(geometry.visible_height))
        .align_y(alignment::Vertical::Top)
        .clip(true);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Space::new().height(Length::Fill))
        .push(clipped)
        .push(Space::new().height(Length::Fixed(geometry.lift)))
        .into()
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the bar surface.
fn surface_style(background: Color, text_color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Style function for the action button: the label takes the color of the
/// drawable matching the button state.
fn action_button_style(
    drawable: &StateListDrawable,
    status: button::Status,
    alpha: f32,
) -> button::Style {
    let state = match status {
        button::Status::Pressed => ButtonState::Pressed,
        button::Status::Active | button::Status::Hovered | button::Status::Disabled => {
            ButtonState::Default
        }
    };
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE * alpha,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: faded(drawable.resolve(state).color(), alpha),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
