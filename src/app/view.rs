// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::events::SnackBarEvent;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::snackbar::Host;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::snack_bar;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub host: &'a Host,
    pub queued: usize,
    pub last_event: Option<SnackBarEvent>,
}

/// Renders the controls with the snack bar overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let overlay = snack_bar::view(ctx.host).map(Message::SnackBar);

    Stack::with_children(vec![controls(&ctx), overlay])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn controls<'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let heading = Text::new(i18n.tr("demo-heading")).size(typography::TITLE_MD);

    let buttons = Row::new()
        .spacing(spacing::XS)
        .push(control(i18n.tr("demo-show-message"), Message::ShowMessage))
        .push(control(i18n.tr("demo-show-action"), Message::ShowWithAction))
        .push(control(i18n.tr("demo-interrupt"), Message::Interrupt))
        .push(control(i18n.tr("demo-clear"), Message::Clear));

    let queued = Text::new(i18n.tr_with_args(
        "demo-queued",
        &[("count", &ctx.queued.to_string())],
    ))
    .size(typography::CAPTION)
    .color(palette::GRAY_200);

    let last_event = match ctx.last_event {
        Some(event) => {
            let described =
                i18n.tr_with_args(event.i18n_key(), &[("id", &event.serial().to_string())]);
            i18n.tr_with_args("demo-last-event", &[("event", &described)])
        }
        None => i18n.tr("demo-no-event"),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(buttons)
        .push(queued)
        .push(Text::new(last_event).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn control<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .into()
}
