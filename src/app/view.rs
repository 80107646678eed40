// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, back to front: the night gradient, the particle canvas, the
//! scrollable page (header, active screen, footer), the toast overlay.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::{Center, Toast};
use crate::ui::showcase::{self, ViewContext as ShowcaseViewContext};
use crate::ui::widgets::ParticleField;
use crate::ui::{components_grid, effects, footer, header, styles};
use iced::widget::{Canvas, Column, Container, Scrollable, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub showcase: &'a showcase::State,
    pub notifications: &'a Center,
    pub particles: &'a ParticleField,
    /// Seconds since launch, shared by all entrance animations.
    pub elapsed: f32,
}

/// Renders the full application view for the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen_content: Element<'_, Message> = match ctx.screen {
        Screen::Showcase => showcase::view(ShowcaseViewContext {
            i18n: ctx.i18n,
            state: ctx.showcase,
            elapsed: ctx.elapsed,
        })
        .map(Message::Showcase),
        Screen::Components => components_grid::view(ctx.i18n, ctx.elapsed),
        Screen::Effects => effects::view(ctx.i18n, ctx.elapsed),
    };

    let page = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(
            header::view(ctx.i18n, ctx.screen)
                .map(|header::Message::ScreenSelected(screen)| Message::SwitchScreen(screen)),
        )
        .push(screen_content)
        .push(footer::view(ctx.i18n));

    let scroll = Scrollable::new(
        Container::new(page)
            .padding(spacing::LG)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let background = Container::new(iced::widget::Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::night_gradient);

    let particles = Canvas::new(ctx.particles)
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay =
        Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notifications);

    Stack::new()
        .push(background)
        .push(particles)
        .push(scroll)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
