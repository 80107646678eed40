// SPDX-License-Identifier: MPL-2.0
//! Top bar: brand mark plus the screen switcher.

use crate::app::screen::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{glass, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy)]
pub enum Message {
    ScreenSelected(Screen),
}

/// Renders the header bar with the active screen highlighted.
pub fn view<'a>(i18n: &'a I18n, active: Screen) -> Element<'a, Message> {
    let brand = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(icons::sized(icons::sparkles(), sizing::ICON_MD))
                .padding(spacing::XS)
                .style(styles::container::icon_bubble),
        )
        .push(
            Column::new()
                .push(Text::new(i18n.tr("header-title")).size(typography::TITLE_SM))
                .push(
                    Text::new(i18n.tr("header-subtitle"))
                        .size(typography::CAPTION)
                        .color(glass::TEXT_FAINT),
                ),
        );

    let mut nav = Row::new().spacing(spacing::XS);
    for screen in Screen::ALL {
        nav = nav.push(
            button(Text::new(i18n.tr(screen.label_key())).size(typography::BODY))
                .on_press(Message::ScreenSelected(screen))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::nav(screen == active)),
        );
    }

    let bar = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Container::new(brand).width(Length::Fill))
        .push(nav);

    Container::new(bar)
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(styles::container::glass_card(1.0))
        .into()
}
