// SPDX-License-Identifier: MPL-2.0
//! Footer bar: credits and decorative link buttons.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{glass, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};

const LINK_KEYS: [&str; 3] = ["footer-docs", "footer-github", "footer-examples"];

/// Renders the footer bar. The links are presentational only.
pub fn view<'a, Message: 'a + Clone>(i18n: &'a I18n) -> Element<'a, Message> {
    let mut links = Row::new().spacing(spacing::XS);
    for key in LINK_KEYS {
        links = links.push(
            button(Text::new(i18n.tr(key)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::link),
        );
    }

    let bar = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(
                Text::new(i18n.tr("footer-credits"))
                    .size(typography::CAPTION)
                    .color(glass::TEXT_FAINT),
            )
            .width(Length::Fill),
        )
        .push(links);

    Container::new(bar)
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(styles::container::glass_card(1.0))
        .into()
}
