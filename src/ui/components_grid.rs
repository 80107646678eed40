// SPDX-License-Identifier: MPL-2.0
//! Components screen: a static grid of capability cards.
//!
//! The grid is purely presentational; the explore buttons render the
//! interactive style but are not wired to anything.

use crate::i18n::fluent::I18n;
use crate::ui::components::GlassCard;
use crate::ui::design_tokens::{glass, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

struct ComponentCard {
    title_key: &'static str,
    description_key: &'static str,
    content_key: &'static str,
    icon: fn() -> Text<'static>,
    tint: Color,
}

const COMPONENT_CARDS: [ComponentCard; 6] = [
    ComponentCard {
        title_key: "component-cards-title",
        description_key: "component-cards-description",
        content_key: "component-cards-content",
        icon: icons::layers,
        tint: palette::BLUE_400,
    },
    ComponentCard {
        title_key: "component-buttons-title",
        description_key: "component-buttons-description",
        content_key: "component-buttons-content",
        icon: icons::pointer,
        tint: palette::PURPLE_400,
    },
    ComponentCard {
        title_key: "component-gradients-title",
        description_key: "component-gradients-description",
        content_key: "component-gradients-content",
        icon: icons::sparkles,
        tint: palette::PINK_400,
    },
    ComponentCard {
        title_key: "component-blur-title",
        description_key: "component-blur-description",
        content_key: "component-blur-content",
        icon: icons::eye,
        tint: palette::CYAN_400,
    },
    ComponentCard {
        title_key: "component-motion-title",
        description_key: "component-motion-description",
        content_key: "component-motion-content",
        icon: icons::zap,
        tint: palette::ORANGE_400,
    },
    ComponentCard {
        title_key: "component-responsive-title",
        description_key: "component-responsive-description",
        content_key: "component-responsive-content",
        icon: icons::cog,
        tint: palette::INDIGO_400,
    },
];

const COLUMNS: usize = 3;

/// Renders the components grid. Cards enter staggered, 100ms apart.
pub fn view<'a, Message: 'a + Clone + 'static>(i18n: &'a I18n, elapsed: f32) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut row = Row::new().spacing(spacing::LG);

    for (index, card) in COMPONENT_CARDS.iter().enumerate() {
        row = row.push(
            Container::new(
                GlassCard::new()
                    .delay(index as f32 * 0.1)
                    .view(elapsed, card_body(card, i18n)),
            )
            .width(Length::FillPortion(1)),
        );

        if index % COLUMNS == COLUMNS - 1 {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::LG);
        }
    }

    grid.into()
}

fn card_body<'a, Message: 'a + Clone + 'static>(
    card: &'a ComponentCard,
    i18n: &'a I18n,
) -> Container<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(icons::sized((card.icon)(), sizing::ICON_MD).color(card.tint))
                .padding(spacing::XS)
                .style(styles::container::icon_bubble),
        )
        .push(Text::new(i18n.tr(card.title_key)).size(typography::TITLE_SM));

    let explore_label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("component-explore")).size(typography::BODY))
        .push(icons::sized(icons::arrow_right(), sizing::ICON_SM));

    let explore = button(explore_label)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::glass(styles::button::Variant::Ghost));

    let body = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(
            Text::new(i18n.tr(card.description_key))
                .size(typography::BODY)
                .color(glass::TEXT_DIM),
        )
        .push(
            Text::new(i18n.tr(card.content_key))
                .size(typography::CAPTION)
                .color(glass::TEXT_FAINT),
        )
        .push(explore);

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
}
