// SPDX-License-Identifier: MPL-2.0
//! Feature cards panel: three tinted glass cards with stats.

use crate::i18n::fluent::I18n;
use crate::ui::components::GlassCard;
use crate::ui::design_tokens::{glass, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

struct FeatureCard {
    title_key: &'static str,
    description_key: &'static str,
    icon: fn() -> Text<'static>,
    tint: Color,
    /// Stat label key and display value.
    stats: [(&'static str, &'static str); 2],
}

const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title_key: "card-premium-title",
        description_key: "card-premium-description",
        icon: icons::star,
        tint: palette::PURPLE_400,
        stats: [("stat-users", "10K+"), ("stat-rating", "4.9")],
    },
    FeatureCard {
        title_key: "card-fast-title",
        description_key: "card-fast-description",
        icon: icons::zap,
        tint: palette::CYAN_400,
        stats: [("stat-speed", "99.9%"), ("stat-uptime", "24/7")],
    },
    FeatureCard {
        title_key: "card-loved-title",
        description_key: "card-loved-description",
        icon: icons::heart,
        tint: palette::ROSE_400,
        stats: [("stat-reviews", "5K+"), ("stat-satisfaction", "98%")],
    },
];

/// Renders the cards panel. Cards enter staggered, 100ms apart.
pub fn view<'a, Message: 'a + 'static>(i18n: &'a I18n, elapsed: f32) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);

    for (index, card) in FEATURE_CARDS.iter().enumerate() {
        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(icons::sized((card.icon)(), sizing::ICON_MD))
                    .padding(spacing::XS)
                    .style(styles::container::icon_bubble),
            )
            .push(Text::new(i18n.tr(card.title_key)).size(typography::TITLE_SM));

        let mut stats = Row::new().spacing(spacing::LG).width(Length::Fill);
        for (label_key, value) in card.stats {
            stats = stats.push(
                Column::new()
                    .align_x(alignment::Horizontal::Center)
                    .width(Length::Fill)
                    .push(Text::new(value).size(typography::TITLE_MD))
                    .push(
                        Text::new(i18n.tr(label_key))
                            .size(typography::CAPTION)
                            .color(glass::TEXT_FAINT),
                    ),
            );
        }

        let body = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(
                Text::new(i18n.tr(card.description_key))
                    .size(typography::BODY)
                    .color(glass::TEXT_DIM),
            )
            .push(stats);

        let tinted = Container::new(body)
            .padding(spacing::LG)
            .width(Length::Fill)
            .style(styles::container::tinted_card(card.tint));

        row = row.push(
            Container::new(
                GlassCard::new()
                    .delay(index as f32 * 0.1)
                    .view(elapsed, tinted),
            )
            .width(Length::FillPortion(1)),
        );
    }

    row.into()
}
