// SPDX-License-Identifier: MPL-2.0
//! Effects screen: side-by-side glass density variations.

use crate::i18n::fluent::I18n;
use crate::ui::components::GlassCard;
use crate::ui::design_tokens::{border, glass, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{container, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// The four showcased glass treatments.
#[derive(Debug, Clone, Copy)]
enum Treatment {
    Light,
    Dark,
    Colored,
    Frosted,
}

const TREATMENTS: [(Treatment, &str); 4] = [
    (Treatment::Light, "effect-light"),
    (Treatment::Dark, "effect-dark"),
    (Treatment::Colored, "effect-colored"),
    (Treatment::Frosted, "effect-frosted"),
];

impl Treatment {
    fn style(self) -> impl Fn(&Theme) -> container::Style {
        move |_theme: &Theme| {
            let (fill, edge_alpha) = match self {
                Treatment::Light => (
                    Color {
                        a: 0.18,
                        ..Color::WHITE
                    },
                    0.35,
                ),
                Treatment::Dark => (
                    Color {
                        a: 0.35,
                        ..Color::BLACK
                    },
                    0.15,
                ),
                Treatment::Colored => (
                    Color {
                        a: 0.22,
                        ..palette::PURPLE_400
                    },
                    0.25,
                ),
                Treatment::Frosted => (
                    Color {
                        a: 0.28,
                        ..Color::WHITE
                    },
                    0.45,
                ),
            };

            container::Style {
                background: Some(Background::Color(fill)),
                border: Border {
                    color: Color {
                        a: edge_alpha,
                        ..Color::WHITE
                    },
                    width: border::WIDTH_SM,
                    radius: radius::XL.into(),
                },
                shadow: shadow::MD,
                text_color: Some(glass::TEXT),
                ..Default::default()
            }
        }
    }
}

/// Renders the effects gallery. Tiles enter staggered, 100ms apart.
pub fn view<'a, Message: 'a + 'static>(i18n: &'a I18n, elapsed: f32) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new(i18n.tr("effects-heading")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("effects-tagline"))
                .size(typography::BODY_LG)
                .color(glass::TEXT_DIM),
        );

    let mut tiles = Row::new().spacing(spacing::LG).width(Length::Fill);
    for (index, (treatment, title_key)) in TREATMENTS.iter().enumerate() {
        let bubbles = Row::new()
            .spacing(spacing::XS)
            .push(icon_bubble(icons::sparkles()))
            .push(icon_bubble(icons::layers()))
            .push(icon_bubble(icons::zap()));

        let body = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr(title_key)).size(typography::TITLE_SM))
            .push(
                Text::new(i18n.tr("effect-description"))
                    .size(typography::BODY)
                    .color(glass::TEXT_DIM),
            )
            .push(bubbles);

        let tile = Container::new(body)
            .padding(spacing::LG)
            .width(Length::Fill)
            .style(treatment.style());

        tiles = tiles.push(
            Container::new(
                GlassCard::new()
                    .delay(index as f32 * 0.1)
                    .view(elapsed, tile),
            )
            .width(Length::FillPortion(1)),
        );
    }

    Column::new()
        .spacing(spacing::XL)
        .push(heading)
        .push(tiles)
        .into()
}

fn icon_bubble<'a, Message: 'a + 'static>(icon: Text<'static>) -> Element<'a, Message> {
    Container::new(icons::sized(icon, sizing::ICON_SM))
        .padding(spacing::XS)
        .style(styles::container::icon_bubble)
        .into()
}
