// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, glass, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Visual variant of an interactive glass button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Filled glass with a colored sheen; main call to action.
    #[default]
    Primary,
    /// Standard glass surface.
    Secondary,
    /// Border-only glass; backgrounds appear on interaction.
    Ghost,
}

impl Variant {
    fn fill(self, status: button::Status) -> Option<Background> {
        let color = match (self, status) {
            (Variant::Primary, button::Status::Hovered) => Color {
                a: 0.38,
                ..palette::PURPLE_400
            },
            (Variant::Primary, button::Status::Pressed) => Color {
                a: 0.45,
                ..palette::PURPLE_400
            },
            (Variant::Primary, _) => Color {
                a: 0.30,
                ..palette::PURPLE_400
            },
            (Variant::Secondary, button::Status::Hovered) => glass::SURFACE_STRONG,
            (Variant::Secondary, button::Status::Pressed) => glass::SURFACE_ACTIVE,
            (Variant::Secondary, _) => glass::SURFACE,
            (Variant::Ghost, button::Status::Hovered) => glass::SURFACE,
            (Variant::Ghost, button::Status::Pressed) => glass::SURFACE_STRONG,
            (Variant::Ghost, _) => return None,
        };
        Some(Background::Color(color))
    }
}

/// Interactive glass button in the requested variant. All variants share the
/// hairline edge and pill-ish radius; only the fill density differs.
pub fn glass(variant: Variant) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: variant.fill(status),
        text_color: glass::TEXT,
        border: Border {
            color: glass::EDGE,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: match status {
            button::Status::Hovered => shadow::MD,
            _ => shadow::SM,
        },
        snap: true,
    }
}

/// Root navigation button; `active` marks the currently selected screen.
pub fn nav(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if active {
            glass::SURFACE_ACTIVE
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => glass::SURFACE_STRONG,
                _ => glass::SURFACE,
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: glass::TEXT,
            border: Border {
                color: glass::EDGE,
                width: if active {
                    border::WIDTH_MD
                } else {
                    border::WIDTH_SM
                },
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Bare text button (footer links, toast dismiss).
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(glass::SURFACE))
            }
            _ => None,
        },
        text_color: glass::TEXT_DIM,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
