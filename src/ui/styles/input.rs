// SPDX-License-Identifier: MPL-2.0
//! Frosted text input style.

use crate::ui::design_tokens::{border, glass, radius};
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Translucent input over the night gradient; the edge brightens on focus.
pub fn glass(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let edge = match status {
        text_input::Status::Focused { .. } => Color {
            a: 0.45,
            ..Color::WHITE
        },
        text_input::Status::Hovered => Color {
            a: 0.30,
            ..Color::WHITE
        },
        _ => glass::EDGE,
    };

    text_input::Style {
        background: Background::Color(glass::SURFACE),
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        icon: glass::TEXT_DIM,
        placeholder: glass::TEXT_FAINT,
        value: glass::TEXT,
        selection: Color {
            a: 0.35,
            ..Color::WHITE
        },
    }
}
