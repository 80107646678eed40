// SPDX-License-Identifier: MPL-2.0
//! Pill badge styles for filters and navigation markers.

use crate::ui::design_tokens::{border, glass, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Small glass pill; `selected` marks the active filter.
pub fn pill(selected: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(if selected {
            glass::SURFACE_ACTIVE
        } else {
            glass::SURFACE
        })),
        border: Border {
            color: glass::EDGE,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        text_color: Some(if selected { glass::TEXT } else { glass::TEXT_DIM }),
        ..Default::default()
    }
}
