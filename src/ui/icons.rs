// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are decorative text glyphs rendered with the default font, so no
//! binary assets are embedded and no rasterization step is needed. Callers
//! size and tint them like any other text.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g. `arrow_down` not `download_file`).

use crate::ui::design_tokens::sizing;
use iced::widget::{text, Text};

fn glyph(symbol: &'static str) -> Text<'static> {
    text(symbol).size(sizing::ICON_MD)
}

/// Resizes an icon glyph.
#[must_use]
pub fn sized(icon: Text<'static>, size: f32) -> Text<'static> {
    icon.size(size)
}

// Branding / section glyphs
pub fn sparkles() -> Text<'static> {
    glyph("\u{2726}") // ✦
}
pub fn eye() -> Text<'static> {
    glyph("\u{25C9}") // ◉
}
pub fn layers() -> Text<'static> {
    glyph("\u{25A4}") // ▤
}
pub fn zap() -> Text<'static> {
    glyph("\u{21AF}") // ↯
}
pub fn pointer() -> Text<'static> {
    glyph("\u{27A4}") // ➤
}
pub fn person() -> Text<'static> {
    glyph("\u{263A}") // ☺
}

// Media glyphs
pub fn play() -> Text<'static> {
    glyph("\u{25B6}") // ▶
}
pub fn pause() -> Text<'static> {
    glyph("\u{2225}") // ∥
}
pub fn note() -> Text<'static> {
    glyph("\u{266A}") // ♪
}

// Action glyphs
pub fn arrow_down() -> Text<'static> {
    glyph("\u{2193}") // ↓
}
pub fn arrow_up_right() -> Text<'static> {
    glyph("\u{2197}") // ↗
}
pub fn arrow_right() -> Text<'static> {
    glyph("\u{2192}") // →
}
pub fn chevron_right() -> Text<'static> {
    glyph("\u{203A}") // ›
}
pub fn cog() -> Text<'static> {
    glyph("\u{2699}") // ⚙
}
pub fn heart() -> Text<'static> {
    glyph("\u{2665}") // ♥
}
pub fn star() -> Text<'static> {
    glyph("\u{2605}") // ★
}
pub fn lens() -> Text<'static> {
    glyph("\u{25CE}") // ◎
}
pub fn funnel() -> Text<'static> {
    glyph("\u{25BD}") // ▽
}
pub fn slash() -> Text<'static> {
    glyph("\u{2298}") // ⊘
}
pub fn envelope() -> Text<'static> {
    glyph("\u{2709}") // ✉
}

// Status glyphs
pub fn checkmark() -> Text<'static> {
    glyph("\u{2713}") // ✓
}
pub fn info() -> Text<'static> {
    glyph("\u{2139}") // ℹ
}
pub fn warning() -> Text<'static> {
    glyph("\u{26A0}") // ⚠
}
pub fn cross() -> Text<'static> {
    glyph("\u{2717}") // ✗
}
