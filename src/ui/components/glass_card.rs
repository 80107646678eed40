// SPDX-License-Identifier: MPL-2.0
//! Translucent card wrapper with a staggered entrance animation.
//!
//! A `GlassCard` holds no state of its own. It is parameterized by an entrance
//! delay; the surrounding view passes the shared animation clock and the card
//! fades its surface in once its delay has elapsed. Cards in a grid use
//! increasing delays to produce the staggered reveal.

use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::Container;
use iced::{Element, Length};

/// Seconds the entrance fade takes once the delay has elapsed.
pub const ENTRANCE_SECS: f32 = 0.5;

/// Presentational wrapper applying a staggered entrance delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlassCard {
    delay: f32,
}

impl GlassCard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entrance delay in seconds.
    #[must_use]
    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Entrance progress in `[0, 1]` for the given elapsed clock value.
    #[must_use]
    pub fn progress(&self, elapsed: f32) -> f32 {
        ((elapsed - self.delay) / ENTRANCE_SECS).clamp(0.0, 1.0)
    }

    /// Wraps `content` in the glass surface, faded by entrance progress.
    pub fn view<'a, Message: 'a>(
        &self,
        elapsed: f32,
        content: impl Into<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        let eased = ease_out_cubic(self.progress(elapsed));

        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fill)
            .style(styles::container::glass_card(eased))
            .into()
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
