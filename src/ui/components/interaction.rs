// SPDX-License-Identifier: MPL-2.0
//! Per-widget hover and press flags.
//!
//! Each interactive glass widget instance owns one record. The flags exist
//! purely to drive visual feedback (sheen sweep, lift); nothing outlives the
//! interaction and writes are last-write-wins.

/// Transient interaction state for a single widget instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionFlags {
    hovered: bool,
    pressed: bool,
}

impl InteractionFlags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    #[must_use]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn pressed(&self) -> bool {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_start_cleared() {
        let flags = InteractionFlags::new();
        assert!(!flags.hovered());
        assert!(!flags.pressed());
    }

    #[test]
    fn writes_are_last_write_wins() {
        let mut flags = InteractionFlags::new();
        flags.set_hovered(true);
        flags.set_hovered(true);
        flags.set_hovered(false);
        assert!(!flags.hovered());

        flags.set_pressed(true);
        assert!(flags.pressed());
        flags.set_pressed(false);
        assert!(!flags.pressed());
    }

    #[test]
    fn hover_and_press_are_independent() {
        let mut flags = InteractionFlags::new();
        flags.set_pressed(true);
        assert!(!flags.hovered());
        flags.set_hovered(true);
        flags.set_pressed(false);
        assert!(flags.hovered());
    }
}
