// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`glass_card`] - Translucent card wrapper with a staggered entrance fade
//! - [`interaction`] - Per-widget hover/press flags driving visual feedback

pub mod glass_card;
pub mod interaction;

pub use glass_card::GlassCard;
pub use interaction::InteractionFlags;
