// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the top-right corner to confirm demo
//! actions (button presses, form submission, navigation) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kinds and identity
//! - [`center`] - `Center`: the ordered, self-expiring queue
//! - [`toast`] - Toast widget rendering the visible stack
//!
//! # Lifecycle
//!
//! Every enqueue returns the generated [`NotificationId`] and the caller
//! schedules exactly one expiration callback for it (an Iced task firing
//! [`Message::Expire`] after [`DISPLAY_DURATION`]). Expiration is id-based
//! and idempotent, so a future manual-dismiss path can remove entries early
//! without the timer misfiring.

mod center;
mod notification;
mod toast;

pub use center::{Center, Message};
pub use notification::{Kind, Notification, NotificationId, DISPLAY_DURATION};
pub use toast::Toast;
