// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Frame interval for the background and entrance animations (~30 fps).
const ANIMATION_FRAME: Duration = Duration::from_millis(33);

/// One shared animation clock drives the particle field, the blob pulses and
/// the card entrance fades. Notification expiry is not tick-based; each
/// notification owns a one-shot task scheduled at enqueue time.
pub fn animation_ticks() -> Subscription<Message> {
    time::every(ANIMATION_FRAME).map(Message::AnimationTick)
}
