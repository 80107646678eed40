// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{notifications, showcase};
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    Showcase(showcase::Message),
    Notifications(notifications::Message),
    /// Shared clock driving the background and entrance animations.
    AnimationTick(Instant),
}

/// Startup options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Preferred locale override, e.g. `fr` or `en-US`.
    pub lang: Option<String>,
    /// Screen to open on startup instead of the default.
    pub start_screen: Option<Screen>,
}
