// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together localization, the showcase state, the
//! notification center and the animated background. Policy decisions (window
//! sizing, notification expiry scheduling) stay close to the update loop so
//! user-facing behavior is easy to audit.

mod message;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::showcase;
use crate::ui::widgets::ParticleField;
use iced::{window, Element, Subscription, Theme};
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    screen: Screen,
    showcase: showcase::State,
    notifications: notifications::Center,
    particles: ParticleField,
    /// Launch instant; the animation clock is measured against this.
    started: Instant,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 650;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            showcase: showcase::State::default(),
            notifications: notifications::Center::new(),
            particles: ParticleField::new(),
            started: Instant::now(),
        }
    }
}

impl App {
    /// Creates the application state from the parsed startup flags.
    pub fn new(flags: Flags) -> Self {
        Self {
            i18n: I18n::new(flags.lang),
            screen: flags.start_screen.unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Window title, localized.
    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    /// The gallery always renders on the dark base theme; every visible
    /// surface carries its own style function anyway.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::animation_ticks()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            showcase: &self.showcase,
            notifications: &self.notifications,
            particles: &self.particles,
            elapsed: self.particles.elapsed(),
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn showcase(&self) -> &showcase::State {
        &self.showcase
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Center {
        &self.notifications
    }
}
