// SPDX-License-Identifier: MPL-2.0
//! `glass_gallery` is a glassmorphism UI showcase built with the Iced GUI
//! framework.
//!
//! It renders translucent card, button, form, media and navigation demos over
//! an animated gradient background, and demonstrates internationalization with
//! Fluent, toast notifications with scheduled expiry, and modular UI design.

#![doc(html_root_url = "https://docs.rs/glass_gallery/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;
