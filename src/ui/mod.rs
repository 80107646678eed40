// SPDX-License-Identifier: MPL-2.0
//! User interface components for the glass gallery.
//!
//! Everything visual lives here: the design token tables, centralized style
//! functions, the notification system, the animated background, and the three
//! screens (showcase, components grid, effects gallery).

pub mod components;
pub mod components_grid;
pub mod design_tokens;
pub mod effects;
pub mod footer;
pub mod header;
pub mod icons;
pub mod notifications;
pub mod showcase;
pub mod styles;
pub mod widgets;
