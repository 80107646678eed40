// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long every notification stays visible.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Unique identifier for a notification.
///
/// Ids are drawn from a process-wide counter, so two notifications created in
/// the same instant never collide and removal can match by exact id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Category tag determining the accent color and icon of the toast.
/// The display duration is the same for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Informational message (blue accent).
    #[default]
    Info,
    /// Action confirmation (green accent).
    Success,
    /// Non-blocking warning (amber accent).
    Warning,
    /// Something went wrong (red accent).
    Error,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Info => palette::INFO_400,
            Kind::Success => palette::SUCCESS_400,
            Kind::Warning => palette::WARNING_400,
            Kind::Error => palette::ERROR_400,
        }
    }
}

/// A transient user-feedback message.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Category tag (accent color, icon).
    kind: Kind,
    /// The i18n key for the notification message; immutable after creation.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    /// When this notification was created.
    created_at: Instant,
}

impl Notification {
    /// Creates a notification with the given kind and message key.
    pub fn new(kind: Kind, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    /// Creates an informational notification (the default kind).
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Info, message_key)
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Success, message_key)
    }

    /// Creates a warning notification.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Whether the display duration has elapsed as of `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= DISPLAY_DURATION
    }

    #[cfg(test)]
    pub(crate) fn with_created_at(mut self, created_at: Instant) -> Self {
        self.created_at = created_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let a = Notification::info("test");
        let b = Notification::info("test");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn kind_colors_are_distinct() {
        let info = Kind::Info.color();
        let success = Kind::Success.color();
        let warning = Kind::Warning.color();
        let error = Kind::Error.color();

        assert_ne!(info, success);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(Kind::default(), Kind::Info);
    }

    #[test]
    fn constructors_set_the_kind() {
        assert_eq!(Notification::info("").kind(), Kind::Info);
        assert_eq!(Notification::success("").kind(), Kind::Success);
        assert_eq!(Notification::warning("").kind(), Kind::Warning);
        assert_eq!(Notification::error("").kind(), Kind::Error);
    }

    #[test]
    fn due_exactly_at_the_boundary() {
        let start = Instant::now();
        let n = Notification::info("boundary").with_created_at(start);

        assert!(!n.is_due(start + Duration::from_millis(2999)));
        assert!(n.is_due(start + Duration::from_millis(3000)));
        assert!(n.is_due(start + Duration::from_millis(3001)));
    }

    #[test]
    fn builder_collects_args() {
        let n = Notification::info("greeting")
            .with_arg("name", "Ada")
            .with_arg("count", "2");
        assert_eq!(n.message_args().len(), 2);
        assert_eq!(n.message_key(), "greeting");
    }
}
