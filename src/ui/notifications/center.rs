// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Center` owns the ordered sequence of live notifications. Entries are
//! appended on enqueue and removed by exact id match when their expiration
//! callback fires, so concurrent enqueues never disturb unrelated entries and
//! a stale callback for an already-removed id is a no-op.

use super::notification::{Notification, NotificationId};

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Remove a specific notification by ID (timer-driven, idempotent).
    Expire(NotificationId),
}

/// Ordered queue of transient user-feedback messages.
#[derive(Debug, Default)]
pub struct Center {
    /// Live notifications in insertion order (insertion order = display order).
    entries: Vec<Notification>,
}

impl Center {
    /// Creates a new empty notification center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification and returns its id.
    ///
    /// The caller is responsible for scheduling exactly one expiration
    /// callback for the returned id; the center itself never owns timers.
    /// Always succeeds.
    pub fn enqueue(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();
        self.entries.push(notification);
        id
    }

    /// Removes the entry matching `id`.
    ///
    /// Returns `true` if an entry was removed. Calling this twice with the
    /// same id, or with an id that was never enqueued, is a no-op.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.entries.iter().position(|n| n.id() == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Expire(id) => {
                self.expire(id);
            }
        }
    }

    /// Live notifications in insertion order, for rendering.
    pub fn snapshot(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Number of live notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;

    #[test]
    fn new_center_is_empty() {
        let center = Center::new();
        assert!(center.is_empty());
        assert_eq!(center.len(), 0);
    }

    #[test]
    fn enqueue_returns_the_entry_id() {
        let mut center = Center::new();
        let notification = Notification::info("test");
        let expected = notification.id();

        let id = center.enqueue(notification);
        assert_eq!(id, expected);
        assert_eq!(center.len(), 1);
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let mut center = Center::new();
        for key in ["first", "second", "third"] {
            center.enqueue(Notification::info(key));
        }

        let keys: Vec<&str> = center.snapshot().map(Notification::message_key).collect();
        assert_eq!(keys, ["first", "second", "third"]);
    }

    #[test]
    fn no_two_entries_share_an_id() {
        let mut center = Center::new();
        for _ in 0..50 {
            center.enqueue(Notification::info("spam"));
        }

        let mut ids: Vec<NotificationId> = center.snapshot().map(Notification::id).collect();
        ids.sort_by_key(|id| format!("{id:?}"));
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn expire_removes_only_the_matching_entry() {
        let mut center = Center::new();
        let a = center.enqueue(Notification::info("a"));
        let _b = center.enqueue(Notification::info("b"));
        let _c = center.enqueue(Notification::info("c"));

        assert!(center.expire(a));

        let keys: Vec<&str> = center.snapshot().map(Notification::message_key).collect();
        assert_eq!(keys, ["b", "c"]);
    }

    #[test]
    fn expire_is_idempotent() {
        let mut center = Center::new();
        let id = center.enqueue(Notification::info("once"));

        assert!(center.expire(id));
        assert!(!center.expire(id));
        assert!(center.is_empty());
    }

    #[test]
    fn expire_of_unknown_id_is_a_no_op() {
        let mut center = Center::new();
        center.enqueue(Notification::info("kept"));

        let never_enqueued = Notification::info("ghost").id();
        assert!(!center.expire(never_enqueued));
        assert_eq!(center.len(), 1);
    }

    #[test]
    fn interleaved_enqueue_and_expire_keep_order() {
        let mut center = Center::new();
        let a = center.enqueue(Notification::info("a"));
        let b = center.enqueue(Notification::info("b"));

        // A expires while later entries arrive
        center.expire(a);
        center.enqueue(Notification::info("c"));

        let keys: Vec<&str> = center.snapshot().map(Notification::message_key).collect();
        assert_eq!(keys, ["b", "c"]);

        center.expire(b);
        let keys: Vec<&str> = center.snapshot().map(Notification::message_key).collect();
        assert_eq!(keys, ["c"]);
    }

    #[test]
    fn staggered_enqueues_expire_in_arrival_order() {
        use std::time::{Duration, Instant};

        let start = Instant::now();
        let mut center = Center::new();
        let a = center.enqueue(Notification::info("a").with_created_at(start));
        let b = center
            .enqueue(Notification::info("b").with_created_at(start + Duration::from_millis(10)));

        let keys: Vec<&str> = center.snapshot().map(Notification::message_key).collect();
        assert_eq!(keys, ["a", "b"]);

        // At the 3005 ms mark only the first entry is due.
        let now = start + Duration::from_millis(3005);
        let due: Vec<_> = center
            .snapshot()
            .filter(|n| n.is_due(now))
            .map(Notification::id)
            .collect();
        assert_eq!(due, vec![a]);

        center.expire(a);
        let keys: Vec<&str> = center.snapshot().map(Notification::message_key).collect();
        assert_eq!(keys, ["b"]);

        // At 3015 ms the second one is due as well.
        let later = start + Duration::from_millis(3015);
        assert!(center.snapshot().all(|n| n.is_due(later)));
        center.expire(b);
        assert!(center.is_empty());
    }

    #[test]
    fn handle_message_expires_by_id() {
        let mut center = Center::new();
        let id = center.enqueue(Notification::new(Kind::Success, "done"));

        center.handle_message(Message::Expire(id));
        assert!(center.is_empty());

        // Stale duplicate of the same timer message
        center.handle_message(Message::Expire(id));
        assert!(center.is_empty());
    }
}
