// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message};
use crate::ui::notifications::{self, Notification, DISPLAY_DURATION};
use crate::ui::showcase;
use iced::Task;

impl App {
    /// Processes a top-level message and returns any follow-up task.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SwitchScreen(screen) => {
                self.screen = screen;
                Task::none()
            }
            Message::Showcase(msg) => match showcase::update(&mut self.showcase, msg) {
                showcase::Event::None => Task::none(),
                showcase::Event::Notify(notification) => self.notify(notification),
            },
            Message::Notifications(msg) => {
                self.notifications.handle_message(msg);
                Task::none()
            }
            Message::AnimationTick(now) => {
                let elapsed = now.duration_since(self.started).as_secs_f32();
                self.particles.advance(elapsed);
                Task::none()
            }
        }
    }

    /// Enqueues a notification and schedules its single expiration callback.
    fn notify(&mut self, notification: Notification) -> Task<Message> {
        let id = self.notifications.enqueue(notification);
        Task::perform(tokio::time::sleep(DISPLAY_DURATION), move |_| {
            Message::Notifications(notifications::Message::Expire(id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Screen;
    use crate::ui::showcase::{forms, Section};

    #[test]
    fn screen_switch_message_takes_effect() {
        let mut app = App::default();
        assert_eq!(app.screen(), Screen::Showcase);

        let _ = app.update(Message::SwitchScreen(Screen::Components));
        assert_eq!(app.screen(), Screen::Components);
    }

    #[tokio::test]
    async fn form_submission_lands_in_the_notification_center() {
        let mut app = App::default();
        assert!(app.notifications().is_empty());

        let _ = app.update(Message::Showcase(showcase::Message::Form(
            forms::Message::Submit,
        )));
        assert_eq!(app.notifications().len(), 1);

        let keys: Vec<&str> = app
            .notifications()
            .snapshot()
            .map(|n| n.message_key())
            .collect();
        assert_eq!(keys, vec!["notification-form-submitted"]);
    }

    #[tokio::test]
    async fn expire_messages_drain_the_center() {
        let mut app = App::default();
        let _ = app.update(Message::Showcase(showcase::Message::Form(
            forms::Message::Submit,
        )));
        let id = app
            .notifications()
            .snapshot()
            .next()
            .map(|n| n.id())
            .unwrap();

        let _ = app.update(Message::Notifications(notifications::Message::Expire(id)));
        assert!(app.notifications().is_empty());

        // A stale duplicate of the same callback is a no-op.
        let _ = app.update(Message::Notifications(notifications::Message::Expire(id)));
        assert!(app.notifications().is_empty());
    }

    #[test]
    fn screen_switching_leaves_the_demo_section_alone() {
        let mut app = App::default();
        let _ = app.update(Message::Showcase(showcase::Message::SelectSection(
            Section::Media,
        )));
        let _ = app.update(Message::SwitchScreen(Screen::Effects));
        let _ = app.update(Message::SwitchScreen(Screen::Showcase));
        assert_eq!(app.showcase().active(), Section::Media);
    }

    #[test]
    fn section_selection_flows_through_the_root() {
        let mut app = App::default();
        let _ = app.update(Message::Showcase(showcase::Message::SelectSection(
            Section::Forms,
        )));
        assert_eq!(app.showcase().active(), Section::Forms);
        assert!(app.notifications().is_empty());
    }
}
