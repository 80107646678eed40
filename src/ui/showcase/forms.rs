// SPDX-License-Identifier: MPL-2.0
//! Contact form panel.
//!
//! The draft lives only in memory for the session. Submitting surfaces a
//! notification and deliberately leaves the fields as they are: the original
//! design neither clears nor validates on submit, and that behavior is kept.

use crate::i18n::fluent::I18n;
use crate::ui::components::GlassCard;
use crate::ui::design_tokens::{glass, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Three independently editable text fields.
#[derive(Debug, Clone, Default)]
pub struct FormDraft {
    name: String,
    email: String,
    message: String,
}

impl FormDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
}

/// Applies a form message; `Submit` reports feedback to surface.
pub fn update(draft: &mut FormDraft, message: Message) -> Option<Notification> {
    match message {
        Message::NameChanged(value) => {
            draft.name = value;
            None
        }
        Message::EmailChanged(value) => {
            draft.email = value;
            None
        }
        Message::MessageChanged(value) => {
            draft.message = value;
            None
        }
        // Fields are kept as-is, matching the original behavior.
        Message::Submit => Some(Notification::info("notification-form-submitted")),
    }
}

/// Renders the contact form panel.
pub fn view<'a>(draft: &'a FormDraft, i18n: &'a I18n, elapsed: f32) -> Element<'a, Message> {
    let name_field = labeled_field(
        i18n.tr("form-name-label"),
        text_input(&i18n.tr("form-name-placeholder"), draft.name())
            .on_input(Message::NameChanged)
            .padding(spacing::SM)
            .style(styles::input::glass),
    );

    let email_field = labeled_field(
        i18n.tr("form-email-label"),
        text_input(&i18n.tr("form-email-placeholder"), draft.email())
            .on_input(Message::EmailChanged)
            .padding(spacing::SM)
            .style(styles::input::glass),
    );

    let message_field = labeled_field(
        i18n.tr("form-message-label"),
        text_input(&i18n.tr("form-message-placeholder"), draft.message())
            .on_input(Message::MessageChanged)
            .padding(spacing::SM)
            .style(styles::input::glass),
    );

    let submit_label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::envelope(), sizing::ICON_SM))
        .push(Text::new(i18n.tr("form-submit")).size(typography::BODY_LG));

    let submit = button(submit_label)
        .on_press(Message::Submit)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::glass(styles::button::Variant::Primary));

    let content = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("form-heading")).size(typography::TITLE_MD))
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(Container::new(name_field).width(Length::FillPortion(1)))
                .push(Container::new(email_field).width(Length::FillPortion(1))),
        )
        .push(message_field)
        .push(submit);

    GlassCard::new().view(
        elapsed,
        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fill),
    )
}

fn labeled_field<'a>(
    label: String,
    input: text_input::TextInput<'a, Message>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .color(glass::TEXT_DIM),
        )
        .push(input)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_independently_overwritten() {
        let mut draft = FormDraft::new();
        update(&mut draft, Message::NameChanged("Ada".into()));
        update(&mut draft, Message::EmailChanged("a@x.com".into()));
        assert_eq!(draft.name(), "Ada");
        assert_eq!(draft.email(), "a@x.com");
        assert_eq!(draft.message(), "");

        update(&mut draft, Message::NameChanged("Grace".into()));
        assert_eq!(draft.name(), "Grace");
        assert_eq!(draft.email(), "a@x.com");
    }

    #[test]
    fn submit_notifies_and_keeps_the_draft() {
        let mut draft = FormDraft::new();
        update(&mut draft, Message::NameChanged("Ada".into()));
        update(&mut draft, Message::EmailChanged("a@x.com".into()));
        update(&mut draft, Message::MessageChanged("hi".into()));

        let notification = update(&mut draft, Message::Submit).expect("submit notifies");
        assert_eq!(notification.message_key(), "notification-form-submitted");

        assert_eq!(draft.name(), "Ada");
        assert_eq!(draft.email(), "a@x.com");
        assert_eq!(draft.message(), "hi");
    }

    #[test]
    fn submit_works_on_an_empty_draft() {
        // No validation on submit; an empty draft still notifies.
        let mut draft = FormDraft::new();
        assert!(update(&mut draft, Message::Submit).is_some());
        assert_eq!(draft.name(), "");
    }
}
