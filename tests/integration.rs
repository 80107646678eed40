// SPDX-License-Identifier: MPL-2.0
use glass_gallery::i18n::fluent::I18n;
use glass_gallery::ui::notifications::{Center, Kind, Message, Notification};
use glass_gallery::ui::showcase::{self, forms, Section};

#[test]
fn test_language_selection_via_flag() {
    let i18n_en = I18n::new(Some("en-US".to_string()));
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("window-title"), "Glass Gallery");

    let i18n_fr = I18n::new(Some("fr".to_string()));
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(
        i18n_fr.tr("form-submit"),
        i18n_en.tr("form-submit"),
        "the French bundle should carry its own strings"
    );
}

#[test]
fn test_every_notification_key_is_translated() {
    let i18n = I18n::new(Some("en-US".to_string()));
    let keys = [
        "notification-primary-action",
        "notification-secondary-action",
        "notification-ghost-action",
        "notification-download-clicked",
        "notification-share-clicked",
        "notification-settings-clicked",
        "notification-favorite-clicked",
        "notification-form-submitted",
        "notification-playing",
        "notification-paused",
        "notification-navigated-dashboard",
        "notification-navigated-analytics",
        "notification-navigated-settings",
        "notification-navigated-profile",
        "notification-navigated-security",
    ];
    for key in keys {
        let translated = i18n.tr(key);
        assert!(
            !translated.starts_with("MISSING"),
            "untranslated key: {key}"
        );
    }
}

#[test]
fn test_notification_queue_preserves_arrival_order() {
    let mut center = Center::new();

    let first = center.enqueue(Notification::info("notification-playing"));
    let second = center.enqueue(Notification::success("notification-form-submitted"));
    let third = center.enqueue(Notification::info("notification-paused"));

    let ids: Vec<_> = center.snapshot().map(Notification::id).collect();
    assert_eq!(ids, vec![first, second, third]);

    // Expiring the middle entry keeps the relative order of the rest.
    center.handle_message(Message::Expire(second));
    let keys: Vec<&str> = center.snapshot().map(Notification::message_key).collect();
    assert_eq!(keys, vec!["notification-playing", "notification-paused"]);

    // A duplicate of the same expiry is a no-op.
    center.handle_message(Message::Expire(second));
    assert_eq!(center.len(), 2);
}

#[test]
fn test_rapid_fire_interactions_get_distinct_ids() {
    let mut center = Center::new();
    let ids: Vec<_> = (0..50)
        .map(|_| center.enqueue(Notification::info("notification-playing")))
        .collect();

    let unique: std::collections::HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(center.len(), 50);
}

#[test]
fn test_form_submission_does_not_clear_the_draft() {
    let mut state = showcase::State::new();

    showcase::update(
        &mut state,
        showcase::Message::Form(forms::Message::NameChanged("Ada".into())),
    );
    showcase::update(
        &mut state,
        showcase::Message::Form(forms::Message::EmailChanged("ada@example.com".into())),
    );

    let event = showcase::update(&mut state, showcase::Message::Form(forms::Message::Submit));
    let showcase::Event::Notify(notification) = event else {
        panic!("submit should surface a notification");
    };
    assert_eq!(notification.kind(), Kind::Info);

    assert_eq!(state.form().name(), "Ada");
    assert_eq!(state.form().email(), "ada@example.com");
}

#[test]
fn test_section_switching_is_total_over_the_set() {
    let mut state = showcase::State::new();

    for section in Section::ALL {
        showcase::update(&mut state, showcase::Message::SelectSection(section));
        assert_eq!(state.active(), section);
    }

    assert!(Section::from_id("modals").is_err());
    assert_eq!(Section::from_id("media").unwrap(), Section::Media);
}
