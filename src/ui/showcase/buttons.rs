// SPDX-License-Identifier: MPL-2.0
//! Interactive buttons panel.
//!
//! Each demo button owns an [`InteractionFlags`] record fed from mouse-area
//! events; the flags pick the glass density so hover and press feedback stays
//! visible even though nothing but the look changes. Releasing a press both
//! clears the flag and activates the button.

use crate::i18n::fluent::I18n;
use crate::ui::components::{GlassCard, InteractionFlags};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles::{self, button::Variant};
use iced::widget::{button, container, mouse_area, Column, Container, Row, Text};
use iced::{alignment, mouse, Element, Length, Theme};

/// Text size of a demo button.
#[derive(Debug, Clone, Copy)]
enum Size {
    Sm,
    Md,
    Lg,
}

impl Size {
    fn text(self) -> f32 {
        match self {
            Size::Sm => typography::CAPTION,
            Size::Md => typography::BODY,
            Size::Lg => typography::BODY_LG,
        }
    }

    fn padding(self) -> [f32; 2] {
        match self {
            Size::Sm => [spacing::XXS + 2.0, spacing::SM],
            Size::Md => [spacing::XS, spacing::MD],
            Size::Lg => [spacing::SM, spacing::LG],
        }
    }
}

struct VariantButton {
    label_key: &'static str,
    notification_key: &'static str,
    variant: Variant,
    size: Size,
    icon: Option<fn() -> Text<'static>>,
}

struct IconButton {
    icon: fn() -> Text<'static>,
    notification_key: &'static str,
}

const VARIANT_BUTTONS: [VariantButton; 3] = [
    VariantButton {
        label_key: "button-primary-action",
        notification_key: "notification-primary-action",
        variant: Variant::Primary,
        size: Size::Lg,
        icon: Some(icons::sparkles),
    },
    VariantButton {
        label_key: "button-secondary",
        notification_key: "notification-secondary-action",
        variant: Variant::Secondary,
        size: Size::Md,
        icon: Some(icons::eye),
    },
    VariantButton {
        label_key: "button-ghost",
        notification_key: "notification-ghost-action",
        variant: Variant::Ghost,
        size: Size::Sm,
        icon: None,
    },
];

const ICON_BUTTONS: [IconButton; 4] = [
    IconButton {
        icon: icons::arrow_down,
        notification_key: "notification-download-clicked",
    },
    IconButton {
        icon: icons::arrow_up_right,
        notification_key: "notification-share-clicked",
    },
    IconButton {
        icon: icons::cog,
        notification_key: "notification-settings-clicked",
    },
    IconButton {
        icon: icons::heart,
        notification_key: "notification-favorite-clicked",
    },
];

/// Total number of interactive buttons in this panel.
pub const BUTTON_COUNT: usize = VARIANT_BUTTONS.len() + ICON_BUTTONS.len();

/// Per-instance interaction flags for every demo button.
#[derive(Debug)]
pub struct State {
    flags: [InteractionFlags; BUTTON_COUNT],
}

impl Default for State {
    fn default() -> Self {
        Self {
            flags: [InteractionFlags::new(); BUTTON_COUNT],
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn flags(&self, index: usize) -> Option<InteractionFlags> {
        self.flags.get(index).copied()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Hovered(usize, bool),
    Pressed(usize),
    /// Press released over the button; clears the flag and activates.
    Released(usize),
}

/// Applies a buttons-panel message; returns feedback to surface, if any.
pub fn update(state: &mut State, message: Message) -> Option<Notification> {
    match message {
        Message::Hovered(index, hovered) => {
            if let Some(flags) = state.flags.get_mut(index) {
                flags.set_hovered(hovered);
            }
            None
        }
        Message::Pressed(index) => {
            if let Some(flags) = state.flags.get_mut(index) {
                flags.set_pressed(true);
            }
            None
        }
        Message::Released(index) => {
            let flags = state.flags.get_mut(index)?;
            let was_pressed = flags.pressed();
            flags.set_pressed(false);
            if was_pressed {
                notification_key(index).map(Notification::info)
            } else {
                None
            }
        }
    }
}

fn notification_key(index: usize) -> Option<&'static str> {
    if index < VARIANT_BUTTONS.len() {
        Some(VARIANT_BUTTONS[index].notification_key)
    } else {
        ICON_BUTTONS
            .get(index - VARIANT_BUTTONS.len())
            .map(|b| b.notification_key)
    }
}

/// Renders the buttons panel.
pub fn view<'a>(state: &'a State, i18n: &'a I18n, elapsed: f32) -> Element<'a, Message> {
    let mut variants = Row::new().spacing(spacing::MD);
    for (index, entry) in VARIANT_BUTTONS.iter().enumerate() {
        let mut label = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);
        if let Some(icon) = entry.icon {
            label = label.push(icons::sized(icon(), sizing::ICON_SM));
        }
        label = label.push(Text::new(i18n.tr(entry.label_key)).size(entry.size.text()));

        variants = variants.push(glass_button(
            index,
            entry.variant,
            state.flags[index],
            Container::new(label).padding(entry.size.padding()).into(),
        ));
    }

    let mut icon_row = Row::new().spacing(spacing::SM);
    for (offset, entry) in ICON_BUTTONS.iter().enumerate() {
        let index = VARIANT_BUTTONS.len() + offset;
        icon_row = icon_row.push(glass_button(
            index,
            Variant::Ghost,
            state.flags[index],
            Container::new(icons::sized((entry.icon)(), sizing::ICON_MD))
                .padding(spacing::SM)
                .into(),
        ));
    }

    let content = Column::new()
        .spacing(spacing::XL)
        .push(
            Column::new()
                .spacing(spacing::MD)
                .push(Text::new(i18n.tr("buttons-variants-heading")).size(typography::TITLE_MD))
                .push(variants),
        )
        .push(
            Column::new()
                .spacing(spacing::MD)
                .push(Text::new(i18n.tr("buttons-icons-heading")).size(typography::TITLE_MD))
                .push(icon_row),
        );

    GlassCard::new().view(
        elapsed,
        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fill),
    )
}

/// An interactive glass surface whose look is driven by the instance flags.
fn glass_button(
    index: usize,
    variant: Variant,
    flags: InteractionFlags,
    content: Element<'_, Message>,
) -> Element<'_, Message> {
    let surface = Container::new(content).style(flag_style(variant, flags));

    mouse_area(surface)
        .on_enter(Message::Hovered(index, true))
        .on_exit(Message::Hovered(index, false))
        .on_press(Message::Pressed(index))
        .on_release(Message::Released(index))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn flag_style(variant: Variant, flags: InteractionFlags) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let status = if flags.pressed() {
            button::Status::Pressed
        } else if flags.hovered() {
            button::Status::Hovered
        } else {
            button::Status::Active
        };
        let base = styles::button::glass(variant)(theme, status);

        container::Style {
            background: base.background,
            text_color: Some(base.text_color),
            border: base.border,
            shadow: base.shadow,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_sets_and_clears_the_flag() {
        let mut state = State::new();
        assert!(update(&mut state, Message::Hovered(0, true)).is_none());
        assert!(state.flags(0).unwrap().hovered());

        update(&mut state, Message::Hovered(0, false));
        assert!(!state.flags(0).unwrap().hovered());
    }

    #[test]
    fn release_after_press_activates() {
        let mut state = State::new();
        update(&mut state, Message::Pressed(0));
        assert!(state.flags(0).unwrap().pressed());

        let feedback = update(&mut state, Message::Released(0));
        let notification = feedback.expect("release completes the press");
        assert_eq!(notification.message_key(), "notification-primary-action");
        assert!(!state.flags(0).unwrap().pressed());
    }

    #[test]
    fn release_without_press_is_inert() {
        let mut state = State::new();
        assert!(update(&mut state, Message::Released(2)).is_none());
    }

    #[test]
    fn icon_buttons_report_their_own_keys() {
        let mut state = State::new();
        let index = VARIANT_BUTTONS.len(); // first icon button
        update(&mut state, Message::Pressed(index));
        let notification = update(&mut state, Message::Released(index)).unwrap();
        assert_eq!(notification.message_key(), "notification-download-clicked");
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut state = State::new();
        assert!(update(&mut state, Message::Hovered(99, true)).is_none());
        assert!(update(&mut state, Message::Pressed(99)).is_none());
        assert!(update(&mut state, Message::Released(99)).is_none());
    }

    #[test]
    fn flags_are_per_instance() {
        let mut state = State::new();
        update(&mut state, Message::Hovered(1, true));
        assert!(!state.flags(0).unwrap().hovered());
        assert!(state.flags(1).unwrap().hovered());
        assert!(!state.flags(2).unwrap().hovered());
    }
}
