// SPDX-License-Identifier: MPL-2.0
//! Navigation panel: a mock sidebar whose rows only raise notifications.

use crate::i18n::fluent::I18n;
use crate::ui::components::GlassCard;
use crate::ui::design_tokens::{glass, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

struct NavItem {
    label_key: &'static str,
    notification_key: &'static str,
    icon: fn() -> Text<'static>,
    badge: Option<Badge>,
}

enum Badge {
    /// The localized "New" pill.
    New,
    /// A literal marker such as a count.
    Literal(&'static str),
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label_key: "nav-item-dashboard",
        notification_key: "notification-navigated-dashboard",
        icon: icons::layers,
        badge: Some(Badge::New),
    },
    NavItem {
        label_key: "nav-item-analytics",
        notification_key: "notification-navigated-analytics",
        icon: icons::eye,
        badge: Some(Badge::Literal("5")),
    },
    NavItem {
        label_key: "nav-item-settings",
        notification_key: "notification-navigated-settings",
        icon: icons::cog,
        badge: None,
    },
    NavItem {
        label_key: "nav-item-profile",
        notification_key: "notification-navigated-profile",
        icon: icons::person,
        badge: None,
    },
    NavItem {
        label_key: "nav-item-security",
        notification_key: "notification-navigated-security",
        icon: icons::slash,
        badge: Some(Badge::Literal("!")),
    },
];

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Activated(usize),
}

/// Applies a navigation message; valid rows report where they would lead.
pub fn update(message: Message) -> Option<Notification> {
    let Message::Activated(index) = message;
    NAV_ITEMS
        .get(index)
        .map(|item| Notification::info(item.notification_key))
}

/// Renders the navigation panel.
pub fn view<'a>(i18n: &'a I18n, elapsed: f32) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::XS);
    for (index, item) in NAV_ITEMS.iter().enumerate() {
        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized((item.icon)(), sizing::ICON_SM))
            .push(
                Text::new(i18n.tr(item.label_key))
                    .size(typography::BODY)
                    .width(Length::Fill),
            );

        if let Some(badge) = &item.badge {
            let label = match badge {
                Badge::New => i18n.tr("badge-new"),
                Badge::Literal(text) => (*text).to_owned(),
            };
            row = row.push(
                Container::new(Text::new(label).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::badge::pill(true)),
            );
        }

        row = row.push(
            icons::sized(icons::chevron_right(), sizing::ICON_SM).color(glass::TEXT_FAINT),
        );

        rows = rows.push(
            button(Container::new(row).padding([spacing::SM, spacing::MD]))
                .on_press(Message::Activated(index))
                .width(Length::Fill)
                .padding(0.0)
                .style(styles::button::nav(false)),
        );
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("navigation-heading")).size(typography::TITLE_MD))
        .push(rows);

    GlassCard::new().view(
        elapsed,
        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH / 2.0),
    )
}
