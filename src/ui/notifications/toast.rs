// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the visible notification stack.

use super::center::{Center, Message};
use super::notification::{Kind, Notification};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, glass, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.kind().color();

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let icon_widget = icons::sized(Self::kind_icon(notification.kind()), sizing::ICON_SM)
            .color(accent);

        let message_widget = Text::new(message_text)
            .size(typography::BODY)
            .color(glass::TEXT);

        // Layout: [icon] [message]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Renders the toast overlay with all live notifications.
    ///
    /// Positions toasts in the top-right corner, stacked vertically in
    /// insertion order (oldest at the top).
    pub fn view_overlay<'a>(center: &'a Center, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = center
            .snapshot()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            // Empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }

    fn kind_icon(kind: Kind) -> Text<'static> {
        match kind {
            Kind::Success => icons::checkmark(),
            Kind::Info => icons::info(),
            Kind::Warning => icons::warning(),
            Kind::Error => icons::cross(),
        }
    }
}

/// Style function for the toast container: a dense glass card with a
/// kind-colored accent edge.
fn toast_container_style(_theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(glass::SURFACE_STRONG)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(glass::TEXT),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, palette::SUCCESS_400);
        assert_eq!(style.border.color, palette::SUCCESS_400);
        assert!(style.background.is_some());
    }

    #[test]
    fn kind_icons_are_defined() {
        let _ = Toast::kind_icon(Kind::Success);
        let _ = Toast::kind_icon(Kind::Info);
        let _ = Toast::kind_icon(Kind::Warning);
        let _ = Toast::kind_icon(Kind::Error);
    }
}
