// SPDX-License-Identifier: MPL-2.0
//! Media panel: a mock music player plus a search-and-filter card.
//!
//! The player toggles a boolean and reports it; no audio is involved. The
//! filter pills are mutually exclusive and the apply button is decorative.

use crate::i18n::fluent::I18n;
use crate::ui::components::GlassCard;
use crate::ui::design_tokens::{glass, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, text_input, Column, Container, Row, Text};
use iced::{alignment, mouse, Background, Border, Element, Length, Theme};

/// Content categories for the search card. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Music,
    Videos,
    Photos,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::All, Filter::Music, Filter::Videos, Filter::Photos];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Filter::All => "filter-all",
            Filter::Music => "filter-music",
            Filter::Videos => "filter-videos",
            Filter::Photos => "filter-photos",
        }
    }
}

#[derive(Debug, Default)]
pub struct State {
    playing: bool,
    query: String,
    filter: Filter,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TogglePlayback,
    QueryChanged(String),
    FilterSelected(Filter),
}

/// Applies a media-panel message; playback toggles report feedback.
pub fn update(state: &mut State, message: Message) -> Option<Notification> {
    match message {
        Message::TogglePlayback => {
            state.playing = !state.playing;
            let key = if state.playing {
                "notification-playing"
            } else {
                "notification-paused"
            };
            Some(Notification::info(key))
        }
        Message::QueryChanged(query) => {
            state.query = query;
            None
        }
        Message::FilterSelected(filter) => {
            state.filter = filter;
            None
        }
    }
}

/// Renders the media panel.
pub fn view<'a>(state: &'a State, i18n: &'a I18n, elapsed: f32) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::LG)
        .push(
            Container::new(player_card(state, i18n, elapsed)).width(Length::FillPortion(1)),
        )
        .push(
            Container::new(search_card(state, i18n, elapsed)).width(Length::FillPortion(1)),
        )
        .into()
}

fn player_card<'a>(state: &'a State, i18n: &'a I18n, elapsed: f32) -> Element<'a, Message> {
    let tile = Container::new(icons::sized(icons::note(), sizing::ICON_XL))
        .width(sizing::PLAYER_TILE)
        .height(sizing::PLAYER_TILE / 2.0)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(player_tile_style);

    let toggle_icon = if state.playing() {
        icons::pause()
    } else {
        icons::play()
    };
    let toggle = button(
        Container::new(icons::sized(toggle_icon, sizing::ICON_MD)).padding(spacing::SM),
    )
    .on_press(Message::TogglePlayback)
    .style(styles::button::glass(styles::button::Variant::Secondary));

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("media-player-heading"))
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(tile)
        .push(
            Text::new(i18n.tr("media-now-playing"))
                .size(typography::CAPTION)
                .color(glass::TEXT_FAINT),
        )
        .push(Text::new(i18n.tr("media-track")).size(typography::BODY_LG))
        .push(toggle);

    GlassCard::new().view(
        elapsed,
        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fill),
    )
}

fn search_card<'a>(state: &'a State, i18n: &'a I18n, elapsed: f32) -> Element<'a, Message> {
    let search = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::lens(), sizing::ICON_SM))
        .push(
            text_input(&i18n.tr("media-search-placeholder"), state.query())
                .on_input(Message::QueryChanged)
                .padding(spacing::SM)
                .style(styles::input::glass),
        );

    let mut pills = Row::new().spacing(spacing::XS);
    for filter in Filter::ALL {
        let selected = filter == state.filter();
        let pill = Container::new(
            Text::new(i18n.tr(filter.label_key())).size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::badge::pill(selected));

        pills = pills.push(
            mouse_area(pill)
                .on_press(Message::FilterSelected(filter))
                .interaction(mouse::Interaction::Pointer),
        );
    }

    let apply_label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::funnel(), sizing::ICON_SM))
        .push(Text::new(i18n.tr("media-apply-filters")).size(typography::BODY));

    // Decorative; filtering has nothing to act on.
    let apply = button(apply_label)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::glass(styles::button::Variant::Ghost));

    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("media-search-heading")).size(typography::TITLE_MD))
        .push(search)
        .push(pills)
        .push(apply);

    GlassCard::new().delay(0.1).view(
        elapsed,
        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fill),
    )
}

fn player_tile_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(iced::Color {
            a: 0.25,
            ..palette::PURPLE_400
        })),
        border: Border {
            color: glass::EDGE,
            width: 1.0,
            radius: radius::LG.into(),
        },
        text_color: Some(glass::TEXT),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_reports_the_new_state() {
        let mut state = State::new();
        assert!(!state.playing());

        let n = update(&mut state, Message::TogglePlayback).expect("toggle notifies");
        assert!(state.playing());
        assert_eq!(n.message_key(), "notification-playing");

        let n = update(&mut state, Message::TogglePlayback).expect("toggle notifies");
        assert!(!state.playing());
        assert_eq!(n.message_key(), "notification-paused");
    }

    #[test]
    fn query_edits_are_silent() {
        let mut state = State::new();
        assert!(update(&mut state, Message::QueryChanged("glass".into())).is_none());
        assert_eq!(state.query(), "glass");
    }

    #[test]
    fn filters_are_mutually_exclusive() {
        let mut state = State::new();
        assert_eq!(state.filter(), Filter::All);

        update(&mut state, Message::FilterSelected(Filter::Videos));
        assert_eq!(state.filter(), Filter::Videos);

        update(&mut state, Message::FilterSelected(Filter::Music));
        assert_eq!(state.filter(), Filter::Music);
    }

    #[test]
    fn playback_survives_filter_changes() {
        let mut state = State::new();
        update(&mut state, Message::TogglePlayback);
        update(&mut state, Message::FilterSelected(Filter::Photos));
        assert!(state.playing());
    }
}
