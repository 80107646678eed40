// SPDX-License-Identifier: MPL-2.0
//! Demo panel switcher: the heart of the showcase screen.
//!
//! Holds the active demo [`Section`] plus the per-panel state (interaction
//! flags, the contact form draft, the media player toggle) and routes panel
//! messages. Panels report user feedback upward as [`Event::Notify`]; the
//! application root owns the notification center and its expiry timers.

pub mod buttons;
pub mod cards;
pub mod forms;
pub mod media;
pub mod navigation;

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::components::GlassCard;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Demo sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Cards,
    Buttons,
    Forms,
    Media,
    Navigation,
}

impl Section {
    /// All sections in declared order; the first one is the default.
    pub const ALL: [Section; 5] = [
        Section::Cards,
        Section::Buttons,
        Section::Forms,
        Section::Media,
        Section::Navigation,
    ];

    /// Stable string id of this section.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Section::Cards => "cards",
            Section::Buttons => "buttons",
            Section::Forms => "forms",
            Section::Media => "media",
            Section::Navigation => "navigation",
        }
    }

    /// Resolves a string id; ids outside the set are rejected.
    pub fn from_id(id: &str) -> Result<Section, Error> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| Error::InvalidSelection(id.to_string()))
    }

    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            Section::Cards => "section-cards",
            Section::Buttons => "section-buttons",
            Section::Forms => "section-forms",
            Section::Media => "section-media",
            Section::Navigation => "section-navigation",
        }
    }

    fn icon(&self) -> iced::widget::Text<'static> {
        match self {
            Section::Cards => icons::layers(),
            Section::Buttons => icons::pointer(),
            Section::Forms => icons::person(),
            Section::Media => icons::play(),
            Section::Navigation => icons::chevron_right(),
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::ALL[0]
    }
}

/// State of the showcase screen.
#[derive(Debug, Default)]
pub struct State {
    active: Section,
    buttons: buttons::State,
    form: forms::FormDraft,
    media: media::State,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active demo section.
    #[must_use]
    pub fn active(&self) -> Section {
        self.active
    }

    #[must_use]
    pub fn form(&self) -> &forms::FormDraft {
        &self.form
    }

    #[must_use]
    pub fn buttons(&self) -> &buttons::State {
        &self.buttons
    }

    #[must_use]
    pub fn media(&self) -> &media::State {
        &self.media
    }
}

/// Messages handled by the showcase screen.
#[derive(Debug, Clone)]
pub enum Message {
    SelectSection(Section),
    Buttons(buttons::Message),
    Form(forms::Message),
    Media(media::Message),
    Navigation(navigation::Message),
}

/// Events propagated to the application root.
#[derive(Debug)]
pub enum Event {
    None,
    /// A demo action wants to surface user feedback.
    Notify(Notification),
}

impl Event {
    fn from_notification(notification: Option<Notification>) -> Self {
        match notification {
            Some(n) => Event::Notify(n),
            None => Event::None,
        }
    }
}

/// Processes a showcase message and returns the resulting event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SelectSection(section) => {
            // Direct jump; no guarded transitions between panels.
            state.active = section;
            Event::None
        }
        Message::Buttons(msg) => {
            Event::from_notification(buttons::update(&mut state.buttons, msg))
        }
        Message::Form(msg) => Event::from_notification(forms::update(&mut state.form, msg)),
        Message::Media(msg) => Event::from_notification(media::update(&mut state.media, msg)),
        Message::Navigation(msg) => Event::from_notification(navigation::update(msg)),
    }
}

/// Context required to render the showcase screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Shared animation clock in seconds, for entrance staggering.
    pub elapsed: f32,
}

/// Renders the showcase: hero heading, section switcher, active panel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("showcase-heading"))
                .size(typography::TITLE_XL),
        )
        .push(
            Text::new(ctx.i18n.tr("showcase-tagline"))
                .size(typography::BODY_LG)
                .color(crate::ui::design_tokens::glass::TEXT_DIM),
        );

    let switcher = section_switcher(ctx.i18n, ctx.state.active, ctx.elapsed);

    let panel: Element<'_, Message> = match ctx.state.active {
        Section::Cards => cards::view(ctx.i18n, ctx.elapsed),
        Section::Buttons => {
            buttons::view(ctx.state.buttons(), ctx.i18n, ctx.elapsed).map(Message::Buttons)
        }
        Section::Forms => forms::view(ctx.state.form(), ctx.i18n, ctx.elapsed).map(Message::Form),
        Section::Media => media::view(ctx.state.media(), ctx.i18n, ctx.elapsed).map(Message::Media),
        Section::Navigation => navigation::view(ctx.i18n, ctx.elapsed).map(Message::Navigation),
    };

    Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(switcher)
        .push(panel)
        .into()
}

fn section_switcher(i18n: &I18n, active: Section, elapsed: f32) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    for section in Section::ALL {
        let variant = if section == active {
            styles::button::Variant::Primary
        } else {
            styles::button::Variant::Ghost
        };

        let label = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(section.icon(), sizing::ICON_SM))
            .push(Text::new(i18n.tr(section.label_key())).size(typography::BODY));

        row = row.push(
            button(label)
                .on_press(Message::SelectSection(section))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::glass(variant)),
        );
    }

    GlassCard::new()
        .delay(0.1)
        .view(elapsed, Container::new(row).center_x(Length::Fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_section_is_first_declared() {
        assert_eq!(Section::default(), Section::Cards);
        assert_eq!(State::new().active(), Section::Cards);
    }

    #[test]
    fn select_round_trips_every_section() {
        let mut state = State::new();
        for section in Section::ALL {
            let event = update(&mut state, Message::SelectSection(section));
            assert!(matches!(event, Event::None));
            assert_eq!(state.active(), section);
        }
    }

    #[test]
    fn ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()).unwrap(), section);
        }
    }

    #[test]
    fn out_of_set_id_is_rejected() {
        let err = Section::from_id("modals").unwrap_err();
        assert_eq!(err, Error::InvalidSelection("modals".to_string()));
    }

    #[test]
    fn form_submit_surfaces_exactly_one_notification() {
        let mut state = State::new();
        update(
            &mut state,
            Message::Form(forms::Message::NameChanged("Ada".into())),
        );
        update(
            &mut state,
            Message::Form(forms::Message::EmailChanged("a@x.com".into())),
        );
        update(
            &mut state,
            Message::Form(forms::Message::MessageChanged("hi".into())),
        );

        let event = update(&mut state, Message::Form(forms::Message::Submit));
        assert!(matches!(event, Event::Notify(_)));

        // Submitting leaves the draft untouched
        assert_eq!(state.form().name(), "Ada");
        assert_eq!(state.form().email(), "a@x.com");
        assert_eq!(state.form().message(), "hi");
    }

    #[test]
    fn switching_panels_does_not_touch_panel_state() {
        let mut state = State::new();
        update(
            &mut state,
            Message::Form(forms::Message::NameChanged("Grace".into())),
        );
        update(&mut state, Message::SelectSection(Section::Media));
        update(&mut state, Message::SelectSection(Section::Forms));
        assert_eq!(state.form().name(), "Grace");
    }
}
