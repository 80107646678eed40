// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use glass_gallery::ui::design_tokens::{opacity, palette, sizing, spacing};
    use glass_gallery::ui::styles::{badge, button, container, input};
    use iced::widget::{button::Status as ButtonStatus, text_input::Status as InputStatus};
    use iced::{Background, Theme};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::glass(button::Variant::Primary)(&theme, ButtonStatus::Active);
        let _ = button::glass(button::Variant::Secondary)(&theme, ButtonStatus::Hovered);
        let _ = button::glass(button::Variant::Ghost)(&theme, ButtonStatus::Pressed);
        let _ = button::nav(true)(&theme, ButtonStatus::Active);
        let _ = button::link(&theme, ButtonStatus::Active);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PURPLE_400;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::PARTICLE_MAX;

        // Sizing
        let _ = sizing::TOAST_WIDTH;
    }

    #[test]
    fn glass_surfaces_stay_translucent() {
        let theme = Theme::Dark;
        let alpha = |background: Option<Background>| match background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("expected a solid translucent fill"),
        };

        let card = container::glass_card(1.0)(&theme);
        assert!(alpha(card.background) < 1.0);

        let pill = badge::pill(true)(&theme);
        assert!(alpha(pill.background) < 1.0);

        let secondary = button::glass(button::Variant::Secondary)(&theme, ButtonStatus::Active);
        assert!(alpha(secondary.background) < 1.0);
    }

    #[test]
    fn focus_brightens_the_input_edge() {
        let theme = Theme::Dark;
        let idle = input::glass(&theme, InputStatus::Active);
        let focused = input::glass(
            &theme,
            InputStatus::Focused { is_hovered: false },
        );
        assert!(focused.border.color.a > idle.border.color.a);
    }
}
