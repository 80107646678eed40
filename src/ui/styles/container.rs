// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, glass, opacity, palette, radius, shadow};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians, Theme};

/// Full-window night gradient the whole showcase sits on
/// (indigo -> purple -> pink, top-left to bottom-right).
pub fn night_gradient(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(std::f32::consts::FRAC_PI_4))
        .add_stop(0.0, palette::INDIGO_900)
        .add_stop(0.5, palette::PURPLE_900)
        .add_stop(1.0, palette::PINK_800);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(glass::TEXT),
        ..Default::default()
    }
}

/// Standard glass card surface: translucent white fill over the gradient,
/// hairline edge, soft shadow. `alpha_scale` fades the surface in during the
/// entrance animation (1.0 once settled).
pub fn glass_card(alpha_scale: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: glass::SURFACE.a * alpha_scale,
            ..glass::SURFACE
        })),
        border: Border {
            color: Color {
                a: glass::EDGE.a * alpha_scale,
                ..glass::EDGE
            },
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: shadow::LG,
        text_color: Some(Color {
            a: alpha_scale,
            ..glass::TEXT
        }),
        ..Default::default()
    }
}

/// Tinted glass panel used by the feature cards; each card carries its own
/// accent gradient in the original design, approximated here with a flat tint.
pub fn tinted_card(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BLOB,
            ..tint
        })),
        border: Border {
            color: glass::EDGE,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(glass::TEXT),
        ..Default::default()
    }
}

/// Small rounded bubble holding a single icon glyph.
pub fn icon_bubble(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(glass::SURFACE)),
        border: Border {
            color: glass::EDGE,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        text_color: Some(glass::TEXT),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_gradient_uses_a_gradient_background() {
        let style = night_gradient(&Theme::Dark);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
    }

    #[test]
    fn glass_card_fades_with_entrance_progress() {
        let settled = glass_card(1.0)(&Theme::Dark);
        let entering = glass_card(0.25)(&Theme::Dark);

        let alpha = |style: &container::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("glass card should have a solid translucent fill"),
        };

        assert!(alpha(&entering) < alpha(&settled));
    }

    #[test]
    fn tinted_card_keeps_the_accent_hue() {
        let style = tinted_card(palette::CYAN_400)(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.r, palette::CYAN_400.r);
                assert!(color.a < 1.0);
            }
            _ => panic!("tinted card should have a solid translucent fill"),
        }
    }
}
