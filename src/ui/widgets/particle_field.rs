// SPDX-License-Identifier: MPL-2.0
//! Animated background: drifting particles and slow gradient blobs.
//!
//! Purely decorative. Parameters are randomized once at construction; the
//! shared animation clock advances the field and the canvas cache is redrawn
//! each tick. The field runs for the lifetime of the view and has no data
//! dependency on application state.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path};
use iced::{mouse, Color, Point, Rectangle, Renderer, Theme};
use rand::Rng;
use std::f32::consts::TAU;

/// Number of drifting particles.
pub const PARTICLE_COUNT: usize = 20;

/// Vertical bob amplitude in pixels.
const BOB_AMPLITUDE: f32 = 20.0;

/// Horizontal drift amplitude in pixels.
const DRIFT_AMPLITUDE: f32 = 25.0;

#[derive(Debug, Clone, Copy)]
struct Particle {
    /// Normalized position in the window.
    x: f32,
    y: f32,
    /// Size multiplier in 0.5..1.0.
    scale: f32,
    /// Seconds per bob cycle, 4..8.
    period: f32,
    /// Phase offset so particles do not move in lockstep.
    phase: f32,
}

#[derive(Debug, Clone, Copy)]
struct Blob {
    /// Normalized center.
    cx: f32,
    cy: f32,
    /// Base radius in pixels.
    radius: f32,
    color: Color,
    /// Seconds per pulse cycle.
    period: f32,
}

/// Canvas program drawing the animated night-sky background.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    blobs: [Blob; 2],
    cache: Cache,
    elapsed: f32,
}

impl ParticleField {
    /// Seeds a new field with randomized particle parameters.
    #[must_use]
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();

        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                scale: rng.gen_range(0.5..1.0),
                period: rng.gen_range(4.0..8.0),
                phase: rng.gen_range(0.0..1.0),
            })
            .collect();

        let blobs = [
            Blob {
                cx: 0.25,
                cy: 0.25,
                radius: 192.0,
                color: palette::BLUE_400,
                period: 20.0,
            },
            Blob {
                cx: 0.75,
                cy: 0.75,
                radius: 160.0,
                color: palette::PINK_400,
                period: 25.0,
            },
        ];

        Self {
            particles,
            blobs,
            cache: Cache::default(),
            elapsed: 0.0,
        }
    }

    /// Advances the shared animation clock and invalidates the cache.
    pub fn advance(&mut self, elapsed_secs: f32) {
        self.elapsed = elapsed_secs;
        self.cache.clear();
    }

    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> canvas::Program<Message> for ParticleField {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let t = self.elapsed;

        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                // Gradient blobs pulse slowly between 1.0x and 1.2x.
                for blob in &self.blobs {
                    let pulse = 1.0 + 0.2 * (0.5 + 0.5 * (TAU * t / blob.period).sin());
                    let center = Point::new(blob.cx * frame.width(), blob.cy * frame.height());
                    let circle = Path::circle(center, blob.radius * pulse);
                    frame.fill(
                        &circle,
                        Color {
                            a: opacity::BLOB,
                            ..blob.color
                        },
                    );
                }

                // Particles bob vertically, drift sideways and flicker.
                for particle in &self.particles {
                    let cycle = TAU * (t / particle.period + particle.phase);
                    let dx = DRIFT_AMPLITUDE * (cycle * 0.5).sin();
                    let dy = BOB_AMPLITUDE * cycle.sin();
                    let alpha = opacity::PARTICLE_MIN
                        + (opacity::PARTICLE_MAX - opacity::PARTICLE_MIN)
                            * (0.5 + 0.5 * (cycle * 0.7).cos());

                    let center = Point::new(
                        particle.x * frame.width() + dx,
                        particle.y * frame.height() + dy,
                    );
                    let dot = Path::circle(center, 2.0 * particle.scale);
                    frame.fill(
                        &dot,
                        Color {
                            a: alpha,
                            ..Color::WHITE
                        },
                    );
                }
            });

        vec![geometry]
    }
}
