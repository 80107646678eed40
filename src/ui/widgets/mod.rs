// SPDX-License-Identifier: MPL-2.0
//! Custom widgets that need direct canvas drawing.

pub mod particle_field;

pub use particle_field::ParticleField;
