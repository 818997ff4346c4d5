//! Star data and batched vertex/color buffers

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::scene::STAR_FIELD_BOUND;

/// Floor for a star's intensity; a star never goes fully dark.
const MIN_INTENSITY: f32 = 0.1;
/// Amplitude of the flicker around the base intensity.
const FLICKER_AMOUNT: f32 = 0.3;

/// One flickering point. Position is fixed at creation.
pub struct Star {
    position: Vec3,
    base_intensity: f32,
    current_intensity: f32,
    flicker_speed: f32,
    flicker_phase: f32,
}

impl Star {
    fn new(rng: &mut impl Rng) -> Self {
        let position = Vec3::new(
            rng.gen_range(-STAR_FIELD_BOUND..STAR_FIELD_BOUND),
            rng.gen_range(-STAR_FIELD_BOUND / 1.5..STAR_FIELD_BOUND / 1.5),
            rng.gen_range(-STAR_FIELD_BOUND..0.0),
        );
        let base_intensity = rng.gen_range(0.3..0.7);
        Self {
            position,
            base_intensity,
            current_intensity: base_intensity,
            flicker_speed: rng.gen_range(0.02..0.05),
            flicker_phase: rng.gen_range(0.0..TAU),
        }
    }

    /// Advance the flicker phase and recompute the intensity.
    ///
    /// The phase accumulates without wrapping; it is only ever fed to `sin`.
    fn twinkle(&mut self) {
        self.flicker_phase += self.flicker_speed;
        self.current_intensity =
            (self.base_intensity + self.flicker_phase.sin() * FLICKER_AMOUNT).max(MIN_INTENSITY);
    }
}

/// The whole field plus its flat interleaved submission buffers.
///
/// Both buffers are rebuilt wholesale every tick; at these star counts that
/// is cheaper to maintain than incremental patching.
#[derive(Resource)]
pub struct StarField {
    stars: Vec<Star>,
    vertex_data: Vec<f32>,
    color_data: Vec<f32>,
}

impl StarField {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let stars = (0..count).map(|_| Star::new(rng)).collect();
        let mut field = Self {
            stars,
            vertex_data: Vec::with_capacity(count * 3),
            color_data: Vec::with_capacity(count * 3),
        };
        field.rebuild_buffers();
        field
    }

    /// Advance every star one tick and rebuild both buffers.
    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.twinkle();
        }
        self.rebuild_buffers();
    }

    fn rebuild_buffers(&mut self) {
        self.vertex_data.clear();
        self.color_data.clear();
        for star in &self.stars {
            self.vertex_data.extend_from_slice(&star.position.to_array());
            self.color_data
                .extend_from_slice(&[star.current_intensity; 3]);
        }
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    /// Positions as a mesh attribute, one `[x, y, z]` per star.
    pub fn position_attribute(&self) -> Vec<[f32; 3]> {
        self.vertex_data
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect()
    }

    /// Grayscale colors widened to RGBA for the mesh color attribute.
    pub fn color_attribute(&self) -> Vec<[f32; 4]> {
        self.color_data
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2], 1.0])
            .collect()
    }
}
