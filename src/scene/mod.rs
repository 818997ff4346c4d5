//! Scene composition and tunable constants
//!
//! `ScenePlugin` wires the sub-plugins together and owns the per-tick update
//! order. The order is an invariant, not a preference: an anchored body must
//! see its anchor's position for the *same* tick, so the tick systems run as
//! one chained sequence rather than in parallel.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::body::{BodyPlugin, advance_orbits, sync_body_transforms};
use crate::glyphs::{GlyphRingPlugin, advance_ring};
use crate::starfield::{StarfieldPlugin, twinkle_starfield};

pub const WINDOW_WIDTH: u32 = 1000;
pub const WINDOW_HEIGHT: u32 = 750;

/// Simulation tick rate. Kinematic constants below are per-tick increments.
pub const TICK_RATE_HZ: f64 = 60.0;

pub const CAMERA_DISTANCE: f32 = 20.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

pub const LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const LIGHT_INTENSITY: f32 = 2_000_000.0;
pub const AMBIENT_BRIGHTNESS: f32 = 80.0;

pub const STAR_COUNT: usize = 1000;
/// Half-extent of the star placement box; y is squashed by 1.5 and z spans
/// only the far half so stars sit behind the bodies.
pub const STAR_FIELD_BOUND: f32 = 30.0;

/// Vertical flattening of an orbit ellipse for bodies orbiting the origin.
pub const ORBIT_FLATTEN: f32 = 0.5;
/// Flattening for anchored (nested) orbits. Empirical visual constant.
pub const SATELLITE_FLATTEN: f32 = 0.7;
/// Amplitude of the secondary z oscillation on anchored orbits.
pub const SATELLITE_WOBBLE: f32 = 0.5;

pub const RING_TEXT: &str = "SOLAR SYSTEM";
pub const RING_RADIUS: f32 = 10.0;
pub const RING_DROP: f32 = -6.0;
pub const RING_PIVOT_Z: f32 = -5.0;
/// Ring rotation increment per tick, radians.
pub const RING_STEP: f32 = 0.02;
/// Per-glyph color phase offset, radians.
pub const GLYPH_PHASE_OFFSET: f32 = 0.15;
pub const GLYPH_SIZE: f32 = 1.2;

/// Everything needed to spawn one celestial body.
pub struct BodySpec {
    pub name: &'static str,
    pub radius: f32,
    pub base_color: [f32; 3],
    pub orbit_radius: f32,
    /// Degrees per tick; sign gives direction.
    pub angular_speed: f32,
    pub spin_speed: f32,
    /// Apparent brightness multiplier for all material channels.
    pub light_power: f32,
    pub texture: &'static str,
    pub flatten: f32,
    pub wobble: f32,
}

pub const SUN: BodySpec = BodySpec {
    name: "Sun",
    radius: 2.25,
    base_color: [1.0, 0.8, 0.4],
    orbit_radius: 0.0,
    angular_speed: 0.0,
    spin_speed: 0.5,
    light_power: 2.0,
    texture: "sun.jpg",
    flatten: ORBIT_FLATTEN,
    wobble: 0.0,
};

pub const PLANET: BodySpec = BodySpec {
    name: "Planet",
    radius: 1.2,
    base_color: [0.1, 0.3, 0.8],
    orbit_radius: 8.0,
    angular_speed: 0.15,
    spin_speed: 0.7,
    light_power: 1.5,
    texture: "earth_texture.jpg",
    flatten: SATELLITE_FLATTEN,
    wobble: SATELLITE_WOBBLE,
};

pub const MOON: BodySpec = BodySpec {
    name: "Moon",
    radius: 0.6,
    base_color: [0.8, 0.8, 0.8],
    orbit_radius: 3.6,
    angular_speed: 0.5,
    spin_speed: 0.3,
    light_power: 1.3,
    texture: "moon_texture.jpg",
    flatten: SATELLITE_FLATTEN,
    wobble: SATELLITE_WOBBLE,
};

/// Explicit random source for initial phases, so construction is seedable.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Plugin composing the whole scene.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .insert_resource(SceneRng::from_entropy())
            .add_plugins((StarfieldPlugin, BodyPlugin, GlyphRingPlugin))
            .add_systems(
                FixedUpdate,
                (
                    twinkle_starfield,
                    advance_orbits,
                    sync_body_transforms,
                    advance_ring,
                )
                    .chain(),
            );
    }
}
