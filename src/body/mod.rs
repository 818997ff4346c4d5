//! Celestial bodies
//!
//! One entity type covers the sun, the planet, and the moon: a body holds its
//! own kinematic state, and an optional [`OrbitAnchor`] makes its derived
//! position relative to another body instead of the origin.

use bevy::prelude::*;

pub mod components;
pub mod kinematics;
pub mod systems;

pub use components::{BodyAppearance, BodyMaterials, CelestialBody, OrbitAnchor, OrbitalState};
pub use kinematics::orbital_offset;
pub use systems::{advance_orbits, select_body_materials, spawn_bodies, sync_body_transforms};

/// Plugin for celestial body spawning and rendering.
///
/// The per-tick kinematic systems are registered by the scene plugin, which
/// owns the tick ordering.
pub struct BodyPlugin;

impl Plugin for BodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies)
            .add_systems(Update, select_body_materials);
    }
}
