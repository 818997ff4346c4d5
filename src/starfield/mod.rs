//! Twinkling point starfield
//!
//! A fixed set of stars behind the bodies, rendered as one unlit point batch.
//! Star positions never move; only the grayscale intensity flickers.

use bevy::prelude::*;

pub mod field;
pub mod systems;

pub use field::{Star, StarField};
pub use systems::{spawn_starfield, twinkle_starfield};

/// Plugin for the starfield backdrop.
///
/// The per-tick twinkle system is registered by the scene plugin, which owns
/// the tick ordering.
pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_starfield);
    }
}
