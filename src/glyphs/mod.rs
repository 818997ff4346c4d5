//! Rotating ring of billboard glyphs
//!
//! The display string is laid out along a 120-degree arc in front of the
//! scene. Each character is rasterized once into a small texture at startup;
//! the animated rainbow color is applied per frame as a material tint, so no
//! bitmap is ever rebuilt after spawn.

use bevy::prelude::*;

pub mod font;
pub mod ring;
pub mod systems;

pub use ring::{GlyphRing, arc_angles, rainbow};
pub use systems::{advance_ring, face_camera, spawn_glyph_ring, tint_glyphs};

/// Plugin for the glyph ring.
///
/// The per-tick rotation system is registered by the scene plugin, which owns
/// the tick ordering; tinting and billboard facing are per-frame concerns.
pub struct GlyphRingPlugin;

impl Plugin for GlyphRingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GlyphRing>()
            .add_systems(Startup, spawn_glyph_ring)
            .add_systems(Update, (tint_glyphs, face_camera));
    }
}
