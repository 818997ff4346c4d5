//! Systems for glyph ring spawning, tinting, and billboard facing

use std::collections::HashMap;

use bevy::prelude::*;

use crate::MainCamera;
use crate::glyphs::font::rasterize_glyph;
use crate::glyphs::ring::{GlyphRing, arc_angles, rainbow};
use crate::scene::{GLYPH_SIZE, RING_DROP, RING_PIVOT_Z, RING_RADIUS, RING_TEXT};

/// One character of the ring text.
#[derive(Component)]
pub struct Glyph {
    /// Order in the display string; drives the per-glyph color phase offset.
    pub index: usize,
    /// This glyph's own material, retinted every frame.
    pub material: Handle<StandardMaterial>,
}

/// System to advance the shared ring rotation by one tick
pub fn advance_ring(mut ring: ResMut<GlyphRing>) {
    ring.advance();
}

/// System to lay the ring text along its arc at startup.
///
/// Textures are cached per distinct character; every glyph entity gets its
/// own material so the tints stay independent.
pub fn spawn_glyph_ring(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let chars: Vec<char> = RING_TEXT.chars().collect();
    let angles = arc_angles(chars.len());
    let quad = meshes.add(Rectangle::new(GLYPH_SIZE, GLYPH_SIZE));

    let mut textures: HashMap<char, Handle<Image>> = HashMap::new();
    for (index, (ch, arc)) in chars.into_iter().zip(angles).enumerate() {
        let texture = textures
            .entry(ch)
            .or_insert_with(|| images.add(rasterize_glyph(ch)))
            .clone();
        let material = materials.add(StandardMaterial {
            base_color: Color::WHITE,
            base_color_texture: Some(texture),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            cull_mode: None,
            ..default()
        });

        let position = Vec3::new(
            arc.sin() * RING_RADIUS,
            RING_DROP,
            RING_PIVOT_Z + arc.cos() * RING_RADIUS,
        );
        commands.spawn((
            Mesh3d(quad.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
            Glyph { index, material },
            Name::new(format!("Glyph {index} ({ch})")),
        ));
    }
}

/// System to apply the animated rainbow tint to every glyph's material
pub fn tint_glyphs(
    ring: Res<GlyphRing>,
    glyphs: Query<&Glyph>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for glyph in &glyphs {
        let [r, g, b] = rainbow(ring.color_phase(glyph.index));
        if let Some(material) = materials.get_mut(&glyph.material) {
            material.base_color = Color::srgb(r, g, b);
        }
    }
}

/// System to keep every glyph quad facing the camera
pub fn face_camera(
    camera: Query<&Transform, (With<MainCamera>, Without<Glyph>)>,
    mut glyphs: Query<&mut Transform, With<Glyph>>,
) {
    let Ok(camera) = camera.single() else {
        return;
    };
    for mut transform in &mut glyphs {
        transform.rotation = camera.rotation;
    }
}
