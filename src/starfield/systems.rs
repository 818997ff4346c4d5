//! Systems for starfield spawning and per-tick twinkle

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

use crate::scene::{STAR_COUNT, SceneRng};
use crate::starfield::field::StarField;

/// Handle of the point-batch mesh the twinkle system rewrites each tick.
#[derive(Resource)]
pub struct StarfieldMesh(pub Handle<Mesh>);

/// System to create the starfield and its point-list mesh at startup
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<SceneRng>,
) {
    let field = StarField::new(STAR_COUNT, &mut rng.0);

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, field.position_attribute());
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, field.color_attribute());
    let mesh_handle = meshes.add(mesh);

    // Stars are self-luminous points; unlit keeps them independent of the
    // scene lighting without touching any global state.
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh_handle.clone()),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Name::new("Starfield"),
    ));
    info!("starfield ready with {} stars", field.star_count());
    commands.insert_resource(StarfieldMesh(mesh_handle));
    commands.insert_resource(field);
}

/// System to advance the flicker and resubmit both batched buffers
pub fn twinkle_starfield(
    mut field: ResMut<StarField>,
    mesh_handle: Res<StarfieldMesh>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    field.update();
    let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
        return;
    };
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, field.position_attribute());
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, field.color_attribute());
}
