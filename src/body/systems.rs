//! Systems for body spawning, kinematics, and material selection

use std::collections::HashMap;

use bevy::prelude::*;
use rand::Rng;

use crate::body::components::{
    BodyAppearance, BodyMaterials, CelestialBody, OrbitAnchor, OrbitalState,
};
use crate::body::kinematics::{self, orbital_offset};
use crate::scene::{BodySpec, MOON, PLANET, SceneRng, SUN};
use crate::textures::load_texture;

/// System to advance every body's orbital and spin phases by one tick
pub fn advance_orbits(mut bodies: Query<&mut OrbitalState, With<CelestialBody>>) {
    for mut state in &mut bodies {
        kinematics::advance(&mut state);
    }
}

/// System to derive world positions from the current phases.
///
/// Anchor chains are resolved from per-body local offsets, never from another
/// body's transform, so an anchored body can't observe a stale parent
/// position no matter how the query iterates. Runs strictly after
/// `advance_orbits` for the same tick.
pub fn sync_body_transforms(
    mut bodies: Query<
        (Entity, &OrbitalState, Option<&OrbitAnchor>, &mut Transform),
        With<CelestialBody>,
    >,
) {
    let local: HashMap<Entity, (Vec3, Option<Entity>)> = bodies
        .iter()
        .map(|(entity, state, anchor, _)| {
            (entity, (orbital_offset(state), anchor.map(|a| a.0)))
        })
        .collect();

    for (entity, state, anchor, mut transform) in bodies.iter_mut() {
        let mut world = orbital_offset(state);
        let mut next = anchor.map(|a| a.0);
        let mut hops = 0;
        while let Some(parent) = next {
            let Some((offset, grandparent)) = local.get(&parent) else {
                warn!("orbit anchor of {entity} despawned; treating as origin");
                break;
            };
            world += *offset;
            next = *grandparent;
            hops += 1;
            if hops > local.len() {
                warn!("cyclic orbit anchor chain through {entity}; truncating");
                break;
            }
        }
        transform.translation = world;
        transform.rotation = Quat::from_rotation_y(state.spin_angle.to_radians());
    }
}

/// System to pick each body's material path for this frame.
///
/// A body renders textured whenever its texture image is present, and falls
/// back to the colored path for exactly the frames it isn't. Fallback is
/// local to the body and never fatal.
pub fn select_body_materials(
    images: Res<Assets<Image>>,
    mut bodies: Query<
        (&Name, &mut BodyMaterials, &mut MeshMaterial3d<StandardMaterial>),
        With<CelestialBody>,
    >,
) {
    for (name, mut mats, mut active) in &mut bodies {
        let Some(textured) = mats.textured.clone() else {
            continue;
        };
        let texture_ok = mats.texture.as_ref().is_some_and(|t| images.contains(t));
        if texture_ok {
            if mats.degraded {
                info!("{name}: texture available again, restoring textured material");
                mats.degraded = false;
            }
            if active.0 != textured {
                active.0 = textured;
            }
        } else {
            if !mats.degraded {
                warn!("{name}: texture unavailable, falling back to colored material");
                mats.degraded = true;
            }
            if active.0 != mats.colored {
                active.0 = mats.colored.clone();
            }
        }
    }
}

/// System to spawn the sun, the planet, and the moon at startup
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut rng: ResMut<SceneRng>,
) {
    let sun = spawn_body(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut images,
        &mut rng,
        &SUN,
        None,
    );
    let planet = spawn_body(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut images,
        &mut rng,
        &PLANET,
        Some(sun),
    );
    spawn_body(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut images,
        &mut rng,
        &MOON,
        Some(planet),
    );
}

fn spawn_body(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
    rng: &mut SceneRng,
    spec: &BodySpec,
    anchor: Option<Entity>,
) -> Entity {
    let appearance = BodyAppearance {
        radius: spec.radius,
        base_color: spec.base_color,
        light_power: spec.light_power,
    };

    // Texture-load failure degrades to the colored path; it never aborts
    // scene construction.
    let texture = load_texture(spec.texture, images);
    let colored = materials.add(colored_material(&appearance));
    let textured = texture
        .clone()
        .map(|t| materials.add(textured_material(&appearance, t)));
    let initial = textured.clone().unwrap_or_else(|| colored.clone());

    // 32x32 lat/long grid reads as smooth at these radii.
    let mesh = meshes.add(Sphere::new(appearance.radius).mesh().uv(32, 32));

    let mut body = commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(initial),
        Transform::from_xyz(0.0, 0.0, 0.0),
        CelestialBody,
        OrbitalState {
            orbit_radius: spec.orbit_radius,
            orbit_angle: rng.0.gen_range(0.0..360.0),
            angular_speed: spec.angular_speed,
            spin_angle: 0.0,
            spin_speed: spec.spin_speed,
            flatten: spec.flatten,
            wobble: spec.wobble,
        },
        appearance,
        BodyMaterials {
            textured,
            colored,
            texture,
            degraded: false,
        },
        Name::new(spec.name),
    ));
    if let Some(anchor) = anchor {
        body.insert(OrbitAnchor(anchor));
    }
    body.id()
}

fn textured_material(appearance: &BodyAppearance, texture: Handle<Image>) -> StandardMaterial {
    let glow = 0.3 * appearance.light_power;
    StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(texture),
        emissive: LinearRgba::rgb(glow, glow, glow),
        perceptual_roughness: 0.4,
        metallic: 0.0,
        ..default()
    }
}

fn colored_material(appearance: &BodyAppearance) -> StandardMaterial {
    let power = appearance.light_power;
    let [r, g, b] = appearance.base_color;
    let glow = 0.3 * power;
    StandardMaterial {
        // Slightly translucent, giving untextured bodies a glassy look.
        base_color: Color::srgba(
            (r * power).min(1.0),
            (g * power).min(1.0),
            (b * power).min(1.0),
            0.7,
        ),
        emissive: LinearRgba::rgb(glow, glow, glow),
        perceptual_roughness: 0.2,
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(orbit_radius: f32, angular_speed: f32, wobble: f32) -> OrbitalState {
        OrbitalState {
            orbit_radius,
            orbit_angle: 0.0,
            angular_speed,
            spin_angle: 0.0,
            spin_speed: 1.0,
            flatten: 0.7,
            wobble,
        }
    }

    fn tick_schedule() -> Schedule {
        let mut schedule = Schedule::default();
        schedule.add_systems((advance_orbits, sync_body_transforms).chain());
        schedule
    }

    #[test]
    fn test_anchored_body_tracks_parent() {
        let mut world = World::new();
        let parent = world
            .spawn((CelestialBody, test_state(8.0, 0.15, 0.5), Transform::IDENTITY))
            .id();
        let child = world
            .spawn((
                CelestialBody,
                test_state(3.6, 0.5, 0.5),
                OrbitAnchor(parent),
                Transform::IDENTITY,
            ))
            .id();

        let mut schedule = tick_schedule();
        for _ in 0..10 {
            schedule.run(&mut world);
            let parent_pos = world.get::<Transform>(parent).unwrap().translation;
            let child_pos = world.get::<Transform>(child).unwrap().translation;
            let own = orbital_offset(world.get::<OrbitalState>(child).unwrap());
            assert!((child_pos - parent_pos - own).length() < 1e-5);
        }
    }

    #[test]
    fn test_anchor_chain_resolves_within_one_tick() {
        // sun (stationary) <- planet <- moon; the moon's world position must
        // combine both offsets from this tick, not last tick's.
        let mut world = World::new();
        let sun = world
            .spawn((CelestialBody, test_state(0.0, 0.0, 0.0), Transform::IDENTITY))
            .id();
        let planet = world
            .spawn((
                CelestialBody,
                test_state(8.0, 2.0, 0.5),
                OrbitAnchor(sun),
                Transform::IDENTITY,
            ))
            .id();
        let moon = world
            .spawn((
                CelestialBody,
                test_state(3.6, 5.0, 0.5),
                OrbitAnchor(planet),
                Transform::IDENTITY,
            ))
            .id();

        let mut schedule = tick_schedule();
        schedule.run(&mut world);

        let expected = orbital_offset(world.get::<OrbitalState>(planet).unwrap())
            + orbital_offset(world.get::<OrbitalState>(moon).unwrap());
        let actual = world.get::<Transform>(moon).unwrap().translation;
        assert!((actual - expected).length() < 1e-5);
    }

    #[test]
    fn test_stationary_body_pinned_to_origin() {
        let mut world = World::new();
        let sun = world
            .spawn((CelestialBody, test_state(0.0, 0.0, 0.0), Transform::IDENTITY))
            .id();
        let mut schedule = tick_schedule();
        for _ in 0..50 {
            schedule.run(&mut world);
            assert_eq!(world.get::<Transform>(sun).unwrap().translation, Vec3::ZERO);
        }
    }

    #[test]
    fn test_spin_accumulates_into_rotation() {
        let mut world = World::new();
        let body = world
            .spawn((CelestialBody, test_state(0.0, 0.0, 0.0), Transform::IDENTITY))
            .id();
        let mut schedule = tick_schedule();
        for _ in 0..90 {
            schedule.run(&mut world);
        }
        // 90 ticks at 1 degree per tick.
        let expected = Quat::from_rotation_y(90.0_f32.to_radians());
        let actual = world.get::<Transform>(body).unwrap().rotation;
        assert!(actual.angle_between(expected) < 1e-4);
    }

    #[test]
    fn test_material_selection_follows_texture_availability() {
        let mut world = World::new();
        let mut images = Assets::<Image>::default();
        let mut materials = Assets::<StandardMaterial>::default();

        let texture = images.add(Image::default());
        let textured = materials.add(StandardMaterial::default());
        let colored = materials.add(StandardMaterial::default());

        world.insert_resource(images);
        world.insert_resource(materials);

        let body = world
            .spawn((
                CelestialBody,
                Name::new("test"),
                BodyMaterials {
                    textured: Some(textured.clone()),
                    colored: colored.clone(),
                    texture: Some(texture.clone()),
                    degraded: false,
                },
                MeshMaterial3d(textured.clone()),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(select_body_materials);

        schedule.run(&mut world);
        assert_eq!(
            world.get::<MeshMaterial3d<StandardMaterial>>(body).unwrap().0,
            textured
        );

        // Texture drops out: colored path for exactly as long as it's gone.
        world
            .resource_mut::<Assets<Image>>()
            .remove(texture.id());
        schedule.run(&mut world);
        assert_eq!(
            world.get::<MeshMaterial3d<StandardMaterial>>(body).unwrap().0,
            colored
        );
        assert!(world.get::<BodyMaterials>(body).unwrap().degraded);

        // Texture returns: textured path again.
        world
            .resource_mut::<Assets<Image>>()
            .insert(texture.id(), Image::default());
        schedule.run(&mut world);
        assert_eq!(
            world.get::<MeshMaterial3d<StandardMaterial>>(body).unwrap().0,
            textured
        );
        assert!(!world.get::<BodyMaterials>(body).unwrap().degraded);
    }

    #[test]
    fn test_untextured_body_never_swaps_material() {
        let mut world = World::new();
        world.insert_resource(Assets::<Image>::default());
        let mut materials = Assets::<StandardMaterial>::default();
        let colored = materials.add(StandardMaterial::default());
        world.insert_resource(materials);

        let body = world
            .spawn((
                CelestialBody,
                Name::new("flat"),
                BodyMaterials {
                    textured: None,
                    colored: colored.clone(),
                    texture: None,
                    degraded: false,
                },
                MeshMaterial3d(colored.clone()),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(select_body_materials);
        schedule.run(&mut world);

        assert_eq!(
            world.get::<MeshMaterial3d<StandardMaterial>>(body).unwrap().0,
            colored
        );
    }
}
