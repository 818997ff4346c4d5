use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin, WindowResolution};

mod body;
mod glyphs;
mod scene;
mod starfield;
mod textures;

use scene::{
    AMBIENT_BRIGHTNESS, CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, LIGHT_INTENSITY,
    LIGHT_POSITION, ScenePlugin, WINDOW_HEIGHT, WINDOW_WIDTH,
};

/// Marker component for the scene camera.
#[derive(Component)]
pub struct MainCamera;

// Setup camera and lighting
fn setup(mut commands: Commands) {
    // Keep the dark side of the bodies readable.
    commands.insert_resource(GlobalAmbientLight {
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        MainCamera,
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            intensity: LIGHT_INTENSITY,
            range: CAMERA_FAR,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(LIGHT_POSITION),
    ));
}

/// Exit on Escape or any mouse button. Window close is handled by Bevy.
fn exit_on_user_input(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) || buttons.get_just_pressed().next().is_some() {
        exit.write(AppExit::Success);
    }
}

fn main() -> AppExit {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Orrery".to_string(),
            resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            present_mode: PresentMode::AutoVsync,
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    app.add_plugins(ScenePlugin);
    app.add_systems(Startup, setup);
    app.add_systems(Update, exit_on_user_input);

    app.run()
}
