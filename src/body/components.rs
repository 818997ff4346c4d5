//! Components for celestial body entities

use bevy::prelude::*;

/// Component marker for celestial body entities
#[derive(Component)]
pub struct CelestialBody;

/// Kinematic state driving a body's orbit and self-rotation.
///
/// Angles are in degrees. `orbit_angle` and `spin_angle` accumulate without
/// wrapping; they are only ever consumed through periodic trig functions.
#[derive(Component, Clone, Debug)]
pub struct OrbitalState {
    /// Distance from the anchor point. 0 pins the body to its anchor.
    pub orbit_radius: f32,
    /// Current orbital phase, degrees.
    pub orbit_angle: f32,
    /// Degrees per tick; sign gives direction.
    pub angular_speed: f32,
    /// Self-rotation phase about +Y, degrees.
    pub spin_angle: f32,
    pub spin_speed: f32,
    /// Vertical flattening of the orbit ellipse.
    pub flatten: f32,
    /// Amplitude of the secondary z oscillation; 0 disables it.
    pub wobble: f32,
}

/// Positional dependency on another body.
///
/// Read-only and non-owning: the anchored body offsets its derived position
/// by the anchor's, nothing more. Deliberately not a transform hierarchy —
/// the anchor's spin must not propagate.
#[derive(Component, Copy, Clone, Debug)]
pub struct OrbitAnchor(pub Entity);

/// Visual parameters fixed at spawn.
#[derive(Component, Clone, Debug)]
pub struct BodyAppearance {
    pub radius: f32,
    /// RGB in [0, 1], used by the colored material path.
    pub base_color: [f32; 3],
    /// Apparent brightness multiplier; may exceed 1.0.
    pub light_power: f32,
}

/// The two mutually exclusive material paths for a body.
///
/// `textured` is only present when the texture decoded at spawn. Selection
/// between the paths happens every frame in `select_body_materials`.
#[derive(Component)]
pub struct BodyMaterials {
    pub textured: Option<Handle<StandardMaterial>>,
    pub colored: Handle<StandardMaterial>,
    pub texture: Option<Handle<Image>>,
    /// True while the body is falling back to the colored path even though a
    /// textured material exists. Keeps the fallback log to one line per
    /// transition.
    pub degraded: bool,
}
