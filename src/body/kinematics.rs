//! Orbital kinematics
//!
//! The motion model is a stylized sinusoidal parametric curve, not Newtonian
//! mechanics: each tick advances the phase angles by fixed increments and the
//! position is derived from the angles alone.

use bevy::prelude::*;

use crate::body::components::OrbitalState;

/// Frequency ratio of the secondary z oscillation on anchored orbits.
const WOBBLE_RATIO: f32 = 1.3;

/// Advance the orbital and spin phases by one tick.
pub fn advance(state: &mut OrbitalState) {
    state.orbit_angle += state.angular_speed;
    state.spin_angle += state.spin_speed;
}

/// Derived offset of a body from its anchor point for the current phase.
///
/// A stationary body (`orbit_radius` 0) always resolves to its anchor point
/// regardless of angle.
pub fn orbital_offset(state: &OrbitalState) -> Vec3 {
    if state.orbit_radius == 0.0 {
        return Vec3::ZERO;
    }
    let angle = state.orbit_angle.to_radians();
    Vec3::new(
        angle.sin() * state.orbit_radius,
        angle.cos() * state.orbit_radius * state.flatten,
        (state.orbit_angle * WOBBLE_RATIO).to_radians().sin() * state.wobble,
    )
}
