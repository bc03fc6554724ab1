//! Per-frame orbital motion and self-rotation.
//!
//! One advance system serves planets and moons alike: planet roots are
//! top-level entities, so the translation written here is the world
//! position; moons are children of a planet root, so the same write lands
//! in the parent's local frame.

use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::config::SolarSettings;
use crate::planets::components::{Orbit, Spin};

/// Angular speed in radians per second for a body with the given period.
pub fn angular_speed(period: f32, seconds_per_year: f32) -> f32 {
    TAU / (period * seconds_per_year)
}

/// Position on a circular orbit confined to the y = 0 plane.
pub fn orbit_position(angle: f32, radius: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (advance_orbits, spin_bodies));
    }
}

/// Advance every orbiting body's angle and reposition it.
pub fn advance_orbits(
    time: Res<Time>,
    settings: Res<SolarSettings>,
    mut bodies: Query<(&mut Orbit, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (mut orbit, mut transform) in &mut bodies {
        orbit.angle += angular_speed(orbit.period, settings.seconds_per_year) * dt;
        transform.translation = orbit_position(orbit.angle, orbit.radius);
    }
}

/// Constant own-axis rotation, independent of orbital motion.
pub fn spin_bodies(time: Res<Time>, mut spinners: Query<(&Spin, &mut Transform)>) {
    let dt = time.delta_secs();
    for (spin, mut transform) in &mut spinners {
        transform.rotate_y(spin.0 * dt);
    }
}
