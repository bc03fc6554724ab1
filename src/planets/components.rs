//! Components for orbiting bodies.

use bevy::prelude::*;

/// Marker for a planet root entity.
///
/// The root carries the orbital translation; the textured surface, the ring,
/// and any moons are children so they ride along.
#[derive(Component)]
pub struct Planet;

/// Table index of the planet, used to look up its moons after spawning.
#[derive(Component, Copy, Clone, Debug)]
pub struct PlanetIndex(pub usize);

/// Circular orbital motion state. Position is derived from `angle` every
/// frame; the angle accumulates without wrapping.
#[derive(Component, Debug)]
pub struct Orbit {
    pub radius: f32,
    pub period: f32,
    pub angle: f32,
}

impl Orbit {
    pub fn new(radius: f32, period: f32) -> Self {
        Self {
            radius,
            period,
            angle: 0.0,
        }
    }

    pub fn with_phase(radius: f32, period: f32, angle: f32) -> Self {
        Self {
            radius,
            period,
            angle,
        }
    }
}

/// Constant self-rotation about the local Y axis, radians per second.
#[derive(Component, Copy, Clone, Debug)]
pub struct Spin(pub f32);
