//! Planet roster: body tables, orbit-path rings, and the ringed planet.

use bevy::prelude::*;

pub mod components;
pub mod data;
pub mod systems;

pub use components::{Orbit, Planet, PlanetIndex, Spin};

/// Plugin that builds the planets and their orbit paths at startup.
pub struct PlanetsPlugin;

impl Plugin for PlanetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::spawn_planets);
    }
}
