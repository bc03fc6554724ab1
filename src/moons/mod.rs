//! Moons, spawned as children of their planet root so the parent's orbital
//! translation carries the moon's frame; each moon's own update only sets
//! its local position.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::motion::orbit_position;
use crate::planets::components::{Orbit, PlanetIndex, Spin};
use crate::planets::data::{self, MOON_SPIN_RATE};
use crate::planets::systems::spawn_planets;

/// Marker component for moon entities.
#[derive(Component)]
pub struct Moon;

pub struct MoonsPlugin;

impl Plugin for MoonsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_moons.after(spawn_planets));
    }
}

fn spawn_moons(
    mut commands: Commands,
    planets: Query<(Entity, &PlanetIndex)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let mut rng = rand::rng();
    let mut count = 0;

    for (planet, index) in &planets {
        for moon in data::moons_for(index.0) {
            // Random initial phase so sibling moons do not start aligned.
            let phase = rng.random::<f32>() * TAU;
            commands.spawn((
                Mesh3d(meshes.add(Sphere::new(moon.radius).mesh().ico(4).unwrap())),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color_texture: Some(asset_server.load(moon.texture)),
                    perceptual_roughness: 1.0,
                    metallic: 0.0,
                    ..default()
                })),
                Orbit::with_phase(moon.distance, moon.period, phase),
                Spin(MOON_SPIN_RATE),
                Transform::from_translation(orbit_position(phase, moon.distance)),
                Moon,
                ChildOf(planet),
                Name::new(moon.name),
            ));
            count += 1;
        }
    }

    info!("spawned {count} moons");
}
