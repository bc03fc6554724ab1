//! Procedural starfield: a point cloud scattered through the scene volume,
//! deterministic for a given seed.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::mesh::PrimitiveTopology;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SolarSettings;

/// Side length of the cube the stars are scattered through.
pub const STARFIELD_EXTENT: f32 = 200.0;

/// Star positions drawn uniformly from a seeded generator, so a given seed
/// always produces the same sky.
pub fn star_positions(seed: u64, count: u32) -> Vec<[f32; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            [
                (rng.random::<f32>() - 0.5) * STARFIELD_EXTENT,
                (rng.random::<f32>() - 0.5) * STARFIELD_EXTENT,
                (rng.random::<f32>() - 0.5) * STARFIELD_EXTENT,
            ]
        })
        .collect()
}

pub fn spawn_starfield(
    mut commands: Commands,
    settings: Res<SolarSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(
        Mesh::ATTRIBUTE_POSITION,
        star_positions(settings.starfield_seed, settings.star_count),
    );

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        Name::new("Starfield"),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_produces_the_same_sky() {
        assert_eq!(star_positions(7, 256), star_positions(7, 256));
    }

    #[test]
    fn different_seeds_produce_different_skies() {
        assert_ne!(star_positions(7, 256), star_positions(8, 256));
    }

    #[test]
    fn stars_fill_the_extent_cube() {
        let stars = star_positions(7, 4096);
        assert_eq!(stars.len(), 4096);
        let half = STARFIELD_EXTENT / 2.0;
        for star in &stars {
            for axis in star {
                assert!(axis.abs() <= half);
            }
        }
        // With thousands of draws some star lands outside the inner half
        // of the volume on every axis.
        assert!(stars.iter().any(|s| s[0].abs() > half / 2.0));
    }
}
