//! Planet spawning: orbit-path rings, planet roots, surfaces, and the ring.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::mesh::PrimitiveTopology;
use std::f32::consts::TAU;

use crate::camera::Selectable;
use crate::config::SolarSettings;
use crate::planets::components::{Orbit, Planet, PlanetIndex, Spin};
use crate::planets::data;

const ORBIT_PATH_SEGMENTS: usize = 128;

pub fn spawn_planets(
    mut commands: Commands,
    settings: Res<SolarSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let orbit_path_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.53, 0.53, 0.53, 0.5),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    for i in 0..data::PLANET_COUNT {
        let orbit_radius = (i as f32 + 1.0) * settings.orbit_gap;

        commands.spawn((
            Mesh3d(meshes.add(orbit_path_mesh(orbit_radius, ORBIT_PATH_SEGMENTS))),
            MeshMaterial3d(orbit_path_material.clone()),
            Transform::IDENTITY,
            Name::new(format!("{} orbit", data::PLANET_NAMES[i])),
        ));

        let root = commands
            .spawn((
                Planet,
                PlanetIndex(i),
                Orbit::new(orbit_radius, data::ORBITAL_PERIODS[i]),
                Selectable {
                    bounds_radius: data::system_extent(i),
                },
                Transform::from_xyz(orbit_radius, 0.0, 0.0),
                Visibility::default(),
                Name::new(data::PLANET_NAMES[i]),
            ))
            .id();

        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(data::PLANET_RADII[i]).mesh().ico(5).unwrap())),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(data::PLANET_TEXTURES[i])),
                perceptual_roughness: 1.0,
                metallic: 0.0,
                ..default()
            })),
            Transform::IDENTITY,
            Spin(data::PLANET_SPIN_RATE),
            ChildOf(root),
            Name::new(format!("{} surface", data::PLANET_NAMES[i])),
        ));

        if i == data::RINGED_PLANET {
            let inner = data::PLANET_RADII[i] * data::RING_INNER_SCALE;
            let outer = data::PLANET_RADII[i] * data::RING_OUTER_SCALE;
            commands.spawn((
                Mesh3d(meshes.add(Annulus::new(inner, outer))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgba(1.0, 1.0, 1.0, 0.7),
                    base_color_texture: Some(asset_server.load(data::RING_TEXTURE)),
                    alpha_mode: AlphaMode::Blend,
                    unlit: true,
                    double_sided: true,
                    cull_mode: None,
                    ..default()
                })),
                // Annulus meshes lie in the XY plane; this lays the ring
                // almost flat with a slight tilt off the orbital plane.
                Transform::from_rotation(Quat::from_rotation_x(data::RING_TILT_RAD)),
                ChildOf(root),
                Name::new(format!("{} ring", data::PLANET_NAMES[i])),
            ));
        }
    }

    info!("spawned {} planets", data::PLANET_COUNT);
}

/// Closed circle of line segments marking an orbit path.
fn orbit_path_mesh(radius: f32, segments: usize) -> Mesh {
    let mut positions = Vec::with_capacity(segments + 1);
    for j in 0..=segments {
        let theta = j as f32 / segments as f32 * TAU;
        positions.push([theta.cos() * radius, 0.0, theta.sin() * radius]);
    }
    let mut mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_path_is_a_closed_circle_at_radius() {
        let mesh = orbit_path_mesh(2.0, 64);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .unwrap()
            .as_float3()
            .unwrap();
        assert_eq!(positions.len(), 65);
        let first = positions[0];
        let last = *positions.last().unwrap();
        for k in 0..3 {
            assert!((first[k] - last[k]).abs() < 1e-4);
        }
        for p in positions {
            let planar = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!((planar - 2.0).abs() < 1e-4);
            assert_eq!(p[1], 0.0);
        }
    }
}
