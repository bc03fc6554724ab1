//! The sun: emissive textured sphere, point light, and slow self-spin.

use bevy::prelude::*;

use crate::camera::Selectable;
use crate::planets::components::Spin;
use crate::planets::data::{SUN_RADIUS, SUN_SPIN_RATE, SUN_TEXTURE};

/// Marker component for the sun entity.
#[derive(Component)]
pub struct Sun;

pub fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let texture = asset_server.load(SUN_TEXTURE);
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(texture.clone()),
        // Hot enough to feed the bloom pass.
        emissive: Color::srgb_u8(0xff, 0xdd, 0x66).to_linear() * 1.5,
        emissive_texture: Some(texture),
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().ico(6).unwrap())),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Spin(SUN_SPIN_RATE),
        Selectable {
            bounds_radius: SUN_RADIUS,
        },
        Sun,
        Name::new("Sun"),
    ));

    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 100.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::IDENTITY,
        Name::new("Sun light"),
    ));
}
