//! Distant sky sphere textured with the Milky Way, rendered from inside.

use bevy::prelude::*;

use crate::planets::data::SKY_TEXTURE;

const SKY_RADIUS: f32 = 100.0;

pub fn spawn_sky(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SKY_RADIUS).mesh().ico(5).unwrap())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load(SKY_TEXTURE)),
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        Transform::IDENTITY,
        Name::new("Sky"),
    ));
}
