//! Static scenery: the starfield, the sky sphere, and the sun.

use bevy::prelude::*;

pub mod sky;
pub mod starfield;
pub mod sun;

pub use sun::Sun;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                starfield::spawn_starfield,
                sky::spawn_sky,
                sun::spawn_sun,
            ),
        );
    }
}
