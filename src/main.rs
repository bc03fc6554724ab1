use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::GlobalAmbientLight;
use bevy::post_process::bloom::{Bloom, BloomCompositeMode, BloomPrefilter};
use bevy::prelude::*;
use bevy::render::view::Hdr;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod camera;
mod config;
mod moons;
mod motion;
mod planets;
mod scene;

use camera::{CameraFollowPlugin, MainCamera};
use config::SolarSettings;
use moons::MoonsPlugin;
use motion::MotionPlugin;
use planets::PlanetsPlugin;
use scene::ScenePlugin;

// Initial camera pose: slightly above the orbital plane, looking back at
// the sun.
const CAMERA_START_RADIUS: f32 = 2.24;
const CAMERA_START_PITCH: f32 = 0.46;

// Setup ambient light and the main camera
fn setup(mut commands: Commands, settings: Res<SolarSettings>) {
    // Keep night sides readable with the sun as the only real light source.
    commands.insert_resource(GlobalAmbientLight {
        brightness: 60.0,
        ..default()
    });

    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(CAMERA_START_RADIUS),
        yaw: Some(0.0),
        pitch: Some(CAMERA_START_PITCH),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        Hdr,
        bloom_for(&settings),
        Tonemapping::TonyMcMapface,
        pan_orbit,
        MainCamera,
        Transform::from_xyz(0.0, 1.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Map the strength/radius/threshold triple onto Bevy's bloom parameters.
fn bloom_for(settings: &SolarSettings) -> Bloom {
    Bloom {
        intensity: (settings.bloom.strength * 0.15).clamp(0.0, 1.0),
        low_frequency_boost: settings.bloom.radius.clamp(0.0, 1.0),
        prefilter: BloomPrefilter {
            threshold: settings.bloom.threshold,
            threshold_softness: 0.2,
        },
        composite_mode: BloomCompositeMode::Additive,
        ..Bloom::NATURAL
    }
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Solar System".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Loaded after DefaultPlugins so a bad settings file is logged.
    app.insert_resource(config::load_or_default());

    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(ScenePlugin);
    app.add_plugins(PlanetsPlugin);
    app.add_plugins(MoonsPlugin);
    app.add_plugins(MotionPlugin);
    app.add_plugins(CameraFollowPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
