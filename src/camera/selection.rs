//! Pointer picking: a viewport ray tested against per-body bounding spheres.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::camera::MainCamera;
use crate::camera::follow::FollowState;
use crate::config::SolarSettings;

/// Click target for a selectable body: a bounding sphere around the whole
/// subtree (surface, ring, moon orbits), computed when the scene is built.
/// A hit anywhere inside resolves to the owning body by construction.
#[derive(Component, Copy, Clone, Debug)]
pub struct Selectable {
    pub bounds_radius: f32,
}

/// What a pointer-down event does to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A new body was hit: start a zoom transition toward it.
    Select(Entity),
    /// Empty space was hit: drop any selection.
    Clear,
    /// The hit body is already selected: keep the current state untouched.
    Unchanged,
}

/// Resolve a hit against the current selection. Re-clicking the selected
/// body must not restart its zoom transition.
pub fn selection_outcome(state: &FollowState, hit: Option<Entity>) -> SelectionOutcome {
    match hit {
        Some(body) if state.body() == Some(body) => SelectionOutcome::Unchanged,
        Some(body) => SelectionOutcome::Select(body),
        None => SelectionOutcome::Clear,
    }
}

/// Nearest positive ray parameter where the ray hits the sphere, if any.
/// `direction` must be normalized.
pub fn ray_sphere_intersection(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let to_center = center - origin;
    let proj = to_center.dot(direction);
    let closest_sq = to_center.length_squared() - proj * proj;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    let near = proj - half_chord;
    let far = proj + half_chord;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        // Ray origin is inside the sphere.
        Some(far)
    } else {
        None
    }
}

/// Nearest selectable body along the ray. Overlapping bodies resolve by ray
/// distance alone.
pub fn pick_body(
    ray_origin: Vec3,
    ray_direction: Vec3,
    bodies: impl IntoIterator<Item = (Entity, Vec3, f32)>,
) -> Option<Entity> {
    let mut best: Option<(Entity, f32)> = None;
    for (entity, center, radius) in bodies {
        if let Some(t) = ray_sphere_intersection(ray_origin, ray_direction, center, radius) {
            if best.is_none_or(|(_, best_t)| t < best_t) {
                best = Some((entity, t));
            }
        }
    }
    best.map(|(entity, _)| entity)
}

pub fn handle_pointer_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    settings: Res<SolarSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform, &PanOrbitCamera), With<MainCamera>>,
    bodies: Query<(Entity, &GlobalTransform, &Selectable, Option<&Name>)>,
    mut state: ResMut<FollowState>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform, pan_orbit)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let hit = pick_body(
        ray.origin,
        *ray.direction,
        bodies
            .iter()
            .map(|(entity, transform, selectable, _)| {
                (entity, transform.translation(), selectable.bounds_radius)
            }),
    );

    match selection_outcome(&state, hit) {
        SelectionOutcome::Unchanged => {}
        SelectionOutcome::Clear => {
            *state = FollowState::Idle;
        }
        SelectionOutcome::Select(body) => {
            let Ok((_, transform, _, name)) = bodies.get(body) else {
                return;
            };
            let radius = pan_orbit.radius.unwrap_or(pan_orbit.target_radius);
            state.begin_zoom(
                body,
                pan_orbit.focus,
                radius,
                transform.translation(),
                settings.zoom_factor,
            );
            info!(
                "following {}",
                name.map(|n| n.as_str()).unwrap_or("unnamed body")
            );
        }
    }
}
