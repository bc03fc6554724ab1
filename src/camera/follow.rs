//! Camera follow state machine and the zoom interpolation.
//!
//! `bevy_panorbit_camera` factors the camera pose as focus + (radius, yaw,
//! pitch). Pinning the focus to the followed body while leaving the
//! spherical offset untouched preserves the camera's displacement from its
//! pivot exactly, so the viewing angle and distance carry over frame to
//! frame while the body moves.

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::camera::MainCamera;
use crate::camera::selection::Selectable;
use crate::config::SolarSettings;

/// Bounded interpolation from the camera pose at click time to the zoomed
/// pose. Both endpoints are captured once and never recomputed; progress
/// advances a fixed step per rendered frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomTransition {
    pub progress: f32,
    pub start_focus: Vec3,
    pub end_focus: Vec3,
    pub start_radius: f32,
    pub end_radius: f32,
}

impl ZoomTransition {
    /// Capture a transition toward `target`, shrinking the orbit radius by
    /// `zoom_factor`.
    pub fn new(start_focus: Vec3, start_radius: f32, target: Vec3, zoom_factor: f32) -> Self {
        Self {
            progress: 0.0,
            start_focus,
            end_focus: target,
            start_radius,
            end_radius: start_radius * zoom_factor,
        }
    }

    /// Step the interpolation, returning the focus and orbit radius for
    /// this frame. Progress clamps at 1.
    pub fn advance(&mut self, step: f32) -> (Vec3, f32) {
        self.progress = (self.progress + step).min(1.0);
        (
            self.start_focus.lerp(self.end_focus, self.progress),
            self.start_radius + (self.end_radius - self.start_radius) * self.progress,
        )
    }

    pub fn finished(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Selection state: at most one body is followed at a time.
#[derive(Resource, Default, Debug)]
pub enum FollowState {
    /// The pan-orbit controller alone drives the camera.
    #[default]
    Idle,
    /// Interpolating toward the selected body.
    Zooming {
        body: Entity,
        transition: ZoomTransition,
    },
    /// Pivot pinned to the body, offset preserved.
    Following { body: Entity },
}

impl FollowState {
    /// The selected body in either the zooming or steady follow state.
    pub fn body(&self) -> Option<Entity> {
        match self {
            FollowState::Idle => None,
            FollowState::Zooming { body, .. } | FollowState::Following { body } => Some(*body),
        }
    }

    /// Enter the zoom transition toward `target`, capturing the camera's
    /// current focus and radius as the interpolation start. Replaces any
    /// in-flight transition.
    pub fn begin_zoom(
        &mut self,
        body: Entity,
        focus: Vec3,
        radius: f32,
        target: Vec3,
        zoom_factor: f32,
    ) {
        *self = FollowState::Zooming {
            body,
            transition: ZoomTransition::new(focus, radius, target, zoom_factor),
        };
    }
}

/// Advance an in-flight zoom transition by one frame step and hand the
/// state over to steady following once it completes.
pub fn advance_zoom_transition(
    settings: Res<SolarSettings>,
    mut state: ResMut<FollowState>,
    mut cameras: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    let FollowState::Zooming { body, transition } = &mut *state else {
        return;
    };
    let Ok(mut pan_orbit) = cameras.single_mut() else {
        return;
    };

    let (focus, radius) = transition.advance(settings.zoom_step);
    pan_orbit.focus = focus;
    pan_orbit.target_focus = focus;
    pan_orbit.radius = Some(radius);
    pan_orbit.target_radius = radius;
    pan_orbit.force_update = true;

    if transition.finished() {
        let body = *body;
        *state = FollowState::Following { body };
    }
}

/// Keep the orbit pivot pinned to the followed body's current position.
/// Runs after the motion systems so the pivot tracks this frame's motion.
pub fn follow_selected_body(
    state: Res<FollowState>,
    bodies: Query<&Transform, With<Selectable>>,
    mut cameras: Query<&mut PanOrbitCamera, (With<MainCamera>, Without<Selectable>)>,
) {
    let FollowState::Following { body } = *state else {
        return;
    };
    let Ok(body_transform) = bodies.get(body) else {
        return;
    };
    let Ok(mut pan_orbit) = cameras.single_mut() else {
        return;
    };

    pan_orbit.focus = body_transform.translation;
    pan_orbit.target_focus = body_transform.translation;
    pan_orbit.force_update = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_completes_in_twenty_steps_of_a_twentieth() {
        let mut transition = ZoomTransition::new(Vec3::ZERO, 2.0, Vec3::X, 0.5);
        let mut steps = 0;
        while !transition.finished() {
            transition.advance(0.05);
            steps += 1;
            assert!(steps <= 21, "transition never finished");
        }
        assert_eq!(transition.progress, 1.0);
        assert!((19..=21).contains(&steps));
    }

    #[test]
    fn endpoints_interpolate_linearly() {
        let mut transition = ZoomTransition::new(Vec3::ZERO, 2.0, Vec3::new(4.0, 0.0, 0.0), 0.5);
        let (focus, radius) = transition.advance(0.5);
        assert!(focus.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-6));
        assert!((radius - 1.5).abs() < 1e-6);
        let (focus, radius) = transition.advance(0.5);
        assert!(focus.abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), 1e-6));
        assert!((radius - 1.0).abs() < 1e-6);
    }

    #[test]
    fn progress_clamps_at_one() {
        let mut transition = ZoomTransition::new(Vec3::ZERO, 2.0, Vec3::X, 0.5);
        for _ in 0..100 {
            transition.advance(0.05);
        }
        assert_eq!(transition.progress, 1.0);
        let (focus, radius) = transition.advance(0.05);
        assert!(focus.abs_diff_eq(Vec3::X, 1e-6));
        assert!((radius - 1.0).abs() < 1e-6);
    }

    #[test]
    fn selection_halves_the_captured_offset() {
        let transition = ZoomTransition::new(Vec3::splat(1.0), 3.0, Vec3::ZERO, 0.5);
        assert_eq!(transition.end_radius, 1.5);
        assert_eq!(transition.start_radius, 3.0);
    }

    #[test]
    fn reselection_replaces_an_in_flight_transition() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();

        let mut state = FollowState::default();
        state.begin_zoom(first, Vec3::ZERO, 2.0, Vec3::X, 0.5);
        if let FollowState::Zooming { transition, .. } = &mut state {
            transition.advance(0.05);
            transition.advance(0.05);
        }

        state.begin_zoom(second, Vec3::new(0.1, 0.0, 0.0), 1.9, Vec3::Z, 0.5);
        let FollowState::Zooming { body, transition } = &state else {
            panic!("expected a zooming state");
        };
        assert_eq!(*body, second);
        assert_eq!(transition.progress, 0.0);
        assert_eq!(transition.end_focus, Vec3::Z);
    }

    #[test]
    fn pivot_tracks_the_followed_body_by_its_exact_delta() {
        let mut app = App::new();
        app.insert_resource(crate::config::SolarSettings::default());
        app.add_systems(Update, follow_selected_body);

        let body = app
            .world_mut()
            .spawn((
                Transform::from_xyz(1.0, 0.0, 0.0),
                Selectable { bounds_radius: 0.1 },
            ))
            .id();
        app.world_mut().spawn((
            PanOrbitCamera {
                focus: Vec3::ZERO,
                radius: Some(2.0),
                ..default()
            },
            MainCamera,
        ));
        app.insert_resource(FollowState::Following { body });

        app.update();
        let mut query = app.world_mut().query::<&PanOrbitCamera>();
        let focus_before = query.single(app.world()).unwrap().focus;
        assert!(focus_before.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-6));

        let delta = Vec3::new(-0.25, 0.0, 0.5);
        app.world_mut()
            .entity_mut(body)
            .get_mut::<Transform>()
            .unwrap()
            .translation += delta;
        app.update();

        let mut query = app.world_mut().query::<&PanOrbitCamera>();
        let camera = query.single(app.world()).unwrap();
        assert!(camera.focus.abs_diff_eq(focus_before + delta, 1e-6));
        // The spherical offset is untouched, so the camera moves by the
        // same delta as the pivot.
        assert_eq!(camera.radius, Some(2.0));
    }

    #[test]
    fn idle_state_never_touches_the_camera() {
        let mut app = App::new();
        app.insert_resource(crate::config::SolarSettings::default());
        app.add_systems(Update, (advance_zoom_transition, follow_selected_body));
        app.world_mut().spawn((
            PanOrbitCamera {
                focus: Vec3::new(0.5, 0.0, 0.5),
                radius: Some(2.0),
                ..default()
            },
            MainCamera,
        ));
        app.init_resource::<FollowState>();

        app.update();
        app.update();

        let mut query = app.world_mut().query::<&PanOrbitCamera>();
        let camera = query.single(app.world()).unwrap();
        assert!(camera.focus.abs_diff_eq(Vec3::new(0.5, 0.0, 0.5), 1e-6));
        assert_eq!(camera.radius, Some(2.0));
        assert!(!camera.force_update);
    }

    #[test]
    fn zoom_state_hands_over_to_following_when_done() {
        let mut app = App::new();
        app.insert_resource(crate::config::SolarSettings::default());
        app.add_systems(Update, advance_zoom_transition);
        app.world_mut().spawn((
            PanOrbitCamera {
                focus: Vec3::ZERO,
                radius: Some(2.0),
                ..default()
            },
            MainCamera,
        ));

        let body = app.world_mut().spawn_empty().id();
        let mut state = FollowState::default();
        state.begin_zoom(body, Vec3::ZERO, 2.0, Vec3::X, 0.5);
        app.insert_resource(state);

        for _ in 0..25 {
            app.update();
        }

        let state = app.world().resource::<FollowState>();
        assert_eq!(state.body(), Some(body));
        assert!(matches!(state, FollowState::Following { .. }));
        let mut query = app.world_mut().query::<&PanOrbitCamera>();
        let camera = query.single(app.world()).unwrap();
        assert!(camera.focus.abs_diff_eq(Vec3::X, 1e-5));
        assert_eq!(camera.radius, Some(1.0));
    }
}
