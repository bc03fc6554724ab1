//! Click-to-zoom body selection and camera follow.
//!
//! Picking casts the pointer ray against per-body bounding spheres captured
//! at scene construction; the follow controller is a small state machine
//! advanced once per frame by the main schedule.

use bevy::prelude::*;

pub mod follow;
pub mod selection;

pub use follow::FollowState;
pub use selection::Selectable;

/// Marker for the primary scene camera.
#[derive(Component)]
pub struct MainCamera;

pub struct CameraFollowPlugin;

impl Plugin for CameraFollowPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FollowState>().add_systems(
            Update,
            (
                selection::handle_pointer_clicks.after(crate::motion::advance_orbits),
                follow::advance_zoom_transition.after(selection::handle_pointer_clicks),
                follow::follow_selected_body.after(follow::advance_zoom_transition),
            ),
        );
    }
}
