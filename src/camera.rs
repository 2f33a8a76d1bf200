use crate::game_logic::{PlayerControlled, Track};
use bevy::prelude::*;
use bevy::render::camera::{Projection, ScalingMode};

// Camera-related constants
pub const WIN_W: f32 = 1280.;
pub const WIN_H: f32 = 720.;
const CAMERA_ZOOM: f32 = 0.15;
const FOLLOW_LERP: f32 = 0.05;

pub fn camera_setup(mut commands: Commands) {
    let mut projection = OrthographicProjection::default_2d();
    projection.scaling_mode = ScalingMode::WindowSize;
    projection.scale = CAMERA_ZOOM;

    commands
        .spawn(Camera2d::default())
        .insert(Projection::Orthographic(projection));
}

// Smooth chase camera
pub fn move_camera(
    player_car: Single<&Transform, With<PlayerControlled>>,
    mut camera: Single<&mut Transform, (With<Camera>, Without<PlayerControlled>)>,
) {
    let target = Vec3::new(player_car.translation.x, player_car.translation.y, 0.0);
    camera.translation = camera.translation.lerp(target, FOLLOW_LERP);
}

// Snap straight to the grid so a restart doesn't pan across the map
pub fn snap_camera_to_start(
    track: Res<Track>,
    mut camera: Single<&mut Transform, With<Camera>>,
) {
    let start = track.start_position();
    camera.translation = Vec3::new(start.x, start.y, 0.0);
}

pub fn reset_camera(mut camera: Single<&mut Transform, With<Camera>>) {
    camera.translation = Vec3::ZERO;
}
