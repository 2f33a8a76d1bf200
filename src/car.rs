use crate::game_logic::{
    Car, CarDynamics, ControlState, LapCounter, LapTracker, Orientation, PlayerControlled,
    RaceEntity, Track, Velocity, apply_physics, constrain_to_track,
};
use bevy::prelude::*;

const CAR_LENGTH: f32 = 4.5;
const CAR_WIDTH: f32 = 2.2;

pub fn spawn_car(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    track: Res<Track>,
    time: Res<Time>,
) {
    let start = track.start_position();
    let now_ms = time.elapsed_secs_f64() * 1000.0;

    commands
        .spawn((
            Mesh2d(meshes.add(Rectangle::new(CAR_WIDTH, CAR_LENGTH))),
            MeshMaterial2d(materials.add(Color::srgb(0.0, 1.0, 1.0))),
            Transform {
                translation: Vec3::new(start.x, start.y, 10.0),
                rotation: Quat::from_rotation_z(-track.start_heading()),
                ..default()
            },
            Velocity::new(),
            CarDynamics::default(),
            Orientation::new(track.start_heading()),
            LapTracker::new(now_ms),
            LapCounter::default(),
            Car,
            PlayerControlled,
            RaceEntity,
        ))
        .with_children(|parent| {
            // cockpit canopy
            parent.spawn((
                Mesh2d(meshes.add(Rectangle::new(CAR_WIDTH * 0.6, CAR_LENGTH * 0.35))),
                MeshMaterial2d(materials.add(Color::srgb(0.05, 0.05, 0.1))),
                Transform::from_xyz(0.0, 0.4, 0.1),
            ));
        });
}

// Car movement system: pure physics step plus the track wall clamp
pub fn move_player_car(
    time: Res<Time>,
    controls: Res<ControlState>,
    track: Res<Track>,
    car: Single<
        (&mut Transform, &mut Velocity, &mut CarDynamics, &mut Orientation),
        With<PlayerControlled>,
    >,
) {
    let (mut transform, mut velocity, mut dynamics, mut orientation) = car.into_inner();

    let mut position = transform.translation.truncate();
    apply_physics(
        &mut position,
        &mut velocity,
        &mut dynamics,
        &mut orientation,
        &controls,
        time.delta_secs(),
    );
    constrain_to_track(&mut position, &mut dynamics.speed, &track);

    transform.translation.x = position.x;
    transform.translation.y = position.y;
    // heading convention is (sin a, cos a), which is a clockwise screen angle
    transform.rotation = Quat::from_rotation_z(-orientation.angle);
}
