use crate::game_logic::{RaceEntity, Track};
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

const BUILDING_COUNT: usize = 40;

// Neon palette: cyan, pink, amber, green
const NEON_COLORS: [Color; 4] = [
    Color::srgb(0.0, 1.0, 1.0),
    Color::srgb(1.0, 0.0, 0.4),
    Color::srgb(1.0, 0.67, 0.0),
    Color::srgb(0.0, 1.0, 0.53),
];

/// Build the night city: road annulus, glowing edge rings, start line and a
/// scattered skyline outside the track.
pub fn spawn_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    track: Res<Track>,
) {
    let inner = track.inner_radius();
    let outer = track.outer_radius();

    // road surface
    commands.spawn((
        Mesh2d(meshes.add(Annulus::new(inner, outer))),
        MeshMaterial2d(materials.add(Color::srgb(0.1, 0.1, 0.14))),
        Transform::from_xyz(0.0, 0.0, 0.0),
        RaceEntity,
    ));

    // neon edge rings
    commands.spawn((
        Mesh2d(meshes.add(Annulus::new(outer, outer + 0.5))),
        MeshMaterial2d(materials.add(NEON_COLORS[0])),
        Transform::from_xyz(0.0, 0.0, 1.0),
        RaceEntity,
    ));
    commands.spawn((
        Mesh2d(meshes.add(Annulus::new(inner - 0.5, inner))),
        MeshMaterial2d(materials.add(NEON_COLORS[1])),
        Transform::from_xyz(0.0, 0.0, 1.0),
        RaceEntity,
    ));

    // start/finish line at bearing zero
    commands.spawn((
        Mesh2d(meshes.add(Rectangle::new(track.width, 1.5))),
        MeshMaterial2d(materials.add(Color::WHITE)),
        Transform::from_xyz(0.0, track.radius, 2.0),
        RaceEntity,
    ));

    spawn_skyline(&mut commands, &mut meshes, &mut materials, &track);
}

fn spawn_skyline(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    track: &Track,
) {
    let mut rng = rand::rng();
    let base_radius = track.outer_radius() + 15.0;

    for i in 0..BUILDING_COUNT {
        let bearing = (i as f32 / BUILDING_COUNT as f32) * TAU + rng.random_range(0.0..0.1);
        let distance = base_radius + rng.random_range(0.0..40.0);
        let footprint = Vec2::new(rng.random_range(5.0..15.0), rng.random_range(5.0..15.0));
        let color = NEON_COLORS[rng.random_range(0..NEON_COLORS.len())];

        commands.spawn((
            Mesh2d(meshes.add(Rectangle::new(footprint.x, footprint.y))),
            MeshMaterial2d(materials.add(color.with_alpha(0.35))),
            Transform {
                translation: Vec3::new(bearing.sin() * distance, bearing.cos() * distance, 3.0),
                rotation: Quat::from_rotation_z(-bearing + rng.random_range(0.0..0.5)),
                ..default()
            },
            RaceEntity,
        ));
    }
}

// Clear out the previous race before spawning a new one
pub fn despawn_race(mut commands: Commands, race_entities: Query<Entity, With<RaceEntity>>) {
    for entity in race_entities.iter() {
        commands.entity(entity).despawn();
    }
}
