mod camera;
mod car;
mod controls;
mod finish_screen;
mod game_logic;
mod hud;
mod title_screen;
mod world;

use bevy::{prelude::*, window::PresentMode};
use camera::{WIN_H, WIN_W, camera_setup, move_camera, reset_camera, snap_camera_to_start};
use car::{move_player_car, spawn_car};
use controls::read_keyboard;
use finish_screen::{check_for_finish_input, setup_finish_screen};
use game_logic::{ControlState, RaceResults, Track, update_laps};
use hud::{despawn_hud, spawn_hud, update_best_lap_text, update_lap_text, update_speed_text, update_time_text};
use title_screen::{check_for_title_input, setup_title_screen};
use world::{despawn_race, spawn_world};

#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Title,
    Playing,
    Finished,
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Neon Rush".into(),
                resolution: (WIN_W, WIN_H).into(),
                present_mode: PresentMode::AutoVsync,
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.04, 0.04, 0.1)))
        .insert_resource(Track::default())
        .init_resource::<ControlState>()
        .init_resource::<RaceResults>()
        .init_state::<GameState>()
        .add_systems(Startup, (camera_setup, setup_title_screen))
        .add_systems(
            OnEnter(GameState::Playing),
            (despawn_race, spawn_world, spawn_car, spawn_hud, snap_camera_to_start).chain(),
        )
        .add_systems(OnEnter(GameState::Finished), (despawn_hud, reset_camera, setup_finish_screen))
        .add_systems(
            Update,
            (read_keyboard, move_player_car, update_laps, move_camera)
                .chain()
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            (update_speed_text, update_lap_text, update_time_text, update_best_lap_text)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            check_for_title_input.run_if(in_state(GameState::Title)),
        )
        .add_systems(
            Update,
            check_for_finish_input.run_if(in_state(GameState::Finished)),
        )
        .run();
}
