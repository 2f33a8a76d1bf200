use crate::GameState;
use crate::game_logic::RaceResults;
use crate::hud::format_time;
use crate::title_screen::destroy_screen;
use bevy::prelude::*;

#[derive(Component)]
pub struct FinishScreenEntity;

pub fn setup_finish_screen(mut commands: Commands, results: Res<RaceResults>) {
    let best = match results.best_lap_ms {
        Some(best) => format_time(best),
        None => "--:--".to_string(),
    };

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            FinishScreenEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("FINISH!"),
                TextFont {
                    font_size: 96.0,
                    ..default()
                },
                TextColor(Color::srgb(0.0, 1.0, 0.67)),
            ));
            parent.spawn((
                Text::new(format!("Best Lap: {}", best)),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.0, 1.0, 1.0)),
            ));
            parent.spawn((
                Text::new(format!(
                    "{} laps in {}",
                    results.laps,
                    format_time(results.total_ms)
                )),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.7)),
            ));
            parent.spawn((
                Text::new("ENTER — RACE AGAIN"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.0, 0.4)),
            ));
        });
}

pub fn check_for_finish_input(
    input: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut commands: Commands,
    screen: Query<Entity, With<FinishScreenEntity>>,
) {
    if input.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::Playing);
        destroy_screen(&mut commands, &screen);
    }
}
