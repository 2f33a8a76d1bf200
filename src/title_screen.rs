use crate::GameState;
use bevy::prelude::*;

#[derive(Component)]
pub struct TitleScreenEntity;

const TITLE_CYAN: Color = Color::srgb(0.0, 1.0, 1.0);
const TITLE_PINK: Color = Color::srgb(1.0, 0.0, 0.4);

pub fn setup_title_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.06, 0.9)),
            TitleScreenEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("NEON RUSH"),
                TextFont {
                    font_size: 96.0,
                    ..default()
                },
                TextColor(TITLE_CYAN),
            ));
            parent.spawn((
                Text::new("3 laps around the neon city. Don't scrape the walls."),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.7)),
            ));
            parent.spawn((
                Text::new("W/S drive  ·  A/D steer  ·  SHIFT boost"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.45, 0.45, 0.55)),
            ));
            parent.spawn((
                Text::new("PRESS ENTER"),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(TITLE_PINK),
            ));
        });
}

pub fn check_for_title_input(
    input: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut commands: Commands,
    screen: Query<Entity, With<TitleScreenEntity>>,
) {
    if input.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::Playing);
        destroy_screen(&mut commands, &screen);
    }
}

pub fn destroy_screen<T: Component>(commands: &mut Commands, screen: &Query<Entity, With<T>>) {
    for entity in screen.iter() {
        commands.entity(entity).despawn();
    }
}
