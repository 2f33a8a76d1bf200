use crate::game_logic::{CarDynamics, LapCounter, LapTracker, PlayerControlled, RaceEntity, display_speed};
use bevy::prelude::*;

const HUD_PANEL_BG: Color = Color::srgba(0.04, 0.04, 0.08, 0.8);
const CYAN: Color = Color::srgb(0.0, 1.0, 1.0);
const PINK: Color = Color::srgb(1.0, 0.0, 0.4);
const AMBER: Color = Color::srgb(1.0, 0.67, 0.0);
const GREEN: Color = Color::srgb(0.0, 1.0, 0.53);

// readout speed above which the speed display goes pink
const HOT_SPEED: u32 = 150;

/// Root marker for the HUD panels so the finish screen can clear them
/// without touching the rest of the race entities.
#[derive(Component)]
pub struct HudEntity;

#[derive(Component)]
pub struct SpeedText;

#[derive(Component)]
pub struct LapText;

#[derive(Component)]
pub struct TimeText;

#[derive(Component)]
pub struct BestLapText;

/// `ss:cc` clock, zero-padded.
pub fn format_time(ms: f64) -> String {
    let seconds = (ms / 1000.0).floor() as i64;
    let centis = ((ms % 1000.0) / 10.0).floor() as i64;
    format!("{:02}:{:02}", seconds, centis)
}

fn spawn_panel(
    commands: &mut Commands,
    node: Node,
    label: &str,
    label_color: Color,
    value_color: Color,
    marker: impl Component,
) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(12.0)),
                ..node
            },
            BackgroundColor(HUD_PANEL_BG),
            HudEntity,
            RaceEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(label_color),
            ));
            parent.spawn((
                Text::new("--"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(value_color),
                marker,
            ));
        });
}

pub fn spawn_hud(mut commands: Commands) {
    spawn_panel(
        &mut commands,
        Node {
            left: Val::Px(30.0),
            bottom: Val::Px(30.0),
            ..default()
        },
        "SPEED",
        CYAN,
        CYAN,
        SpeedText,
    );
    spawn_panel(
        &mut commands,
        Node {
            right: Val::Px(30.0),
            top: Val::Px(30.0),
            ..default()
        },
        "LAP",
        PINK,
        PINK,
        LapText,
    );
    spawn_panel(
        &mut commands,
        Node {
            left: Val::Percent(46.0),
            top: Val::Px(30.0),
            ..default()
        },
        "TIME",
        AMBER,
        AMBER,
        TimeText,
    );
    spawn_panel(
        &mut commands,
        Node {
            right: Val::Px(30.0),
            bottom: Val::Px(30.0),
            ..default()
        },
        "BEST LAP",
        GREEN,
        GREEN,
        BestLapText,
    );
}

pub fn despawn_hud(mut commands: Commands, hud: Query<Entity, With<HudEntity>>) {
    for entity in hud.iter() {
        commands.entity(entity).despawn();
    }
}

pub fn update_speed_text(
    car: Single<&CarDynamics, With<PlayerControlled>>,
    text: Single<(&mut Text, &mut TextColor), With<SpeedText>>,
) {
    let speed = display_speed(car.speed);
    let (mut text, mut color) = text.into_inner();
    text.0 = format!("{} KM/H", speed);
    color.0 = if speed > HOT_SPEED { PINK } else { CYAN };
}

pub fn update_lap_text(
    car: Single<&LapCounter, With<PlayerControlled>>,
    mut text: Single<&mut Text, With<LapText>>,
) {
    text.0 = format!("{}/{}", car.display_lap(), car.total_laps);
}

pub fn update_time_text(
    time: Res<Time>,
    car: Single<&LapTracker, With<PlayerControlled>>,
    mut text: Single<&mut Text, With<TimeText>>,
) {
    let now_ms = time.elapsed_secs_f64() * 1000.0;
    text.0 = format_time(car.elapsed_ms(now_ms));
}

pub fn update_best_lap_text(
    car: Single<&LapCounter, With<PlayerControlled>>,
    mut text: Single<&mut Text, With<BestLapText>>,
) {
    text.0 = match car.best_lap_ms {
        Some(best) => format_time(best),
        None => "--:--".to_string(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_pads() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(9_090.0), "09:09");
        assert_eq!(format_time(83_456.0), "83:45");
    }
}
