use crate::GameState;
use crate::game_logic::{FINISH_LINE_WINDOW, PlayerControlled, TOTAL_LAPS};
use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

/// Bearing of a position around the track center, normalized to [0, 2π).
/// Same x-before-z convention as the heading math in physics.
pub fn track_angle(position: Vec2) -> f32 {
    let raw = position.x.atan2(position.y);
    (raw + TAU) % TAU
}

/// Start-line crossing detector.
///
/// Two-stage debounce: the lap only arms once the car has crossed the far
/// half of the circle, and fires when it then re-enters the narrow window
/// around bearing zero from the far side. Idling on the line or backing
/// over it never counts.
#[derive(Component)]
pub struct LapTracker {
    lap_start_ms: f64,
    last_angle: f32,
    crossed_halfway: bool,
}

impl LapTracker {
    pub fn new(now_ms: f64) -> Self {
        Self {
            lap_start_ms: now_ms,
            last_angle: 0.0,
            crossed_halfway: false,
        }
    }

    /// Time on the current lap, for the HUD clock.
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.lap_start_ms
    }

    /// Feed one frame's position. Returns the lap time when a lap just
    /// completed, at most once per revolution.
    pub fn update(&mut self, position: Vec2, now_ms: f64) -> Option<f64> {
        let angle = track_angle(position);

        if angle > PI && self.last_angle < PI {
            self.crossed_halfway = true;
        }

        let mut completed = None;
        if self.crossed_halfway && angle < FINISH_LINE_WINDOW && self.last_angle > PI {
            completed = Some(now_ms - self.lap_start_ms);
            self.lap_start_ms = now_ms;
            self.crossed_halfway = false;
        }

        self.last_angle = angle;
        completed
    }
}

#[derive(Component)]
pub struct LapCounter {
    pub laps_completed: u8,
    pub total_laps: u8,
    pub best_lap_ms: Option<f64>,
    pub total_ms: f64,
    pub has_finished: bool,
}

impl Default for LapCounter {
    fn default() -> Self {
        Self {
            laps_completed: 0,
            total_laps: TOTAL_LAPS,
            best_lap_ms: None,
            total_ms: 0.0,
            has_finished: false,
        }
    }
}

impl LapCounter {
    pub fn record_lap(&mut self, lap_ms: f64) {
        self.laps_completed += 1;
        self.total_ms += lap_ms;
        if self.best_lap_ms.is_none_or(|best| lap_ms < best) {
            self.best_lap_ms = Some(lap_ms);
        }
        if self.laps_completed >= self.total_laps {
            self.has_finished = true;
        }
    }

    /// 1-based lap number for the HUD, capped at the final lap.
    pub fn display_lap(&self) -> u8 {
        (self.laps_completed + 1).min(self.total_laps)
    }
}

/// Final standings, copied off the car when the race ends so the finish
/// screen can outlive the race entities.
#[derive(Resource, Default, Clone, Copy)]
pub struct RaceResults {
    pub best_lap_ms: Option<f64>,
    pub total_ms: f64,
    pub laps: u8,
}

pub fn update_laps(
    time: Res<Time>,
    car: Single<(&Transform, &mut LapTracker, &mut LapCounter), With<PlayerControlled>>,
    mut results: ResMut<RaceResults>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let (transform, mut tracker, mut counter) = car.into_inner();
    let now_ms = time.elapsed_secs_f64() * 1000.0;

    if let Some(lap_ms) = tracker.update(transform.translation.truncate(), now_ms) {
        counter.record_lap(lap_ms);
        info!(
            "Lap {}/{} complete in {:.0} ms",
            counter.laps_completed, counter.total_laps, lap_ms
        );

        if counter.has_finished {
            info!("Race finished!");
            *results = RaceResults {
                best_lap_ms: counter.best_lap_ms,
                total_ms: counter.total_ms,
                laps: counter.laps_completed,
            };
            next_state.set(GameState::Finished);
        }
    }
}
