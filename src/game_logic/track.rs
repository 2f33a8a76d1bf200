use crate::game_logic::{TRACK_RADIUS, TRACK_WIDTH, WALL_PENALTY, WALL_PUSHBACK};
use bevy::prelude::*;
use std::f32::consts::PI;

/// Circular track geometry: an annulus centered on the origin that the car
/// is constrained to.
#[derive(Resource, Clone, Copy)]
pub struct Track {
    pub radius: f32,
    pub width: f32,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            radius: TRACK_RADIUS,
            width: TRACK_WIDTH,
        }
    }
}

impl Track {
    pub fn inner_radius(&self) -> f32 {
        self.radius - self.width / 2.0
    }

    pub fn outer_radius(&self) -> f32 {
        self.radius + self.width / 2.0
    }

    /// Grid spot just short of the start line at bearing zero.
    pub fn start_position(&self) -> Vec2 {
        Vec2::new(0.0, self.radius - 5.0)
    }

    pub fn start_heading(&self) -> f32 {
        PI
    }
}

/// Clamp the car back inside the annulus, halving its speed as the wall
/// penalty. Both checks read the distance measured before any clamp, and
/// there is no hysteresis: scraping along a wall bleeds speed every frame,
/// which is the intended arcade behavior.
pub fn constrain_to_track(position: &mut Vec2, speed: &mut f32, track: &Track) {
    let dist_from_center = position.length();

    if dist_from_center > track.outer_radius() {
        let bearing = position.x.atan2(position.y);
        let clamped = track.outer_radius() - WALL_PUSHBACK;
        *position = Vec2::new(bearing.sin(), bearing.cos()) * clamped;
        *speed *= WALL_PENALTY;
    }
    if dist_from_center < track.inner_radius() {
        let bearing = position.x.atan2(position.y);
        let clamped = track.inner_radius() + WALL_PUSHBACK;
        *position = Vec2::new(bearing.sin(), bearing.cos()) * clamped;
        *speed *= WALL_PENALTY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_wall_clamps_and_halves_speed() {
        let track = Track::default();
        let mut position = Vec2::new(0.0, 70.0);
        let mut speed = 50.0;

        constrain_to_track(&mut position, &mut speed, &track);

        assert!((position.length() - (track.outer_radius() - WALL_PUSHBACK)).abs() < 1e-3);
        assert_eq!(speed, 25.0);
    }

    #[test]
    fn test_inner_wall_clamps_and_halves_speed() {
        let track = Track::default();
        let mut position = Vec2::new(0.0, 30.0);
        let mut speed = -20.0;

        constrain_to_track(&mut position, &mut speed, &track);

        assert!((position.length() - (track.inner_radius() + WALL_PUSHBACK)).abs() < 1e-3);
        assert_eq!(speed, -10.0);
    }

    #[test]
    fn test_clamp_preserves_bearing() {
        let track = Track::default();
        let mut position = Vec2::new(80.0, 80.0);
        let mut speed = 40.0;

        constrain_to_track(&mut position, &mut speed, &track);

        let expected = Vec2::splat((track.outer_radius() - WALL_PUSHBACK) / 2f32.sqrt());
        assert!((position - expected).length() < 1e-3);
    }

    #[test]
    fn test_on_track_is_untouched() {
        let track = Track::default();
        let mut position = track.start_position();
        let mut speed = 60.0;

        constrain_to_track(&mut position, &mut speed, &track);

        assert_eq!(position, track.start_position());
        assert_eq!(speed, 60.0);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let track = Track::default();
        let mut position = Vec2::new(0.0, -90.0);
        let mut speed = 50.0;

        constrain_to_track(&mut position, &mut speed, &track);
        let once = (position, speed);
        constrain_to_track(&mut position, &mut speed, &track);

        assert_eq!((position, speed), once);
    }
}
