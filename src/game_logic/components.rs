use bevy::prelude::*;

#[derive(Component)]
pub struct Car;

#[derive(Component)]
pub struct PlayerControlled;

/// Marker for everything spawned for a single race (world, car, HUD),
/// despawned together when a new race starts.
#[derive(Component)]
pub struct RaceEntity;

#[derive(Component, Clone)]
pub struct Orientation {
    /// Heading in radians. Accumulates without wrapping; only the lap
    /// tracker works with normalized angles.
    pub angle: f32,
}

impl Orientation {
    pub fn new(angle: f32) -> Self {
        Self { angle }
    }

    pub fn forward_vector(&self) -> Vec2 {
        Vec2::new(self.angle.sin(), self.angle.cos())
    }
}

/// Per-frame displacement, derived from speed and heading every update.
#[derive(Component, Clone, Deref, DerefMut)]
pub struct Velocity {
    pub velocity: Vec2,
}

impl Velocity {
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
        }
    }
}

impl From<Vec2> for Velocity {
    fn from(velocity: Vec2) -> Self {
        Self { velocity }
    }
}

/// Scalar driving state: signed speed along the heading plus the smoothed
/// steering intent.
#[derive(Component, Clone, Default)]
pub struct CarDynamics {
    /// Forward-positive, reverse-negative. Stays within
    /// [-MAX_REVERSE_SPEED, BOOST_MAX_SPEED].
    pub speed: f32,
    /// Smoothed steering input in [-1, 1], not the raw key state.
    pub steering: f32,
}
