// Physics constants
pub const ACCEL_RATE: f32 = 40.0;
pub const BRAKE_RATE: f32 = 60.0;
pub const FRICTION: f32 = 0.98; // flat per-frame multiplier, not delta-scaled
pub const MAX_SPEED: f32 = 80.0;
pub const BOOST_MAX_SPEED: f32 = 120.0;
pub const MAX_REVERSE_SPEED: f32 = 30.0;

// Steering constants
pub const STEERING_RESPONSE: f32 = 2.5;
pub const STEERING_FULL_AUTHORITY_SPEED: f32 = 30.0; // full turning authority at or above this speed
pub const STEERING_DECAY: f32 = 0.9;
pub const TURN_RATE: f32 = 2.0;
pub const MIN_TURN_SPEED: f32 = 0.5; // no spinning in place below this

// Track geometry
pub const TRACK_RADIUS: f32 = 50.0;
pub const TRACK_WIDTH: f32 = 15.0;
pub const WALL_PUSHBACK: f32 = 1.0;
pub const WALL_PENALTY: f32 = 0.5;

// Race rules
pub const TOTAL_LAPS: u8 = 3;
pub const FINISH_LINE_WINDOW: f32 = 0.1; // radians around bearing zero that count as the line
