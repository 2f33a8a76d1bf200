use crate::game_logic::{
    ACCEL_RATE, BOOST_MAX_SPEED, BRAKE_RATE, CarDynamics, FRICTION, MAX_REVERSE_SPEED, MAX_SPEED,
    MIN_TURN_SPEED, Orientation, STEERING_DECAY, STEERING_FULL_AUTHORITY_SPEED, STEERING_RESPONSE,
    TURN_RATE, Velocity,
};
use bevy::prelude::*;

/// Input state for the physics simulation, written by the keyboard system
/// once per frame and read by `apply_physics`.
#[derive(Resource, Clone, Default)]
pub struct ControlState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub boost: bool,
}

/// Advance the car one frame.
///
/// Order matters: throttle/brake, steering response, heading, then position.
/// Friction and steering decay are flat per-frame multipliers rather than
/// delta-scaled, so coast-down is framerate-dependent. That matches the
/// tuned arcade feel; don't "fix" it without retuning.
pub fn apply_physics(
    position: &mut Vec2,
    velocity: &mut Velocity,
    dynamics: &mut CarDynamics,
    orientation: &mut Orientation,
    input: &ControlState,
    delta: f32,
) {
    // The frame driver should never hand us a negative delta, but a rewind
    // would corrupt speed clamping, so floor it.
    let delta = delta.max(0.0);

    let max_speed = if input.boost {
        BOOST_MAX_SPEED
    } else {
        MAX_SPEED
    };

    if input.forward {
        dynamics.speed = (dynamics.speed + ACCEL_RATE * delta).min(max_speed);
    } else if input.backward {
        dynamics.speed = (dynamics.speed - BRAKE_RATE * delta).max(-MAX_REVERSE_SPEED);
    } else {
        dynamics.speed *= FRICTION;
    }

    // Steering is sluggish at low speed, full authority at 30+
    let steering_rate =
        STEERING_RESPONSE * (dynamics.speed.abs() / STEERING_FULL_AUTHORITY_SPEED).min(1.0);
    if input.left {
        dynamics.steering = (dynamics.steering + steering_rate * delta).min(1.0);
    } else if input.right {
        dynamics.steering = (dynamics.steering - steering_rate * delta).max(-1.0);
    } else {
        dynamics.steering *= STEERING_DECAY;
    }

    // Reversing flips the steering sense, like a real car backing up
    if dynamics.speed.abs() > MIN_TURN_SPEED {
        orientation.angle += dynamics.steering * delta * TURN_RATE * dynamics.speed.signum();
    }

    **velocity = orientation.forward_vector() * (dynamics.speed * delta);
    *position += **velocity;
}

/// HUD speed readout: unitless km/h-like scalar, no feedback into the sim.
pub fn display_speed(speed: f32) -> u32 {
    (speed * 2.0).round().abs() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn car() -> (Vec2, Velocity, CarDynamics, Orientation) {
        (
            Vec2::ZERO,
            Velocity::new(),
            CarDynamics::default(),
            Orientation::new(0.0),
        )
    }

    fn step(
        state: &mut (Vec2, Velocity, CarDynamics, Orientation),
        input: &ControlState,
        delta: f32,
    ) {
        let (position, velocity, dynamics, orientation) = state;
        apply_physics(position, velocity, dynamics, orientation, input, delta);
    }

    #[test]
    fn test_forward_speed_capped() {
        let mut state = car();
        let input = ControlState {
            forward: true,
            ..Default::default()
        };

        for _ in 0..2000 {
            step(&mut state, &input, DT);
            assert!(state.2.speed <= MAX_SPEED);
        }
        assert!((state.2.speed - MAX_SPEED).abs() < 1e-3);
    }

    #[test]
    fn test_boost_raises_cap() {
        let mut state = car();
        let input = ControlState {
            forward: true,
            boost: true,
            ..Default::default()
        };

        for _ in 0..2000 {
            step(&mut state, &input, DT);
            assert!(state.2.speed <= BOOST_MAX_SPEED);
        }
        assert!((state.2.speed - BOOST_MAX_SPEED).abs() < 1e-3);
    }

    #[test]
    fn test_reverse_speed_floored() {
        let mut state = car();
        let input = ControlState {
            backward: true,
            ..Default::default()
        };

        for _ in 0..2000 {
            step(&mut state, &input, DT);
            assert!(state.2.speed >= -MAX_REVERSE_SPEED);
        }
        assert!((state.2.speed + MAX_REVERSE_SPEED).abs() < 1e-3);
    }

    #[test]
    fn test_coast_down_is_geometric() {
        let mut state = car();
        state.2.speed = 50.0;
        let input = ControlState::default();

        for _ in 0..10 {
            step(&mut state, &input, DT);
        }

        let expected = 50.0 * FRICTION.powi(10);
        assert!((state.2.speed - expected).abs() < 1e-3);
        // approaches zero but never lands exactly on it
        assert!(state.2.speed > 0.0);
    }

    #[test]
    fn test_steering_stays_clamped() {
        let mut state = car();
        state.2.speed = 60.0;
        let left = ControlState {
            forward: true,
            left: true,
            ..Default::default()
        };
        for _ in 0..500 {
            step(&mut state, &left, DT);
            assert!(state.2.steering <= 1.0);
        }
        assert_eq!(state.2.steering, 1.0);

        let right = ControlState {
            forward: true,
            right: true,
            ..Default::default()
        };
        for _ in 0..500 {
            step(&mut state, &right, DT);
            assert!(state.2.steering >= -1.0);
        }
        assert_eq!(state.2.steering, -1.0);
    }

    #[test]
    fn test_no_turning_in_place() {
        let mut state = car();
        state.2.speed = 0.4;
        state.2.steering = 1.0;
        let input = ControlState::default();

        step(&mut state, &input, DT);

        assert_eq!(state.3.angle, 0.0);
    }

    #[test]
    fn test_reverse_inverts_steering_sense() {
        let mut forward = car();
        forward.2.speed = 20.0;
        forward.2.steering = 1.0;
        step(&mut forward, &ControlState::default(), DT);
        assert!(forward.3.angle > 0.0);

        let mut reverse = car();
        reverse.2.speed = -20.0;
        reverse.2.steering = 1.0;
        step(&mut reverse, &ControlState::default(), DT);
        assert!(reverse.3.angle < 0.0);
    }

    #[test]
    fn test_velocity_derived_from_heading() {
        let mut state = car();
        state.3.angle = 1.2;
        state.2.speed = 40.0;
        let input = ControlState {
            forward: true,
            ..Default::default()
        };

        step(&mut state, &input, DT);

        let expected = state.3.forward_vector() * state.2.speed * DT;
        assert!((*state.1 - expected).length() < 1e-4);
        assert!((state.0 - expected).length() < 1e-4);
    }

    #[test]
    fn test_zero_delta_still_applies_friction() {
        let mut state = car();
        state.2.speed = 50.0;
        state.0 = Vec2::new(3.0, 4.0);

        step(&mut state, &ControlState::default(), 0.0);

        assert!((state.2.speed - 50.0 * FRICTION).abs() < 1e-4);
        assert_eq!(state.0, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_negative_delta_clamped_to_zero() {
        let mut state = car();
        state.2.speed = 50.0;
        state.0 = Vec2::new(3.0, 4.0);
        let input = ControlState {
            forward: true,
            ..Default::default()
        };

        step(&mut state, &input, -0.5);

        // behaves exactly like a zero-delta frame
        assert_eq!(state.2.speed, 50.0);
        assert_eq!(state.0, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_display_speed_rounds_and_abs() {
        assert_eq!(display_speed(0.0), 0);
        assert_eq!(display_speed(40.2), 80);
        assert_eq!(display_speed(-12.3), 25);
        assert_eq!(display_speed(120.0), 240);
    }
}
