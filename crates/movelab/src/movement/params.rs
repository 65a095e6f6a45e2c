use glam::Vec3;

use super::MovementState;

/// Multiplier between target speed and the lateral force pushed each step.
pub const MOVE_FORCE_SCALE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParameters {
    pub walk_speed: f32,
    pub sprint_multiplier: f32,

    pub ground_drag: f32,
    pub air_drag: f32,
    /// Fraction of lateral force kept while airborne.
    pub air_control_multiplier: f32,
}

impl Default for MotionParameters {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            sprint_multiplier: 5.0,

            ground_drag: 7.0,
            air_drag: 0.0,
            air_control_multiplier: 0.6,
        }
    }
}

pub fn effective_speed(state: MovementState, params: &MotionParameters) -> f32 {
    match state {
        MovementState::Running => params.walk_speed * params.sprint_multiplier,
        MovementState::Walking | MovementState::Airborne => params.walk_speed,
    }
}

pub fn effective_drag(grounded: bool, params: &MotionParameters) -> f32 {
    if grounded {
        params.ground_drag
    } else {
        params.air_drag
    }
}

pub fn lateral_force_scale(grounded: bool, params: &MotionParameters) -> f32 {
    if grounded {
        1.0
    } else {
        params.air_control_multiplier
    }
}

/// Caps the horizontal part of `velocity` at `max_speed`, leaving the
/// vertical component alone.
pub fn limit_flat_velocity(velocity: Vec3, max_speed: f32) -> Vec3 {
    let flat = Vec3::new(velocity.x, 0.0, velocity.z);
    let max_speed = max_speed.max(0.0);

    if flat.length() > max_speed {
        let limited = flat.normalize_or_zero() * max_speed;
        Vec3::new(limited.x, velocity.y, limited.z)
    } else {
        velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_speed_uses_multiplier() {
        let params = MotionParameters {
            walk_speed: 5.0,
            sprint_multiplier: 2.0,
            ..Default::default()
        };

        assert_eq!(effective_speed(MovementState::Running, &params), 10.0);
        assert_eq!(effective_speed(MovementState::Walking, &params), 5.0);
        assert_eq!(effective_speed(MovementState::Airborne, &params), 5.0);
    }

    #[test]
    fn drag_follows_ground_contact() {
        let params = MotionParameters {
            ground_drag: 7.0,
            air_drag: 0.5,
            ..Default::default()
        };

        assert_eq!(effective_drag(true, &params), 7.0);
        assert_eq!(effective_drag(false, &params), 0.5);
    }

    #[test]
    fn air_control_scales_lateral_force() {
        let params = MotionParameters {
            air_control_multiplier: 0.6,
            ..Default::default()
        };

        assert_eq!(lateral_force_scale(false, &params), 0.6);
        assert_eq!(lateral_force_scale(true, &params), 1.0);

        let weird = MotionParameters {
            air_control_multiplier: 42.0,
            ..Default::default()
        };
        assert_eq!(lateral_force_scale(true, &weird), 1.0);
    }

    #[test]
    fn flat_velocity_is_capped_without_touching_vertical() {
        let limited = limit_flat_velocity(Vec3::new(6.0, -3.0, 8.0), 5.0);

        assert!((Vec3::new(limited.x, 0.0, limited.z).length() - 5.0).abs() < 1e-5);
        assert_eq!(limited.y, -3.0);
        assert!((limited.x / limited.z - 0.75).abs() < 1e-5);

        let slow = Vec3::new(1.0, 2.0, 1.0);
        assert_eq!(limit_flat_velocity(slow, 5.0), slow);
    }
}
