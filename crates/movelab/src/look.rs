use glam::{Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookConfig {
    /// Degrees per unit of look input per second.
    pub sensitivity: f32,
    /// Maximum pitch, in degrees, above or below the horizon.
    pub pitch_limit: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity: 100.0,
            pitch_limit: 90.0,
        }
    }
}

impl LookConfig {
    /// Pitch limit as a usable bound: negative limits are mirrored and a
    /// non-finite limit falls back to the default.
    pub fn pitch_limit(&self) -> f32 {
        if self.pitch_limit.is_finite() {
            self.pitch_limit.abs()
        } else {
            Self::default().pitch_limit
        }
    }
}

/// View angles in degrees. Yaw 0 faces +Z.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookState {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookState {
    pub fn apply(&mut self, delta: Vec2, dt: f32, config: &LookConfig) {
        let scaled = delta * (config.sensitivity * dt);

        self.yaw += scaled.x;
        let limit = config.pitch_limit();
        self.pitch = (self.pitch - scaled.y).clamp(-limit, limit);
    }

    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec3::new(sin_yaw, 0.0, cos_yaw)
    }

    pub fn right(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec3::new(cos_yaw, 0.0, -sin_yaw)
    }

    /// Flat world direction for a strafe (x) / forward (y) input.
    pub fn world_direction(&self, movement: Vec2) -> Vec3 {
        self.forward() * movement.y + self.right() * movement.x
    }
}
