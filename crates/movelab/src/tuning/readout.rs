use glam::Vec3;

use crate::movement::MovementState;

/// Read-only values shown next to the tuning fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub state: MovementState,
    pub grounded: bool,
    pub remaining_jumps: usize,
    pub max_jumps: usize,
    pub next_jump_force: Option<f32>,
    pub flat_speed: f32,
    pub position: Vec3,
    /// View angles in degrees.
    pub yaw: f32,
    pub pitch: f32,
    pub gravity: f32,
}

impl Readout {
    pub fn next_force_label(&self) -> String {
        match self.next_jump_force {
            Some(force) => format!("{:.3}", force),
            None => "-".to_string(),
        }
    }
}
