/// Tunable inputs of the jump sequence. Changing any of them has no effect
/// until the sequence is reconfigured from the profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpProfile {
    pub initial_force: f32,
    pub dampening_factor: f32,
    pub jump_count: i32,
}

impl Default for JumpProfile {
    fn default() -> Self {
        Self {
            initial_force: 5.0,
            dampening_factor: 0.6,
            jump_count: 5,
        }
    }
}
