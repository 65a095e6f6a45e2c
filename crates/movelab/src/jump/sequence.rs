use super::JumpProfile;

/// Geometrically decaying jump impulses plus the budget of jumps left before
/// the character has to touch the ground again.
#[derive(Debug, Clone, Default)]
pub struct JumpSequence {
    forces: Vec<f32>,
    jump_count: usize,
    remaining: usize,
}

impl JumpSequence {
    /// Largest jump budget a sequence will hold. Larger counts are clamped.
    pub const MAX_JUMP_COUNT: i32 = 64;

    pub fn new(profile: &JumpProfile) -> Self {
        let mut sequence = Self::default();
        sequence.configure(
            profile.initial_force,
            profile.dampening_factor,
            profile.jump_count,
        );
        sequence
    }

    /// Rebuilds the force table from scratch and refills the budget.
    ///
    /// Counts are clamped to `0..=MAX_JUMP_COUNT`. Non-finite inputs are normalized
    /// (force to 0, dampening to 1) instead of poisoning the table.
    pub fn configure(&mut self, initial_force: f32, dampening_factor: f32, jump_count: i32) {
        let initial_force = if initial_force.is_finite() {
            initial_force
        } else {
            log::warn!("Non-finite initial jump force {}, using 0", initial_force);
            0.0
        };

        let dampening_factor = if dampening_factor.is_finite() {
            dampening_factor
        } else {
            log::warn!("Non-finite jump dampening {}, using 1", dampening_factor);
            1.0
        };

        if jump_count > Self::MAX_JUMP_COUNT {
            log::warn!(
                "Jump count {} exceeds {}, clamping",
                jump_count,
                Self::MAX_JUMP_COUNT
            );
        }
        let jump_count = jump_count.clamp(0, Self::MAX_JUMP_COUNT) as usize;

        self.forces = (0..jump_count)
            .map(|i| initial_force * dampening_factor.powi(i as i32))
            .collect();
        self.jump_count = jump_count;
        self.remaining = jump_count;
    }

    pub fn notify_grounded(&mut self) {
        self.remaining = self.jump_count;
        self.clamp_remaining();
    }

    /// Returns the impulse magnitude for the next jump and spends one jump,
    /// or `None` when the budget is exhausted. A failed attempt is dropped.
    pub fn try_consume_jump(&mut self) -> Option<f32> {
        let force = self.next_force()?;
        self.remaining -= 1;
        self.clamp_remaining();
        Some(force)
    }

    /// Force the next successful consume would return.
    pub fn next_force(&self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }

        let index = (self.jump_count - self.remaining).min(self.forces.len().checked_sub(1)?);
        self.forces.get(index).copied()
    }

    pub fn forces(&self) -> &[f32] {
        &self.forces
    }

    pub fn jump_count(&self) -> usize {
        self.jump_count
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    fn clamp_remaining(&mut self) {
        self.remaining = self.remaining.min(self.jump_count);
    }
}
