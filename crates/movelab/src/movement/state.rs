#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementState {
    Walking,
    Running,
    Airborne,
}

impl MovementState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementState::Walking => "walking",
            MovementState::Running => "running",
            MovementState::Airborne => "airborne",
        }
    }
}

/// Recomputed every tick from the current signals; there is no memory of the
/// previous state. Sprint intent is ignored while airborne.
pub fn classify(grounded: bool, sprint_intent: bool) -> MovementState {
    match (grounded, sprint_intent) {
        (true, false) => MovementState::Walking,
        (true, true) => MovementState::Running,
        (false, _) => MovementState::Airborne,
    }
}
