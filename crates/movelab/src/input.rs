use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InputButtons: u8 {
        /// Pressed this frame.
        const JUMP = 1 << 0;
        /// Held.
        const SPRINT = 1 << 1;
    }
}

/// One frame of already-normalized input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerInput {
    /// x = strafe right, y = forward.
    pub movement: Vec2,
    pub look: Vec2,
    pub buttons: InputButtons,
}

impl ControllerInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_movement(mut self, movement: Vec2) -> Self {
        self.movement = movement;
        self
    }

    pub fn with_look(mut self, look: Vec2) -> Self {
        self.look = look;
        self
    }

    pub fn with_button(mut self, button: InputButtons, pressed: bool) -> Self {
        self.buttons.set(button, pressed);
        self
    }

    pub fn jump_pressed(&self) -> bool {
        self.buttons.contains(InputButtons::JUMP)
    }

    pub fn sprint_held(&self) -> bool {
        self.buttons.contains(InputButtons::SPRINT)
    }
}
