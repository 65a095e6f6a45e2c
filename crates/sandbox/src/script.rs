use glam::Vec2;
use movelab::{ControllerInput, InputButtons};

/// Input played back by the headless run: settle, walk, sprint, then chain
/// jumps until the budget runs dry.
pub fn scripted_input(time: f32, frame: u64) -> ControllerInput {
    let forward = Vec2::new(0.0, 1.0);

    match time {
        t if t < 1.0 => ControllerInput::idle(),
        t if t < 2.0 => ControllerInput::idle().with_movement(forward),
        t if t < 3.0 => ControllerInput::idle()
            .with_movement(forward)
            .with_button(InputButtons::SPRINT, true),
        _ => {
            // One press roughly every quarter second at 144 fps.
            let press = frame % 36 == 0;
            ControllerInput::idle()
                .with_look(Vec2::new(0.2, 0.0))
                .with_button(InputButtons::JUMP, press)
        }
    }
}
