use glam::Vec3;

use crate::input::ControllerInput;
use crate::jump::{JumpProfile, JumpSequence};
use crate::look::{LookConfig, LookState};
use crate::movement::{
    MOVE_FORCE_SCALE, MotionParameters, MovementState, classify, effective_drag, effective_speed,
    lateral_force_scale, limit_flat_velocity,
};
use crate::physics::{CharacterBody, GroundProbe};

use super::ControllerConfig;

/// First-person controller driven by two schedulers: [`on_tick`] once per
/// rendered frame and [`on_fixed_tick`] once per physics step.
///
/// [`on_tick`]: CharacterController::on_tick
/// [`on_fixed_tick`]: CharacterController::on_fixed_tick
pub struct CharacterController {
    motion: MotionParameters,
    jump_profile: JumpProfile,
    jumps: JumpSequence,
    look_config: LookConfig,
    look: LookState,

    state: MovementState,
    grounded: bool,
    target_speed: f32,
    move_direction: Vec3,
    flat_speed: f32,
    // Set by the frame tick, cleared by the next fixed tick.
    jump_latched: bool,
}

impl Default for CharacterController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl CharacterController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            motion: config.motion,
            jump_profile: config.jump,
            jumps: JumpSequence::new(&config.jump),
            look_config: config.look,
            look: LookState::default(),

            state: MovementState::Walking,
            grounded: false,
            target_speed: config.motion.walk_speed,
            move_direction: Vec3::ZERO,
            flat_speed: 0.0,
            jump_latched: false,
        }
    }

    pub fn on_tick<B>(&mut self, dt: f32, input: &ControllerInput, body: &mut B)
    where
        B: CharacterBody + GroundProbe,
    {
        self.grounded = body.probe_ground();
        self.update_state(input.sprint_held());
        body.set_linear_damping(effective_drag(self.grounded, &self.motion));

        self.move_direction = self.look.world_direction(input.movement);
        self.speed_control(body);
        self.look.apply(input.look, dt, &self.look_config);
        self.jump_input(input);

        log::trace!(
            "grounded={} state={} jumps={}/{} next_force={:?}",
            self.grounded,
            self.state.as_str(),
            self.jumps.remaining(),
            self.jumps.jump_count(),
            self.jumps.next_force()
        );
    }

    pub fn on_fixed_tick<B>(&mut self, _dt: f32, body: &mut B)
    where
        B: CharacterBody,
    {
        self.move_body(body);
        self.jump(body);
    }

    fn update_state(&mut self, sprint_intent: bool) {
        self.state = classify(self.grounded, sprint_intent);

        // Airborne keeps the speed the character left the ground with.
        if self.state != MovementState::Airborne {
            self.target_speed = effective_speed(self.state, &self.motion);
        }
    }

    fn speed_control<B: CharacterBody>(&mut self, body: &mut B) {
        let velocity = body.linear_velocity();
        let limited = limit_flat_velocity(velocity, self.target_speed);

        if limited != velocity {
            body.set_linear_velocity(limited);
        }

        self.flat_speed = Vec3::new(limited.x, 0.0, limited.z).length();
    }

    fn jump_input(&mut self, input: &ControllerInput) {
        if input.jump_pressed() && self.jumps.remaining() > 0 {
            self.jump_latched = true;
        }

        if self.grounded {
            self.jumps.notify_grounded();
        }
    }

    fn move_body<B: CharacterBody>(&self, body: &mut B) {
        let direction = self.move_direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return;
        }

        let scale = lateral_force_scale(self.grounded, &self.motion);
        body.add_force(direction * (self.target_speed * MOVE_FORCE_SCALE * scale));
    }

    fn jump<B: CharacterBody>(&mut self, body: &mut B) {
        if !std::mem::take(&mut self.jump_latched) {
            return;
        }

        let Some(force) = self.jumps.try_consume_jump() else {
            return;
        };

        let velocity = body.linear_velocity();
        body.set_linear_velocity(Vec3::new(velocity.x, 0.0, velocity.z));
        body.add_impulse(Vec3::Y * force);

        log::debug!(
            "Jump with force {:.3}, {} of {} left",
            force,
            self.jumps.remaining(),
            self.jumps.jump_count()
        );
    }

    /// Applies the pending jump profile. Jump setters have no effect until
    /// this runs.
    pub fn rebuild_jump_sequence(&mut self) {
        let profile = self.jump_profile;
        self.jumps.configure(
            profile.initial_force,
            profile.dampening_factor,
            profile.jump_count,
        );

        log::info!(
            "Jump sequence rebuilt: {} jumps, forces {:?}",
            self.jumps.jump_count(),
            self.jumps.forces()
        );
    }

    pub fn walk_speed(&self) -> f32 {
        self.motion.walk_speed
    }

    pub fn set_walk_speed(&mut self, value: f32) {
        self.motion.walk_speed = value;
    }

    pub fn sprint_multiplier(&self) -> f32 {
        self.motion.sprint_multiplier
    }

    pub fn set_sprint_multiplier(&mut self, value: f32) {
        self.motion.sprint_multiplier = value;
    }

    pub fn ground_drag(&self) -> f32 {
        self.motion.ground_drag
    }

    pub fn set_ground_drag(&mut self, value: f32) {
        self.motion.ground_drag = value;
    }

    pub fn air_drag(&self) -> f32 {
        self.motion.air_drag
    }

    pub fn set_air_drag(&mut self, value: f32) {
        self.motion.air_drag = value;
    }

    pub fn air_control_multiplier(&self) -> f32 {
        self.motion.air_control_multiplier
    }

    pub fn set_air_control_multiplier(&mut self, value: f32) {
        self.motion.air_control_multiplier = value;
    }

    pub fn initial_jump_force(&self) -> f32 {
        self.jump_profile.initial_force
    }

    pub fn set_initial_jump_force(&mut self, value: f32) {
        self.jump_profile.initial_force = value;
    }

    pub fn jump_dampening_factor(&self) -> f32 {
        self.jump_profile.dampening_factor
    }

    pub fn set_jump_dampening_factor(&mut self, value: f32) {
        self.jump_profile.dampening_factor = value;
    }

    pub fn jump_count(&self) -> i32 {
        self.jump_profile.jump_count
    }

    pub fn set_jump_count(&mut self, value: i32) {
        self.jump_profile.jump_count = value;
    }

    pub fn jumps(&self) -> &JumpSequence {
        &self.jumps
    }

    pub fn remaining_jumps(&self) -> usize {
        self.jumps.remaining()
    }

    /// `None` once the budget is spent.
    pub fn next_jump_force(&self) -> Option<f32> {
        self.jumps.next_force()
    }

    pub fn flat_speed(&self) -> f32 {
        self.flat_speed
    }

    pub fn state(&self) -> MovementState {
        self.state
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn target_speed(&self) -> f32 {
        self.target_speed
    }

    pub fn look(&self) -> &LookState {
        &self.look
    }

    pub fn jump_latched(&self) -> bool {
        self.jump_latched
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::input::InputButtons;

    #[derive(Default)]
    struct MockBody {
        grounded: bool,
        velocity: Vec3,
        damping: f32,
        forces: Vec<Vec3>,
        impulses: Vec<Vec3>,
    }

    impl CharacterBody for MockBody {
        fn linear_velocity(&self) -> Vec3 {
            self.velocity
        }

        fn set_linear_velocity(&mut self, velocity: Vec3) {
            self.velocity = velocity;
        }

        fn set_linear_damping(&mut self, damping: f32) {
            self.damping = damping;
        }

        fn add_force(&mut self, force: Vec3) {
            self.forces.push(force);
        }

        fn add_impulse(&mut self, impulse: Vec3) {
            self.impulses.push(impulse);
        }
    }

    impl GroundProbe for MockBody {
        fn probe_ground(&self) -> bool {
            self.grounded
        }
    }

    const DT: f32 = 1.0 / 60.0;

    fn controller(jump_count: i32) -> CharacterController {
        CharacterController::new(ControllerConfig {
            jump: JumpProfile {
                initial_force: 5.0,
                dampening_factor: 0.6,
                jump_count,
            },
            ..Default::default()
        })
    }

    fn jump_input() -> ControllerInput {
        ControllerInput::idle().with_button(InputButtons::JUMP, true)
    }

    #[test]
    fn jump_latch_is_consumed_by_next_fixed_tick() {
        let mut controller = controller(3);
        let mut body = MockBody {
            grounded: true,
            velocity: Vec3::new(1.0, -2.0, 0.0),
            ..Default::default()
        };

        controller.on_tick(DT, &jump_input(), &mut body);
        assert!(controller.jump_latched());
        assert!(body.impulses.is_empty());

        controller.on_fixed_tick(DT, &mut body);
        assert!(!controller.jump_latched());
        assert_eq!(body.impulses, vec![Vec3::new(0.0, 5.0, 0.0)]);
        assert_eq!(body.velocity, Vec3::new(1.0, 0.0, 0.0));

        controller.on_fixed_tick(DT, &mut body);
        assert_eq!(body.impulses.len(), 1);
    }

    #[test]
    fn air_jumps_decay_until_budget_runs_out() {
        let mut controller = controller(3);
        let mut body = MockBody::default();

        for _ in 0..5 {
            controller.on_tick(DT, &jump_input(), &mut body);
            controller.on_fixed_tick(DT, &mut body);
        }

        let forces: Vec<f32> = body.impulses.iter().map(|i| i.y).collect();
        assert_eq!(forces.len(), 3);
        assert!((forces[0] - 5.0).abs() < 1e-5);
        assert!((forces[1] - 3.0).abs() < 1e-5);
        assert!((forces[2] - 1.8).abs() < 1e-5);
        assert_eq!(controller.next_jump_force(), None);
        assert!(!controller.jump_latched());
    }

    #[test]
    fn landing_refills_jumps() {
        let mut controller = controller(2);
        let mut body = MockBody::default();

        controller.on_tick(DT, &jump_input(), &mut body);
        controller.on_fixed_tick(DT, &mut body);
        controller.on_tick(DT, &jump_input(), &mut body);
        controller.on_fixed_tick(DT, &mut body);
        assert_eq!(controller.remaining_jumps(), 0);

        body.grounded = true;
        controller.on_tick(DT, &ControllerInput::idle(), &mut body);
        assert_eq!(controller.remaining_jumps(), 2);
        assert_eq!(controller.next_jump_force(), Some(5.0));
    }

    #[test]
    fn exhausted_trigger_is_not_queued() {
        let mut controller = controller(0);
        let mut body = MockBody::default();

        controller.on_tick(DT, &jump_input(), &mut body);
        assert!(!controller.jump_latched());

        body.grounded = true;
        controller.on_tick(DT, &ControllerInput::idle(), &mut body);
        controller.on_fixed_tick(DT, &mut body);
        assert!(body.impulses.is_empty());
    }

    #[test]
    fn drag_and_state_follow_ground_contact() {
        let mut controller = controller(1);
        let mut body = MockBody {
            grounded: true,
            ..Default::default()
        };
        let sprint = ControllerInput::idle().with_button(InputButtons::SPRINT, true);

        controller.on_tick(DT, &sprint, &mut body);
        assert_eq!(controller.state(), MovementState::Running);
        assert_eq!(body.damping, 7.0);
        assert_eq!(controller.target_speed(), 25.0);

        body.grounded = false;
        controller.on_tick(DT, &ControllerInput::idle(), &mut body);
        assert_eq!(controller.state(), MovementState::Airborne);
        assert_eq!(body.damping, 0.0);
        assert_eq!(controller.target_speed(), 25.0);

        body.grounded = true;
        controller.on_tick(DT, &ControllerInput::idle(), &mut body);
        assert_eq!(controller.state(), MovementState::Walking);
        assert_eq!(controller.target_speed(), 5.0);
    }

    #[test]
    fn airborne_force_is_scaled_by_air_control() {
        let mut controller = controller(1);
        let mut body = MockBody {
            grounded: true,
            ..Default::default()
        };
        let forward = ControllerInput::idle().with_movement(Vec2::new(0.0, 1.0));

        controller.on_tick(DT, &forward, &mut body);
        controller.on_fixed_tick(DT, &mut body);

        body.grounded = false;
        controller.on_tick(DT, &forward, &mut body);
        controller.on_fixed_tick(DT, &mut body);

        assert_eq!(body.forces.len(), 2);
        assert!((body.forces[0] - Vec3::new(0.0, 0.0, 50.0)).length() < 1e-4);
        assert!((body.forces[1] - Vec3::new(0.0, 0.0, 30.0)).length() < 1e-4);
    }

    #[test]
    fn flat_speed_is_clamped_to_target() {
        let mut controller = controller(1);
        let mut body = MockBody {
            grounded: true,
            velocity: Vec3::new(30.0, 4.0, 40.0),
            ..Default::default()
        };

        controller.on_tick(DT, &ControllerInput::idle(), &mut body);

        assert!((controller.flat_speed() - 5.0).abs() < 1e-4);
        assert_eq!(body.velocity.y, 4.0);
    }

    #[test]
    fn jump_edits_wait_for_rebuild() {
        let mut controller = controller(3);

        controller.set_jump_count(1);
        controller.set_initial_jump_force(9.0);
        assert_eq!(controller.jumps().jump_count(), 3);
        assert_eq!(controller.next_jump_force(), Some(5.0));

        controller.rebuild_jump_sequence();
        assert_eq!(controller.jumps().jump_count(), 1);
        assert_eq!(controller.remaining_jumps(), 1);
        assert_eq!(controller.next_jump_force(), Some(9.0));
    }

    #[test]
    fn oversized_jump_count_from_config_is_clamped() {
        let controller = controller(2_000_000_000);

        let max = JumpSequence::MAX_JUMP_COUNT as usize;
        assert_eq!(controller.jumps().jump_count(), max);
        assert_eq!(controller.remaining_jumps(), max);
    }
}
