use glam::{Vec2, Vec3};

use movelab::{
    BodyConfig, ControllerConfig, ControllerInput, GroundProbe, InputButtons, MovementState,
    PhysicsWorld, PlayerBody, Sandbox, Tunable, TuningParam,
};

const FRAME: f32 = 1.0 / 60.0;

fn run_frames(sandbox: &mut Sandbox, input: &ControllerInput, frames: usize) {
    for _ in 0..frames {
        sandbox.update(FRAME, input);
    }
}

fn settled_sandbox() -> Sandbox {
    let mut sandbox = Sandbox::new(ControllerConfig::default(), 60);
    run_frames(&mut sandbox, &ControllerInput::idle(), 180);
    sandbox
}

fn jump() -> ControllerInput {
    ControllerInput::idle().with_button(InputButtons::JUMP, true)
}

#[test]
fn player_lands_on_arena_ground() {
    let sandbox = settled_sandbox();
    let readout = sandbox.readout();

    assert!(readout.grounded);
    assert_eq!(readout.state, MovementState::Walking);
    assert_eq!(readout.remaining_jumps, readout.max_jumps);
    assert_eq!(readout.next_jump_force, Some(5.0));
    assert!(readout.position.y > 0.5 && readout.position.y < 1.5);

    let body = sandbox.physics().body(sandbox.player()).unwrap();
    assert_eq!(body.linear_damping(), 7.0);
}

#[test]
fn jump_launches_player_upward() {
    let mut sandbox = settled_sandbox();
    sandbox.set(TuningParam::InitialJumpForce, 10.0).unwrap();
    let rest_height = sandbox.position().y;

    sandbox.update(FRAME, &jump());
    assert!(sandbox.velocity().y > 1.0);
    assert!(!sandbox.controller().jump_latched());

    run_frames(&mut sandbox, &ControllerInput::idle(), 6);
    assert!(sandbox.position().y > rest_height + 0.05);
}

#[test]
fn air_jump_spends_budget() {
    let mut sandbox = settled_sandbox();
    sandbox.set(TuningParam::InitialJumpForce, 10.0).unwrap();

    sandbox.update(FRAME, &jump());
    for _ in 0..30 {
        if !sandbox.controller().is_grounded() {
            break;
        }
        sandbox.update(FRAME, &ControllerInput::idle());
    }
    assert!(!sandbox.controller().is_grounded());
    assert_eq!(sandbox.controller().state(), MovementState::Airborne);

    let before = sandbox.controller().remaining_jumps();
    assert!(before > 0);

    sandbox.update(FRAME, &jump());
    assert_eq!(sandbox.controller().remaining_jumps(), before - 1);
    assert!(sandbox.velocity().y > 0.0);
}

#[test]
fn walking_is_capped_at_walk_speed() {
    let mut sandbox = settled_sandbox();
    let start = sandbox.position();
    let forward = ControllerInput::idle().with_movement(Vec2::new(0.0, 1.0));

    for _ in 0..120 {
        sandbox.update(FRAME, &forward);
        assert!(sandbox.controller().flat_speed() <= 5.0 + 1e-3);
    }

    assert!(sandbox.position().z > start.z + 1.0);
}

#[test]
fn sprinting_raises_speed_cap() {
    let mut sandbox = settled_sandbox();
    sandbox.set(TuningParam::SprintMultiplier, 2.0).unwrap();
    let sprint = ControllerInput::idle()
        .with_movement(Vec2::new(0.0, 1.0))
        .with_button(InputButtons::SPRINT, true);

    run_frames(&mut sandbox, &sprint, 5);

    assert_eq!(sandbox.controller().state(), MovementState::Running);
    assert_eq!(sandbox.controller().target_speed(), 10.0);
}

#[test]
fn gravity_edit_reaches_physics_world() {
    let mut sandbox = Sandbox::new(ControllerConfig::default(), 60);

    sandbox.apply_text(TuningParam::Gravity, "9.81").unwrap();
    assert!((sandbox.physics().gravity_magnitude() - 9.81).abs() < 1e-6);

    assert!(sandbox.apply_text(TuningParam::Gravity, "9.81m/s").is_err());
    assert!((sandbox.physics().gravity_magnitude() - 9.81).abs() < 1e-6);
}

#[test]
fn ground_probe_only_sees_ground_layer() {
    let config = BodyConfig::default();

    for ground_layer in [true, false] {
        let mut physics = PhysicsWorld::default();
        physics.add_static_box(Vec3::ZERO, Vec3::new(2.0, 0.1, 2.0), ground_layer);
        let handle = physics.add_player(Vec3::new(0.0, 1.1, 0.0), &config);
        physics.step();

        let body = PlayerBody::new(&mut physics, handle, &config);
        assert_eq!(body.probe_ground(), ground_layer);
    }
}
