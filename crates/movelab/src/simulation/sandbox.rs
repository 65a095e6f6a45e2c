use glam::Vec3;
use rapier3d::prelude::RigidBodyHandle;

use crate::controller::{CharacterController, ControllerConfig};
use crate::input::ControllerInput;
use crate::map::Arena;
use crate::physics::{BodyConfig, PhysicsWorld, PlayerBody};
use crate::tuning::{Readout, TuneError, Tunable, TuningParam};

use super::FixedTimestep;

/// Host loop for one controller: owns the physics world and drives the
/// frame and fixed-step cadences.
pub struct Sandbox {
    physics: PhysicsWorld,
    player: RigidBodyHandle,
    controller: CharacterController,
    body_config: BodyConfig,
    timestep: FixedTimestep,
    spawn: Vec3,
    kill_height: f32,
}

impl Sandbox {
    pub fn new(config: ControllerConfig, tick_rate: u32) -> Self {
        let timestep = FixedTimestep::new(tick_rate);
        let mut physics = PhysicsWorld::new(timestep.dt());

        let arena = Arena::new();
        arena.build(&mut physics);

        let player = physics.add_player(Arena::SPAWN, &config.body);

        Self {
            physics,
            player,
            controller: CharacterController::new(config),
            body_config: config.body,
            timestep,
            spawn: Arena::SPAWN,
            kill_height: arena.kill_height(),
        }
    }

    /// Runs one frame tick, then every fixed tick that fits in the
    /// accumulated time. Returns the number of fixed ticks run.
    pub fn update(&mut self, frame_dt: f32, input: &ControllerInput) -> u32 {
        {
            let mut body = PlayerBody::new(&mut self.physics, self.player, &self.body_config);
            self.controller.on_tick(frame_dt, input, &mut body);
        }

        self.timestep.accumulate(frame_dt);

        let dt = self.timestep.dt();
        let mut ticks_run = 0;
        while self.timestep.consume_tick() {
            let mut body = PlayerBody::new(&mut self.physics, self.player, &self.body_config);
            self.controller.on_fixed_tick(dt, &mut body);
            self.physics.step();
            ticks_run += 1;
        }

        if self.position().y < self.kill_height {
            self.respawn();
        }

        ticks_run
    }

    pub fn respawn(&mut self) {
        log::info!("Player fell below {:.1}, respawning", self.kill_height);
        self.physics.set_body_position(self.player, self.spawn);
        self.physics.set_body_velocity(self.player, Vec3::ZERO);
    }

    pub fn controller(&self) -> &CharacterController {
        &self.controller
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn player(&self) -> RigidBodyHandle {
        self.player
    }

    pub fn tick_rate(&self) -> u32 {
        self.timestep.tick_rate()
    }

    pub fn position(&self) -> Vec3 {
        self.physics.body_position(self.player).unwrap_or(Vec3::ZERO)
    }

    pub fn velocity(&self) -> Vec3 {
        self.physics.body_velocity(self.player).unwrap_or(Vec3::ZERO)
    }

    pub fn readout(&self) -> Readout {
        let jumps = self.controller.jumps();
        let look = self.controller.look();
        Readout {
            state: self.controller.state(),
            grounded: self.controller.is_grounded(),
            remaining_jumps: jumps.remaining(),
            max_jumps: jumps.jump_count(),
            next_jump_force: jumps.next_force(),
            flat_speed: self.controller.flat_speed(),
            position: self.position(),
            yaw: look.yaw,
            pitch: look.pitch,
            gravity: self.physics.gravity_magnitude(),
        }
    }
}

impl Tunable for Sandbox {
    fn get(&self, param: TuningParam) -> f32 {
        let c = &self.controller;
        match param {
            TuningParam::WalkSpeed => c.walk_speed(),
            TuningParam::SprintMultiplier => c.sprint_multiplier(),
            TuningParam::GroundDrag => c.ground_drag(),
            TuningParam::AirDrag => c.air_drag(),
            TuningParam::AirControlMultiplier => c.air_control_multiplier(),
            TuningParam::InitialJumpForce => c.initial_jump_force(),
            TuningParam::JumpDampeningFactor => c.jump_dampening_factor(),
            TuningParam::JumpCount => c.jump_count() as f32,
            TuningParam::Gravity => self.physics.gravity_magnitude(),
        }
    }

    fn set(&mut self, param: TuningParam, value: f32) -> Result<(), TuneError> {
        if !value.is_finite() {
            log::warn!("Rejected non-finite value for {}", param.label());
            return Err(TuneError::NonFinite { param, value });
        }

        let value = param.normalize(value);
        let c = &mut self.controller;
        match param {
            TuningParam::WalkSpeed => c.set_walk_speed(value),
            TuningParam::SprintMultiplier => c.set_sprint_multiplier(value),
            TuningParam::GroundDrag => c.set_ground_drag(value),
            TuningParam::AirDrag => c.set_air_drag(value),
            TuningParam::AirControlMultiplier => c.set_air_control_multiplier(value),
            TuningParam::InitialJumpForce => c.set_initial_jump_force(value),
            TuningParam::JumpDampeningFactor => c.set_jump_dampening_factor(value),
            TuningParam::JumpCount => c.set_jump_count(value as i32),
            TuningParam::Gravity => self.physics.set_gravity_magnitude(value),
        }

        if param.is_jump_param() {
            self.controller.rebuild_jump_sequence();
        }

        log::debug!("{} set to {}", param.label(), value);
        Ok(())
    }
}
