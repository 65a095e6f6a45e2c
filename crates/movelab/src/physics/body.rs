use glam::Vec3;
use rapier3d::prelude::RigidBodyHandle;

use super::PhysicsWorld;

/// The rigid body the controller pushes around. Owned and stepped by the
/// host simulation.
pub trait CharacterBody {
    fn linear_velocity(&self) -> Vec3;
    fn set_linear_velocity(&mut self, velocity: Vec3);
    fn set_linear_damping(&mut self, damping: f32);
    /// Continuous force for the next step.
    fn add_force(&mut self, force: Vec3);
    fn add_impulse(&mut self, impulse: Vec3);
}

pub trait GroundProbe {
    fn probe_ground(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyConfig {
    pub height: f32,
    pub radius: f32,
    pub mass: f32,
    /// Extra probe length below the collider when checking for ground.
    pub ground_tolerance: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            height: 2.0,
            radius: 0.5,
            mass: 1.0,
            ground_tolerance: 0.2,
        }
    }
}

impl BodyConfig {
    pub fn probe_distance(&self) -> f32 {
        self.height / 2.0 + self.ground_tolerance
    }
}

/// A player body borrowed out of a [`PhysicsWorld`] for one tick.
pub struct PlayerBody<'a> {
    physics: &'a mut PhysicsWorld,
    handle: RigidBodyHandle,
    probe_distance: f32,
}

impl<'a> PlayerBody<'a> {
    pub fn new(physics: &'a mut PhysicsWorld, handle: RigidBodyHandle, config: &BodyConfig) -> Self {
        Self {
            physics,
            handle,
            probe_distance: config.probe_distance(),
        }
    }
}

impl CharacterBody for PlayerBody<'_> {
    fn linear_velocity(&self) -> Vec3 {
        self.physics.body_velocity(self.handle).unwrap_or(Vec3::ZERO)
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.physics.set_body_velocity(self.handle, velocity);
    }

    fn set_linear_damping(&mut self, damping: f32) {
        self.physics.set_body_damping(self.handle, damping);
    }

    fn add_force(&mut self, force: Vec3) {
        self.physics.add_force(self.handle, force);
    }

    fn add_impulse(&mut self, impulse: Vec3) {
        self.physics.apply_impulse(self.handle, impulse);
    }
}

impl GroundProbe for PlayerBody<'_> {
    fn probe_ground(&self) -> bool {
        self.physics.is_grounded(self.handle, self.probe_distance)
    }
}
