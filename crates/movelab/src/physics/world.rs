use std::collections::HashSet;

use glam::Vec3;
use rapier3d::prelude::*;

use super::BodyConfig;

pub struct PhysicsWorld {
    pipeline: PhysicsPipeline,
    integration_parameters: IntegrationParameters,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    gravity: Vector,
    ground_layer: HashSet<ColliderHandle>,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DT)
    }
}

impl PhysicsWorld {
    pub const DEFAULT_DT: Real = 1.0 / 60.0;
    pub const DEFAULT_GRAVITY: Real = 20.0;

    pub fn new(dt: Real) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = dt;
        integration_parameters.min_ccd_dt = dt / 100.0;

        Self {
            pipeline: PhysicsPipeline::new(),
            integration_parameters,
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            gravity: Vector::new(0.0, -Self::DEFAULT_GRAVITY, 0.0),
            ground_layer: HashSet::new(),
        }
    }

    /// Advances one fixed step and clears user forces, so a force added
    /// before a step acts on that step only.
    pub fn step(&mut self) {
        self.pipeline.step(
            self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );

        for (_, body) in self.bodies.iter_mut() {
            body.reset_forces(false);
        }
    }

    pub fn gravity_magnitude(&self) -> Real {
        -self.gravity.y
    }

    /// Ambient gravity always points down; negative magnitudes are flipped.
    pub fn set_gravity_magnitude(&mut self, magnitude: Real) {
        self.gravity = Vector::new(0.0, -magnitude.abs(), 0.0);
    }

    pub fn add_player(&mut self, position: Vec3, config: &BodyConfig) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(Vector::new(position.x, position.y, position.z))
            .lock_rotations()
            .ccd_enabled(true)
            .build();

        let handle = self.bodies.insert(body);

        let half_segment = (config.height / 2.0 - config.radius).max(0.0);
        let collider = ColliderBuilder::capsule_y(half_segment, config.radius)
            .mass(config.mass)
            .friction(0.0)
            .build();

        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        handle
    }

    pub fn add_static_box(
        &mut self,
        position: Vec3,
        half_extents: Vec3,
        ground_layer: bool,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(Vector::new(position.x, position.y, position.z))
            .build();
        let handle = self.colliders.insert(collider);

        if ground_layer {
            self.ground_layer.insert(handle);
        }

        handle
    }

    pub fn add_ground(&mut self, y: Real, half_size: Real) -> ColliderHandle {
        self.add_static_box(
            Vec3::new(0.0, y, 0.0),
            Vec3::new(half_size, 0.1, half_size),
            true,
        )
    }

    pub fn is_ground_layer(&self, handle: ColliderHandle) -> bool {
        self.ground_layer.contains(&handle)
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn set_body_position(&mut self, handle: RigidBodyHandle, position: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle) {
            let current_rot = *body.rotation();
            let new_pose =
                Pose::from_parts(Vector::new(position.x, position.y, position.z), current_rot);
            body.set_position(new_pose, true);
        }
    }

    pub fn set_body_velocity(&mut self, handle: RigidBodyHandle, velocity: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_linvel(Vector::new(velocity.x, velocity.y, velocity.z), true);
        }
    }

    pub fn set_body_damping(&mut self, handle: RigidBodyHandle, damping: Real) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_linear_damping(damping.max(0.0));
        }
    }

    pub fn add_force(&mut self, handle: RigidBodyHandle, force: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.add_force(Vector::new(force.x, force.y, force.z), true);
        }
    }

    pub fn apply_impulse(&mut self, handle: RigidBodyHandle, impulse: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.apply_impulse(Vector::new(impulse.x, impulse.y, impulse.z), true);
        }
    }

    pub fn body_position(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(|b| {
            let t = b.translation();
            Vec3::new(t.x, t.y, t.z)
        })
    }

    pub fn body_velocity(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(|b| {
            let v = b.linvel();
            Vec3::new(v.x, v.y, v.z)
        })
    }

    /// Casts straight down from the body's center, ignoring the body itself
    /// and anything not on the ground layer.
    pub fn is_grounded(&self, handle: RigidBodyHandle, probe_distance: Real) -> bool {
        let Some(body) = self.bodies.get(handle) else {
            return false;
        };

        let on_ground_layer =
            |collider: ColliderHandle, _: &Collider| self.ground_layer.contains(&collider);
        let filter = QueryFilter::default()
            .exclude_rigid_body(handle)
            .predicate(&on_ground_layer);

        let query = self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        );

        let pos = body.translation();
        let ray = Ray::new(
            Vector::new(pos.x, pos.y, pos.z),
            Vector::new(0.0, -1.0, 0.0),
        );

        query.cast_ray(&ray, probe_distance, true).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_magnitude_round_trips_as_downward() {
        let mut physics = PhysicsWorld::default();

        physics.set_gravity_magnitude(35.0);
        assert_eq!(physics.gravity_magnitude(), 35.0);

        physics.set_gravity_magnitude(-12.0);
        assert_eq!(physics.gravity_magnitude(), 12.0);
    }

    #[test]
    fn ground_layer_membership_is_tracked() {
        let mut physics = PhysicsWorld::default();

        let ground = physics.add_ground(0.0, 10.0);
        let wall = physics.add_static_box(Vec3::new(3.0, 1.0, 0.0), Vec3::ONE, false);

        assert!(physics.is_ground_layer(ground));
        assert!(!physics.is_ground_layer(wall));
    }
}
