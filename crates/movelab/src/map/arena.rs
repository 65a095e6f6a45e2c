use glam::Vec3;

use crate::physics::PhysicsWorld;

use super::{MapObject, MapObjectKind};

/// Flat floor with a staircase of platforms to jump onto and a wall that
/// does not count as ground.
pub struct Arena {
    objects: Vec<MapObject>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    pub const GROUND_SIZE: f32 = 50.0;
    pub const GROUND_Y: f32 = 0.0;
    pub const SPAWN: Vec3 = Vec3::new(0.0, 3.0, 0.0);

    pub fn new() -> Self {
        let mut objects = vec![MapObject::ground(
            Vec3::new(0.0, Self::GROUND_Y, 0.0),
            Self::GROUND_SIZE,
        )];

        Self::add_platforms(&mut objects);
        Self::add_walls(&mut objects);

        Self { objects }
    }

    fn add_platforms(objects: &mut Vec<MapObject>) {
        for step in 1..=4 {
            let height = step as f32 * 0.75;
            objects.push(MapObject::platform(
                Vec3::new(6.0 + step as f32 * 3.0, height / 2.0, 6.0),
                Vec3::new(1.25, height / 2.0, 1.25),
            ));
        }
    }

    fn add_walls(objects: &mut Vec<MapObject>) {
        objects.push(MapObject::wall(
            Vec3::new(-8.0, 2.0, 0.0),
            Vec3::new(0.25, 2.0, 6.0),
        ));
    }

    pub fn objects(&self) -> &[MapObject] {
        &self.objects
    }

    pub fn build(&self, physics: &mut PhysicsWorld) {
        for object in &self.objects {
            match object.kind {
                MapObjectKind::Ground => {
                    physics.add_ground(object.position.y, object.half_extents.x);
                }
                MapObjectKind::Platform | MapObjectKind::Wall => {
                    physics.add_static_box(
                        object.position,
                        object.half_extents,
                        object.is_ground_layer(),
                    );
                }
            }
        }
    }

    /// Below this height the player has fallen off the arena.
    pub fn kill_height(&self) -> f32 {
        Self::GROUND_Y - 20.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_builds_ground_and_obstacles() {
        let arena = Arena::new();
        let mut physics = PhysicsWorld::default();

        arena.build(&mut physics);

        assert_eq!(physics.colliders.len(), arena.objects().len());
        assert!(arena.objects().iter().any(|o| !o.is_ground_layer()));
    }
}
