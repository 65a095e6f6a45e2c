use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapObjectKind {
    Ground,
    Platform,
    Wall,
}

#[derive(Debug, Clone)]
pub struct MapObject {
    pub kind: MapObjectKind,
    pub position: Vec3,
    pub half_extents: Vec3,
}

impl MapObject {
    pub fn ground(position: Vec3, half_size: f32) -> Self {
        Self {
            kind: MapObjectKind::Ground,
            position,
            half_extents: Vec3::new(half_size, 0.1, half_size),
        }
    }

    pub fn platform(position: Vec3, half_extents: Vec3) -> Self {
        Self {
            kind: MapObjectKind::Platform,
            position,
            half_extents,
        }
    }

    pub fn wall(position: Vec3, half_extents: Vec3) -> Self {
        Self {
            kind: MapObjectKind::Wall,
            position,
            half_extents,
        }
    }

    /// Whether standing on this object counts as ground contact.
    pub fn is_ground_layer(&self) -> bool {
        !matches!(self.kind, MapObjectKind::Wall)
    }
}
