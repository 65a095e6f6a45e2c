mod body;
mod world;

pub use body::{BodyConfig, CharacterBody, GroundProbe, PlayerBody};
pub use world::PhysicsWorld;
