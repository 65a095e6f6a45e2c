pub mod controller;
pub mod input;
pub mod jump;
pub mod look;
pub mod map;
pub mod movement;
pub mod physics;
pub mod simulation;
pub mod tuning;

pub use controller::{CharacterController, ControllerConfig};
pub use input::{ControllerInput, InputButtons};
pub use jump::{JumpProfile, JumpSequence};
pub use look::{LookConfig, LookState};
pub use map::{Arena, MapObject, MapObjectKind};
pub use movement::{
    MOVE_FORCE_SCALE, MotionParameters, MovementState, classify, effective_drag, effective_speed,
    lateral_force_scale, limit_flat_velocity,
};
pub use physics::{BodyConfig, CharacterBody, GroundProbe, PhysicsWorld, PlayerBody};
pub use simulation::{FixedTimestep, Sandbox};
pub use tuning::{Readout, TuneError, Tunable, TuningParam};

pub const DEFAULT_TICK_RATE: u32 = 60;
