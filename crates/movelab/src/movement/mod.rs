mod params;
mod state;

pub use params::{
    MOVE_FORCE_SCALE, MotionParameters, effective_drag, effective_speed, lateral_force_scale,
    limit_flat_velocity,
};
pub use state::{MovementState, classify};
