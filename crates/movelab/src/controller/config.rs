use crate::jump::JumpProfile;
use crate::look::LookConfig;
use crate::movement::MotionParameters;
use crate::physics::BodyConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerConfig {
    pub motion: MotionParameters,
    pub jump: JumpProfile,
    pub look: LookConfig,
    pub body: BodyConfig,
}
