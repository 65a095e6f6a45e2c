mod character;
mod config;

pub use character::CharacterController;
pub use config::ControllerConfig;
