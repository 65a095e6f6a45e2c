use movelab::{ControllerConfig, DEFAULT_TICK_RATE};

#[derive(Debug, Clone)]
pub struct SandboxConfig {
    pub tick_rate: u32,
    /// Simulated frame rate for the headless run.
    pub frame_rate: u32,
    pub headless_seconds: f32,
    pub gravity: Option<f32>,
    pub controller: ControllerConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            frame_rate: 144,
            headless_seconds: 5.0,
            gravity: None,
            controller: ControllerConfig::default(),
        }
    }
}
