mod sandbox;
mod tick;

pub use sandbox::Sandbox;
pub use tick::FixedTimestep;
