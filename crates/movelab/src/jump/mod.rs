mod profile;
mod sequence;

pub use profile::JumpProfile;
pub use sequence::JumpSequence;
