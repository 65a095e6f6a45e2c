mod param;
mod readout;

pub use param::{TuneError, Tunable, TuningParam};
pub use readout::Readout;
