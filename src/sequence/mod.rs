//! Timed presentation sequencing.

mod driver;

pub use driver::{SequenceTimings, Stage, TurnSequencer};
