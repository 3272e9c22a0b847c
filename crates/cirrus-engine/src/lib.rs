//! CIRRUS Engine - The state-driven parameter animation core
//!
//! Three cooperating pieces, all driven from one single-threaded tick loop:
//! - `Interpolator`: advances the live vector toward its target every tick
//! - `SequenceScheduler`: timed target overrides (takeoff, landing)
//! - `FlightController`: owns all mutable state, ingests the stream, ticks
//!
//! There is no locking discipline because there are no concurrent writers;
//! correctness depends on single-threaded event ordering.

pub mod controller;
pub mod interpolator;
pub mod sequence;

pub use controller::*;
pub use interpolator::*;
pub use sequence::*;
