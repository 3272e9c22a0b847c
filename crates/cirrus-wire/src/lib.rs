//! CIRRUS Wire - State-update frames over the raw performance stream
//!
//! The instrument announces performance states as `VISUAL:{...}` text frames
//! embedded in a continuous, possibly noisy, byte stream. This crate turns
//! that stream back into discrete, fully-defaulted state-update events.

pub mod extractor;
pub mod update;

pub use extractor::*;
pub use update::*;
