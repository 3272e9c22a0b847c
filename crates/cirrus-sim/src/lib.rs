//! CIRRUS Sim - Simulation harness for the cabin engine
//!
//! This crate provides:
//! - A scripted performance that emits realistic stream text
//! - Seeded stream corruption (splits, junk, mangled frames)
//! - An end-to-end harness running the full controller over a flight

pub mod integration;
pub mod noise;
pub mod script;

pub use integration::*;
pub use noise::*;
pub use script::*;
