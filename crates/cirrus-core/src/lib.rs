//! CIRRUS Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the CIRRUS cabin engine:
//! - Flight time and the monotonic clock
//! - Phase, flight status and connection state
//! - The live and target parameter vectors
//! - The performance-state effect catalog and the target mapper
//! - Error types

pub mod effects;
pub mod error;
pub mod flight;
pub mod mapper;
pub mod time;
pub mod vibe;

pub use effects::*;
pub use error::*;
pub use flight::*;
pub use mapper::*;
pub use time::*;
pub use vibe::*;
