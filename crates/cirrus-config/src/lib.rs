//! CIRRUS Config - Calibration and palette persistence
//!
//! Projector calibration is hand-tuned per installation and must survive a
//! reload even when the saved document is partial, legacy-shaped, or missing
//! entirely: loading always yields a complete config by filling gaps from
//! defaults, never by failing.

pub mod calibration;
pub mod palettes;
pub mod store;

pub use calibration::*;
pub use palettes::*;
pub use store::*;
