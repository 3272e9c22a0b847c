//! Error types for the CIRRUS cabin engine

use thiserror::Error;

/// Core CIRRUS errors
///
/// Nothing in the engine is fatal to the process: frame problems are logged
/// and skipped at the extractor, unknown states fall back to defaults, and a
/// lost connection leaves the animation running on its last target. Only the
/// calibration store surfaces discrete failures to the caller.
#[derive(Error, Debug)]
pub enum CirrusError {
    // Config errors
    #[error("Invalid config document: {0}")]
    ConfigParse(String),

    #[error("Config storage error: {0}")]
    ConfigStore(String),

    // Stream errors
    #[error("Stream source error: {0}")]
    StreamSource(String),
}

/// Result type for CIRRUS operations
pub type CirrusResult<T> = Result<T, CirrusError>;
