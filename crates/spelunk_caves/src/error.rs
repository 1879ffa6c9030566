//! # Cave Error Types
//!
//! Errors raised at the edges of the decorator: loading configuration and
//! parsing debug overrides. Decorating a chunk never fails.

use thiserror::Error;

/// Errors that can occur while setting up cave decoration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaveError {
    /// Configuration parsed but holds unusable values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read or parsed.
    #[error("failed to read configuration {path}: {reason}")]
    ConfigRead {
        /// File that was being read.
        path: String,
        /// Underlying I/O or TOML error.
        reason: String,
    },

    /// Biome override named a type that does not exist.
    #[error("unknown biome type: {0}")]
    UnknownBiomeType(String),
}

/// Result type for cave decoration setup.
pub type CaveResult<T> = Result<T, CaveError>;
