//! Error types for the configuration and WASM boundaries.
//!
//! The simulation core itself is infallible; these only cover input that
//! arrives from outside the crate.

use thiserror::Error;

/// A raw tag byte that does not name a material.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown material tag {0}")]
pub struct UnknownMaterial(pub u8);

/// Errors raised when loading or validating a [`SimConfig`](crate::config::SimConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("brush radius must be at least 1, got {0}")]
    InvalidBrushRadius(i32),
    #[error("dimension {0} does not fit in an i32 coordinate")]
    DimensionTooLarge(usize),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
