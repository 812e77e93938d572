//! Errors raised while validating tunables and command-line input.
//!
//! The clipper and collision queries themselves never fail; these only
//! guard the values fed into them.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("radius components must be positive and finite, got ({x}, {y}, {z})")]
    NonPositiveRadius { x: f32, y: f32, z: f32 },

    #[error("max slide iterations must be at least 1")]
    ZeroIterations,

    #[error("{name} must be positive and finite, got {value}")]
    InvalidTolerance { name: &'static str, value: f32 },

    #[error("friction must lie in [0, 1], got {0}")]
    InvalidFriction(f32),

    #[error("expected three comma-separated numbers, got {0:?}")]
    ParseVector(String),

    #[error("unknown collision mode {0:?} (expected none, stop or slide)")]
    ParseMode(String),
}
