//! Sampling error type.

use thiserror::Error;

/// Errors produced by `ev-sampling`.
///
/// Only precondition violations are reported; every well-formed input
/// produces a (possibly single-point) sample set.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("attempts per active point must be at least 1")]
    ZeroAttempts,

    #[error("background grid of {cols}x{rows} cells exceeds the {max} cell limit")]
    DomainTooLarge { cols: usize, rows: usize, max: usize },
}

pub type SamplingResult<T> = Result<T, SamplingError>;
