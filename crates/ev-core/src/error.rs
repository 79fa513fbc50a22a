//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `EvError` as one variant
//! via `#[from]`.

use thiserror::Error;

use crate::EntityId;

/// The top-level error type for `ev-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EvError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ev-*` crates.
pub type EvResult<T> = Result<T, EvError>;
