//! World error type.

use thiserror::Error;

use ev_core::{EntityId, EvError};

/// Errors produced by `ev-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("entity {0} not found in world")]
    EntityNotFound(EntityId),

    #[error("entity {0} is static and cannot be moved")]
    StaticEntity(EntityId),

    #[error("entity table is full ({0} rows)")]
    TooManyEntities(usize),

    #[error(transparent)]
    Core(#[from] EvError),
}

pub type WorldResult<T> = Result<T, WorldError>;
