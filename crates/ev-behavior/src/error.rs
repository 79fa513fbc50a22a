use thiserror::Error;

use ev_core::{EntityId, EvError};
use ev_sampling::SamplingError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("agent {0} has no navigator bound")]
    MissingNavigator(EntityId),

    #[error("agent {0} has no pursuer bound")]
    MissingPursuer(EntityId),

    #[error("pursuer {0} does not exist in the scene")]
    PursuerNotFound(EntityId),

    #[error("agent {0} does not exist in the scene")]
    AgentNotFound(EntityId),

    #[error("avoider ticked before initialize()")]
    NotInitialized,

    #[error("avoider is already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    Config(#[from] EvError),

    #[error("candidate sampling failed: {0}")]
    Sampling(#[from] SamplingError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
