use thiserror::Error;

use ev_behavior::BehaviorError;
use ev_core::EvError;
use ev_world::WorldError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] EvError),

    #[error("avoider error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("world error: {0}")]
    World(#[from] WorldError),
}

pub type SimResult<T> = Result<T, SimError>;
