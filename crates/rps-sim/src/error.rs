use rps_agent::AgentError;
use rps_core::RpsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] RpsError),

    #[error("group table invariant broken: {0}")]
    Invariant(#[from] AgentError),

    #[error("simulation thread panicked")]
    LoopPanicked,
}

pub type SimResult<T> = Result<T, SimError>;
