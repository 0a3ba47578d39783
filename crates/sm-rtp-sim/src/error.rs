//! Simulation error types

use thiserror::Error;

use sm_slot_core::{ConfigError, EngineError};

/// Errors from configuring or driving a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("trial count must be positive")]
    ZeroTrials,

    #[error("stake per trial must be a positive finite amount, got {0}")]
    InvalidStake(f64),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
