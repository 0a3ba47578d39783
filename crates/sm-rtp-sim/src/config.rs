//! Simulation run configuration

use serde::{Deserialize, Serialize};

use sm_slot_core::{MachineConfig, SpinPolicy};

use crate::error::SimError;

/// Configuration for one Monte Carlo RTP run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of independent trials.
    pub trials: u64,

    /// Stake per trial, in currency units. An explicit value: never derived
    /// from the trial count.
    pub stake_per_trial: f64,

    /// Random seed for reproducible runs (None = OS entropy).
    pub seed: Option<u64>,

    /// Machine under test.
    pub machine: MachineConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 1_000_000,
            stake_per_trial: 0.10,
            seed: None,
            machine: MachineConfig::default(),
        }
    }
}

impl SimConfig {
    /// Short run for CI and sanity checks.
    pub fn quick() -> Self {
        Self {
            trials: 10_000,
            ..Default::default()
        }
    }

    /// Builder: set trial count
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Builder: set stake per trial
    pub fn with_stake(mut self, stake_per_trial: f64) -> Self {
        self.stake_per_trial = stake_per_trial;
        self
    }

    /// Builder: set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder: set the reel stepping policy
    pub fn with_policy(mut self, policy: SpinPolicy) -> Self {
        self.machine.policy = policy;
        self
    }

    /// Fail fast before the first trial.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.trials == 0 {
            return Err(SimError::ZeroTrials);
        }
        if !self.stake_per_trial.is_finite() || self.stake_per_trial <= 0.0 {
            return Err(SimError::InvalidStake(self.stake_per_trial));
        }
        self.machine.validate()?;
        Ok(())
    }
}
