//! The Monte Carlo trial loop

use log::{debug, info};

use sm_slot_core::SlotEngine;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::report::{Accumulator, Report};

/// Drives N independent trials against one engine and accumulates results.
///
/// Owns all mutable run state exclusively, so multiple runners can execute
/// side by side (tests, sweeps over policies or paytables).
pub struct SimRunner {
    config: SimConfig,
    engine: SlotEngine,
    acc: Accumulator,
}

impl SimRunner {
    /// Validate the config and build the engine behind it.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let engine = match config.seed {
            Some(seed) => SlotEngine::seeded(config.machine.clone(), seed)?,
            None => SlotEngine::new(config.machine.clone())?,
        };
        Ok(Self {
            config,
            engine,
            acc: Accumulator::default(),
        })
    }

    /// Run every trial with no progress reporting.
    pub fn run(&mut self) -> Result<Report, SimError> {
        self.run_with_progress(0, |_, _| {})
    }

    /// Run every trial, invoking `on_progress(done, total)` after each block
    /// of `every` trials. `every == 0` disables the callback entirely; the
    /// loop itself never produces output.
    pub fn run_with_progress<F>(&mut self, every: u64, mut on_progress: F) -> Result<Report, SimError>
    where
        F: FnMut(u64, u64),
    {
        let trials = self.config.trials;
        info!(
            "starting RTP run: {} trials, {:?} policy, stake {} per trial",
            trials, self.config.machine.policy, self.config.stake_per_trial
        );

        for done in 1..=trials {
            let outcome = self.engine.spin()?;
            self.acc.record(&outcome);
            if every > 0 && done % every == 0 {
                on_progress(done, trials);
            }
        }

        let report = self.acc.report(self.config.stake_per_trial);
        debug!(
            "run complete: {} wins, {} losses, rtp {:.2}%",
            report.wins, report.losses, report.rtp_percent
        );
        Ok(report)
    }

    /// Totals recorded so far.
    pub fn accumulator(&self) -> &Accumulator {
        &self.acc
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

/// One-call entry point: validate, run all trials, report.
pub fn run_simulation(config: SimConfig) -> Result<Report, SimError> {
    SimRunner::new(config)?.run()
}
