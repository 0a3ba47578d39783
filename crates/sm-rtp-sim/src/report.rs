//! Trial accounting and the final report

use serde::{Deserialize, Serialize};

use sm_slot_core::SpinOutcome;

/// Running totals across trials.
///
/// Monotone by construction: `total_payout` only grows, and only on a win,
/// by exactly the matched symbol's table value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Accumulator {
    pub trials: u64,
    pub wins: u64,
    pub losses: u64,
    pub total_payout: f64,
}

impl Accumulator {
    /// Record one settled trial.
    pub fn record(&mut self, outcome: &SpinOutcome) {
        self.trials += 1;
        match outcome.payout {
            Some(value) => {
                self.wins += 1;
                self.total_payout += value;
            }
            None => self.losses += 1,
        }
    }

    /// Reduce the totals to a report at the given stake per trial.
    pub fn report(&self, stake_per_trial: f64) -> Report {
        let total_stake = self.trials as f64 * stake_per_trial;
        let rtp = if total_stake > 0.0 {
            self.total_payout / total_stake * 100.0
        } else {
            0.0
        };
        Report {
            trials: self.trials,
            wins: self.wins,
            losses: self.losses,
            total_payout: self.total_payout,
            total_stake,
            house_take: total_stake - self.total_payout,
            rtp_percent: round2(rtp),
        }
    }
}

/// Aggregate result of a simulation run.
///
/// Raw decimals only; currency formatting belongs to the reporting front
/// end, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub trials: u64,
    pub wins: u64,
    pub losses: u64,
    pub total_payout: f64,
    pub total_stake: f64,
    /// Stakes kept by the house: `total_stake - total_payout`.
    pub house_take: f64,
    /// Return to player, percent, rounded to two decimal places.
    pub rtp_percent: f64,
}

impl Report {
    /// Share of trials that won, percent.
    pub fn hit_rate(&self) -> f64 {
        if self.trials > 0 {
            self.wins as f64 / self.trials as f64 * 100.0
        } else {
            0.0
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
