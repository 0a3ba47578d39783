//! Slot machine engine: the full rewind, settle and evaluate trial cycle

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::MachineConfig;
use crate::error::{ConfigError, EngineError};
use crate::motor::ReelMotors;
use crate::reels::{REEL_COUNT, ReelBank};
use crate::symbols::SymbolId;

/// Outcome of one settled spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Symbols on the middle payline after the reels locked.
    pub payline: [SymbolId; REEL_COUNT],
    /// Payout multiplier for a win, `None` for a loss.
    pub payout: Option<f64>,
    /// Motor steps each reel ran this spin.
    pub steps: [u32; REEL_COUNT],
}

impl SpinOutcome {
    pub fn is_win(&self) -> bool {
        self.payout.is_some()
    }
}

/// Classic 3x3 slot machine engine.
///
/// Owns the machine config, the reel window, the motor counters and the
/// random source, so independent engines can run side by side. The window
/// and motors are fixed-size arrays mutated in place; a trial allocates
/// nothing.
pub struct SlotEngine {
    config: MachineConfig,
    reels: ReelBank,
    motors: ReelMotors,
    rng: ChaCha8Rng,
    spin_count: u64,
}

impl SlotEngine {
    /// Create an engine seeded from OS entropy. Validates the config up
    /// front and fails fast on a bad one.
    pub fn new(config: MachineConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, ChaCha8Rng::from_os_rng())
    }

    /// Create a deterministic engine: identical seeds replay identical
    /// spin sequences.
    pub fn seeded(config: MachineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(config: MachineConfig, mut rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let reels = ReelBank::initialise(&config.alphabet, config.policy, &mut rng);
        Ok(Self {
            config,
            reels,
            motors: ReelMotors::default(),
            rng,
            spin_count: 0,
        })
    }

    /// Run one full trial: rewind the motors, step every running reel until
    /// all three lock, then evaluate the payline.
    pub fn spin(&mut self) -> Result<SpinOutcome, EngineError> {
        self.spin_count += 1;
        self.motors.rewind(&mut self.rng);
        let steps = self.motors.steps();

        while self.motors.any_running() {
            for reel in 0..REEL_COUNT {
                if self.motors.is_running(reel) {
                    self.reels
                        .step_reel(reel, &self.config.alphabet, self.config.policy, &mut self.rng);
                    self.motors.tick(reel);
                }
            }
        }

        let payline = self.reels.payline();
        let payout = self.config.paytable.evaluate_line(payline)?;
        Ok(SpinOutcome {
            payline,
            payout,
            steps,
        })
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// The settled window after the last spin.
    pub fn reels(&self) -> &ReelBank {
        &self.reels
    }

    pub fn spin_count(&self) -> u64 {
        self.spin_count
    }

    /// Reseed the random source. Does not reinitialise the reel window.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpinPolicy;
    use crate::motor::MIN_STEPS;

    #[test]
    fn test_seeded_engines_replay_identically() {
        let config = MachineConfig::default();
        let mut left = SlotEngine::seeded(config.clone(), 42).unwrap();
        let mut right = SlotEngine::seeded(config, 42).unwrap();

        for _ in 0..100 {
            assert_eq!(left.spin().unwrap(), right.spin().unwrap());
        }
        assert_eq!(left.reels(), right.reels());
    }

    #[test]
    fn test_spin_steps_obey_motor_ordering() {
        let mut engine = SlotEngine::seeded(MachineConfig::default(), 9).unwrap();
        for _ in 0..200 {
            let outcome = engine.spin().unwrap();
            let [first, second, third] = outcome.steps;
            assert!(first >= MIN_STEPS);
            assert!(first <= second && second <= third);
        }
    }

    #[test]
    fn test_payout_iff_payline_matches() {
        let config = MachineConfig::classic(SpinPolicy::Electronic);
        let paytable = config.paytable.clone();
        let mut engine = SlotEngine::seeded(config, 1234).unwrap();

        for _ in 0..500 {
            let outcome = engine.spin().unwrap();
            let [a, b, c] = outcome.payline;
            if a == b && b == c {
                assert_eq!(outcome.payout, paytable.multiplier(a));
            } else {
                assert_eq!(outcome.payout, None);
            }
        }
    }

    #[test]
    fn test_mechanical_window_stays_consecutive_after_settle() {
        let config = MachineConfig::classic(SpinPolicy::Mechanical);
        let band = config.alphabet.len() as SymbolId;
        let mut engine = SlotEngine::seeded(config, 77).unwrap();

        engine.spin().unwrap();
        let grid = engine.reels().grid();
        for column in grid {
            // Row 0 is the newest symbol; each row below is its predecessor
            // on the circular band.
            assert_eq!(column[0], (column[1] + 1) % band);
            assert_eq!(column[1], (column[2] + 1) % band);
        }
    }

    #[test]
    fn test_spin_count_tracks_trials() {
        let mut engine = SlotEngine::seeded(MachineConfig::default(), 2).unwrap();
        assert_eq!(engine.spin_count(), 0);
        for _ in 0..10 {
            engine.spin().unwrap();
        }
        assert_eq!(engine.spin_count(), 10);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = MachineConfig::default();
        config.paytable = crate::paytable::PayTable::new(vec![1.0]);
        assert!(SlotEngine::new(config).is_err());
    }
}
