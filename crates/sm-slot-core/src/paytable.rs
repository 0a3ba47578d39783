//! Paytable and payline evaluation

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EngineError};
use crate::reels::REEL_COUNT;
use crate::symbols::{Alphabet, SymbolId};

/// Payout multipliers for a three-of-a-kind line, one entry per symbol,
/// indexed by rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayTable {
    multipliers: Vec<f64>,
}

impl PayTable {
    /// Create a paytable from per-rank multipliers. Validated against an
    /// alphabet separately, since the two are configured independently.
    pub fn new(multipliers: Vec<f64>) -> Self {
        Self { multipliers }
    }

    /// The classic cabinet table: 1.00 for three cherries up to 75.00 for
    /// the top symbol, strictly increasing with rank.
    pub fn classic() -> Self {
        Self::new(vec![
            1.00, 1.20, 2.00, 2.40, 3.00, 4.00, 5.00, 7.00, 10.00, 15.00, 20.00, 40.00, 75.00,
        ])
    }

    /// Check the table covers the alphabet with sane multipliers.
    pub fn validate(&self, alphabet: &Alphabet) -> Result<(), ConfigError> {
        if self.multipliers.len() != alphabet.len() {
            return Err(ConfigError::PaytableSize {
                expected: alphabet.len(),
                got: self.multipliers.len(),
            });
        }
        for (id, &value) in self.multipliers.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                let symbol = alphabet
                    .name(id as SymbolId)
                    .unwrap_or("<unknown>")
                    .to_string();
                return Err(ConfigError::InvalidPayout { symbol, value });
            }
        }
        Ok(())
    }

    /// Multiplier paid for three of the given symbol.
    pub fn multiplier(&self, id: SymbolId) -> Option<f64> {
        self.multipliers.get(id as usize).copied()
    }

    /// Evaluate the fixed middle payline.
    ///
    /// Three identical symbols pay that symbol's multiplier; anything else
    /// is a loss. A matched symbol with no table entry means the alphabet
    /// and paytable are out of sync and the run must abort.
    pub fn evaluate_line(&self, line: [SymbolId; REEL_COUNT]) -> Result<Option<f64>, EngineError> {
        if line[0] != line[1] || line[1] != line[2] {
            return Ok(None);
        }
        match self.multiplier(line[0]) {
            Some(value) => Ok(Some(value)),
            None => Err(EngineError::MissingPayout { symbol: line[0] }),
        }
    }

    /// Number of table entries.
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }
}
