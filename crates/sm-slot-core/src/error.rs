//! Error types for the slot engine

use thiserror::Error;

use crate::symbols::SymbolId;

/// Configuration problems caught before any trial runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("symbol alphabet is empty")]
    EmptyAlphabet,

    #[error("duplicate symbol `{0}` in alphabet")]
    DuplicateSymbol(String),

    #[error("alphabet has {0} symbols, the engine supports at most 256")]
    AlphabetTooLarge(usize),

    #[error("paytable has {got} entries for {expected} symbols")]
    PaytableSize { expected: usize, got: usize },

    #[error("payout for `{symbol}` must be a positive finite multiplier, got {value}")]
    InvalidPayout { symbol: String, value: f64 },

    #[error("invalid machine config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invariant violations inside the spin cycle. Not user-recoverable.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The alphabet and paytable drifted out of sync.
    #[error("no paytable entry for symbol id {symbol} on the payline")]
    MissingPayout { symbol: SymbolId },
}
