//! # sm-rtp-sim: Monte Carlo RTP measurement for SpinMark
//!
//! Drives large batches of independent trials against the `sm-slot-core`
//! engine and reduces them to a summary report: win and loss counts, total
//! payout against total stake, and the estimated Return to Player.
//!
//! The trial loop is single threaded, fully synchronous and performs no I/O.
//! Callers who want progress feedback attach a callback at a cadence of
//! their choosing; the loop never needs it for correctness.

pub mod config;
pub mod error;
pub mod report;
pub mod runner;

pub use config::*;
pub use error::*;
pub use report::*;
pub use runner::*;
