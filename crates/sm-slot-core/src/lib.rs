//! # sm-slot-core: classic 3x3 slot machine engine for SpinMark
//!
//! Simulates the cabinet this project measures: a 3x3 symbol window, three
//! reel motors that wind down step by step and lock left to right, and a
//! single middle payline paying on three of a kind.
//!
//! ## Architecture
//!
//! ```text
//! SlotEngine
//!     ├── MachineConfig (alphabet, paytable, spin policy)
//!     ├── ReelBank (3x3 window + strip cursors)
//!     └── ReelMotors (remaining steps per reel)
//!           │
//!           v
//!     SpinOutcome (payline, payout)
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod motor;
pub mod paytable;
pub mod reels;
pub mod symbols;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use motor::*;
pub use paytable::*;
pub use reels::*;
pub use symbols::*;
