//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_pool_engine::prelude::*;
//! ```

pub use crate::config::{EngineConfig, MintRule};
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, Deposit, FeeTier, PoolKey, PoolSnapshot,
    Rounding, Shares, SwapDirection, SwapOutcome, Withdrawal,
};
pub use crate::engine::{Operation, Outcome, PoolEngine};
pub use crate::error::{AmmError, Result, TransferError};
pub use crate::ledger::InMemoryLedger;
pub use crate::math::CheckedArithmetic;
pub use crate::pools::ConstantProductPool;
pub use crate::traits::{Ledger, Transfer};
