//! Fundamental domain value types used throughout the engine.
//!
//! Identifiers (assets, accounts, pool keys), quantities (amounts, shares,
//! basis points) and the receipts returned by pool operations. All types
//! are newtypes with validated constructors where an invariant exists.

mod account_id;
mod amount;
mod asset_id;
mod asset_pair;
mod basis_points;
mod fee_tier;
mod liquidity_receipt;
mod pool_key;
mod pool_snapshot;
mod rounding;
mod shares;
mod swap_direction;
mod swap_outcome;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use fee_tier::FeeTier;
pub use liquidity_receipt::{Deposit, Withdrawal};
pub use pool_key::PoolKey;
pub use pool_snapshot::PoolSnapshot;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_direction::SwapDirection;
pub use swap_outcome::SwapOutcome;
