//! Read-only view of a pool's state.

use super::{Amount, AssetPair, FeeTier, PoolKey, Shares};
use crate::math::Invariant;

/// A consistent copy of one pool's state, taken under the pool lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolSnapshot {
    /// Pool key.
    pub key: PoolKey,
    /// Normalized asset pair.
    pub pair: AssetPair,
    /// Fee tier fixed at creation.
    pub fee_tier: FeeTier,
    /// Reserve of asset A.
    pub reserve_a: Amount,
    /// Reserve of asset B.
    pub reserve_b: Amount,
    /// Outstanding shares, including the locked minimum.
    pub total_shares: Shares,
    /// Lifetime swap fees retained in asset A.
    pub fees_a: Amount,
    /// Lifetime swap fees retained in asset B.
    pub fees_b: Amount,
}

impl PoolSnapshot {
    /// Returns the constant-product invariant `reserve_a * reserve_b`.
    #[must_use]
    pub fn invariant(&self) -> Invariant {
        Invariant::of(self.reserve_a, self.reserve_b)
    }

    /// Returns `true` if the pool has never been seeded or was fully drained.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }
}
