//! Closed set of mutating operations, for callers that dispatch by value.

use crate::domain::{Amount, AssetId, Deposit, PoolKey, Shares, SwapOutcome, Withdrawal};

/// A mutating engine operation.
///
/// Executed with [`PoolEngine::execute`](super::PoolEngine::execute), which
/// forwards to the matching method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// See [`PoolEngine::create_pool`](super::PoolEngine::create_pool).
    CreatePool {
        /// First asset, in any order.
        asset_a: AssetId,
        /// Second asset, in any order.
        asset_b: AssetId,
        /// Fee in basis points.
        fee_bps: u32,
    },
    /// See [`PoolEngine::add_liquidity`](super::PoolEngine::add_liquidity).
    AddLiquidity {
        /// Target pool.
        pool: PoolKey,
        /// Most asset A the caller is willing to deposit.
        amount_a_desired: Amount,
        /// Most asset B the caller is willing to deposit.
        amount_b_desired: Amount,
        /// Least asset A that must be taken.
        min_a: Amount,
        /// Least asset B that must be taken.
        min_b: Amount,
    },
    /// See [`PoolEngine::remove_liquidity`](super::PoolEngine::remove_liquidity).
    RemoveLiquidity {
        /// Target pool.
        pool: PoolKey,
        /// Shares to burn.
        shares: Shares,
    },
    /// See [`PoolEngine::swap`](super::PoolEngine::swap).
    Swap {
        /// Target pool.
        pool: PoolKey,
        /// Exact input amount.
        amount_in: Amount,
        /// `true` to sell asset A for asset B.
        input_is_asset_a: bool,
        /// Least output accepted.
        min_out: Option<Amount>,
    },
}

impl Operation {
    /// Short name used in log records.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreatePool { .. } => "create_pool",
            Self::AddLiquidity { .. } => "add_liquidity",
            Self::RemoveLiquidity { .. } => "remove_liquidity",
            Self::Swap { .. } => "swap",
        }
    }
}

/// Result of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Key of the new pool.
    PoolCreated(PoolKey),
    /// Amounts taken and shares minted.
    LiquidityAdded(Deposit),
    /// Amounts paid and shares burned.
    LiquidityRemoved(Withdrawal),
    /// Amounts exchanged.
    Swapped(SwapOutcome),
}
