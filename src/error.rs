//! Unified error types for the pool engine.
//!
//! Every fallible operation in the crate returns [`AmmError`]. Failures
//! raised by the external ledger are carried as [`TransferError`] inside
//! [`AmmError::TransferFailed`].

use thiserror::Error;

use crate::domain::{AccountId, Amount, AssetId};

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Errors produced by the pool engine.
///
/// Variants up to [`TransferFailed`](Self::TransferFailed) form the
/// caller-facing taxonomy. The remaining variants cover arithmetic and
/// validation failures that can only be reached with out-of-range inputs.
#[derive(Debug, Error)]
pub enum AmmError {
    /// A pool with the same normalized pair and fee tier already exists.
    #[error("pool already exists for this asset pair and fee tier")]
    DuplicatePool,

    /// No pool is registered under the requested key.
    #[error("pool not found")]
    PoolNotFound,

    /// A required amount or share count was zero.
    #[error("amount must be non-zero")]
    ZeroAmount,

    /// The first deposit does not cover the minimum-liquidity lock.
    #[error("initial deposit too small to cover the minimum liquidity lock")]
    InsufficientInitialLiquidity,

    /// A caller-provided minimum was not met.
    #[error("slippage limit exceeded")]
    SlippageExceeded,

    /// The caller holds fewer shares than requested.
    #[error("caller holds insufficient shares")]
    Unauthorized,

    /// The pool has no outstanding shares and cannot be traded against.
    #[error("pool has no liquidity")]
    EmptyPool,

    /// The operation would produce nothing after integer truncation.
    #[error("operation produces zero output")]
    InsufficientOutput,

    /// The external ledger rejected a transfer.
    #[error("asset transfer failed: {0}")]
    TransferFailed(#[from] TransferError),

    /// The two assets of a pair are identical.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// The fee is outside `0..=10_000` basis points.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Engine configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Engine configuration could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Failures reported by a [`Ledger`](crate::traits::Ledger).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The source account cannot cover the transfer.
    #[error("insufficient balance of {asset} in {account}: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Asset being moved.
        asset: AssetId,
        /// Debited account.
        account: AccountId,
        /// Amount requested.
        requested: Amount,
        /// Amount available.
        available: Amount,
    },

    /// Crediting the destination would overflow its balance.
    #[error("balance overflow of {asset} in {account}")]
    BalanceOverflow {
        /// Asset being moved.
        asset: AssetId,
        /// Credited account.
        account: AccountId,
    },

    /// The ledger refused the transfer for an environment-specific reason.
    #[error("transfer rejected: {0}")]
    Rejected(&'static str),

    /// A failed batch could not be fully compensated.
    #[error("rollback incomplete after {applied} applied transfers")]
    RollbackIncomplete {
        /// Number of transfers that were applied and not reverted.
        applied: usize,
    },
}
