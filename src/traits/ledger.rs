//! The asset-custody seam between the engine and the outside world.
//!
//! The engine never holds balances itself. Every movement of an asset goes
//! through a [`Ledger`], which debits one account and credits another. Each
//! engine operation submits all of its movements as one batch through
//! [`Ledger::transfer_all`] before touching pool state.
//!
//! # Batch Atomicity
//!
//! A batch must apply completely or not at all. The provided
//! [`transfer_all`](Ledger::transfer_all) applies transfers in order and,
//! when one fails, reverses the ones already applied in reverse order.
//! Ledgers that can stage a batch natively should override it.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::TransferError;

/// A single movement of `amount` of `asset` from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transfer {
    /// Asset being moved.
    pub asset: AssetId,
    /// Debited account.
    pub from: AccountId,
    /// Credited account.
    pub to: AccountId,
    /// Quantity moved.
    pub amount: Amount,
}

impl Transfer {
    /// Creates a transfer.
    #[must_use]
    pub const fn new(asset: AssetId, from: AccountId, to: AccountId, amount: Amount) -> Self {
        Self {
            asset,
            from,
            to,
            amount,
        }
    }

    /// Returns the transfer that undoes this one.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            asset: self.asset,
            from: self.to,
            to: self.from,
            amount: self.amount,
        }
    }
}

/// The external transfer capability consumed by the engine.
///
/// Implementations must be shareable across threads: the engine calls the
/// ledger while holding one pool's lock, and operations on different pools
/// run concurrently.
///
/// # Implementors
///
/// - [`InMemoryLedger`](crate::ledger::InMemoryLedger): balances in a
///   hash map, with a natively atomic batch.
pub trait Ledger: Send + Sync {
    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// A zero `amount` must succeed without effect.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the ledger refuses the movement. A
    /// refused transfer must leave both balances unchanged.
    fn transfer(
        &self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Applies `batch` atomically.
    ///
    /// # Errors
    ///
    /// - The error of the first refused transfer, after every earlier
    ///   transfer has been reversed.
    /// - [`TransferError::RollbackIncomplete`] if a reversal was refused too.
    fn transfer_all(&self, batch: &[Transfer]) -> Result<(), TransferError> {
        for (index, step) in batch.iter().enumerate() {
            if let Err(err) = self.transfer(step.asset, step.from, step.to, step.amount) {
                for (undone, applied) in batch[..index].iter().rev().enumerate() {
                    let undo = applied.reversed();
                    if self
                        .transfer(undo.asset, undo.from, undo.to, undo.amount)
                        .is_err()
                    {
                        return Err(TransferError::RollbackIncomplete {
                            applied: index - undone,
                        });
                    }
                }
                return Err(err);
            }
        }
        Ok(())
    }
}
