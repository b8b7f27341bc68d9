//! Hash-map backed ledger for tests, demos and embedding.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::TransferError;
use crate::traits::{Ledger, Transfer};

type Balances = HashMap<(AssetId, AccountId), Amount>;

/// A [`Ledger`] that keeps every balance in memory.
///
/// Batches are staged on a copy of the touched balances and written back
/// only when every transfer succeeded, so [`transfer_all`](Ledger::transfer_all)
/// never needs compensation.
///
/// # Examples
///
/// ```
/// use hydra_pool_engine::domain::{AccountId, Amount, AssetId};
/// use hydra_pool_engine::ledger::InMemoryLedger;
/// use hydra_pool_engine::traits::Ledger;
///
/// let ledger = InMemoryLedger::new();
/// let usd = AssetId::from_label("usd");
/// let (alice, bob) = (AccountId::from_label("alice"), AccountId::from_label("bob"));
///
/// ledger.mint(usd, alice, Amount::new(100)).expect("mint");
/// ledger.transfer(usd, alice, bob, Amount::new(40)).expect("funded");
/// assert_eq!(ledger.balance(usd, bob), Amount::new(40));
/// assert!(ledger.transfer(usd, bob, alice, Amount::new(41)).is_err());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: Mutex<Balances>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `account` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::BalanceOverflow`] if the balance would overflow.
    pub fn mint(
        &self,
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let mut balances = self.balances.lock();
        let entry = balances.entry((asset, account)).or_default();
        *entry = entry
            .checked_add(&amount)
            .ok_or(TransferError::BalanceOverflow { asset, account })?;
        Ok(())
    }

    /// Returns the balance of `asset` held by `account`.
    pub fn balance(&self, asset: AssetId, account: AccountId) -> Amount {
        self.balances
            .lock()
            .get(&(asset, account))
            .copied()
            .unwrap_or_default()
    }

    /// Returns the sum of every account's balance of `asset`.
    ///
    /// Saturates at [`Amount::MAX`].
    pub fn total_supply(&self, asset: AssetId) -> Amount {
        self.balances
            .lock()
            .iter()
            .filter(|((a, _), _)| *a == asset)
            .fold(Amount::ZERO, |acc, (_, v)| {
                acc.checked_add(v).unwrap_or(Amount::MAX)
            })
    }
}

/// Applies one transfer to `balances`, leaving them untouched on failure.
fn apply(balances: &mut Balances, step: &Transfer) -> Result<(), TransferError> {
    if step.amount.is_zero() || step.from == step.to {
        return Ok(());
    }

    let available = balances
        .get(&(step.asset, step.from))
        .copied()
        .unwrap_or_default();
    let debited = available
        .checked_sub(&step.amount)
        .ok_or(TransferError::InsufficientBalance {
            asset: step.asset,
            account: step.from,
            requested: step.amount,
            available,
        })?;

    let credited = balances
        .get(&(step.asset, step.to))
        .copied()
        .unwrap_or_default()
        .checked_add(&step.amount)
        .ok_or(TransferError::BalanceOverflow {
            asset: step.asset,
            account: step.to,
        })?;

    balances.insert((step.asset, step.from), debited);
    balances.insert((step.asset, step.to), credited);
    Ok(())
}

impl Ledger for InMemoryLedger {
    fn transfer(
        &self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        apply(
            &mut self.balances.lock(),
            &Transfer::new(asset, from, to, amount),
        )
    }

    fn transfer_all(&self, batch: &[Transfer]) -> Result<(), TransferError> {
        let mut balances = self.balances.lock();

        // Stage only the touched entries.
        let mut staged: Balances = HashMap::with_capacity(batch.len() * 2);
        for step in batch {
            for account in [step.from, step.to] {
                let key = (step.asset, account);
                if let Some(v) = balances.get(&key) {
                    staged.insert(key, *v);
                }
            }
        }
        for step in batch {
            apply(&mut staged, step)?;
        }

        balances.extend(staged);
        Ok(())
    }
}
