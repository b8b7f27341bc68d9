//! Receipts for liquidity deposits and withdrawals.

use super::{Amount, Shares};

/// A deposit: the amounts actually taken from the caller and the shares
/// credited in return.
///
/// `amount_a` and `amount_b` can be smaller than what the caller offered;
/// subsequent deposits only take the side that matches the pool ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deposit {
    /// Asset A taken from the caller.
    pub amount_a: Amount,
    /// Asset B taken from the caller.
    pub amount_b: Amount,
    /// Shares credited to the caller.
    pub shares_minted: Shares,
    /// Shares permanently locked in the pool by this deposit (first deposit only).
    pub shares_locked: Shares,
}

/// A withdrawal: the shares burned and the amounts paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Withdrawal {
    /// Asset A paid to the caller.
    pub amount_a: Amount,
    /// Asset B paid to the caller.
    pub amount_b: Amount,
    /// Shares debited from the caller and removed from supply.
    pub shares_burned: Shares,
}
