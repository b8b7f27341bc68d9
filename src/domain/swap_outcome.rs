//! Outcome of a swap.

use super::{Amount, SwapDirection};
use crate::error::AmmError;

/// Amounts exchanged by one swap.
///
/// `fee` is the part of `amount_in` excluded from pricing. It is not sent
/// anywhere: the full `amount_in` enters the reserve, so the fee is
/// retained by the pool for its liquidity providers.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee <= amount_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapOutcome {
    /// Creates a validated `SwapOutcome`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientOutput`] if `amount_out` is zero.
    /// - [`AmmError::Overflow`] if `fee` exceeds `amount_in`.
    pub fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutput);
        }
        if fee > amount_in {
            return Err(AmmError::Overflow("fee exceeds amount_in"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the input amount paid by the caller.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount paid to the caller.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee portion retained in the pool.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_legs() {
        let d = SwapDirection::AToB;
        assert!(matches!(
            SwapOutcome::new(d, Amount::ZERO, Amount::new(1), Amount::ZERO),
            Err(AmmError::ZeroAmount)
        ));
        assert!(matches!(
            SwapOutcome::new(d, Amount::new(1), Amount::ZERO, Amount::ZERO),
            Err(AmmError::InsufficientOutput)
        ));
    }

    #[test]
    fn fee_may_equal_input() {
        let out = SwapOutcome::new(
            SwapDirection::BToA,
            Amount::new(10),
            Amount::new(1),
            Amount::new(10),
        );
        assert!(out.is_ok());
    }
}
