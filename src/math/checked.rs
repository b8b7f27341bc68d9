//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning `checked_*` methods of
//! [`Amount`] and [`Shares`] into [`Result`](crate::error::Result)s carrying
//! a specific [`AmmError`] variant, so pool code can use `?` throughout.
//!
//! # Examples
//!
//! ```
//! use hydra_pool_engine::domain::Amount;
//! use hydra_pool_engine::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000_000);
//! assert!(reserve.safe_add(&Amount::new(5_000)).is_ok());
//! assert!(reserve.safe_sub(&Amount::new(2_000_000)).is_err());
//! ```

use crate::domain::{Amount, Rounding, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] on overflow.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Computes `self * numerator / denominator` with a 256-bit intermediate.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
    fn safe_mul_div(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self, AmmError>;
}

fn mul_div_checked(
    value: u128,
    numerator: u128,
    denominator: u128,
    rounding: Rounding,
    context: &'static str,
) -> Result<u128, AmmError> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    super::mul_div(value, numerator, denominator, rounding).ok_or(AmmError::Overflow(context))
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul_div(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        mul_div_checked(
            self.get(),
            numerator,
            denominator,
            rounding,
            "amount mul_div overflow",
        )
        .map(Amount::new)
    }
}

// ---------------------------------------------------------------------------
// Shares
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share subtraction underflow"))
    }

    #[inline]
    fn safe_mul_div(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        mul_div_checked(
            self.get(),
            numerator,
            denominator,
            rounding,
            "share mul_div overflow",
        )
        .map(Shares::new)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn amount_errors_are_specific() {
        assert!(matches!(
            Amount::MAX.safe_add(&Amount::new(1)),
            Err(AmmError::Overflow(_))
        ));
        assert!(matches!(
            Amount::ZERO.safe_sub(&Amount::new(1)),
            Err(AmmError::Underflow(_))
        ));
        assert!(matches!(
            Amount::new(1).safe_mul_div(1, 0, Rounding::Down),
            Err(AmmError::DivisionByZero)
        ));
        assert!(matches!(
            Amount::MAX.safe_mul_div(3, 2, Rounding::Down),
            Err(AmmError::Overflow(_))
        ));
    }

    #[test]
    fn share_mul_div_uses_wide_product() {
        // total_shares * amount overflows u128 but the quotient does not.
        let total = Shares::new(u128::MAX / 2);
        let Ok(minted) = total.safe_mul_div(1u128 << 100, 1u128 << 101, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(minted, Shares::new(u128::MAX / 4));
    }

    #[test]
    fn share_sub_underflow() {
        assert!(matches!(
            Shares::new(1).safe_sub(&Shares::new(2)),
            Err(AmmError::Underflow(_))
        ));
    }
}
