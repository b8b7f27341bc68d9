//! 256-bit intermediates for `a * b / d`.
//!
//! Share and payout formulas multiply two `u128` quantities before dividing
//! (`total_shares * amount / reserve`, `reserve * shares / total_shares`).
//! The product is carried as a [`U256`], so overflow can only occur when the
//! final quotient itself does not fit in `u128`.

use ethnum::U256;

use crate::domain::Rounding;

/// Exact product of two `u128` values.
#[must_use]
pub fn full_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Narrows `value` to `u128`, or `None` if it does not fit.
#[must_use]
pub fn narrow(value: U256) -> Option<u128> {
    if value > U256::from(u128::MAX) {
        None
    } else {
        Some(value.as_u128())
    }
}

/// Computes `a * b / d` with a 256-bit intermediate product.
///
/// Returns `None` if `d == 0` or the quotient exceeds `u128`.
///
/// # Examples
///
/// ```
/// use hydra_pool_engine::domain::Rounding;
/// use hydra_pool_engine::math::mul_div;
///
/// assert_eq!(mul_div(707_106, 5_000, 1_000_000, Rounding::Down), Some(3_535));
/// assert_eq!(mul_div(u128::MAX, u128::MAX, u128::MAX, Rounding::Up), Some(u128::MAX));
/// ```
#[must_use]
pub fn mul_div(a: u128, b: u128, d: u128, rounding: Rounding) -> Option<u128> {
    if d == 0 {
        return None;
    }
    let divisor = U256::from(d);
    let product = full_mul(a, b);
    let quotient = product / divisor;
    // The product is at most (2^128 - 1)^2, so the increment cannot wrap.
    let quotient = match rounding {
        Rounding::Up if product % divisor != U256::ZERO => quotient + U256::ONE,
        _ => quotient,
    };
    narrow(quotient)
}
