//! The constant-product invariant `k = reserve_a * reserve_b`.

use core::fmt;

use ethnum::U256;

use super::full_mul;
use crate::domain::Amount;

/// The exact 256-bit product of a pool's two reserves.
///
/// Comparisons are exact, so `k_after >= k_before` checks never lose
/// precision and never overflow.
///
/// # Examples
///
/// ```
/// use hydra_pool_engine::domain::Amount;
/// use hydra_pool_engine::math::Invariant;
///
/// let before = Invariant::of(Amount::new(1_000_000), Amount::new(500_000));
/// let after = Invariant::of(Amount::new(1_100_000), Amount::new(456_622));
/// assert!(after > before);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Invariant(U256);

impl Invariant {
    /// Computes `reserve_a * reserve_b`.
    #[must_use]
    pub fn of(reserve_a: Amount, reserve_b: Amount) -> Self {
        Self(full_mul(reserve_a.get(), reserve_b.get()))
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_past_u128() {
        let small = Invariant::of(Amount::MAX, Amount::new(1));
        let large = Invariant::of(Amount::MAX, Amount::new(2));
        assert!(large > small);
        assert!(Invariant::of(Amount::MAX, Amount::MAX) > large);
    }

    #[test]
    fn display_is_decimal() {
        let k = Invariant::of(Amount::new(1_000_000), Amount::new(500_000));
        assert_eq!(k.to_string(), "500000000000");
        let wide = Invariant::of(Amount::new(1u128 << 64), Amount::new(1u128 << 64));
        assert_eq!(wide.to_string(), "340282366920938463463374607431768211456");
    }
}
