//! Liquidity share units.

use core::fmt;

/// A count of liquidity shares in a pool.
///
/// Shares are a claim on a proportional slice of both reserves. They are
/// kept distinct from [`Amount`](super::Amount) so that a share count can
/// never be passed where an asset quantity is expected.
///
/// # Examples
///
/// ```
/// use hydra_pool_engine::domain::Shares;
///
/// let minted = Shares::new(706_106);
/// let locked = Shares::new(1_000);
/// assert_eq!(minted.checked_add(&locked), Some(Shares::new(707_106)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_default() {
        assert!(Shares::ZERO.is_zero());
        assert_eq!(Shares::default(), Shares::ZERO);
    }

    #[test]
    fn checked_ops() {
        let a = Shares::new(3_535);
        assert_eq!(a.checked_sub(&Shares::new(3_536)), None);
        assert_eq!(Shares::new(u128::MAX).checked_add(&Shares::new(1)), None);
    }
}
