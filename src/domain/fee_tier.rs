//! Pool fee tiers built on [`BasisPoints`].

use core::fmt;

use super::{Amount, BasisPoints, Rounding};
use crate::error::AmmError;

/// The swap fee of a pool, fixed when the pool is created.
///
/// A `FeeTier` is always a valid percentage (`0..=10_000` bp); the fee tier
/// is part of the pool key, so two pools on the same pair may coexist at
/// different tiers.
///
/// # Examples
///
/// ```
/// use hydra_pool_engine::domain::{Amount, BasisPoints, FeeTier};
///
/// let tier = FeeTier::new(BasisPoints::new(500)).expect("valid fee");
/// let net = tier.net_of_fee(Amount::new(100_000)).expect("no overflow");
/// assert_eq!(net, Amount::new(95_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.05% fee (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee (30 bp).
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// 5.00% fee (500 bp).
    pub const TIER_5_00_PERCENT: Self = Self(BasisPoints::new(500));

    /// Creates a fee tier, rejecting rates above 100%.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `basis_points > 10_000`.
    pub fn new(basis_points: BasisPoints) -> crate::error::Result<Self> {
        if !basis_points.is_valid_percent() {
            return Err(AmmError::InvalidFee("fee must be at most 10000 bps"));
        }
        Ok(Self(basis_points))
    }

    /// Creates a fee tier from a raw basis-point count.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `bps > 10_000`.
    pub fn from_bps(bps: u32) -> crate::error::Result<Self> {
        Self::new(BasisPoints::new(bps))
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns the input that takes part in pricing:
    /// `floor(amount * (10_000 - fee) / 10_000)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] only if an invariant of the type is
    /// broken.
    pub fn net_of_fee(&self, amount: Amount) -> crate::error::Result<Amount> {
        let complement = self
            .0
            .complement()
            .ok_or(AmmError::InvalidFee("fee above 100%"))?;
        complement.apply(amount, Rounding::Down)
    }

    /// Returns the portion of `amount` withheld as fee, `amount - net_of_fee(amount)`.
    ///
    /// # Errors
    ///
    /// Same as [`net_of_fee`](Self::net_of_fee).
    pub fn fee_portion(&self, amount: Amount) -> crate::error::Result<Amount> {
        let net = self.net_of_fee(amount)?;
        amount
            .checked_sub(&net)
            .ok_or(AmmError::Underflow("fee portion underflow"))
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
