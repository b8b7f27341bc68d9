//! Canonically ordered pair of distinct assets.

use super::{AssetId, SwapDirection};
use crate::error::AmmError;

/// A pair of distinct assets, sorted so that `asset_a < asset_b`.
///
/// `(A, B)` and `(B, A)` build the same pair, which is what makes pool keys
/// independent of argument order.
///
/// # Examples
///
/// ```
/// use hydra_pool_engine::domain::{AssetId, AssetPair};
///
/// let x = AssetId::from_bytes([1u8; 32]);
/// let y = AssetId::from_bytes([2u8; 32]);
///
/// let pair = AssetPair::new(y, x).expect("distinct assets");
/// assert_eq!(pair.asset_a(), x);
/// assert_eq!(pair.asset_b(), y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a canonically ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if both ids are equal.
    pub fn new(first: AssetId, second: AssetId) -> Result<Self, AmmError> {
        if first == second {
            return Err(AmmError::InvalidAsset(
                "asset pair requires two distinct assets",
            ));
        }

        let (asset_a, asset_b) = if first < second {
            (first, second)
        } else {
            (second, first)
        };

        Ok(Self { asset_a, asset_b })
    }

    /// Returns the lower-ordered asset.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the higher-ordered asset.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `(asset_in, asset_out)` for a swap direction.
    #[must_use]
    pub const fn legs(&self, direction: SwapDirection) -> (AssetId, AssetId) {
        match direction {
            SwapDirection::AToB => (self.asset_a, self.asset_b),
            SwapDirection::BToA => (self.asset_b, self.asset_a),
        }
    }
}
