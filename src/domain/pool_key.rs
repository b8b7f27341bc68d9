//! Deterministic pool identifier.

use core::fmt;

use super::{AccountId, AssetId, AssetPair, FeeTier};
use crate::error::AmmError;

/// Opaque key of one pool: a BLAKE3 digest of the normalized pair and fee.
///
/// Derivation is a pure function of its inputs, so any caller can compute
/// the key of a pool without asking the registry. Every input has a fixed
/// width, which keeps the hashed encoding injective.
///
/// # Examples
///
/// ```
/// use hydra_pool_engine::domain::{AssetId, FeeTier, PoolKey};
///
/// let x = AssetId::from_label("USDC");
/// let y = AssetId::from_label("WETH");
/// let fee = FeeTier::TIER_0_30_PERCENT;
///
/// let k1 = PoolKey::for_assets(x, y, fee).expect("distinct");
/// let k2 = PoolKey::for_assets(y, x, fee).expect("distinct");
/// assert_eq!(k1, k2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolKey([u8; 32]);

impl PoolKey {
    /// Derives the key of an already-normalized pair.
    #[must_use]
    pub fn derive(pair: &AssetPair, fee_tier: FeeTier) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"pool");
        hasher.update(pair.asset_a().as_bytes());
        hasher.update(pair.asset_b().as_bytes());
        hasher.update(&fee_tier.basis_points().get().to_le_bytes());
        Self(hasher.finalize().into())
    }

    /// Normalizes two assets and derives their pool key.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if the assets are identical.
    pub fn for_assets(first: AssetId, second: AssetId, fee_tier: FeeTier) -> Result<Self, AmmError> {
        let pair = AssetPair::new(first, second)?;
        Ok(Self::derive(&pair, fee_tier))
    }

    /// Ledger account holding this pool's reserves.
    #[must_use]
    pub fn custody_account(&self) -> AccountId {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"custody");
        hasher.update(&self.0);
        AccountId::from_bytes(hasher.finalize().into())
    }

    /// Returns the raw digest.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Full lowercase hex encoding of the digest.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoolKey({self})")
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0[..8]))
    }
}
