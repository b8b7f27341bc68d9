//! Fungible asset identifier.

use core::fmt;

/// Identifier of a fungible asset held on the external ledger.
///
/// Wraps a fixed 32-byte value. The derived byte-wise ordering is the
/// canonical total order used to normalize asset pairs.
///
/// # Examples
///
/// ```
/// use hydra_pool_engine::domain::AssetId;
///
/// let lo = AssetId::from_bytes([1u8; 32]);
/// let hi = AssetId::from_bytes([2u8; 32]);
/// assert!(lo < hi);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives an identifier from a human-readable label such as a ticker or
    /// contract name. The same label always yields the same id.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"asset");
        hasher.update(label.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Returns the underlying 32 bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({self})")
    }
}

impl fmt::Display for AssetId {
    /// Abbreviated hex form: the first eight bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0[..8]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_derivation_is_deterministic() {
        assert_eq!(AssetId::from_label("USDC"), AssetId::from_label("USDC"));
        assert_ne!(AssetId::from_label("USDC"), AssetId::from_label("WETH"));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let lo = AssetId::from_bytes([0u8; 32]);
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert!(lo < AssetId::from_bytes(bytes));
    }

    #[test]
    fn display_is_short_hex() {
        let id = AssetId::from_bytes([0xab; 32]);
        assert_eq!(id.to_string(), "abababababababab");
        assert!(format!("{id:?}").starts_with("AssetId("));
    }
}
