//! Direction of a swap relative to a pool's canonical pair.

/// Which side of the pair a swap sells into the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Asset A in, asset B out.
    AToB,
    /// Asset B in, asset A out.
    BToA,
}

impl SwapDirection {
    /// Maps the `input_is_asset_a` flag of the external interface.
    #[must_use]
    pub const fn from_input_is_a(input_is_asset_a: bool) -> Self {
        if input_is_asset_a {
            Self::AToB
        } else {
            Self::BToA
        }
    }
}
