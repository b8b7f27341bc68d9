//! Integer square root over 256-bit products.

use ethnum::U256;

/// Returns `floor(sqrt(n))` using Newton's method.
///
/// The root of any 256-bit value fits in 128 bits, so the square root of a
/// product of two `u128` reserves never fails.
///
/// # Examples
///
/// ```
/// use hydra_pool_engine::math::{full_mul, isqrt};
///
/// assert_eq!(isqrt(full_mul(1_000_000, 500_000)), 707_106);
/// assert_eq!(isqrt(full_mul(1 << 70, 1 << 70)), 1 << 70);
/// ```
#[must_use]
pub fn isqrt(n: U256) -> u128 {
    if n < U256::from(2u128) {
        return n.as_u128();
    }
    // Initial guess 2^ceil(bits/2) is always >= sqrt(n), so the sequence
    // decreases monotonically to the floor root.
    let bits = 256 - n.leading_zeros();
    let mut x = U256::ONE << bits.div_ceil(2);
    loop {
        let y = (x + n / x) >> 1u32;
        if y >= x {
            return x.as_u128();
        }
        x = y;
    }
}
