//! Explicit rounding direction for integer division.

/// Rounding direction for every division performed by the engine.
///
/// No division in the crate is implicit: callers always state which way
/// the remainder goes, and the pool is always the side that keeps it.
/// Swap outputs, withdrawal payouts and minted shares all round
/// [`Down`](Rounding::Down).
///
/// # Examples
///
/// ```
/// use hydra_pool_engine::domain::Rounding;
/// use hydra_pool_engine::math::mul_div;
///
/// assert_eq!(mul_div(10, 1, 3, Rounding::Down), Some(3));
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up), Some(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}
