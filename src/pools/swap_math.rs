//! Constant-product swap pricing with the fee taken from the input.
//!
//! ```text
//! net        = floor(amount_in * (10_000 - fee_bps) / 10_000)
//! amount_out = floor(reserve_out * net / (reserve_in + net))
//! ```
//!
//! Flooring the output is the same as rounding the post-swap output
//! reserve up to `ceil(k / (reserve_in + net))`, so
//! `(reserve_in + net) * (reserve_out - amount_out) >= k` holds exactly
//! and `amount_out < reserve_out` whenever `reserve_in > 0`.

use crate::domain::{Amount, FeeTier, Rounding};
use crate::error::AmmError;
use crate::math::mul_div;

/// A priced exact-input swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    /// Input that takes part in pricing.
    pub net_input: Amount,
    /// Output paid to the trader.
    pub amount_out: Amount,
    /// `amount_in - net_input`, retained by the pool.
    pub fee: Amount,
}

/// Output of the bare constant-product formula for an already-netted input.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::Overflow`] if `reserve_in + net_input` exceeds `u128`.
pub fn output_for_net_input(
    net_input: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    let denominator = reserve_in
        .checked_add(&net_input)
        .ok_or(AmmError::Overflow("swap denominator overflow"))?;

    // out <= reserve_out because net < reserve_in + net, so the quotient fits.
    mul_div(
        reserve_out.get(),
        net_input.get(),
        denominator.get(),
        Rounding::Down,
    )
    .map(Amount::new)
    .ok_or(AmmError::Overflow("swap output overflow"))
}

/// Prices an exact-input swap.
///
/// A zero output is reported as `amount_out == 0`; callers decide whether
/// that is an error.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::Overflow`] on arithmetic overflow.
pub fn quote_exact_in(
    amount_in: Amount,
    fee_tier: FeeTier,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<SwapQuote, AmmError> {
    let net_input = fee_tier.net_of_fee(amount_in)?;
    let fee = fee_tier.fee_portion(amount_in)?;
    let amount_out = output_for_net_input(net_input, reserve_in, reserve_out)?;
    Ok(SwapQuote {
        net_input,
        amount_out,
        fee,
    })
}
