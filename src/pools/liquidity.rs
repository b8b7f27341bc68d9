//! Liquidity accounting: share issuance and redemption.
//!
//! Pure functions over reserves and share supply. They decide amounts and
//! share counts; [`ConstantProductPool`](super::ConstantProductPool) turns
//! the results into state transitions.
//!
//! # Formulas
//!
//! ```text
//! first deposit      shares = floor(sqrt(a * b)) - lock
//! matched deposit    b_req  = floor(a * Rb / Ra)   (or a_req symmetrically)
//! subsequent mint    shares = rule(floor(S * a / Ra), floor(S * b / Rb))
//! withdrawal         x_out  = floor(Rx * s / S)
//! ```
//!
//! Every division rounds down, so remainders stay with the pool.

use crate::config::MintRule;
use crate::domain::{Amount, Rounding, Shares};
use crate::error::AmmError;
use crate::math::{full_mul, isqrt, CheckedArithmetic};

/// Shares produced by seeding an empty pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialMint {
    /// Shares credited to the depositor.
    pub minted: Shares,
    /// Shares withheld from everyone and kept by the pool.
    pub locked: Shares,
}

/// Computes the first-deposit mint `floor(sqrt(a * b)) - lock`.
///
/// The product is taken in 256 bits, so any pair of amounts has a root.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientInitialLiquidity`] if nothing is left
/// for the depositor once the lock is subtracted.
pub fn initial_mint(
    amount_a: Amount,
    amount_b: Amount,
    lock: Shares,
) -> Result<InitialMint, AmmError> {
    let root = Shares::new(isqrt(full_mul(amount_a.get(), amount_b.get())));

    if root <= lock {
        return Err(AmmError::InsufficientInitialLiquidity);
    }
    let minted = root.safe_sub(&lock)?;
    Ok(InitialMint {
        minted,
        locked: lock,
    })
}

/// Trims a deposit offer to the pool's current ratio.
///
/// Side A is matched first. If the caller offered less B than side A
/// requires, side B is taken in full and A is matched to it instead.
/// Neither returned amount exceeds its offer.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::Overflow`] if a matched amount exceeds `u128`.
pub fn matched_amounts(
    desired_a: Amount,
    desired_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<(Amount, Amount), AmmError> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::EmptyPool);
    }

    let required_b = desired_a.safe_mul_div(reserve_b.get(), reserve_a.get(), Rounding::Down)?;
    if desired_b >= required_b {
        return Ok((desired_a, required_b));
    }

    let required_a = desired_b.safe_mul_div(reserve_a.get(), reserve_b.get(), Rounding::Down)?;
    Ok((required_a, desired_b))
}

/// Computes the shares minted by a deposit into a seeded pool.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::Overflow`] if a candidate exceeds `u128`.
pub fn proportional_mint(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    rule: MintRule,
) -> Result<Shares, AmmError> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::EmptyPool);
    }

    let via_a = total_shares.safe_mul_div(amount_a.get(), reserve_a.get(), Rounding::Down)?;
    let via_b = total_shares.safe_mul_div(amount_b.get(), reserve_b.get(), Rounding::Down)?;

    Ok(match rule {
        MintRule::Lower => core::cmp::min(via_a, via_b),
        MintRule::SideA => via_a,
        MintRule::SideB => via_b,
    })
}

/// Computes the payout for burning `shares` out of `total_shares`.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if `total_shares` is zero.
/// - [`AmmError::Unauthorized`] if `shares > total_shares`.
pub fn redemption_amounts(
    shares: Shares,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
) -> Result<(Amount, Amount), AmmError> {
    if total_shares.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    if shares > total_shares {
        return Err(AmmError::Unauthorized);
    }

    let out_a = reserve_a.safe_mul_div(shares.get(), total_shares.get(), Rounding::Down)?;
    let out_b = reserve_b.safe_mul_div(shares.get(), total_shares.get(), Rounding::Down)?;
    Ok((out_a, out_b))
}
