//! Integer arithmetic shared by liquidity accounting and swap math.
//!
//! Everything here is integer-only. Products of two `u128` quantities are
//! carried as [`ethnum::U256`] ([`full_mul`], [`mul_div`], [`Invariant`]) so
//! that the only arithmetic failure left is a result that cannot be
//! represented.

mod checked;
mod invariant;
mod sqrt;
mod wide;

pub use checked::CheckedArithmetic;
pub use invariant::Invariant;
pub use sqrt::isqrt;
pub use wide::{full_mul, mul_div, narrow};
