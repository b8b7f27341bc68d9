//! Constant-product pool state and the math behind it.
//!
//! | Module | Role |
//! |--------|------|
//! | [`constant_product`] | [`ConstantProductPool`]: reserves, supply, positions, plan/commit |
//! | [`liquidity`] | Share issuance and redemption |
//! | [`swap_math`] | Exact-input pricing with the fee taken from the input |

pub mod constant_product;
pub mod liquidity;
pub mod swap_math;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::{ConstantProductPool, Planned};
pub use swap_math::SwapQuote;
