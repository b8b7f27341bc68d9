//! Trait seams between the engine and its environment.
//!
//! [`Ledger`] is the only capability the engine consumes: it moves assets
//! between accounts on the engine's behalf.

mod ledger;

pub use ledger::{Ledger, Transfer};
