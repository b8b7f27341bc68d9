//! The public façade: [`PoolEngine`] and its dispatchable [`Operation`]s.
//!
//! ```text
//! caller ──► PoolEngine ──► PoolRegistry ──► ConstantProductPool (plan)
//!                 │                                  │
//!                 └──────► Ledger::transfer_all ◄────┘
//!                                  │
//!                                  └──► ConstantProductPool (commit)
//! ```

mod operation;
mod pool_engine;

pub use operation::{Operation, Outcome};
pub use pool_engine::PoolEngine;
