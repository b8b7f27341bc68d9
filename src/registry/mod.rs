//! Keyed store of live pools.
//!
//! The registry maps each [`PoolKey`](crate::domain::PoolKey) to a
//! [`PoolHandle`]. The map is behind a reader-writer lock taken only to
//! insert or look up a handle; each pool carries its own mutex, so work on
//! different pools never contends.

mod pool_registry;

pub use pool_registry::{PoolHandle, PoolRegistry};
