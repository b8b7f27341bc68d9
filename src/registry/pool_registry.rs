//! Pool registry keyed by [`PoolKey`].

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::domain::PoolKey;
use crate::error::AmmError;
use crate::pools::ConstantProductPool;

/// Shared, individually locked pool state.
pub type PoolHandle = Arc<Mutex<ConstantProductPool>>;

/// Concurrent map from pool key to pool.
///
/// Pools are never removed: a fully withdrawn pool keeps its key and can be
/// seeded again.
#[derive(Debug, Default)]
pub struct PoolRegistry {
    pools: RwLock<HashMap<PoolKey, PoolHandle>>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `pool` under its own key.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DuplicatePool`] if the key is taken.
    pub fn insert(&self, pool: ConstantProductPool) -> Result<PoolHandle, AmmError> {
        let mut pools = self.pools.write();
        match pools.entry(pool.key()) {
            Entry::Occupied(_) => Err(AmmError::DuplicatePool),
            Entry::Vacant(slot) => Ok(Arc::clone(slot.insert(Arc::new(Mutex::new(pool))))),
        }
    }

    /// Looks up the pool registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no pool has that key.
    pub fn get(&self, key: &PoolKey) -> Result<PoolHandle, AmmError> {
        self.pools
            .read()
            .get(key)
            .map(Arc::clone)
            .ok_or(AmmError::PoolNotFound)
    }

    /// Number of registered pools.
    pub fn len(&self) -> usize {
        self.pools.read().len()
    }

    /// Returns `true` if no pool is registered.
    pub fn is_empty(&self) -> bool {
        self.pools.read().is_empty()
    }

    /// Returns every handle, ordered by key.
    ///
    /// The map lock is released before the caller locks any pool.
    pub fn handles(&self) -> Vec<(PoolKey, PoolHandle)> {
        let mut out: Vec<_> = self
            .pools
            .read()
            .iter()
            .map(|(k, h)| (*k, Arc::clone(h)))
            .collect();
        out.sort_unstable_by_key(|(key, _)| *key);
        out
    }
}
