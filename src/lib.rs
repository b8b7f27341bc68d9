//! # Hydra Pool Engine
//!
//! Constant-product liquidity pools over a pluggable asset ledger.
//!
//! The engine keeps a registry of two-asset pools, each identified by a key
//! derived from its normalized asset pair and fee tier. Liquidity providers
//! deposit both assets and receive shares; traders swap one asset for the
//! other along `x · y = k` with the fee taken from the input. Fees stay in
//! the reserves, so every share is worth more after each swap.
//!
//! Every amount is an unsigned integer. All rounding favours the pool.
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_pool_engine::prelude::*;
//!
//! let (usd, eur) = (AssetId::from_label("usd"), AssetId::from_label("eur"));
//! let (alice, bob) = (AccountId::from_label("alice"), AccountId::from_label("bob"));
//!
//! let ledger = InMemoryLedger::new();
//! for asset in [usd, eur] {
//!     ledger.mint(asset, alice, Amount::new(10_000_000)).expect("mint");
//!     ledger.mint(asset, bob, Amount::new(1_000_000)).expect("mint");
//! }
//!
//! let engine = PoolEngine::new(EngineConfig::default(), ledger).expect("valid config");
//!
//! // 1. Create a pool at 5% and seed it.
//! let key = engine.create_pool(usd, eur, 500).expect("new pool");
//! let deposit = engine
//!     .add_liquidity(alice, key, Amount::new(1_000_000), Amount::new(500_000), Amount::ZERO, Amount::ZERO)
//!     .expect("seeded");
//! assert_eq!(deposit.shares_minted, Shares::new(706_106));
//!
//! // 2. Trade against it.
//! let pool = engine.get_pool(key).expect("exists");
//! let input_is_a = pool.pair.asset_a() == usd;
//! let swap = engine
//!     .swap(bob, key, Amount::new(100_000), input_is_a, None)
//!     .expect("swapped");
//! assert!(swap.amount_out().get() > 0);
//!
//! // 3. Withdraw with the accrued fee.
//! let out = engine
//!     .remove_liquidity(alice, key, deposit.shares_minted)
//!     .expect("withdrawn");
//! assert!(out.shares_burned == deposit.shares_minted);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  PoolEngine  │  create / add / remove / swap / quotes / execute(Operation)
//! └──────┬───────┘
//!        │ key lookup
//!        ▼
//! ┌──────────────┐
//! │ PoolRegistry │  RwLock<HashMap<PoolKey, Arc<Mutex<Pool>>>>
//! └──────┬───────┘
//!        │ plan → Ledger::transfer_all → commit
//!        ▼
//! ┌──────────────┐
//! │    Pools     │  ConstantProductPool, liquidity + swap math
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │ Domain, Math │  Amount, Shares, PoolKey, mul_div, isqrt, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`PoolKey`](domain::PoolKey), etc. |
//! | [`math`] | Checked and 256-bit-intermediate integer arithmetic |
//! | [`pools`] | [`ConstantProductPool`](pools::ConstantProductPool) state, share math, swap math |
//! | [`traits`] | The [`Ledger`](traits::Ledger) seam |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) keyed store |
//! | [`engine`] | [`PoolEngine`](engine::PoolEngine) façade and [`Operation`](engine::Operation) dispatch |
//! | [`config`] | [`EngineConfig`](config::EngineConfig), TOML loading |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod registry;
pub mod traits;
