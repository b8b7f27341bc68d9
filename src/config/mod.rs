//! Engine configuration.
//!
//! [`EngineConfig`] holds the constants that are fixed for the lifetime of
//! an engine instance: the minimum-liquidity lock and the share mint rule.
//! It can be built in code or loaded from TOML.

mod engine_config;

pub use engine_config::{EngineConfig, MintRule, DEFAULT_MINIMUM_LIQUIDITY};
