//! Engine-wide constants that govern share issuance.

use serde::{Deserialize, Serialize};

use crate::domain::Shares;
use crate::error::AmmError;

/// Shares withheld from the first depositor of every pool by default.
pub const DEFAULT_MINIMUM_LIQUIDITY: u64 = 1_000;

/// Which candidate share count a subsequent deposit mints.
///
/// A deposit on an already-seeded pool yields two candidates,
/// `total_shares * a / reserve_a` and `total_shares * b / reserve_b`,
/// which can differ by rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MintRule {
    /// The smaller of the two candidates. Never credits more than either
    /// side of the deposit justifies.
    #[default]
    Lower,
    /// Always the candidate computed from asset A.
    SideA,
    /// Always the candidate computed from asset B.
    SideB,
}

/// Configuration of a [`PoolEngine`](crate::engine::PoolEngine).
///
/// # Validation
///
/// `minimum_liquidity` may be zero, in which case a pool whose providers
/// have all withdrawn returns to the empty state and its next deposit sets
/// a new price.
///
/// # Examples
///
/// ```
/// use hydra_pool_engine::config::{EngineConfig, MintRule};
///
/// let cfg = EngineConfig::from_toml_str(r#"
///     minimum_liquidity = 1000
///     mint_rule = "lower"
/// "#).expect("valid config");
/// assert_eq!(cfg.minimum_liquidity().get(), 1000);
/// assert_eq!(cfg.mint_rule(), MintRule::Lower);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    minimum_liquidity: u64,
    mint_rule: MintRule,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            minimum_liquidity: DEFAULT_MINIMUM_LIQUIDITY,
            mint_rule: MintRule::Lower,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from TOML and validates it.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ConfigParse`] on malformed TOML or unknown keys.
    /// - Any error from [`validate`](Self::validate).
    pub fn from_toml_str(source: &str) -> Result<Self, AmmError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different minimum-liquidity lock.
    #[must_use]
    pub const fn with_minimum_liquidity(mut self, shares: u64) -> Self {
        self.minimum_liquidity = shares;
        self
    }

    /// Returns a copy with a different mint rule.
    #[must_use]
    pub const fn with_mint_rule(mut self, rule: MintRule) -> Self {
        self.mint_rule = rule;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the lock is so large
    /// that no first deposit could ever clear it.
    pub fn validate(&self) -> Result<(), AmmError> {
        // sqrt(a * b) tops out at u128::MAX's root, which is u64::MAX.
        if self.minimum_liquidity == u64::MAX {
            return Err(AmmError::InvalidConfiguration(
                "minimum_liquidity leaves no mintable shares",
            ));
        }
        Ok(())
    }

    /// Shares locked by the first deposit into a pool.
    pub const fn minimum_liquidity(&self) -> Shares {
        Shares::new(self.minimum_liquidity as u128)
    }

    /// Rule used to pick minted shares on subsequent deposits.
    #[must_use]
    pub const fn mint_rule(&self) -> MintRule {
        self.mint_rule
    }
}
