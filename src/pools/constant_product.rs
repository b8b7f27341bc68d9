//! Constant-product pool state (`x · y = k`) with per-provider positions.
//!
//! Every mutation is split in two steps. A `plan_*` method validates the
//! request against the current state and computes the complete post-state
//! with checked arithmetic, returning a [`Planned`] value. [`commit`]
//! writes that post-state and cannot fail. The engine runs the ledger
//! batch between the two steps, so a rejected transfer leaves the pool
//! untouched.
//!
//! # Swap (A → B)
//!
//! 1. `net = floor(amount_in × (10 000 − fee_bps) / 10 000)`
//! 2. `amount_out = floor(reserve_b × net / (reserve_a + net))`
//! 3. `reserve_a += amount_in` (the full amount, fee included)
//! 4. `reserve_b -= amount_out`
//!
//! [`commit`]: ConstantProductPool::commit

use std::collections::HashMap;

use super::{liquidity, swap_math};
use crate::config::EngineConfig;
use crate::domain::{
    AccountId, Amount, AssetPair, Deposit, FeeTier, PoolKey, PoolSnapshot, Shares, SwapDirection,
    SwapOutcome, Withdrawal,
};
use crate::error::AmmError;
use crate::math::{CheckedArithmetic, Invariant};

/// Pool state after an operation, fully computed before anything is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transition {
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    fees_a: Amount,
    fees_b: Amount,
    position: Option<(AccountId, Shares)>,
}

/// A validated operation waiting to be committed.
///
/// Produced by the `plan_*` methods of [`ConstantProductPool`]. It is only
/// meaningful for the exact pool state it was planned against; the engine
/// holds the pool lock from planning through [`commit`].
///
/// [`commit`]: ConstantProductPool::commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a planned operation does nothing until committed"]
pub struct Planned<R> {
    receipt: R,
    transition: Transition,
}

impl<R: Copy> Planned<R> {
    /// Returns what the operation will produce once committed.
    pub const fn receipt(&self) -> R {
        self.receipt
    }
}

/// A constant-product pool.
///
/// Created empty by the registry. The first deposit sets the price; all
/// later deposits must follow the reserve ratio.
///
/// # State
///
/// - `reserve_a` / `reserve_b`: balances held in custody, fees included.
/// - `total_shares`: outstanding shares, including the locked minimum.
/// - `fees_a` / `fees_b`: lifetime fee counters. Informational only; the
///   fees themselves are part of the reserves.
/// - `positions`: shares held by each provider. Accounts whose balance
///   reaches zero are removed.
///
/// # Example
///
/// ```rust
/// use hydra_pool_engine::config::EngineConfig;
/// use hydra_pool_engine::domain::{AccountId, Amount, AssetId, AssetPair, FeeTier, SwapDirection};
/// use hydra_pool_engine::pools::ConstantProductPool;
///
/// let pair = AssetPair::new(AssetId::from_label("alpha"), AssetId::from_label("beta"))
///     .expect("distinct assets");
/// let mut pool = ConstantProductPool::new(pair, FeeTier::TIER_0_30_PERCENT);
/// let alice = AccountId::from_label("alice");
///
/// let planned = pool
///     .plan_deposit(
///         alice,
///         Amount::new(1_000_000),
///         Amount::new(1_000_000),
///         Amount::ZERO,
///         Amount::ZERO,
///         &EngineConfig::default(),
///     )
///     .expect("first deposit");
/// let deposit = pool.commit(planned);
/// assert_eq!(deposit.shares_minted.get(), 999_000);
///
/// let swap = pool
///     .plan_swap(Amount::new(1_000), SwapDirection::AToB, None)
///     .expect("priced");
/// assert!(swap.receipt().amount_out().get() > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    key: PoolKey,
    pair: AssetPair,
    fee_tier: FeeTier,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    fees_a: Amount,
    fees_b: Amount,
    positions: HashMap<AccountId, Shares>,
}

impl ConstantProductPool {
    /// Creates an empty pool for `pair` at `fee_tier`.
    #[must_use]
    pub fn new(pair: AssetPair, fee_tier: FeeTier) -> Self {
        Self {
            key: PoolKey::derive(&pair, fee_tier),
            pair,
            fee_tier,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_shares: Shares::ZERO,
            fees_a: Amount::ZERO,
            fees_b: Amount::ZERO,
            positions: HashMap::new(),
        }
    }

    /// Returns the pool key.
    pub const fn key(&self) -> PoolKey {
        self.key
    }

    /// Returns the normalized asset pair.
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the fee tier.
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the current reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the current reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the outstanding share supply.
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns `true` while no shares are outstanding.
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Returns `reserve_a * reserve_b`.
    pub fn invariant(&self) -> Invariant {
        Invariant::of(self.reserve_a, self.reserve_b)
    }

    /// Returns the shares held by `account`, zero if it has no position.
    pub fn position(&self, account: &AccountId) -> Shares {
        self.positions.get(account).copied().unwrap_or(Shares::ZERO)
    }

    /// Returns every open position, ordered by account.
    pub fn positions(&self) -> Vec<(AccountId, Shares)> {
        let mut out: Vec<_> = self.positions.iter().map(|(a, s)| (*a, *s)).collect();
        out.sort_unstable_by_key(|(account, _)| *account);
        out
    }

    /// Returns a copy of the pool's state.
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            key: self.key,
            pair: self.pair,
            fee_tier: self.fee_tier,
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            total_shares: self.total_shares,
            fees_a: self.fees_a,
            fees_b: self.fees_b,
        }
    }

    // -- deposits ---------------------------------------------------------

    /// Computes what a deposit of up to `desired_a` / `desired_b` would take
    /// and mint, without checking minimums.
    ///
    /// The first deposit into an empty pool takes both amounts in full and
    /// locks `config.minimum_liquidity()` shares. Later deposits are trimmed
    /// to the reserve ratio and mint shares according to `config.mint_rule()`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if either desired amount is zero.
    /// - [`AmmError::InsufficientInitialLiquidity`] if a first deposit does
    ///   not clear the lock.
    /// - [`AmmError::InsufficientOutput`] if a later deposit is too small to
    ///   take both sides or to mint a share.
    /// - [`AmmError::Overflow`] on arithmetic overflow.
    pub fn quote_deposit(
        &self,
        desired_a: Amount,
        desired_b: Amount,
        config: &EngineConfig,
    ) -> Result<Deposit, AmmError> {
        if desired_a.is_zero() || desired_b.is_zero() {
            return Err(AmmError::ZeroAmount);
        }

        if self.is_empty() {
            let mint = liquidity::initial_mint(desired_a, desired_b, config.minimum_liquidity())?;
            return Ok(Deposit {
                amount_a: desired_a,
                amount_b: desired_b,
                shares_minted: mint.minted,
                shares_locked: mint.locked,
            });
        }

        let (amount_a, amount_b) =
            liquidity::matched_amounts(desired_a, desired_b, self.reserve_a, self.reserve_b)?;
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InsufficientOutput);
        }
        let minted = liquidity::proportional_mint(
            amount_a,
            amount_b,
            self.reserve_a,
            self.reserve_b,
            self.total_shares,
            config.mint_rule(),
        )?;
        if minted.is_zero() {
            return Err(AmmError::InsufficientOutput);
        }
        Ok(Deposit {
            amount_a,
            amount_b,
            shares_minted: minted,
            shares_locked: Shares::ZERO,
        })
    }

    /// Plans a deposit by `provider`.
    ///
    /// # Errors
    ///
    /// - Any error from [`quote_deposit`](Self::quote_deposit).
    /// - [`AmmError::SlippageExceeded`] if a taken amount is below its minimum.
    /// - [`AmmError::Overflow`] if reserves or supply would overflow.
    pub fn plan_deposit(
        &self,
        provider: AccountId,
        desired_a: Amount,
        desired_b: Amount,
        min_a: Amount,
        min_b: Amount,
        config: &EngineConfig,
    ) -> Result<Planned<Deposit>, AmmError> {
        let deposit = self.quote_deposit(desired_a, desired_b, config)?;

        if deposit.amount_a < min_a || deposit.amount_b < min_b {
            return Err(AmmError::SlippageExceeded);
        }

        let total_shares = self
            .total_shares
            .safe_add(&deposit.shares_minted)?
            .safe_add(&deposit.shares_locked)?;
        let held = self.position(&provider).safe_add(&deposit.shares_minted)?;

        Ok(Planned {
            receipt: deposit,
            transition: Transition {
                reserve_a: self.reserve_a.safe_add(&deposit.amount_a)?,
                reserve_b: self.reserve_b.safe_add(&deposit.amount_b)?,
                total_shares,
                fees_a: self.fees_a,
                fees_b: self.fees_b,
                position: Some((provider, held)),
            },
        })
    }

    // -- withdrawals ------------------------------------------------------

    /// Plans burning `shares` held by `provider`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `shares` is zero.
    /// - [`AmmError::Unauthorized`] if `provider` holds fewer than `shares`.
    /// - [`AmmError::InsufficientOutput`] if either payout rounds to zero.
    pub fn plan_withdrawal(
        &self,
        provider: AccountId,
        shares: Shares,
    ) -> Result<Planned<Withdrawal>, AmmError> {
        if shares.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        let held = self.position(&provider);
        if held < shares {
            return Err(AmmError::Unauthorized);
        }

        let (amount_a, amount_b) = liquidity::redemption_amounts(
            shares,
            self.reserve_a,
            self.reserve_b,
            self.total_shares,
        )?;
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InsufficientOutput);
        }

        Ok(Planned {
            receipt: Withdrawal {
                amount_a,
                amount_b,
                shares_burned: shares,
            },
            transition: Transition {
                reserve_a: self.reserve_a.safe_sub(&amount_a)?,
                reserve_b: self.reserve_b.safe_sub(&amount_b)?,
                total_shares: self.total_shares.safe_sub(&shares)?,
                fees_a: self.fees_a,
                fees_b: self.fees_b,
                position: Some((provider, held.safe_sub(&shares)?)),
            },
        })
    }

    // -- swaps ------------------------------------------------------------

    /// Plans an exact-input swap of `amount_in` in `direction`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::EmptyPool`] if the pool has no shares outstanding.
    /// - [`AmmError::InsufficientOutput`] if the output rounds to zero.
    /// - [`AmmError::SlippageExceeded`] if the output is below `min_out`.
    /// - [`AmmError::Overflow`] if the input reserve would overflow.
    pub fn plan_swap(
        &self,
        amount_in: Amount,
        direction: SwapDirection,
        min_out: Option<Amount>,
    ) -> Result<Planned<SwapOutcome>, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        if self.is_empty() {
            return Err(AmmError::EmptyPool);
        }

        let (reserve_in, reserve_out) = match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        };

        let quote = swap_math::quote_exact_in(amount_in, self.fee_tier, reserve_in, reserve_out)?;
        if quote.amount_out.is_zero() {
            return Err(AmmError::InsufficientOutput);
        }
        if min_out.is_some_and(|min| quote.amount_out < min) {
            return Err(AmmError::SlippageExceeded);
        }

        let outcome = SwapOutcome::new(direction, amount_in, quote.amount_out, quote.fee)?;
        let new_in = reserve_in.safe_add(&amount_in)?;
        let new_out = reserve_out.safe_sub(&quote.amount_out)?;

        let transition = match direction {
            SwapDirection::AToB => Transition {
                reserve_a: new_in,
                reserve_b: new_out,
                total_shares: self.total_shares,
                fees_a: accrue(self.fees_a, quote.fee),
                fees_b: self.fees_b,
                position: None,
            },
            SwapDirection::BToA => Transition {
                reserve_a: new_out,
                reserve_b: new_in,
                total_shares: self.total_shares,
                fees_a: self.fees_a,
                fees_b: accrue(self.fees_b, quote.fee),
                position: None,
            },
        };

        Ok(Planned {
            receipt: outcome,
            transition,
        })
    }

    /// Writes a planned operation and returns its receipt.
    ///
    /// `planned` must come from this pool with no commit in between.
    pub fn commit<R>(&mut self, planned: Planned<R>) -> R {
        let t = planned.transition;
        self.reserve_a = t.reserve_a;
        self.reserve_b = t.reserve_b;
        self.total_shares = t.total_shares;
        self.fees_a = t.fees_a;
        self.fees_b = t.fees_b;
        if let Some((account, held)) = t.position {
            if held.is_zero() {
                self.positions.remove(&account);
            } else {
                self.positions.insert(account, held);
            }
        }
        planned.receipt
    }
}

/// Fee counters saturate instead of failing the swap.
fn accrue(counter: Amount, fee: Amount) -> Amount {
    counter.checked_add(&fee).unwrap_or(Amount::MAX)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::MintRule;
    use crate::domain::AssetId;

    fn amt(v: u128) -> Amount {
        Amount::new(v)
    }

    fn alice() -> AccountId {
        AccountId::from_label("alice")
    }

    fn bob() -> AccountId {
        AccountId::from_label("bob")
    }

    fn make_pool(fee: FeeTier) -> ConstantProductPool {
        let Ok(pair) = AssetPair::new(AssetId::from_label("A"), AssetId::from_label("B")) else {
            panic!("distinct assets");
        };
        ConstantProductPool::new(pair, fee)
    }

    fn deposit(
        pool: &mut ConstantProductPool,
        who: AccountId,
        a: u128,
        b: u128,
        config: &EngineConfig,
    ) -> Deposit {
        let Ok(planned) = pool.plan_deposit(who, amt(a), amt(b), Amount::ZERO, Amount::ZERO, config)
        else {
            panic!("deposit should succeed");
        };
        pool.commit(planned)
    }

    fn seeded_pool() -> ConstantProductPool {
        let mut pool = make_pool(FeeTier::TIER_5_00_PERCENT);
        deposit(
            &mut pool,
            alice(),
            1_000_000,
            500_000,
            &EngineConfig::default(),
        );
        pool
    }

    // -- first deposit ------------------------------------------------------

    #[test]
    fn first_deposit_mints_sqrt_minus_lock() {
        let pool = seeded_pool();
        assert_eq!(pool.position(&alice()), Shares::new(706_106));
        assert_eq!(pool.total_shares(), Shares::new(707_106));
        assert_eq!(pool.reserve_a(), amt(1_000_000));
        assert_eq!(pool.reserve_b(), amt(500_000));
    }

    #[test]
    fn first_deposit_reports_lock() {
        let mut pool = make_pool(FeeTier::TIER_5_00_PERCENT);
        let receipt = deposit(&mut pool, alice(), 1_000_000, 500_000, &EngineConfig::default());
        assert_eq!(receipt.shares_locked, Shares::new(1_000));
        assert_eq!(receipt.amount_a, amt(1_000_000));
        assert_eq!(receipt.amount_b, amt(500_000));
    }

    #[test]
    fn first_deposit_too_small() {
        let pool = make_pool(FeeTier::TIER_5_00_PERCENT);
        let result = pool.plan_deposit(
            alice(),
            amt(1_000),
            amt(1_000),
            Amount::ZERO,
            Amount::ZERO,
            &EngineConfig::default(),
        );
        assert!(matches!(result, Err(AmmError::InsufficientInitialLiquidity)));
    }

    #[test]
    fn first_deposit_with_product_beyond_u128() {
        let side = 1u128 << 70;
        let mut pool = make_pool(FeeTier::TIER_0_30_PERCENT);
        let receipt = deposit(&mut pool, alice(), side, side, &EngineConfig::default());
        assert_eq!(receipt.shares_minted, Shares::new(side - 1_000));
        assert_eq!(pool.total_shares(), Shares::new(side));

        let second = deposit(&mut pool, bob(), side, side, &EngineConfig::default());
        assert_eq!(second.shares_minted, Shares::new(side));
        assert_eq!(pool.reserve_a(), amt(side * 2));
        assert_eq!(pool.reserve_b(), amt(side * 2));
    }

    #[test]
    fn zero_desired_amount_rejected() {
        let pool = make_pool(FeeTier::TIER_5_00_PERCENT);
        let result = pool.plan_deposit(
            alice(),
            Amount::ZERO,
            amt(1_000),
            Amount::ZERO,
            Amount::ZERO,
            &EngineConfig::default(),
        );
        assert!(matches!(result, Err(AmmError::ZeroAmount)));
    }

    // -- subsequent deposits ----------------------------------------------

    #[test]
    fn subsequent_deposit_follows_ratio() {
        let mut pool = seeded_pool();
        let receipt = deposit(&mut pool, bob(), 5_000, 10_000_000, &EngineConfig::default());
        assert_eq!(receipt.amount_a, amt(5_000));
        assert_eq!(receipt.amount_b, amt(2_500));
        assert_eq!(receipt.shares_minted, Shares::new(3_535));
        assert!(receipt.shares_locked.is_zero());
        assert_eq!(pool.position(&bob()), Shares::new(3_535));
        assert_eq!(pool.total_shares(), Shares::new(710_641));
    }

    #[test]
    fn subsequent_deposit_below_minimum() {
        let pool = seeded_pool();
        let result = pool.plan_deposit(
            bob(),
            amt(5_000),
            amt(10_000_000),
            amt(5_000),
            amt(2_501),
            &EngineConfig::default(),
        );
        assert!(matches!(result, Err(AmmError::SlippageExceeded)));
    }

    #[test]
    fn dust_deposit_rejected() {
        // One unit of A requires zero units of B at a 2:1 ratio.
        let pool = seeded_pool();
        let result = pool.plan_deposit(
            bob(),
            amt(1),
            amt(1),
            Amount::ZERO,
            Amount::ZERO,
            &EngineConfig::default(),
        );
        assert!(matches!(result, Err(AmmError::InsufficientOutput)));
    }

    #[test]
    fn repeat_deposit_accumulates_position() {
        let mut pool = seeded_pool();
        let config = EngineConfig::default();
        let first = deposit(&mut pool, alice(), 10_000, 5_000, &config);
        assert_eq!(
            pool.position(&alice()),
            Shares::new(706_106 + first.shares_minted.get())
        );
    }

    #[test]
    fn mint_rule_is_honoured() {
        let config = EngineConfig::default().with_mint_rule(MintRule::SideB);
        let mut pool = seeded_pool();
        let receipt = deposit(&mut pool, bob(), 5_000, 10_000_000, &config);
        // via_b = floor(707_106 * 2_500 / 500_000) = 3_535
        assert_eq!(receipt.shares_minted, Shares::new(3_535));
    }

    // -- withdrawals ------------------------------------------------------

    #[test]
    fn full_withdrawal_leaves_residual() {
        let mut pool = seeded_pool();
        let Ok(planned) = pool.plan_withdrawal(alice(), Shares::new(706_106)) else {
            panic!("withdrawal should succeed");
        };
        let receipt = pool.commit(planned);
        assert_eq!(receipt.amount_a, amt(998_585));
        assert_eq!(receipt.amount_b, amt(499_292));
        assert_eq!(pool.total_shares(), Shares::new(1_000));
        assert_eq!(pool.reserve_a(), amt(1_415));
        assert_eq!(pool.reserve_b(), amt(708));
        assert!(pool.position(&alice()).is_zero());
        assert!(pool.positions().is_empty());
    }

    #[test]
    fn stranger_is_unauthorized() {
        let pool = seeded_pool();
        let result = pool.plan_withdrawal(bob(), Shares::new(1));
        assert!(matches!(result, Err(AmmError::Unauthorized)));
    }

    #[test]
    fn zero_shares_checked_before_authorization() {
        let pool = seeded_pool();
        let result = pool.plan_withdrawal(bob(), Shares::ZERO);
        assert!(matches!(result, Err(AmmError::ZeroAmount)));
    }

    #[test]
    fn withdrawing_more_than_held() {
        let pool = seeded_pool();
        let result = pool.plan_withdrawal(alice(), Shares::new(706_107));
        assert!(matches!(result, Err(AmmError::Unauthorized)));
    }

    #[test]
    fn dust_withdrawal_rejected() {
        // One share is worth 1_000_000 / 707_106 A and 500_000 / 707_106 B.
        let pool = seeded_pool();
        let result = pool.plan_withdrawal(alice(), Shares::new(1));
        assert!(matches!(result, Err(AmmError::InsufficientOutput)));
    }

    #[test]
    fn unlocked_pool_drains_and_reseeds() {
        let config = EngineConfig::default().with_minimum_liquidity(0);
        let mut pool = make_pool(FeeTier::TIER_0_30_PERCENT);
        let receipt = deposit(&mut pool, alice(), 400, 100, &config);
        assert_eq!(receipt.shares_minted, Shares::new(200));

        let Ok(planned) = pool.plan_withdrawal(alice(), Shares::new(200)) else {
            panic!("withdrawal should succeed");
        };
        let out = pool.commit(planned);
        assert_eq!((out.amount_a, out.amount_b), (amt(400), amt(100)));
        assert!(pool.is_empty());
        assert!(pool.reserve_a().is_zero() && pool.reserve_b().is_zero());

        // A new price can be set.
        let reseed = deposit(&mut pool, bob(), 900, 100, &config);
        assert_eq!(reseed.shares_minted, Shares::new(300));
        assert_eq!(pool.reserve_a(), amt(900));
    }

    // -- swaps ------------------------------------------------------------

    #[test]
    fn swap_on_empty_pool() {
        let pool = make_pool(FeeTier::TIER_5_00_PERCENT);
        let result = pool.plan_swap(amt(100), SwapDirection::AToB, None);
        assert!(matches!(result, Err(AmmError::EmptyPool)));
    }

    #[test]
    fn swap_zero_input() {
        let pool = seeded_pool();
        let result = pool.plan_swap(Amount::ZERO, SwapDirection::AToB, None);
        assert!(matches!(result, Err(AmmError::ZeroAmount)));
    }

    #[test]
    fn swap_worked_example() {
        let mut pool = seeded_pool();
        let k_before = pool.invariant();
        let Ok(planned) = pool.plan_swap(amt(100_000), SwapDirection::AToB, None) else {
            panic!("swap should succeed");
        };
        let outcome = pool.commit(planned);

        assert_eq!(outcome.amount_out(), amt(43_378));
        assert_eq!(outcome.fee(), amt(5_000));
        assert!(outcome.amount_out() < amt(45_454));
        assert_eq!(pool.reserve_a(), amt(1_100_000));
        assert_eq!(pool.reserve_b(), amt(456_622));
        assert!(pool.invariant() > k_before);
        assert_eq!(pool.snapshot().fees_a, amt(5_000));
        assert!(pool.snapshot().fees_b.is_zero());
    }

    #[test]
    fn swap_reverse_direction_updates_fee_b() {
        let mut pool = seeded_pool();
        let Ok(planned) = pool.plan_swap(amt(10_000), SwapDirection::BToA, None) else {
            panic!("swap should succeed");
        };
        let outcome = pool.commit(planned);
        // net 9_500; floor(1_000_000 * 9_500 / 509_500) = 18_645
        assert_eq!(outcome.amount_out(), amt(18_645));
        assert_eq!(pool.reserve_b(), amt(510_000));
        assert_eq!(pool.reserve_a(), amt(981_355));
        assert_eq!(pool.snapshot().fees_b, amt(500));
    }

    #[test]
    fn swap_slippage_guard() {
        let pool = seeded_pool();
        let result = pool.plan_swap(amt(100_000), SwapDirection::AToB, Some(amt(43_379)));
        assert!(matches!(result, Err(AmmError::SlippageExceeded)));
        assert!(pool
            .plan_swap(amt(100_000), SwapDirection::AToB, Some(amt(43_378)))
            .is_ok());
    }

    #[test]
    fn swap_with_zero_output() {
        let pool = seeded_pool();
        let result = pool.plan_swap(amt(1), SwapDirection::AToB, None);
        assert!(matches!(result, Err(AmmError::InsufficientOutput)));
    }

    #[test]
    fn fees_accrue_to_providers() {
        let mut pool = seeded_pool();
        let Ok(before) = pool.plan_withdrawal(alice(), Shares::new(706_106)) else {
            panic!("withdrawal should plan");
        };
        let before = before.receipt();

        let Ok(swap) = pool.plan_swap(amt(100_000), SwapDirection::AToB, None) else {
            panic!("swap should succeed");
        };
        let _ = pool.commit(swap);

        let Ok(after) = pool.plan_withdrawal(alice(), Shares::new(706_106)) else {
            panic!("withdrawal should plan");
        };
        let after = after.receipt();
        assert_eq!(after.amount_a, amt(1_098_444));
        assert_eq!(after.amount_b, amt(455_976));
        assert!(after.amount_a > before.amount_a);
        assert!(after.amount_b < before.amount_b);
    }

    #[test]
    fn planning_does_not_mutate() {
        let pool = seeded_pool();
        let snapshot = pool.snapshot();
        let _ = pool.plan_swap(amt(100_000), SwapDirection::AToB, None);
        let _ = pool.plan_withdrawal(alice(), Shares::new(10_000));
        assert_eq!(pool.snapshot(), snapshot);
    }
}
