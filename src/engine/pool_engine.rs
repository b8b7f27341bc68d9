//! The [`PoolEngine`] façade over the registry and the ledger.

use tracing::{debug, error, info, instrument, warn};

use super::{Operation, Outcome};
use crate::config::EngineConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, Deposit, FeeTier, PoolKey, PoolSnapshot, Shares,
    SwapDirection, SwapOutcome, Withdrawal,
};
use crate::error::{AmmError, Result, TransferError};
use crate::pools::ConstantProductPool;
use crate::registry::PoolRegistry;
use crate::traits::{Ledger, Transfer};

/// Logs a rejected operation and passes the result through.
///
/// An incomplete rollback leaves custody out of step with the reserves and
/// is logged at error level.
fn logged<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    match &result {
        Err(AmmError::TransferFailed(TransferError::RollbackIncomplete { applied })) => {
            error!(
                operation,
                applied = *applied,
                "ledger rollback incomplete, custody and reserves diverge"
            );
        }
        Err(err) => warn!(operation, error = %err, "operation rejected"),
        Ok(_) => {}
    }
    result
}

/// Entry point for every pool operation.
///
/// Owns the registry and the ledger. Each mutating call locks the target
/// pool, plans the change, submits the asset movements to the ledger as one
/// batch and commits the change only once the batch succeeded. Calls on
/// different pools run in parallel.
///
/// Every pool keeps its assets in a custody account derived from its key
/// ([`PoolKey::custody_account`]).
///
/// # Examples
///
/// ```
/// use hydra_pool_engine::config::EngineConfig;
/// use hydra_pool_engine::domain::{AccountId, Amount, AssetId};
/// use hydra_pool_engine::engine::PoolEngine;
/// use hydra_pool_engine::ledger::InMemoryLedger;
///
/// let (usd, eur) = (AssetId::from_label("usd"), AssetId::from_label("eur"));
/// let alice = AccountId::from_label("alice");
///
/// let ledger = InMemoryLedger::new();
/// ledger.mint(usd, alice, Amount::new(10_000_000)).expect("mint");
/// ledger.mint(eur, alice, Amount::new(10_000_000)).expect("mint");
///
/// let engine = PoolEngine::new(EngineConfig::default(), ledger).expect("valid config");
/// let key = engine.create_pool(usd, eur, 30).expect("new pool");
/// let deposit = engine
///     .add_liquidity(alice, key, Amount::new(1_000_000), Amount::new(1_000_000), Amount::ZERO, Amount::ZERO)
///     .expect("seeded");
/// assert_eq!(engine.get_position(key, alice).expect("pool exists"), deposit.shares_minted);
/// ```
#[derive(Debug)]
pub struct PoolEngine<L> {
    config: EngineConfig,
    registry: PoolRegistry,
    ledger: L,
}

impl<L: Ledger> PoolEngine<L> {
    /// Creates an engine with no pools.
    ///
    /// # Errors
    ///
    /// Returns any error from [`EngineConfig::validate`].
    pub fn new(config: EngineConfig, ledger: L) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            registry: PoolRegistry::new(),
            ledger,
        })
    }

    /// Returns the engine configuration.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the ledger.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Number of registered pools.
    pub fn pool_count(&self) -> usize {
        self.registry.len()
    }

    // -- registry ---------------------------------------------------------

    /// Creates an empty pool for the pair at `fee_bps`.
    ///
    /// The argument order of the assets does not matter. No asset moves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if the assets are equal.
    /// - [`AmmError::InvalidFee`] if `fee_bps > 10_000`.
    /// - [`AmmError::DuplicatePool`] if the pool already exists.
    #[instrument(skip(self))]
    pub fn create_pool(&self, asset_a: AssetId, asset_b: AssetId, fee_bps: u32) -> Result<PoolKey> {
        logged("create_pool", self.insert_pool(asset_a, asset_b, fee_bps))
    }

    fn insert_pool(&self, asset_a: AssetId, asset_b: AssetId, fee_bps: u32) -> Result<PoolKey> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        let fee_tier = FeeTier::from_bps(fee_bps)?;
        let handle = self
            .registry
            .insert(ConstantProductPool::new(pair, fee_tier))?;
        let key = handle.lock().key();
        info!(pool = %key, asset_a = %pair.asset_a(), asset_b = %pair.asset_b(), fee_bps, "pool created");
        Ok(key)
    }

    /// Looks up a pool by its assets and fee.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] / [`AmmError::InvalidFee`] on bad input.
    /// - [`AmmError::PoolNotFound`] if no such pool exists.
    pub fn resolve_pool(
        &self,
        asset_a: AssetId,
        asset_b: AssetId,
        fee_bps: u32,
    ) -> Result<PoolSnapshot> {
        let key = PoolKey::for_assets(asset_a, asset_b, FeeTier::from_bps(fee_bps)?)?;
        self.get_pool(key)
    }

    /// Returns a snapshot of the pool under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no such pool exists.
    pub fn get_pool(&self, key: PoolKey) -> Result<PoolSnapshot> {
        Ok(self.registry.get(&key)?.lock().snapshot())
    }

    /// Returns the shares `account` holds in the pool under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no such pool exists.
    pub fn get_position(&self, key: PoolKey, account: AccountId) -> Result<Shares> {
        Ok(self.registry.get(&key)?.lock().position(&account))
    }

    /// Returns every open position in the pool under `key`, ordered by account.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no such pool exists.
    pub fn positions(&self, key: PoolKey) -> Result<Vec<(AccountId, Shares)>> {
        Ok(self.registry.get(&key)?.lock().positions())
    }

    /// Returns a snapshot of every pool, ordered by key.
    pub fn list_pools(&self) -> Vec<PoolSnapshot> {
        self.registry
            .handles()
            .into_iter()
            .map(|(_, handle)| {
                let pool = handle.lock();
                pool.snapshot()
            })
            .collect()
    }

    // -- liquidity --------------------------------------------------------

    /// Deposits up to `amount_a_desired` / `amount_b_desired` from `caller`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if no such pool exists.
    /// - Any error from [`ConstantProductPool::plan_deposit`].
    /// - [`AmmError::TransferFailed`] if the ledger refuses the batch.
    #[instrument(skip(self, key), fields(pool = %key))]
    pub fn add_liquidity(
        &self,
        caller: AccountId,
        key: PoolKey,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        min_a: Amount,
        min_b: Amount,
    ) -> Result<Deposit> {
        logged(
            "add_liquidity",
            self.deposit(caller, key, amount_a_desired, amount_b_desired, min_a, min_b),
        )
    }

    fn deposit(
        &self,
        caller: AccountId,
        key: PoolKey,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        min_a: Amount,
        min_b: Amount,
    ) -> Result<Deposit> {
        let handle = self.registry.get(&key)?;
        let mut pool = handle.lock();

        let planned = pool.plan_deposit(
            caller,
            amount_a_desired,
            amount_b_desired,
            min_a,
            min_b,
            &self.config,
        )?;
        let receipt = planned.receipt();
        let pair = *pool.pair();
        let custody = key.custody_account();
        self.ledger.transfer_all(&[
            Transfer::new(pair.asset_a(), caller, custody, receipt.amount_a),
            Transfer::new(pair.asset_b(), caller, custody, receipt.amount_b),
        ])?;

        let deposit = pool.commit(planned);
        info!(
            amount_a = %deposit.amount_a,
            amount_b = %deposit.amount_b,
            shares_minted = %deposit.shares_minted,
            shares_locked = %deposit.shares_locked,
            total_shares = %pool.total_shares(),
            "liquidity added"
        );
        Ok(deposit)
    }

    /// Burns `shares` held by `caller` and pays out the pro-rata reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if no such pool exists.
    /// - Any error from [`ConstantProductPool::plan_withdrawal`].
    /// - [`AmmError::TransferFailed`] if the ledger refuses the batch.
    #[instrument(skip(self, key), fields(pool = %key))]
    pub fn remove_liquidity(
        &self,
        caller: AccountId,
        key: PoolKey,
        shares: Shares,
    ) -> Result<Withdrawal> {
        logged("remove_liquidity", self.withdraw(caller, key, shares))
    }

    fn withdraw(&self, caller: AccountId, key: PoolKey, shares: Shares) -> Result<Withdrawal> {
        let handle = self.registry.get(&key)?;
        let mut pool = handle.lock();

        let planned = pool.plan_withdrawal(caller, shares)?;
        let receipt = planned.receipt();
        let pair = *pool.pair();
        let custody = key.custody_account();
        self.ledger.transfer_all(&[
            Transfer::new(pair.asset_a(), custody, caller, receipt.amount_a),
            Transfer::new(pair.asset_b(), custody, caller, receipt.amount_b),
        ])?;

        let withdrawal = pool.commit(planned);
        info!(
            amount_a = %withdrawal.amount_a,
            amount_b = %withdrawal.amount_b,
            shares_burned = %withdrawal.shares_burned,
            total_shares = %pool.total_shares(),
            "liquidity removed"
        );
        Ok(withdrawal)
    }

    // -- swaps ------------------------------------------------------------

    /// Sells exactly `amount_in` of one asset for the other.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if no such pool exists.
    /// - Any error from [`ConstantProductPool::plan_swap`].
    /// - [`AmmError::TransferFailed`] if the ledger refuses the batch.
    #[instrument(skip(self, key), fields(pool = %key))]
    pub fn swap(
        &self,
        caller: AccountId,
        key: PoolKey,
        amount_in: Amount,
        input_is_asset_a: bool,
        min_out: Option<Amount>,
    ) -> Result<SwapOutcome> {
        let direction = SwapDirection::from_input_is_a(input_is_asset_a);
        logged(
            "swap",
            self.exchange(caller, key, amount_in, direction, min_out),
        )
    }

    fn exchange(
        &self,
        caller: AccountId,
        key: PoolKey,
        amount_in: Amount,
        direction: SwapDirection,
        min_out: Option<Amount>,
    ) -> Result<SwapOutcome> {
        let handle = self.registry.get(&key)?;
        let mut pool = handle.lock();

        let planned = pool.plan_swap(amount_in, direction, min_out)?;
        let receipt = planned.receipt();
        let (asset_in, asset_out) = pool.pair().legs(direction);
        let custody = key.custody_account();
        self.ledger.transfer_all(&[
            Transfer::new(asset_in, caller, custody, receipt.amount_in()),
            Transfer::new(asset_out, custody, caller, receipt.amount_out()),
        ])?;

        let outcome = pool.commit(planned);
        info!(
            direction = ?outcome.direction(),
            amount_in = %outcome.amount_in(),
            amount_out = %outcome.amount_out(),
            fee = %outcome.fee(),
            reserve_a = %pool.reserve_a(),
            reserve_b = %pool.reserve_b(),
            "swap executed"
        );
        Ok(outcome)
    }

    // -- quotes -----------------------------------------------------------

    /// Prices a swap against the current reserves without executing it.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap), minus transfer and slippage failures.
    pub fn quote_swap(
        &self,
        key: PoolKey,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> Result<SwapOutcome> {
        let outcome = self
            .registry
            .get(&key)?
            .lock()
            .plan_swap(amount_in, direction, None)?
            .receipt();
        debug!(pool = %key, amount_in = %amount_in, amount_out = %outcome.amount_out(), "swap quoted");
        Ok(outcome)
    }

    /// Previews the amounts a deposit would take and the shares it would mint.
    ///
    /// # Errors
    ///
    /// Same as [`ConstantProductPool::quote_deposit`], or
    /// [`AmmError::PoolNotFound`].
    pub fn quote_add_liquidity(
        &self,
        key: PoolKey,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
    ) -> Result<Deposit> {
        let deposit = self.registry.get(&key)?.lock().quote_deposit(
            amount_a_desired,
            amount_b_desired,
            &self.config,
        )?;
        debug!(
            pool = %key,
            amount_a = %deposit.amount_a,
            amount_b = %deposit.amount_b,
            shares = %deposit.shares_minted,
            "deposit quoted"
        );
        Ok(deposit)
    }

    // -- dispatch ---------------------------------------------------------

    /// Runs `operation` on behalf of `caller`.
    ///
    /// # Errors
    ///
    /// Whatever the matching method returns.
    pub fn execute(&self, caller: AccountId, operation: Operation) -> Result<Outcome> {
        debug!(operation = operation.name(), caller = %caller, "dispatching");
        match operation {
            Operation::CreatePool {
                asset_a,
                asset_b,
                fee_bps,
            } => self
                .create_pool(asset_a, asset_b, fee_bps)
                .map(Outcome::PoolCreated),
            Operation::AddLiquidity {
                pool,
                amount_a_desired,
                amount_b_desired,
                min_a,
                min_b,
            } => self
                .add_liquidity(caller, pool, amount_a_desired, amount_b_desired, min_a, min_b)
                .map(Outcome::LiquidityAdded),
            Operation::RemoveLiquidity { pool, shares } => self
                .remove_liquidity(caller, pool, shares)
                .map(Outcome::LiquidityRemoved),
            Operation::Swap {
                pool,
                amount_in,
                input_is_asset_a,
                min_out,
            } => self
                .swap(caller, pool, amount_in, input_is_asset_a, min_out)
                .map(Outcome::Swapped),
        }
    }
}
