//! Property-based tests using `proptest` for pool accounting.
//!
//! 1. **Invariant monotonicity**: `reserve_a * reserve_b` never drops
//!    across swaps and deposits.
//! 2. **Swap reversibility**: a round trip A→B→A returns at most the input.
//! 3. **Fee monotonicity**: a larger input never pays a smaller fee.
//! 4. **Ratio enforcement**: deposits never take more than offered and
//!    never dilute existing shares.
//! 5. **Liquidity conservation**: deposit then withdraw returns at most
//!    what was deposited.

use proptest::prelude::*;

use crate::config::EngineConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, FeeTier, Rounding, Shares, SwapDirection,
};
use crate::math::{full_mul, mul_div, Invariant};
use crate::pools::ConstantProductPool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn seeder() -> AccountId {
    AccountId::from_label("seeder")
}

fn provider() -> AccountId {
    AccountId::from_label("provider")
}

fn make_pair() -> AssetPair {
    let Ok(pair) = AssetPair::new(AssetId::from_label("x"), AssetId::from_label("y")) else {
        panic!("distinct assets");
    };
    pair
}

fn make_pool(fee_bps: u32, ra: u128, rb: u128) -> ConstantProductPool {
    let Ok(fee) = FeeTier::from_bps(fee_bps) else {
        panic!("valid fee");
    };
    let mut pool = ConstantProductPool::new(make_pair(), fee);
    let Ok(planned) = pool.plan_deposit(
        seeder(),
        Amount::new(ra),
        Amount::new(rb),
        Amount::ZERO,
        Amount::ZERO,
        &EngineConfig::default(),
    ) else {
        panic!("seed deposit");
    };
    let _ = pool.commit(planned);
    pool
}

/// `a / b <= c / d` for non-zero denominators, compared as 256-bit products.
fn ratio_le(a: u128, b: u128, c: u128, d: u128) -> bool {
    full_mul(a, d) <= full_mul(c, b)
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=1_000_000_000_000u128
}

fn fee_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(0u32), Just(5), Just(30), Just(100), Just(500), 0u32..=9_999]
}

#[derive(Debug, Clone)]
enum Step {
    Swap { amount: u128, a_to_b: bool },
    Deposit { a: u128, b: u128 },
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (1u128..=10_000_000_000u128, any::<bool>())
            .prop_map(|(amount, a_to_b)| Step::Swap { amount, a_to_b }),
        (1u128..=10_000_000_000u128, 1u128..=10_000_000_000u128)
            .prop_map(|(a, b)| Step::Deposit { a, b }),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Invariant Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_never_decreases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        steps in prop::collection::vec(step_strategy(), 1..20),
    ) {
        let config = EngineConfig::default();
        let mut pool = make_pool(fee, ra, rb);

        for step in steps {
            let k_before: Invariant = pool.invariant();
            match step {
                Step::Swap { amount, a_to_b } => {
                    let direction = SwapDirection::from_input_is_a(a_to_b);
                    let Ok(planned) = pool.plan_swap(Amount::new(amount), direction, None) else {
                        continue;
                    };
                    let outcome = pool.commit(planned);
                    prop_assert!(outcome.amount_out().get() > 0);
                }
                Step::Deposit { a, b } => {
                    let Ok(planned) = pool.plan_deposit(
                        provider(),
                        Amount::new(a),
                        Amount::new(b),
                        Amount::ZERO,
                        Amount::ZERO,
                        &config,
                    ) else {
                        continue;
                    };
                    let _ = pool.commit(planned);
                }
            }
            prop_assert!(
                pool.invariant() >= k_before,
                "k decreased: {} < {}",
                pool.invariant(), k_before
            );
            prop_assert!(!pool.reserve_a().is_zero() && !pool.reserve_b().is_zero());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let mut pool = make_pool(fee, ra, rb);

        let Ok(ab) = pool.plan_swap(Amount::new(swap_in), SwapDirection::AToB, None) else {
            return Ok(());
        };
        let received_b = pool.commit(ab).amount_out();

        let Ok(ba) = pool.plan_swap(received_b, SwapDirection::BToA, None) else {
            return Ok(());
        };
        let final_a = pool.commit(ba).amount_out().get();

        prop_assert!(
            final_a <= swap_in,
            "round-trip should lose value: final={} > original={}",
            final_a, swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Fee Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fee_monotonic_in_input(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        small in 1_000u128..=1_000_000u128,
        extra in 0u128..=1_000_000u128,
    ) {
        let pool = make_pool(fee, ra, rb);
        let large = small + extra;

        let (Ok(p_small), Ok(p_large)) = (
            pool.plan_swap(Amount::new(small), SwapDirection::AToB, None),
            pool.plan_swap(Amount::new(large), SwapDirection::AToB, None),
        ) else {
            return Ok(());
        };
        prop_assert!(p_large.receipt().fee() >= p_small.receipt().fee());
        prop_assert!(p_large.receipt().amount_out() >= p_small.receipt().amount_out());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Ratio Enforcement
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_respects_ratio(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in 1u128..=10_000_000_000u128,
        b in 1u128..=10_000_000_000u128,
    ) {
        let mut pool = make_pool(30, ra, rb);
        let (ra0, rb0, s0) = (
            pool.reserve_a().get(),
            pool.reserve_b().get(),
            pool.total_shares().get(),
        );

        let Ok(planned) = pool.plan_deposit(
            provider(),
            Amount::new(a),
            Amount::new(b),
            Amount::ZERO,
            Amount::ZERO,
            &EngineConfig::default(),
        ) else {
            return Ok(());
        };
        let deposit = pool.commit(planned);

        prop_assert!(deposit.amount_a.get() <= a);
        prop_assert!(deposit.amount_b.get() <= b);
        // One side is taken in full and the other matched to it, rounded down.
        let matched_b = mul_div(a, rb0, ra0, Rounding::Down);
        let matched_a = mul_div(b, ra0, rb0, Rounding::Down);
        prop_assert!(
            (deposit.amount_a.get() == a && Some(deposit.amount_b.get()) == matched_b)
                || (deposit.amount_b.get() == b && Some(deposit.amount_a.get()) == matched_a),
            "deposit {:?} does not follow ratio {}:{}",
            deposit, ra0, rb0
        );

        // Existing holders are not diluted on either side.
        let s1 = pool.total_shares().get();
        prop_assert!(ratio_le(ra0, s0, pool.reserve_a().get(), s1));
        prop_assert!(ratio_le(rb0, s0, pool.reserve_b().get(), s1));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Liquidity Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_then_withdraw_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in 1_000u128..=10_000_000_000u128,
        b in 1_000u128..=10_000_000_000u128,
    ) {
        let mut pool = make_pool(30, ra, rb);

        let Ok(planned) = pool.plan_deposit(
            provider(),
            Amount::new(a),
            Amount::new(b),
            Amount::ZERO,
            Amount::ZERO,
            &EngineConfig::default(),
        ) else {
            return Ok(());
        };
        let deposit = pool.commit(planned);
        prop_assert_eq!(pool.position(&provider()), deposit.shares_minted);

        let Ok(planned) = pool.plan_withdrawal(provider(), deposit.shares_minted) else {
            return Ok(());
        };
        let withdrawal = pool.commit(planned);

        prop_assert!(withdrawal.amount_a <= deposit.amount_a);
        prop_assert!(withdrawal.amount_b <= deposit.amount_b);
        prop_assert_eq!(pool.position(&provider()), Shares::ZERO);
    }
}
