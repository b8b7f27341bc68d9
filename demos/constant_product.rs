//! Pool engine walkthrough.
//!
//! Creates a pool, seeds it, trades against it and withdraws, printing the
//! pool state after each step. Engine log records go to stderr.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_pool_engine=debug cargo run --example constant_product
//! ```

use hydra_pool_engine::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
minimum_liquidity = 1000
mint_rule = "lower"
"#;

fn print_pool(engine: &PoolEngine<InMemoryLedger>, key: PoolKey) -> Result<()> {
    let pool = engine.get_pool(key)?;
    println!("  Pool {}", pool.key);
    println!("    Reserve A:    {}", pool.reserve_a);
    println!("    Reserve B:    {}", pool.reserve_b);
    println!("    Total shares: {}", pool.total_shares);
    println!("    Fees A / B:   {} / {}", pool.fees_a, pool.fees_b);
    println!("    k:            {}", pool.invariant());
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Constant Product Pool Engine ===\n");

    // ── 1. Ledger and accounts ─────────────────────────────────────────
    let pair = AssetPair::new(AssetId::from_label("usdc"), AssetId::from_label("weth"))?;
    let (asset_a, asset_b) = (pair.asset_a(), pair.asset_b());
    let lp = AccountId::from_label("liquidity-provider");
    let trader = AccountId::from_label("trader");

    let ledger = InMemoryLedger::new();
    for asset in [asset_a, asset_b] {
        ledger.mint(asset, lp, Amount::new(10_000_000))?;
        ledger.mint(asset, trader, Amount::new(1_000_000))?;
    }

    // ── 2. Engine and pool ─────────────────────────────────────────────
    let engine = PoolEngine::new(EngineConfig::from_toml_str(CONFIG)?, ledger)?;
    let key = engine.create_pool(asset_a, asset_b, 500)?;
    println!("Created pool {} at 5.00%", key.to_hex());

    // ── 3. Seed ────────────────────────────────────────────────────────
    let seeded = engine.add_liquidity(
        lp,
        key,
        Amount::new(1_000_000),
        Amount::new(500_000),
        Amount::ZERO,
        Amount::ZERO,
    )?;
    println!(
        "\nSeeded: {} shares minted, {} locked",
        seeded.shares_minted, seeded.shares_locked
    );
    print_pool(&engine, key)?;

    // ── 4. Preview and execute a swap ──────────────────────────────────
    let quote = engine.quote_swap(key, Amount::new(100_000), SwapDirection::AToB)?;
    println!("\nQuote: 100000 A -> {} B (fee {})", quote.amount_out(), quote.fee());

    let swap = engine.swap(trader, key, Amount::new(100_000), true, Some(quote.amount_out()))?;
    println!("Swapped: {} A -> {} B", swap.amount_in(), swap.amount_out());
    print_pool(&engine, key)?;

    // ── 5. A slippage guard that cannot be met ────────────────────────
    match engine.swap(trader, key, Amount::new(100_000), true, Some(Amount::new(1_000_000))) {
        Err(AmmError::SlippageExceeded) => println!("\nSecond swap rejected: slippage"),
        other => println!("\nUnexpected: {other:?}"),
    }

    // ── 6. Ratio deposit ───────────────────────────────────────────────
    let preview = engine.quote_add_liquidity(key, Amount::new(5_000), Amount::new(10_000_000))?;
    println!(
        "\nDeposit preview for (5000, 10000000): takes ({}, {}) for {} shares",
        preview.amount_a, preview.amount_b, preview.shares_minted
    );

    // ── 7. Withdraw with fees ──────────────────────────────────────────
    let out = engine.remove_liquidity(lp, key, seeded.shares_minted)?;
    println!(
        "\nWithdrew {} shares: {} A + {} B",
        out.shares_burned, out.amount_a, out.amount_b
    );
    print_pool(&engine, key)?;

    println!(
        "\nLP balances: {} A, {} B",
        engine.ledger().balance(asset_a, lp),
        engine.ledger().balance(asset_b, lp)
    );

    Ok(())
}
