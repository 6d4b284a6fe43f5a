//! Constant Product pool example (Uniswap V2 style).
//!
//! Seeds a BTC/USDC pool, deposits balanced liquidity, quotes and executes
//! a swap, then burns shares.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example constant_product
//! ```

use std::env;

use pool_math::config::ConstantProductConfig;
use pool_math::domain::{LpAmount, SwapAmount};
use pool_math::pools::{ConstantProductPool, SharedPool};
use pool_math::traits::{FromConfig, LiquidityPool, SwapPool};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Constant Product pool (x · y = k) ===\n");

    // ── 1. Seed the pool ────────────────────────────────────────────────
    let config = ConstantProductConfig::new(SwapAmount::btc(10.0)?, SwapAmount::usdc(40.0)?)?;
    let mut pool = ConstantProductPool::from_config(&config)?;
    println!("Seeded:        {}", pool.state());

    // ── 2. Balanced deposit ─────────────────────────────────────────────
    let btc = SwapAmount::btc(2.0)?;
    let usdc = pool.get_balanced_contrary_amount(&btc)?;
    let minted = pool.deposit_balanced_liquidity(btc, usdc)?;
    println!("\n--- Deposit {btc} + {usdc} ---");
    println!("  Minted:      {minted}");
    println!("  State:       {}", pool.state());

    // ── 3. Withdraw ─────────────────────────────────────────────────────
    let (out_btc, out_usdc) = pool.withdraw_liquidity(LpAmount::new(5.0)?)?;
    println!("\n--- Withdraw 5 shares ---");
    println!("  Returned:    {out_btc} + {out_usdc}");
    println!("  State:       {}", pool.state());

    // ── 4. Quote, then swap ─────────────────────────────────────────────
    let paid = SwapAmount::usdc(10.0)?;
    let forecast = pool.forecast_swap(&paid)?;
    println!("\n--- Quote {paid} ---");
    println!("  Price:       {}", pool.get_price(&paid)?);
    println!("  Impact:      {:.4}", pool.get_price_impact(&paid)?);
    println!("  Gross out:   {}", forecast.gross_output());

    let received = pool.swap(paid)?;
    println!("\n--- Swap {paid} ---");
    println!("  Received:    {received}");
    println!("  Fee rate:    {}", pool.fee_rate());
    println!("  State:       {}", pool.state());

    // ── 5. Rejected requests leave the pool alone ───────────────────────
    let before = pool.state();
    if let Err(err) = pool.deposit_balanced_liquidity(SwapAmount::btc(1.0)?, SwapAmount::usdc(1.0)?) {
        println!("\nRejected deposit ({}): {err}", err.category());
    }
    assert_eq!(pool.state(), before);

    // ── 6. Share the pool between threads ───────────────────────────────
    let shared = SharedPool::new(pool);
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let handle = shared.clone();
            std::thread::spawn(move || -> Result<(), pool_math::error::AmmError> {
                for _ in 0..10 {
                    let _received = handle.swap(SwapAmount::btc(0.01)?)?;
                }
                Ok(())
            })
        })
        .collect();
    for worker in workers {
        worker.join().map_err(|_| "worker panicked")??;
    }
    println!("\nAfter 40 concurrent swaps: {}", shared.snapshot());

    Ok(())
}
