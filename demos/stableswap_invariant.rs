//! StableSwap invariant example (Curve style).
//!
//! Solves `D` for a few two-coin pools with the three formulations and
//! shows where integer truncation makes them disagree.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=trace cargo run --example stableswap_invariant
//! ```

use std::env;

use pool_math::config::StableSwapConfig;
use pool_math::math::stableswap::{
    solve_invariant_cubed, solve_invariant_grouped, A_PRECISION, MAX_ROUNDS, N_COINS,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== StableSwap invariant D (n = {N_COINS}) ===");
    println!("A_PRECISION = {A_PRECISION}, MAX_ROUNDS = {MAX_ROUNDS}\n");

    let pools: [([u128; 2], u128); 5] = [
        ([101_010, 200], 50),
        ([100_000, 200], 8_000),
        ([500, 1_500], 85),
        ([5_000, 3_000], 200),
        ([1_000_000, 1_000_000], 100),
    ];

    println!(
        "{:>22} {:>6} {:>10} {:>10} {:>10}",
        "balances", "amp", "canonical", "grouped", "cubed"
    );
    for (balances, amplification) in pools {
        let config = StableSwapConfig::new(balances, amplification)?;
        let [x, y] = config.balances();
        let canonical = config.invariant()?;
        let grouped = solve_invariant_grouped(x, y, amplification)?;
        let cubed = solve_invariant_cubed(x, y, amplification)?;
        let marker = if cubed == canonical { "" } else { "  <- truncation" };
        println!(
            "{:>22} {:>6} {:>10} {:>10} {:>10}{marker}",
            format!("{balances:?}"),
            amplification,
            canonical,
            grouped,
            cubed
        );
    }

    // Invalid parameters are rejected before any iteration.
    match StableSwapConfig::new([1_000, 0], 50) {
        Ok(_) => println!("\nunexpectedly accepted a half-empty pool"),
        Err(err) => println!("\nRejected [1000, 0]: {err}"),
    }

    Ok(())
}
