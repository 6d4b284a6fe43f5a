//! Integration tests exercising the public API end to end.
//!
//! Suites: pool lifecycle, failure atomicity, shared access and the
//! invariant solver.
//!
//! These tests require both features to be enabled.

#![cfg(all(feature = "constant-product", feature = "stableswap"))]
#![allow(clippy::panic)]

use pool_math::config::{ConstantProductConfig, StableSwapConfig};
use pool_math::domain::{LpAmount, PoolState, SwapAmount, SwapAsset};
use pool_math::error::{AmmError, ErrorCategory};
use pool_math::math::stableswap::{solve_invariant, solve_invariant_cubed, solve_invariant_grouped};
use pool_math::pools::{ConstantProductPool, SharedPool, FEE_RATE};
use pool_math::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn btc(v: f64) -> SwapAmount {
    let Ok(a) = SwapAmount::btc(v) else {
        panic!("valid BTC amount");
    };
    a
}

fn usdc(v: f64) -> SwapAmount {
    let Ok(a) = SwapAmount::usdc(v) else {
        panic!("valid USDC amount");
    };
    a
}

fn lp(v: f64) -> LpAmount {
    let Ok(a) = LpAmount::new(v) else {
        panic!("valid LP amount");
    };
    a
}

fn make_pool() -> ConstantProductPool {
    let Ok(cfg) = ConstantProductConfig::new(btc(10.0), usdc(40.0)) else {
        panic!("valid config");
    };
    let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    pool
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_state(state: PoolState, btc: f64, usdc: f64, product: f64, supply: f64) {
    assert!(close(state.reserve_btc(), btc), "btc {state}");
    assert!(close(state.reserve_usdc(), usdc), "usdc {state}");
    assert!(close(state.product(), product), "product {state}");
    assert!(close(state.lp_supply(), supply), "supply {state}");
}

// ===========================================================================
// Suite 1: Pool Lifecycle
// ===========================================================================

#[test]
fn lifecycle_deposit_withdraw_swap_withdraw() {
    let mut pool = make_pool();
    assert_state(pool.state(), 10.0, 40.0, 400.0, 50.0);

    // Balanced deposit: 2 BTC + 8 USDC mints 10 shares.
    let Ok(matching) = pool.get_balanced_contrary_amount(&btc(2.0)) else {
        panic!("balanced amount");
    };
    assert!(close(matching.get(), 8.0));
    let Ok(minted) = pool.deposit_balanced_liquidity(btc(2.0), matching) else {
        panic!("deposit");
    };
    assert!(close(minted.get(), 10.0));
    assert_state(pool.state(), 12.0, 48.0, 576.0, 60.0);

    // Burn 15 shares to get back to the seeded pool.
    let Ok((b, u)) = pool.withdraw_liquidity(lp(15.0)) else {
        panic!("withdraw");
    };
    assert!(close(b.get(), 3.0));
    assert!(close(u.get(), 12.0));
    assert_state(pool.state(), 9.0, 36.0, 324.0, 45.0);
}

#[test]
fn lifecycle_swap_then_withdraw() {
    let mut pool = make_pool();

    let Ok(out) = pool.swap(usdc(10.0)) else {
        panic!("swap");
    };
    assert_eq!(out.asset(), SwapAsset::Btc);
    assert!(close(out.get(), 1.994));
    assert_state(pool.state(), 8.0, 50.0, 400.0, 50.0);

    let Ok((b, u)) = pool.withdraw_liquidity(lp(5.0)) else {
        panic!("withdraw");
    };
    assert!(close(b.get(), 0.8));
    assert!(close(u.get(), 5.0));
    assert_state(pool.state(), 7.2, 45.0, 324.0, 45.0);
}

#[test]
fn quotes_match_execution() {
    let mut pool = make_pool();
    let paid = usdc(10.0);

    let Ok(price) = pool.get_price(&paid) else {
        panic!("price");
    };
    let Ok(impact) = pool.get_price_impact(&paid) else {
        panic!("impact");
    };
    let Ok(forecast) = pool.forecast_swap(&paid) else {
        panic!("forecast");
    };
    assert!(close(price, 5.0));
    assert!(close(impact, 0.5625));

    let Ok(out) = pool.swap(paid) else {
        panic!("swap");
    };
    assert!(close(out.get(), forecast.net_output(FEE_RATE)));
    let (b, u) = forecast.reserves_after();
    assert!(close(pool.reserve_btc(), b));
    assert!(close(pool.reserve_usdc(), u));
}

#[test]
fn swaps_in_both_directions() {
    let mut pool = make_pool();
    let Ok(got_usdc) = pool.swap(btc(1.0)) else {
        panic!("swap");
    };
    assert_eq!(got_usdc.asset(), SwapAsset::Usdc);
    let Ok(got_btc) = pool.swap(got_usdc) else {
        panic!("swap back");
    };
    assert!(got_btc.is_btc());
    assert!(got_btc.get() < 1.0);
    assert!(close(pool.lp_supply(), 50.0));
}

// ===========================================================================
// Suite 2: Failures Leave State Untouched
// ===========================================================================

#[test]
fn rejected_operations_are_atomic() {
    let mut pool = make_pool();
    let before = pool.state();

    let unbalanced = pool.deposit_balanced_liquidity(btc(2.0), usdc(6.0));
    assert!(matches!(unbalanced, Err(AmmError::UnbalancedDeposit { .. })));

    let swapped_kinds = pool.deposit_balanced_liquidity(usdc(8.0), btc(2.0));
    assert!(matches!(swapped_kinds, Err(AmmError::WrongAsset { .. })));

    let too_much = pool.withdraw_liquidity(lp(50.0));
    assert!(matches!(too_much, Err(AmmError::ExceedsTotalLiquidity { .. })));

    let oversized = pool.swap(btc(10.0));
    assert!(matches!(oversized, Err(AmmError::PaymentExceedsReserve { .. })));

    let arbitrary = pool.deposit_liquidity(btc(1.0), usdc(1.0));
    assert!(matches!(arbitrary, Err(AmmError::Unsupported(_))));

    assert_eq!(pool.state(), before);
}

#[test]
fn error_categories() {
    let mut pool = make_pool();
    let Err(err) = pool.withdraw_liquidity(lp(60.0)) else {
        panic!("expected error");
    };
    assert_eq!(err.category(), ErrorCategory::Transaction);
    assert!(!err.is_fatal());

    let Err(err) = SwapAmount::btc(0.0) else {
        panic!("expected error");
    };
    assert_eq!(err.category(), ErrorCategory::Value);
}

#[test]
fn construction_rejects_bad_amounts() {
    assert!(SwapAmount::btc(-1.0).is_err());
    assert!(SwapAmount::usdc(f64::NAN).is_err());
    assert!(LpAmount::new(0.0).is_err());
    assert!(matches!(
        ConstantProductConfig::new(usdc(1.0), usdc(1.0)),
        Err(AmmError::WrongAsset { .. })
    ));
}

// ===========================================================================
// Suite 3: Shared Access
// ===========================================================================

#[test]
fn shared_pool_serializes_threads() {
    let shared = SharedPool::from(make_pool());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pool = shared.clone();
            std::thread::spawn(move || {
                for _ in 0..25 {
                    let Ok(_) = pool.swap(usdc(0.1)) else {
                        panic!("swap failed");
                    };
                }
            })
        })
        .collect();
    for handle in handles {
        let Ok(()) = handle.join() else {
            panic!("thread panicked");
        };
    }

    let state = shared.snapshot();
    // 100 payments of 0.1 USDC
    assert!(close(state.reserve_usdc(), 50.0));
    assert!(close(state.reserve_btc(), 8.0));
    assert!(close(state.lp_supply(), 50.0));
}

// ===========================================================================
// Suite 4: Invariant Solver
// ===========================================================================

#[test]
fn solver_reference_vectors() {
    let cases: [([u128; 2], u128, [u128; 3]); 4] = [
        ([101_010, 200], 50, [20_149, 20_149, 20_147]),
        ([100_000, 200], 8_000, [71_769, 71_769, 71_768]),
        ([500, 1_500], 85, [1_849, 1_849, 1_848]),
        ([5_000, 3_000], 200, [7_913, 7_913, 7_913]),
    ];
    for (balances, amp, [canonical, grouped, cubed]) in cases {
        let [x, y] = balances;
        assert_eq!(solve_invariant(&balances, amp), Ok(canonical), "{balances:?}");
        assert_eq!(solve_invariant_grouped(x, y, amp), Ok(grouped), "{balances:?}");
        assert_eq!(solve_invariant_cubed(x, y, amp), Ok(cubed), "{balances:?}");
    }
}

#[test]
fn solver_through_config() {
    let Ok(cfg) = StableSwapConfig::new([5_000, 3_000], 200) else {
        panic!("valid config");
    };
    assert_eq!(cfg.invariant(), Ok(7_913));
    assert!(StableSwapConfig::new([5_000, 0], 200).is_err());
    assert!(StableSwapConfig::new([5_000, 3_000], 0).is_err());
    let Ok(low) = StableSwapConfig::new([1_000, 1_000], 49) else {
        panic!("low amplification accepted");
    };
    assert_eq!(low.invariant(), Ok(2_000));
}

#[test]
fn solver_edge_cases() {
    assert_eq!(solve_invariant(&[0, 0], 50), Ok(0));
    assert_eq!(solve_invariant(&[0, 7], 50), Err(AmmError::DivisionByZero));
    assert_eq!(
        solve_invariant(&[1_000, 1_000], 0),
        Err(AmmError::InvalidAmplification)
    );
}
