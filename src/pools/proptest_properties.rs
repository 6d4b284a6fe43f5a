//! Property-based tests using `proptest` for pool and solver invariants.
//!
//! 1. **Swap reversibility**: BTC→USDC→BTC returns less than was paid.
//! 2. **Invariant preservation**: swaps keep `reserve_btc × reserve_usdc`
//!    on the cached product and never touch the share supply.
//! 3. **Fee withholding**: the payout is exactly `gross × (1 − FEE_RATE)`.
//! 4. **Liquidity conservation**: deposit then withdraw of the minted
//!    shares returns the deposit.
//! 5. **Ratio conservation**: any sequence of balanced deposits and partial
//!    withdrawals keeps `reserve_btc / reserve_usdc` unchanged.
//! 6. **Price impact**: non-negative and strictly growing with the payment.
//! 7. **Solver agreement**: the three `D` formulations stay within a few
//!    units of each other and never exceed the balance sum.

use proptest::prelude::*;

use crate::domain::{LpAmount, SwapAmount};
use crate::math::is_close;
use crate::pools::constant_product::{ConstantProductPool, FEE_RATE, LIQUIDITY_TOLERANCE};
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_pool(btc: f64, usdc: f64) -> ConstantProductPool {
    let (Ok(b), Ok(u)) = (SwapAmount::btc(btc), SwapAmount::usdc(usdc)) else {
        panic!("valid amounts");
    };
    let Ok(pool) = ConstantProductPool::new(b, u) else {
        panic!("valid pool");
    };
    pool
}

fn relative_eq(a: f64, b: f64) -> bool {
    is_close(a, b, 1e-9)
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserves in `[1, 1_000_000]`.
fn reserve_strategy() -> impl Strategy<Value = f64> {
    (1u32..=1_000_000u32).prop_map(f64::from)
}

/// Payment as a fraction of the paid-side reserve, in `(0, 0.5]`.
fn fraction_strategy() -> impl Strategy<Value = f64> {
    (1u32..=500u32).prop_map(|v| f64::from(v) / 1_000.0)
}

/// Solver balances kept within a factor of 100 of each other.
fn balance_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=1_000_000u128
}

/// Raw amplification coefficients, including values below `A_PRECISION`.
fn amplification_strategy() -> impl Strategy<Value = u128> {
    1u128..=5_000u128
}

/// A liquidity step: `true` deposits, `false` withdraws, sized by the fraction.
fn liquidity_steps_strategy() -> impl Strategy<Value = Vec<(bool, f64)>> {
    proptest::collection::vec((any::<bool>(), fraction_strategy()), 1..=16)
}

// ---------------------------------------------------------------------------
// Constant product pool
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_swap_reversibility(
        btc in reserve_strategy(),
        usdc in reserve_strategy(),
        fraction in fraction_strategy(),
    ) {
        let mut pool = make_pool(btc, usdc);
        let Ok(paid) = SwapAmount::btc(btc * fraction) else {
            return Ok(());
        };
        let Ok(received) = pool.swap(paid) else {
            return Ok(());
        };
        let Ok(back) = pool.swap(received) else {
            return Ok(());
        };
        prop_assert!(back.is_btc());
        prop_assert!(
            back.get() < paid.get(),
            "round trip gained value: {} >= {}",
            back.get(),
            paid.get()
        );
    }

    #[test]
    fn prop_swap_preserves_product_and_supply(
        btc in reserve_strategy(),
        usdc in reserve_strategy(),
        fraction in fraction_strategy(),
        pay_btc in any::<bool>(),
    ) {
        let mut pool = make_pool(btc, usdc);
        let before = pool.state();
        let paid = if pay_btc {
            SwapAmount::btc(btc * fraction)
        } else {
            SwapAmount::usdc(usdc * fraction)
        };
        let Ok(paid) = paid else {
            return Ok(());
        };
        let result = pool.swap(paid);
        prop_assert!(result.is_ok(), "swap failed: {:?}", result);
        let Ok(out) = result else {
            return Ok(());
        };

        let after = pool.state();
        prop_assert_eq!(out.asset(), paid.counter_asset());
        prop_assert_eq!(after.product(), before.product());
        prop_assert_eq!(after.lp_supply(), before.lp_supply());
        prop_assert!(is_close(after.observed_product(), after.product(), LIQUIDITY_TOLERANCE));
    }

    #[test]
    fn prop_fee_withheld_from_output(
        btc in reserve_strategy(),
        usdc in reserve_strategy(),
        fraction in fraction_strategy(),
    ) {
        let mut pool = make_pool(btc, usdc);
        let Ok(paid) = SwapAmount::usdc(usdc * fraction) else {
            return Ok(());
        };
        let forecast = pool.forecast_swap(&paid);
        prop_assert!(forecast.is_ok(), "forecast failed: {:?}", forecast);
        let result = pool.swap(paid);
        prop_assert!(result.is_ok(), "swap failed: {:?}", result);
        let (Ok(forecast), Ok(out)) = (forecast, result) else {
            return Ok(());
        };
        prop_assert!(out.get() < forecast.gross_output());
        prop_assert!(relative_eq(out.get(), forecast.gross_output() * (1.0 - FEE_RATE)));
    }

    #[test]
    fn prop_liquidity_conservation(
        btc in reserve_strategy(),
        usdc in reserve_strategy(),
        fraction in fraction_strategy(),
    ) {
        let mut pool = make_pool(btc, usdc);
        let Ok(deposit_btc) = SwapAmount::btc(btc * fraction) else {
            return Ok(());
        };
        let contrary = pool.get_balanced_contrary_amount(&deposit_btc);
        prop_assert!(contrary.is_ok(), "contrary amount failed: {:?}", contrary);
        let Ok(deposit_usdc) = contrary else {
            return Ok(());
        };
        let deposited = pool.deposit_balanced_liquidity(deposit_btc, deposit_usdc);
        prop_assert!(deposited.is_ok(), "deposit failed: {:?}", deposited);
        let Ok(minted) = deposited else {
            return Ok(());
        };
        let withdrawn = pool.withdraw_liquidity(minted);
        prop_assert!(withdrawn.is_ok(), "withdraw failed: {:?}", withdrawn);
        let Ok((out_btc, out_usdc)) = withdrawn else {
            return Ok(());
        };

        prop_assert!(relative_eq(out_btc.get(), deposit_btc.get()));
        prop_assert!(relative_eq(out_usdc.get(), deposit_usdc.get()));
        prop_assert!(relative_eq(pool.lp_supply(), btc + usdc));
        prop_assert!(relative_eq(pool.reserve_btc(), btc));
        prop_assert!(relative_eq(pool.reserve_usdc(), usdc));
    }

    #[test]
    fn prop_withdraw_whole_supply_rejected(
        btc in reserve_strategy(),
        usdc in reserve_strategy(),
    ) {
        let mut pool = make_pool(btc, usdc);
        let before = pool.clone();
        let Ok(all) = LpAmount::new(pool.lp_supply()) else {
            return Ok(());
        };
        prop_assert!(pool.withdraw_liquidity(all).is_err());
        prop_assert_eq!(pool, before);
    }

    #[test]
    fn prop_price_impact_monotonic(
        btc in reserve_strategy(),
        usdc in reserve_strategy(),
        small in fraction_strategy(),
        extra in fraction_strategy(),
    ) {
        let pool = make_pool(btc, usdc);
        let (Ok(a), Ok(b)) = (
            SwapAmount::btc(btc * small * 0.5),
            SwapAmount::btc(btc * (small + extra) * 0.5),
        ) else {
            return Ok(());
        };
        let (Ok(impact_a), Ok(impact_b)) = (pool.get_price_impact(&a), pool.get_price_impact(&b))
        else {
            return Ok(());
        };
        prop_assert!(impact_a >= 0.0);
        prop_assert!(impact_b > impact_a, "impact did not grow: {} <= {}", impact_b, impact_a);
    }

    #[test]
    fn prop_ratio_conserved_across_liquidity_sequence(
        btc in reserve_strategy(),
        usdc in reserve_strategy(),
        steps in liquidity_steps_strategy(),
    ) {
        let mut pool = make_pool(btc, usdc);
        let initial_ratio = pool.state().ratio();

        for (deposit, fraction) in steps {
            if deposit {
                let Ok(side) = SwapAmount::btc(pool.reserve_btc() * fraction) else {
                    return Ok(());
                };
                let contrary = pool.get_balanced_contrary_amount(&side);
                prop_assert!(contrary.is_ok(), "contrary amount failed: {:?}", contrary);
                let Ok(contrary) = contrary else {
                    return Ok(());
                };
                let result = pool.deposit_balanced_liquidity(side, contrary);
                prop_assert!(result.is_ok(), "deposit failed: {:?}", result);
            } else {
                let Ok(shares) = LpAmount::new(pool.lp_supply() * fraction) else {
                    return Ok(());
                };
                let result = pool.withdraw_liquidity(shares);
                prop_assert!(result.is_ok(), "withdraw failed: {:?}", result);
            }

            let ratio = pool.state().ratio();
            prop_assert!(
                is_close(ratio, initial_ratio, LIQUIDITY_TOLERANCE),
                "ratio drifted: {} vs {}",
                ratio,
                initial_ratio
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant solver
// ---------------------------------------------------------------------------

#[cfg(feature = "stableswap")]
mod solver {
    use proptest::prelude::*;

    use super::{amplification_strategy, balance_strategy};
    use crate::math::stableswap::{
        solve_invariant, solve_invariant_cubed, solve_invariant_grouped,
    };

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_grouped_matches_canonical(
            x in balance_strategy(),
            y in balance_strategy(),
            amp in amplification_strategy(),
        ) {
            let Ok(canonical) = solve_invariant(&[x, y], amp) else {
                return Ok(());
            };
            prop_assert_eq!(solve_invariant_grouped(x, y, amp), Ok(canonical));
        }

        #[test]
        fn prop_cubed_close_to_canonical(
            x in balance_strategy(),
            y in balance_strategy(),
            amp in amplification_strategy(),
        ) {
            let (Ok(canonical), Ok(cubed)) =
                (solve_invariant(&[x, y], amp), solve_invariant_cubed(x, y, amp))
            else {
                return Ok(());
            };
            prop_assert!(
                canonical.abs_diff(cubed) <= 3,
                "canonical {} vs cubed {}",
                canonical,
                cubed
            );
        }

        #[test]
        fn prop_invariant_bounded_by_sum(
            x in balance_strategy(),
            y in balance_strategy(),
            amp in amplification_strategy(),
        ) {
            let Ok(d) = solve_invariant(&[x, y], amp) else {
                return Ok(());
            };
            prop_assert!(d <= x + y, "D = {} above S = {}", d, x + y);
            prop_assert!(d > 0);
        }

        #[test]
        fn prop_balanced_invariant_is_sum(
            r in 1u128..=1_000_000_000_000u128,
            amp in amplification_strategy(),
        ) {
            let Ok(d) = solve_invariant(&[r, r], amp) else {
                return Ok(());
            };
            prop_assert!(d.abs_diff(2 * r) <= 1, "D = {} for balanced {}", d, r);
        }

        #[test]
        fn prop_solver_deterministic(
            x in balance_strategy(),
            y in balance_strategy(),
            amp in amplification_strategy(),
        ) {
            prop_assert_eq!(solve_invariant(&[x, y], amp), solve_invariant(&[x, y], amp));
            prop_assert_eq!(
                solve_invariant_cubed(x, y, amp),
                solve_invariant_cubed(x, y, amp)
            );
        }
    }
}
