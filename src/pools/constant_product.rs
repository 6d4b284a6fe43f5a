//! Constant Product pool implementation for the BTC/USDC pair.
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the BTC and USDC
//! reserves.  The pool caches `k` and checks the reserves against it before
//! and after every swap.
//!
//! # Swap Algorithm (paying asset I for asset C)
//!
//! 1. validate `reserve_btc × reserve_usdc ≈ k`
//! 2. `reserve_I' = reserve_I + paid`
//! 3. `reserve_C' = k / reserve_I'`
//! 4. `gross = reserve_C − reserve_C'`
//! 5. validate `reserve_I' × reserve_C' ≈ k`, commit
//! 6. pay out `gross × (1 − FEE_RATE)`; the rest is withheld
//!
//! # Share Accounting
//!
//! Shares are seeded as `btc + usdc`.  A balanced deposit of fraction `f`
//! mints `f × lp_supply`; burning `s` shares returns `s / lp_supply` of
//! each reserve.
//!
//! # Atomicity
//!
//! Every operation computes a complete successor [`PoolState`] and swaps it
//! in with a single assignment after all checks pass.  A failed operation
//! leaves the pool untouched.

use tracing::debug;

use crate::config::ConstantProductConfig;
use crate::domain::{LpAmount, PoolState, SwapAmount, SwapAsset, SwapForecast};
use crate::error::AmmError;
use crate::math::{checked_add, checked_div, checked_mul, is_close};
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// Relative tolerance for the product invariant and balanced deposits.
pub const LIQUIDITY_TOLERANCE: f64 = 1e-7;

/// Fraction of every swap's gross output withheld by the pool (0.3%).
pub const FEE_RATE: f64 = 0.003;

/// A constant-product AMM pool (`x · y = k`) trading BTC against USDC.
///
/// # State
///
/// - `reserve_btc` / `reserve_usdc`: current balances
/// - `product`: cached invariant `k`
/// - `lp_supply`: outstanding pool shares
///
/// # Example
///
/// ```rust
/// use pool_math::domain::SwapAmount;
/// use pool_math::pools::ConstantProductPool;
/// use pool_math::traits::SwapPool;
///
/// let btc  = SwapAmount::btc(10.0).expect("positive");
/// let usdc = SwapAmount::usdc(40.0).expect("positive");
/// let mut pool = ConstantProductPool::new(btc, usdc).expect("pool created");
///
/// let out = pool.swap(SwapAmount::usdc(10.0).expect("positive")).expect("swap ok");
/// assert!(out.is_btc());
/// assert!((out.get() - 1.994).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantProductPool {
    state: PoolState,
}

impl ConstantProductPool {
    /// Creates a pool seeded with BTC and USDC liquidity.
    ///
    /// # Errors
    ///
    /// - [`AmmError::WrongAsset`] if the amounts are not BTC and USDC.
    /// - [`AmmError::InvalidConfiguration`] if the initial liquidity
    ///   overflows.
    pub fn new(initial_btc: SwapAmount, initial_usdc: SwapAmount) -> Result<Self, AmmError> {
        Self::from_config(&ConstantProductConfig::new(initial_btc, initial_usdc)?)
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        self.state
    }

    /// Current BTC reserve.
    #[must_use]
    pub const fn reserve_btc(&self) -> f64 {
        self.state.reserve_btc()
    }

    /// Current USDC reserve.
    #[must_use]
    pub const fn reserve_usdc(&self) -> f64 {
        self.state.reserve_usdc()
    }

    /// Current reserve of `asset`.
    #[must_use]
    pub const fn reserve(&self, asset: SwapAsset) -> f64 {
        self.state.reserve(asset)
    }

    /// Cached product invariant.
    #[must_use]
    pub const fn product(&self) -> f64 {
        self.state.product()
    }

    fn commit(&mut self, next: PoolState, operation: &'static str) {
        debug!(
            operation,
            reserve_btc = next.reserve_btc(),
            reserve_usdc = next.reserve_usdc(),
            product = next.product(),
            lp_supply = next.lp_supply(),
            "pool state committed"
        );
        self.state = next;
    }
}

impl FromConfig<ConstantProductConfig> for ConstantProductPool {
    /// Creates a new pool from the given configuration.
    ///
    /// Initial shares are `btc + usdc`; the initial invariant is
    /// `btc × usdc`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ConstantProductConfig::validate`].
    fn from_config(config: &ConstantProductConfig) -> Result<Self, AmmError> {
        config.validate()?;
        let state = PoolState::seed(config.initial_btc().get(), config.initial_usdc().get())?;
        debug!(%state, "pool created");
        Ok(Self { state })
    }
}

impl SwapPool for ConstantProductPool {
    /// Forecasts a swap against the current reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::LiquidityCorrupted`] if the cached product no longer
    ///   matches the reserves.
    /// - [`AmmError::PaymentExceedsReserve`] if `paid` is not strictly
    ///   below the reserve of its own asset.
    fn forecast_swap(&self, paid: &SwapAmount) -> Result<SwapForecast, AmmError> {
        self.state.validate_product(LIQUIDITY_TOLERANCE)?;

        let identical_reserve = self.state.reserve(paid.asset());
        let contrary_reserve = self.state.reserve(paid.counter_asset());
        if paid.get() >= identical_reserve {
            return Err(AmmError::PaymentExceedsReserve {
                paid: paid.get(),
                reserve: identical_reserve,
            });
        }

        let identical_after = checked_add(identical_reserve, paid.get(), "reserve overflow")?;
        let contrary_after = checked_div(self.state.product(), identical_after, "quote overflow")?;

        Ok(SwapForecast {
            paid: *paid,
            identical_reserve,
            identical_after,
            contrary_reserve,
            contrary_after,
            gross_output: contrary_reserve - contrary_after,
        })
    }

    /// Executes a swap and returns the contrary asset net of the fee.
    ///
    /// # Errors
    ///
    /// - Everything [`forecast_swap`](Self::forecast_swap) returns.
    /// - [`AmmError::LiquidityCorrupted`] if the post-swap reserves drift
    ///   from the cached product.
    /// - [`AmmError::InvalidAmount`] if the payment is too small to produce
    ///   any output.
    fn swap(&mut self, paid: SwapAmount) -> Result<SwapAmount, AmmError> {
        let forecast = self.forecast_swap(&paid)?;
        let (reserve_btc, reserve_usdc) = forecast.reserves_after();
        let next = self.state.with_reserves(reserve_btc, reserve_usdc);
        next.validate_product(LIQUIDITY_TOLERANCE)?;

        let output = SwapAmount::new(forecast.contrary_asset(), forecast.net_output(FEE_RATE))?;
        self.commit(next, "swap");
        Ok(output)
    }

    fn fee_rate(&self) -> f64 {
        FEE_RATE
    }
}

impl LiquidityPool for ConstantProductPool {
    fn get_balanced_contrary_amount(&self, side: &SwapAmount) -> Result<SwapAmount, AmmError> {
        let scaled = checked_mul(
            side.get(),
            self.state.reserve(side.counter_asset()),
            "balanced amount overflow",
        )?;
        let balanced = checked_div(
            scaled,
            self.state.reserve(side.asset()),
            "balanced amount overflow",
        )?;
        SwapAmount::new(side.counter_asset(), balanced)
    }

    fn deposit_liquidity(
        &mut self,
        btc: SwapAmount,
        usdc: SwapAmount,
    ) -> Result<LpAmount, AmmError> {
        btc.assert_btc()?;
        usdc.assert_usdc()?;
        Err(AmmError::Unsupported(
            "deposits at an arbitrary ratio need rebalancing; use deposit_balanced_liquidity",
        ))
    }

    /// Deposits a balanced pair and mints `(btc / reserve_btc) × lp_supply`
    /// shares.
    fn deposit_balanced_liquidity(
        &mut self,
        btc: SwapAmount,
        usdc: SwapAmount,
    ) -> Result<LpAmount, AmmError> {
        btc.assert_btc()?;
        usdc.assert_usdc()?;

        let btc_share = checked_div(btc.get(), self.state.reserve_btc(), "deposit share")?;
        let usdc_share = checked_div(usdc.get(), self.state.reserve_usdc(), "deposit share")?;
        if !is_close(btc_share, usdc_share, LIQUIDITY_TOLERANCE) {
            return Err(AmmError::UnbalancedDeposit {
                btc_share,
                usdc_share,
            });
        }

        let minted = LpAmount::new(checked_mul(
            btc_share,
            self.state.lp_supply(),
            "minted shares overflow",
        )?)?;
        let next = PoolState::rebalanced(
            checked_add(self.state.reserve_btc(), btc.get(), "reserve overflow")?,
            checked_add(self.state.reserve_usdc(), usdc.get(), "reserve overflow")?,
            checked_add(self.state.lp_supply(), minted.get(), "supply overflow")?,
        )?;

        self.commit(next, "deposit");
        Ok(minted)
    }

    /// Burns `shares` and pays out `shares / lp_supply` of each reserve.
    fn withdraw_liquidity(
        &mut self,
        shares: LpAmount,
    ) -> Result<(SwapAmount, SwapAmount), AmmError> {
        let supply = self.state.lp_supply();
        if shares.get() >= supply {
            return Err(AmmError::ExceedsTotalLiquidity {
                requested: shares.get(),
                supply,
            });
        }

        let share = shares.get() / supply;
        let btc = SwapAmount::btc(self.state.reserve_btc() * share)?;
        let usdc = SwapAmount::usdc(self.state.reserve_usdc() * share)?;
        let next = PoolState::rebalanced(
            self.state.reserve_btc() - btc.get(),
            self.state.reserve_usdc() - usdc.get(),
            supply - shares.get(),
        )?;

        self.commit(next, "withdraw");
        Ok((btc, usdc))
    }

    fn lp_supply(&self) -> f64 {
        self.state.lp_supply()
    }
}
