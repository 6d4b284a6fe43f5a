//! Thread-safe handle around a [`ConstantProductPool`].
//!
//! A pool is single-owner: every mutating operation takes `&mut self`.
//! [`SharedPool`] puts one pool behind an `Arc<Mutex<_>>` so several
//! threads can trade against it.  Each call holds the lock for the whole
//! operation, so concurrent callers are serialized and no caller can
//! observe a half-applied state.

use std::sync::Arc;

use parking_lot::Mutex;

use super::ConstantProductPool;
use crate::domain::{LpAmount, PoolState, SwapAmount, SwapForecast};
use crate::error::AmmError;
use crate::traits::{LiquidityPool, SwapPool};

/// Cloneable, `Send + Sync` handle to a single pool.
///
/// Clones share the same pool.
///
/// # Example
///
/// ```rust
/// use pool_math::domain::SwapAmount;
/// use pool_math::pools::{ConstantProductPool, SharedPool};
///
/// let pool = ConstantProductPool::new(
///     SwapAmount::btc(10.0).expect("positive"),
///     SwapAmount::usdc(40.0).expect("positive"),
/// )
/// .expect("pool created");
/// let shared = SharedPool::new(pool);
///
/// let handle = shared.clone();
/// let _btc = std::thread::spawn(move || handle.swap(SwapAmount::usdc(10.0).expect("positive")))
///     .join()
///     .expect("thread finished")
///     .expect("swap ok");
///
/// assert!((shared.snapshot().reserve_btc() - 8.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct SharedPool {
    inner: Arc<Mutex<ConstantProductPool>>,
}

impl SharedPool {
    /// Wraps `pool` for shared use.
    #[must_use]
    pub fn new(pool: ConstantProductPool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// Consistent copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> PoolState {
        self.inner.lock().state()
    }

    /// Runs `f` with exclusive access, for multi-step operations that must
    /// not interleave with other callers.
    pub fn with_pool<R>(&self, f: impl FnOnce(&mut ConstantProductPool) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// See [`SwapPool::swap`].
    ///
    /// # Errors
    ///
    /// Same as [`ConstantProductPool::swap`](SwapPool::swap).
    pub fn swap(&self, paid: SwapAmount) -> Result<SwapAmount, AmmError> {
        self.inner.lock().swap(paid)
    }

    /// See [`SwapPool::forecast_swap`].
    ///
    /// # Errors
    ///
    /// Same as [`ConstantProductPool::forecast_swap`](SwapPool::forecast_swap).
    pub fn forecast_swap(&self, paid: &SwapAmount) -> Result<SwapForecast, AmmError> {
        self.inner.lock().forecast_swap(paid)
    }

    /// See [`SwapPool::get_price`].
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::get_price`].
    pub fn get_price(&self, paid: &SwapAmount) -> Result<f64, AmmError> {
        self.inner.lock().get_price(paid)
    }

    /// See [`SwapPool::get_price_impact`].
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::get_price_impact`].
    pub fn get_price_impact(&self, paid: &SwapAmount) -> Result<f64, AmmError> {
        self.inner.lock().get_price_impact(paid)
    }

    /// See [`LiquidityPool::get_balanced_contrary_amount`].
    ///
    /// # Errors
    ///
    /// Same as [`LiquidityPool::get_balanced_contrary_amount`].
    pub fn get_balanced_contrary_amount(&self, side: &SwapAmount) -> Result<SwapAmount, AmmError> {
        self.inner.lock().get_balanced_contrary_amount(side)
    }

    /// See [`LiquidityPool::deposit_balanced_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`LiquidityPool::deposit_balanced_liquidity`].
    pub fn deposit_balanced_liquidity(
        &self,
        btc: SwapAmount,
        usdc: SwapAmount,
    ) -> Result<LpAmount, AmmError> {
        self.inner.lock().deposit_balanced_liquidity(btc, usdc)
    }

    /// See [`LiquidityPool::withdraw_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`LiquidityPool::withdraw_liquidity`].
    pub fn withdraw_liquidity(&self, shares: LpAmount) -> Result<(SwapAmount, SwapAmount), AmmError> {
        self.inner.lock().withdraw_liquidity(shares)
    }
}

impl From<ConstantProductPool> for SharedPool {
    fn from(pool: ConstantProductPool) -> Self {
        Self::new(pool)
    }
}
