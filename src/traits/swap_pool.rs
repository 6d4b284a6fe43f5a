//! Swap execution and quoting.
//!
//! [`SwapPool`] covers the pricing half of a pool:
//!
//! 1. **Forecast**: [`SwapPool::forecast_swap`] computes the post-swap
//!    reserves without touching state.
//! 2. **Execute**: [`SwapPool::swap`] commits a forecast.
//! 3. **Quote**: [`SwapPool::get_price`] and [`SwapPool::get_price_impact`]
//!    read the same forecast.
//!
//! # Fee Withholding
//!
//! Fees are taken from the **output**: the curve is evaluated on the full
//! payment and the caller receives `gross × (1 − fee_rate)`.  The withheld
//! part stays in the pool.

use crate::domain::{SwapAmount, SwapForecast};
use crate::error::AmmError;

/// Pools that quote and execute swaps between two assets.
///
/// # Errors
///
/// - [`AmmError::LiquidityCorrupted`]: cached invariant no longer matches
///   the reserves.
/// - [`AmmError::PaymentExceedsReserve`]: payment too large for the pool.
/// - [`AmmError::Overflow`]: a non-finite intermediate.
pub trait SwapPool {
    /// Computes the outcome of paying `paid` into the pool, without
    /// committing it.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn forecast_swap(&self, paid: &SwapAmount) -> Result<SwapForecast, AmmError>;

    /// Pays `paid` into the pool and returns the contrary asset, net of
    /// fees.  State changes atomically or not at all.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn swap(&mut self, paid: SwapAmount) -> Result<SwapAmount, AmmError>;

    /// Execution price of paying `paid`: `paid / gross_output`.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn get_price(&self, paid: &SwapAmount) -> Result<f64, AmmError> {
        self.forecast_swap(paid)?.price()
    }

    /// Relative move of the reserve ratio caused by paying `paid`.
    ///
    /// Always `≥ 0`.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn get_price_impact(&self, paid: &SwapAmount) -> Result<f64, AmmError> {
        self.forecast_swap(paid)?.price_impact()
    }

    /// Fraction of the gross output withheld by the pool.
    #[must_use]
    fn fee_rate(&self) -> f64;
}
