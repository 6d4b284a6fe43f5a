//! Uncommitted outcome of a swap against a pool snapshot.

use super::{SwapAmount, SwapAsset};
use crate::math::checked_div;

/// Reserves before and after a prospective swap, plus the gross output.
///
/// The *identical* side is the asset being paid in; the *contrary* side is
/// the asset being paid out.  A forecast never touches pool state: swap,
/// price and price-impact queries all derive from the same forecast, and
/// only [`swap`](crate::traits::SwapPool::swap) commits it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapForecast {
    pub(crate) paid: SwapAmount,
    pub(crate) identical_reserve: f64,
    pub(crate) identical_after: f64,
    pub(crate) contrary_reserve: f64,
    pub(crate) contrary_after: f64,
    pub(crate) gross_output: f64,
}

impl SwapForecast {
    /// The payment this forecast was computed for.
    #[must_use]
    pub const fn paid(&self) -> SwapAmount {
        self.paid
    }

    /// Asset being paid in.
    #[must_use]
    pub const fn identical_asset(&self) -> SwapAsset {
        self.paid.asset()
    }

    /// Asset being paid out.
    #[must_use]
    pub const fn contrary_asset(&self) -> SwapAsset {
        self.paid.counter_asset()
    }

    /// Paid-side reserve before the swap.
    #[must_use]
    pub const fn identical_reserve(&self) -> f64 {
        self.identical_reserve
    }

    /// Paid-side reserve after the swap.
    #[must_use]
    pub const fn identical_reserve_after(&self) -> f64 {
        self.identical_after
    }

    /// Output-side reserve before the swap.
    #[must_use]
    pub const fn contrary_reserve(&self) -> f64 {
        self.contrary_reserve
    }

    /// Output-side reserve after the swap.
    #[must_use]
    pub const fn contrary_reserve_after(&self) -> f64 {
        self.contrary_after
    }

    /// Output implied by the constant-product curve, before fees.
    #[must_use]
    pub const fn gross_output(&self) -> f64 {
        self.gross_output
    }

    /// Output after withholding `fee_rate`: `gross × (1 − fee_rate)`.
    #[must_use]
    pub fn net_output(&self, fee_rate: f64) -> f64 {
        self.gross_output * (1.0 - fee_rate)
    }

    /// Execution price: `paid / gross_output`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`](crate::error::AmmError::DivisionByZero)
    /// if the payment is too small to move the contrary reserve.
    pub fn price(&self) -> crate::error::Result<f64> {
        checked_div(self.paid.get(), self.gross_output, "price overflow")
    }

    /// Relative move of the identical/contrary reserve ratio:
    /// `|post − pre| / pre`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) if a
    /// ratio is not finite.
    pub fn price_impact(&self) -> crate::error::Result<f64> {
        let pre = checked_div(
            self.identical_reserve,
            self.contrary_reserve,
            "pre-trade price overflow",
        )?;
        let post = checked_div(
            self.identical_after,
            self.contrary_after,
            "post-trade price overflow",
        )?;
        checked_div((post - pre).abs(), pre, "price impact overflow")
    }

    /// Reserves after the swap as `(btc, usdc)`.
    #[must_use]
    pub const fn reserves_after(&self) -> (f64, f64) {
        match self.identical_asset() {
            SwapAsset::Btc => (self.identical_after, self.contrary_after),
            SwapAsset::Usdc => (self.contrary_after, self.identical_after),
        }
    }
}
