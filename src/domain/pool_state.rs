//! Snapshot of a constant-product pool.

use core::fmt;

use tracing::warn;

use super::SwapAsset;
use crate::error::AmmError;
use crate::math::{checked_add, checked_mul, is_close};

/// The four fields that make up a pool's state.
///
/// A `PoolState` is a plain value.  Pools never edit one field at a time:
/// every committed operation builds a complete successor state and
/// replaces the previous one, so the reserves, the cached `product` and
/// the share supply are always observed together.
///
/// # Invariants
///
/// - `product ≈ reserve_btc × reserve_usdc` within the pool tolerance.
/// - All four fields are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolState {
    reserve_btc: f64,
    reserve_usdc: f64,
    product: f64,
    lp_supply: f64,
}

impl PoolState {
    /// Seeds a fresh state: `product = btc × usdc`, `lp_supply = btc + usdc`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the product or the supply is not
    /// finite.
    pub(crate) fn seed(reserve_btc: f64, reserve_usdc: f64) -> crate::error::Result<Self> {
        Ok(Self {
            reserve_btc,
            reserve_usdc,
            product: checked_mul(reserve_btc, reserve_usdc, "initial product overflow")?,
            lp_supply: checked_add(reserve_btc, reserve_usdc, "initial supply overflow")?,
        })
    }

    /// Successor state with new reserves and supply and a recomputed product.
    pub(crate) fn rebalanced(
        reserve_btc: f64,
        reserve_usdc: f64,
        lp_supply: f64,
    ) -> crate::error::Result<Self> {
        if !(reserve_btc > 0.0 && reserve_usdc > 0.0 && lp_supply > 0.0) {
            return Err(AmmError::InvalidAmount("pool state must stay positive"));
        }
        Ok(Self {
            reserve_btc,
            reserve_usdc,
            product: checked_mul(reserve_btc, reserve_usdc, "product overflow")?,
            lp_supply,
        })
    }

    /// Successor state after a swap: new reserves, cached product kept.
    pub(crate) const fn with_reserves(&self, reserve_btc: f64, reserve_usdc: f64) -> Self {
        Self {
            reserve_btc,
            reserve_usdc,
            product: self.product,
            lp_supply: self.lp_supply,
        }
    }

    /// BTC reserve.
    #[must_use]
    pub const fn reserve_btc(&self) -> f64 {
        self.reserve_btc
    }

    /// USDC reserve.
    #[must_use]
    pub const fn reserve_usdc(&self) -> f64 {
        self.reserve_usdc
    }

    /// Reserve of `asset`.
    #[must_use]
    pub const fn reserve(&self, asset: SwapAsset) -> f64 {
        match asset {
            SwapAsset::Btc => self.reserve_btc,
            SwapAsset::Usdc => self.reserve_usdc,
        }
    }

    /// Cached product invariant.
    #[must_use]
    pub const fn product(&self) -> f64 {
        self.product
    }

    /// Outstanding pool-share supply.
    #[must_use]
    pub const fn lp_supply(&self) -> f64 {
        self.lp_supply
    }

    /// `reserve_btc × reserve_usdc` as observed right now.
    #[must_use]
    pub fn observed_product(&self) -> f64 {
        self.reserve_btc * self.reserve_usdc
    }

    /// `reserve_btc / reserve_usdc`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.reserve_btc / self.reserve_usdc
    }

    /// Checks the observed product against the cached one.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LiquidityCorrupted`] if they differ by more than
    /// `tolerance` (relative).
    pub fn validate_product(&self, tolerance: f64) -> crate::error::Result<()> {
        let observed = self.observed_product();
        if is_close(observed, self.product, tolerance) {
            return Ok(());
        }
        warn!(
            cached = self.product,
            observed,
            reserve_btc = self.reserve_btc,
            reserve_usdc = self.reserve_usdc,
            "product invariant violated"
        );
        Err(AmmError::LiquidityCorrupted {
            cached: self.product,
            observed,
        })
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolState(btc: {}, usdc: {}, product: {}, lp: {})",
            self.reserve_btc, self.reserve_usdc, self.product, self.lp_supply
        )
    }
}
