//! Liquidity provision trait extending [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! The share supply reported by [`LiquidityPool::lp_supply`] changes only
//! through deposits and withdrawals; swaps never mint or burn shares.  A
//! deposit that grows each reserve by fraction `f` mints `f × lp_supply`
//! shares, and burning `s` shares returns `s / lp_supply` of each reserve.

use super::SwapPool;
use crate::domain::{LpAmount, SwapAmount};
use crate::error::AmmError;

/// Pools that accept deposits and issue pool shares.
pub trait LiquidityPool: SwapPool {
    /// Amount of the other asset that matches `side` at the current
    /// reserve ratio: `side × reserve_other / reserve_side`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result is not finite, or
    /// [`AmmError::InvalidAmount`] if it rounds to zero.
    fn get_balanced_contrary_amount(&self, side: &SwapAmount) -> Result<SwapAmount, AmmError>;

    /// Deposits amounts at an arbitrary ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::WrongAsset`] if the amounts are not BTC and USDC.
    /// - [`AmmError::Unsupported`] otherwise: rebalancing an uneven deposit
    ///   has no implementation.
    fn deposit_liquidity(&mut self, btc: SwapAmount, usdc: SwapAmount)
        -> Result<LpAmount, AmmError>;

    /// Deposits amounts that grow both reserves by the same fraction and
    /// mints the corresponding shares.
    ///
    /// # Errors
    ///
    /// - [`AmmError::WrongAsset`] if the amounts are not BTC and USDC.
    /// - [`AmmError::UnbalancedDeposit`] if the fractions differ beyond the
    ///   pool tolerance.
    fn deposit_balanced_liquidity(
        &mut self,
        btc: SwapAmount,
        usdc: SwapAmount,
    ) -> Result<LpAmount, AmmError>;

    /// Burns `shares` and returns the proportional `(btc, usdc)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ExceedsTotalLiquidity`] if `shares ≥ lp_supply`.
    fn withdraw_liquidity(&mut self, shares: LpAmount)
        -> Result<(SwapAmount, SwapAmount), AmmError>;

    /// Outstanding pool-share supply.
    #[must_use]
    fn lp_supply(&self) -> f64;
}
