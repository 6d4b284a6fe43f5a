//! Configuration for the BTC/USDC constant-product pool.

use crate::domain::{SwapAmount, SwapAsset};
use crate::error::AmmError;
use crate::math::{checked_add, checked_mul};

/// Initial liquidity of a constant-product pool (`x · y = k`).
///
/// # Derived Values
///
/// - Initial invariant: `k = btc × usdc`
/// - Initial share supply: `btc + usdc`
///
/// # Validation
///
/// - The first amount must be BTC, the second USDC.
/// - `k` and the share supply must be finite.
///
/// Positivity is already guaranteed by [`SwapAmount`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantProductConfig {
    initial_btc: SwapAmount,
    initial_usdc: SwapAmount,
}

impl ConstantProductConfig {
    /// Creates a new `ConstantProductConfig`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::WrongAsset`] if the amounts are not BTC and USDC
    ///   respectively.
    /// - [`AmmError::InvalidConfiguration`] if the seeded product or share
    ///   supply overflows.
    pub fn new(initial_btc: SwapAmount, initial_usdc: SwapAmount) -> Result<Self, AmmError> {
        let config = Self {
            initial_btc,
            initial_usdc,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`ConstantProductConfig::new`].
    pub fn validate(&self) -> Result<(), AmmError> {
        self.initial_btc.assert_btc()?;
        self.initial_usdc.assert_usdc()?;
        let (btc, usdc) = (self.initial_btc.get(), self.initial_usdc.get());
        checked_mul(btc, usdc, "initial product")
            .and_then(|_| checked_add(btc, usdc, "initial supply"))
            .map_err(|_| AmmError::InvalidConfiguration("initial liquidity overflows"))?;
        Ok(())
    }

    /// Returns the initial BTC liquidity.
    pub const fn initial_btc(&self) -> SwapAmount {
        self.initial_btc
    }

    /// Returns the initial USDC liquidity.
    pub const fn initial_usdc(&self) -> SwapAmount {
        self.initial_usdc
    }

    /// Returns the initial liquidity of `asset`.
    pub const fn initial(&self, asset: SwapAsset) -> SwapAmount {
        match asset {
            SwapAsset::Btc => self.initial_btc,
            SwapAsset::Usdc => self.initial_usdc,
        }
    }
}
