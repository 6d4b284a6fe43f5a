//! Positive, asset-tagged amount exchanged with the pool.

use core::fmt;

use super::SwapAsset;
use crate::error::AmmError;

/// Rejects anything that is not a finite, strictly positive quantity.
pub(crate) fn positive(value: f64) -> crate::error::Result<f64> {
    if !value.is_finite() {
        return Err(AmmError::InvalidAmount("amount must be finite"));
    }
    if value <= 0.0 {
        return Err(AmmError::InvalidAmount("amount must be larger than 0"));
    }
    Ok(value)
}

/// A strictly positive quantity of one [`SwapAsset`].
///
/// Construction fails fast: zero, negative, NaN and infinite values are
/// rejected and no partial object is produced.  The asset kind is fixed
/// for the lifetime of the value.
///
/// Amounts move *by value* into pool operations; the pool hands back
/// freshly minted amounts.
///
/// # Examples
///
/// ```
/// use pool_math::domain::{SwapAmount, SwapAsset};
///
/// let btc = SwapAmount::btc(2.0).expect("positive");
/// assert!(btc.is_btc());
/// assert_eq!(btc.get(), 2.0);
/// assert!(SwapAmount::new(SwapAsset::Usdc, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[must_use]
pub struct SwapAmount {
    asset: SwapAsset,
    amount: f64,
}

impl SwapAmount {
    /// Creates a new amount of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if `amount` is not finite or is
    /// not strictly positive.
    pub fn new(asset: SwapAsset, amount: f64) -> crate::error::Result<Self> {
        let amount = positive(amount)?;
        Ok(Self { asset, amount })
    }

    /// Shorthand for `SwapAmount::new(SwapAsset::Btc, amount)`.
    ///
    /// # Errors
    ///
    /// See [`SwapAmount::new`].
    pub fn btc(amount: f64) -> crate::error::Result<Self> {
        Self::new(SwapAsset::Btc, amount)
    }

    /// Shorthand for `SwapAmount::new(SwapAsset::Usdc, amount)`.
    ///
    /// # Errors
    ///
    /// See [`SwapAmount::new`].
    pub fn usdc(amount: f64) -> crate::error::Result<Self> {
        Self::new(SwapAsset::Usdc, amount)
    }

    /// Returns the asset kind.
    #[must_use]
    pub const fn asset(&self) -> SwapAsset {
        self.asset
    }

    /// Returns the raw quantity.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.amount
    }

    /// Returns `true` if this is a BTC amount.
    #[must_use]
    pub const fn is_btc(&self) -> bool {
        self.asset.is_btc()
    }

    /// Returns the asset on the other side of the pair.
    #[must_use]
    pub const fn counter_asset(&self) -> SwapAsset {
        self.asset.counter()
    }

    /// Fails unless this amount is of kind `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::WrongAsset`] on a mismatch.
    pub const fn assert_asset(&self, expected: SwapAsset) -> crate::error::Result<()> {
        self.asset.expect_kind(expected)
    }

    /// Fails unless this is a BTC amount.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::WrongAsset`] for a USDC amount.
    pub const fn assert_btc(&self) -> crate::error::Result<()> {
        self.assert_asset(SwapAsset::Btc)
    }

    /// Fails unless this is a USDC amount.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::WrongAsset`] for a BTC amount.
    pub const fn assert_usdc(&self) -> crate::error::Result<()> {
        self.assert_asset(SwapAsset::Usdc)
    }
}

impl fmt::Display for SwapAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}): {}", self.asset, self.amount)
    }
}
