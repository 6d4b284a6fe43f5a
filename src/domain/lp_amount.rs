//! Pool-share (LP) token amount.

use core::fmt;

use super::swap_amount::positive;
use super::ShareAsset;

/// A strictly positive quantity of pool shares.
///
/// Minted by a balanced deposit and burned by a withdrawal.  Same
/// construction rule as [`SwapAmount`](super::SwapAmount): non-positive or
/// non-finite values are rejected.
///
/// # Examples
///
/// ```
/// use pool_math::domain::LpAmount;
///
/// let shares = LpAmount::new(5.0).expect("positive");
/// assert_eq!(shares.get(), 5.0);
/// assert!(LpAmount::new(-5.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[must_use]
pub struct LpAmount(f64);

impl LpAmount {
    /// Creates a new share amount.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`](crate::error::AmmError::InvalidAmount)
    /// if `amount` is not finite or is not strictly positive.
    pub fn new(amount: f64) -> crate::error::Result<Self> {
        positive(amount).map(Self)
    }

    /// Share kind; always [`ShareAsset::Lp`].
    #[must_use]
    pub const fn asset(&self) -> ShareAsset {
        ShareAsset::Lp
    }

    /// Returns the raw quantity.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for LpAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}): {}", ShareAsset::Lp, self.0)
    }
}
