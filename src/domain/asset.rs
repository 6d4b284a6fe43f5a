//! Asset kinds carried by swap-side and share-side amounts.

use core::fmt;

use crate::error::AmmError;

/// The two assets traded by the constant-product pool.
///
/// The set is closed: every swap-side amount is tagged with exactly one of
/// these kinds, and the tag never changes after construction.
///
/// # Examples
///
/// ```
/// use pool_math::domain::SwapAsset;
///
/// assert!(SwapAsset::Btc.is_btc());
/// assert_eq!(SwapAsset::Btc.counter(), SwapAsset::Usdc);
/// assert_eq!(SwapAsset::Usdc.to_string(), "USDC");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SwapAsset {
    /// Bitcoin side of the pair.
    Btc,
    /// USD Coin side of the pair.
    Usdc,
}

impl SwapAsset {
    /// Both kinds, BTC first.
    pub const ALL: [Self; 2] = [Self::Btc, Self::Usdc];

    /// Returns `true` for [`SwapAsset::Btc`].
    #[must_use]
    pub const fn is_btc(&self) -> bool {
        matches!(self, Self::Btc)
    }

    /// Returns `true` for [`SwapAsset::Usdc`].
    #[must_use]
    pub const fn is_usdc(&self) -> bool {
        matches!(self, Self::Usdc)
    }

    /// Returns the other asset of the pair.
    #[must_use]
    pub const fn counter(&self) -> Self {
        match self {
            Self::Btc => Self::Usdc,
            Self::Usdc => Self::Btc,
        }
    }

    /// Fails with [`AmmError::WrongAsset`] unless `self == expected`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::WrongAsset`] on a kind mismatch.
    pub const fn expect_kind(&self, expected: Self) -> crate::error::Result<()> {
        if *self as u8 == expected as u8 {
            Ok(())
        } else {
            Err(AmmError::WrongAsset {
                expected,
                found: *self,
            })
        }
    }

    /// Ticker symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Usdc => "USDC",
        }
    }
}

impl fmt::Display for SwapAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The pool-share token kind.
///
/// Disjoint from [`SwapAsset`]: a share amount can never be presented
/// where a swap-side amount is expected, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ShareAsset {
    /// Liquidity-provider share.
    #[default]
    Lp,
}

impl fmt::Display for ShareAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lp => f.write_str("LP"),
        }
    }
}
