//! Unified error types for the pool-math library.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every variant belongs to exactly one [`ErrorCategory`], so
//! callers can branch on the kind of failure without matching every variant.
//!
//! Errors are always returned **before** any pool state is mutated: a failed
//! operation leaves the pool exactly as it was.

use core::fmt;

use thiserror::Error;

use crate::domain::SwapAsset;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Every failure the library can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmmError {
    /// An asset or share amount was zero, negative, or not finite.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A value of one asset kind was presented where another is required.
    #[error("wrong asset: expected {expected}, found {found}")]
    WrongAsset {
        /// The asset kind the operation requires.
        expected: SwapAsset,
        /// The asset kind that was presented.
        found: SwapAsset,
    },

    /// The observed reserve product no longer matches the cached invariant.
    #[error("product invariant violated: cached {cached}, observed {observed}")]
    LiquidityCorrupted {
        /// Cached product stored in the pool state.
        cached: f64,
        /// Product recomputed from the reserves.
        observed: f64,
    },

    /// A balanced deposit did not grow both reserves by the same fraction.
    #[error("deposit not balanced: btc share {btc_share}, usdc share {usdc_share}")]
    UnbalancedDeposit {
        /// Fraction of the BTC reserve being deposited.
        btc_share: f64,
        /// Fraction of the USDC reserve being deposited.
        usdc_share: f64,
    },

    /// A withdrawal asked for the whole share supply or more.
    #[error("withdrawal of {requested} shares beyond the total liquidity {supply}")]
    ExceedsTotalLiquidity {
        /// Shares presented for burning.
        requested: f64,
        /// Outstanding share supply.
        supply: f64,
    },

    /// A swap payment is at least as large as the paid-side reserve.
    #[error("payment of {paid} too large for reserve {reserve}")]
    PaymentExceedsReserve {
        /// Amount paid into the pool.
        paid: f64,
        /// Reserve of the paid asset before the swap.
        reserve: f64,
    },

    /// The invariant solver did not converge within the round cap.
    #[error("invariant did not converge within {rounds} rounds")]
    NonConvergence {
        /// Number of rounds executed before giving up.
        rounds: u32,
    },

    /// An intermediate result does not fit the numeric type.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A division by zero was attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// The amplification coefficient is zero.
    #[error("amplification must be positive")]
    InvalidAmplification,

    /// The operation exists in the API but has no implementation.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Coarse classification of [`AmmError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Construction of an amount with an invalid value.
    Value,
    /// A value of the wrong asset kind.
    Type,
    /// Internal consistency breach of the product invariant.
    Liquidity,
    /// Request rejected by pool rules (balance, supply, reserve bounds).
    Transaction,
    /// Solver failed to converge.
    Convergence,
    /// Overflow, division by zero, or out-of-range parameters.
    Arithmetic,
    /// Operation not implemented.
    Unsupported,
    /// Invalid configuration.
    Configuration,
}

impl AmmError {
    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAmount(_) => ErrorCategory::Value,
            Self::WrongAsset { .. } => ErrorCategory::Type,
            Self::LiquidityCorrupted { .. } => ErrorCategory::Liquidity,
            Self::UnbalancedDeposit { .. }
            | Self::ExceedsTotalLiquidity { .. }
            | Self::PaymentExceedsReserve { .. } => ErrorCategory::Transaction,
            Self::NonConvergence { .. } => ErrorCategory::Convergence,
            Self::Overflow(_) | Self::DivisionByZero | Self::InvalidAmplification => {
                ErrorCategory::Arithmetic
            }
            Self::Unsupported(_) => ErrorCategory::Unsupported,
            Self::InvalidConfiguration(_) => ErrorCategory::Configuration,
        }
    }

    /// Returns `true` if the error signals internal corruption rather than
    /// a rejected request.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Liquidity | ErrorCategory::Convergence
        )
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Value => "value",
            Self::Type => "type",
            Self::Liquidity => "liquidity",
            Self::Transaction => "transaction",
            Self::Convergence => "convergence",
            Self::Arithmetic => "arithmetic",
            Self::Unsupported => "unsupported",
            Self::Configuration => "configuration",
        };
        f.write_str(name)
    }
}
