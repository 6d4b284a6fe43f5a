//! Parameters for the StableSwap invariant solver.

use crate::error::AmmError;
use crate::math::stableswap::{solve_invariant, N_COINS};

/// Balances and amplification for a two-coin StableSwap invariant.
///
/// # Amplification Parameter
///
/// `amplification` is scaled by [`A_PRECISION`](crate::math::stableswap::A_PRECISION): a value of `5_000`
/// represents `A = 50`.  Any positive value is accepted; below
/// `A_PRECISION / N_COINS` the solver's damping term turns negative and is
/// floored.
///
/// # Validation
///
/// - Amplification strictly positive.
/// - Either every balance is zero (empty pool) or none is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StableSwapConfig {
    balances: [u128; N_COINS as usize],
    amplification: u128,
}

impl StableSwapConfig {
    /// Creates a new `StableSwapConfig`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the amplification is zero.
    /// - [`AmmError::InvalidConfiguration`] if exactly one balance is zero.
    pub fn new(balances: [u128; N_COINS as usize], amplification: u128) -> Result<Self, AmmError> {
        let config = Self {
            balances,
            amplification,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`StableSwapConfig::new`].
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.amplification == 0 {
            return Err(AmmError::InvalidConfiguration(
                "amplification must be positive",
            ));
        }
        let zeros = self.balances.iter().filter(|b| **b == 0).count();
        if zeros != 0 && zeros != self.balances.len() {
            return Err(AmmError::InvalidConfiguration(
                "balances must be all zero or all non-zero",
            ));
        }
        Ok(())
    }

    /// Returns the coin balances.
    #[must_use]
    pub const fn balances(&self) -> [u128; N_COINS as usize] {
        self.balances
    }

    /// Returns the precision-scaled amplification coefficient.
    #[must_use]
    pub const fn amplification(&self) -> u128 {
        self.amplification
    }

    /// Solves the invariant `D` with the canonical formulation.
    ///
    /// # Errors
    ///
    /// Propagates [`AmmError::Overflow`] and [`AmmError::NonConvergence`]
    /// from [`solve_invariant`].
    pub fn invariant(&self) -> Result<u128, AmmError> {
        solve_invariant(&self.balances, self.amplification)
    }
}
