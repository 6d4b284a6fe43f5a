//! Construction of a pool from a validated configuration.
//!
//! Implementations **must** re-validate the configuration: a successfully
//! constructed pool is guaranteed to start in a valid state.
//!
//! There is no blanket implementation; every pool/config pairing is
//! written out explicitly.

use crate::error::AmmError;

/// Builds `Self` from a configuration value `C`.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the configuration, or
    /// [`AmmError::InvalidConfiguration`] for inconsistent parameters.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
