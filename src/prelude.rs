//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pool_math::prelude::*;
//! ```

pub use crate::domain::{LpAmount, PoolState, ShareAsset, SwapAmount, SwapAsset, SwapForecast};

pub use crate::traits::{FromConfig, LiquidityPool, SwapPool};

pub use crate::error::{AmmError, ErrorCategory, Result};

#[cfg(feature = "constant-product")]
pub use crate::config::ConstantProductConfig;
#[cfg(feature = "stableswap")]
pub use crate::config::StableSwapConfig;

#[cfg(feature = "constant-product")]
pub use crate::pools::{ConstantProductPool, SharedPool};

#[cfg(feature = "stableswap")]
pub use crate::math::stableswap::solve_invariant;
