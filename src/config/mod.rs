//! Validated configuration values.
//!
//! Each struct validates its invariants on construction; pools are built
//! from them through [`FromConfig`](crate::traits::FromConfig).

#[cfg(feature = "constant-product")]
mod constant_product;
#[cfg(feature = "stableswap")]
mod stableswap;

#[cfg(feature = "constant-product")]
pub use constant_product::ConstantProductConfig;
#[cfg(feature = "stableswap")]
pub use stableswap::StableSwapConfig;
