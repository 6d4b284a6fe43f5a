//! Feature-gated pool implementations.
//!
//! | Feature | Type | Role |
//! |---------|------|------|
//! | `constant-product` | [`ConstantProductPool`] | Single-owner BTC/USDC `x · y = k` pool |
//! | `constant-product` | [`SharedPool`] | `Send + Sync` handle serializing access to one pool |

#[cfg(feature = "constant-product")]
pub mod constant_product;
#[cfg(feature = "constant-product")]
mod shared;

#[cfg(feature = "constant-product")]
pub use constant_product::{ConstantProductPool, FEE_RATE, LIQUIDITY_TOLERANCE};
#[cfg(feature = "constant-product")]
pub use shared::SharedPool;

#[cfg(all(test, feature = "constant-product"))]
#[allow(clippy::panic)]
mod proptest_properties;
