//! Core pool abstractions.
//!
//! [`SwapPool`] quotes and executes swaps, [`LiquidityPool`] manages
//! deposits and pool shares, [`FromConfig`] builds pools from validated
//! configuration.

mod from_config;
mod liquidity_pool;
mod swap_pool;

pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
