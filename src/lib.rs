//! # Pool Math
//!
//! Pricing and liquidity-accounting math for an automated market maker:
//!
//! - **Constant Product pool** (Uniswap v2 style) trading BTC against USDC,
//!   issuing and burning pool shares and quoting swaps with a 0.3% fee:
//!   `constant-product` feature
//! - **StableSwap invariant solver** (Curve style) computing the `D`
//!   invariant of a two-coin pool in bit-reproducible integer arithmetic:
//!   `stableswap` feature
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `constant-product` | yes | [`ConstantProductPool`](pools::ConstantProductPool) and [`SharedPool`](pools::SharedPool) |
//! | `stableswap` | yes | [`math::stableswap`] and [`StableSwapConfig`](config::StableSwapConfig) |
//!
//! # Quick Start
//!
//! ## Create a pool, deposit and swap
//!
//! ```rust
//! use pool_math::domain::{LpAmount, SwapAmount};
//! use pool_math::pools::ConstantProductPool;
//! use pool_math::traits::{LiquidityPool, SwapPool};
//!
//! // 1. Seed the pool with 10 BTC and 40 USDC (50 shares)
//! let mut pool = ConstantProductPool::new(
//!     SwapAmount::btc(10.0).expect("positive"),
//!     SwapAmount::usdc(40.0).expect("positive"),
//! )
//! .expect("pool created");
//!
//! // 2. Deposit 2 BTC plus the matching USDC
//! let btc = SwapAmount::btc(2.0).expect("positive");
//! let usdc = pool.get_balanced_contrary_amount(&btc).expect("balanced amount");
//! let minted = pool.deposit_balanced_liquidity(btc, usdc).expect("deposit ok");
//! assert!((minted.get() - 10.0).abs() < 1e-9);
//!
//! // 3. Pay 10 USDC for BTC
//! let out = pool.swap(SwapAmount::usdc(10.0).expect("positive")).expect("swap ok");
//! assert!(out.is_btc());
//!
//! // 4. Burn some shares
//! let (b, u) = pool
//!     .withdraw_liquidity(LpAmount::new(5.0).expect("positive"))
//!     .expect("withdraw ok");
//! assert!(b.get() > 0.0 && u.get() > 0.0);
//! ```
//!
//! ## Solve the StableSwap invariant
//!
//! ```rust
//! use pool_math::config::StableSwapConfig;
//!
//! let config = StableSwapConfig::new([101_010, 200], 50).expect("valid config");
//! assert_eq!(config.invariant(), Ok(20_149));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Pools     │  ConstantProductPool, SharedPool
//! └──────┬───────┘
//!        │ SwapPool + LiquidityPool traits, FromConfig
//!        ▼
//! ┌──────────────┐
//! │    Domain    │  SwapAmount, LpAmount, PoolState, SwapForecast
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │     Math     │  checked f64 helpers, StableSwap D solver
//! └──────────────┘
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber:
//! `debug` for every committed pool transition, `warn` when an invariant
//! check fails, `trace` for each solver round.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`SwapAmount`](domain::SwapAmount), [`LpAmount`](domain::LpAmount), [`PoolState`](domain::PoolState) |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | Validated pool and solver parameters |
//! | [`pools`]  | Feature-gated pool implementations |
//! | [`math`]   | Checked float helpers and the invariant solver |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
