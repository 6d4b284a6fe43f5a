//! Value types exchanged with the pool.
//!
//! Asset kinds, positive amounts, pool-state snapshots and swap forecasts.
//! Amounts use validated constructors: once a value exists it is known to
//! be finite and strictly positive.

mod asset;
mod lp_amount;
mod pool_state;
mod swap_amount;
mod swap_forecast;

pub use asset::{ShareAsset, SwapAsset};
pub use lp_amount::LpAmount;
pub use pool_state::PoolState;
pub use swap_amount::SwapAmount;
pub use swap_forecast::SwapForecast;
