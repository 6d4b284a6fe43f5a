//! Arithmetic used by the pool and the invariant solver.
//!
//! | Module | Numeric type | Use |
//! |--------|--------------|-----|
//! | `float` | `f64` | Reserve accounting, tolerance checks |
//! | [`stableswap`] | `u128` | Bit-reproducible D-invariant solver (`stableswap` feature) |

mod float;
#[cfg(feature = "stableswap")]
pub mod stableswap;

pub use float::{checked_add, checked_div, checked_mul, is_close};
#[cfg(feature = "stableswap")]
pub use stableswap::{solve_invariant, solve_invariant_cubed, solve_invariant_grouped};
