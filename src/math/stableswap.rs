//! StableSwap invariant `D` for a two-coin pool.
//!
//! # Invariant (n = 2)
//!
//! ```text
//! A·nⁿ·Σxᵢ + D = A·D·nⁿ + D^(n+1) / (nⁿ·Πxᵢ)
//! ```
//!
//! solved for `D` by damped fixed-point (Newton-style) iteration:
//!
//! ```text
//! D_P    = D^(n+1) / (nⁿ·Πxᵢ)
//! D_next = (Ann·S/P + D_P·n) · D / ((Ann − P)·D/P + (n+1)·D_P)
//! ```
//!
//! with `Ann = A·n`, `S = Σxᵢ` and `P = A_PRECISION`.
//!
//! # Rounding order
//!
//! All arithmetic is truncating `u128` integer arithmetic, so the order of
//! multiplications and divisions decides the result.  Three formulations
//! are provided and tested against the same reference vectors:
//!
//! | Function | `D_P` evaluation | Result for `([101010, 200], 50)` |
//! |----------|------------------|------|
//! | [`solve_invariant`] | `D_P·D/(n·xᵢ)` once per coin | `20149` |
//! | [`solve_invariant_grouped`] | same, two-coin constants inlined | `20149` |
//! | [`solve_invariant_cubed`] | `D³/x/y/4` | `20147` |
//!
//! The cubed grouping truncates at different points and may land one or
//! two units away from the canonical loop.  The divergence is a property
//! of the grouping, not a defect; [`solve_invariant`] is the reference.

use tracing::{trace, warn};

use crate::error::AmmError;

/// Number of coins in the pool.
pub const N_COINS: u128 = 2;

/// Fixed-point scale of the amplification coefficient (values are hundredths).
pub const A_PRECISION: u128 = 100;

/// Maximum number of refinement rounds before giving up.
pub const MAX_ROUNDS: u32 = 255;

/// Convergence threshold: successive iterates differing by at most this
/// many units are considered equal.
const CONVERGENCE_THRESHOLD: u128 = 1;

#[inline]
fn mul(a: u128, b: u128, context: &'static str) -> Result<u128, AmmError> {
    a.checked_mul(b).ok_or(AmmError::Overflow(context))
}

#[inline]
fn add(a: u128, b: u128, context: &'static str) -> Result<u128, AmmError> {
    a.checked_add(b).ok_or(AmmError::Overflow(context))
}

#[inline]
fn div(a: u128, b: u128) -> Result<u128, AmmError> {
    a.checked_div(b).ok_or(AmmError::DivisionByZero)
}

/// `A_PRECISION` for the signed damping term.
const SIGNED_PRECISION: i128 = A_PRECISION as i128;

#[inline]
fn signed(value: u128, context: &'static str) -> Result<i128, AmmError> {
    i128::try_from(value).map_err(|_| AmmError::Overflow(context))
}

/// Rejects a zero coefficient; every positive amplification is accepted.
fn amplified(amplification: u128) -> Result<u128, AmmError> {
    if amplification == 0 {
        return Err(AmmError::InvalidAmplification);
    }
    mul(amplification, N_COINS, "D: A·n overflow")
}

/// `⌊(ann − P)·d / P⌋ + weighted_dp`.
///
/// The damping term goes negative when `ann < P` and is floored toward
/// negative infinity.  A denominator that is not strictly positive is
/// reported as [`AmmError::DivisionByZero`].
fn denominator(ann: u128, d: u128, weighted_dp: u128) -> Result<u128, AmmError> {
    let excess = signed(ann, "D: Ann overflow")? - SIGNED_PRECISION;
    let damping = excess
        .checked_mul(signed(d, "D: D overflow")?)
        .ok_or(AmmError::Overflow("D: denominator overflow"))?
        .div_euclid(SIGNED_PRECISION);
    let total = damping
        .checked_add(signed(weighted_dp, "D: (n+1)·D_P overflow")?)
        .ok_or(AmmError::Overflow("D: denominator overflow"))?;
    u128::try_from(total)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(AmmError::DivisionByZero)
}

/// One update step shared by every formulation:
///
/// `(ann·s/P + d_p·n) · d / ((ann − P)·d/P + (n+1)·d_p)`
fn next_d(d: u128, d_p: u128, s: u128, ann: u128) -> Result<u128, AmmError> {
    let ann_s = mul(ann, s, "D: Ann·S overflow")? / A_PRECISION;
    let n_dp = mul(d_p, N_COINS, "D: D_P·n overflow")?;
    let numerator = mul(add(ann_s, n_dp, "D: numerator overflow")?, d, "D: numerator overflow")?;
    let right = mul(N_COINS + 1, d_p, "D: (n+1)·D_P overflow")?;

    div(numerator, denominator(ann, d, right)?)
}

/// Shared driver for a non-empty pool: start at `D = S`, refine with
/// `step` until two successive iterates differ by at most one unit.
fn converge<F>(s: u128, mut step: F) -> Result<u128, AmmError>
where
    F: FnMut(u128) -> Result<u128, AmmError>,
{
    let mut d = s;
    for round in 0..MAX_ROUNDS {
        let d_prev = d;
        d = step(d)?;
        trace!(round, d_prev, d, "invariant round");
        if d.abs_diff(d_prev) <= CONVERGENCE_THRESHOLD {
            return Ok(d);
        }
    }

    warn!(rounds = MAX_ROUNDS, s, "invariant did not converge");
    Err(AmmError::NonConvergence { rounds: MAX_ROUNDS })
}

/// Computes the invariant `D` for `balances` with amplification
/// `amplification` (scaled by [`A_PRECISION`]).
///
/// This is the canonical formulation: each round refines
/// `D_P = D_P · D / (xᵢ · n)` once per coin, truncating after every coin.
///
/// Returns `0` without iterating when every balance is zero.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if a balance is zero while the sum is not.
/// - [`AmmError::InvalidAmplification`] if `amplification` is zero.
/// - [`AmmError::DivisionByZero`] if the update denominator is not
///   strictly positive.
/// - [`AmmError::Overflow`] if an intermediate exceeds `u128`.
/// - [`AmmError::NonConvergence`] if no fixed point is reached within
///   [`MAX_ROUNDS`] rounds.
///
/// # Examples
///
/// ```
/// use pool_math::math::stableswap::solve_invariant;
///
/// assert_eq!(solve_invariant(&[101_010, 200], 50), Ok(20_149));
/// assert_eq!(solve_invariant(&[0, 0], 50), Ok(0));
/// ```
pub fn solve_invariant(
    balances: &[u128; N_COINS as usize],
    amplification: u128,
) -> Result<u128, AmmError> {
    let mut s = 0u128;
    for &x in balances {
        s = add(s, x, "D: S overflow")?;
    }
    if s == 0 {
        return Ok(0);
    }
    let ann = amplified(amplification)?;

    converge(s, |d| {
        let mut d_p = d;
        for &x in balances {
            let nx = mul(x, N_COINS, "D: xᵢ·n overflow")?;
            d_p = div(mul(d_p, d, "D: D_P·D overflow")?, nx)?;
        }
        next_d(d, d_p, s, ann)
    })
}

/// Two-coin formulation with the coin count written out as literals.
///
/// Refines `D_P = D·D/(2x)` then `D_P = D_P·D/(2y)`, identical in rounding
/// to [`solve_invariant`].  Kept as an independent cross-check.
///
/// # Errors
///
/// Same as [`solve_invariant`].
pub fn solve_invariant_grouped(x: u128, y: u128, amplification: u128) -> Result<u128, AmmError> {
    let s = add(x, y, "D: S overflow")?;
    if s == 0 {
        return Ok(0);
    }
    let ann = amplified(amplification)?;

    converge(s, |d| {
        let two_x = mul(x, 2, "D: 2x overflow")?;
        let two_y = mul(y, 2, "D: 2y overflow")?;
        let mut d_p = d;
        d_p = div(mul(d_p, d, "D: D_P·D overflow")?, two_x)?;
        d_p = div(mul(d_p, d, "D: D_P·D overflow")?, two_y)?;

        let numerator = mul(
            add(
                mul(ann, s, "D: Ann·S overflow")? / A_PRECISION,
                mul(d_p, 2, "D: 2·D_P overflow")?,
                "D: numerator overflow",
            )?,
            d,
            "D: numerator overflow",
        )?;
        div(
            numerator,
            denominator(ann, d, mul(3, d_p, "D: 3·D_P overflow")?)?,
        )
    })
}

/// Two-coin formulation that cubes `D` before dividing.
///
/// Refines `D_P = D·D·D / x / y / 4`.  Truncation happens after the full
/// cube rather than after each coin, so results may differ from
/// [`solve_invariant`] by a small integer amount (`20147` instead of
/// `20149` for `([101010, 200], 50)`).  The cube also overflows sooner:
/// `D` above roughly `6.9·10¹²` yields [`AmmError::Overflow`].
///
/// # Errors
///
/// Same as [`solve_invariant`].
pub fn solve_invariant_cubed(x: u128, y: u128, amplification: u128) -> Result<u128, AmmError> {
    let s = add(x, y, "D: S overflow")?;
    if s == 0 {
        return Ok(0);
    }
    let ann = amplified(amplification)?;

    converge(s, |d| {
        let cube = mul(mul(d, d, "D: D² overflow")?, d, "D: D³ overflow")?;
        let d_p = div(div(cube, x)?, y)? / 4;
        next_d(d, d_p, s, ann)
    })
}
