//! Error-function boundary smoothing for the aether traffic generator.
//!
//! Concatenating two daily throughput segments naively leaves a jump at
//! the splice point. This crate blends the two sides with complementary
//! `erfc`-based weight functions centred on the boundary, so the joined
//! series approaches a common value there instead.
//!
//! Only the newest boundary is ever smoothed: folding [`splice_onto`]
//! left-to-right over many day segments leaves earlier interior
//! boundaries untouched apart from corrections that decay to zero within
//! a few time constants.

mod error;

pub use error::SmoothError;

use statrs::function::erf::erfc;

/// Smoothly concatenates two day segments into a new vector.
///
/// Identity elements: if `a` is empty the result is `b` unchanged, and
/// vice versa. Otherwise the discontinuity `df = b[0] - a[last]` is split
/// between the two sides with `erfc` weights over a local time axis
/// centred on the splice, measured in sample-index units of `td`.
///
/// The output always has length `a.len() + b.len()`.
///
/// # Errors
///
/// Returns [`SmoothError::EmptyInput`] if both segments are empty, and
/// [`SmoothError::InvalidTimeConstant`] if `td` is not finite and
/// positive.
pub fn splice_days(a: &[f64], b: &[f64], td: f64) -> Result<Vec<f64>, SmoothError> {
    let mut out = a.to_vec();
    splice_onto(&mut out, b, td)?;
    Ok(out)
}

/// In-place variant of [`splice_days`]: corrects `acc`, then appends the
/// corrected `b`.
///
/// This is the form the composer folds over a long sequence of days; it
/// avoids re-allocating the accumulated series on every splice.
///
/// # Errors
///
/// Same conditions as [`splice_days`].
pub fn splice_onto(acc: &mut Vec<f64>, b: &[f64], td: f64) -> Result<(), SmoothError> {
    if acc.is_empty() && b.is_empty() {
        return Err(SmoothError::EmptyInput);
    }
    if acc.is_empty() {
        acc.extend_from_slice(b);
        return Ok(());
    }
    if b.is_empty() {
        return Ok(());
    }
    if !(td.is_finite() && td > 0.0) {
        return Err(SmoothError::InvalidTimeConstant { td });
    }

    let n = acc.len();
    let df = b[0] - acc[n - 1];

    // Left side: tau runs from -(N-1) up to 0 at the boundary, so the
    // weight 1 - 0.5*erfc(tau/td) vanishes far before the splice and
    // reaches 0.5 at the last sample of `acc`.
    for (i, v) in acc.iter_mut().enumerate() {
        let tau = i as f64 - (n - 1) as f64;
        *v += 0.5 * df * (1.0 - 0.5 * erfc(tau / td));
    }

    // Right side: tau runs from 0 upward, so the weight 0.5*erfc(tau/td)
    // starts at 0.5 and vanishes a few time constants after the splice.
    acc.reserve(b.len());
    for (j, &v) in b.iter().enumerate() {
        let tau = j as f64;
        acc.push(v - 0.5 * df * (0.5 * erfc(tau / td)));
    }

    Ok(())
}
