//! One-dimensional piecewise-linear interpolation.

/// Interpolates `x` on the polyline through `(xp[i], fp[i])`.
///
/// `xp` must be strictly increasing and the same length as `fp`. Values
/// left of `xp[0]` return `fp[0]`, values right of the last knot return the
/// last `fp`. NaN input gives NaN.
#[must_use]
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    let n = xp.len().min(fp.len());
    if n == 0 || x.is_nan() {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // First knot strictly greater than x; 1 <= hi <= n - 1 here.
    let hi = xp[..n].partition_point(|&k| k <= x);
    let lo = hi - 1;
    let t = (x - xp[lo]) / (xp[hi] - xp[lo]);
    fp[lo] + t * (fp[hi] - fp[lo])
}

/// Returns `true` when every element is strictly greater than its predecessor.
#[must_use]
pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}
