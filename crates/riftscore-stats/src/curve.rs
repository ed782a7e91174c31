//! Stateless scoring curves.
//!
//! Every function maps a raw measurement onto the 0–100 score scale. Callers
//! pick the anchors; these functions only define the shape.

/// Lowest score on the scale.
pub const MIN_SCORE: f64 = 0.0;
/// Highest score on the scale.
pub const MAX_SCORE: f64 = 100.0;
/// Score of a neutral result.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Factor applied to a degenerate `mid`/`high` anchor by [`piecewise`].
pub const ANCHOR_INFLATION: f64 = 1.2;

/// Clamps `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics on `min > max`; `min` wins.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps a score to `[0, 100]`.
#[must_use]
pub fn clamp_score(score: f64) -> f64 {
    clamp(score, MIN_SCORE, MAX_SCORE)
}

/// Linear scaling with saturation.
///
/// Returns 0 at or below `min`, 100 at or above `max`, and a linear ramp in
/// between. A degenerate range (`max <= min`) scores neutral.
///
/// # Examples
///
/// ```
/// use riftscore_stats::curve::linear_clamped;
///
/// assert_eq!(linear_clamped(5.0, 0.0, 10.0), 50.0);
/// assert_eq!(linear_clamped(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(linear_clamped(12.0, 0.0, 10.0), 100.0);
/// ```
#[must_use]
pub fn linear_clamped(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return NEUTRAL_SCORE;
    }
    let t = (value - min) / (max - min);
    clamp_score(MAX_SCORE * t)
}

/// Three-segment scaling around a target.
///
/// ```text
/// value <= low         -> linear_clamped(value, 0, low) * 0.5   (0..50)
/// low  < value <= mid  -> 50..80
/// mid  < value <= high -> 80..100
/// value > high         -> 100
/// ```
///
/// Anchors must satisfy `low < mid < high`. Degenerate anchors are inflated
/// by [`ANCHOR_INFLATION`]: first `high` relative to `mid`, then `mid`
/// relative to `low`.
#[must_use]
pub fn piecewise(value: f64, low: f64, mid: f64, high: f64) -> f64 {
    let high = if high <= mid {
        mid * ANCHOR_INFLATION
    } else {
        high
    };
    let mid = if mid <= low {
        low * ANCHOR_INFLATION
    } else {
        mid
    };

    if value <= low {
        linear_clamped(value, 0.0, low) * 0.5
    } else if value <= mid {
        50.0 + 30.0 * (value - low) / (mid - low)
    } else if value <= high {
        80.0 + 20.0 * (value - mid) / (high - mid)
    } else {
        MAX_SCORE
    }
}

/// Symmetric scaling of a signed difference.
///
/// `-range` maps to 0, `0` to 50 and `+range` to 100, saturating outside.
///
/// ```
/// use riftscore_stats::curve::symmetric_diff;
///
/// assert_eq!(symmetric_diff(0.0, 2.0), 50.0);
/// assert_eq!(symmetric_diff(1.0, 2.0), 75.0);
/// assert_eq!(symmetric_diff(-5.0, 2.0), 0.0);
/// ```
#[must_use]
pub fn symmetric_diff(diff: f64, range: f64) -> f64 {
    let (min, max) = (-range, range);
    if diff <= min {
        MIN_SCORE
    } else if diff >= max {
        MAX_SCORE
    } else {
        MAX_SCORE * (diff - min) / (max - min)
    }
}

/// Linear interpolation from `a` to `b` with `t` clamped to `[0, 1]`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * clamp(t, 0.0, 1.0)
}

/// Rounds half away from zero to `digits` decimal places.
#[must_use]
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
