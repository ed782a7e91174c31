//! Piecewise-linear curves through calibration anchors.

use crate::curve;

/// A monotonic piecewise-linear curve over `(x, score)` anchors.
///
/// Anchors are kept in ascending `x` order. Inputs below the first anchor take
/// the first score; inputs above the last take the last score.
///
/// ```
/// use riftscore_stats::anchor::AnchorCurve;
///
/// let curve = AnchorCurve::new(&[(0.0, 0.0), (0.5, 70.0), (0.7, 90.0), (0.9, 100.0)]);
/// assert_eq!(curve.score(0.5), 70.0);
/// assert_eq!(curve.score(0.6), 80.0);
/// assert_eq!(curve.score(2.0), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorCurve {
    anchors: Vec<(f64, f64)>,
}

impl AnchorCurve {
    /// Builds a curve, sorting the anchors by `x`.
    ///
    /// Anchors with a non-finite coordinate are dropped.
    #[must_use]
    pub fn new(anchors: &[(f64, f64)]) -> Self {
        let mut anchors = anchors
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect::<Vec<_>>();
        anchors.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { anchors }
    }

    #[must_use]
    pub fn anchors(&self) -> &[(f64, f64)] {
        &self.anchors
    }

    /// Interpolated score at `x`.
    ///
    /// # Arguments
    ///
    /// * `x` - The raw measurement, e.g. a kill participation ratio
    ///
    /// # Returns
    ///
    /// The linearly interpolated score between the surrounding anchors,
    /// clamped to `[0, 100]`. A curve without anchors scores neutral.
    #[must_use]
    pub fn score(&self, x: f64) -> f64 {
        let (Some(&(x0, y0)), Some(&(xn, yn))) = (self.anchors.first(), self.anchors.last()) else {
            return curve::NEUTRAL_SCORE;
        };
        if x <= x0 {
            return curve::clamp_score(y0);
        }
        if x >= xn {
            return curve::clamp_score(yn);
        }
        let score = self
            .anchors
            .windows(2)
            .find_map(|w| {
                let [(xa, ya), (xb, yb)] = [w[0], w[1]];
                (x <= xb).then(|| {
                    if xb <= xa {
                        yb
                    } else {
                        curve::lerp(ya, yb, (x - xa) / (xb - xa))
                    }
                })
            })
            .unwrap_or(yn);
        curve::clamp_score(score)
    }
}
