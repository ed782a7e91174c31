//! Combining axis scores into one global score.
//!
//! [`WeightedScoreAggregator`] computes a weighted mean over the axes it has a
//! positive weight for, skipping failed axes so that one broken axis cannot
//! drag the whole result down:
//!
//! ```text
//! score = Σ(wᵢ × sᵢ) / Σ(wᵢ)    for non-failed axes with wᵢ > 0
//! ```
//!
//! When no weighted axis remains, the unweighted mean of the non-failed axes
//! is used instead. The result is clamped to 0–100 and rounded half away from
//! zero before grading.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Grade,
    axis::{AxisScores, global, objectives, role_impact, team_impact, versus_opponent},
};

/// Final integer score and its grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlobalScoreResult {
    pub score: u8,
    pub grade: Grade,
}

impl GlobalScoreResult {
    pub const ZERO: Self = Self {
        score: 0,
        grade: Grade::F,
    };

    /// Rounds a raw aggregate into the final score.
    ///
    /// The score is clamped to 0–100 and rounded half away from zero; `NaN`
    /// gives [`GlobalScoreResult::ZERO`]. The grade is taken from the rounded
    /// value.
    ///
    /// ```
    /// use riftscore_evaluator::{Grade, aggregator::GlobalScoreResult};
    ///
    /// assert_eq!(GlobalScoreResult::from_score(79.5).score, 80);
    /// assert_eq!(GlobalScoreResult::from_score(79.5).grade, Grade::A);
    /// assert_eq!(GlobalScoreResult::from_score(f64::NAN), GlobalScoreResult::ZERO);
    /// ```
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            return Self::ZERO;
        }
        let rounded = score.clamp(0.0, 100.0).round() as u8;
        Self {
            score: rounded,
            grade: Grade::from_score(f64::from(rounded)),
        }
    }
}

/// Turns per-axis scores into one [`GlobalScoreResult`].
///
/// Implementations must tolerate failed and unknown axes; the evaluator hands
/// over every axis it ran.
pub trait ScoreAggregator: fmt::Debug + Send + Sync {
    fn aggregate(&self, axes: &AxisScores) -> GlobalScoreResult;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisWeight {
    pub axis: String,
    pub weight: f64,
}

/// Ordered `(axis, weight)` table with case-insensitive lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisWeights(Vec<AxisWeight>);

impl AxisWeights {
    pub const DEFAULT: &'static [(&'static str, f64)] = &[
        (global::NAME, 0.35),
        (versus_opponent::NAME, 0.20),
        (objectives::NAME, 0.15),
        (team_impact::NAME, 0.15),
        (role_impact::NAME, 0.15),
    ];

    #[must_use]
    pub fn new<I, S>(weights: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self(
            weights
                .into_iter()
                .map(|(axis, weight)| AxisWeight {
                    axis: axis.into(),
                    weight,
                })
                .collect(),
        )
    }

    /// Weight of `axis`.
    ///
    /// # Arguments
    ///
    /// * `axis` - Axis name, matched ignoring ASCII case and surrounding whitespace
    ///
    /// # Returns
    ///
    /// * `Some(weight)` - the first entry for `axis`
    /// * `None` - if the table has no entry for it
    #[must_use]
    pub fn get(&self, axis: &str) -> Option<f64> {
        let axis = axis.trim();
        self.0
            .iter()
            .find(|w| w.axis.trim().eq_ignore_ascii_case(axis))
            .map(|w| w.weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AxisWeight> {
        self.0.iter()
    }
}

impl Default for AxisWeights {
    fn default() -> Self {
        Self::new(Self::DEFAULT.iter().copied())
    }
}

#[derive(Debug, Clone, Default)]
pub struct WeightedScoreAggregator {
    weights: AxisWeights,
}

impl WeightedScoreAggregator {
    #[must_use]
    pub fn new(weights: AxisWeights) -> Self {
        Self { weights }
    }
}

impl ScoreAggregator for WeightedScoreAggregator {
    fn aggregate(&self, axes: &AxisScores) -> GlobalScoreResult {
        if axes.is_empty() {
            return GlobalScoreResult::ZERO;
        }

        let (weighted_sum, weight_sum) = axes
            .iter()
            .filter(|axis| !axis.is_failed())
            .filter_map(|axis| {
                let weight = self.weights.get(axis.axis())?;
                (weight > 0.0).then_some((weight * axis.score(), weight))
            })
            .fold((0.0, 0.0), |(ws, w), (s, weight)| (ws + s, w + weight));

        let score = if weight_sum > 0.0 {
            weighted_sum / weight_sum
        } else {
            let valid = axes.iter().filter(|a| !a.is_failed()).collect::<Vec<_>>();
            if valid.is_empty() {
                return GlobalScoreResult::ZERO;
            }
            #[expect(clippy::cast_precision_loss)]
            let n = valid.len() as f64;
            log::trace!("no weighted axis matched, falling back to the unweighted mean");
            valid.iter().map(|a| a.score()).sum::<f64>() / n
        };
        log::trace!("aggregated {} axes into {score:.2}", axes.len());

        GlobalScoreResult::from_score(score)
    }
}
