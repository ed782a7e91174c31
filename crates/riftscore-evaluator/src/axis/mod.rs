//! Scoring axes.
//!
//! Each axis looks at one facet of a performance and produces an
//! [`AxisScore`] on the 0–100 scale together with an ordered breakdown of the
//! sub-metrics that drove it. Axes are pure: the same [`AxisInput`] always
//! yields the same score.
//!
//! The built-in axes are:
//!
//! - [`global::GlobalAxis`]: farm, gold, vision, deaths and KDA against role
//!   targets
//! - [`versus_opponent::VersusOpponentAxis`]: per-minute diffs against the
//!   lane opponent
//! - [`objectives::ObjectivesAxis`]: vision control and a capped team
//!   objective context
//! - [`team_impact::TeamImpactAxis`]: kill participation and death rate
//! - [`role_impact::RoleImpactAxis`]: rank among same-role players
//!
//! [`default_axes`] registers all five explicitly. Custom axes implement
//! [`AxisCalculator`] and are passed to
//! [`PerformanceEvaluator::new`](crate::PerformanceEvaluator::new).

use std::fmt;

use riftscore_match::{MatchSnapshot, Participant, Team};
use riftscore_stats::curve;
use serde::{Serialize, Serializer};

use crate::{EngineConfig, Grade};

pub use self::{
    global::GlobalAxis, objectives::ObjectivesAxis, role_impact::RoleImpactAxis,
    team_impact::TeamImpactAxis, versus_opponent::VersusOpponentAxis,
};

pub mod global;
pub mod objectives;
pub mod role_impact;
pub mod team_impact;
pub mod versus_opponent;

/// Everything an axis may look at for one participant.
#[derive(Debug, Clone, Copy)]
pub struct AxisInput<'a> {
    pub snapshot: &'a MatchSnapshot,
    pub player: &'a Participant,
    pub participants: &'a [Participant],
    pub player_team: &'a Team,
    pub enemy_team: &'a Team,
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum AxisError {
    #[display("no participants to compare against")]
    NoParticipants,
    #[display("metric '{metric}' is not finite")]
    NonFiniteMetric { metric: &'static str },
    #[display("{reason}")]
    Other { reason: String },
}

impl AxisError {
    #[must_use]
    pub fn other(reason: impl Into<String>) -> Self {
        Self::Other {
            reason: reason.into(),
        }
    }
}

/// Fails with [`AxisError::NonFiniteMetric`] unless `value` is finite.
pub fn ensure_finite(metric: &'static str, value: f64) -> Result<f64, AxisError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AxisError::NonFiniteMetric { metric })
    }
}

/// One scoring dimension.
pub trait AxisCalculator: fmt::Debug + Send + Sync {
    /// Unique, stable axis name. Also the key looked up in the weight table.
    #[must_use]
    fn name(&self) -> &str;

    fn evaluate(&self, input: &AxisInput<'_>) -> Result<AxisScore, AxisError>;
}

pub type BoxedAxisCalculator = Box<dyn AxisCalculator>;

impl AxisCalculator for BoxedAxisCalculator {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    fn evaluate(&self, input: &AxisInput<'_>) -> Result<AxisScore, AxisError> {
        self.as_ref().evaluate(input)
    }
}

/// The five built-in axes, configured from `config`.
#[must_use]
pub fn default_axes(config: &EngineConfig) -> Vec<BoxedAxisCalculator> {
    vec![
        Box::new(GlobalAxis::new(config.role_profiles.clone())),
        Box::new(VersusOpponentAxis::new(config.versus_opponent.clone())),
        Box::new(ObjectivesAxis::new(config.objective_context)),
        Box::new(TeamImpactAxis),
        Box::new(RoleImpactAxis),
    ]
}

/// A single explanatory line of an axis breakdown.
///
/// `points` is informational; it is never summed back into the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownItem {
    pub label: String,
    pub value: String,
    pub points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl BreakdownItem {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>, points: f64) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            points,
            note: None,
        }
    }

    /// Zero-point item shown for context only.
    #[must_use]
    pub fn info(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(label, value, 0.0)
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Result of one axis for one participant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScore {
    axis: String,
    score: f64,
    grade: Grade,
    breakdown: Vec<BreakdownItem>,
    is_failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl AxisScore {
    /// A successful score, clamped to `[0, 100]`. `NaN` scores as 0.
    #[must_use]
    pub fn new(axis: &str, score: f64, breakdown: Vec<BreakdownItem>) -> Self {
        let score = if score.is_nan() {
            curve::MIN_SCORE
        } else {
            curve::clamp_score(score)
        };
        Self {
            axis: axis.trim().to_owned(),
            score,
            grade: Grade::from_score(score),
            breakdown,
            is_failed: false,
            error: None,
        }
    }

    /// A failed axis: score 0, grade F, with the failure reason preserved.
    #[must_use]
    pub fn failed(axis: &str, error: impl Into<String>) -> Self {
        let axis = match axis.trim() {
            "" => "Unknown",
            name => name,
        };
        let error = error.into();
        let error = if error.trim().is_empty() {
            "axis evaluation failed".to_owned()
        } else {
            error
        };
        Self {
            axis: axis.to_owned(),
            score: curve::MIN_SCORE,
            grade: Grade::F,
            breakdown: vec![],
            is_failed: true,
            error: Some(error),
        }
    }

    #[must_use]
    pub fn axis(&self) -> &str {
        &self.axis
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        self.grade
    }

    #[must_use]
    pub fn breakdown(&self) -> &[BreakdownItem] {
        &self.breakdown
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.is_failed
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// First breakdown item with the given label.
    #[must_use]
    pub fn item(&self, label: &str) -> Option<&BreakdownItem> {
        self.breakdown.iter().find(|item| item.label == label)
    }
}

/// Axis scores of one participant, keyed by axis name (case-insensitive).
///
/// Iteration follows insertion order. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisScores {
    scores: Vec<AxisScore>,
}

impl AxisScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `score`, returning the previous score with the same name.
    pub fn insert(&mut self, score: AxisScore) -> Option<AxisScore> {
        match self
            .scores
            .iter_mut()
            .find(|s| s.axis.eq_ignore_ascii_case(&score.axis))
        {
            Some(slot) => Some(std::mem::replace(slot, score)),
            None => {
                self.scores.push(score);
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, axis: &str) -> Option<&AxisScore> {
        let axis = axis.trim();
        self.scores.iter().find(|s| s.axis.eq_ignore_ascii_case(axis))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AxisScore> {
        self.scores.iter()
    }
}

impl FromIterator<AxisScore> for AxisScores {
    fn from_iter<I: IntoIterator<Item = AxisScore>>(iter: I) -> Self {
        let mut scores = Self::new();
        for score in iter {
            scores.insert(score);
        }
        scores
    }
}

impl<'a> IntoIterator for &'a AxisScores {
    type Item = &'a AxisScore;
    type IntoIter = std::slice::Iter<'a, AxisScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}

impl Serialize for AxisScores {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.scores.iter().map(|s| (s.axis(), s)))
    }
}

/// Breakdown points centred on the neutral score, to 2 decimals.
pub(crate) fn centred_points(sub_score: f64, weight: f64) -> f64 {
    curve::round_to((sub_score - curve::NEUTRAL_SCORE) * weight, 2)
}

/// Breakdown points as a tenth of the weighted sub-score, to 1 decimal.
pub(crate) fn share_points(sub_score: f64, weight: f64) -> f64 {
    curve::round_to(weight * sub_score / 10.0, 1)
}

/// Formats with at most two decimals, dropping trailing zeros.
pub(crate) fn trimmed(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-" | "-0" => "0".to_owned(),
        s => s.to_owned(),
    }
}
