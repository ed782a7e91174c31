//! Multi-axis performance evaluation for finished matches.
//!
//! This crate turns one participant's raw telemetry into a 0–100 score, a
//! letter [`Grade`] and an explainable breakdown. Evaluation is split across
//! independent scoring axes whose results are combined by an aggregator:
//!
//! ```text
//! MatchSnapshot + Participant
//!     ↓ AxisInput
//! AxisCalculator × N (Global, VersusOpponent, Objectives, TeamImpact, RoleImpact)
//!     ↓ AxisScores
//! ScoreAggregator (weighted mean of non-failed axes)
//!     ↓
//! PlayerPerformanceResult
//! ```
//!
//! # Modules
//!
//! - [`grade`] - score-to-letter mapping
//! - [`role_profile`] - per-role targets and the death-rate curve
//! - [`axis`] - the [`AxisCalculator`](axis::AxisCalculator) seam and the five
//!   built-in axes
//! - [`aggregator`] - combining axis scores into a global score
//! - [`performance`] - the [`PerformanceEvaluator`] entry point
//! - [`config`] - tunable [`EngineConfig`]
//!
//! # Failure Isolation
//!
//! An axis reports local problems as an [`AxisError`](axis::AxisError). The
//! evaluator records it as a failed [`AxisScore`](axis::AxisScore) and the
//! aggregator leaves it out, re-normalizing the remaining weights. Only a
//! structurally invalid snapshot aborts an evaluation.
//!
//! # Example
//!
//! ```
//! use riftscore_evaluator::{EngineConfig, PerformanceEvaluator};
//! use riftscore_match::sample;
//!
//! let evaluator = PerformanceEvaluator::with_default_axes(&EngineConfig::default()).unwrap();
//! let snapshot = sample::finished_match();
//! let results = evaluator.evaluate_all(&snapshot).unwrap();
//!
//! assert_eq!(results.len(), 10);
//! for result in &results {
//!     assert!(result.global_score <= 100);
//!     assert_eq!(result.axes.len(), 5);
//! }
//! ```

pub use self::{
    config::{ConfigError, EngineConfig},
    grade::Grade,
    performance::{PerformanceEvaluator, PlayerPerformanceResult},
};

pub mod aggregator;
pub mod axis;
pub mod config;
pub mod grade;
pub mod performance;
pub mod role_profile;
