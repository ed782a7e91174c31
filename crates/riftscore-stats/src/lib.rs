//! Scoring curves and statistical utilities for the riftscore project.
//!
//! This crate provides the numeric primitives shared by every scoring axis:
//!
//! - **Curves**: clamping, linear-clamped scaling, three-segment piecewise
//!   scaling, symmetric diff scaling and linear interpolation
//! - **Anchor curves**: monotonic interpolation through calibration points
//! - **Rank scoring**: converting a subject's rank among peers to a score
//! - **Descriptive statistics** and **percentiles** for calibration reports
//!
//! All scores are on a 0–100 scale.
//!
//! # Modules
//!
//! - [`curve`]: stateless curve functions
//! - [`anchor`]: [`anchor::AnchorCurve`] piecewise-linear lookup
//! - [`rank`]: rank-to-score conversion among a peer group
//! - [`descriptive`]: descriptive statistics for summarizing score samples
//! - [`percentiles`]: percentile computation and storage
//!
//! # Examples
//!
//! ## Piecewise scaling
//!
//! ```
//! use riftscore_stats::curve::piecewise;
//!
//! assert_eq!(piecewise(10.0, 10.0, 20.0, 30.0), 50.0);
//! assert_eq!(piecewise(20.0, 10.0, 20.0, 30.0), 80.0);
//! assert_eq!(piecewise(30.0, 10.0, 20.0, 30.0), 100.0);
//! ```
//!
//! ## Ranking among peers
//!
//! ```
//! use riftscore_stats::rank::rank_to_score;
//!
//! let vision = [12.0, 40.0, 25.0];
//! let score = rank_to_score(&vision, |v| *v, true, |v| *v == 40.0);
//! assert_eq!(score, 100.0);
//! ```
//!
//! ## Summarizing scores
//!
//! ```
//! use riftscore_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new([40.0, 60.0, 80.0]).unwrap();
//! assert_eq!(stats.mean, 60.0);
//! ```

pub mod anchor;
pub mod curve;
pub mod descriptive;
pub mod percentiles;
pub mod rank;
