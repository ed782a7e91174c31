//! Match snapshot model for the riftscore performance engine.
//!
//! A [`MatchSnapshot`] is the immutable record of one finished 5v5 match: its
//! duration, the ten [`Participant`]s with their raw telemetry, and the two
//! [`Team`]s with aggregate [`Objectives`]. The evaluator never fetches data
//! itself; snapshots are handed over by a [`MatchProvider`].
//!
//! # Modules
//!
//! - [`snapshot`] - snapshot, team, objective and participant types
//! - [`role`] - lane role normalization
//! - [`index`] - per-call lookup tables over a validated snapshot
//! - [`provider`] - the match-data collaborator seam
//! - [`sample`] - a bundled, fully populated sample match
//!
//! # Validation
//!
//! Structural problems are reported as [`SnapshotError`]. They indicate a
//! malformed snapshot, so callers are expected to surface them rather than
//! attempt a partial evaluation.
//!
//! ```
//! use riftscore_match::sample;
//!
//! let snapshot = sample::finished_match();
//! assert!(snapshot.validate().is_ok());
//! assert_eq!(snapshot.participants.len(), 10);
//! ```

pub use self::{index::*, provider::*, role::*, snapshot::*};

pub mod index;
pub mod provider;
pub mod role;
pub mod sample;
pub mod snapshot;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SnapshotError {
    #[display("match has no participants")]
    NoParticipants,
    #[display("match must contain exactly 2 teams, found {found}")]
    TeamCount { found: usize },
    #[display("team {team_id} appears more than once")]
    DuplicateTeam { team_id: u32 },
    #[display("participant {participant_id} references unknown team {team_id}")]
    UnknownTeam { participant_id: u32, team_id: u32 },
    #[display("participant '{puuid}' is not part of the match")]
    ParticipantNotFound { puuid: String },
    #[display("no enemy team found for team {team_id}")]
    EnemyTeamNotFound { team_id: u32 },
}
