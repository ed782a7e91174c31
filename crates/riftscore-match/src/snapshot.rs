use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Role, SnapshotError};

fn default_completed() -> bool {
    true
}

/// Immutable record of one finished match.
///
/// Field names follow the game-data API (camelCase JSON, `gameDuration` in
/// seconds) so that a fetched match document deserializes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    pub match_id: String,
    /// `false` for remakes and aborted games; such snapshots are never served
    /// by a [`MatchProvider`](crate::MatchProvider).
    #[serde(default = "default_completed")]
    pub completed: bool,
    #[serde(rename = "gameDuration")]
    pub duration_secs: u32,
    pub participants: Vec<Participant>,
    pub teams: Vec<Team>,
}

impl MatchSnapshot {
    /// Match duration in minutes, bounded below by `min_minutes`.
    #[must_use]
    pub fn minutes_at_least(&self, min_minutes: f64) -> f64 {
        (f64::from(self.duration_secs) / 60.0).max(min_minutes)
    }

    #[must_use]
    pub fn team(&self, team_id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }

    #[must_use]
    pub fn contains(&self, participant: &Participant) -> bool {
        self.participants.iter().any(|p| p == participant)
    }

    #[must_use]
    pub fn participant_by_puuid(&self, puuid: &str) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| p.puuid.eq_ignore_ascii_case(puuid))
    }

    /// Checks the structural invariants the evaluator relies on.
    ///
    /// A valid snapshot has at least one participant, exactly two teams with
    /// distinct ids, and every participant belongs to one of them.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.participants.is_empty() {
            return Err(SnapshotError::NoParticipants);
        }
        if self.teams.len() != 2 {
            return Err(SnapshotError::TeamCount {
                found: self.teams.len(),
            });
        }
        let mut seen = BTreeSet::new();
        for team in &self.teams {
            if !seen.insert(team.team_id) {
                return Err(SnapshotError::DuplicateTeam {
                    team_id: team.team_id,
                });
            }
        }
        if let Some(p) = self
            .participants
            .iter()
            .find(|p| !seen.contains(&p.team_id))
        {
            return Err(SnapshotError::UnknownTeam {
                participant_id: p.participant_id,
                team_id: p.team_id,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: u32,
    pub win: bool,
    #[serde(default)]
    pub objectives: Objectives,
}

/// Aggregate objective counts for one team.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Objectives {
    pub baron: ObjectiveStat,
    pub dragon: ObjectiveStat,
    pub rift_herald: ObjectiveStat,
    pub tower: ObjectiveStat,
    pub inhibitor: ObjectiveStat,
    pub champion: ObjectiveStat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectiveStat {
    pub first: bool,
    pub kills: u32,
}

impl ObjectiveStat {
    #[must_use]
    pub const fn new(first: bool, kills: u32) -> Self {
        Self { first, kills }
    }
}

/// One player's raw telemetry for the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub participant_id: u32,
    pub team_id: u32,
    /// Raw lane label, e.g. `TOP` or `UTILITY`. Use [`Participant::role`] for
    /// the normalized value.
    #[serde(default)]
    pub team_position: String,
    pub puuid: String,
    #[serde(rename = "riotIdGameName", default)]
    pub display_name: String,
    #[serde(default)]
    pub champion_name: String,
    #[serde(default)]
    pub champ_level: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    #[serde(rename = "totalMinionsKilled", default)]
    pub lane_minions_killed: u32,
    #[serde(default)]
    pub neutral_minions_killed: u32,
    #[serde(default)]
    pub gold_earned: u32,
    #[serde(default)]
    pub vision_score: u32,
    #[serde(default)]
    pub wards_placed: u32,
    #[serde(default)]
    pub wards_killed: u32,
    #[serde(rename = "visionWardsBoughtInGame", default)]
    pub control_wards_purchased: u32,
    #[serde(default)]
    pub win: bool,
}

impl Participant {
    #[must_use]
    pub fn role(&self) -> Role {
        Role::from_label(&self.team_position)
    }

    /// Lane and neutral minions combined, saturating at `u32::MAX`.
    #[must_use]
    pub fn creep_score(&self) -> u32 {
        self.lane_minions_killed.saturating_add(self.neutral_minions_killed)
    }

    /// Kills plus assists, saturating at `u32::MAX`.
    #[must_use]
    pub fn takedowns(&self) -> u32 {
        self.kills.saturating_add(self.assists)
    }

    /// `(kills + assists) / max(1, deaths)`.
    #[must_use]
    pub fn kda(&self) -> f64 {
        f64::from(self.takedowns()) / f64::from(self.deaths.max(1))
    }

    #[must_use]
    pub fn has_puuid(&self, puuid: &str) -> bool {
        !self.puuid.trim().is_empty() && self.puuid.eq_ignore_ascii_case(puuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_sample_is_valid() {
        assert_eq!(sample::finished_match().validate(), Ok(()));
    }

    #[test]
    fn test_no_participants() {
        let mut snapshot = sample::finished_match();
        snapshot.participants.clear();
        assert_eq!(snapshot.validate(), Err(SnapshotError::NoParticipants));
    }

    #[test]
    fn test_team_count() {
        let mut snapshot = sample::finished_match();
        snapshot.teams.pop();
        assert_eq!(
            snapshot.validate(),
            Err(SnapshotError::TeamCount { found: 1 })
        );
    }

    #[test]
    fn test_duplicate_team() {
        let mut snapshot = sample::finished_match();
        snapshot.teams[1].team_id = snapshot.teams[0].team_id;
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::DuplicateTeam { .. })
        ));
    }

    #[test]
    fn test_participant_on_unknown_team() {
        let mut snapshot = sample::finished_match();
        snapshot.participants[3].team_id = 300;
        assert_eq!(
            snapshot.validate(),
            Err(SnapshotError::UnknownTeam {
                participant_id: snapshot.participants[3].participant_id,
                team_id: 300,
            })
        );
    }

    #[test]
    fn test_minutes_lower_bound() {
        let mut snapshot = sample::finished_match();
        snapshot.duration_secs = 0;
        assert!((snapshot.minutes_at_least(1.0) - 1.0).abs() < f64::EPSILON);
        snapshot.duration_secs = 1776;
        assert!((snapshot.minutes_at_least(1.0) - 29.6).abs() < 1e-9);
    }

    #[test]
    fn test_participant_derived_stats() {
        let snapshot = sample::finished_match();
        let jungler = snapshot
            .participants
            .iter()
            .find(|p| p.team_id == 200 && p.role() == Role::Jungle)
            .unwrap();
        assert_eq!(
            jungler.creep_score(),
            jungler.lane_minions_killed + jungler.neutral_minions_killed
        );
        assert!(jungler.kda() > 0.0);
    }

    #[test]
    fn test_derived_counts_saturate() {
        let mut p = sample::finished_match().participants[0].clone();
        p.lane_minions_killed = u32::MAX;
        p.neutral_minions_killed = 1;
        p.kills = u32::MAX;
        p.assists = 1;
        assert_eq!(p.creep_score(), u32::MAX);
        assert_eq!(p.takedowns(), u32::MAX);
        assert!(p.kda().is_finite());
    }

    #[test]
    fn test_deserialize_api_field_names() {
        let json = r#"{
            "matchId": "EUW1_1",
            "gameDuration": 1500,
            "participants": [{
                "participantId": 1,
                "teamId": 100,
                "teamPosition": "utility",
                "puuid": "abc",
                "riotIdGameName": "Someone",
                "kills": 1,
                "deaths": 2,
                "assists": 3,
                "totalMinionsKilled": 20,
                "visionWardsBoughtInGame": 4
            }],
            "teams": [
                {
                    "teamId": 100,
                    "win": true,
                    "objectives": { "riftHerald": { "first": true, "kills": 1 } }
                },
                { "teamId": 200, "win": false }
            ]
        }"#;
        let snapshot: MatchSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.completed);
        assert_eq!(snapshot.duration_secs, 1500);
        let p = &snapshot.participants[0];
        assert_eq!(p.role(), Role::Utility);
        assert_eq!(p.display_name, "Someone");
        assert_eq!(p.lane_minions_killed, 20);
        assert_eq!(p.control_wards_purchased, 4);
        assert_eq!(snapshot.teams[0].objectives.rift_herald.kills, 1);
        assert_eq!(snapshot.teams[1].objectives, Objectives::default());
        assert_eq!(snapshot.validate(), Ok(()));
    }
}
