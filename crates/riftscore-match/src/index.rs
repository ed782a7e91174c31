use crate::{MatchSnapshot, Participant, SnapshotError, Team};

/// Lookup tables over a validated snapshot.
///
/// Built once per evaluation call so that team resolution does not rescan the
/// snapshot for every participant.
#[derive(Debug, Clone, Copy)]
pub struct MatchIndex<'a> {
    snapshot: &'a MatchSnapshot,
    teams: [&'a Team; 2],
}

impl<'a> MatchIndex<'a> {
    /// Validates `snapshot` and indexes its two teams.
    pub fn new(snapshot: &'a MatchSnapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        let [first, second] = snapshot.teams.as_slice() else {
            return Err(SnapshotError::TeamCount {
                found: snapshot.teams.len(),
            });
        };
        Ok(Self {
            snapshot,
            teams: [first, second],
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> &'a MatchSnapshot {
        self.snapshot
    }

    #[must_use]
    pub fn participants(&self) -> &'a [Participant] {
        &self.snapshot.participants
    }

    /// Resolves the team of `participant` and the single opposing team.
    pub fn sides(&self, participant: &Participant) -> Result<(&'a Team, &'a Team), SnapshotError> {
        let team_id = participant.team_id;
        let own = self
            .teams
            .iter()
            .copied()
            .find(|t| t.team_id == team_id)
            .ok_or(SnapshotError::UnknownTeam {
                participant_id: participant.participant_id,
                team_id,
            })?;
        let enemy = self
            .teams
            .iter()
            .copied()
            .find(|t| t.team_id != team_id)
            .ok_or(SnapshotError::EnemyTeamNotFound { team_id })?;
        Ok((own, enemy))
    }

    /// Confirms that `participant` is one of the snapshot's participants.
    pub fn ensure_member(&self, participant: &Participant) -> Result<(), SnapshotError> {
        if self.snapshot.contains(participant) {
            Ok(())
        } else {
            Err(SnapshotError::ParticipantNotFound {
                puuid: participant.puuid.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_sides() {
        let snapshot = sample::finished_match();
        let index = MatchIndex::new(&snapshot).unwrap();
        for p in index.participants() {
            let (own, enemy) = index.sides(p).unwrap();
            assert_eq!(own.team_id, p.team_id);
            assert_ne!(enemy.team_id, p.team_id);
        }
    }

    #[test]
    fn test_invalid_snapshot_rejected() {
        let mut snapshot = sample::finished_match();
        snapshot.teams.truncate(1);
        assert!(matches!(
            MatchIndex::new(&snapshot),
            Err(SnapshotError::TeamCount { found: 1 })
        ));
    }

    #[test]
    fn test_foreign_participant() {
        let snapshot = sample::finished_match();
        let index = MatchIndex::new(&snapshot).unwrap();
        let mut stranger = snapshot.participants[0].clone();
        stranger.puuid = "someone-else".to_owned();
        stranger.kills += 1;
        assert_eq!(
            index.ensure_member(&stranger),
            Err(SnapshotError::ParticipantNotFound {
                puuid: "someone-else".to_owned()
            })
        );
        assert_eq!(index.ensure_member(&snapshot.participants[0]), Ok(()));
    }
}
