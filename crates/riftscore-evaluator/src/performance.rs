//! The evaluation entry point.
//!
//! [`PerformanceEvaluator`] validates a snapshot once, runs every registered
//! axis for a participant and hands the collected [`AxisScores`] to its
//! aggregator. Axis errors never escape: they become failed axis scores and
//! are logged at `warn` level.

use std::thread;

use riftscore_match::{MatchIndex, MatchSnapshot, Participant, Role, SnapshotError};
use serde::Serialize;

use crate::{
    ConfigError, EngineConfig, Grade,
    aggregator::{ScoreAggregator, WeightedScoreAggregator},
    axis::{self, AxisCalculator, AxisInput, AxisScore, AxisScores, BoxedAxisCalculator},
};

/// Evaluation result for one participant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPerformanceResult {
    pub puuid: String,
    pub display_name: String,
    pub team_id: u32,
    pub role: Role,
    pub global_score: u8,
    pub global_grade: Grade,
    pub axes: AxisScores,
}

#[derive(Debug)]
pub struct PerformanceEvaluator {
    axes: Vec<BoxedAxisCalculator>,
    aggregator: Box<dyn ScoreAggregator>,
}

impl PerformanceEvaluator {
    /// Creates an evaluator over `axes`.
    ///
    /// # Arguments
    ///
    /// * `axes` - Axes to run, in breakdown order. Names must be non-blank and
    ///   unique ignoring case and surrounding whitespace.
    /// * `aggregator` - Combines the axis scores into the global score
    ///
    /// # Returns
    ///
    /// * `Ok(PerformanceEvaluator)` - on a valid axis list
    /// * `Err(ConfigError)` - if `axes` is empty or has a blank or duplicate name
    pub fn new<A>(axes: Vec<BoxedAxisCalculator>, aggregator: A) -> Result<Self, ConfigError>
    where
        A: ScoreAggregator + 'static,
    {
        if axes.is_empty() {
            return Err(ConfigError::NoAxes);
        }
        for (index, axis) in axes.iter().enumerate() {
            let name = axis.name().trim();
            if name.is_empty() {
                return Err(ConfigError::BlankAxisName { index });
            }
            if axes[..index]
                .iter()
                .any(|other| other.name().trim().eq_ignore_ascii_case(name))
            {
                return Err(ConfigError::DuplicateAxisName {
                    name: name.to_owned(),
                });
            }
        }
        Ok(Self {
            axes,
            aggregator: Box::new(aggregator),
        })
    }

    /// The five built-in axes with a weighted aggregator, both from `config`.
    ///
    /// `config` is validated first.
    ///
    /// # Examples
    ///
    /// ```
    /// use riftscore_evaluator::{EngineConfig, PerformanceEvaluator};
    ///
    /// let evaluator = PerformanceEvaluator::with_default_axes(&EngineConfig::default()).unwrap();
    /// assert_eq!(evaluator.axis_names().count(), 5);
    /// ```
    pub fn with_default_axes(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(
            axis::default_axes(config),
            WeightedScoreAggregator::new(config.axis_weights.clone()),
        )
    }

    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|a| a.name())
    }

    /// Evaluates `participant`, which must be one of the snapshot's participants.
    ///
    /// # Returns
    ///
    /// * `Ok(PlayerPerformanceResult)` - with one entry per axis. A failing
    ///   axis yields a failed entry instead of an error.
    /// * `Err(SnapshotError)` - if the snapshot is malformed or does not
    ///   contain `participant`
    pub fn evaluate(
        &self,
        snapshot: &MatchSnapshot,
        participant: &Participant,
    ) -> Result<PlayerPerformanceResult, SnapshotError> {
        let index = MatchIndex::new(snapshot)?;
        index.ensure_member(participant)?;
        self.evaluate_indexed(&index, participant)
    }

    /// Evaluates the participant with the given puuid (case-insensitive).
    pub fn evaluate_by_puuid(
        &self,
        snapshot: &MatchSnapshot,
        puuid: &str,
    ) -> Result<PlayerPerformanceResult, SnapshotError> {
        let participant = snapshot.participant_by_puuid(puuid).ok_or_else(|| {
            SnapshotError::ParticipantNotFound {
                puuid: puuid.to_owned(),
            }
        })?;
        self.evaluate(snapshot, participant)
    }

    /// Evaluates every participant, in snapshot order.
    ///
    /// The snapshot is validated once; a structural problem fails the whole
    /// call and no participant is scored.
    pub fn evaluate_all(
        &self,
        snapshot: &MatchSnapshot,
    ) -> Result<Vec<PlayerPerformanceResult>, SnapshotError> {
        let index = MatchIndex::new(snapshot)?;
        index
            .participants()
            .iter()
            .map(|p| self.evaluate_indexed(&index, p))
            .collect()
    }

    /// Same as [`Self::evaluate_all`], one scoped thread per participant.
    pub fn evaluate_all_parallel(
        &self,
        snapshot: &MatchSnapshot,
    ) -> Result<Vec<PlayerPerformanceResult>, SnapshotError> {
        let index = MatchIndex::new(snapshot)?;
        let participants = index.participants();
        let mut results = participants.iter().map(|_| None).collect::<Vec<_>>();

        thread::scope(|s| {
            for (slot, participant) in results.iter_mut().zip(participants) {
                let index = &index;
                s.spawn(move || {
                    *slot = Some(self.evaluate_indexed(index, participant));
                });
            }
        });

        // scope joins every thread, so each slot is filled
        results.into_iter().flatten().collect()
    }

    fn evaluate_indexed(
        &self,
        index: &MatchIndex<'_>,
        player: &Participant,
    ) -> Result<PlayerPerformanceResult, SnapshotError> {
        let (player_team, enemy_team) = index.sides(player)?;
        let input = AxisInput {
            snapshot: index.snapshot(),
            player,
            participants: index.participants(),
            player_team,
            enemy_team,
        };

        let axes = self
            .axes
            .iter()
            .map(|axis| run_axis(axis, &input))
            .collect::<AxisScores>();
        let global = self.aggregator.aggregate(&axes);
        log::debug!(
            "{} ({}): {} {}",
            player.display_name,
            player.role(),
            global.score,
            global.grade
        );

        Ok(PlayerPerformanceResult {
            puuid: player.puuid.clone(),
            display_name: player.display_name.clone(),
            team_id: player.team_id,
            role: player.role(),
            global_score: global.score,
            global_grade: global.grade,
            axes,
        })
    }
}

fn run_axis(axis: &BoxedAxisCalculator, input: &AxisInput<'_>) -> AxisScore {
    match axis.evaluate(input) {
        Ok(score) => {
            log::debug!(
                "{} / {}: {:.2} {}",
                input.player.display_name,
                score.axis(),
                score.score(),
                score.grade()
            );
            score
        }
        Err(err) => {
            log::warn!(
                "axis {} failed for {}: {err}",
                axis.name(),
                input.player.display_name
            );
            AxisScore::failed(axis.name(), err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use riftscore_match::sample;

    use super::*;
    use crate::axis::AxisError;

    #[derive(Debug)]
    struct Named(&'static str);

    impl AxisCalculator for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn evaluate(&self, _input: &AxisInput<'_>) -> Result<AxisScore, AxisError> {
            Ok(AxisScore::new(self.0, 60.0, vec![]))
        }
    }

    fn named(names: &[&'static str]) -> Vec<BoxedAxisCalculator> {
        names
            .iter()
            .map(|&n| Box::new(Named(n)) as BoxedAxisCalculator)
            .collect()
    }

    #[test]
    fn test_rejects_invalid_axis_sets() {
        let agg = WeightedScoreAggregator::default;
        assert!(matches!(
            PerformanceEvaluator::new(vec![], agg()),
            Err(ConfigError::NoAxes)
        ));
        assert!(matches!(
            PerformanceEvaluator::new(named(&["Global", "  "]), agg()),
            Err(ConfigError::BlankAxisName { index: 1 })
        ));
        assert!(matches!(
            PerformanceEvaluator::new(named(&["Global", " global "]), agg()),
            Err(ConfigError::DuplicateAxisName { name }) if name == "global"
        ));
        assert!(PerformanceEvaluator::new(named(&["Global", "Laning"]), agg()).is_ok());
    }

    #[test]
    fn test_default_axes() {
        let evaluator = PerformanceEvaluator::with_default_axes(&EngineConfig::default()).unwrap();
        let names = evaluator.axis_names().collect::<Vec<_>>();
        assert_eq!(
            names,
            ["Global", "VersusOpponent", "Objectives", "TeamImpact", "RoleImpact"]
        );
    }

    #[test]
    fn test_foreign_participant_is_rejected() {
        let evaluator = PerformanceEvaluator::with_default_axes(&EngineConfig::default()).unwrap();
        let snapshot = sample::finished_match();
        let mut stranger = snapshot.participants[0].clone();
        stranger.puuid = "stranger".to_owned();
        assert!(matches!(
            evaluator.evaluate(&snapshot, &stranger),
            Err(SnapshotError::ParticipantNotFound { .. })
        ));
        assert!(matches!(
            evaluator.evaluate_by_puuid(&snapshot, "stranger"),
            Err(SnapshotError::ParticipantNotFound { .. })
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let evaluator = PerformanceEvaluator::with_default_axes(&EngineConfig::default()).unwrap();
        let snapshot = sample::finished_match();
        let sequential = evaluator.evaluate_all(&snapshot).unwrap();
        let parallel = evaluator.evaluate_all_parallel(&snapshot).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(
            parallel.iter().map(|r| r.puuid.as_str()).collect::<Vec<_>>(),
            snapshot.participants.iter().map(|p| p.puuid.as_str()).collect::<Vec<_>>()
        );
    }
}
