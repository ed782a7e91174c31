//! Head-to-head comparison with the lane opponent.

use riftscore_match::{Participant, Role};
use riftscore_stats::curve::{self, symmetric_diff};
use serde::{Deserialize, Serialize};

use super::{
    AxisCalculator, AxisError, AxisInput, AxisScore, BreakdownItem, centred_points, ensure_finite,
    trimmed,
};

pub const NAME: &str = "VersusOpponent";

/// One value per compared channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffChannels {
    pub gold: f64,
    pub cs: f64,
    pub level: f64,
    pub vision: f64,
}

impl DiffChannels {
    #[must_use]
    pub const fn new(gold: f64, cs: f64, level: f64, vision: f64) -> Self {
        Self {
            gold,
            cs,
            level,
            vision,
        }
    }
}

/// Saturation ranges and channel weights for one kind of matchup.
///
/// Gold, CS and vision ranges are per minute; the level range is absolute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchupProfile {
    pub ranges: DiffChannels,
    pub weights: DiffChannels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersusOpponentConfig {
    pub support: MatchupProfile,
    pub jungle: MatchupProfile,
    /// Top, middle, bottom and unknown roles.
    pub lane: MatchupProfile,
}

impl Default for VersusOpponentConfig {
    fn default() -> Self {
        Self {
            support: MatchupProfile {
                ranges: DiffChannels::new(120.0, 0.0, 2.0, 0.80),
                weights: DiffChannels::new(0.25, 0.0, 0.15, 0.60),
            },
            jungle: MatchupProfile {
                ranges: DiffChannels::new(180.0, 1.8, 2.0, 0.55),
                weights: DiffChannels::new(0.40, 0.10, 0.30, 0.20),
            },
            lane: MatchupProfile {
                ranges: DiffChannels::new(220.0, 2.2, 2.0, 0.45),
                weights: DiffChannels::new(0.45, 0.25, 0.25, 0.05),
            },
        }
    }
}

impl VersusOpponentConfig {
    #[must_use]
    pub fn for_role(&self, role: Role) -> &MatchupProfile {
        match role {
            Role::Utility => &self.support,
            Role::Jungle => &self.jungle,
            _ => &self.lane,
        }
    }

    pub(crate) fn profiles(&self) -> [&MatchupProfile; 3] {
        [&self.support, &self.jungle, &self.lane]
    }
}

/// Gold, CS, level and vision diffs against the first enemy in the same role.
#[derive(Debug, Clone, Default)]
pub struct VersusOpponentAxis {
    config: VersusOpponentConfig,
}

impl VersusOpponentAxis {
    #[must_use]
    pub fn new(config: VersusOpponentConfig) -> Self {
        Self { config }
    }
}

fn find_opponent<'a>(input: &AxisInput<'a>, role: Role) -> Option<&'a Participant> {
    input
        .participants
        .iter()
        .find(|p| p.team_id != input.player.team_id && p.role() == role)
}

fn signed_diff(a: u32, b: u32) -> i64 {
    i64::from(a) - i64::from(b)
}

impl AxisCalculator for VersusOpponentAxis {
    fn name(&self) -> &str {
        NAME
    }

    #[expect(clippy::cast_precision_loss)]
    fn evaluate(&self, input: &AxisInput<'_>) -> Result<AxisScore, AxisError> {
        let player = input.player;
        let role = player.role();
        let Some(opponent) = find_opponent(input, role) else {
            return Ok(AxisScore::new(
                NAME,
                curve::NEUTRAL_SCORE,
                vec![
                    BreakdownItem::info("Opponent", "N/A")
                        .with_note("no opponent in the same role"),
                ],
            ));
        };

        let minutes = input.snapshot.minutes_at_least(1.0);
        let MatchupProfile { ranges, weights } = *self.config.for_role(role);

        let gold_diff = signed_diff(player.gold_earned, opponent.gold_earned);
        let cs_diff = signed_diff(player.creep_score(), opponent.creep_score());
        let level_diff = signed_diff(player.champ_level, opponent.champ_level);
        let vision_diff = signed_diff(player.vision_score, opponent.vision_score);

        let gold_per_min = gold_diff as f64 / minutes;
        let cs_per_min = cs_diff as f64 / minutes;
        let vision_per_min = vision_diff as f64 / minutes;

        let gold_score = symmetric_diff(gold_per_min, ranges.gold);
        let cs_score = if role.is_support() {
            curve::NEUTRAL_SCORE
        } else {
            symmetric_diff(cs_per_min, ranges.cs)
        };
        let level_score = symmetric_diff(level_diff as f64, ranges.level);
        let vision_score = symmetric_diff(vision_per_min, ranges.vision);

        let score = ensure_finite(
            "versus",
            weights.gold * gold_score
                + weights.cs * cs_score
                + weights.level * level_score
                + weights.vision * vision_score,
        )?;

        let item = |label: &str, value: String, sub: f64, weight: f64, note: String| {
            BreakdownItem::new(label, value, centred_points(sub, weight)).with_note(format!(
                "{note} | subscore {}/100 | w {weight:.2}",
                trimmed(sub)
            ))
        };
        let cs_note = if role.is_support() {
            "ignored for supports".to_owned()
        } else {
            format!("range ±{:.2}/min", ranges.cs)
        };
        let breakdown = vec![
            BreakdownItem::info("Opponent", opponent.display_name.clone()),
            item(
                "Gold diff/min",
                format!("{gold_per_min:.1} (raw {gold_diff})"),
                gold_score,
                weights.gold,
                format!("range ±{:.1}/min", ranges.gold),
            ),
            item(
                "CS diff/min",
                format!("{cs_per_min:.2} (raw {cs_diff})"),
                cs_score,
                weights.cs,
                cs_note,
            ),
            item(
                "Level diff",
                level_diff.to_string(),
                level_score,
                weights.level,
                format!("range ±{}", trimmed(ranges.level)),
            ),
            item(
                "Vision diff/min",
                format!("{vision_per_min:.2} (raw {vision_diff})"),
                vision_score,
                weights.vision,
                format!("range ±{:.2}/min", ranges.vision),
            ),
            BreakdownItem::info("Duration", format!("{minutes:.1} min")),
        ];

        Ok(AxisScore::new(NAME, score, breakdown))
    }
}

#[cfg(test)]
mod tests {
    use riftscore_match::sample;

    use super::*;
    use crate::axis::test_support::{by_puuid, input};

    #[test]
    fn test_opponent_is_same_role_enemy() {
        let snapshot = sample::finished_match();
        let player = by_puuid(&snapshot, "sample-200-middle");
        let score = VersusOpponentAxis::default()
            .evaluate(&input(&snapshot, player))
            .unwrap();
        assert_eq!(score.item("Opponent").unwrap().value, "Quillfire");
        assert_eq!(score.item("Level diff").unwrap().value, "1");
        assert!(score.score() > 50.0);
    }

    #[test]
    fn test_diffs_are_antisymmetric() {
        let snapshot = sample::finished_match();
        let axis = VersusOpponentAxis::default();
        let winner = axis
            .evaluate(&input(&snapshot, by_puuid(&snapshot, "sample-200-top")))
            .unwrap();
        let loser = axis
            .evaluate(&input(&snapshot, by_puuid(&snapshot, "sample-100-top")))
            .unwrap();
        assert!((winner.score() + loser.score() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_opponent_is_neutral() {
        let mut snapshot = sample::finished_match();
        for p in &mut snapshot.participants {
            if p.puuid == "sample-100-jungle" {
                p.team_position = "TOP".to_owned();
            }
        }
        let player = by_puuid(&snapshot, "sample-200-jungle");
        let score = VersusOpponentAxis::default()
            .evaluate(&input(&snapshot, player))
            .unwrap();
        assert_eq!(score.score(), 50.0);
        assert_eq!(score.breakdown().len(), 1);
        assert_eq!(score.item("Opponent").unwrap().value, "N/A");
    }

    #[test]
    fn test_support_ignores_cs() {
        let snapshot = sample::finished_match();
        let player = by_puuid(&snapshot, "sample-100-utility");
        let score = VersusOpponentAxis::default()
            .evaluate(&input(&snapshot, player))
            .unwrap();
        let cs = score.item("CS diff/min").unwrap();
        assert_eq!(cs.points, 0.0);
        assert!(cs.note.as_deref().unwrap().starts_with("ignored for supports"));
    }
}
