//! Standing among players of the same role.

use riftscore_match::{Participant, Role};
use riftscore_stats::{curve, rank::rank_to_score};

use super::{
    AxisCalculator, AxisError, AxisInput, AxisScore, BreakdownItem, ensure_finite, share_points,
};
use crate::role_profile::death_rate_score;

pub const NAME: &str = "RoleImpact";

#[derive(Debug, Clone, Copy)]
struct Weights {
    deaths: f64,
    vision: f64,
    cs: f64,
    gold: f64,
    wards_placed: f64,
    wards_killed: f64,
    control_wards: f64,
    jungle_farm: f64,
}

impl Weights {
    const fn new(values: [f64; 8]) -> Self {
        let [
            deaths,
            vision,
            cs,
            gold,
            wards_placed,
            wards_killed,
            control_wards,
            jungle_farm,
        ] = values;
        Self {
            deaths,
            vision,
            cs,
            gold,
            wards_placed,
            wards_killed,
            control_wards,
            jungle_farm,
        }
    }

    fn for_role(role: Role) -> Self {
        match role {
            Role::Utility => Self::new([0.40, 0.25, 0.00, 0.05, 0.10, 0.10, 0.10, 0.00]),
            Role::Jungle => Self::new([0.25, 0.20, 0.10, 0.15, 0.00, 0.00, 0.00, 0.30]),
            _ => Self::new([0.25, 0.05, 0.35, 0.35, 0.00, 0.00, 0.00, 0.00]),
        }
    }
}

/// Players sharing `role`, or the whole lobby if fewer than two do.
fn cohort(participants: &[Participant], role: Role) -> Vec<&Participant> {
    let peers = participants
        .iter()
        .filter(|p| p.role() == role)
        .collect::<Vec<_>>();
    if peers.len() < 2 {
        participants.iter().collect()
    } else {
        peers
    }
}

/// Rank scores for `player` within a cohort.
///
/// The player is located by participant id, falling back to puuid.
struct Ranking<'a> {
    cohort: Vec<&'a Participant>,
    player: &'a Participant,
    by_id: bool,
}

impl<'a> Ranking<'a> {
    fn new(cohort: Vec<&'a Participant>, player: &'a Participant) -> Self {
        let by_id = cohort
            .iter()
            .any(|p| p.participant_id == player.participant_id);
        Self {
            cohort,
            player,
            by_id,
        }
    }

    fn score<M>(&self, metric: M) -> f64
    where
        M: Fn(&Participant) -> f64,
    {
        rank_to_score(
            &self.cohort,
            |p| metric(p),
            true,
            |p| {
                if self.by_id {
                    p.participant_id == self.player.participant_id
                } else {
                    p.has_puuid(&self.player.puuid)
                }
            },
        )
    }
}

/// Rank-based comparison with same-role peers plus the death-rate curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleImpactAxis;

impl AxisCalculator for RoleImpactAxis {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(&self, input: &AxisInput<'_>) -> Result<AxisScore, AxisError> {
        if input.participants.is_empty() {
            return Err(AxisError::NoParticipants);
        }
        let player = input.player;
        let role = player.role();
        let minutes = input.snapshot.minutes_at_least(0.1);
        let support = role.is_support();
        let jungle = role.is_jungle();

        let ranking = Ranking::new(cohort(input.participants, role), player);
        let per_min = |value: u32| f64::from(value) / minutes;

        let deaths_per_min = ensure_finite("deaths/min", per_min(player.deaths))?;
        let deaths_score = death_rate_score(role, deaths_per_min);
        let vision_score = ranking.score(|p| f64::from(p.vision_score));
        let cs_score = if support {
            curve::NEUTRAL_SCORE
        } else {
            ranking.score(|p| per_min(p.creep_score()))
        };
        let gold_score = ranking.score(|p| per_min(p.gold_earned));
        let support_rank = |metric: fn(&Participant) -> u32| {
            if support {
                ranking.score(|p| f64::from(metric(p)))
            } else {
                curve::NEUTRAL_SCORE
            }
        };
        let wards_placed_score = support_rank(|p| p.wards_placed);
        let wards_killed_score = support_rank(|p| p.wards_killed);
        let control_wards_score = support_rank(|p| p.control_wards_purchased);
        let jungle_farm_score = if jungle {
            ranking.score(|p| f64::from(p.neutral_minions_killed))
        } else {
            curve::NEUTRAL_SCORE
        };

        let w = Weights::for_role(role);
        let score = w.deaths * deaths_score
            + w.vision * vision_score
            + w.cs * cs_score
            + w.gold * gold_score
            + w.wards_placed * wards_placed_score
            + w.wards_killed * wards_killed_score
            + w.control_wards * control_wards_score
            + w.jungle_farm * jungle_farm_score;

        let mut deaths_item = BreakdownItem::new(
            "Deaths/min",
            format!("{deaths_per_min:.2}"),
            share_points(deaths_score, w.deaths),
        );
        let mut cs_item = BreakdownItem::new(
            "CS/min",
            format!("{:.1}", per_min(player.creep_score())),
            share_points(cs_score, w.cs),
        );
        if support {
            deaths_item = deaths_item.with_note("support deaths punished harder");
            cs_item = cs_item.with_note("CS ignored for supports");
        }
        let mut breakdown = vec![
            BreakdownItem::info("Role", role.as_str()),
            deaths_item,
            BreakdownItem::new(
                "Vision",
                player.vision_score.to_string(),
                share_points(vision_score, w.vision),
            ),
            BreakdownItem::new(
                "Gold/min",
                format!("{:.1}", per_min(player.gold_earned)),
                share_points(gold_score, w.gold),
            ),
            cs_item,
        ];
        if support {
            breakdown.extend([
                BreakdownItem::new(
                    "Wards placed",
                    player.wards_placed.to_string(),
                    share_points(wards_placed_score, w.wards_placed),
                ),
                BreakdownItem::new(
                    "Wards killed",
                    player.wards_killed.to_string(),
                    share_points(wards_killed_score, w.wards_killed),
                ),
                BreakdownItem::new(
                    "Control wards",
                    player.control_wards_purchased.to_string(),
                    share_points(control_wards_score, w.control_wards),
                ),
            ]);
        }
        if jungle {
            breakdown.push(BreakdownItem::new(
                "Neutral CS",
                player.neutral_minions_killed.to_string(),
                share_points(jungle_farm_score, w.jungle_farm),
            ));
        }

        Ok(AxisScore::new(NAME, score, breakdown))
    }
}

#[cfg(test)]
mod tests {
    use riftscore_match::sample;

    use super::*;
    use crate::axis::test_support::{by_puuid, input};

    #[test]
    fn test_support_vision_rank() {
        let snapshot = sample::finished_match();
        let player = by_puuid(&snapshot, "sample-100-utility");
        let score = RoleImpactAxis.evaluate(&input(&snapshot, player)).unwrap();
        // top of a two-player cohort: 0.25 × 100 / 10
        assert_eq!(score.item("Vision").unwrap().points, 2.5);
        assert_eq!(score.item("Role").unwrap().value, "UTILITY");
        assert!(score.item("Wards placed").is_some());
        assert!(score.item("Neutral CS").is_none());
        assert_eq!(score.item("CS/min").unwrap().points, 0.0);
    }

    #[test]
    fn test_jungle_entries() {
        let snapshot = sample::finished_match();
        let player = by_puuid(&snapshot, "sample-200-jungle");
        let score = RoleImpactAxis.evaluate(&input(&snapshot, player)).unwrap();
        assert_eq!(score.item("Neutral CS").unwrap().value, "162");
        assert!(score.item("Wards placed").is_none());
    }

    #[test]
    fn test_single_member_cohort_falls_back_to_lobby() {
        let snapshot = sample::finished_match();
        assert_eq!(cohort(&snapshot.participants, Role::Middle).len(), 2);
        assert_eq!(cohort(&snapshot.participants, Role::Unknown).len(), 10);
    }

    #[test]
    fn test_puuid_fallback() {
        let snapshot = sample::finished_match();
        let mut player = by_puuid(&snapshot, "sample-100-utility").clone();
        player.participant_id = 99;
        let cohort = cohort(&snapshot.participants, Role::Utility);
        let ranking = Ranking::new(cohort, &player);
        assert!(!ranking.by_id);
        assert_eq!(ranking.score(|p| f64::from(p.vision_score)), 100.0);
    }
}
