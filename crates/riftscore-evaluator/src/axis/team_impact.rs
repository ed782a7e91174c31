use std::sync::LazyLock;

use riftscore_match::Role;
use riftscore_stats::anchor::AnchorCurve;

use super::{
    AxisCalculator, AxisError, AxisInput, AxisScore, BreakdownItem, ensure_finite, share_points,
};
use crate::role_profile::death_rate_score;

pub const NAME: &str = "TeamImpact";

/// 0% → 0, 50% → 70, 70% → 90, 90% and above → 100.
static KILL_PARTICIPATION: LazyLock<AnchorCurve> =
    LazyLock::new(|| AnchorCurve::new(&[(0.0, 0.0), (0.5, 70.0), (0.7, 90.0), (0.9, 100.0)]));

fn weights(role: Role) -> (f64, f64) {
    match role {
        Role::Utility => (0.65, 0.35),
        Role::Jungle => (0.70, 0.30),
        _ => (0.75, 0.25),
    }
}

/// Kill participation and death rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamImpactAxis;

impl AxisCalculator for TeamImpactAxis {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(&self, input: &AxisInput<'_>) -> Result<AxisScore, AxisError> {
        let player = input.player;
        let role = player.role();

        let team_kills = input.player_team.objectives.champion.kills;
        let kill_participation = if team_kills == 0 {
            0.0
        } else {
            f64::from(player.takedowns()) / f64::from(team_kills)
        };
        let kp_score = KILL_PARTICIPATION.score(kill_participation);

        let minutes = input.snapshot.minutes_at_least(0.1);
        let deaths_per_min = ensure_finite("deaths/min", f64::from(player.deaths) / minutes)?;
        let deaths_score = death_rate_score(role, deaths_per_min);

        let (kp_weight, deaths_weight) = weights(role);
        let score = kp_weight * kp_score + deaths_weight * deaths_score;

        let mut deaths_item = BreakdownItem::new(
            "Deaths/min",
            format!("{deaths_per_min:.2}"),
            share_points(deaths_score, deaths_weight),
        );
        if role.is_support() {
            deaths_item = deaths_item.with_note("support deaths punished harder");
        }
        let breakdown = vec![
            BreakdownItem::new(
                "Kill participation",
                format!("{:.1}%", kill_participation * 100.0),
                share_points(kp_score, kp_weight),
            ),
            BreakdownItem::info("Team kills", team_kills.to_string()),
            deaths_item,
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
    fn test_kill_participation_curve() {
        assert_eq!(KILL_PARTICIPATION.score(0.0), 0.0);
        assert!((KILL_PARTICIPATION.score(0.25) - 35.0).abs() < 1e-9);
        assert!((KILL_PARTICIPATION.score(0.6) - 80.0).abs() < 1e-9);
        assert_eq!(KILL_PARTICIPATION.score(0.95), 100.0);
    }

    #[test]
    fn test_breakdown() {
        let snapshot = sample::finished_match();
        let player = by_puuid(&snapshot, "sample-200-middle");
        let score = TeamImpactAxis.evaluate(&input(&snapshot, player)).unwrap();
        // 19 takedowns of 33 team kills
        assert_eq!(score.item("Kill participation").unwrap().value, "57.6%");
        assert_eq!(score.item("Team kills").unwrap().value, "33");
        assert!(score.item("Deaths/min").unwrap().note.is_none());
    }

    #[test]
    fn test_team_without_kills() {
        let mut snapshot = sample::finished_match();
        snapshot.teams[0].objectives.champion.kills = 0;
        let player = by_puuid(&snapshot, "sample-100-top");
        let score = TeamImpactAxis.evaluate(&input(&snapshot, player)).unwrap();
        assert_eq!(score.item("Kill participation").unwrap().value, "0.0%");
        assert_eq!(score.item("Kill participation").unwrap().points, 0.0);
    }

    #[test]
    fn test_support_note() {
        let snapshot = sample::finished_match();
        let player = by_puuid(&snapshot, "sample-200-utility");
        let score = TeamImpactAxis.evaluate(&input(&snapshot, player)).unwrap();
        assert!(score.item("Deaths/min").unwrap().note.is_some());
    }
}
