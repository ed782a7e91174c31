//! Absolute output against the role's targets.

use riftscore_match::Role;
use riftscore_stats::curve::{self, linear_clamped, piecewise};

use super::{
    AxisCalculator, AxisError, AxisInput, AxisScore, BreakdownItem, centred_points, ensure_finite,
    trimmed,
};
use crate::role_profile::{RoleProfile, RoleProfiles};

pub const NAME: &str = "Global";

const CS_WEIGHT: f64 = 0.28;
const GOLD_WEIGHT: f64 = 0.22;
const VISION_WEIGHT: f64 = 0.15;
const DEATHS_WEIGHT: f64 = 0.20;
const KDA_WEIGHT: f64 = 0.15;

/// Farm, gold, vision, deaths and KDA scored against [`RoleProfiles`].
///
/// Active, low-death games are lifted to a role-dependent performance floor
/// so that a player who did their job never lands in F because of farm alone.
#[derive(Debug, Clone, Default)]
pub struct GlobalAxis {
    profiles: RoleProfiles,
}

impl GlobalAxis {
    #[must_use]
    pub fn new(profiles: RoleProfiles) -> Self {
        Self { profiles }
    }
}

#[derive(Debug, Clone, Copy)]
struct Rates {
    cs_per_min: f64,
    gold_per_min: f64,
    vision_per_min: f64,
}

impl AxisCalculator for GlobalAxis {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(&self, input: &AxisInput<'_>) -> Result<AxisScore, AxisError> {
        if input.participants.is_empty() {
            return Err(AxisError::NoParticipants);
        }
        let player = input.player;
        let role = player.role();
        let profile = self.profiles.for_role(role);
        let minutes = input.snapshot.minutes_at_least(1.0);

        let rates = Rates {
            cs_per_min: f64::from(player.creep_score()) / minutes,
            gold_per_min: f64::from(player.gold_earned) / minutes,
            vision_per_min: f64::from(player.vision_score) / minutes,
        };
        let kda = ensure_finite("kda", player.kda())?;

        let cs_score = score_cs(role, profile, rates.cs_per_min);
        let gold_score = score_gold(profile, rates.gold_per_min);
        let vision_score = score_vision(role, profile, rates.vision_per_min);
        let deaths_score = score_deaths(player.deaths, minutes, profile);
        let kda_score = piecewise(kda.min(profile.kda_cap), 1.0, 2.0, 3.5);

        let combined = ensure_finite(
            "combined",
            CS_WEIGHT * cs_score
                + GOLD_WEIGHT * gold_score
                + VISION_WEIGHT * vision_score
                + DEATHS_WEIGHT * deaths_score
                + KDA_WEIGHT * kda_score,
        )?;
        let floor = performance_floor(role, rates, player.deaths, player.takedowns());
        let score = curve::clamp_score(combined.max(floor));

        let item = |label: &str, value: String, sub: f64, weight: f64, note: String| {
            BreakdownItem::new(label, value, centred_points(sub, weight))
                .with_note(format!("{note} | subscore {}/100", trimmed(sub)))
        };
        let mut breakdown = vec![
            item(
                "CS/min",
                trimmed(rates.cs_per_min),
                cs_score,
                CS_WEIGHT,
                format!("role {role}, target {:.1}", profile.cs_per_min),
            ),
            item(
                "Gold/min",
                trimmed(rates.gold_per_min),
                gold_score,
                GOLD_WEIGHT,
                format!("role {role}, target {:.0}", profile.gold_per_min),
            ),
            item(
                "Vision/min",
                trimmed(rates.vision_per_min),
                vision_score,
                VISION_WEIGHT,
                format!("role {role}, target {:.2}", profile.vision_per_min),
            ),
            item(
                "Deaths",
                player.deaths.to_string(),
                deaths_score,
                DEATHS_WEIGHT,
                format!("role {role}, soft cap {:.1}", profile.deaths_soft_cap),
            ),
            item(
                "KDA",
                trimmed(kda),
                kda_score,
                KDA_WEIGHT,
                format!("role {role}, cap {:.1}", profile.kda_cap),
            ),
        ];
        if floor > combined {
            breakdown.push(
                BreakdownItem::new("Floor", trimmed(floor), curve::round_to(floor - combined, 2))
                    .with_note("performance floor: solid individual game"),
            );
        }

        Ok(AxisScore::new(NAME, score, breakdown))
    }
}

fn score_cs(role: Role, profile: &RoleProfile, cs_per_min: f64) -> f64 {
    if role.is_support() {
        return linear_clamped(cs_per_min, 0.2, 2.0);
    }
    let t = profile.cs_per_min;
    piecewise(cs_per_min, 0.6 * t, t, 1.2 * t)
}

fn score_gold(profile: &RoleProfile, gold_per_min: f64) -> f64 {
    let t = profile.gold_per_min;
    piecewise(gold_per_min, 0.7 * t, t, 1.2 * t)
}

fn score_vision(role: Role, profile: &RoleProfile, vision_per_min: f64) -> f64 {
    let t = profile.vision_per_min;
    if role.is_support() {
        piecewise(vision_per_min, 0.7 * t, t, 1.3 * t)
    } else {
        piecewise(vision_per_min, 0.5 * t, t, 1.5 * t)
    }
}

/// Deaths per minute relative to the soft cap per minute.
fn score_deaths(deaths: u32, minutes: f64, profile: &RoleProfile) -> f64 {
    if deaths == 0 {
        return curve::MAX_SCORE;
    }
    let minutes = minutes.max(1.0);
    let per_min = f64::from(deaths) / minutes;
    let soft_per_min = profile.deaths_soft_cap / minutes;
    let ratio = per_min / soft_per_min.max(0.0001);

    let score = if ratio <= 0.5 {
        90.0 + 10.0 * (0.5 - ratio) / 0.5
    } else if ratio <= 1.0 {
        90.0 - 30.0 * (ratio - 0.5) / 0.5
    } else if ratio <= 1.5 {
        60.0 - 25.0 * (ratio - 1.0) / 0.5
    } else if ratio <= 2.0 {
        35.0 - 20.0 * (ratio - 1.5) / 0.5
    } else {
        15.0
    };
    curve::clamp(score, 10.0, 100.0)
}

/// Minimum score for an active game with few deaths, 0 when not earned.
fn performance_floor(role: Role, rates: Rates, deaths: u32, takedowns: u32) -> f64 {
    let support = role.is_support();
    let low_deaths = deaths <= if support { 6 } else { 5 };
    let active = takedowns >= if support { 16 } else { 12 };
    if !low_deaths || !active {
        return 0.0;
    }

    match role {
        Role::Utility if rates.vision_per_min >= 1.3 => 62.0,
        Role::Utility if rates.vision_per_min >= 1.0 => 58.0,
        Role::Utility => 54.0,
        Role::Jungle if rates.cs_per_min >= 3.0 => 60.0,
        Role::Jungle => 56.0,
        _ => {
            let min_cs = if role == Role::Bottom { 6.5 } else { 6.0 };
            if rates.cs_per_min >= min_cs {
                65.0
            } else if rates.cs_per_min >= min_cs - 0.7 {
                60.0
            } else {
                55.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use riftscore_match::sample;

    use super::*;
    use crate::axis::test_support::{by_puuid, input};

    fn evaluate(snapshot: &riftscore_match::MatchSnapshot, puuid: &str) -> AxisScore {
        let player = by_puuid(snapshot, puuid);
        GlobalAxis::default().evaluate(&input(snapshot, player)).unwrap()
    }

    #[test]
    fn test_winning_mid() {
        let snapshot = sample::finished_match();
        let score = evaluate(&snapshot, "sample-200-middle");
        assert!(score.score() > 70.0, "score {}", score.score());
        let labels = score.breakdown().iter().map(|i| i.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["CS/min", "Gold/min", "Vision/min", "Deaths", "KDA"]);
        assert_eq!(score.item("Deaths").map(|i| i.value.as_str()), Some("4"));
    }

    #[test]
    fn test_floor_lifts_active_low_farm_game() {
        let mut snapshot = sample::finished_match();
        let player = snapshot
            .participants
            .iter_mut()
            .find(|p| p.puuid == "sample-100-top")
            .unwrap();
        player.kills = 8;
        player.deaths = 3;
        player.assists = 10;
        player.lane_minions_killed = 20;
        player.neutral_minions_killed = 0;
        player.gold_earned = 5000;
        player.vision_score = 3;

        let score = evaluate(&snapshot, "sample-100-top");
        assert!(score.score() >= 55.0);
        let floor = score.item("Floor").unwrap();
        assert_eq!(floor.value, "55");
        assert!(floor.points > 0.0);
    }

    #[test]
    fn test_no_floor_for_passive_game() {
        let snapshot = sample::finished_match();
        // 2/8/3 top: too many deaths for the floor
        let score = evaluate(&snapshot, "sample-100-top");
        assert!(score.item("Floor").is_none());
    }

    #[test]
    fn test_support_label_uses_utility_targets() {
        let mut snapshot = sample::finished_match();
        let utility = evaluate(&snapshot, "sample-100-utility");
        let player = snapshot
            .participants
            .iter_mut()
            .find(|p| p.puuid == "sample-100-utility")
            .unwrap();
        player.team_position = " support ".to_owned();

        let support = evaluate(&snapshot, "sample-100-utility");
        assert_eq!(support, utility);
    }

    #[test]
    fn test_support_is_not_judged_on_farm() {
        let profile = RoleProfiles::default();
        let utility = profile.for_role(Role::Utility);
        assert_eq!(score_cs(Role::Utility, utility, 0.2), 0.0);
        assert_eq!(score_cs(Role::Utility, utility, 2.5), 100.0);
    }

    #[test]
    fn test_score_deaths() {
        let profile = *RoleProfiles::default().for_role(Role::Top);
        assert_eq!(score_deaths(0, 30.0, &profile), 100.0);
        // ratio 1.0
        assert!((score_deaths(6, 30.0, &profile) - 60.0).abs() < 1e-9);
        // ratio beyond 2.0
        assert_eq!(score_deaths(20, 30.0, &profile), 15.0);
    }

    #[test]
    fn test_floor_tiers() {
        let rates = |cs, vision| Rates {
            cs_per_min: cs,
            gold_per_min: 400.0,
            vision_per_min: vision,
        };
        assert_eq!(performance_floor(Role::Utility, rates(1.0, 1.4), 6, 16), 62.0);
        assert_eq!(performance_floor(Role::Utility, rates(1.0, 0.5), 6, 16), 54.0);
        assert_eq!(performance_floor(Role::Utility, rates(1.0, 1.4), 6, 15), 0.0);
        assert_eq!(performance_floor(Role::Jungle, rates(3.2, 0.5), 2, 12), 60.0);
        assert_eq!(performance_floor(Role::Bottom, rates(6.2, 0.5), 2, 12), 60.0);
        assert_eq!(performance_floor(Role::Middle, rates(6.2, 0.5), 2, 12), 65.0);
        assert_eq!(performance_floor(Role::Top, rates(6.2, 0.5), 6, 12), 0.0);
    }
}
