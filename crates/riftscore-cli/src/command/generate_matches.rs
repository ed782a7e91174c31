use std::path::PathBuf;

use rand::{Rng, SeedableRng as _, seq::IndexedRandom as _};
use rand_distr::{Distribution as _, Normal};
use rand_pcg::Pcg32;
use riftscore_match::{MatchSnapshot, ObjectiveStat, Objectives, Participant, Role, Team};

use crate::util::Output;

const TEAM_IDS: [u32; 2] = [100, 200];
const LANE_ROLES: [Role; 5] = [Role::Top, Role::Jungle, Role::Middle, Role::Bottom, Role::Utility];

/// Mean and standard deviation of a per-minute rate or per-game total.
#[derive(Debug, Clone, Copy)]
struct Spread(f64, f64);

#[derive(Debug, Clone, Copy)]
struct RoleDistribution {
    cs_per_min: Spread,
    neutral_share: f64,
    gold_per_min: Spread,
    vision_per_min: Spread,
    kills: Spread,
    deaths: Spread,
    assists: Spread,
    level: Spread,
    champions: &'static [&'static str],
}

impl RoleDistribution {
    const fn for_role(role: Role) -> Self {
        match role {
            Role::Jungle => Self {
                cs_per_min: Spread(5.6, 1.0),
                neutral_share: 0.72,
                gold_per_min: Spread(410.0, 55.0),
                vision_per_min: Spread(0.9, 0.25),
                kills: Spread(5.5, 2.5),
                deaths: Spread(5.0, 2.0),
                assists: Spread(7.5, 3.0),
                level: Spread(15.0, 1.3),
                champions: &["LeeSin", "Viego", "Vi", "Elise", "Kindred"],
            },
            Role::Middle => Self {
                cs_per_min: Spread(7.2, 1.1),
                neutral_share: 0.04,
                gold_per_min: Spread(450.0, 60.0),
                vision_per_min: Spread(0.6, 0.2),
                kills: Spread(6.5, 3.0),
                deaths: Spread(5.0, 2.0),
                assists: Spread(6.0, 3.0),
                level: Spread(16.0, 1.3),
                champions: &["Ahri", "Viktor", "Orianna", "Syndra", "Yone"],
            },
            Role::Bottom => Self {
                cs_per_min: Spread(7.6, 1.1),
                neutral_share: 0.03,
                gold_per_min: Spread(460.0, 65.0),
                vision_per_min: Spread(0.5, 0.18),
                kills: Spread(6.5, 3.0),
                deaths: Spread(5.0, 2.0),
                assists: Spread(6.0, 3.0),
                level: Spread(15.5, 1.3),
                champions: &["Jinx", "KaiSa", "Ezreal", "Caitlyn", "Xayah"],
            },
            Role::Utility => Self {
                cs_per_min: Spread(1.1, 0.4),
                neutral_share: 0.0,
                gold_per_min: Spread(310.0, 45.0),
                vision_per_min: Spread(1.5, 0.35),
                kills: Spread(1.5, 1.3),
                deaths: Spread(6.0, 2.2),
                assists: Spread(12.0, 4.0),
                level: Spread(12.5, 1.2),
                champions: &["Renata", "Nautilus", "Thresh", "Lulu", "Braum"],
            },
            Role::Top | Role::Unknown => Self {
                cs_per_min: Spread(6.8, 1.1),
                neutral_share: 0.03,
                gold_per_min: Spread(425.0, 60.0),
                vision_per_min: Spread(0.5, 0.18),
                kills: Spread(4.5, 2.5),
                deaths: Spread(5.0, 2.0),
                assists: Spread(5.0, 2.8),
                level: Spread(16.0, 1.3),
                champions: &["Garen", "Aatrox", "Ornn", "Jax", "Fiora"],
            },
        }
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GenerateMatchesArg {
    /// Number of matches to generate
    #[arg(long, default_value_t = 100)]
    count: usize,
    /// Random seed (a random one is used otherwise)
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateMatchesArg) -> anyhow::Result<()> {
    let GenerateMatchesArg {
        count,
        seed,
        output,
    } = arg;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Pcg32::seed_from_u64(seed);

    let mut matches = Vec::with_capacity(*count);
    for i in 0..*count {
        let snapshot = generate_match(&mut rng, format!("GEN{seed}_{i}"))?;
        log::debug!(
            "generated {} ({}s, winner {})",
            snapshot.match_id,
            snapshot.duration_secs,
            snapshot.teams.iter().find(|t| t.win).map_or(0, |t| t.team_id)
        );
        matches.push(snapshot);
    }

    Output::save_json(&matches, output.clone())?;
    eprintln!("Generated {count} matches (seed {seed})");
    Ok(())
}

fn draw<R>(rng: &mut R, Spread(mean, std_dev): Spread, scale: f64) -> anyhow::Result<f64>
where
    R: Rng + ?Sized,
{
    let normal = Normal::new(mean * scale, std_dev * scale)?;
    Ok(normal.sample(rng).max(0.0))
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_count<R>(rng: &mut R, spread: Spread, scale: f64) -> anyhow::Result<u32>
where
    R: Rng + ?Sized,
{
    Ok(draw(rng, spread, scale)?.round() as u32)
}

fn generate_match<R>(rng: &mut R, match_id: String) -> anyhow::Result<MatchSnapshot>
where
    R: Rng + ?Sized,
{
    let duration_secs = draw_count(rng, Spread(1800.0, 330.0), 1.0)?.clamp(900, 3000);
    let minutes = f64::from(duration_secs) / 60.0;
    let winner = *TEAM_IDS.choose(rng).unwrap_or(&TEAM_IDS[0]);

    let mut participants = Vec::with_capacity(10);
    for (t, &team_id) in TEAM_IDS.iter().enumerate() {
        let edge = if team_id == winner { 1.08 } else { 0.93 };
        for (r, &role) in LANE_ROLES.iter().enumerate() {
            let id = u32::try_from(t * LANE_ROLES.len() + r + 1)?;
            let mut participant =
                generate_participant(rng, &match_id, id, team_id, role, minutes, edge)?;
            participant.win = team_id == winner;
            participants.push(participant);
        }
    }

    let teams = TEAM_IDS
        .iter()
        .map(|&team_id| {
            let kills = participants
                .iter()
                .filter(|p| p.team_id == team_id)
                .map(|p| p.kills)
                .sum();
            Team {
                team_id,
                win: team_id == winner,
                objectives: generate_objectives(rng, team_id == winner, kills),
            }
        })
        .collect();

    Ok(MatchSnapshot {
        match_id,
        completed: true,
        duration_secs,
        participants,
        teams,
    })
}

fn generate_participant<R>(
    rng: &mut R,
    match_id: &str,
    id: u32,
    team_id: u32,
    role: Role,
    minutes: f64,
    edge: f64,
) -> anyhow::Result<Participant>
where
    R: Rng + ?Sized,
{
    let dist = RoleDistribution::for_role(role);
    let creep_score = draw_count(rng, dist.cs_per_min, minutes * edge)?;
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let neutral = (f64::from(creep_score) * dist.neutral_share).round() as u32;
    let vision_score = draw_count(rng, dist.vision_per_min, minutes)?;
    let ward_rate = if role.is_support() { 0.55 } else { 0.3 };
    let ward_spread = Spread(ward_rate, ward_rate * 0.3);

    Ok(Participant {
        participant_id: id,
        team_id,
        team_position: role.as_str().to_owned(),
        puuid: format!("{}-{id}", match_id.to_ascii_lowercase()),
        display_name: format!("Player{id}"),
        champion_name: (*dist.champions.choose(rng).unwrap_or(&"Unknown")).to_owned(),
        champ_level: draw_count(rng, dist.level, 1.0)?.clamp(1, 18),
        kills: draw_count(rng, dist.kills, edge)?,
        deaths: draw_count(rng, dist.deaths, 2.0 - edge)?,
        assists: draw_count(rng, dist.assists, edge)?,
        lane_minions_killed: creep_score - neutral,
        neutral_minions_killed: neutral,
        gold_earned: draw_count(rng, dist.gold_per_min, minutes * edge)?,
        vision_score,
        wards_placed: draw_count(rng, ward_spread, minutes)?,
        wards_killed: draw_count(rng, Spread(ward_rate * 0.3, ward_rate * 0.15), minutes)?,
        control_wards_purchased: draw_count(
            rng,
            Spread(ward_rate * 0.12, ward_rate * 0.05),
            minutes,
        )?,
        win: false,
    })
}

fn generate_objectives<R>(rng: &mut R, won: bool, champion_kills: u32) -> Objectives
where
    R: Rng + ?Sized,
{
    let (dragons, barons, heralds, towers, inhibitors) = if won {
        (
            rng.random_range(1..=4),
            rng.random_range(0..=2),
            rng.random_range(0..=1),
            rng.random_range(6..=11),
            rng.random_range(1..=3),
        )
    } else {
        (
            rng.random_range(0..=2),
            rng.random_range(0..=1),
            rng.random_range(0..=1),
            rng.random_range(0..=5),
            rng.random_range(0..=1),
        )
    };
    Objectives {
        baron: ObjectiveStat::new(won && barons > 0, barons),
        dragon: ObjectiveStat::new(won && dragons > 0, dragons),
        rift_herald: ObjectiveStat::new(!won && heralds > 0, heralds),
        tower: ObjectiveStat::new(won, towers),
        inhibitor: ObjectiveStat::new(won && inhibitors > 0, inhibitors),
        champion: ObjectiveStat::new(rng.random_bool(0.5), champion_kills),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    #[test]
    fn test_generated_matches_are_valid() {
        let mut rng = Pcg32::seed_from_u64(7);
        for i in 0..50 {
            let snapshot = generate_match(&mut rng, format!("GEN7_{i}")).unwrap();
            assert_eq!(snapshot.validate(), Ok(()));
            assert_eq!(snapshot.participants.len(), 10);
            assert!((900..=3000).contains(&snapshot.duration_secs));
            assert_eq!(snapshot.teams.iter().filter(|t| t.win).count(), 1);
            for team in &snapshot.teams {
                let kills: u32 = snapshot
                    .participants
                    .iter()
                    .filter(|p| p.team_id == team.team_id)
                    .map(|p| p.kills)
                    .sum();
                assert_eq!(team.objectives.champion.kills, kills);
            }
            for p in &snapshot.participants {
                assert_eq!(p.win, snapshot.team(p.team_id).unwrap().win);
                assert!((1..=18).contains(&p.champ_level));
            }
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        let a = generate_match(&mut Pcg32::seed_from_u64(3), "A".to_owned()).unwrap();
        let b = generate_match(&mut Pcg32::seed_from_u64(3), "A".to_owned()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_lane_role_is_present_per_team() {
        let snapshot = generate_match(&mut Pcg32::seed_from_u64(11), "R".to_owned()).unwrap();
        for team_id in TEAM_IDS {
            let mut roles = snapshot
                .participants
                .iter()
                .filter(|p| p.team_id == team_id)
                .map(Participant::role)
                .collect::<Vec<_>>();
            roles.sort();
            assert_eq!(roles, LANE_ROLES);
        }
    }
}
