//! Bounds on seeded random matches.

use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;
use riftscore_evaluator::{EngineConfig, PerformanceEvaluator};
use riftscore_match::{MatchSnapshot, ObjectiveStat, Objectives, Participant, Team};

const POSITIONS: [&str; 5] = ["TOP", "JUNGLE", "MIDDLE", "BOTTOM", "UTILITY"];

fn random_participant(rng: &mut Pcg32, id: u32, team_id: u32, position: &str) -> Participant {
    Participant {
        participant_id: id,
        team_id,
        team_position: position.to_owned(),
        puuid: format!("p{id}"),
        display_name: format!("player {id}"),
        champion_name: "Ahri".to_owned(),
        champ_level: rng.random_range(1..=18),
        kills: rng.random_range(0..=25),
        deaths: rng.random_range(0..=20),
        assists: rng.random_range(0..=30),
        lane_minions_killed: rng.random_range(0..=400),
        neutral_minions_killed: rng.random_range(0..=250),
        gold_earned: rng.random_range(0..=25_000),
        vision_score: rng.random_range(0..=120),
        wards_placed: rng.random_range(0..=40),
        wards_killed: rng.random_range(0..=20),
        control_wards_purchased: rng.random_range(0..=15),
        win: team_id == 100,
    }
}

fn random_objectives(rng: &mut Pcg32) -> Objectives {
    let mut stat = |max| ObjectiveStat::new(rng.random(), rng.random_range(0..=max));
    Objectives {
        baron: stat(3),
        dragon: stat(5),
        rift_herald: stat(2),
        tower: stat(11),
        inhibitor: stat(5),
        champion: stat(60),
    }
}

fn random_match(seed: u64) -> MatchSnapshot {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut participants = Vec::new();
    for (team_index, team_id) in [100, 200].into_iter().enumerate() {
        for (i, position) in POSITIONS.iter().enumerate() {
            // occasionally unlabeled or aliased roles
            let position = match rng.random_range(0..20) {
                0 => "",
                1 => "SUPPORT",
                _ => position,
            };
            #[expect(clippy::cast_possible_truncation)]
            let id = (team_index * 5 + i + 1) as u32;
            participants.push(random_participant(&mut rng, id, team_id, position));
        }
    }
    let teams = vec![
        Team {
            team_id: 100,
            win: true,
            objectives: random_objectives(&mut rng),
        },
        Team {
            team_id: 200,
            win: false,
            objectives: random_objectives(&mut rng),
        },
    ];
    MatchSnapshot {
        match_id: format!("random-{seed}"),
        completed: true,
        // includes games shorter than a minute
        duration_secs: rng.random_range(0..=3600),
        participants,
        teams,
    }
}

#[test]
fn test_scores_stay_in_bounds() {
    let evaluator = PerformanceEvaluator::with_default_axes(&EngineConfig::default()).unwrap();
    for seed in 0..200 {
        let snapshot = random_match(seed);
        let results = evaluator.evaluate_all(&snapshot).unwrap();
        assert_eq!(results.len(), 10);
        for result in &results {
            assert!(result.global_score <= 100, "seed {seed}");
            for axis in &result.axes {
                assert!(!axis.is_failed(), "seed {seed}: {:?}", axis.error());
                assert!(
                    (0.0..=100.0).contains(&axis.score()),
                    "seed {seed}: {} = {}",
                    axis.axis(),
                    axis.score()
                );
                for item in axis.breakdown() {
                    assert!(item.points.is_finite(), "seed {seed}: {}", item.label);
                }
            }
        }
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let evaluator = PerformanceEvaluator::with_default_axes(&EngineConfig::default()).unwrap();
    let snapshot = random_match(7);
    let first = evaluator.evaluate_all(&snapshot).unwrap();
    let second = evaluator.evaluate_all_parallel(&snapshot).unwrap();
    assert_eq!(first, second);
}
