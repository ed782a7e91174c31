//! A bundled finished match used by demos and tests.
//!
//! 29:36 custom 5v5. Team 200 wins with 3 dragons, 1 baron, 9 towers and 4
//! inhibitors; team 100 only takes a rift herald and 2 towers.

use crate::{MatchSnapshot, ObjectiveStat, Objectives, Participant, Team};

pub const SAMPLE_MATCH_ID: &str = "sample";

const DURATION_SECS: u32 = 29 * 60 + 36;

#[derive(Debug, Clone, Copy)]
struct Line {
    id: u32,
    team: u32,
    position: &'static str,
    name: &'static str,
    champion: &'static str,
    level: u32,
    kda: (u32, u32, u32),
    minions: (u32, u32),
    gold: u32,
    vision: u32,
    wards: (u32, u32, u32),
}

const LINES: [Line; 10] = [
    Line {
        id: 1,
        team: 100,
        position: "UTILITY",
        name: "Lanternwake",
        champion: "Renata",
        level: 12,
        kda: (1, 7, 14),
        minions: (24, 0),
        gold: 8200,
        vision: 45,
        wards: (24, 5, 8),
    },
    Line {
        id: 2,
        team: 100,
        position: "JUNGLE",
        name: "Mossback",
        champion: "LeeSin",
        level: 15,
        kda: (6, 6, 8),
        minions: (62, 138),
        gold: 11850,
        vision: 28,
        wards: (9, 7, 3),
    },
    Line {
        id: 3,
        team: 100,
        position: "MIDDLE",
        name: "Quillfire",
        champion: "Viktor",
        level: 16,
        kda: (9, 6, 6),
        minions: (226, 10),
        gold: 13950,
        vision: 19,
        wards: (10, 2, 1),
    },
    Line {
        id: 4,
        team: 100,
        position: "TOP",
        name: "Ironhollow",
        champion: "Garen",
        level: 15,
        kda: (2, 8, 3),
        minions: (198, 6),
        gold: 10150,
        vision: 14,
        wards: (7, 1, 1),
    },
    Line {
        id: 5,
        team: 100,
        position: "BOTTOM",
        name: "Sparrowshot",
        champion: "Jinx",
        level: 15,
        kda: (7, 6, 6),
        minions: (242, 6),
        gold: 13200,
        vision: 16,
        wards: (9, 2, 1),
    },
    Line {
        id: 6,
        team: 200,
        position: "TOP",
        name: "Cinderhelm",
        champion: "Aatrox",
        level: 17,
        kda: (5, 5, 7),
        minions: (238, 8),
        gold: 14100,
        vision: 16,
        wards: (8, 2, 1),
    },
    Line {
        id: 7,
        team: 200,
        position: "JUNGLE",
        name: "Nightbriar",
        champion: "Viego",
        level: 16,
        kda: (8, 4, 10),
        minions: (54, 162),
        gold: 14550,
        vision: 30,
        wards: (10, 8, 3),
    },
    Line {
        id: 8,
        team: 200,
        position: "MIDDLE",
        name: "Stormglass",
        champion: "Ahri",
        level: 17,
        kda: (10, 4, 9),
        minions: (231, 10),
        gold: 15100,
        vision: 21,
        wards: (10, 3, 1),
    },
    Line {
        id: 9,
        team: 200,
        position: "BOTTOM",
        name: "Tidecaller",
        champion: "KaiSa",
        level: 16,
        kda: (9, 5, 6),
        minions: (248, 4),
        gold: 14800,
        vision: 14,
        wards: (8, 1, 1),
    },
    Line {
        id: 10,
        team: 200,
        position: "UTILITY",
        name: "Anchorfall",
        champion: "Nautilus",
        level: 13,
        kda: (1, 7, 18),
        minions: (27, 0),
        gold: 8800,
        vision: 38,
        wards: (22, 6, 7),
    },
];

impl Line {
    fn to_participant(self) -> Participant {
        let (kills, deaths, assists) = self.kda;
        let (lane, neutral) = self.minions;
        let (placed, killed, control) = self.wards;
        Participant {
            participant_id: self.id,
            team_id: self.team,
            team_position: self.position.to_owned(),
            puuid: format!("sample-{}-{}", self.team, self.position.to_ascii_lowercase()),
            display_name: self.name.to_owned(),
            champion_name: self.champion.to_owned(),
            champ_level: self.level,
            kills,
            deaths,
            assists,
            lane_minions_killed: lane,
            neutral_minions_killed: neutral,
            gold_earned: self.gold,
            vision_score: self.vision,
            wards_placed: placed,
            wards_killed: killed,
            control_wards_purchased: control,
            win: self.team == 200,
        }
    }
}

/// Builds the sample match.
#[must_use]
pub fn finished_match() -> MatchSnapshot {
    let participants = LINES.iter().map(|l| l.to_participant()).collect();
    let teams = vec![
        Team {
            team_id: 100,
            win: false,
            objectives: Objectives {
                baron: ObjectiveStat::new(false, 0),
                dragon: ObjectiveStat::new(false, 0),
                rift_herald: ObjectiveStat::new(true, 1),
                tower: ObjectiveStat::new(false, 2),
                inhibitor: ObjectiveStat::new(false, 0),
                champion: ObjectiveStat::new(true, 25),
            },
        },
        Team {
            team_id: 200,
            win: true,
            objectives: Objectives {
                baron: ObjectiveStat::new(true, 1),
                dragon: ObjectiveStat::new(true, 3),
                rift_herald: ObjectiveStat::new(false, 0),
                tower: ObjectiveStat::new(true, 9),
                inhibitor: ObjectiveStat::new(true, 4),
                champion: ObjectiveStat::new(false, 33),
            },
        },
    ];
    MatchSnapshot {
        match_id: SAMPLE_MATCH_ID.to_owned(),
        completed: true,
        duration_secs: DURATION_SECS,
        participants,
        teams,
    }
}
