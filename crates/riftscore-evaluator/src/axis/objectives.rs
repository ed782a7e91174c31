//! Map control and a small team objective context.

use riftscore_match::{Objectives, Role, Team};
use riftscore_stats::curve::{self, piecewise};
use serde::{Deserialize, Serialize};

use super::{
    AxisCalculator, AxisError, AxisInput, AxisScore, BreakdownItem, centred_points, ensure_finite,
    trimmed,
};

pub const NAME: &str = "Objectives";

/// Weights of each objective count difference in the team context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectiveContextWeights {
    pub dragon: f64,
    pub baron: f64,
    pub herald: f64,
    pub tower: f64,
}

impl Default for ObjectiveContextWeights {
    fn default() -> Self {
        Self {
            dragon: 0.25,
            baron: 0.60,
            herald: 0.20,
            tower: 0.05,
        }
    }
}

impl ObjectiveContextWeights {
    /// Objective advantage of `own` over `enemy`, clamped to `[-1, 1]`.
    #[must_use]
    pub fn context(&self, own: &Objectives, enemy: &Objectives) -> f64 {
        let diff = |a: u32, b: u32| f64::from(a) - f64::from(b);
        let raw = self.dragon * diff(own.dragon.kills, enemy.dragon.kills)
            + self.baron * diff(own.baron.kills, enemy.baron.kills)
            + self.herald * diff(own.rift_herald.kills, enemy.rift_herald.kills)
            + self.tower * diff(own.tower.kills, enemy.tower.kills);
        curve::clamp(raw, -1.0, 1.0)
    }

    pub(crate) fn values(&self) -> [f64; 4] {
        [self.dragon, self.baron, self.herald, self.tower]
    }
}

/// `(mid, high)` anchors of a piecewise proxy.
type Anchors = (f64, f64);

#[derive(Debug, Clone, Copy)]
struct ProxyTargets {
    vision: Anchors,
    control_wards: Anchors,
    wards_killed: Anchors,
}

#[derive(Debug, Clone, Copy)]
struct Weights {
    vision: f64,
    control: f64,
    clear: f64,
    presence: f64,
    context: f64,
}

fn targets(role: Role) -> ProxyTargets {
    match role {
        Role::Utility => ProxyTargets {
            vision: (1.10, 1.50),
            control_wards: (0.20, 0.30),
            wards_killed: (0.20, 0.30),
        },
        Role::Jungle => ProxyTargets {
            vision: (0.75, 1.00),
            control_wards: (0.10, 0.16),
            wards_killed: (0.17, 0.25),
        },
        _ => ProxyTargets {
            vision: (0.55, 0.75),
            control_wards: (0.07, 0.11),
            wards_killed: (0.10, 0.16),
        },
    }
}

fn weights(role: Role) -> Weights {
    let (vision, control, clear, presence, context) = match role {
        Role::Jungle => (0.30, 0.10, 0.15, 0.35, 0.10),
        Role::Utility => (0.45, 0.20, 0.20, 0.00, 0.15),
        _ => (0.35, 0.15, 0.20, 0.00, 0.30),
    };
    Weights {
        vision,
        control,
        clear,
        presence,
        context,
    }
}

/// Vision control proxies per minute plus a capped objective context.
///
/// The context stays within 40..60 so a lost game is never punished through
/// this axis alone.
#[derive(Debug, Clone, Default)]
pub struct ObjectivesAxis {
    context_weights: ObjectiveContextWeights,
}

impl ObjectivesAxis {
    #[must_use]
    pub fn new(context_weights: ObjectiveContextWeights) -> Self {
        Self { context_weights }
    }
}

fn team_counts(team: &Team) -> [BreakdownItem; 4] {
    let o = &team.objectives;
    [
        BreakdownItem::info("Dragons (team)", o.dragon.kills.to_string()),
        BreakdownItem::info("Barons (team)", o.baron.kills.to_string()),
        BreakdownItem::info("Herald (team)", o.rift_herald.kills.to_string()),
        BreakdownItem::info("Towers (team)", o.tower.kills.to_string()),
    ]
}

impl AxisCalculator for ObjectivesAxis {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(&self, input: &AxisInput<'_>) -> Result<AxisScore, AxisError> {
        let player = input.player;
        let role = player.role();
        let minutes = input.snapshot.minutes_at_least(1.0);

        let context = self
            .context_weights
            .context(&input.player_team.objectives, &input.enemy_team.objectives);
        let context_score = curve::clamp(50.0 + 20.0 * context, 40.0, 60.0);

        let vision_per_min = f64::from(player.vision_score) / minutes;
        let control_per_min = f64::from(player.control_wards_purchased) / minutes;
        let cleared_per_min = f64::from(player.wards_killed) / minutes;
        let neutral_per_min = f64::from(player.neutral_minions_killed) / minutes;

        let t = targets(role);
        let vision_score = piecewise(vision_per_min, 0.4, t.vision.0, t.vision.1);
        let control_score = piecewise(control_per_min, 0.03, t.control_wards.0, t.control_wards.1);
        let clear_score = piecewise(cleared_per_min, 0.03, t.wards_killed.0, t.wards_killed.1);
        let presence_score = if role.is_jungle() {
            piecewise(neutral_per_min, 1.8, 2.6, 3.4)
        } else {
            curve::NEUTRAL_SCORE
        };

        let w = weights(role);
        let score = ensure_finite(
            "objectives",
            w.vision * vision_score
                + w.control * control_score
                + w.clear * clear_score
                + w.presence * presence_score
                + w.context * context_score,
        )?;

        let item = |label: &str, value: f64, sub: f64, weight: f64| {
            BreakdownItem::new(label, format!("{value:.2}"), centred_points(sub, weight))
                .with_note(format!("sub {}/100", trimmed(sub)))
        };
        let mut breakdown = vec![
            item("Vision/min", vision_per_min, vision_score, w.vision),
            item("Ctrl wards/min", control_per_min, control_score, w.control),
            item("Wards killed/min", cleared_per_min, clear_score, w.clear),
        ];
        if role.is_jungle() {
            breakdown.push(
                item("Neutral CS/min", neutral_per_min, presence_score, w.presence)
                    .with_note(format!("sub {}/100 (presence proxy)", trimmed(presence_score))),
            );
        }
        breakdown.push(
            BreakdownItem::new(
                "Objective context",
                format!("{context_score:.1}"),
                centred_points(context_score, w.context),
            )
            .with_note("small capped bonus, not a win/loss penalty"),
        );
        breakdown.extend(team_counts(input.player_team));

        Ok(AxisScore::new(NAME, score, breakdown))
    }
}
