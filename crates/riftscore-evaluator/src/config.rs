//! Tunable engine configuration.
//!
//! Every field has a default, so a configuration file only needs the values
//! it overrides:
//!
//! ```
//! use riftscore_evaluator::EngineConfig;
//!
//! let config: EngineConfig = serde_json::from_str(r#"{
//!     "axisWeights": [{ "axis": "Global", "weight": 1.0 }]
//! }"#).unwrap();
//! assert_eq!(config.axis_weights.get("Global"), Some(1.0));
//! assert_eq!(config.axis_weights.get("RoleImpact"), None);
//! assert_eq!(config.objective_context.baron, 0.60);
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    aggregator::AxisWeights,
    axis::{objectives::ObjectiveContextWeights, versus_opponent::VersusOpponentConfig},
    role_profile::RoleProfiles,
};

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("at least one axis must be registered")]
    NoAxes,
    #[display("axis #{index} has a blank name")]
    BlankAxisName { index: usize },
    #[display("axis name '{name}' is registered more than once")]
    DuplicateAxisName { name: String },
    #[display("{field} must be a finite number, got {value}")]
    NonFinite { field: String, value: f64 },
    #[display("{field} must be positive, got {value}")]
    NonPositive { field: String, value: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub axis_weights: AxisWeights,
    pub role_profiles: RoleProfiles,
    pub versus_opponent: VersusOpponentConfig,
    pub objective_context: ObjectiveContextWeights,
}

impl EngineConfig {
    /// Rejects values the scoring curves cannot work with.
    ///
    /// Weights must be finite; role targets must also be positive. Negative
    /// or zero axis weights are allowed and simply exclude the axis.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for w in self.axis_weights.iter() {
            finite(format!("axis weight '{}'", w.axis), w.weight)?;
        }
        for (role, profile) in self.role_profiles.iter() {
            let targets = [
                ("csPerMin", profile.cs_per_min),
                ("goldPerMin", profile.gold_per_min),
                ("visionPerMin", profile.vision_per_min),
                ("deathsSoftCap", profile.deaths_soft_cap),
                ("kdaCap", profile.kda_cap),
            ];
            for (name, value) in targets {
                positive(format!("{role} {name}"), value)?;
            }
        }
        for (i, profile) in self.versus_opponent.profiles().iter().enumerate() {
            let channels = [
                ("gold", profile.ranges.gold, profile.weights.gold),
                ("cs", profile.ranges.cs, profile.weights.cs),
                ("level", profile.ranges.level, profile.weights.level),
                ("vision", profile.ranges.vision, profile.weights.vision),
            ];
            for (name, range, weight) in channels {
                finite(format!("versus profile #{i} {name} range"), range)?;
                finite(format!("versus profile #{i} {name} weight"), weight)?;
            }
        }
        for value in self.objective_context.values() {
            finite("objective context weight".to_owned(), value)?;
        }
        Ok(())
    }
}

fn finite(field: String, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn positive(field: String, value: f64) -> Result<(), ConfigError> {
    finite(field.clone(), value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
