//! Per-role expectations.
//!
//! A [`RoleProfile`] holds the constant targets a role is measured against.
//! Targets are configuration, not computed from data: see
//! [`RoleProfiles::default`] for the shipped numbers.

use riftscore_match::Role;
use riftscore_stats::anchor::AnchorCurve;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleProfile {
    pub cs_per_min: f64,
    pub gold_per_min: f64,
    pub vision_per_min: f64,
    /// Deaths over a whole game that still count as acceptable.
    pub deaths_soft_cap: f64,
    /// KDA above this value earns nothing extra.
    pub kda_cap: f64,
}

impl RoleProfile {
    #[must_use]
    pub const fn new(
        cs_per_min: f64,
        gold_per_min: f64,
        vision_per_min: f64,
        deaths_soft_cap: f64,
        kda_cap: f64,
    ) -> Self {
        Self {
            cs_per_min,
            gold_per_min,
            vision_per_min,
            deaths_soft_cap,
            kda_cap,
        }
    }
}

/// Profiles for every lane role. [`Role::Unknown`] uses the top profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoleProfiles {
    pub top: RoleProfile,
    pub jungle: RoleProfile,
    pub middle: RoleProfile,
    pub bottom: RoleProfile,
    pub utility: RoleProfile,
}

impl Default for RoleProfiles {
    fn default() -> Self {
        Self {
            top: RoleProfile::new(6.5, 420.0, 0.55, 6.0, 6.0),
            jungle: RoleProfile::new(5.5, 410.0, 0.65, 6.0, 6.0),
            middle: RoleProfile::new(7.0, 450.0, 0.55, 6.0, 6.0),
            bottom: RoleProfile::new(7.5, 460.0, 0.50, 6.5, 7.0),
            utility: RoleProfile::new(1.2, 320.0, 1.35, 6.0, 5.0),
        }
    }
}

impl RoleProfiles {
    #[must_use]
    pub fn for_role(&self, role: Role) -> &RoleProfile {
        match role {
            Role::Top | Role::Unknown => &self.top,
            Role::Jungle => &self.jungle,
            Role::Middle => &self.middle,
            Role::Bottom => &self.bottom,
            Role::Utility => &self.utility,
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Role, &RoleProfile)> {
        [Role::Top, Role::Jungle, Role::Middle, Role::Bottom, Role::Utility]
            .into_iter()
            .map(|role| (role, self.for_role(role)))
    }
}

/// Deaths-per-minute thresholds of the death-rate curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathRateThresholds {
    pub good: f64,
    pub ok: f64,
    pub bad: f64,
    pub awful: f64,
}

impl DeathRateThresholds {
    pub const SUPPORT: Self = Self {
        good: 0.15,
        ok: 0.30,
        bad: 0.45,
        awful: 0.60,
    };
    pub const DEFAULT: Self = Self {
        good: 0.12,
        ok: 0.25,
        bad: 0.40,
        awful: 0.55,
    };

    #[must_use]
    pub fn for_role(role: Role) -> Self {
        if role.is_support() {
            Self::SUPPORT
        } else {
            Self::DEFAULT
        }
    }

    /// 100 at or below `good`, then 75, 40 and 0 at `ok`, `bad` and `awful`.
    #[must_use]
    pub fn curve(&self) -> AnchorCurve {
        AnchorCurve::new(&[
            (self.good, 100.0),
            (self.ok, 75.0),
            (self.bad, 40.0),
            (self.awful, 0.0),
        ])
    }
}

/// Scores a deaths-per-minute rate for `role`.
#[must_use]
pub fn death_rate_score(role: Role, deaths_per_min: f64) -> f64 {
    DeathRateThresholds::for_role(role)
        .curve()
        .score(deaths_per_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_uses_top() {
        let profiles = RoleProfiles::default();
        assert_eq!(profiles.for_role(Role::Unknown), profiles.for_role(Role::Top));
        assert_eq!(profiles.for_role(Role::Bottom).kda_cap, 7.0);
        assert_eq!(profiles.iter().count(), 5);
    }

    #[test]
    fn test_death_rate_score() {
        assert_eq!(death_rate_score(Role::Middle, 0.0), 100.0);
        assert_eq!(death_rate_score(Role::Middle, 0.12), 100.0);
        assert!((death_rate_score(Role::Middle, 0.25) - 75.0).abs() < 1e-9);
        assert!((death_rate_score(Role::Middle, 0.40) - 40.0).abs() < 1e-9);
        assert_eq!(death_rate_score(Role::Middle, 0.55), 0.0);
        assert_eq!(death_rate_score(Role::Middle, 1.0), 0.0);
    }

    #[test]
    fn test_supports_tolerate_more_deaths() {
        assert_eq!(death_rate_score(Role::Utility, 0.15), 100.0);
        assert!(death_rate_score(Role::Utility, 0.3) > death_rate_score(Role::Top, 0.3));
    }

    #[test]
    fn test_partial_profiles_config() {
        let json = concat!(
            r#"{"top":{"csPerMin":7.0,"goldPerMin":400.0,"visionPerMin":0.5,"#,
            r#""deathsSoftCap":5.0,"kdaCap":5.0}}"#,
        );
        let profiles: RoleProfiles = serde_json::from_str(json).unwrap();
        assert_eq!(profiles.top.cs_per_min, 7.0);
        assert_eq!(profiles.utility, RoleProfiles::default().utility);
    }
}
