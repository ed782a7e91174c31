use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized lane role of a participant.
///
/// Raw position labels coming from the game-data API are trimmed and
/// uppercased before matching. `SUPPORT` is accepted as an alias of
/// `UTILITY`; every other unrecognized label maps to [`Role::Unknown`].
///
/// The alias applies everywhere a role is read, so a `SUPPORT` label gets
/// support targets on every axis, including the role-target comparison of
/// the global axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Top,
    Jungle,
    Middle,
    Bottom,
    Utility,
    Unknown,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Top,
        Role::Jungle,
        Role::Middle,
        Role::Bottom,
        Role::Utility,
        Role::Unknown,
    ];

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "TOP" => Self::Top,
            "JUNGLE" => Self::Jungle,
            "MIDDLE" => Self::Middle,
            "BOTTOM" => Self::Bottom,
            "UTILITY" | "SUPPORT" => Self::Utility,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Jungle => "JUNGLE",
            Self::Middle => "MIDDLE",
            Self::Bottom => "BOTTOM",
            Self::Utility => "UTILITY",
            Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub fn is_support(self) -> bool {
        self == Self::Utility
    }

    #[must_use]
    pub fn is_jungle(self) -> bool {
        self == Self::Jungle
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_trims_and_uppercases() {
        assert_eq!(Role::from_label("  middle "), Role::Middle);
        assert_eq!(Role::from_label("Jungle"), Role::Jungle);
        assert_eq!(Role::from_label("BOTTOM"), Role::Bottom);
    }

    #[test]
    fn test_support_alias() {
        assert_eq!(Role::from_label("support"), Role::Utility);
        assert_eq!(Role::from_label("UTILITY"), Role::Utility);
        assert!(Role::Utility.is_support());
    }

    #[test]
    fn test_unrecognized_labels() {
        assert_eq!(Role::from_label(""), Role::Unknown);
        assert_eq!(Role::from_label("   "), Role::Unknown);
        assert_eq!(Role::from_label("ADC"), Role::Unknown);
    }

    #[test]
    fn test_display_roundtrips_through_label() {
        for role in Role::ALL {
            assert_eq!(Role::from_label(&role.to_string()), role);
        }
    }
}
