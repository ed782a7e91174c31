use serde::{Deserialize, Serialize};

/// Letter grade for a 0–100 score, ordered from worst to best.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
    S,
}

impl Grade {
    pub const ALL: [Self; 6] = [Self::F, Self::D, Self::C, Self::B, Self::A, Self::S];

    /// Maps a score to its grade.
    ///
    /// ```
    /// use riftscore_evaluator::Grade;
    ///
    /// assert_eq!(Grade::from_score(90.0), Grade::S);
    /// assert_eq!(Grade::from_score(89.0), Grade::A);
    /// assert_eq!(Grade::from_score(49.99), Grade::F);
    /// ```
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::S
        } else if score >= 80.0 {
            Self::A
        } else if score >= 70.0 {
            Self::B
        } else if score >= 60.0 {
            Self::C
        } else if score >= 50.0 {
            Self::D
        } else {
            Self::F
        }
    }
}
