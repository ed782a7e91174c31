//! Rank-based scoring within a peer group.

use std::cmp::Ordering;

use crate::curve;

/// Scores the subject's rank among `peers` by `metric`.
///
/// Peers are ordered best-first with a stable sort, so ties keep their input
/// order. The best rank scores 100, the worst 0, linearly in between.
/// The first peer matching `is_subject` is the subject.
///
/// # Arguments
///
/// * `peers` - The peer group, subject included
/// * `metric` - Extracts the ranked value from a peer
/// * `higher_is_better` - `false` ranks the lowest value first (deaths, for example)
/// * `is_subject` - Identifies the subject inside `peers`
///
/// # Returns
///
/// A score in `[0, 100]`, or 50 when the group has at most one member or no
/// peer satisfies `is_subject`.
///
/// # Examples
///
/// ```
/// use riftscore_stats::rank::rank_to_score;
///
/// let deaths = [3.0, 9.0, 5.0];
/// assert_eq!(rank_to_score(&deaths, |d| *d, false, |d| *d == 3.0), 100.0);
/// assert_eq!(rank_to_score(&deaths, |d| *d, false, |d| *d == 5.0), 50.0);
/// assert_eq!(rank_to_score(&deaths, |d| *d, false, |d| *d == 9.0), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn rank_to_score<T, M, S>(peers: &[T], metric: M, higher_is_better: bool, is_subject: S) -> f64
where
    M: Fn(&T) -> f64,
    S: Fn(&T) -> bool,
{
    if peers.len() <= 1 {
        return curve::NEUTRAL_SCORE;
    }

    let mut ordered = peers.iter().map(|p| (metric(p), p)).collect::<Vec<_>>();
    ordered.sort_by(|(a, _), (b, _)| {
        let ord = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        if higher_is_better { ord.reverse() } else { ord }
    });

    let Some(idx) = ordered.iter().position(|(_, p)| is_subject(p)) else {
        return curve::NEUTRAL_SCORE;
    };
    let last = (ordered.len() - 1) as f64;
    curve::clamp_score(curve::MAX_SCORE * (1.0 - idx as f64 / last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_member_cohort() {
        assert_eq!(rank_to_score(&[7.0], |v| *v, true, |_| true), 50.0);
        assert_eq!(rank_to_score::<f64, _, _>(&[], |v| *v, true, |_| true), 50.0);
    }

    #[test]
    fn test_subject_missing() {
        assert_eq!(rank_to_score(&[1.0, 2.0], |v| *v, true, |v| *v > 5.0), 50.0);
    }

    #[test]
    fn test_best_and_worst() {
        let peers = [(1, 10.0), (2, 30.0), (3, 20.0), (4, 40.0), (5, 0.0)];
        let score = |id| rank_to_score(&peers, |p| p.1, true, |p| p.0 == id);
        assert_eq!(score(4), 100.0);
        assert_eq!(score(2), 75.0);
        assert_eq!(score(3), 50.0);
        assert_eq!(score(1), 25.0);
        assert_eq!(score(5), 0.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let peers = [(1, 5.0), (2, 5.0)];
        assert_eq!(rank_to_score(&peers, |p| p.1, true, |p| p.0 == 1), 100.0);
        assert_eq!(rank_to_score(&peers, |p| p.1, true, |p| p.0 == 2), 0.0);
    }
}
