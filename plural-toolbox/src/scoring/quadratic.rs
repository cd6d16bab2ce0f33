use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadraticScore<K: Ord> {
    pub per_voter: BTreeMap<K, f64>,
    pub total: f64,
}

// Anything that is not a finite non-negative amount counts as no vote at all.
fn effective_votes(votes: f64) -> f64 {
    if votes.is_finite() && votes >= 0.0 {
        votes.sqrt()
    } else {
        debug!(votes, "counting invalid quadratic vote as zero");
        0.0
    }
}

/// Square root of every voter's votes, and their sum.
///
/// Unlike [`super::cluster_match`] this never fails, it is an informational score
/// that ignores group structure altogether.
pub fn quadratic_voting<K: Ord + Clone>(votes: &BTreeMap<K, f64>) -> QuadraticScore<K> {
    let per_voter = votes
        .iter()
        .map(|(voter, votes)| (voter.clone(), effective_votes(*votes)))
        .collect::<BTreeMap<_, _>>();
    let total = per_voter.values().sum();
    QuadraticScore { per_voter, total }
}

/// Same as [`quadratic_voting`] for votes indexed by voter, where an empty slot counts as zero.
pub fn quadratic_voting_indexed(votes: &[Option<f64>]) -> QuadraticScore<usize> {
    let votes = votes
        .iter()
        .enumerate()
        .map(|(voter, votes)| (voter, votes.unwrap_or_default()))
        .collect();
    quadratic_voting(&votes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_strategy::proptest;

    #[test]
    fn square_roots_and_sum() {
        let votes = BTreeMap::from([("user1", 4.0), ("user2", 9.0), ("user3", 16.0)]);
        let score = quadratic_voting(&votes);
        assert_eq!(
            score.per_voter,
            BTreeMap::from([("user1", 2.0), ("user2", 3.0), ("user3", 4.0)])
        );
        assert_eq!(score.total, 9.0);
    }

    #[test]
    fn empty_slots_count_as_zero() {
        let score = quadratic_voting_indexed(&[Some(4.0), None, Some(1.0)]);
        assert_eq!(score.per_voter.get(&1), Some(&0.0));
        assert_eq!(score.total, 3.0);
    }

    #[test]
    fn invalid_votes_count_as_zero() {
        let score = quadratic_voting_indexed(&[Some(-4.0), Some(f64::NAN), Some(f64::INFINITY)]);
        assert_eq!(score.total, 0.0);
    }

    #[test]
    fn no_votes() {
        let score = quadratic_voting::<String>(&BTreeMap::new());
        assert!(score.per_voter.is_empty());
        assert_eq!(score.total, 0.0);
    }

    #[proptest]
    fn never_negative_and_idempotent(
        #[strategy(proptest::collection::vec(proptest::option::of(-10.0..1e9f64), 0..20))]
        votes: Vec<Option<f64>>,
    ) {
        let score = quadratic_voting_indexed(&votes);
        prop_assert!(score.total >= 0.0);
        prop_assert!(score.per_voter.values().all(|v| *v >= 0.0));
        prop_assert_eq!(
            score.total.to_bits(),
            quadratic_voting_indexed(&votes).total.to_bits()
        );
    }
}
