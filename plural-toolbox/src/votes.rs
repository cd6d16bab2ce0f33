use crate::funding::ProposalId;
use crate::scoring::Contributions;
use groups_lib::VoterId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Hearts a voter put on a proposal.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct VoteRecord {
    pub voter: VoterId,
    pub proposal: ProposalId,
    pub hearts: f64,
}

/// Latest hearts of every voter, for every proposal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoteCount(BTreeMap<ProposalId, BTreeMap<VoterId, f64>>);

impl VoteCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records are applied in order: a later vote of the same voter on the same
    /// proposal replaces the earlier one.
    pub fn from_records(records: impl IntoIterator<Item = VoteRecord>) -> Self {
        records.into_iter().fold(Self::new(), |mut acc, record| {
            acc.record(record);
            acc
        })
    }

    pub fn record(&mut self, record: VoteRecord) {
        let VoteRecord {
            voter,
            proposal,
            hearts,
        } = record;
        self.0.entry(proposal).or_default().insert(voter, hearts);
    }

    pub fn proposals(&self) -> impl Iterator<Item = &ProposalId> {
        self.0.keys()
    }

    pub fn votes_for(&self, proposal: &str) -> Option<&BTreeMap<VoterId, f64>> {
        self.0.get(proposal)
    }

    pub fn voters(&self) -> BTreeSet<&VoterId> {
        self.0.values().flat_map(BTreeMap::keys).collect()
    }

    /// Contributions to `proposal`: every vote cast on it, and `0` for the
    /// participants that did not vote on it.
    ///
    /// Anyone who is neither is left out, so that scoring a group containing them fails.
    pub fn contributions_for<'a>(
        &self,
        proposal: &str,
        participants: impl IntoIterator<Item = &'a VoterId>,
    ) -> Contributions {
        let mut contributions = participants
            .into_iter()
            .map(|voter| (voter.clone(), 0.0))
            .collect::<Contributions>();
        if let Some(votes) = self.0.get(proposal) {
            contributions.extend(votes.iter().map(|(voter, hearts)| (voter.clone(), *hearts)));
        }
        contributions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(voter: &str, proposal: &str, hearts: f64) -> VoteRecord {
        VoteRecord {
            voter: voter.to_string(),
            proposal: proposal.to_string(),
            hearts,
        }
    }

    #[test]
    fn latest_vote_wins() {
        let votes = VoteCount::from_records([
            vote("alice", "p1", 3.0),
            vote("bob", "p1", 1.0),
            vote("alice", "p2", 2.0),
            vote("alice", "p1", 5.0),
        ]);
        let p1 = votes.votes_for("p1").unwrap();
        assert_eq!(p1.get("alice"), Some(&5.0));
        assert_eq!(p1.get("bob"), Some(&1.0));
        assert_eq!(votes.votes_for("p2").unwrap().len(), 1);
        assert_eq!(votes.proposals().count(), 2);
        assert_eq!(votes.voters().len(), 2);
    }

    #[test]
    fn participants_without_votes_contribute_nothing() {
        let votes = VoteCount::from_records([vote("alice", "p1", 3.0), vote("dave", "p1", 1.0)]);
        let participants = ["alice".to_string(), "bob".to_string()];
        let contributions = votes.contributions_for("p1", &participants);
        assert_eq!(contributions.len(), 3);
        assert_eq!(contributions["alice"], 3.0);
        assert_eq!(contributions["bob"], 0.0);
        assert_eq!(contributions["dave"], 1.0);
        assert!(!contributions.contains_key("carol"));
    }

    #[test]
    fn proposal_without_votes() {
        let votes = VoteCount::new();
        let participants = ["alice".to_string()];
        let contributions = votes.contributions_for("p1", &participants);
        assert_eq!(contributions["alice"], 0.0);
    }

    #[test]
    fn parse_records() {
        let records: Vec<VoteRecord> = serde_json::from_str(
            r#"[{"voter": "alice", "proposal": "p1", "hearts": 4}]"#,
        )
        .unwrap();
        assert_eq!(records, vec![vote("alice", "p1", 4.0)]);
    }
}
