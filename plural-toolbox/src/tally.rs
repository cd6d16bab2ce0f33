use crate::funding::ProposalId;
use crate::scoring::{quadratic_voting, ClusterMatcher, Error};
use crate::votes::VoteCount;
use groups_lib::{Groups, VoterId};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProposalScores {
    pub proposal_id: ProposalId,
    pub plurality_score: f64,
    pub quadratic_score: f64,
}

/// Plurality and quadratic scores of every proposal that received votes.
///
/// Registered `participants` that did not vote on a proposal count as a zero
/// contribution to it, see [`VoteCount::contributions_for`]. A single proposal
/// failing to score fails the whole tally.
pub fn score_proposals<'a, P>(
    groups: &Groups,
    votes: &VoteCount,
    participants: P,
) -> Result<Vec<ProposalScores>, Error>
where
    P: IntoIterator<Item = &'a VoterId> + Clone,
{
    let matcher = ClusterMatcher::new(groups);
    votes
        .proposals()
        .map(|proposal| {
            let contributions = votes.contributions_for(proposal, participants.clone());
            let quadratic_score = votes
                .votes_for(proposal)
                .map(|votes| quadratic_voting(votes).total)
                .unwrap_or_default();
            Ok(ProposalScores {
                proposal_id: proposal.clone(),
                plurality_score: matcher.score(&contributions)?,
                quadratic_score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::votes::VoteRecord;
    use groups_lib::Group;

    fn vote(voter: &str, proposal: &str, hearts: f64) -> VoteRecord {
        VoteRecord {
            voter: voter.to_string(),
            proposal: proposal.to_string(),
            hearts,
        }
    }

    fn groups() -> Groups {
        Groups::new([Group::new("a", ["alice"]), Group::new("b", ["bob"])]).unwrap()
    }

    #[test]
    fn scores_every_voted_proposal() {
        let votes = VoteCount::from_records([
            vote("alice", "p1", 4.0),
            vote("bob", "p1", 4.0),
            vote("alice", "p2", 9.0),
        ]);
        let groups = groups();
        let scores = score_proposals(&groups, &votes, groups.voters()).unwrap();
        assert_eq!(
            scores,
            vec![
                ProposalScores {
                    proposal_id: "p1".to_string(),
                    plurality_score: 4.0,
                    quadratic_score: 4.0,
                },
                ProposalScores {
                    proposal_id: "p2".to_string(),
                    plurality_score: 3.0,
                    quadratic_score: 3.0,
                },
            ]
        );
    }

    #[test]
    fn unregistered_group_member_fails_the_tally() {
        let votes = VoteCount::from_records([vote("alice", "p1", 4.0)]);
        let participants = ["alice".to_string()];
        assert_eq!(
            score_proposals(&groups(), &votes, &participants),
            Err(Error::MissingContribution("bob".to_string()))
        );
    }

    #[test]
    fn negative_hearts_fail_the_tally() {
        let votes = VoteCount::from_records([vote("alice", "p1", -4.0), vote("bob", "p1", 1.0)]);
        let groups = groups();
        assert_eq!(
            score_proposals(&groups, &votes, groups.voters()),
            Err(Error::InvalidContribution("alice".to_string(), -4.0))
        );
    }

    #[test]
    fn no_votes_no_scores() {
        let groups = groups();
        let scores = score_proposals(&groups, &VoteCount::new(), groups.voters()).unwrap();
        assert!(scores.is_empty());
    }
}
