use crate::utils::serde::{deserialize_funds_lenient, deserialize_number_or_string};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;
use tracing::debug;

pub type Funds = u64;
pub type ProposalId = String;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("proposal {0} appears more than once")]
    DuplicateProposal(ProposalId),
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FundSetting {
    pub total_funding: Funds,
    pub max_funding_per_proposal: Funds,
}

impl FundSetting {
    #[inline]
    pub fn allocate(&self, proposals: &[ProposalFunding]) -> Result<FundingAllocation, Error> {
        allocate_funding(self.total_funding, self.max_funding_per_proposal, proposals)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProposalFunding {
    pub id: ProposalId,
    #[serde(alias = "voteScore", deserialize_with = "deserialize_number_or_string")]
    pub vote_score: f64,
    /// Missing, null or unreadable requests are read as no request at all
    #[serde(
        alias = "fundingRequest",
        default,
        deserialize_with = "deserialize_funds_lenient"
    )]
    pub funding_request: Funds,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FundingAllocation {
    /// Every proposal, with 0 for the unfunded ones
    pub allocated_funding: BTreeMap<ProposalId, Funds>,
    pub remaining_funding: Funds,
}

impl FundingAllocation {
    pub fn total_allocated(&self) -> Funds {
        self.allocated_funding.values().sum()
    }
}

/// Fund proposals by decreasing vote score until the pool runs out.
///
/// Requests above `max_funding_per_proposal` are disqualified. A proposal is either
/// funded in full or not at all: one that does not fit in what is left is skipped
/// and cheaper proposals further down the ranking can still be funded.
///
/// Proposals with the same score keep their relative input order.
pub fn allocate_funding(
    total_funding: Funds,
    max_funding_per_proposal: Funds,
    proposals: &[ProposalFunding],
) -> Result<FundingAllocation, Error> {
    let mut ids = HashSet::new();
    if let Some(duplicate) = proposals.iter().find(|p| !ids.insert(&p.id)) {
        return Err(Error::DuplicateProposal(duplicate.id.clone()));
    }

    let ranked = proposals
        .iter()
        .map(|proposal| {
            let request = if proposal.funding_request > max_funding_per_proposal {
                debug!(
                    proposal = %proposal.id,
                    request = proposal.funding_request,
                    "request above the per proposal maximum, disqualified"
                );
                0
            } else {
                proposal.funding_request
            };
            (proposal, request)
        })
        // stable: ties stay in input order
        .sorted_by(|(a, _), (b, _)| b.vote_score.total_cmp(&a.vote_score));

    let mut remaining_funding = total_funding;
    let mut allocated_funding = BTreeMap::new();
    for (proposal, request) in ranked {
        let funds = if remaining_funding == 0 {
            0
        } else if request <= remaining_funding {
            remaining_funding -= request;
            request
        } else {
            debug!(
                proposal = %proposal.id,
                request,
                remaining_funding,
                "not enough funds left for the request"
            );
            0
        };
        allocated_funding.insert(proposal.id.clone(), funds);
    }

    Ok(FundingAllocation {
        allocated_funding,
        remaining_funding,
    })
}
