mod attenuation;
mod cluster_match;
mod quadratic;

use groups_lib::VoterId;
use std::collections::HashMap;
use thiserror::Error;

pub use attenuation::attenuated_contribution;
pub use cluster_match::{cluster_match, ClusterMatcher};
pub use quadratic::{quadratic_voting, quadratic_voting_indexed, QuadraticScore};

/// Hearts spent by each voter on a single proposal.
pub type Contributions = HashMap<VoterId, f64>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Membership(#[from] groups_lib::Error),
    #[error("no contribution recorded for voter {0}")]
    MissingContribution(VoterId),
    #[error("voter {0} contributed {1}, expected a finite non-negative amount")]
    InvalidContribution(VoterId, f64),
}

/// Contributions given as a list indexed by voter, matching [`groups_lib::Groups::from_indexed`].
pub fn contributions_from_indexed(contributions: &[f64]) -> Contributions {
    contributions
        .iter()
        .enumerate()
        .map(|(voter, amount)| (voter.to_string(), *amount))
        .collect()
}

fn contribution_of(voter: &str, contributions: &Contributions) -> Result<f64, Error> {
    match contributions.get(voter).copied() {
        Some(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        Some(amount) => Err(Error::InvalidContribution(voter.to_string(), amount)),
        None => Err(Error::MissingContribution(voter.to_string())),
    }
}
