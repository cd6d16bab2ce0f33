use super::{attenuated_contribution, contribution_of, Contributions, Error};
use groups_lib::{Group, GroupMembership, Groups};

fn spread_contributions(
    group: &Group,
    memberships: &GroupMembership,
    contributions: &Contributions,
) -> Result<f64, Error> {
    group.members.iter().try_fold(0.0, |acc, member| -> Result<f64, Error> {
        let contribution = contribution_of(member, contributions)?;
        Ok(acc + contribution / memberships.membership_count(member)? as f64)
    })
}

fn attenuated_sum(
    group: &Group,
    other: &Group,
    memberships: &GroupMembership,
    contributions: &Contributions,
) -> Result<f64, Error> {
    group.members.iter().try_fold(0.0, |acc, agent| -> Result<f64, Error> {
        let contribution = attenuated_contribution(agent, other, memberships, contributions)?;
        Ok(acc + contribution / memberships.membership_count(agent)? as f64)
    })
}

/// Groups and memberships of an election, prepared once to score many proposals.
#[derive(Debug, Clone)]
pub struct ClusterMatcher {
    groups: Groups,
    memberships: GroupMembership,
}

impl ClusterMatcher {
    /// Groups with identical members are collapsed into the first one seen.
    pub fn new(groups: &Groups) -> Self {
        let groups = groups.deduplicated();
        let memberships = GroupMembership::from_distinct_groups(&groups);
        Self {
            groups,
            memberships,
        }
    }

    pub fn groups(&self) -> &Groups {
        &self.groups
    }

    pub fn memberships(&self) -> &GroupMembership {
        &self.memberships
    }

    /// See [`cluster_match`].
    pub fn score(&self, contributions: &Contributions) -> Result<f64, Error> {
        let Self {
            groups,
            memberships,
        } = self;

        let mut total = 0.0;
        for group in groups {
            total += spread_contributions(group, memberships, contributions)?;
        }

        for (i, group) in groups.iter().enumerate() {
            for (j, other) in groups.iter().enumerate() {
                if i == j || group.same_members(other) {
                    continue;
                }
                let term1 = attenuated_sum(group, other, memberships, contributions)?.sqrt();
                let term2 = attenuated_sum(other, group, memberships, contributions)?.sqrt();
                total += term1 * term2;
            }
        }

        Ok(total.sqrt())
    }
}

/// Plurality score of a single proposal.
///
/// Every voter's contribution is split evenly across the groups it belongs to.
/// On top of that, every ordered pair of distinct groups adds the product of the
/// square roots of their members' contributions, each attenuated against the
/// other group (see [`attenuated_contribution`]). The score is the square root of
/// the total.
///
/// Groups with identical members are collapsed first. Any group member without a
/// contribution fails the whole computation: no partial score is ever returned.
pub fn cluster_match(groups: &Groups, contributions: &Contributions) -> Result<f64, Error> {
    ClusterMatcher::new(groups).score(contributions)
}
