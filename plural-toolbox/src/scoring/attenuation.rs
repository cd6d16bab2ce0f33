use super::{contribution_of, Contributions, Error};
use groups_lib::{Group, GroupMembership};
use itertools::process_results;

/// Effective contribution of `agent` when compared against the members of `other`.
///
/// The raw contribution is kept only when the agent is unrelated to `other`: being
/// one of its members, or sharing any group with one of its members, reduces it to
/// its square root.
///
/// The agent must have both a contribution and a membership entry. Members of
/// `other` are looked up until the first one sharing a group with the agent, so a
/// member missing from `memberships` only fails the call if it is reached.
pub fn attenuated_contribution(
    agent: &str,
    other: &Group,
    memberships: &GroupMembership,
    contributions: &Contributions,
) -> Result<f64, Error> {
    let contribution = contribution_of(agent, contributions)?;
    memberships.groups_of(agent)?;

    let related = other.contains(agent)
        || process_results(
            other
                .members
                .iter()
                .map(|member| memberships.common_group(agent, member)),
            |mut shared| shared.any(|shared| shared),
        )?;

    Ok(if related {
        contribution.sqrt()
    } else {
        contribution
    })
}
