use crate::{Error, GroupId, Groups, VoterId};
use std::collections::HashMap;

/// For every voter, the groups it belongs to, in discovery order.
///
/// Voters that are not part of any group are absent: lookups for them fail with
/// [`Error::MissingMembership`] rather than returning an empty list, since scoring
/// divides by the number of groups a voter belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMembership {
    inner: HashMap<VoterId, Vec<GroupId>>,
}

impl GroupMembership {
    /// Index groups that are known to be free of duplicates, see [`Groups::deduplicated`].
    pub fn from_distinct_groups(groups: &Groups) -> Self {
        Self {
            inner: groups.iter().fold(
                HashMap::<VoterId, Vec<GroupId>>::new(),
                |mut acc, group| {
                    for member in &group.members {
                        acc.entry(member.clone()).or_default().push(group.id.clone());
                    }
                    acc
                },
            ),
        }
    }

    pub fn groups_of(&self, voter: &str) -> Result<&[GroupId], Error> {
        self.inner
            .get(voter)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::MissingMembership(voter.to_string()))
    }

    /// Number of groups `voter` belongs to, never zero.
    pub fn membership_count(&self, voter: &str) -> Result<usize, Error> {
        self.groups_of(voter).map(<[GroupId]>::len)
    }

    /// Whether the two voters have at least one group in common.
    pub fn common_group(&self, voter_a: &str, voter_b: &str) -> Result<bool, Error> {
        let a_groups = self.groups_of(voter_a)?;
        let b_groups = self.groups_of(voter_b)?;
        Ok(a_groups.iter().any(|group| b_groups.contains(group)))
    }

    pub fn voters(&self) -> impl Iterator<Item = &VoterId> {
        self.inner.keys()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// De-duplicate `groups` and index them by member.
pub fn build_memberships(groups: &Groups) -> GroupMembership {
    GroupMembership::from_distinct_groups(&groups.deduplicated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;
    use test_strategy::proptest;

    fn fixture() -> Groups {
        Groups::new([
            Group::new("red", ["alice", "bob"]),
            Group::new("blue", ["bob", "carol"]),
            Group::new("green", ["dave"]),
            Group::new("crimson", ["bob", "alice"]),
        ])
        .unwrap()
    }

    #[test]
    fn memberships_follow_discovery_order() {
        let memberships = build_memberships(&fixture());
        assert_eq!(memberships.len(), 4);
        assert_eq!(memberships.groups_of("bob").unwrap(), ["red", "blue"]);
        assert_eq!(memberships.groups_of("alice").unwrap(), ["red"]);
        assert_eq!(memberships.membership_count("dave").unwrap(), 1);
    }

    #[test]
    fn duplicated_groups_are_not_counted_twice() {
        let groups = fixture();
        let raw = GroupMembership::from_distinct_groups(&groups);
        assert_eq!(raw.membership_count("alice").unwrap(), 2);
        assert_eq!(build_memberships(&groups).membership_count("alice").unwrap(), 1);
    }

    #[test]
    fn common_group() {
        let memberships = build_memberships(&fixture());
        assert!(memberships.common_group("alice", "bob").unwrap());
        assert!(memberships.common_group("bob", "carol").unwrap());
        assert!(!memberships.common_group("alice", "carol").unwrap());
        assert!(!memberships.common_group("dave", "bob").unwrap());
        assert!(memberships.common_group("dave", "dave").unwrap());
    }

    #[test]
    fn unknown_voter() {
        let memberships = build_memberships(&fixture());
        assert_eq!(
            memberships.common_group("alice", "erin"),
            Err(Error::MissingMembership("erin".to_string()))
        );
        assert_eq!(
            memberships.groups_of("erin"),
            Err(Error::MissingMembership("erin".to_string()))
        );
    }

    #[test]
    fn empty_groups_add_no_voter() {
        let groups = Groups::new([Group::new("empty", Vec::<String>::new())]).unwrap();
        assert!(build_memberships(&groups).is_empty());
    }

    #[proptest]
    fn every_member_is_indexed(groups: Groups) {
        let memberships = build_memberships(&groups);
        assert_eq!(memberships.len(), groups.voters().len());
        for voter in groups.voters() {
            assert!(memberships.membership_count(voter).unwrap() >= 1);
        }
    }
}
