#[cfg(any(test, feature = "proptest"))]
mod arbitrary;
mod membership;

use itertools::Itertools;
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

pub use membership::{build_memberships, GroupMembership};

pub type VoterId = String;
pub type GroupId = String;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("voter {0} does not belong to any group")]
    MissingMembership(VoterId),
    #[error("group {0} is defined more than once")]
    DuplicateGroupId(GroupId),
}

/// A set of voters sharing an organization, an affiliation or a category.
///
/// Members are stored as a set, listing the same voter twice has no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub members: BTreeSet<VoterId>,
}

impl Group {
    pub fn new<I, V>(id: impl Into<GroupId>, members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VoterId>,
    {
        Self {
            id: id.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, voter: &str) -> bool {
        self.members.contains(voter)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Groups are considered the same when they have the same members, whatever their id.
    pub fn same_members(&self, other: &Group) -> bool {
        self.members == other.members
    }
}

/// All the groups taking part in an election, in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups(Vec<Group>);

impl Groups {
    pub fn new(groups: impl IntoIterator<Item = Group>) -> Result<Self, Error> {
        let mut ids = HashSet::new();
        groups
            .into_iter()
            .map(|group| {
                if ids.insert(group.id.clone()) {
                    Ok(group)
                } else {
                    Err(Error::DuplicateGroupId(group.id))
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Groups described as lists of voter indexes.
    ///
    /// The i-th group gets id `i` and every voter index is used as the voter id,
    /// both in decimal notation.
    pub fn from_indexed<G: AsRef<[usize]>>(groups: &[G]) -> Self {
        Self(
            groups
                .iter()
                .enumerate()
                .map(|(i, members)| {
                    Group::new(i.to_string(), members.as_ref().iter().map(usize::to_string))
                })
                .collect(),
        )
    }

    /// Collapses groups with identical member sets into one, keeping the first seen.
    pub fn deduplicated(&self) -> Self {
        Self(
            self.0
                .iter()
                .unique_by(|group| &group.members)
                .cloned()
                .collect(),
        )
    }

    pub fn get(&self, id: &str) -> Option<&Group> {
        self.0.iter().find(|group| group.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every voter appearing in at least one group.
    pub fn voters(&self) -> BTreeSet<&VoterId> {
        self.0.iter().flat_map(|group| group.members.iter()).collect()
    }
}

impl<'a> IntoIterator for &'a Groups {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Groups {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for group in &self.0 {
            map.serialize_entry(&group.id, &group.members)?;
        }
        map.end()
    }
}

mod deser {
    use super::*;
    use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
    use std::fmt;

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum VoterKey {
        Index(u64),
        Id(VoterId),
    }

    impl From<VoterKey> for VoterId {
        fn from(key: VoterKey) -> Self {
            match key {
                VoterKey::Index(i) => i.to_string(),
                VoterKey::Id(id) => id,
            }
        }
    }

    struct GroupsVisitor;

    impl<'de> Visitor<'de> for GroupsVisitor {
        type Value = Groups;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map from group id to voters, or a list of voter lists")
        }

        // `{"red": ["alice", "bob"], "blue": ["carol"]}`
        // Entries are read in document order so that de-duplication keeps the first one.
        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((id, members)) = map.next_entry::<GroupId, Vec<VoterKey>>()? {
                groups.push(Group::new(id, members));
            }
            Groups::new(groups).map_err(de::Error::custom)
        }

        // `[[0], [1, 2]]`, group ids are the positions in the list
        fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
        where
            V: SeqAccess<'de>,
        {
            let mut groups = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(members) = seq.next_element::<Vec<VoterKey>>()? {
                groups.push(Group::new(groups.len().to_string(), members));
            }
            Ok(Groups(groups))
        }
    }

    impl<'de> Deserialize<'de> for Groups {
        fn deserialize<D>(deserializer: D) -> Result<Groups, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(GroupsVisitor)
        }
    }
}
