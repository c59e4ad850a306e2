use std::collections::BTreeSet;
use std::fmt;

use crate::errors::GroupListError;
use crate::fields::{Group, ValidatedField};

/// The groups a student belongs to.
///
/// Membership is a set: order is irrelevant and two groups whose names differ only in case
/// count as the same group. The list is assembled while unfrozen and frozen before it is
/// attached to a record; a frozen list refuses further additions.
#[derive(Debug, Clone, Default)]
pub struct GroupList {
    groups: BTreeSet<Group>,
    frozen: bool,
}

impl GroupList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `group` unless an equal name (ignoring case) is already present.
    ///
    /// Returns whether the group was inserted.
    pub fn add(&mut self, group: Group) -> Result<bool, GroupListError> {
        if self.frozen {
            return Err(GroupListError::Frozen);
        }
        if self.contains_ignore_case(group.as_str()) {
            return Ok(false);
        }
        Ok(self.groups.insert(group))
    }

    pub fn add_all(&mut self, other: &GroupList) -> Result<(), GroupListError> {
        if self.frozen {
            return Err(GroupListError::Frozen);
        }
        for group in other {
            self.add(group.clone())?;
        }
        Ok(())
    }

    /// Marks the list unmodifiable and hands it back.
    pub fn freeze(mut self) -> Self {
        self.frozen = true;
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn contains_ignore_case(&self, name: &str) -> bool {
        self.groups.iter().any(|existing| existing.as_str().eq_ignore_ascii_case(name))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }
}

impl PartialEq for GroupList {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl Eq for GroupList {}

impl<'a> IntoIterator for &'a GroupList {
    type Item = &'a Group;
    type IntoIter = std::collections::btree_set::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl fmt::Display for GroupList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.groups.iter().map(Group::as_str).collect();
        f.write_str(&names.join(", "))
    }
}
