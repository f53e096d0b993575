// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability sets mirrored onto a node's class list.
//!
//! Every add or remove rebuilds the full tag string from the current set and
//! overwrites the node's class attribute. There is no diff against the
//! previous string; tag counts are small and the path is infrequent.
//!
//! Class synchronization is structural, so it runs immediately on the
//! add/remove event rather than waiting for the next render pass.

use alloc::collections::BTreeSet;
use alloc::collections::btree_set;
use alloc::string::{String, ToString};

use crate::node::DisplayNode;

/// The set of capability tags attached to an entity.
///
/// Iteration is in sorted order, so the class string produced for a given set
/// is always the same.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    tags: BTreeSet<String>,
}

impl CapabilitySet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag. Returns `false` if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        self.tags.insert(name.to_string())
    }

    /// Removes a tag. Returns `false` if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.tags.remove(name)
    }

    /// Returns whether the tag is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains(name)
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the set has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates over the tags in sorted order.
    pub fn iter(&self) -> CapabilityIter<'_> {
        CapabilityIter {
            inner: self.tags.iter(),
        }
    }
}

impl<'a> FromIterator<&'a str> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(ToString::to_string).collect(),
        }
    }
}

/// Iterator over the tags of a [`CapabilitySet`].
#[derive(Clone, Debug)]
pub struct CapabilityIter<'a> {
    inner: btree_set::Iter<'a, String>,
}

impl<'a> Iterator for CapabilityIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(String::as_str)
    }
}

/// Builds the space-separated class string for `set`, leaving out
/// `excluding` if given.
#[must_use]
pub fn class_string(set: &CapabilitySet, excluding: Option<&str>) -> String {
    let mut out = String::new();
    for tag in set.iter().filter(|t| Some(*t) != excluding) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(tag);
    }
    out
}

/// Rewrites the node's class list after `name` was added to `set`.
pub fn on_capability_added<N: DisplayNode + ?Sized>(
    node: &mut N,
    set: &CapabilitySet,
    name: &str,
) {
    debug_assert!(set.contains(name), "added capability {name:?} missing from set");
    node.set_class_name(&class_string(set, None));
}

/// Rewrites the node's class list after `name` was removed.
///
/// `name` is left out even if the set still contains it, since removal
/// notifications may arrive before the set itself is updated.
pub fn on_capability_removed<N: DisplayNode + ?Sized>(
    node: &mut N,
    set: &CapabilitySet,
    name: &str,
) {
    node.set_class_name(&class_string(set, Some(name)));
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::node::MemoryNode;

    fn tags(node: &MemoryNode) -> BTreeSet<&str> {
        node.classes().collect()
    }

    #[test]
    fn add_then_remove_keeps_node_in_sync() {
        let mut node = MemoryNode::new();
        let mut set: CapabilitySet = ["A", "B"].into_iter().collect();

        set.insert("C");
        on_capability_added(&mut node, &set, "C");
        assert_eq!(tags(&node), BTreeSet::from(["A", "B", "C"]));

        set.remove("B");
        on_capability_removed(&mut node, &set, "B");
        assert_eq!(tags(&node), BTreeSet::from(["A", "C"]));
    }

    #[test]
    fn removal_excludes_tag_still_in_set() {
        let mut node = MemoryNode::new();
        let set: CapabilitySet = ["A", "B"].into_iter().collect();
        on_capability_removed(&mut node, &set, "B");
        assert_eq!(node.class_name(), "A");
    }

    #[test]
    fn class_string_is_deterministic() {
        let a: CapabilitySet = ["DOM", "2D", "Color"].into_iter().collect();
        let b: CapabilitySet = ["Color", "DOM", "2D"].into_iter().collect();
        assert_eq!(class_string(&a, None), class_string(&b, None));
    }

    #[test]
    fn empty_set_clears_class_list() {
        let mut node = MemoryNode::new();
        node.set_class_name("stale");
        let set = CapabilitySet::new();
        on_capability_removed(&mut node, &set, "stale");
        assert_eq!(node.class_name(), "");
    }

    #[test]
    fn insert_and_remove_report_membership_changes() {
        let mut set = CapabilitySet::new();
        assert!(set.insert("A"));
        assert!(!set.insert("A"), "second insert is a no-op");
        assert_eq!(set.iter().collect::<Vec<_>>(), ["A"]);
        assert!(set.remove("A"));
        assert!(!set.remove("A"));
        assert!(set.is_empty());
    }
}
