// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display node contract.
//!
//! A *display node* is the external retained render target representing one
//! entity on screen (a DOM element on the web). The engine writes style
//! properties, the class list and the id; it never needs to read style back
//! during a draw, since the [`StyleCache`](crate::style::StyleCache) tracks
//! what was written.
//!
//! [`MemoryNode`] is an in-memory implementation that records every write.
//! It serves as the headless backend and as the test double.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A retained render target that receives style, class and id writes.
///
/// Property names are always passed in CSS (hyphenated) notation.
pub trait DisplayNode {
    /// Whether the node is currently parented into the visible tree.
    fn is_attached(&self) -> bool;

    /// Writes one style property.
    fn set_style(&mut self, property: &str, value: &str);

    /// Reads one style property, or `None` if unset or unavailable.
    fn style(&self, property: &str) -> Option<String>;

    /// Overwrites the node's class list with a space-separated tag string.
    fn set_class_name(&mut self, classes: &str);

    /// Sets the node's identifier.
    fn set_id(&mut self, id: &str);

    /// Returns the node's identifier.
    fn id(&self) -> String;

    /// Removes the node from its parent. Does nothing if already detached.
    fn detach(&mut self);
}

/// A [`DisplayNode`] that keeps its state in memory and logs every style
/// write.
#[derive(Clone, Debug, Default)]
pub struct MemoryNode {
    styles: BTreeMap<String, String>,
    class_name: String,
    id: String,
    attached: bool,
    writes: Vec<(String, String)>,
}

impl MemoryNode {
    /// Creates an attached node with no styles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attached: true,
            ..Self::default()
        }
    }

    /// Creates a node that is not parented anywhere.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Re-parents the node.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Returns every `(property, value)` style write in order.
    #[must_use]
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    /// Returns whether `property` was written since the log was last cleared.
    #[must_use]
    pub fn was_written(&self, property: &str) -> bool {
        self.writes.iter().any(|(p, _)| p == property)
    }

    /// Clears the write log, keeping the current styles.
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    /// Returns the current class list string.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the class list as individual tags.
    pub fn classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.class_name.split_whitespace()
    }
}

impl DisplayNode for MemoryNode {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
        self.writes.push((property.to_string(), value.to_string()));
    }

    fn style(&self, property: &str) -> Option<String> {
        self.styles.get(property).cloned()
    }

    fn set_class_name(&mut self, classes: &str) {
        self.class_name = classes.to_string();
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn detach(&mut self) {
        self.attached = false;
    }
}
