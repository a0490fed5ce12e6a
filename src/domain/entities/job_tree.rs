//! Job call tree
//!
//! A `JobTree` is the root job plus an ordered `ChildMap` of the jobs it
//! calls, each carrying its own `ChildMap`. The tree is acyclic by
//! construction: the graph builder never expands a name twice.

use std::collections::{BTreeSet, HashSet};

use crate::domain::value_objects::JobName;

/// Names already expanded during one traversal
pub type VisitedSet = HashSet<JobName>;

/// Every job name appearing in a tree, root included
pub type ReachableSet = BTreeSet<JobName>;

/// Ordered mapping of referenced job → its own references.
///
/// Entries keep the order in which names were first inserted. Inserting a
/// name that is already present leaves the existing entry untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildMap {
    entries: Vec<(JobName, ChildMap)>,
}

impl ChildMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` unless it is already an entry. Returns true if inserted.
    pub fn insert(&mut self, name: JobName, children: ChildMap) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, children));
        true
    }

    pub fn contains(&self, name: &JobName) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn get(&self, name: &str) -> Option<&ChildMap> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, c)| c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&JobName, &ChildMap)> {
        self.entries.iter().map(|(n, c)| (n, c))
    }

    /// Names of the direct entries, in order
    pub fn names(&self) -> impl Iterator<Item = &JobName> {
        self.entries.iter().map(|(n, _)| n)
    }

    /// Union of the keys at every level below this map.
    pub fn flatten(&self) -> ReachableSet {
        let mut names = ReachableSet::new();
        self.collect_into(&mut names);
        names
    }

    fn collect_into(&self, names: &mut ReachableSet) {
        for (name, children) in &self.entries {
            names.insert(name.clone());
            children.collect_into(names);
        }
    }

    /// Number of nodes below this map (repeated names counted each time)
    pub fn node_count(&self) -> usize {
        self.entries.iter().map(|(_, c)| 1 + c.node_count()).sum()
    }

    /// Length of the longest chain below this map
    pub fn depth(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, c)| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }
}

/// Rooted job call tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTree {
    root: JobName,
    children: ChildMap,
}

impl JobTree {
    pub fn new(root: JobName, children: ChildMap) -> Self {
        Self { root, children }
    }

    pub fn root(&self) -> &JobName {
        &self.root
    }

    pub fn children(&self) -> &ChildMap {
        &self.children
    }

    /// All job names in the tree, root included. This is the keep-list.
    pub fn reachable(&self) -> ReachableSet {
        let mut names = self.children.flatten();
        names.insert(self.root.clone());
        names
    }
}
