//! Depth-first lineage partitioning over an [`AdjacencyMap`].

use std::collections::HashSet;
use std::slice::Iter;

use serde::Serialize;

use super::{AdjacencyMap, Group, GroupNaming, Node};

/// Per-call traversal state. The visited set only grows.
struct Traversal<'a> {
    adjacency: &'a AdjacencyMap,
    visited: HashSet<&'a str>,
    /// One successor iterator per open node on the current path.
    stack: Vec<Iter<'a, String>>,
}

impl<'a> Traversal<'a> {
    fn new(adjacency: &'a AdjacencyMap) -> Self {
        Self {
            adjacency,
            visited: HashSet::with_capacity(adjacency.len()),
            stack: Vec::new(),
        }
    }

    /// Pre-order walk from `root`, returning every newly visited id reachable from it.
    ///
    /// Equivalent to the recursive "mark, append, then recurse into each unvisited
    /// successor in edge order" walk, with the call stack replaced by `self.stack`.
    fn collect_lineage(&mut self, root: &'a str) -> Vec<String> {
        let mut lineage = Vec::new();
        if !self.visited.insert(root) {
            return lineage;
        }
        lineage.push(root.to_string());
        self.stack.push(self.adjacency.successors(root).iter());

        while let Some(frame) = self.stack.last_mut() {
            match frame.next() {
                Some(child) => {
                    if self.visited.insert(child.as_str()) {
                        lineage.push(child.clone());
                        self.stack.push(self.adjacency.successors(child).iter());
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        lineage
    }
}

/// Split `nodes` into disjoint lineages, one per root found while scanning in input order.
///
/// Groups are numbered from 1 in the order their roots are encountered.
pub fn partition_lineages(nodes: &[Node], adjacency: &AdjacencyMap, naming: &GroupNaming) -> Vec<Group> {
    let mut traversal = Traversal::new(adjacency);
    let mut groups = Vec::new();

    for node in nodes {
        let lineage = traversal.collect_lineage(&node.id);
        if lineage.is_empty() {
            continue;
        }

        let n = groups.len() + 1;
        log::debug!("Lineage {} rooted at {}: {:?}", n, node.id, lineage);
        groups.push(Group {
            id: naming.group_id(n),
            nodes: lineage,
            label: naming.label(n),
        });
    }

    groups
}

/// Shape of a grouping result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineageSummary {
    pub groups: usize,
    pub nodes: usize,
    pub largest_group: usize,
    pub singletons: usize,
}

impl LineageSummary {
    pub fn from_groups(groups: &[Group]) -> Self {
        let sizes = groups.iter().map(|g| g.nodes.len());
        Self {
            groups: groups.len(),
            nodes: sizes.clone().sum(),
            largest_group: sizes.clone().max().unwrap_or(0),
            singletons: sizes.filter(|&len| len == 1).count(),
        }
    }
}
