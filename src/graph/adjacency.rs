//! Adjacency map construction from a flat edge list.

use std::collections::HashMap;

use super::{DanglingTargetPolicy, Edge, Node};
use crate::error::{EdgeEndpoint, LineageError, Result};

/// Node id -> ordered direct successors, kept in node-list order.
///
/// Every node id has exactly one entry; keys never come from edges. Duplicate
/// edges are kept as-is.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl AdjacencyMap {
    /// Seed one empty entry per node, then attach every edge target to its source.
    ///
    /// Fails on a repeated node id, on an edge whose source is not a node, and
    /// (under [`DanglingTargetPolicy::Reject`]) on an edge whose target is not a node.
    pub fn build(nodes: &[Node], edges: &[Edge], dangling: DanglingTargetPolicy) -> Result<Self> {
        let mut entries = Vec::with_capacity(nodes.len());
        let mut index = HashMap::with_capacity(nodes.len());

        for node in nodes {
            if index.insert(node.id.clone(), entries.len()).is_some() {
                return Err(LineageError::DuplicateNodeId(node.id.clone()));
            }
            entries.push((node.id.clone(), Vec::new()));
        }
        log::debug!("Adjacency initialized with {} nodes", entries.len());

        for edge in edges {
            let slot = *index.get(&edge.source).ok_or_else(|| LineageError::MissingNode {
                endpoint: EdgeEndpoint::Source,
                from: edge.source.clone(),
                to: edge.target.clone(),
            })?;

            if !index.contains_key(&edge.target) {
                match dangling {
                    DanglingTargetPolicy::Reject => {
                        return Err(LineageError::MissingNode {
                            endpoint: EdgeEndpoint::Target,
                            from: edge.source.clone(),
                            to: edge.target.clone(),
                        });
                    }
                    DanglingTargetPolicy::Leaf => {
                        log::debug!(
                            "Keeping dangling target {} of {} as a leaf",
                            edge.target,
                            edge.source
                        );
                    }
                }
            }

            entries[slot].1.push(edge.target.clone());
        }
        log::debug!("Adjacency attached {} edges", edges.len());

        Ok(Self { entries, index })
    }

    /// Direct successors of `id`, in edge order. Unknown ids have none.
    pub fn successors(&self, id: &str) -> &[String] {
        match self.index.get(id) {
            Some(&slot) => self.entries[slot].1.as_slice(),
            None => &[],
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Node ids in input order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of attached edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, targets)| targets.len()).sum()
    }
}
