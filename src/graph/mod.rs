//! Lineage grouping: adjacency construction and depth-first partitioning.
//!
//! Builds an ordered adjacency map from a flat edge list, then walks it from
//! every not-yet-visited node (in input order) to split the graph into
//! disjoint lineage groups.

mod adjacency;
mod partition;

pub use adjacency::AdjacencyMap;
pub use partition::{partition_lineages, LineageSummary};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::Result;

/// A graph node. Only `id` is interpreted; everything else rides along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Remaining fields of the input record, e.g. `name` or `born`.
    #[serde(flatten)]
    pub attributes: Map<String, JsonValue>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }
}

/// A directed edge `source -> target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(deserialize_with = "deserialize_id")]
    pub source: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// One lineage: every node reachable from a root, in first-visit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub nodes: Vec<String>,
    pub label: String,
}

/// How to treat an edge whose `target` is not a known node id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingTargetPolicy {
    /// Fail with `LineageError::MissingNode`.
    #[default]
    Reject,
    /// Keep the target as a leaf reference inside whichever group reaches it first.
    Leaf,
}

impl std::str::FromStr for DanglingTargetPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(DanglingTargetPolicy::Reject),
            "leaf" => Ok(DanglingTargetPolicy::Leaf),
            other => Err(format!("unknown dangling target policy: {} (expected reject or leaf)", other)),
        }
    }
}

/// Prefixes used to number groups: `{id_prefix}{n}` and `{label_prefix} {n}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupNaming {
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,
}

fn default_id_prefix() -> String {
    "Group".to_string()
}

fn default_label_prefix() -> String {
    "Family Lineage".to_string()
}

impl Default for GroupNaming {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            label_prefix: default_label_prefix(),
        }
    }
}

impl GroupNaming {
    pub(crate) fn group_id(&self, n: usize) -> String {
        format!("{}{}", self.id_prefix, n)
    }

    pub(crate) fn label(&self, n: usize) -> String {
        format!("{} {}", self.label_prefix, n)
    }
}

/// Knobs for a grouping run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GroupingOptions {
    #[serde(default)]
    pub dangling_targets: DanglingTargetPolicy,
    #[serde(flatten)]
    pub naming: GroupNaming,
}

/// Group `nodes` into lineages using the default options.
pub fn construct_groups(nodes: &[Node], edges: &[Edge]) -> Result<Vec<Group>> {
    construct_groups_with(nodes, edges, &GroupingOptions::default())
}

/// Group `nodes` into lineages: build the adjacency map, then partition it.
pub fn construct_groups_with(
    nodes: &[Node],
    edges: &[Edge],
    options: &GroupingOptions,
) -> Result<Vec<Group>> {
    let adjacency = AdjacencyMap::build(nodes, edges, options.dangling_targets)?;
    let groups = partition_lineages(nodes, &adjacency, &options.naming);
    log::debug!(
        "Grouped {} nodes and {} edges into {} lineages",
        nodes.len(),
        edges.len(),
        groups.len()
    );
    Ok(groups)
}

/// Accept string or numeric ids; numbers are normalized to their decimal text.
fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) => Ok(s),
        JsonValue::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "node id must be a string or number, got {}",
            other
        ))),
    }
}
