pub mod config;
pub mod error;
pub mod dataset;
pub mod graph;

pub use config::Config;
pub use error::{EdgeEndpoint, LineageError, Result};
pub use graph::{
    construct_groups, construct_groups_with, partition_lineages, AdjacencyMap, DanglingTargetPolicy, Edge,
    Group, GroupNaming, GroupingOptions, LineageSummary, Node,
};
