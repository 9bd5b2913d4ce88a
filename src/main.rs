use anyhow::{Context, Result};
use clap::Parser;
use lineagegroups::dataset::{groups_to_string, load_edges, load_nodes, write_groups};
use lineagegroups::{construct_groups_with, Config, DanglingTargetPolicy, LineageSummary};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lineage-groups")]
#[command(about = "Partition a node/edge graph into disjoint family lineage groups")]
struct Args {
    /// Nodes file (.json, .yaml, .yml); overrides lineage.nodes_path
    #[arg(short, long)]
    nodes: Option<PathBuf>,

    /// Edges file (.json, .yaml, .yml); overrides lineage.edges_path
    #[arg(short, long)]
    edges: Option<PathBuf>,

    /// Write groups here instead of stdout; overrides lineage.output_path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (default: $LINEAGE_CONFIG or ./lineage.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What to do with edges pointing at unknown nodes: reject or leaf
    #[arg(long)]
    dangling_targets: Option<DanglingTargetPolicy>,

    /// Log a summary of the resulting groups
    #[arg(short, long)]
    summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load()?,
    };

    // Logs go to stderr so stdout stays clean for the groups document
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", config.lineage.log_level.as_str())
    ).init();

    if let Some(nodes) = args.nodes {
        config.lineage.nodes_path = nodes;
    }
    if let Some(edges) = args.edges {
        config.lineage.edges_path = edges;
    }
    if let Some(output) = args.output {
        config.lineage.output_path = Some(output);
    }
    if let Some(policy) = args.dangling_targets {
        config.grouping.dangling_targets = policy;
    }

    let nodes = load_nodes(config.nodes_path())
        .with_context(|| format!("Failed to load nodes from {}", config.nodes_path().display()))?;
    let edges = load_edges(config.edges_path())
        .with_context(|| format!("Failed to load edges from {}", config.edges_path().display()))?;

    let groups = construct_groups_with(&nodes, &edges, &config.grouping)
        .context("Failed to construct lineage groups")?;

    if args.summary {
        let summary = LineageSummary::from_groups(&groups);
        log::info!(
            "{} groups over {} nodes (largest {}, singletons {})",
            summary.groups,
            summary.nodes,
            summary.largest_group,
            summary.singletons
        );
    }

    match config.output_path() {
        Some(path) => write_groups(path, &groups)
            .with_context(|| format!("Failed to write groups to {}", path.display()))?,
        None => println!("{}", groups_to_string(&groups, "json")?),
    }

    Ok(())
}
