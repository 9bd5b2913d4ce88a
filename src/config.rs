use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::graph::GroupingOptions;

/// Default config file looked up in the current directory
const DEFAULT_CONFIG_FILE: &str = "lineage.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lineage: LineageConfig,
    #[serde(default)]
    pub grouping: GroupingOptions,
}

/// Input/output locations and logging
#[derive(Debug, Clone, Deserialize)]
pub struct LineageConfig {
    #[serde(default = "default_nodes_path")]
    pub nodes_path: PathBuf,
    #[serde(default = "default_edges_path")]
    pub edges_path: PathBuf,
    /// Where to write groups; stdout when unset.
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LineageConfig {
    fn default() -> Self {
        Self {
            nodes_path: default_nodes_path(),
            edges_path: default_edges_path(),
            output_path: None,
            log_level: default_log_level(),
        }
    }
}

fn default_nodes_path() -> PathBuf {
    PathBuf::from("nodes.json")
}

fn default_edges_path() -> PathBuf {
    PathBuf::from("edges.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration
    ///
    /// Loads environment variables from .env file (if present) first.
    /// Looks for the config file in this order:
    /// 1. Path specified in LINEAGE_CONFIG environment variable
    /// 2. ./lineage.toml in current directory, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        // .env is optional
        let _ = dotenv::dotenv();

        match std::env::var("LINEAGE_CONFIG") {
            Ok(path) => Self::from_path(Path::new(&path)),
            Err(_) => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_path(default_path)
                } else {
                    log::debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from an explicit file. A missing file is an error.
    pub fn from_path(config_path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.grouping.naming.id_prefix.trim().is_empty() {
            anyhow::bail!("grouping.id_prefix must not be empty");
        }

        if self.grouping.naming.label_prefix.trim().is_empty() {
            anyhow::bail!("grouping.label_prefix must not be empty");
        }

        if !matches!(
            self.lineage.log_level.to_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            anyhow::bail!(
                "lineage.log_level must be one of error, warn, info, debug, trace (got {})",
                self.lineage.log_level
            );
        }

        Ok(())
    }

    /// Get nodes file path
    pub fn nodes_path(&self) -> &Path {
        &self.lineage.nodes_path
    }

    /// Get edges file path
    pub fn edges_path(&self) -> &Path {
        &self.lineage.edges_path
    }

    /// Get output file path, if any
    pub fn output_path(&self) -> Option<&Path> {
        self.lineage.output_path.as_deref()
    }
}
