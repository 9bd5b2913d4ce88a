//! File-backed data source and sink for lineage grouping.
//!
//! Node and edge lists are read from JSON or YAML arrays; groups are written
//! back out in whichever format the output path's extension names.

pub mod formats;

pub use formats::{Format, FormatRegistry};

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::{LineageError, Result};
use crate::graph::{Edge, Group, Node};

/// Load the node list from `path`.
pub fn load_nodes(path: &Path) -> Result<Vec<Node>> {
    let nodes: Vec<Node> = load_records(path)?;
    log::info!("Loaded {} nodes from {}", nodes.len(), path.display());
    Ok(nodes)
}

/// Load the edge list from `path`.
pub fn load_edges(path: &Path) -> Result<Vec<Edge>> {
    let edges: Vec<Edge> = load_records(path)?;
    log::info!("Loaded {} edges from {}", edges.len(), path.display());
    Ok(edges)
}

/// Write `groups` to `path`, formatted by its extension.
pub fn write_groups(path: &Path, groups: &[Group]) -> Result<()> {
    let rendered = groups_to_string(groups, &extension_of(path))?;
    std::fs::write(path, rendered)?;
    log::info!("Wrote {} groups to {}", groups.len(), path.display());
    Ok(())
}

/// Render `groups` in the format registered for `extension`.
pub fn groups_to_string(groups: &[Group], extension: &str) -> Result<String> {
    let registry = FormatRegistry::new();
    let format = registry.require_format(extension)?;
    format.render(&serde_json::to_value(groups)?)
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let registry = FormatRegistry::new();
    let format = registry.require_format(&extension_of(path))?;

    let content = std::fs::read_to_string(path)?;
    let value = format.parse(&content, &path.display().to_string())?;
    if !matches!(value, JsonValue::Array(_)) {
        return Err(LineageError::InvalidInput(format!(
            "{} must contain a top-level list of records",
            path.display()
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| LineageError::Parse(format!("Invalid record in {}: {}", path.display(), e)))
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_nodes_json_keeps_attributes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nodes.json");
        fs::write(&path, r#"[{"id": "A", "name": "Ada"}, {"id": 2}]"#).unwrap();

        let nodes = load_nodes(&path).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].id, "A");
        assert_eq!(nodes[0].attributes["name"], "Ada");
        assert_eq!(nodes[1].id, "2");
    }

    #[test]
    fn test_load_edges_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edges.yml");
        fs::write(&path, "- source: A\n  target: B\n- source: B\n  target: C\n").unwrap();

        let edges = load_edges(&path).unwrap();
        assert_eq!(edges, vec![Edge::new("A", "B"), Edge::new("B", "C")]);
    }

    #[test]
    fn test_load_rejects_non_list_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nodes.json");
        fs::write(&path, r#"{"id": "A"}"#).unwrap();

        let err = load_nodes(&path).unwrap_err();
        assert!(matches!(err, LineageError::InvalidInput(_)));
    }

    #[test]
    fn test_load_rejects_record_without_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nodes.json");
        fs::write(&path, r#"[{"name": "anonymous"}]"#).unwrap();

        let err = load_nodes(&path).unwrap_err();
        assert!(matches!(err, LineageError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_edges(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LineageError::Io(_)));
    }

    #[test]
    fn test_load_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nodes.csv");
        fs::write(&path, "id\nA\n").unwrap();
        assert!(matches!(load_nodes(&path), Err(LineageError::Parse(_))));
    }

    #[test]
    fn test_write_groups_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups.json");
        let groups = vec![Group {
            id: "Group1".to_string(),
            nodes: vec!["A".to_string(), "B".to_string()],
            label: "Family Lineage 1".to_string(),
        }];

        write_groups(&path, &groups).unwrap();
        let written: Vec<Group> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, groups);
    }

    #[test]
    fn test_groups_to_string_yaml() {
        let groups = vec![Group {
            id: "Group1".to_string(),
            nodes: vec!["A".to_string()],
            label: "Family Lineage 1".to_string(),
        }];
        let text = groups_to_string(&groups, "yaml").unwrap();
        assert!(text.contains("id: Group1"));
        assert!(text.contains("label: Family Lineage 1"));
    }
}
