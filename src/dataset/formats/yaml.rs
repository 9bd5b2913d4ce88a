use super::Format;
use crate::error::{LineageError, Result};
use serde_json::Value as JsonValue;

/// YAML records, for hand-maintained family trees
pub struct YamlFormat;

impl Format for YamlFormat {
    fn can_parse(&self, extension: &str) -> bool {
        matches!(extension, "yaml" | "yml")
    }

    fn parse(&self, content: &str, path: &str) -> Result<JsonValue> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| LineageError::Parse(format!("YAML parse error in {}: {}", path, e)))
    }

    fn render(&self, value: &JsonValue) -> Result<String> {
        Ok(serde_yaml_ng::to_string(value)?)
    }
}
