use super::Format;
use crate::error::{LineageError, Result};
use serde_json::Value as JsonValue;

/// JSON records, the native exchange format for nodes, edges and groups
pub struct JsonFormat;

impl Format for JsonFormat {
    fn can_parse(&self, extension: &str) -> bool {
        extension == "json"
    }

    fn parse(&self, content: &str, path: &str) -> Result<JsonValue> {
        serde_json::from_str(content)
            .map_err(|e| LineageError::Parse(format!("JSON parse error in {}: {}", path, e)))
    }

    fn render(&self, value: &JsonValue) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_format_can_parse() {
        let format = JsonFormat;
        assert!(format.can_parse("json"));
        assert!(!format.can_parse("yaml"));
    }

    #[test]
    fn test_json_format_parse_error_names_path() {
        let err = JsonFormat.parse("[{\"id\": ", "nodes.json").unwrap_err();
        assert!(matches!(err, LineageError::Parse(_)));
        assert!(err.to_string().contains("nodes.json"));
    }

    #[test]
    fn test_json_format_render_pretty() {
        let value = serde_json::json!([{"id": "Group1"}]);
        let text = JsonFormat.render(&value).unwrap();
        assert!(text.contains('\n'));
        assert_eq!(JsonFormat.parse(&text, "out.json").unwrap(), value);
    }
}
