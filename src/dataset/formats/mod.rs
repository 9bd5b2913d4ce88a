pub mod json;
pub mod yaml;

use serde_json::Value as JsonValue;

use crate::error::{LineageError, Result};

/// Trait for on-disk record formats
pub trait Format {
    /// Check if this format handles the given file extension
    fn can_parse(&self, extension: &str) -> bool;

    /// Parse a document into a generic value tree
    fn parse(&self, content: &str, path: &str) -> Result<JsonValue>;

    /// Render a value tree back to text
    fn render(&self, value: &JsonValue) -> Result<String>;
}

/// Format registry that selects the appropriate format by extension
pub struct FormatRegistry {
    formats: Vec<Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new registry with all built-in formats
    pub fn new() -> Self {
        let mut registry = Self {
            formats: Vec::new(),
        };

        registry.register(Box::new(json::JsonFormat));
        registry.register(Box::new(yaml::YamlFormat));

        registry
    }

    /// Register a format
    pub fn register(&mut self, format: Box<dyn Format>) {
        self.formats.push(format);
    }

    /// Find a format that can handle the given extension
    pub fn find_format(&self, extension: &str) -> Option<&dyn Format> {
        let extension = extension.to_lowercase();
        self.formats
            .iter()
            .find(|f| f.can_parse(&extension))
            .map(|f| f.as_ref())
    }

    /// Like [`find_format`](Self::find_format), but unknown extensions are an error.
    pub fn require_format(&self, extension: &str) -> Result<&dyn Format> {
        self.find_format(extension).ok_or_else(|| {
            LineageError::Parse(format!("No format found for extension: {}", extension))
        })
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_registry() {
        let registry = FormatRegistry::new();

        assert!(registry.find_format("json").is_some());
        assert!(registry.find_format("JSON").is_some());
        assert!(registry.find_format("yaml").is_some());
        assert!(registry.find_format("yml").is_some());
        assert!(registry.find_format("csv").is_none());
    }

    #[test]
    fn test_require_format_unknown_extension() {
        let registry = FormatRegistry::new();
        let err = registry.require_format("csv").err().unwrap();
        assert!(matches!(err, LineageError::Parse(_)));
        assert!(err.to_string().contains("csv"));
    }
}
