use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output envelope of a successful generation call.
///
/// `files` maps relative paths to UTF-8 file contents; the caller owns
/// persistence. A failed call returns an error instead of this envelope,
/// so a partial file map can never be observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerationResult {
    pub files: IndexMap<String, String>,

    pub dependencies: Vec<String>,

    #[serde(default)]
    pub metadata: IndexMap<String, Value>,
}

impl GenerationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn add_dependency(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.dependencies.contains(&name) {
            self.dependencies.push(name);
        }
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: Value) {
        self.metadata.insert(key.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependencies_deduplicated() {
        let mut result = GenerationResult::new();
        result.add_dependency("react");
        result.add_dependency("react-dom");
        result.add_dependency("react");
        assert_eq!(result.dependencies, vec!["react", "react-dom"]);
    }

    #[test]
    fn test_file_order_preserved() {
        let mut result = GenerationResult::new();
        result.add_file("b.ts", "");
        result.add_file("a.ts", "");
        let paths: Vec<_> = result.files.keys().collect();
        assert_eq!(paths, vec!["b.ts", "a.ts"]);
    }
}
