use blueprint_schema::{Framework, GeneratorConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "blueprint.config.json";

/// Blueprint configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source directory containing definition files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Output directory for generated code
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Target framework
    #[serde(default = "default_framework")]
    pub framework: Framework,

    /// Generator options
    #[serde(default)]
    pub generator: GeneratorConfig,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_framework() -> Framework {
    Framework::React
}

impl Config {
    /// Load config from a directory, falling back to defaults if absent
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            framework: default_framework(),
            generator: GeneratorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "srcDir": "components",
            "outDir": "generated",
            "framework": "vue",
            "generator": { "typescript": false, "routing": true }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.src_dir, "components");
        assert_eq!(config.out_dir, "generated");
        assert_eq!(config.framework, Framework::Vue);
        assert!(!config.generator.typescript);
        assert!(config.generator.routing);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.src_dir, "src");
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.framework, Framework::React);
        assert!(config.generator.typescript);
    }
}
