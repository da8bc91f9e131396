use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The frameworks this workspace can generate code for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Angular,
    Vanilla,
}

impl Framework {
    pub const ALL: [Framework; 4] = [
        Framework::React,
        Framework::Vue,
        Framework::Angular,
        Framework::Vanilla,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
            Framework::Vanilla => "vanilla",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "react" => Ok(Framework::React),
            "vue" => Ok(Framework::Vue),
            "angular" => Ok(Framework::Angular),
            "vanilla" | "vanilla-js" | "js" => Ok(Framework::Vanilla),
            other => Err(format!("unknown framework: {}", other)),
        }
    }
}

/// State-management library wired into project scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateLibrary {
    Redux,
    Zustand,
    Vuex,
    Pinia,
}

/// Styling approach for generated components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylingApproach {
    CssModules,
    StyledComponents,
    Emotion,
}

/// Build tool emitted in project scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Vite,
    Webpack,
}

/// Options recognized by the generators. Unknown frameworks ignore the
/// options that do not apply to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Emit TypeScript (React/Vue); Angular is always TypeScript
    #[serde(default = "default_true")]
    pub typescript: bool,

    /// Vue: `<script setup>` composition API vs options API
    #[serde(default = "default_true")]
    pub composition_api: bool,

    /// Angular: standalone components vs NgModule
    #[serde(default = "default_true")]
    pub standalone: bool,

    /// Wire router scaffolding into pages/projects
    #[serde(default)]
    pub routing: bool,

    #[serde(default)]
    pub state_management: Option<StateLibrary>,

    #[serde(default)]
    pub styling: Option<StylingApproach>,

    /// Emit test files and test tooling
    #[serde(default = "default_true")]
    pub testing: bool,

    #[serde(default)]
    pub build_tool: Option<BuildTool>,

    /// Vanilla: emit a service worker and web manifest
    #[serde(default)]
    pub pwa: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            typescript: true,
            composition_api: true,
            standalone: true,
            routing: false,
            state_management: None,
            styling: None,
            testing: true,
            build_tool: None,
            pwa: false,
        }
    }
}

/// Drives whole-project generation: scaffolding, manifest, build config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDefinition {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub framework: Framework,

    #[serde(default)]
    pub config: GeneratorConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_framework_from_str() {
        assert_eq!("react".parse::<Framework>().unwrap(), Framework::React);
        assert_eq!("Vue".parse::<Framework>().unwrap(), Framework::Vue);
        assert_eq!("vanilla-js".parse::<Framework>().unwrap(), Framework::Vanilla);
        assert!("svelte".parse::<Framework>().is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config: GeneratorConfig = serde_json::from_value(json!({})).unwrap();
        assert!(config.typescript);
        assert!(config.testing);
        assert!(!config.routing);
        assert_eq!(config.state_management, None);
    }

    #[test]
    fn test_project_definition() {
        let project: ProjectDefinition = serde_json::from_value(json!({
            "name": "dashboard",
            "framework": "angular",
            "config": { "routing": true }
        }))
        .unwrap();
        assert_eq!(project.framework, Framework::Angular);
        assert!(project.config.routing);
        assert!(project.config.standalone);
    }
}
