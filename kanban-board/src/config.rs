//! Board configuration loaded with figment
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Default values
//! 2. An optional configuration file, format chosen by extension
//! 3. Environment variables with the `KANBAN_` prefix

use crate::board::SeedKind;
use crate::error::Result;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, trace};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "KANBAN_";

/// Default number of activity entries kept in memory
pub const DEFAULT_ACTIVITY_LIMIT: usize = 100;

/// Settings for a board session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanConfig {
    /// Dataset the board starts from
    pub seed: SeedKind,
    /// Maximum activity entries kept, oldest dropped first
    pub activity_limit: usize,
    /// Whether rejected operations are recorded in the activity log
    pub log_rejections: bool,
    /// Actor recorded on every activity entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            seed: SeedKind::default(),
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
            log_rejections: true,
            actor: None,
        }
    }
}

impl KanbanConfig {
    /// Load configuration from defaults, `path` (if given) and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(path).extract()?;
        debug!(
            seed = ?config.seed,
            activity_limit = config.activity_limit,
            log_rejections = config.log_rejections,
            "loaded kanban configuration"
        );
        Ok(config)
    }

    /// Build the layered figment without extracting it
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            trace!(path = %path.display(), "merging config file");
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KanbanError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_defaults() {
        let config = KanbanConfig::load(None).unwrap();
        assert_eq!(config, KanbanConfig::default());
        assert_eq!(config.activity_limit, 100);
        assert!(config.log_rejections);
    }

    #[test]
    #[serial]
    fn test_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kanban.toml");
        fs::write(&path, "seed = \"empty\"\nactivity_limit = 5\nactor = \"alice\"\n").unwrap();

        let config = KanbanConfig::load(Some(&path)).unwrap();
        assert_eq!(config.seed, SeedKind::Empty);
        assert_eq!(config.activity_limit, 5);
        assert_eq!(config.actor.as_deref(), Some("alice"));
        assert!(config.log_rejections);
    }

    #[test]
    #[serial]
    fn test_yaml_and_json_files() {
        let dir = TempDir::new().unwrap();

        let yaml = dir.path().join("kanban.yaml");
        fs::write(&yaml, "log_rejections: false\n").unwrap();
        assert!(!KanbanConfig::load(Some(&yaml)).unwrap().log_rejections);

        let json = dir.path().join("kanban.json");
        fs::write(&json, r#"{"activity_limit": 7}"#).unwrap();
        assert_eq!(KanbanConfig::load(Some(&json)).unwrap().activity_limit, 7);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kanban.toml");
        fs::write(&path, "activity_limit = 5\n").unwrap();

        std::env::set_var("KANBAN_ACTIVITY_LIMIT", "12");
        let result = KanbanConfig::load(Some(&path));
        std::env::remove_var("KANBAN_ACTIVITY_LIMIT");

        assert_eq!(result.unwrap().activity_limit, 12);
    }

    #[test]
    #[serial]
    fn test_invalid_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kanban.toml");
        fs::write(&path, "seed = \"galaxy\"\n").unwrap();

        let err = KanbanConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, KanbanError::Config(_)));
        assert!(!err.is_rejection());
    }
}
