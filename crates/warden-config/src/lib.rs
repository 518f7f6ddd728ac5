//! Configuration management for Warden
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (WARDEN_* prefix, highest precedence)
//! 2. warden.local.toml (gitignored, local overrides)
//! 3. warden.toml (git-tracked, project config)
//! 4. ~/.config/warden/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)
//!
//! Configuration names built-in policies and rules; it does not define new
//! ones. Names are checked against the built-in catalog when a configured
//! engine or checker is assembled.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use warden_compliance::standard::STANDARD_RULE_NAMES;
use warden_policy::standard::STANDARD_POLICY_NAMES;
use warden_render::Layout;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::{ConfigLoader, DEFAULT_ENV_PREFIX, LIST_KEYS, environment_source};
pub use paths::{FileLayer, Paths};

/// Main Warden configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardenConfig {
    pub engine: EngineConfig,
    pub compliance: ComplianceConfig,
    pub projection: ProjectionConfig,
    pub audit: AuditConfig,
}

/// Policies to register, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub policies: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policies: STANDARD_POLICY_NAMES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Rules to register, in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceConfig {
    pub rules: Vec<String>,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            rules: STANDARD_RULE_NAMES.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Emit grant/deny and compliance summary events.
    pub enabled: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl WardenConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Parse a single TOML file without layering.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write this configuration as a project file (warden.toml).
    pub fn write_project_file(&self, project_dir: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = Paths::project_config_file(project_dir);
        let content = self.to_toml_string()?;
        fs::write(&path, content).map_err(|source| ConfigError::WriteError { path, source })
    }

    /// Rejects blank policy or rule names.
    ///
    /// Duplicates and unknown names pass here; duplicates are legal and
    /// unknown names are reported during assembly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pos) = self.engine.policies.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "engine.policies[{pos}] is blank"
            )));
        }
        if let Some(pos) = self.compliance.rules.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "compliance.rules[{pos}] is blank"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = WardenConfig::default();
        assert_eq!(
            config.engine.policies,
            vec![
                "AdminFullAccess",
                "MFARequiredForRestricted",
                "ProductionImmutability",
                "AnalystReadOnly",
                "EngineerAccess",
            ]
        );
        assert_eq!(
            config.compliance.rules,
            vec![
                "RequiresOwnerTag",
                "SecretsNotPublic",
                "DatabasesMustBeRestricted",
                "NoUnclassifiedResources",
            ]
        );
        assert_eq!(config.projection.layout, Layout::Pretty);
        assert!(config.audit.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duplicates_pass_validation() {
        let mut config = WardenConfig::default();
        config.engine.policies.push("AdminFullAccess".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let mut config = WardenConfig::default();
        config.engine.policies.insert(1, String::new());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(ref msg) if msg.contains("[1]")));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: WardenConfig = toml::from_str("[audit]\nenabled = false\n").unwrap();
        assert!(!config.audit.enabled);
        assert_eq!(config.engine.policies.len(), 5);
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let mut config = WardenConfig::default();
        config.projection.layout = Layout::Compact;
        config.compliance.rules.truncate(2);

        config.write_project_file(temp_dir.path()).unwrap();
        assert!(ConfigLoader::new().with_project_dir(temp_dir.path()).has_project_file());

        let loaded = WardenConfig::from_file(Paths::project_config_file(temp_dir.path())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_file_errors() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(
            WardenConfig::from_file(&missing),
            Err(ConfigError::ReadError { .. })
        ));

        let broken = temp_dir.path().join("broken.toml");
        std::fs::write(&broken, "[engine\npolicies = 3").unwrap();
        assert!(matches!(
            WardenConfig::from_file(&broken),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
