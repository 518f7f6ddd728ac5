//! Layered configuration loading.
//!
//! Layers, lowest precedence first:
//!
//! | Layer       | Source                          | Typical use                        |
//! |-------------|---------------------------------|------------------------------------|
//! | defaults    | [`WardenConfig::default`]       | every built-in, pretty, audit on   |
//! | user        | ~/.config/warden/config.toml    | operator-wide layout/audit choices |
//! | project     | warden.toml                     | checked-in policy and rule sets    |
//! | local       | warden.local.toml               | uncommitted overrides              |
//! | environment | `WARDEN_<SECTION>_<KEY>`        | deployment overrides               |
//!
//! Later layers replace whole values: a policy list in `warden.local.toml`
//! replaces the project list rather than extending it. In the environment the
//! name lists are comma separated, e.g.
//! `WARDEN_ENGINE_POLICIES=MFARequiredForRestricted,EngineerAccess`.

use crate::paths::{FileLayer, Paths};
use crate::WardenConfig;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix of the environment layer.
pub const DEFAULT_ENV_PREFIX: &str = "WARDEN";

/// Keys whose environment values are comma separated name lists.
pub const LIST_KEYS: [&str; 2] = ["engine.policies", "compliance.rules"];

const LIST_SEPARATOR: &str = ",";

/// Builds the environment layer.
///
/// With `vars` set, those variables are read instead of the process
/// environment.
pub fn environment_source(
    prefix: &str,
    vars: Option<config::Map<String, String>>,
) -> config::Environment {
    LIST_KEYS.iter().fold(
        config::Environment::with_prefix(prefix)
            .separator("_")
            .try_parsing(true)
            .list_separator(LIST_SEPARATOR)
            .source(vars),
        |source, key| source.with_list_parse_key(key),
    )
}

/// Loads a [`WardenConfig`] from every layer.
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    env_vars: Option<config::Map<String, String>>,
    include_user_config: bool,
}

impl ConfigLoader {
    /// A loader for the current directory, reading the process environment.
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            env_vars: None,
            include_user_config: true,
        }
    }

    /// Directory holding warden.toml and warden.local.toml.
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Reads the environment layer from `vars` instead of the process
    /// environment. Names still need the configured prefix.
    pub fn with_env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Skips the user layer.
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// Merges the layers, deserializes and validates.
    pub fn load(self) -> Result<WardenConfig> {
        let defaults = config::Config::try_from(&WardenConfig::default())
            .context("Failed to encode default configuration")?;
        let mut builder = config::Config::builder().add_source(defaults);

        let layers = Paths::discover().file_layers(&self.project_dir, self.include_user_config);
        for (layer, path) in layers {
            debug!(layer = ?layer, path = %path.display(), "Reading config layer");
            builder = builder.add_source(
                config::File::from(path).format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(environment_source(&self.env_prefix, self.env_vars));

        let merged: WardenConfig = builder
            .build()
            .context("Failed to merge configuration layers")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        merged
            .validate()
            .context("Configuration failed validation")?;

        debug!(
            policies = merged.engine.policies.len(),
            rules = merged.compliance.rules.len(),
            "Configuration loaded"
        );
        Ok(merged)
    }

    /// Whether a project file would take part in [`load`](Self::load).
    pub fn has_project_file(&self) -> bool {
        Paths::discover()
            .file_layers(&self.project_dir, false)
            .iter()
            .any(|(layer, _)| *layer == FileLayer::Project)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
