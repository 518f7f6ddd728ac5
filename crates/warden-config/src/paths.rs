//! Configuration file discovery.
//!
//! Warden reads up to three files beneath the environment layer. The user
//! file carries per-operator defaults, `warden.toml` is the checked-in policy
//! selection for a project, and `warden.local.toml` holds uncommitted
//! overrides for one checkout.

use crate::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const PROJECT_FILE: &str = "warden.toml";
pub const LOCAL_FILE: &str = "warden.local.toml";
const USER_FILE: &str = "config.toml";

/// A file-backed configuration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileLayer {
    /// ~/.config/warden/config.toml
    User,
    /// warden.toml in the project directory
    Project,
    /// warden.local.toml in the project directory
    Local,
}

/// Locations of the configuration files.
pub struct Paths {
    dirs: Option<ProjectDirs>,
}

impl Paths {
    pub fn discover() -> Self {
        Self {
            dirs: ProjectDirs::from("rs", "Warden", "warden"),
        }
    }

    pub fn user_config_file(&self) -> Result<PathBuf, ConfigError> {
        self.dirs
            .as_ref()
            .map(|dirs| dirs.config_dir().join(USER_FILE))
            .ok_or_else(|| ConfigError::XdgError("no home directory for user config".to_string()))
    }

    pub fn project_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(PROJECT_FILE)
    }

    pub fn local_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(LOCAL_FILE)
    }

    /// Existing file layers, lowest precedence first.
    ///
    /// Missing files are skipped. The user layer is skipped entirely when
    /// `include_user` is false or no home directory can be determined.
    pub fn file_layers(
        &self,
        project_dir: &Path,
        include_user: bool,
    ) -> Vec<(FileLayer, PathBuf)> {
        let user = include_user
            .then(|| self.user_config_file().ok())
            .flatten()
            .map(|path| (FileLayer::User, path));

        user.into_iter()
            .chain([
                (FileLayer::Project, Self::project_config_file(project_dir)),
                (FileLayer::Local, Self::local_config_file(project_dir)),
            ])
            .filter(|(_, path)| path.is_file())
            .collect()
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::discover()
    }
}
