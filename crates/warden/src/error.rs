//! Facade error type.

use thiserror::Error;
use warden_config::ConfigError;
use warden_render::RenderError;

#[derive(Debug, Error)]
pub enum WardenError {
    /// A configured policy name is not in the built-in catalog.
    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),

    /// A configured rule name is not in the built-in catalog.
    #[error("Unknown compliance rule: {0}")]
    UnknownRule(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Layered loading failed (file, merge or validation).
    #[error(transparent)]
    Load(#[from] anyhow::Error),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, WardenError>;
