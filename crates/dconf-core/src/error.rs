use std::io;
use std::path::PathBuf;

use dconf_artifact::ArtifactError;

/// Failure to produce a language descriptor from an artifact.
///
/// Every variant names the artifact it concerns.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("grammar name {name:?} is not an identifier")]
    InvalidName { name: String },

    #[error("grammar `{name}` not found in {} search path(s)", .searched.len())]
    NotFound { name: String, searched: Vec<PathBuf> },

    #[error("grammar `{name}`: cannot read {}: {source}", .path.display())]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("grammar `{name}`: {source}")]
    Malformed {
        name: String,
        #[source]
        source: ArtifactError,
    },

    #[error(
        "grammar `{name}`: language version {version} is incompatible (supported {min}..={max})"
    )]
    IncompatibleVersion {
        name: String,
        version: u16,
        min: u16,
        max: u16,
    },

    #[error("grammar `{name}`: artifact declares grammar `{declared}`")]
    NameMismatch { name: String, declared: String },

    #[error("grammar `{name}` is already registered from a different artifact")]
    Conflict { name: String },
}

impl LoadError {
    /// Name of the artifact that failed to load.
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidName { name }
            | Self::NotFound { name, .. }
            | Self::Io { name, .. }
            | Self::Malformed { name, .. }
            | Self::IncompatibleVersion { name, .. }
            | Self::NameMismatch { name, .. }
            | Self::Conflict { name } => name,
        }
    }
}
