//! Error types for environment resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while resolving an environment into an open connection.
///
/// Every variant is terminal for the current invocation; nothing in the
/// resolution path retries.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The configuration document could not be read or parsed.
    #[error("Failed to load configuration from {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: LoadCause,
    },

    /// The selected environment has no entry and fallback synthesis is denied.
    #[error("Environment '{name}' is not defined in {path}")]
    EnvironmentNotFound { name: String, path: PathBuf },

    /// The dialect identifier is not one of the compiled-in dialects.
    #[error("Unsupported dialect: {dialect}")]
    UnsupportedDialect { dialect: String },

    /// The driver layer refused to open a connection.
    #[error("Cannot connect to {dialect} database at {data_source}: {source}")]
    Connection {
        dialect: String,
        /// Data source with any password masked
        data_source: String,
        #[source]
        source: sqlx::Error,
    },
}

/// Underlying cause of a [`ResolveError::ConfigLoad`].
#[derive(Debug, Error)]
pub enum LoadCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ResolveError {
    pub fn config_load(path: impl Into<PathBuf>, source: impl Into<LoadCause>) -> Self {
        ResolveError::ConfigLoad {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn unsupported_dialect(dialect: impl Into<String>) -> Self {
        ResolveError::UnsupportedDialect {
            dialect: dialect.into(),
        }
    }

    /// True when the document simply does not exist, as opposed to being unreadable or malformed.
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            ResolveError::ConfigLoad {
                source: LoadCause::Io(e),
                ..
            } if e.kind() == std::io::ErrorKind::NotFound
        )
    }
}
