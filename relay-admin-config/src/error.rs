//! Error types for the relay admin configuration layer

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Admin settings could not be extracted
    #[error("Failed to parse configuration: {source}")]
    Parse {
        #[source]
        source: Box<figment::Error>,
    },

    /// Failed to read or write the relay configuration file
    #[error("Failed to access configuration file {path}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Relay configuration file is not valid YAML for the payload
    #[error("Invalid relay configuration in {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },

    /// The persistence collaborator reported a failure
    #[error("Configuration store failed: {message}")]
    Store { message: String },

    /// A form schema could not be built
    #[error(transparent)]
    Fields(#[from] relay_admin_fields::FieldsError),
}

impl ConfigError {
    pub fn parse_error(source: figment::Error) -> Self {
        Self::Parse {
            source: Box::new(source),
        }
    }

    pub fn file_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    pub fn store_error(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
