//! Persistence for the relay configuration document.
//!
//! The editors never call a store; pages do, around an edit session. A store
//! reports absence as `Ok(None)` and failures as [`ConfigError`]. Retrying is
//! left to the caller.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;
use ulid::Ulid;

use crate::error::{ConfigError, ConfigResult};
use crate::relay::RelayConfig;

/// Fetch and update the relay configuration.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Current configuration, or `None` when none has been saved yet.
    async fn fetch(&self) -> ConfigResult<Option<RelayConfig>>;

    /// Replace the stored configuration.
    async fn update(&self, config: &RelayConfig) -> ConfigResult<()>;
}

/// Stores the configuration as one YAML file.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    async fn fetch(&self) -> ConfigResult<Option<RelayConfig>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no relay configuration on disk");
                return Ok(None);
            }
            Err(e) => return Err(ConfigError::file_error(&self.path, e)),
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        let config = serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "relay configuration fetched");
        Ok(Some(config))
    }

    async fn update(&self, config: &RelayConfig) -> ConfigResult<()> {
        let yaml = serde_yaml_ng::to_string(config).map_err(|source| ConfigError::Yaml {
            path: self.path.clone(),
            source,
        })?;
        atomic_write(&self.path, yaml.as_bytes())
            .await
            .map_err(|e| ConfigError::file_error(&self.path, e))?;
        debug!(path = %self.path.display(), "relay configuration updated");
        Ok(())
    }
}

/// Keeps the configuration in memory.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    config: RwLock<Option<RelayConfig>>,
}

impl MemoryConfigStore {
    pub fn new(config: Option<RelayConfig>) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Replace the stored configuration without going through `update`.
    pub async fn set(&self, config: Option<RelayConfig>) {
        *self.config.write().await = config;
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn fetch(&self) -> ConfigResult<Option<RelayConfig>> {
        Ok(self.config.read().await.clone())
    }

    async fn update(&self, config: &RelayConfig) -> ConfigResult<()> {
        *self.config.write().await = Some(config.clone());
        Ok(())
    }
}

/// Write to a temp file then rename for atomic persistence.
async fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).await?;
    let tmp = dir.join(format!(".tmp_{}", Ulid::new()));
    fs::write(&tmp, data).await?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e);
    }
    Ok(())
}
