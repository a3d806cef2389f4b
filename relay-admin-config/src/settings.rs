//! Admin settings loaded with Figment

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use relay_admin_editor::InsertPosition;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ConfigError, ConfigResult};

/// Base name of the settings files searched for in the working directory.
pub const SETTINGS_FILE_STEM: &str = "relay-admin";

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "RELAY_ADMIN_";

/// Settings of the admin tool itself, as opposed to the relay payload it edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    /// Relay configuration file edited by the admin.
    pub config_path: PathBuf,
    /// Insert new list rows at the top instead of the bottom.
    pub new_rows_first: bool,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("relay.yaml"),
            new_rows_first: false,
            log_filter: "info".to_string(),
        }
    }
}

impl AdminSettings {
    /// Load settings from the current directory and environment.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(Path::new("."))
    }

    /// Load settings from `dir` and environment.
    ///
    /// Sources in precedence order (later sources override earlier ones):
    /// 1. Defaults
    /// 2. `relay-admin.toml`, `relay-admin.yaml`, `relay-admin.yml`, `relay-admin.json`
    /// 3. `RELAY_ADMIN_*` environment variables
    pub fn load_from(dir: &Path) -> ConfigResult<Self> {
        let settings: Self = Self::figment(dir)
            .extract()
            .map_err(ConfigError::parse_error)?;
        debug!(config_path = %settings.config_path.display(), "admin settings loaded");
        Ok(settings)
    }

    fn figment(dir: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        for ext in ["toml", "yaml", "yml", "json"] {
            let path = dir.join(format!("{SETTINGS_FILE_STEM}.{ext}"));
            if !path.exists() {
                continue;
            }
            trace!(path = %path.display(), "loading settings file");
            figment = match ext {
                "toml" => figment.merge(Toml::file(path)),
                "json" => figment.merge(Json::file(path)),
                _ => figment.merge(Yaml::file(path)),
            };
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Where list editors put new rows.
    pub fn insert_position(&self) -> InsertPosition {
        InsertPosition::from_front(self.new_rows_first)
    }

    /// Resolve `config_path` against `dir` when it is relative.
    pub fn config_path_in(&self, dir: &Path) -> PathBuf {
        if self.config_path.is_absolute() {
            self.config_path.clone()
        } else {
            dir.join(&self.config_path)
        }
    }
}
