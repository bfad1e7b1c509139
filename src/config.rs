// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::api::{BUGZILLA_BASE_URL, DEFAULT_PRODUCT};
use crate::catalog::{ComponentCatalog, ComponentEntry};
use crate::error::{BugHuntError, Result};
use crate::filter::INACTIVE_AFTER_DAYS;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_PREFIX: &str = "BUGHUNT";
const HOME_ENV: &str = "BUGHUNT_HOME";
const DEFAULT_HOME_DIR: &str = ".bughunt";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DEBOUNCE_MS: u64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugHuntConfig {
    #[serde(skip)]
    home: PathBuf,

    #[serde(default)]
    pub tracker: TrackerConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    /// Replaces the built-in DevTools catalog when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<ComponentEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_product")]
    pub product: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_inactive_after_days")]
    pub inactive_after_days: i64,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Unbounded when unset
    #[serde(default)]
    pub max_entries: Option<usize>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            product: default_product(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            inactive_after_days: default_inactive_after_days(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_base_url() -> String {
    BUGZILLA_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_product() -> String {
    DEFAULT_PRODUCT.to_string()
}

fn default_inactive_after_days() -> i64 {
    INACTIVE_AFTER_DAYS
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl BugHuntConfig {
    /// Defaults rooted at `home`, ignoring any file or environment.
    pub fn new(home: PathBuf) -> Self {
        Self {
            home,
            tracker: TrackerConfig::default(),
            filter: FilterConfig::default(),
            cache: CacheConfig::default(),
            catalog: None,
        }
    }

    /// Load `config.toml` under `home`, then apply `BUGHUNT_*` overrides.
    ///
    /// Nested keys use a double underscore, e.g. `BUGHUNT_TRACKER__BASE_URL`.
    pub fn load(home: PathBuf) -> Result<Self> {
        let config_path = home.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            log::debug!("Loading config from {config_path:?}");
        } else {
            log::debug!("Config file not found at {config_path:?}, using defaults");
        }

        let settings = Config::builder()
            .add_source(
                File::from(config_path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: BugHuntConfig = settings.try_deserialize()?;
        config.home = home;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = self.config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| BugHuntError::ConfigError(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, contents)?;
        log::debug!("Saved config to {config_path:?}");
        Ok(())
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.join(CONFIG_FILE_NAME)
    }

    /// The configured catalog, or the DevTools one.
    pub fn component_catalog(&self) -> Result<ComponentCatalog> {
        match &self.catalog {
            Some(entries) => ComponentCatalog::from_entries(entries.clone()),
            None => Ok(ComponentCatalog::devtools()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.tracker.base_url.trim().is_empty() {
            return Err(BugHuntError::InvalidConfig(
                "tracker.base_url must not be empty".to_string(),
            ));
        }
        if self.filter.inactive_after_days < 0 {
            return Err(BugHuntError::InvalidConfig(format!(
                "filter.inactive_after_days must not be negative (got {})",
                self.filter.inactive_after_days
            )));
        }
        if self.cache.max_entries == Some(0) {
            return Err(BugHuntError::InvalidConfig(
                "cache.max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the bughunt home directory: `$BUGHUNT_HOME` or `~/.bughunt`.
pub fn bughunt_home() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.trim().is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    dirs::home_dir()
        .map(|h| h.join(DEFAULT_HOME_DIR))
        .ok_or(BugHuntError::HomeNotFound)
}

pub fn new_bughunt_config() -> Result<BugHuntConfig> {
    BugHuntConfig::load(bughunt_home()?)
}
