use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DevlogConfig {
    pub storage: StorageConfig,
    pub editor: EditorConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor command line. Empty means fall back to $VISUAL / $EDITOR / vi.
    pub command: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for DevlogConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            editor: EditorConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_devlog_dir()
            .join("journal.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

/// Returns `~/.devlog/`
pub fn default_devlog_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".devlog")
}

/// Returns the default config file path: `~/.devlog/config.toml`
pub fn default_config_path() -> PathBuf {
    default_devlog_dir().join("config.toml")
}

impl DevlogConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            DevlogConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (DEVLOG_DB, DEVLOG_EDITOR, DEVLOG_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DEVLOG_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("DEVLOG_EDITOR") {
            self.editor.command = val;
        }
        if let Ok(val) = std::env::var("DEVLOG_LOG_LEVEL") {
            self.log.level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
