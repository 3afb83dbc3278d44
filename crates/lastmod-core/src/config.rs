//! Stamping configuration for lastmod
//!
//! A vault keeps its configuration in `.lastmod/config.toml`. When a vault
//! has none, the user-level file from [`global`] supplies the defaults.

pub mod global;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LastmodError, Result};

pub use types::{
    clamp_interval, StampConfig, DEFAULT_MIN_INTERVAL, MIN_INTERVAL_CEILING, MIN_INTERVAL_FLOOR,
};

/// Directory inside a vault root holding lastmod state
pub const VAULT_CONFIG_DIR: &str = ".lastmod";

/// Config file name, both per vault and global
pub const CONFIG_FILE: &str = "config.toml";

/// Where a resolved configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` on the command line
    Explicit(PathBuf),
    /// `<root>/.lastmod/config.toml`
    Vault(PathBuf),
    /// The user-level config file
    Global(PathBuf),
    /// Nothing on disk
    Defaults,
}

impl ConfigSource {
    /// File backing this source, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Vault(p) | ConfigSource::Global(p) => {
                Some(p)
            }
            ConfigSource::Defaults => None,
        }
    }
}

/// Path of the per-vault config file
pub fn vault_config_path(root: &Path) -> PathBuf {
    root.join(VAULT_CONFIG_DIR).join(CONFIG_FILE)
}

/// Normalize a folder entry: forward slashes, no surrounding slashes or whitespace
pub fn normalize_folder(folder: &str) -> String {
    folder.trim().replace('\\', "/").trim_matches('/').to_string()
}

impl StampConfig {
    /// Minimum seconds between appended entries
    pub fn min_interval_seconds(&self) -> i64 {
        self.min_interval_seconds
    }

    /// Set the interval, clamping out-of-range values
    pub fn set_min_interval(&mut self, seconds: i64) {
        let clamped = clamp_interval(seconds);
        if clamped != seconds {
            tracing::debug!(requested = seconds, clamped, "min interval clamped");
        }
        self.min_interval_seconds = clamped;
    }

    /// Builder-style variant of [`StampConfig::set_min_interval`]
    pub fn with_min_interval(mut self, seconds: i64) -> Self {
        self.set_min_interval(seconds);
        self
    }

    /// Builder-style collapse toggle
    pub fn with_collapse_per_day(mut self, collapse: bool) -> Self {
        self.collapse_per_day = collapse;
        self
    }

    /// Builder-style ignored folder list
    pub fn with_ignored_folders(mut self, folders: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        for folder in folders {
            // Empty entries are dropped here rather than surfaced
            let _ = self.add_ignored_folder(folder.as_ref());
        }
        self
    }

    /// Folders excluded from stamping
    pub fn ignored_folders(&self) -> &[String] {
        &self.ignored_folders
    }

    /// Add an ignored folder. Returns `Ok(false)` if it was already present.
    pub fn add_ignored_folder(&mut self, folder: &str) -> Result<bool> {
        let folder = normalize_folder(folder);
        if folder.is_empty() {
            crate::bail_invalid!("ignored folder", "(empty)");
        }
        if self.ignored_folders.contains(&folder) {
            return Ok(false);
        }
        self.ignored_folders.push(folder);
        Ok(true)
    }

    /// Remove an ignored folder. Returns whether anything was removed.
    pub fn remove_ignored_folder(&mut self, folder: &str) -> bool {
        let folder = normalize_folder(folder);
        let before = self.ignored_folders.len();
        self.ignored_folders.retain(|f| *f != folder);
        self.ignored_folders.len() != before
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: StampConfig = toml::from_str(&content)?;

        // Hand-edited files may carry unnormalized or duplicate folders
        let folders = std::mem::take(&mut config.ignored_folders);
        config = config.with_ignored_folders(folders);

        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| LastmodError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the effective configuration for a vault
    ///
    /// Order: explicit file, vault file, global file, built-in defaults.
    #[tracing::instrument(level = "debug", skip_all, fields(root = %root.display()))]
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(LastmodError::io_operation(
                    "read config",
                    path.display(),
                    "file does not exist",
                ));
            }
            return Ok((Self::load(path)?, ConfigSource::Explicit(path.to_path_buf())));
        }

        let vault_path = vault_config_path(root);
        if vault_path.exists() {
            return Ok((Self::load(&vault_path)?, ConfigSource::Vault(vault_path)));
        }

        if let Some(global_path) = global::config_path() {
            if global_path.exists() {
                return Ok((Self::load(&global_path)?, ConfigSource::Global(global_path)));
            }
        }

        Ok((Self::default(), ConfigSource::Defaults))
    }
}
