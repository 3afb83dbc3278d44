//! User-level default configuration (stored in ~/.config/lastmod/config.toml)

use std::path::PathBuf;

use super::CONFIG_FILE;

const CONFIG_DIR: &str = "lastmod";
const CONFIG_DIR_ENV_VAR: &str = "LASTMOD_CONFIG_DIR";

/// Location of the global config file, if a config directory can be found
pub fn config_path() -> Option<PathBuf> {
    // Allow environment variable override for testing
    let config_dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()?.join(CONFIG_DIR),
    };

    Some(config_dir.join(CONFIG_FILE))
}
