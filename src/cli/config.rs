use clap::{Subcommand, ValueEnum};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration and where it came from
    Show,

    /// Change a setting in the vault config
    Set {
        /// Setting to change
        #[arg(value_enum)]
        key: ConfigKey,

        /// New value
        value: String,
    },

    /// Manage folders whose documents are never stamped
    Ignore {
        #[command(subcommand)]
        command: IgnoreCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum IgnoreCommands {
    /// Add a vault-relative folder
    Add { folder: String },
    /// Remove a folder
    Remove { folder: String },
    /// List ignored folders
    List,
}

/// Settings that `config set` can change
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    CollapsePerDay,
    MinIntervalSeconds,
    MigrateLegacyScalar,
}

impl ConfigKey {
    /// Key name as written in config.toml
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::CollapsePerDay => "collapse-per-day",
            ConfigKey::MinIntervalSeconds => "min-interval-seconds",
            ConfigKey::MigrateLegacyScalar => "migrate-legacy-scalar",
        }
    }
}
