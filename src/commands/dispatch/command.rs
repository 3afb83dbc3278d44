//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use lastmod_core::config::{ConfigSource, StampConfig};
use lastmod_core::error::Result;
use lastmod_core::vault::Vault;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Open the vault at the resolved root
    pub fn open_vault(&self) -> Result<Vault> {
        Vault::open(self.root)
    }

    /// `--config` resolved against the vault root
    pub fn explicit_config(&self) -> Option<PathBuf> {
        self.cli.config.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                self.root.join(path)
            }
        })
    }

    /// Effective configuration and its source
    pub fn load_config(&self) -> Result<(StampConfig, ConfigSource)> {
        let explicit = self.explicit_config();
        StampConfig::resolve(self.root, explicit.as_deref())
    }

    /// File that `config` mutations write to
    pub fn config_target(&self) -> PathBuf {
        self.explicit_config()
            .unwrap_or_else(|| lastmod_core::config::vault_config_path(self.root))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("lastmod {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Keeps a last-modified timestamp log in markdown frontmatter.");
        println!();
        println!("Run `lastmod --help` for usage information.");
        Ok(())
    }
}
