//! Command dispatch logic for lastmod

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::{Cli, Commands};
use crate::commands::{config, init, show, stamp};
use lastmod_core::error::Result;
use tracing::debug;

pub mod command;

use command::{Command, CommandContext, NoCommand};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init { force } => init::execute(ctx, *force),
            Commands::Stamp(args) => stamp::execute(ctx, args),
            Commands::Show(args) => show::execute(ctx, args),
            Commands::Config { command } => config::execute(ctx, command),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());

    debug!(elapsed = ?start.elapsed(), root = %root.display(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
