//! `lastmod init` command - write a default vault config

use lastmod_core::config::StampConfig;
use lastmod_core::error::{LastmodError, Result};

use crate::commands::dispatch::command::CommandContext;
use crate::output_by_format_result;

/// Execute the init command
pub fn execute(ctx: &CommandContext, force: bool) -> Result<()> {
    // Fails early when the root is missing
    let vault = ctx.open_vault()?;
    let path = lastmod_core::config::vault_config_path(vault.root());

    if path.exists() && !force {
        return Err(LastmodError::ConfigExists { path });
    }

    StampConfig::default().save(&path)?;
    tracing::info!(path = %path.display(), "wrote vault config");

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "config": path.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), LastmodError>(())
        },
        human => {
            if !ctx.cli.quiet {
                println!("Initialized lastmod config at {}", path.display());
            }
        }
    )
}
