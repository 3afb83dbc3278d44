//! `lastmod config` commands - inspect and change settings

use lastmod_core::config::{ConfigSource, StampConfig};
use lastmod_core::error::{LastmodError, Result};
use lastmod_core::{bail_invalid, bail_usage};

use crate::cli::config::{ConfigCommands, ConfigKey, IgnoreCommands};
use crate::cli::parse::parse_bool;
use crate::commands::dispatch::command::CommandContext;
use crate::output_by_format_result;

/// Execute a config subcommand
pub fn execute(ctx: &CommandContext, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(ctx),
        ConfigCommands::Set { key, value } => set(ctx, *key, value),
        ConfigCommands::Ignore { command } => ignore(ctx, command),
    }
}

fn source_label(source: &ConfigSource) -> String {
    match source {
        ConfigSource::Explicit(p) => format!("explicit ({})", p.display()),
        ConfigSource::Vault(p) => format!("vault ({})", p.display()),
        ConfigSource::Global(p) => format!("global ({})", p.display()),
        ConfigSource::Defaults => "defaults".to_string(),
    }
}

fn show(ctx: &CommandContext) -> Result<()> {
    let (config, source) = ctx.load_config()?;

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "source": source.path().map(|p| p.display().to_string()),
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), LastmodError>(())
        },
        human => {
            println!("source: {}", source_label(&source));
            println!("collapse-per-day: {}", config.collapse_per_day);
            println!("min-interval-seconds: {}", config.min_interval_seconds());
            println!("migrate-legacy-scalar: {}", config.migrate_legacy_scalar);
            if config.ignored_folders().is_empty() {
                println!("ignored-folders: (none)");
            } else {
                println!("ignored-folders: {}", config.ignored_folders().join(", "));
            }
        }
    )
}

/// Load the config that mutations start from: the target file if it exists,
/// otherwise the effective config so a first write keeps inherited values
fn load_for_update(ctx: &CommandContext) -> Result<StampConfig> {
    let target = ctx.config_target();
    if target.exists() {
        StampConfig::load(&target)
    } else {
        Ok(ctx.load_config()?.0)
    }
}

fn save(ctx: &CommandContext, config: &StampConfig) -> Result<()> {
    let target = ctx.config_target();
    config.save(&target)?;
    tracing::info!(path = %target.display(), "config saved");
    Ok(())
}

fn set(ctx: &CommandContext, key: ConfigKey, value: &str) -> Result<()> {
    let mut config = load_for_update(ctx)?;

    match key {
        ConfigKey::CollapsePerDay => {
            config.collapse_per_day = parse_bool(value).map_err(LastmodError::UsageError)?;
        }
        ConfigKey::MigrateLegacyScalar => {
            config.migrate_legacy_scalar = parse_bool(value).map_err(LastmodError::UsageError)?;
        }
        ConfigKey::MinIntervalSeconds => {
            let Ok(seconds) = value.trim().parse::<i64>() else {
                bail_invalid!(key.name(), value);
            };
            config.set_min_interval(seconds);
        }
    }

    save(ctx, &config)?;

    let effective = match key {
        ConfigKey::CollapsePerDay => config.collapse_per_day.to_string(),
        ConfigKey::MigrateLegacyScalar => config.migrate_legacy_scalar.to_string(),
        ConfigKey::MinIntervalSeconds => config.min_interval_seconds().to_string(),
    };

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({ "key": key.name(), "value": effective });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), LastmodError>(())
        },
        human => {
            if !ctx.cli.quiet {
                println!("{} = {}", key.name(), effective);
            }
        }
    )
}

fn ignore(ctx: &CommandContext, command: &IgnoreCommands) -> Result<()> {
    let (folders, changed) = match command {
        IgnoreCommands::List => {
            let (config, _) = ctx.load_config()?;
            (config.ignored_folders().to_vec(), false)
        }
        IgnoreCommands::Add { folder } => {
            let mut config = load_for_update(ctx)?;
            let added = config.add_ignored_folder(folder)?;
            if added {
                save(ctx, &config)?;
            }
            (config.ignored_folders().to_vec(), added)
        }
        IgnoreCommands::Remove { folder } => {
            let mut config = load_for_update(ctx)?;
            if !config.remove_ignored_folder(folder) {
                bail_usage!(format!("folder is not ignored: {}", folder));
            }
            save(ctx, &config)?;
            (config.ignored_folders().to_vec(), true)
        }
    };

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({ "ignored_folders": folders, "changed": changed });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), LastmodError>(())
        },
        human => {
            if matches!(command, IgnoreCommands::List) || !ctx.cli.quiet {
                for folder in &folders {
                    println!("{}", folder);
                }
            }
        }
    )
}
