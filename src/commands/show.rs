//! `lastmod show` command - print a document's timestamp log

use lastmod_core::error::{LastmodError, Result};
use lastmod_core::property::{normalize, PropertyValue};
use lastmod_core::timestamp;

use crate::cli::ShowArgs;
use crate::commands::dispatch::command::CommandContext;
use crate::output_by_format_result;

/// Execute the show command
pub fn execute(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
    let vault = ctx.open_vault()?;
    let (config, _) = ctx.load_config()?;

    let relative = vault.relative_path(&args.path)?;
    let document = vault.read(&args.path)?;
    let raw = document.last_modified();
    let legacy = matches!(raw, PropertyValue::Scalar(_));
    let log = normalize(raw, config.migrate_legacy_scalar);

    output_by_format_result!(ctx.cli.format,
        json => {
            let entries: Vec<_> = log
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "value": entry,
                        "valid": timestamp::parse_strict(entry).is_some(),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "path": relative,
                "legacy_scalar": legacy,
                "entries": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), LastmodError>(())
        },
        human => {
            if log.is_empty() && !ctx.cli.quiet {
                println!("{}: no timestamps", relative);
            }
            for entry in &log {
                if timestamp::parse_strict(entry).is_some() {
                    println!("{}", entry);
                } else {
                    println!("{} (unparseable)", entry);
                }
            }
            if legacy && !config.migrate_legacy_scalar && !ctx.cli.quiet {
                eprintln!("note: legacy single-value last-modified will be replaced on next stamp");
            }
        }
    )
}
