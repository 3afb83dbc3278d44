//! `lastmod stamp` command - record a modification of documents
//!
//! Each document is one "changed" event. Documents are independent, so they
//! are split across worker threads; the vault serializes access per file.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use chrono::NaiveDateTime;
use lastmod_core::config::StampConfig;
use lastmod_core::error::{LastmodError, Result};
use lastmod_core::timestamp;
use lastmod_core::trace_time;
use lastmod_core::vault::{StampReport, Vault};

use crate::cli::StampArgs;
use crate::commands::dispatch::command::CommandContext;
use crate::output_by_format_result;

/// Execute the stamp command
pub fn execute(ctx: &CommandContext, args: &StampArgs) -> Result<()> {
    let vault = ctx.open_vault()?;
    let (config, source) = ctx.load_config()?;
    tracing::debug!(source = ?source, "config resolved");

    let now = args.now.unwrap_or_else(timestamp::now_local);
    let documents = vault.collect_documents(&args.paths)?;

    let start = Instant::now();
    let results = stamp_all(&vault, &documents, now, &config, args.dry_run);
    trace_time!(start, "stamp_all", documents = documents.len());

    let mut reports = Vec::with_capacity(results.len());
    let mut first_error: Option<LastmodError> = None;
    for (path, result) in documents.iter().zip(results) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "stamp failed");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "now": timestamp::format(&now),
                "dry_run": args.dry_run,
                "documents": reports,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), LastmodError>(())
        },
        human => {
            if !ctx.cli.quiet {
                for report in &reports {
                    println!("{:<11} {}", report.action.to_string(), report.path);
                }
            }
        }
    )?;

    trace_time!(ctx.start, "stamp_command");

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Stamp every document, returning results in input order
fn stamp_all(
    vault: &Vault,
    documents: &[PathBuf],
    now: NaiveDateTime,
    config: &StampConfig,
    dry_run: bool,
) -> Vec<Result<StampReport>> {
    let stamp_one = |path: &PathBuf| {
        if dry_run {
            vault.preview(path, now, config)
        } else {
            vault.stamp(path, now, config)
        }
    };

    let workers = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
        .min(documents.len());

    if workers <= 1 {
        return documents.iter().map(stamp_one).collect();
    }

    let chunk_size = documents.len().div_ceil(workers);
    thread::scope(|s| {
        let handles: Vec<_> = documents
            .chunks(chunk_size)
            .map(|chunk| {
                let handle = s.spawn(move || chunk.iter().map(stamp_one).collect::<Vec<_>>());
                (chunk.len(), handle)
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|(len, handle)| {
                handle.join().unwrap_or_else(|_| {
                    (0..len)
                        .map(|_| Err(LastmodError::Other("stamp worker panicked".to_string())))
                        .collect()
                })
            })
            .collect()
    })
}
