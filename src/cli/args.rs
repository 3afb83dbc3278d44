use super::parse::parse_timestamp;
use chrono::NaiveDateTime;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct StampArgs {
    /// Documents or directories (walked for *.md), relative to the vault root
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Use this instant instead of the local clock (YYYY-MM-DDTHH:mm:ss)
    #[arg(long, value_parser = parse_timestamp)]
    pub now: Option<NaiveDateTime>,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Document path, relative to the vault root
    pub path: PathBuf,
}
