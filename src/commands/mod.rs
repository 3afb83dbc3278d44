//! CLI commands for lastmod

pub mod config;
pub mod dispatch;
pub mod init;
pub mod show;
pub mod stamp;
