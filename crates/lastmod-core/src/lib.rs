//! lastmod core library
//!
//! Maintains a `last-modified` timestamp log in a markdown document's
//! frontmatter. [`engine::apply`] is the pure decision entry point;
//! [`vault::Vault`] wraps it with file access.

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod folders;
pub mod logging;
pub mod policy;
pub mod property;
pub mod timestamp;
pub mod vault;

pub use engine::apply;
pub use policy::{Action, Outcome};
pub use property::{PropertyValue, TimestampLog};
