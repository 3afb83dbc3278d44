//! Vault access: path resolution, document discovery, and scoped
//! read-modify-write of a single document

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDateTime;
use serde::Serialize;
use walkdir::WalkDir;

use crate::config::{StampConfig, VAULT_CONFIG_DIR};
use crate::document::Document;
use crate::engine;
use crate::error::{LastmodError, Result};
use crate::folders::is_ignored;
use crate::policy::Action;

const DOCUMENT_EXTENSION: &str = "md";

/// Per-document exclusive locks
///
/// Two stamps of the same document serialize; different documents never
/// contend beyond the brief registry lookup.
#[derive(Debug, Default)]
pub struct DocumentLocks {
    locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl DocumentLocks {
    fn lock_for(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(path.to_path_buf()).or_default())
    }

    /// Run `f` while holding the lock for `path`
    ///
    /// The lock is released when `f` returns, fails, or panics.
    pub fn with_lock<T>(&self, path: &Path, f: impl FnOnce() -> T) -> T {
        let lock = self.lock_for(path);
        // A panic in an earlier holder leaves nothing half-done in memory
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }
}

/// Per-document result of a stamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StampReport {
    /// Vault-relative path
    pub path: String,
    /// Which branch the policy took
    pub action: Action,
    /// Whether the document was rewritten
    pub mutated: bool,
    /// Log after the stamp; absent for ignored documents, which are not read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<Vec<String>>,
}

/// A directory tree of markdown documents
#[derive(Debug)]
pub struct Vault {
    root: PathBuf,
    locks: DocumentLocks,
}

impl Vault {
    /// Open a vault rooted at `root`
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(LastmodError::VaultNotFound {
                root: root.to_path_buf(),
            });
        }
        let root = root
            .canonicalize()
            .map_err(|e| LastmodError::io_operation("resolve vault root", root.display(), e))?;
        Ok(Self {
            root,
            locks: DocumentLocks::default(),
        })
    }

    /// Canonical vault root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path for `path`, resolved against the vault root if relative
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Vault-relative path of an existing file or directory, `/`-separated
    pub fn relative_path(&self, path: &Path) -> Result<String> {
        let absolute = self.resolve(path);
        let canonical = absolute
            .canonicalize()
            .map_err(|_| LastmodError::DocumentNotFound {
                path: absolute.clone(),
            })?;
        let relative = canonical
            .strip_prefix(&self.root)
            .map_err(|_| LastmodError::OutsideVault {
                path: canonical.clone(),
                root: self.root.clone(),
            })?;

        let parts: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Ok(parts.join("/"))
    }

    /// Expand the given paths into markdown documents
    ///
    /// Files are taken as given. Directories are walked recursively for
    /// `*.md`, skipping hidden entries such as `.lastmod/`. The result is
    /// sorted and free of duplicates.
    pub fn collect_documents(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut documents = Vec::new();

        for path in paths {
            let absolute = self.resolve(path);
            if absolute.is_dir() {
                let walker = WalkDir::new(&absolute)
                    .follow_links(false)
                    .into_iter()
                    .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));
                for entry in walker {
                    let entry = entry.map_err(|e| {
                        LastmodError::io_operation("walk", absolute.display(), e)
                    })?;
                    if entry.file_type().is_file()
                        && entry.path().extension().and_then(|e| e.to_str())
                            == Some(DOCUMENT_EXTENSION)
                    {
                        documents.push(entry.into_path());
                    }
                }
            } else if absolute.is_file() {
                documents.push(absolute);
            } else {
                return Err(LastmodError::DocumentNotFound { path: absolute });
            }
        }

        documents.sort();
        documents.dedup();
        Ok(documents)
    }

    /// Read and parse one document
    pub fn read(&self, path: &Path) -> Result<Document> {
        let absolute = self.resolve(path);
        if !absolute.is_file() {
            return Err(LastmodError::DocumentNotFound { path: absolute });
        }
        let content = fs::read_to_string(&absolute)
            .map_err(|e| LastmodError::io_operation("read", absolute.display(), e))?;
        Document::parse(&absolute, &content)
    }

    /// Exclusive read-modify-write of one document
    ///
    /// `f` returns its result and whether it changed the document. The file
    /// is rewritten only in the latter case. Symlinks are resolved first so
    /// the link stays in place and its target receives the new content.
    pub fn modify<T>(
        &self,
        path: &Path,
        f: impl FnOnce(&mut Document) -> Result<(T, bool)>,
    ) -> Result<T> {
        let absolute = self.resolve(path);
        let target = absolute.canonicalize().unwrap_or(absolute);
        self.locks.with_lock(&target, || {
            let mut document = self.read(&target)?;
            let (value, changed) = f(&mut document)?;
            if changed {
                write_atomic(&target, &document.render()?)?;
            }
            Ok(value)
        })
    }

    /// Apply the stamping policy to one document and persist the result
    pub fn stamp(
        &self,
        path: &Path,
        now: NaiveDateTime,
        config: &StampConfig,
    ) -> Result<StampReport> {
        self.stamp_inner(path, now, config, true)
    }

    /// Like [`Vault::stamp`], but never writes
    pub fn preview(
        &self,
        path: &Path,
        now: NaiveDateTime,
        config: &StampConfig,
    ) -> Result<StampReport> {
        self.stamp_inner(path, now, config, false)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.display(), persist = persist))]
    fn stamp_inner(
        &self,
        path: &Path,
        now: NaiveDateTime,
        config: &StampConfig,
        persist: bool,
    ) -> Result<StampReport> {
        let relative = self.relative_path(path)?;

        if relative.split('/').next() == Some(VAULT_CONFIG_DIR)
            || is_ignored(&relative, config.ignored_folders())
        {
            tracing::debug!(path = %relative, "skipping ignored document");
            return Ok(StampReport {
                path: relative,
                action: Action::Ignored,
                mutated: false,
                log: None,
            });
        }

        self.modify(path, |document| {
            let outcome = engine::apply(&relative, document.last_modified(), now, config);
            if outcome.mutated && persist {
                document.set_last_modified(&outcome.log);
            }
            let mutated = outcome.mutated;
            Ok((
                StampReport {
                    path: relative.clone(),
                    action: outcome.action,
                    mutated,
                    log: Some(outcome.log),
                },
                mutated && persist,
            ))
        })
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Write through a sibling temp file so readers never see partial content
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LastmodError::io_operation("write", path.display(), "not a file path"))?;
    let tmp = path.with_file_name(format!(".{}.lastmod-tmp", file_name.to_string_lossy()));

    if let Err(e) = fs::write(&tmp, content) {
        let _ = fs::remove_file(&tmp);
        return Err(LastmodError::io_operation("write", tmp.display(), e));
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        LastmodError::io_operation("replace", path.display(), e)
    })
}
