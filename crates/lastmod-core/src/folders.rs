//! Ignored-folder matching

/// True when `document_path` lies under one of `ignored_folders`
///
/// Paths are vault-relative with `/` separators. The comparison includes the
/// trailing separator, so `Arch` does not cover `Archive/note.md`, and an
/// empty entry never matches.
pub fn is_ignored<S: AsRef<str>>(document_path: &str, ignored_folders: &[S]) -> bool {
    ignored_folders.iter().any(|folder| {
        let folder = folder.as_ref();
        !folder.is_empty()
            && document_path.len() > folder.len()
            && document_path.starts_with(folder)
            && document_path.as_bytes()[folder.len()] == b'/'
    })
}
