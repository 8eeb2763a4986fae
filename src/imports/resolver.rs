// src/imports/resolver.rs
use std::path::{Path, PathBuf};

/// Resolves a relative import to the sibling file it names.
///
/// The extension is appended to the specifier as written, so `./shapes`
/// becomes `<dir>/./shapes.ts`. Returns `None` for package specifiers and for
/// files that do not exist.
#[must_use]
pub fn resolve(current_file: &Path, import: &str, extension: &str) -> Option<PathBuf> {
    if !super::extract::is_relative(import) {
        return None;
    }
    let candidate = candidate_path(current_file, import, extension);
    candidate.is_file().then_some(candidate)
}

/// The path a relative import would point at, whether or not it exists.
#[must_use]
pub fn candidate_path(current_file: &Path, import: &str, extension: &str) -> PathBuf {
    let parent = current_file.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{import}.{extension}"))
}
