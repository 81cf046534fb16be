//! Saving a quote to disk without leaving the working directory.
//!
//! The destination is resolved the way the OS would follow it (symlinks and
//! `..` included) and must land inside the base directory, otherwise nothing
//! is written.
use std::fs;
use std::path::{Path, PathBuf};

use inspire_common::{InspireError, Result};
use log::debug;

/// Resolves `file` against `base` and checks it stays under `base`.
pub fn resolve_within(base: &Path, file: &Path) -> Result<PathBuf> {
    let base = base.canonicalize()?;
    let resolved = resolve(&base.join(file))?;

    if !resolved.starts_with(&base) {
        return Err(InspireError::PathEscape {
            path: file.to_path_buf(),
            base,
        });
    }
    Ok(resolved)
}

/// Writes `citation` and a trailing newline to `file`, relative to `base`.
///
/// Returns the absolute path written to.
pub fn save(citation: &str, file: &Path, base: &Path) -> Result<PathBuf> {
    let path = resolve_within(base, file)?;
    fs::write(&path, format!("{citation}\n"))?;
    debug!("Quote written to {}", path.display());
    Ok(path)
}

/// Canonicalizes the longest existing prefix of `path` and appends the rest.
///
/// A dangling symlink counts as existing, so canonicalizing it fails instead
/// of letting the write follow it.
fn resolve(path: &Path) -> Result<PathBuf> {
    let mut prefix = path.to_path_buf();
    let mut missing = Vec::new();

    while prefix.symlink_metadata().is_err() {
        match (prefix.file_name(), prefix.parent()) {
            (Some(name), Some(parent)) => {
                missing.push(name.to_os_string());
                prefix = parent.to_path_buf();
            }
            _ => break,
        }
    }

    let mut resolved = prefix.canonicalize()?;
    for name in missing.into_iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}
