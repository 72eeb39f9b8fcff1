//! Destination containment checks.
//!
//! A template file may only land inside the destination root. Relative paths
//! are normalized lexically first; the deepest existing ancestor of each
//! target is then resolved on disk so a symlinked directory cannot redirect a
//! write outside the root.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a relative path.
///
/// Returns `None` for absolute paths, paths with a drive prefix, paths that
/// climb above their starting point, and paths that normalize to nothing.
pub fn normalize_relative(path: &Path) -> Option<PathBuf> {
    let mut parts: Vec<&std::ffi::OsStr> = Vec::new();

    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if parts.is_empty() {
        return None;
    }
    Some(parts.iter().collect())
}

/// Check that `target` resolves inside `canonical_root` on disk.
///
/// `canonical_root` must already be canonicalized. A dangling symlink on the
/// way counts as outside, since its destination cannot be verified.
/// Errors only come from canonicalizing an existing ancestor.
pub fn resolves_within(canonical_root: &Path, target: &Path) -> io::Result<bool> {
    let mut current = Some(target);

    while let Some(path) = current {
        match fs::symlink_metadata(path) {
            Ok(_) => {
                return match path.canonicalize() {
                    Ok(real) => Ok(real.starts_with(canonical_root)),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
                    Err(e) => Err(e),
                };
            }
            // Missing, or a non-directory ancestor: keep climbing. Writing
            // reports the real error later.
            Err(_) => current = path.parent(),
        }
    }

    Ok(false)
}
