// Path conversion for record paths
//
// Records store paths relative to the scan root with `/` separators on every
// platform, so reports from different machines compare equal.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Convert a path under `root` to a relative, forward-slash path
///
/// Both paths are canonicalized when possible so symlinked roots
/// (`/var` -> `/private/var` on macOS) still strip cleanly.
pub fn to_relative_unix_style(path: &Path, root: &Path) -> Result<String> {
    let (path, root) = match (path.canonicalize(), root.canonicalize()) {
        (Ok(path), Ok(root)) => (strip_unc_prefix(path), strip_unc_prefix(root)),
        _ => (path.to_path_buf(), root.to_path_buf()),
    };

    let relative = path.strip_prefix(&root).with_context(|| {
        format!(
            "File path '{}' is not within scan root '{}'",
            path.display(),
            root.display()
        )
    })?;

    let relative = relative.to_str().context("Path contains invalid UTF-8")?;
    Ok(relative.replace('\\', "/"))
}

// Canonical Windows paths carry a `\\?\` prefix that plain paths lack
#[cfg(windows)]
fn strip_unc_prefix(path: PathBuf) -> PathBuf {
    match path.to_str().and_then(|p| p.strip_prefix(r"\\?\")) {
        Some(stripped) => PathBuf::from(stripped),
        None => path,
    }
}

#[cfg(not(windows))]
fn strip_unc_prefix(path: PathBuf) -> PathBuf {
    path
}
