use anyhow::{Context, Result};
use log::{debug, info};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Resolves the root directory a tool operates on.
///
/// Falls back to the current directory when no root was given; the result
/// is canonicalized so every path derived from it is absolute.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match root {
        Some(r) => {
            debug!("Using provided root directory: {:?}", r);
            r
        }
        None => {
            debug!("No root provided, using current directory");
            env::current_dir().context("Failed to read current directory")?
        }
    };

    let root = root
        .canonicalize()
        .with_context(|| format!("Root directory {} is not accessible", root.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Root {} is not a directory", root.display());
    }
    info!("Using root directory: {}", root.display());
    Ok(root)
}

/// Displays `path` relative to `root` with `/` separators, or as-is when it
/// lies outside `root`.
pub fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).to_string_lossy().replace('\\', "/")
}
