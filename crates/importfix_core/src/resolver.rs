use log::{debug, trace};
use path_clean::clean;
use std::{
    ffi::OsString,
    path::{Component, Path, PathBuf},
};

use crate::constants::{INDEX_FILES, RESOLVE_SUFFIXES, SOURCE_EXTENSIONS, is_source_extension};

/// Returns true for specifiers that point at a local file (`./`, `../`, `.`, `..`).
pub fn is_relative(request: &str) -> bool {
    request == "."
        || request == ".."
        || request.starts_with("./")
        || request.starts_with("../")
}

/// Resolves a relative specifier against the importing file's directory.
///
/// Candidates are tried in `RESOLVE_SUFFIXES` order and the first existing
/// file wins. Bare specifiers are never resolved.
pub fn resolve(from_file: &Path, request: &str) -> Option<PathBuf> {
    if !is_relative(request) {
        trace!("Not resolving bare specifier '{}'", request);
        return None;
    }
    trace!("Resolving: '{}' from {}", request, from_file.display());

    let base = from_file.parent().unwrap_or_else(|| Path::new("."));
    let joined = clean(base.join(request));

    for suffix in RESOLVE_SUFFIXES {
        let candidate = with_suffix(&joined, suffix);
        if candidate.is_file() {
            trace!("Resolved '{}' to {}", request, candidate.display());
            return Some(candidate.canonicalize().unwrap_or(candidate));
        }
    }

    debug!("Failed to resolve '{}' from {}", request, from_file.display());
    None
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(suffix);
    PathBuf::from(s)
}

/// File names a missing import target may have been moved to, in priority order.
///
/// A name that already carries a source extension is searched verbatim.
pub fn name_candidates(name: &str) -> Vec<PathBuf> {
    let has_ext =
        Path::new(name).extension().and_then(|e| e.to_str()).is_some_and(is_source_extension);
    if has_ext {
        return vec![PathBuf::from(name)];
    }

    let mut candidates: Vec<PathBuf> =
        SOURCE_EXTENSIONS.iter().map(|ext| PathBuf::from(format!("{}.{}", name, ext))).collect();
    candidates.extend(INDEX_FILES.iter().map(|index_file| Path::new(name).join(index_file)));
    candidates
}

/// Finds the first file in `files` whose trailing path components match a
/// candidate from [`name_candidates`].
///
/// Candidate priority wins over file order; within one candidate the first
/// file in `files` wins.
pub fn find_by_name<'a>(files: &'a [PathBuf], name: &str) -> Option<&'a PathBuf> {
    for candidate in name_candidates(name) {
        if let Some(found) = files.iter().find(|f| f.ends_with(&candidate)) {
            trace!("Found '{}' at {}", candidate.display(), found.display());
            return Some(found);
        }
    }
    debug!("No file named '{}' in {} candidates", name, files.len());
    None
}

/// Builds an import specifier leading from `from_dir` to `target`.
///
/// Separators are normalized to `/` and the result always starts with a
/// relative marker.
pub fn relative_specifier(from_dir: &Path, target: &Path) -> Option<String> {
    let rel = make_relative(target, from_dir)?;
    let rel = rel.to_string_lossy().replace('\\', "/");
    if rel == "." || rel == ".." || rel.starts_with("./") || rel.starts_with("../") {
        Some(rel)
    } else {
        Some(format!("./{}", rel))
    }
}

/// Create a relative path from `base` to `target`
pub fn make_relative(target: &Path, base: &Path) -> Option<PathBuf> {
    let mut target_components = target.components();
    let mut base_components = base.components();

    let mut common_prefix_len = 0;
    let mut target_parts = Vec::new();
    let mut base_parts = Vec::new();

    loop {
        match (target_components.next(), base_components.next()) {
            (Some(t), Some(b)) if t == b => {
                common_prefix_len += 1;
            }
            (Some(t), Some(b)) => {
                target_parts.push(t);
                base_parts.push(b);
                break;
            }
            (Some(t), None) => {
                target_parts.push(t);
                break;
            }
            (None, Some(b)) => {
                // target is an ancestor of base
                base_parts.push(b);
                break;
            }
            (None, None) => {
                return Some(PathBuf::from("."));
            }
        }
    }

    target_parts.extend(target_components);
    base_parts.extend(base_components);

    if common_prefix_len == 0 && target.components().next() != base.components().next() {
        return None;
    }

    // "../" for each remaining base component, then the rest of target
    let mut result = PathBuf::new();
    for _ in &base_parts {
        result.push("..");
    }
    for component in target_parts {
        match component {
            Component::Normal(p) => result.push(p),
            Component::CurDir => {}
            Component::ParentDir => result.push(".."),
            Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if result.as_os_str().is_empty() { Some(PathBuf::from(".")) } else { Some(result) }
}
