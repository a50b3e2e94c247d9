use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace, warn};
use std::path::PathBuf;

use crate::constants::is_source_extension;

pub struct WalkConfig {
    pub root: PathBuf,
    /// Honor .gitignore/.ignore files instead of visiting every file
    pub respect_ignore: bool,
}

/// Collects every source file under `cfg.root`, recursing into all subdirectories.
///
/// Entries are sorted by file name within each directory so repeated walks
/// over an unchanged tree return the same order.
pub fn collect_sources(cfg: &WalkConfig) -> Result<Vec<PathBuf>> {
    let root = &cfg.root;
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .standard_filters(cfg.respect_ignore)
        .hidden(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files: Vec<PathBuf> = Vec::new();
    for res in walker {
        let dent = match res {
            Ok(dent) => dent,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        if let Some(ext) = p.extension().and_then(|e| e.to_str())
            && is_source_extension(ext)
        {
            trace!("Found source file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }
    debug!("Collected {} source files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn walk(root: &Path) -> Vec<PathBuf> {
        let cfg = WalkConfig { root: root.to_path_buf(), respect_ignore: false };
        let mut files = collect_sources(&cfg).unwrap();
        files.sort();
        files
    }

    #[test]
    fn test_collects_nested_js_and_jsx() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let a = create_test_file(root, "a.js", "");
        let b = create_test_file(root, "src/components/B.jsx", "");
        let c = create_test_file(root, "src/deep/er/c.js", "");

        let mut expected = vec![a, b, c];
        expected.sort();
        assert_eq!(walk(root), expected);
    }

    #[test]
    fn test_skips_other_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "readme.md", "");
        create_test_file(root, "types.ts", "");
        create_test_file(root, "data.json", "{}");
        let kept = create_test_file(root, "main.js", "");

        assert_eq!(walk(root), vec![kept]);
    }

    #[test]
    fn test_includes_hidden_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let hidden = create_test_file(root, ".storybook/main.js", "");

        assert_eq!(walk(root), vec![hidden]);
    }

    #[test]
    fn test_ignores_directories_named_like_sources() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("weird.js")).unwrap();
        let inner = create_test_file(root, "weird.js/inner.js", "");

        assert_eq!(walk(root), vec![inner]);
    }

    #[test]
    fn test_walk_order_is_stable() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for name in ["z.js", "a.js", "m/b.js", "m/a.jsx"] {
            create_test_file(root, name, "");
        }
        let cfg = WalkConfig { root: root.to_path_buf(), respect_ignore: false };
        let first = collect_sources(&cfg).unwrap();
        let second = collect_sources(&cfg).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }
}
