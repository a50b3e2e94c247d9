use anyhow::Result;
use log::{debug, info, trace, warn};
use std::path::Path;

use importfix_core::{
    WalkConfig, collect_sources, display_relative, exports_in, imports_in, read_source,
};

use crate::{
    config::Config,
    types::{ExportEntry, ImportEntry, ScanResult},
};

pub fn run_scan(mut cfg: Config) -> Result<ScanResult> {
    info!("Starting import/export scan");

    cfg.initialize()?;
    let root = cfg.root()?.clone();

    let files = collect_sources(&WalkConfig {
        root: root.clone(),
        respect_ignore: cfg.respect_ignore,
    })?;
    if files.is_empty() {
        warn!("No source files found under {}", root.display());
    }
    info!("Scanning {} source files", files.len());

    let mut imports = Vec::new();
    let mut exports = Vec::new();
    for file in &files {
        let (file_imports, file_exports) = scan_file(&root, file);
        trace!(
            "{}: {} imports, {} exports",
            file.display(),
            file_imports.len(),
            file_exports.len()
        );
        imports.extend(file_imports);
        exports.extend(file_exports);
    }

    info!("Scan complete. Found {} imports and {} exports", imports.len(), exports.len());
    Ok(ScanResult { imports, exports, files_scanned: files.len() })
}

/// Inventories one file. An unreadable file contributes nothing.
pub(crate) fn scan_file(root: &Path, path: &Path) -> (Vec<ImportEntry>, Vec<ExportEntry>) {
    let text = read_source(path);
    if text.is_empty() {
        debug!("Nothing to scan in {}", path.display());
        return (Vec::new(), Vec::new());
    }
    let file = display_relative(root, path);

    let imports = imports_in(&text)
        .into_iter()
        .map(|m| ImportEntry { file: file.clone(), source: m.source, what: m.what })
        .collect();

    let exports = exports_in(&text)
        .into_iter()
        .map(|export| ExportEntry { file: file.clone(), export })
        .collect();

    (imports, exports)
}
