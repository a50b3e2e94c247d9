use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use std::{
    fs,
    ops::Range,
    path::{Path, PathBuf},
};

use importfix_core::{
    ImportMatch, WalkConfig, collect_sources, find_by_name, imports_in, is_relative,
    is_source_extension, relative_specifier, resolve, try_read_source,
};

use crate::{
    config::Config,
    exports::ExportIndex,
    types::{Diagnostic, FixResult},
};

pub fn run_fix(mut cfg: Config) -> Result<FixResult> {
    info!("Starting import fix");

    cfg.initialize()?;
    let root = cfg.root.clone();

    // Snapshot of the tree; files created or removed during the run are not seen
    let files =
        collect_sources(&WalkConfig { root: root.clone(), respect_ignore: cfg.respect_ignore })?;
    if files.is_empty() {
        warn!("No source files found under {}", root.display());
    }
    info!("Checking {} source files", files.len());

    let mut fixer = Fixer { files: &files, exports: ExportIndex::default(), dry_run: cfg.dry_run };
    let mut diagnostics = Vec::new();
    let mut files_modified = Vec::new();

    for file in &files {
        match fixer.fix_file(file, &mut diagnostics) {
            Ok(true) => files_modified.push(file.clone()),
            Ok(false) => {}
            Err(e) => warn!("Skipping {}: {:#}", file.display(), e),
        }
    }

    info!(
        "Import fix complete. {} diagnostics, {} files modified",
        diagnostics.len(),
        files_modified.len()
    );
    Ok(FixResult { root, diagnostics, files_analyzed: files.len(), files_modified })
}

struct Fixer<'a> {
    files: &'a [PathBuf],
    exports: ExportIndex,
    dry_run: bool,
}

impl Fixer<'_> {
    /// Checks every import in `file`, rewriting it in place when a relative
    /// specifier was repaired. Returns whether the content changed.
    fn fix_file(&mut self, file: &Path, diagnostics: &mut Vec<Diagnostic>) -> Result<bool> {
        trace!("Processing: {}", file.display());
        let text = try_read_source(file)?;

        let mut replacements: Vec<(Range<usize>, String)> = Vec::new();
        for import in imports_in(&text) {
            if !is_relative(&import.source) {
                trace!("Skipping bare specifier '{}'", import.source);
                continue;
            }

            if let Some(target) = resolve(file, &import.source) {
                self.check_named(file, &import, &target, diagnostics);
                continue;
            }

            match self.repair(file, &import.source) {
                Some(new) => {
                    debug!("Rewriting '{}' to '{}' in {}", import.source, new, file.display());
                    diagnostics.push(Diagnostic::Fixed {
                        file: file.to_path_buf(),
                        old: import.source.clone(),
                        new: new.clone(),
                    });
                    replacements.push((import.source_span.clone(), new));
                }
                None => diagnostics.push(Diagnostic::Unresolved {
                    file: file.to_path_buf(),
                    specifier: import.source.clone(),
                }),
            }
        }

        if replacements.is_empty() {
            return Ok(false);
        }

        let updated = splice(&text, &replacements);
        if self.dry_run {
            debug!("Dry run, not writing {}", file.display());
        } else {
            fs::write(file, updated)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            debug!("Rewrote {} imports in {}", replacements.len(), file.display());
        }
        Ok(true)
    }

    fn check_named(
        &mut self,
        file: &Path,
        import: &ImportMatch,
        target: &Path,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let named = import.named();
        if named.is_empty() {
            return;
        }

        let exported = self.exports.exports_of(target);
        for name in named {
            if !exported.contains(&name) {
                trace!("'{}' missing from {}", name, target.display());
                diagnostics.push(Diagnostic::NotExported {
                    file: file.to_path_buf(),
                    name,
                    target: target.to_path_buf(),
                });
            }
        }
    }

    /// Looks for the missing target by file name anywhere in the tree and
    /// builds a specifier pointing at it from `file`.
    fn repair(&self, file: &Path, request: &str) -> Option<String> {
        let name = Path::new(request).file_name()?.to_str()?;
        let found = find_by_name(self.files, name)?;

        // Keep the extension only when the original specifier spelled one out
        let keep_ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(is_source_extension);
        let target = if keep_ext {
            found.clone()
        } else if found.file_stem().and_then(|s| s.to_str()) == Some(name) {
            found.with_extension("")
        } else {
            // matched `<name>/index.*`, point at the directory
            found.parent()?.to_path_buf()
        };

        relative_specifier(file.parent()?, &target)
    }
}

/// Applies non-overlapping replacements given in ascending order.
fn splice(text: &str, replacements: &[(Range<usize>, String)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (range, new) in replacements {
        out.push_str(&text[last..range.start]);
        out.push_str(new);
        last = range.end;
    }
    out.push_str(&text[last..]);
    out
}
