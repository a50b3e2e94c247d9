//! Pattern-based recognition of import and export statements.
//!
//! Matching is textual and does not build a syntax tree. Statement-like text
//! inside string literals or comments may be picked up, and statements split
//! in unusual places may be missed. Invalid syntax is never rejected.

use anyhow::{Context, Result};
use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::{fs, path::Path};

use crate::types::{ExportRecord, ImportMatch};

// Binding and side-effect imports share one pattern so that the two shapes
// can never both match the same statement.
static IMPORT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\bimport\s+(?:(?P<what>[\w$*\s{},]+?)\s*\bfrom\s*|)["'](?P<source>[^"'\n]+)["']"#,
    )
    .unwrap()
});

static EXPORT_NAMED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bexport\s+(?:(?:const|let|var|class)\s+|(?:async\s+)?function\b\s*\*?\s*)(?P<name>[A-Za-z_$][\w$]*)",
    )
    .unwrap()
});

static EXPORT_DEFAULT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bexport\s+default\b\s*(?:async\s+)?(?:function\b\s*\*?\s*|class\b\s*)?(?P<name>[A-Za-z_$][\w$]*)?",
    )
    .unwrap()
});

static EXPORT_LIST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\bexport\s*\{(?P<names>[^}]*)\}(?:\s*from\s*["'](?P<from>[^"'\n]+)["'])?"#)
        .unwrap()
});

static EXPORT_STAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\bexport\s*\*\s*(?:as\s+(?P<alias>[A-Za-z_$][\w$]*)\s*)?from\s*["'](?P<from>[^"'\n]+)["']"#,
    )
    .unwrap()
});

/// Words that can follow `export default` without naming the export.
const DEFAULT_NON_NAMES: &[&str] = &["extends", "new", "await", "typeof", "void", "async"];

/// Reads a source file as UTF-8 text.
pub fn try_read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Reads a source file, treating unreadable or undecodable files as empty.
pub fn read_source(path: &Path) -> String {
    match try_read_source(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("{:#}", e);
            String::new()
        }
    }
}

/// Finds every import statement in `text`, in document order.
pub fn imports_in(text: &str) -> Vec<ImportMatch> {
    let imports: Vec<ImportMatch> = IMPORT_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let source = caps.name("source")?;
            let what = caps.name("what").map(|m| m.as_str().trim().to_string());
            trace!("Found import of '{}' (bindings: {:?})", source.as_str(), what);
            Some(ImportMatch {
                source: source.as_str().to_string(),
                what,
                source_span: source.range(),
            })
        })
        .collect();

    debug!("Matched {} import statements", imports.len());
    imports
}

/// Finds every export statement in `text`, in document order.
pub fn exports_in(text: &str) -> Vec<ExportRecord> {
    let mut found: Vec<(usize, ExportRecord)> = Vec::new();

    for caps in EXPORT_NAMED_PATTERN.captures_iter(text) {
        if let Some(name) = caps.name("name") {
            found.push((start_of(&caps), ExportRecord::Named { name: name.as_str().to_string() }));
        }
    }

    for caps in EXPORT_DEFAULT_PATTERN.captures_iter(text) {
        let name = caps
            .name("name")
            .map(|m| m.as_str())
            .filter(|n| !DEFAULT_NON_NAMES.contains(n))
            .map(str::to_string);
        found.push((start_of(&caps), ExportRecord::Default { name }));
    }

    for caps in EXPORT_LIST_PATTERN.captures_iter(text) {
        let names: Vec<String> = caps
            .name("names")
            .map(|m| m.as_str())
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            trace!("Skipping empty export list");
            continue;
        }
        let from = caps.name("from").map(|m| m.as_str().to_string());
        found.push((start_of(&caps), ExportRecord::List { names, from }));
    }

    for caps in EXPORT_STAR_PATTERN.captures_iter(text) {
        if let Some(from) = caps.name("from") {
            let alias = caps.name("alias").map(|m| m.as_str().to_string());
            found.push((
                start_of(&caps),
                ExportRecord::Star { alias, from: from.as_str().to_string() },
            ));
        }
    }

    found.sort_by_key(|(start, _)| *start);
    debug!("Matched {} export statements", found.len());
    found.into_iter().map(|(_, record)| record).collect()
}

fn start_of(caps: &Captures) -> usize {
    caps.get(0).map(|m| m.start()).unwrap_or_default()
}
