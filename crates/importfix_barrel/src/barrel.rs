use anyhow::{Context, Result};
use colored::Colorize;
use ignore::WalkBuilder;
use log::{debug, info, trace, warn};
use std::{
    collections::BTreeSet,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use importfix_core::display_relative;

use crate::config::Config;

const BARREL_FILE: &str = "index.js";

#[derive(Debug, Clone)]
pub struct BarrelResult {
    /// Canonical root the run operated on
    pub root: PathBuf,
    /// Barrel files that were (re)written
    pub barrels: Vec<PathBuf>,
    pub directories_scanned: usize,
}

pub fn run_barrel(mut cfg: Config) -> Result<BarrelResult> {
    info!("Starting barrel regeneration");
    cfg.initialize()?;

    let walker = WalkBuilder::new(&cfg.root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut barrels = Vec::new();
    let mut directories_scanned = 0;
    for res in walker {
        let dent = match res {
            Ok(dent) => dent,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !dent.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }
        directories_scanned += 1;

        match regenerate_dir(dent.path(), &cfg.marker) {
            Ok(Some(barrel)) => barrels.push(barrel),
            Ok(None) => {}
            Err(e) => warn!("Skipping {}: {:#}", dent.path().display(), e),
        }
    }

    info!("Regenerated {} barrels in {} directories", barrels.len(), directories_scanned);
    Ok(BarrelResult { root: cfg.root, barrels, directories_scanned })
}

/// Writes `dir/index.js` when `dir` holds a file ending in `marker`.
fn regenerate_dir(dir: &Path, marker: &str) -> Result<Option<PathBuf>> {
    let files = file_names(dir)?;
    if !files.iter().any(|f| f.ends_with(marker)) {
        trace!("No '{}' file in {}", marker, dir.display());
        return Ok(None);
    }

    let lines = barrel_lines(&files);
    if lines.is_empty() {
        return Ok(None);
    }

    let barrel = dir.join(BARREL_FILE);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&barrel, content).with_context(|| format!("Failed to write {}", barrel.display()))?;
    debug!("Wrote {} re-exports to {}", lines.len(), barrel.display());
    Ok(Some(barrel))
}

fn file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    Ok(names)
}

/// Re-export lines for every `.js` sibling except the barrel itself,
/// deduplicated and sorted.
pub(crate) fn barrel_lines(file_names: &[String]) -> Vec<String> {
    let mut lines = BTreeSet::new();
    for file in file_names {
        if file == BARREL_FILE {
            continue;
        }
        let Some(name) = file.strip_suffix(".js") else {
            continue;
        };
        lines.insert(format!("export * from './{}';", name));
        lines.insert(format!("export {{ default as {} }} from './{}';", name, name));
    }
    lines.into_iter().collect()
}

pub fn print_barrels<W: Write>(writer: &mut W, result: &BarrelResult) -> io::Result<()> {
    for barrel in &result.barrels {
        let dir = barrel.parent().unwrap_or(barrel);
        writeln!(writer, "{} {}", "[FIX]".green().bold(), display_relative(&result.root, dir))?;
    }
    writeln!(
        writer,
        "\n{} Regenerated {} barrels ({} directories scanned).",
        "●".bright_blue(),
        result.barrels.len().to_string().cyan(),
        result.directories_scanned.to_string().cyan()
    )?;
    writer.flush()?;
    Ok(())
}
