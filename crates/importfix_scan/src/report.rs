use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info};
use serde::Serialize;
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use crate::{config::Config, types::ScanResult};

/// Writes the `imports` and `exports` inventories as pretty-printed JSON.
pub fn write_reports(result: &ScanResult, cfg: &Config) -> Result<()> {
    write_json(&cfg.imports_out, &result.imports)?;
    write_json(&cfg.exports_out, &result.exports)?;
    info!("Saved reports to {} and {}", cfg.imports_out.display(), cfg.exports_out.display());
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    debug!("Writing {} records to {}", rows.len(), path.display());
    let mut json = serde_json::to_string_pretty(rows)
        .with_context(|| format!("Failed to serialize report for {}", path.display()))?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn print_summary<W: Write>(
    writer: &mut W,
    result: &ScanResult,
    cfg: &Config,
) -> io::Result<()> {
    writeln!(
        writer,
        "{} Found {} imports and {} exports.",
        "●".bright_blue(),
        result.imports.len().to_string().cyan(),
        result.exports.len().to_string().cyan()
    )?;
    writeln!(
        writer,
        "Saved to {} and {}",
        cfg.imports_out.display().to_string().blue(),
        cfg.exports_out.display().to_string().blue()
    )?;
    writer.flush()?;
    Ok(())
}
