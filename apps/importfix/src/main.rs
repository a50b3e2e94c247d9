use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "importfix")]
#[command(about = "Tools for keeping JavaScript imports and exports in order", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write imports/exports inventories of a project as JSON
    Scan(importfix_scan::Config),
    /// Repair relative imports of moved files and check named imports
    Fix(importfix_fix::Config),
    /// Regenerate index.js barrels for service directories
    Barrel(importfix_barrel::Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Scan(cfg) => {
            info!("Running scan, writing {:?} and {:?}", cfg.imports_out, cfg.exports_out);

            let result = importfix_scan::run_scan(cfg.clone())?;
            importfix_scan::write_reports(&result, &cfg)?;
            importfix_scan::print_summary(&mut stdout, &result, &cfg)?;

            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files.",
                "●".bright_blue(),
                start.elapsed().as_millis().to_string().cyan(),
                result.files_scanned.to_string().cyan()
            )?;
        }
        Commands::Fix(cfg) => {
            info!("Running import fix on {} (dry run: {})", cfg.root.display(), cfg.dry_run);

            let result = importfix_fix::run_fix(cfg.clone())?;
            debug!("Found {} diagnostics", result.diagnostics.len());

            importfix_fix::print_diagnostics(&mut stdout, &result.diagnostics, &result.root)?;
            importfix_fix::print_summary(&mut stdout, &result, cfg.dry_run)?;

            writeln!(
                stdout,
                "{} Finished in {}ms.",
                "●".bright_blue(),
                start.elapsed().as_millis().to_string().cyan()
            )?;
        }
        Commands::Barrel(cfg) => {
            info!(
                "Running barrel regeneration under {} (marker: {})",
                cfg.root.display(),
                cfg.marker
            );

            let result = importfix_barrel::run_barrel(cfg)?;
            importfix_barrel::print_barrels(&mut stdout, &result)?;
        }
    }

    stdout.flush()?;
    Ok(())
}
