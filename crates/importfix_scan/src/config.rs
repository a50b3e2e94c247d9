use anyhow::{Result, anyhow};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "scan")]
#[command(about = "Inventory import and export statements in a JavaScript project")]
pub struct Config {
    /// Root directory of the project (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output file for the import inventory
    #[arg(long, default_value = "imports.json")]
    pub imports_out: PathBuf,

    /// Output file for the export inventory
    #[arg(long, default_value = "exports.json")]
    pub exports_out: PathBuf,

    /// Skip files excluded by .gitignore/.ignore
    #[arg(long)]
    pub respect_ignore: bool,
}

impl Config {
    /// Initialize the config by resolving the root directory
    pub fn initialize(&mut self) -> Result<()> {
        self.root = Some(importfix_core::resolve_root(self.root.take())?);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}
