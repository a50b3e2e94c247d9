use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "barrel")]
#[command(about = "Regenerate index.js barrels for service directories")]
pub struct Config {
    /// Directory to search for service folders
    #[arg(long, default_value = "src")]
    pub root: PathBuf,

    /// File name suffix that marks a directory as needing a barrel
    #[arg(long, default_value = "Service.js")]
    pub marker: String,
}

impl Config {
    /// Initialize the config by canonicalizing the root directory
    pub fn initialize(&mut self) -> Result<()> {
        self.root = importfix_core::resolve_root(Some(self.root.clone()))?;
        Ok(())
    }
}
