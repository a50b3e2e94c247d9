use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fix")]
#[command(about = "Repair relative imports of moved files and check named imports")]
pub struct Config {
    /// Root directory of the project
    pub root: PathBuf,

    /// Report what would change without rewriting any file
    #[arg(long)]
    pub dry_run: bool,

    /// Skip files excluded by .gitignore/.ignore
    #[arg(long)]
    pub respect_ignore: bool,
}

impl Config {
    /// Initialize the config by canonicalizing the root directory
    pub fn initialize(&mut self) -> Result<()> {
        self.root = importfix_core::resolve_root(Some(self.root.clone()))?;
        Ok(())
    }
}
