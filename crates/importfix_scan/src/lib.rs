//! Import/export inventory for JavaScript projects.
//!
//! Walks a project tree, records every import and export statement it can
//! recognize, and saves the two inventories as JSON reports.
//!
//! # Examples
//!
//! ```no_run
//! use importfix_scan::{Config, run_scan, write_reports};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/project")),
//!     imports_out: "imports.json".into(),
//!     exports_out: "exports.json".into(),
//!     respect_ignore: false,
//! };
//!
//! let result = run_scan(cfg.clone())?;
//! write_reports(&result, &cfg)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod report;
mod scanner;
mod types;

// Re-export public API
pub use config::Config;
pub use report::{print_summary, write_reports};
pub use scanner::run_scan;
pub use types::{ExportEntry, ImportEntry, ScanResult};
