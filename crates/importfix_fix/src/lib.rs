//! Relative import repair for JavaScript projects.
//!
//! For every relative import in a project tree this crate either confirms
//! that it resolves (checking each `{ named }` import against the target's
//! exports) or looks for a same-named file elsewhere in the tree and
//! rewrites the specifier to point at it.
//!
//! # Examples
//!
//! ```no_run
//! use importfix_fix::{Config, run_fix};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: std::path::PathBuf::from("/path/to/project"),
//!     dry_run: true,
//!     respect_ignore: false,
//! };
//!
//! let result = run_fix(cfg.clone())?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! importfix_fix::print_diagnostics(&mut stdout, &result.diagnostics, &result.root)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod exports;
mod fixer;
mod reporter;
mod types;

// Re-export public API
pub use config::Config;
pub use fixer::run_fix;
pub use reporter::{print_diagnostics, print_summary};
pub use types::{Diagnostic, FixResult};
