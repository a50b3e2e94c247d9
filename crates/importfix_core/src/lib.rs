//! Core utilities for importfix tools.
//!
//! This crate provides the shared pieces for analyzing JavaScript projects:
//! - Recognizing import/export statements in source text
//! - Walking a project tree for source files
//! - Resolving relative specifiers and locating moved files by name
//! - Root directory handling

mod collector;
mod config;
mod constants;
mod parser;
mod resolver;
mod types;

// Re-export public API
pub use collector::{WalkConfig, collect_sources};
pub use config::{display_relative, resolve_root};
pub use constants::{INDEX_FILES, RESOLVE_SUFFIXES, SOURCE_EXTENSIONS, is_source_extension};
pub use parser::{exports_in, imports_in, read_source, try_read_source};
pub use resolver::{
    find_by_name, is_relative, make_relative, name_candidates, relative_specifier, resolve,
};
pub use types::{ExportRecord, ImportMatch};
