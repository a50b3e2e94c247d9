use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A relative import was rewritten to point at the file's new location
    Fixed { file: PathBuf, old: String, new: String },
    /// A named import is missing from the resolved target's exports
    NotExported { file: PathBuf, name: String, target: PathBuf },
    /// A relative import matches no file anywhere in the tree
    Unresolved { file: PathBuf, specifier: String },
}

impl Diagnostic {
    pub fn file(&self) -> &Path {
        match self {
            Diagnostic::Fixed { file, .. }
            | Diagnostic::NotExported { file, .. }
            | Diagnostic::Unresolved { file, .. } => file.as_path(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Diagnostic::Fixed { .. })
    }
}

#[derive(Debug, Clone)]
pub struct FixResult {
    /// Canonical root the run operated on
    pub root: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    pub files_analyzed: usize,
    /// Files whose content changed (not written back in dry-run mode)
    pub files_modified: Vec<PathBuf>,
}

impl FixResult {
    pub fn fixed_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| !d.is_error()).count()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }
}
