use importfix_core::ExportRecord;
use serde::Serialize;

/// One row of the `imports` report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportEntry {
    pub file: String,
    pub source: String,
    /// Raw binding text, `null` for side-effect imports
    pub what: Option<String>,
}

/// One row of the `exports` report, tagged by its `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportEntry {
    pub file: String,
    #[serde(flatten)]
    pub export: ExportRecord,
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    pub imports: Vec<ImportEntry>,
    pub exports: Vec<ExportEntry>,
    pub files_scanned: usize,
}
