//! Constants for source file extensions and resolution candidates.
//!
//! Only plain JavaScript sources take part in scanning and fixing:
//!
//! - **JavaScript**: `.js`
//! - **JavaScript with JSX**: `.jsx`

/// File extensions for source files that should be analyzed
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "js",  // JavaScript
    "jsx", // JavaScript with JSX
];

/// Suffixes appended to a relative specifier when resolving it (in priority order).
///
/// The bare specifier is tried first, then direct extension additions, then
/// directory index files.
pub const RESOLVE_SUFFIXES: &[&str] = &["", ".js", ".jsx", "/index.js", "/index.jsx"];

/// Index file names a directory import can land on
pub const INDEX_FILES: &[&str] = &["index.js", "index.jsx"];

/// Returns true when `ext` (without the leading dot) is a recognized source extension.
pub fn is_source_extension(ext: &str) -> bool {
    SOURCE_EXTENSIONS.contains(&ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_extensions() {
        assert!(SOURCE_EXTENSIONS.contains(&"js"));
        assert!(SOURCE_EXTENSIONS.contains(&"jsx"));
        assert_eq!(SOURCE_EXTENSIONS.len(), 2);
    }

    #[test]
    fn test_resolve_suffixes_priority() {
        // Exact match first, then extensions, then index files
        assert_eq!(RESOLVE_SUFFIXES[0], "");
        let ext_pos = RESOLVE_SUFFIXES.iter().position(|s| *s == ".jsx").unwrap();
        let index_pos = RESOLVE_SUFFIXES.iter().position(|s| *s == "/index.js").unwrap();
        assert!(ext_pos < index_pos);
    }

    #[test]
    fn test_index_files_match_suffixes() {
        for index_file in INDEX_FILES {
            let suffix = format!("/{}", index_file);
            assert!(RESOLVE_SUFFIXES.contains(&suffix.as_str()));
        }
    }

    #[test]
    fn test_is_source_extension() {
        assert!(is_source_extension("js"));
        assert!(is_source_extension("jsx"));
        assert!(!is_source_extension("ts"));
        assert!(!is_source_extension("json"));
    }
}
