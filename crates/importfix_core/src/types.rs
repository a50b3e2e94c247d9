use serde::Serialize;
use std::ops::Range;

/// One statement-level import found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportMatch {
    /// Module specifier as written, without quotes
    pub source: String,
    /// Raw binding text between `import` and `from`, `None` for side-effect imports
    pub what: Option<String>,
    /// Byte range of the specifier (inside the quotes) in the file text
    pub source_span: Range<usize>,
}

impl ImportMatch {
    pub fn is_side_effect(&self) -> bool {
        self.what.is_none()
    }

    /// Imported names from a `{ ... }` clause.
    ///
    /// `a as b` yields `a`, the name the target module must export.
    pub fn named(&self) -> Vec<String> {
        let Some(what) = &self.what else {
            return Vec::new();
        };
        let (Some(open), Some(close)) = (what.find('{'), what.rfind('}')) else {
            return Vec::new();
        };
        if close <= open {
            return Vec::new();
        }

        what[open + 1..close]
            .split(',')
            .filter_map(|entry| entry.split_whitespace().next())
            .map(str::to_string)
            .collect()
    }
}

/// One statement-level export found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExportRecord {
    /// `export const|let|var|function|class <name>`
    Named { name: String },
    /// `export default ...`, name absent for anonymous expressions
    Default { name: Option<String> },
    /// `export { a, b as c } [from "<spec>"]`, entries kept in source form
    List { names: Vec<String>, from: Option<String> },
    /// `export * [as ns] from "<spec>"`
    Star { alias: Option<String>, from: String },
}

impl ExportRecord {
    /// Names this record makes importable from the declaring module.
    ///
    /// A plain `export * from` forwards names it cannot know locally and
    /// contributes nothing here.
    pub fn exported_names(&self) -> Vec<String> {
        match self {
            ExportRecord::Named { name } => vec![name.clone()],
            ExportRecord::Default { name } => {
                let mut names = vec!["default".to_string()];
                names.extend(name.clone());
                names
            }
            ExportRecord::List { names, .. } => names
                .iter()
                .filter_map(|entry| entry.split_whitespace().last())
                .map(str::to_string)
                .collect(),
            ExportRecord::Star { alias, .. } => alias.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(what: &str) -> ImportMatch {
        ImportMatch { source: "./x".to_string(), what: Some(what.to_string()), source_span: 0..0 }
    }

    #[test]
    fn test_named_simple() {
        assert_eq!(binding("{ a, b }").named(), vec!["a", "b"]);
    }

    #[test]
    fn test_named_with_default_and_alias() {
        assert_eq!(binding("React, { useState as useS, useEffect }").named(), vec![
            "useState",
            "useEffect"
        ]);
    }

    #[test]
    fn test_named_trailing_comma_and_newlines() {
        assert_eq!(binding("{\n  a,\n  b,\n}").named(), vec!["a", "b"]);
    }

    #[test]
    fn test_named_without_clause() {
        assert!(binding("Foo").named().is_empty());
        assert!(binding("* as ns").named().is_empty());
    }

    #[test]
    fn test_named_side_effect() {
        let m = ImportMatch { source: "./x".to_string(), what: None, source_span: 0..0 };
        assert!(m.is_side_effect());
        assert!(m.named().is_empty());
    }

    #[test]
    fn test_exported_names_list_uses_alias() {
        let record = ExportRecord::List {
            names: vec!["Foo".to_string(), "Bar as Baz".to_string()],
            from: None,
        };
        assert_eq!(record.exported_names(), vec!["Foo", "Baz"]);
    }

    #[test]
    fn test_exported_names_default() {
        let named = ExportRecord::Default { name: Some("Foo".to_string()) };
        assert_eq!(named.exported_names(), vec!["default", "Foo"]);

        let anonymous = ExportRecord::Default { name: None };
        assert_eq!(anonymous.exported_names(), vec!["default"]);
    }

    #[test]
    fn test_exported_names_star() {
        let plain = ExportRecord::Star { alias: None, from: "./x".to_string() };
        assert!(plain.exported_names().is_empty());

        let aliased = ExportRecord::Star { alias: Some("ns".to_string()), from: "./x".to_string() };
        assert_eq!(aliased.exported_names(), vec!["ns"]);
    }
}
