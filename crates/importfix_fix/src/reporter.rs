use colored::Colorize;
use log::debug;
use std::{
    io::{self, Write},
    path::Path,
};

use importfix_core::display_relative;

use crate::types::{Diagnostic, FixResult};

/// Prints one line per diagnostic, in the order they were produced.
pub fn print_diagnostics<W: Write>(
    writer: &mut W,
    diagnostics: &[Diagnostic],
    root: &Path,
) -> io::Result<()> {
    debug!("Printing {} diagnostics", diagnostics.len());
    for diagnostic in diagnostics {
        let file = display_relative(root, diagnostic.file());
        match diagnostic {
            Diagnostic::Fixed { old, new, .. } => {
                writeln!(writer, "{} {}: {} → {}", "[FIX]".green().bold(), file, old, new.cyan())?;
            }
            Diagnostic::NotExported { name, target, .. } => {
                writeln!(
                    writer,
                    "{} {}: '{}' not exported by {}",
                    "[ERROR]".red().bold(),
                    file,
                    name.yellow(),
                    display_relative(root, target)
                )?;
            }
            Diagnostic::Unresolved { specifier, .. } => {
                writeln!(
                    writer,
                    "{} {}: unresolved import '{}'",
                    "[ERROR]".red().bold(),
                    file,
                    specifier.yellow()
                )?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn print_summary<W: Write>(
    writer: &mut W,
    result: &FixResult,
    dry_run: bool,
) -> io::Result<()> {
    let verb = if dry_run { "would fix" } else { "fixed" };
    writeln!(
        writer,
        "\n{} Checked {} files, {} {} imports in {} files, {} errors.",
        "●".bright_blue(),
        result.files_analyzed.to_string().cyan(),
        verb,
        result.fixed_count().to_string().green(),
        result.files_modified.len().to_string().cyan(),
        result.error_count().to_string().red()
    )?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render(diagnostics: &[Diagnostic]) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        print_diagnostics(&mut buf, diagnostics, Path::new("/project")).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_fixed_line() {
        let text = render(&[Diagnostic::Fixed {
            file: PathBuf::from("/project/src/b.js"),
            old: "./a".to_string(),
            new: "./c".to_string(),
        }]);
        assert_eq!(text, "[FIX] src/b.js: ./a → ./c\n");
    }

    #[test]
    fn test_error_lines() {
        let text = render(&[
            Diagnostic::NotExported {
                file: PathBuf::from("/project/main.js"),
                name: "b".to_string(),
                target: PathBuf::from("/project/x.js"),
            },
            Diagnostic::Unresolved {
                file: PathBuf::from("/project/main.js"),
                specifier: "./nowhere".to_string(),
            },
        ]);
        assert_eq!(
            text,
            "[ERROR] main.js: 'b' not exported by x.js\n[ERROR] main.js: unresolved import './nowhere'\n"
        );
    }

    #[test]
    fn test_summary() {
        colored::control::set_override(false);
        let result = FixResult {
            root: PathBuf::from("/project"),
            diagnostics: vec![Diagnostic::Unresolved {
                file: PathBuf::from("/project/main.js"),
                specifier: "./x".to_string(),
            }],
            files_analyzed: 4,
            files_modified: vec![],
        };
        let mut buf = Vec::new();
        print_summary(&mut buf, &result, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Checked 4 files, would fix 0 imports in 0 files, 1 errors."));
    }
}
