pub mod completions;
pub mod generate;
pub mod languages;
pub mod parse;

use std::path::Path;

use eskema_dsl::{ParseOutput, SyntaxError};

use crate::diagnostic::render_diagnostics;
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// A schema file read from disk and parsed.
pub struct ParsedFile {
    pub filename: String,
    pub source: String,
    pub output: ParseOutput,
}

/// Read and parse one schema file. Invalid UTF-8 is replaced rather than
/// rejected, so diagnostics always point into the text that was parsed.
pub fn parse_file(path: &Path) -> Result<ParsedFile, CliError> {
    let bytes = std::fs::read(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let source = String::from_utf8_lossy(&bytes).into_owned();
    let filename = path.display().to_string();
    let output = eskema_dsl::parse(&source, &filename);
    tracing::info!(
        file = %filename,
        declarations = output.tree.len(),
        errors = output.errors.len(),
        "parsed schema file"
    );

    Ok(ParsedFile {
        filename,
        source,
        output,
    })
}

/// Render syntax errors for human and plain output. JSON output carries
/// errors in the command's structured result instead.
pub fn report_syntax_errors(
    output: &OutputContext,
    errors: &[SyntaxError],
    source: &str,
    filename: &str,
) {
    match output.mode {
        OutputMode::Human => {
            for report in render_diagnostics(errors, source, filename) {
                eprintln!("{report:?}");
            }
        }
        OutputMode::Plain => {
            for err in errors {
                eprintln!("{filename}\terror\t{err}");
            }
        }
        OutputMode::Json => {}
    }
}
