use eskema_dsl::{nice_names, SyntaxError};
use miette::{Diagnostic, NamedSource, SourceSpan};

/// One syntax error with the source snippet it points into.
///
/// main.rs allows `unused_assignments` on this module; the miette derive
/// trips that lint.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{headline}")]
#[diagnostic(code(eskema::syntax))]
pub struct SchemaDiagnostic {
    #[source_code]
    source_code: NamedSource<String>,

    #[label("{pointer}")]
    at: SourceSpan,

    headline: String,
    pointer: String,

    #[help]
    hint: Option<String>,
}

/// The span covers the offending token, or is empty at end of input.
pub fn syntax_error_to_diagnostic(
    error: &SyntaxError,
    source: &str,
    filename: &str,
) -> SchemaDiagnostic {
    let source_code = NamedSource::new(filename, source.to_string());
    let meta = error.metadata();

    let offset = meta.offset.min(source.len());
    let at_end = offset == source.len();
    let length = if at_end {
        0
    } else {
        error.found().len().min(source.len() - offset)
    };

    let expected = nice_names(error.expected());
    let pointer = if at_end {
        "input ended here".to_string()
    } else {
        format!("found '{}'", error.found())
    };

    SchemaDiagnostic {
        source_code,
        at: (offset, length).into(),
        headline: format!("expected {expected} but found '{}'", error.found()),
        pointer,
        hint: hint(error, &expected),
    }
}

fn hint(error: &SyntaxError, expected: &str) -> Option<String> {
    use eskema_dsl::TokenType;

    match error.expected() {
        [TokenType::Colon] => Some("Separate a field name from its type with ':'.".to_string()),
        [TokenType::ScopeEnd] => Some("Close the declaration body with '}'.".to_string()),
        [TokenType::Keyword, TokenType::EndOfFile] => {
            Some("Top-level declarations start with 'schema' or 'enum'.".to_string())
        }
        [] => None,
        _ => Some(format!("Insert {expected} here.")),
    }
}

/// One miette report per syntax error, in source order.
pub fn render_diagnostics<'a>(
    errors: &'a [SyntaxError],
    source: &'a str,
    filename: &'a str,
) -> impl Iterator<Item = miette::Report> + 'a {
    errors
        .iter()
        .map(move |e| miette::Report::new(syntax_error_to_diagnostic(e, source, filename)))
}
