//! # eskema-dsl
//!
//! Lexer and parser for the Eskema schema definition language.
//!
//! This crate provides:
//! - A lexer that turns `.skm` source into an `EndOfFile`-terminated token sequence
//! - A [`TokenStream`] cursor with bounded lookahead
//! - A recursive descent [`Parser`] that builds an [`EskemaTree`] and collects
//!   every syntax error in one pass instead of stopping at the first
//! - A [`visualize`] renderer for inspecting a parsed tree
//!
//! # Example
//!
//! ```
//! use eskema_dsl::parse;
//!
//! let source = r#"
//! schema Contact {
//!     @name("full_name")
//!     name: String,
//!     age: Int32?
//! }
//!
//! enum Status { ACTIVE, BLOCKED };
//! "#;
//!
//! let output = parse(source, "contact.skm");
//! assert!(!output.has_errors());
//! assert_eq!(output.tree.len(), 2);
//!
//! let contact = output.tree.schemas().next().unwrap();
//! assert_eq!(contact.name(), "Contact");
//! assert!(contact.contains_nullable_fields());
//! ```
//!
//! Rendered output, whether from [`visualize`] or from an emitter, is not
//! guaranteed to parse back into the same tree.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod stream;
pub mod token;
pub mod visualize;

use std::path::Path;

pub use eskema_core::types::EskemaTree;
pub use error::SyntaxError;
pub use lexer::{tokenize, tokenize_bytes, tokenize_file, Lexer};
pub use parser::{Parser, MAX_GENERIC_DEPTH};
pub use stream::TokenStream;
pub use token::{nice_names, Keyword, Metadata, Token, TokenType};
pub use visualize::visualize;

/// The result of parsing one source: a best-effort tree plus every syntax
/// error found along the way.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub tree: EskemaTree,
    pub errors: Vec<SyntaxError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the tree only if parsing was clean.
    pub fn into_result(self) -> Result<EskemaTree, Vec<SyntaxError>> {
        if self.errors.is_empty() {
            Ok(self.tree)
        } else {
            Err(self.errors)
        }
    }
}

fn run(stream: TokenStream) -> ParseOutput {
    let mut parser = Parser::new(stream);
    let tree = parser.parse();
    ParseOutput {
        tree,
        errors: parser.into_errors(),
    }
}

/// Parses schema source. `filename` only labels diagnostics.
pub fn parse(source: &str, filename: &str) -> ParseOutput {
    run(tokenize(source, filename))
}

/// Parses raw bytes, replacing invalid UTF-8 before lexing.
pub fn parse_bytes(bytes: &[u8], filename: &str) -> ParseOutput {
    run(tokenize_bytes(bytes, filename))
}

/// Reads and parses a schema file.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read. Syntax
/// errors are reported through [`ParseOutput::errors`], never here.
pub fn parse_file(path: &Path) -> std::io::Result<ParseOutput> {
    Ok(run(tokenize_file(path)?))
}
