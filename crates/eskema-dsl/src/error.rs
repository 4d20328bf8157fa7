use std::fmt;

use crate::token::{nice_names, Metadata, Token, TokenType};

/// A syntax error recorded while parsing.
///
/// The lexer never fails, so every problem with the input surfaces here,
/// including stray bytes the lexer marked `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxError {
    /// The token at `metadata` is none of the types the grammar allows there.
    UnexpectedToken {
        metadata: Metadata,
        expected: Vec<TokenType>,
        found: String,
    },
}

impl SyntaxError {
    /// Builds an `UnexpectedToken` error for `token`.
    pub fn unexpected(token: &Token, expected: &[TokenType]) -> Self {
        let found = if token.is_eof() {
            TokenType::EndOfFile.description().to_string()
        } else {
            token.value.clone()
        };
        Self::UnexpectedToken {
            metadata: token.metadata.clone(),
            expected: expected.to_vec(),
            found,
        }
    }

    /// Source position of the offending token.
    pub fn metadata(&self) -> &Metadata {
        match self {
            Self::UnexpectedToken { metadata, .. } => metadata,
        }
    }

    /// Token types the grammar would have accepted.
    pub fn expected(&self) -> &[TokenType] {
        match self {
            Self::UnexpectedToken { expected, .. } => expected,
        }
    }

    /// Text of the offending token (`EOF` at end of input).
    pub fn found(&self) -> &str {
        match self {
            Self::UnexpectedToken { found, .. } => found,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                metadata,
                expected,
                found,
            } => write!(
                f,
                "{metadata}: expected {} but found '{found}'",
                nice_names(expected)
            ),
        }
    }
}

impl std::error::Error for SyntaxError {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn display_matches_diagnostic_format() {
        let token = Token::new(
            TokenType::PrimitiveType,
            "String",
            Metadata::new(Arc::from("user.skm"), 19, 2, 10),
        );
        let err = SyntaxError::unexpected(&token, &[TokenType::Colon]);
        assert_eq!(
            err.to_string(),
            "user.skm [2:10]: expected ':' but found 'String'"
        );
    }

    #[test]
    fn display_lists_alternatives() {
        let token = Token::new(TokenType::Literal, "foo", Metadata::default());
        let err = SyntaxError::unexpected(&token, &[TokenType::Keyword, TokenType::EndOfFile]);
        assert_eq!(
            err.to_string(),
            " [1:1]: expected 'Keyword' or 'EOF' but found 'foo'"
        );
    }

    #[test]
    fn eof_is_named_explicitly() {
        let token = Token::new(TokenType::EndOfFile, "", Metadata::default());
        let err = SyntaxError::unexpected(&token, &[TokenType::ScopeEnd]);
        assert_eq!(err.found(), "EOF");
        assert!(err.to_string().ends_with("expected '}' but found 'EOF'"));
    }

    #[test]
    fn accessors() {
        let meta = Metadata::new(Arc::from("a"), 3, 1, 4);
        let token = Token::new(TokenType::Invalid, "\u{1}", meta.clone());
        let err = SyntaxError::unexpected(&token, &[TokenType::Literal, TokenType::At]);
        assert_eq!(err.metadata(), &meta);
        assert_eq!(err.expected(), &[TokenType::Literal, TokenType::At]);
        assert_eq!(err.found(), "\u{1}");
    }
}
