use std::fmt;
use std::sync::Arc;

/// The kind of a lexed token.
///
/// `Whitespace` and `NewLine` exist for completeness but are never handed to
/// the parser: the lexer drops them along with tabs, carriage returns and
/// null bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Invalid,
    Keyword,
    Literal,
    PrimitiveType,
    Whitespace,
    LesserThan,
    GreaterThan,
    Comma,
    Colon,
    SemiColon,
    QuestionMark,
    ScopeStart,
    ScopeEnd,
    At,
    LeftParen,
    RightParen,
    NewLine,
    EndOfFile,
}

impl TokenType {
    /// Returns a human-readable name: the punctuation itself for structural
    /// tokens, the class name otherwise.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::Keyword => "Keyword",
            Self::Literal => "Literal",
            Self::PrimitiveType => "PrimitiveType",
            Self::Whitespace => " ",
            Self::LesserThan => "<",
            Self::GreaterThan => ">",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::SemiColon => ";",
            Self::QuestionMark => "?",
            Self::ScopeStart => "{",
            Self::ScopeEnd => "}",
            Self::At => "@",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::NewLine => "NewLine",
            Self::EndOfFile => "EOF",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Formats a set of token types as `'X' or 'Y' or 'Z'`.
pub fn nice_names(types: &[TokenType]) -> String {
    types
        .iter()
        .map(|t| format!("'{}'", t.description()))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Reserved words that start a top-level declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Schema,
    Enum,
}

impl Keyword {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "schema" => Some(Self::Schema),
            "enum" => Some(Self::Enum),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Enum => "enum",
        }
    }
}

/// Source position of a token's first byte.
///
/// `line` and `column` are 1-based; `column` counts bytes. Positions refer
/// to the UTF-8 text that was lexed: for input decoded lossily by
/// [`crate::tokenize_bytes`] that is the decoded text, not the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Metadata {
    pub filename: Arc<str>,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Metadata {
    pub fn new(filename: Arc<str>, offset: usize, line: usize, column: usize) -> Self {
        Self {
            filename,
            offset,
            line,
            column,
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new(Arc::from(""), 0, 1, 1)
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}:{}]", self.filename, self.line, self.column)
    }
}

/// A lexed token. Never modified after the lexer produces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenType,
    pub value: String,
    pub metadata: Metadata,
}

impl Token {
    pub fn new(kind: TokenType, value: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            kind,
            value: value.into(),
            metadata,
        }
    }

    /// Returns the keyword this token spells, if it is a keyword token.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenType::Keyword => Keyword::from_name(&self.value),
            _ => None,
        }
    }

    pub fn is(&self, kind: TokenType) -> bool {
        self.kind == kind
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::EndOfFile
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenType::EndOfFile => write!(f, "EOF"),
            _ => write!(f, "{} '{}'", self.kind, self.value),
        }
    }
}
