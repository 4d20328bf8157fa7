use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use eskema_core::Primitive;
use logos::Logos;

use crate::stream::TokenStream;
use crate::token::{Keyword, Metadata, Token, TokenType};

/// Line bookkeeping carried through the logos lexer.
#[derive(Debug, Default, Clone, Copy)]
struct LineTracker {
    /// Newlines consumed so far.
    newlines: usize,
    /// Byte offset of the first byte after the most recent newline.
    line_start: usize,
}

fn newline(lex: &mut logos::Lexer<Lexeme>) -> logos::Skip {
    lex.extras.newlines += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// Raw lexemes. Words are classified into keyword / primitive / literal
/// after matching, against fixed tables.
///
/// Spaces, tabs, carriage returns and null bytes are skipped. Every other
/// byte that is not punctuation, other control characters included, belongs
/// to a word.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LineTracker)]
#[logos(skip r"[ \t\r\x00]+")]
enum Lexeme {
    #[regex(r"\n", newline)]
    NewLine,

    #[token("<")]
    LesserThan,

    #[token(">")]
    GreaterThan,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token(";")]
    SemiColon,

    #[token("?")]
    QuestionMark,

    #[token("{")]
    ScopeStart,

    #[token("}")]
    ScopeEnd,

    #[token("@")]
    At,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    /// A maximal run of anything that is not skipped whitespace, a newline
    /// or punctuation.
    #[regex(r"[^ \t\r\n\x00<>,:;?{}@()]+")]
    Word,
}

impl Lexeme {
    fn token_type(self, text: &str) -> TokenType {
        match self {
            Self::NewLine => TokenType::NewLine,
            Self::LesserThan => TokenType::LesserThan,
            Self::GreaterThan => TokenType::GreaterThan,
            Self::Comma => TokenType::Comma,
            Self::Colon => TokenType::Colon,
            Self::SemiColon => TokenType::SemiColon,
            Self::QuestionMark => TokenType::QuestionMark,
            Self::ScopeStart => TokenType::ScopeStart,
            Self::ScopeEnd => TokenType::ScopeEnd,
            Self::At => TokenType::At,
            Self::LeftParen => TokenType::LeftParen,
            Self::RightParen => TokenType::RightParen,
            Self::Word => classify_word(text),
        }
    }
}

fn classify_word(text: &str) -> TokenType {
    if Keyword::from_name(text).is_some() {
        TokenType::Keyword
    } else if Primitive::from_name(text).is_some() {
        TokenType::PrimitiveType
    } else {
        TokenType::Literal
    }
}

/// Scans schema source into tokens.
///
/// Iterating yields one token at a time and ends with exactly one
/// `EndOfFile` token; [`Lexer::tokenize`] collects everything into a
/// [`TokenStream`]. The lexer never fails: every character is skipped,
/// punctuation, or part of a word, and should logos reject a byte anyway it
/// becomes an `Invalid` token for the parser to report.
pub struct Lexer<'s> {
    filename: Arc<str>,
    inner: logos::Lexer<'s, Lexeme>,
    finished: bool,
}

impl<'s> Lexer<'s> {
    /// Creates a lexer over `source`. `filename` is only used in diagnostics.
    pub fn new(source: &'s str, filename: impl Into<Arc<str>>) -> Self {
        Self {
            filename: filename.into(),
            inner: Lexeme::lexer(source),
            finished: false,
        }
    }

    /// Consumes the lexer and collects every token into a stream.
    pub fn tokenize(self) -> TokenStream {
        let filename = Arc::clone(&self.filename);
        let tokens: Vec<Token> = self.collect();
        tracing::trace!(file = %filename, tokens = tokens.len(), "lexed source");
        TokenStream::new(tokens)
    }

    fn metadata_at(&self, offset: usize) -> Metadata {
        let LineTracker {
            newlines,
            line_start,
        } = self.inner.extras;
        Metadata::new(
            Arc::clone(&self.filename),
            offset,
            newlines + 1,
            offset - line_start + 1,
        )
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(result) => {
                let span = self.inner.span();
                let text = self.inner.slice();
                let kind = match result {
                    Ok(lexeme) => lexeme.token_type(text),
                    Err(()) => TokenType::Invalid,
                };
                Some(Token::new(kind, text, self.metadata_at(span.start)))
            }
            None => {
                self.finished = true;
                let end = self.inner.source().len();
                Some(Token::new(TokenType::EndOfFile, "", self.metadata_at(end)))
            }
        }
    }
}

/// Tokenizes a source string.
pub fn tokenize(source: &str, filename: &str) -> TokenStream {
    Lexer::new(source, filename).tokenize()
}

/// Tokenizes raw bytes. Invalid UTF-8 sequences are replaced with U+FFFD
/// before scanning, so offsets and columns refer to the decoded text: each
/// replaced sequence occupies three bytes there, and positions after it no
/// longer match byte positions in `bytes`. Diagnostics should be rendered
/// against the decoded text, as `eskema-cli` does.
pub fn tokenize_bytes(bytes: &[u8], filename: &str) -> TokenStream {
    let source: Cow<'_, str> = String::from_utf8_lossy(bytes);
    Lexer::new(&source, filename).tokenize()
}

/// Reads and tokenizes a file, labelling tokens with its path.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read.
pub fn tokenize_file(path: &Path) -> std::io::Result<TokenStream> {
    let bytes = std::fs::read(path)?;
    Ok(tokenize_bytes(&bytes, &path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenType> {
        Lexer::new(source, "test.skm").map(|t| t.kind).collect()
    }

    fn values(source: &str) -> Vec<String> {
        Lexer::new(source, "test.skm").map(|t| t.value).collect()
    }

    #[test]
    fn empty_input_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenType::EndOfFile]);
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            kinds("<>,:;?{}@()"),
            vec![
                TokenType::LesserThan,
                TokenType::GreaterThan,
                TokenType::Comma,
                TokenType::Colon,
                TokenType::SemiColon,
                TokenType::QuestionMark,
                TokenType::ScopeStart,
                TokenType::ScopeEnd,
                TokenType::At,
                TokenType::LeftParen,
                TokenType::RightParen,
                TokenType::EndOfFile,
            ]
        );
    }

    #[test]
    fn words_are_classified() {
        assert_eq!(
            kinds("schema enum String Int32 Bool Contact schemas"),
            vec![
                TokenType::Keyword,
                TokenType::Keyword,
                TokenType::PrimitiveType,
                TokenType::PrimitiveType,
                TokenType::PrimitiveType,
                TokenType::Literal,
                TokenType::Literal,
                TokenType::EndOfFile,
            ]
        );
    }

    #[test]
    fn literal_runs_stop_at_punctuation() {
        assert_eq!(
            values("Map<String,T>"),
            vec!["Map", "<", "String", ",", "T", ">", ""]
        );
    }

    #[test]
    fn whitespace_and_control_bytes_are_dropped() {
        assert_eq!(
            kinds(" \t\r\n\0 name \n"),
            vec![TokenType::Literal, TokenType::EndOfFile]
        );
    }

    #[test]
    fn other_control_bytes_stay_inside_words() {
        for word in ["a\x01b", "a\x0Bb", "a\x7Fb", "\x1Fname"] {
            let tokens: Vec<Token> = Lexer::new(word, "t").collect();
            assert_eq!(tokens.len(), 2, "{word:?}");
            assert_eq!(tokens[0].kind, TokenType::Literal);
            assert_eq!(tokens[0].value, word);
            assert!(tokens[1].is_eof());
        }
    }

    #[test]
    fn control_byte_does_not_hide_a_keyword_boundary() {
        assert_eq!(
            kinds("schema\x01 Foo"),
            vec![TokenType::Literal, TokenType::Literal, TokenType::EndOfFile]
        );
    }

    #[test]
    fn lossy_bytes_report_positions_in_decoded_text() {
        let bytes = b"\xFFab cd";
        let decoded = String::from_utf8_lossy(bytes);
        let stream = tokenize_bytes(bytes, "t");
        let cd = &stream.tokens()[1];
        assert_eq!(cd.value, "cd");
        assert_eq!(cd.metadata.offset, 6);
        assert_eq!(cd.metadata.column, 7);
        assert_eq!(&decoded[cd.metadata.offset..], "cd");
    }

    #[test]
    fn quoted_text_is_a_literal() {
        assert_eq!(values(r#"("user_name")"#), vec!["(", "\"user_name\"", ")", ""]);
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let tokens: Vec<Token> = Lexer::new("schema Foo {\n  name: String\n}", "f.skm").collect();
        let at = |i: usize| (tokens[i].metadata.line, tokens[i].metadata.column);

        assert_eq!(tokens[0].value, "schema");
        assert_eq!(at(0), (1, 1));
        assert_eq!(tokens[1].value, "Foo");
        assert_eq!(at(1), (1, 8));
        assert_eq!(at(2), (1, 12));
        assert_eq!(tokens[3].value, "name");
        assert_eq!(at(3), (2, 3));
        assert_eq!(tokens[3].metadata.offset, 15);
        assert_eq!(tokens[4].value, ":");
        assert_eq!(at(4), (2, 7));
        assert_eq!(tokens[6].value, "}");
        assert_eq!(at(6), (3, 1));
    }

    #[test]
    fn eof_points_past_the_last_byte() {
        let tokens: Vec<Token> = Lexer::new("ab\ncd", "f").collect();
        let eof = tokens.last().unwrap();
        assert!(eof.is_eof());
        assert_eq!(eof.metadata.offset, 5);
        assert_eq!(eof.metadata.line, 2);
        assert_eq!(eof.metadata.column, 3);
    }

    #[test]
    fn filename_is_carried_on_every_token() {
        for token in Lexer::new("enum E { A }", "colors.skm") {
            assert_eq!(&*token.metadata.filename, "colors.skm");
        }
    }

    #[test]
    fn iterator_is_fused_after_eof() {
        let mut lexer = Lexer::new("x", "f");
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenType::Literal));
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenType::EndOfFile));
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn bytes_with_invalid_utf8_still_lex() {
        let stream = tokenize_bytes(b"schema \xff\xfe Foo", "bin");
        assert_eq!(stream.peek_at(usize::MAX).kind, TokenType::EndOfFile);
        assert_eq!(stream.peek_current().kind, TokenType::Keyword);
    }

    #[test]
    fn tokenize_file_reads_from_disk() {
        let dir = std::env::temp_dir().join(format!("eskema-lexer-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("one.skm");
        std::fs::write(&path, "enum One { A };").unwrap();
        let stream = tokenize_file(&path).unwrap();
        assert_eq!(stream.len(), 7);
        assert!(stream.peek_current().metadata.filename.ends_with("one.skm"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn tokenize_missing_file_is_io_error() {
        assert!(tokenize_file(Path::new("/nonexistent/eskema/file.skm")).is_err());
    }
}
