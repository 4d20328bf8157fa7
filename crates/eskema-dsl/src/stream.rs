use crate::token::{Token, TokenType};

/// A cursor over a lexed token sequence.
///
/// The sequence always ends with an `EndOfFile` token, so every read has a
/// token to return: reads past the end clamp to that terminal token. The
/// cursor saturates one step past the end, which keeps `next()` followed by
/// `prev()` a no-op even at EOF.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    current: usize,
}

impl TokenStream {
    /// Wraps a token sequence, appending an `EndOfFile` token if the sequence
    /// does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let metadata = tokens
                .last()
                .map(|t| {
                    let mut end = t.metadata.clone();
                    end.offset += t.value.len();
                    end.column += t.value.len();
                    end
                })
                .unwrap_or_default();
            tokens.push(Token::new(TokenType::EndOfFile, "", metadata));
        }
        Self { tokens, current: 0 }
    }

    /// Returns the token at the cursor, then advances.
    pub fn next(&mut self) -> &Token {
        let index = self.current;
        if self.current < self.tokens.len() {
            self.current += 1;
        }
        self.peek_at(index)
    }

    /// Steps the cursor back one token and returns the token now under it.
    ///
    /// Returns `None`, leaving the cursor in place, when already at the start.
    pub fn prev(&mut self) -> Option<&Token> {
        self.current = self.current.checked_sub(1)?;
        Some(self.peek_at(self.current))
    }

    /// Returns the token at the cursor without advancing.
    pub fn peek_current(&self) -> &Token {
        self.peek_at(self.current)
    }

    /// Returns the token one past the cursor without advancing.
    pub fn peek(&self) -> &Token {
        self.peek_at(self.current.saturating_add(1))
    }

    /// Returns the token at `index`, or the terminal `EndOfFile` token when
    /// `index` is out of range.
    pub fn peek_at(&self, index: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[index.min(last)]
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: a stream holds at least its `EndOfFile` token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns true once the cursor has reached the terminal `EndOfFile`.
    pub fn is_at_end(&self) -> bool {
        self.peek_current().is_eof()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
