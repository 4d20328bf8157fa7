use eskema_core::types::{
    AnnotationExpression, AnnotationKind, EnumDefinition, EskemaTree, Expression, FieldExpression,
    SchemaDefinition, TypeExpression,
};

use crate::error::SyntaxError;
use crate::stream::TokenStream;
use crate::token::{Keyword, Token, TokenType};

/// Recursive descent parser for the Eskema grammar.
///
/// ```text
/// schema      = "schema" Literal generics? "{" field* "}" ";"?
/// generics    = "<" type ("," type)* ">"
/// field       = annotation* Literal ":" type "?"? ","?
/// annotation  = "@" Literal "(" Literal ")"
/// type        = (Literal | PrimitiveType) generics?
/// enum        = "enum" Literal "{" (Literal ","?)* "}" ";"?
/// ```
///
/// Syntax errors are collected rather than returned: [`Parser::parse`]
/// always produces a tree, and [`Parser::errors`] tells the caller whether
/// that tree is trustworthy. Every loop either consumes a token or exits, so
/// parsing terminates on any input. Generic argument lists nest at most
/// [`MAX_GENERIC_DEPTH`] deep; anything deeper is reported and skipped, which
/// bounds recursion on hostile input.
pub struct Parser {
    stream: TokenStream,
    errors: Vec<SyntaxError>,
    depth: usize,
}

/// How deeply `<...>` argument lists may nest inside one type.
pub const MAX_GENERIC_DEPTH: usize = 64;

impl Parser {
    pub fn new(stream: TokenStream) -> Self {
        Self {
            stream,
            errors: Vec::new(),
            depth: 0,
        }
    }

    /// Parses every top-level declaration up to `EndOfFile`.
    pub fn parse(&mut self) -> EskemaTree {
        let mut expressions = Vec::new();

        loop {
            let token = self.stream.peek_current();
            match token.keyword() {
                Some(Keyword::Schema) => expressions.push(Expression::Schema(self.parse_schema())),
                Some(Keyword::Enum) => expressions.push(Expression::Enum(self.parse_enum())),
                None if token.is_eof() => break,
                None => {
                    let token = token.clone();
                    self.record(&token, &[TokenType::Keyword, TokenType::EndOfFile]);
                    self.recover_to_next_declaration();
                }
            }
        }

        tracing::debug!(
            declarations = expressions.len(),
            errors = self.errors.len(),
            "parse finished"
        );
        EskemaTree::new(expressions)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors recorded so far, in source order.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }

    // -- Cursor helpers --

    fn at(&self, kind: TokenType) -> bool {
        self.stream.peek_current().is(kind)
    }

    /// Consumes the current token if it is `kind`.
    fn eat(&mut self, kind: TokenType) -> bool {
        if self.at(kind) {
            self.stream.next();
            true
        } else {
            false
        }
    }

    /// Consumes and returns the current token if it is `kind`. Otherwise
    /// records an error and returns the actual token without consuming it.
    fn expect(&mut self, kind: TokenType) -> Token {
        let token = self.stream.peek_current().clone();
        if token.is(kind) {
            self.stream.next();
        } else {
            self.record(&token, &[kind]);
        }
        token
    }

    fn record(&mut self, token: &Token, expected: &[TokenType]) {
        let err = SyntaxError::unexpected(token, expected);
        tracing::debug!(error = %err, "syntax error");
        self.errors.push(err);
    }

    /// Skips to the next top-level keyword or `EndOfFile`.
    fn recover_to_next_declaration(&mut self) {
        while !self.stream.is_at_end() && !self.at(TokenType::Keyword) {
            self.stream.next();
        }
    }

    /// Skips a `<...>` list too deep to parse, up to and including its
    /// matching `>`. Stops early, without consuming, at `}`, a keyword or
    /// `EndOfFile`.
    fn skip_generic_list(&mut self) {
        let mut open = 0usize;
        while !self.stream.is_at_end() {
            let kind = self.stream.peek_current().kind;
            match kind {
                TokenType::ScopeEnd | TokenType::Keyword => return,
                TokenType::LesserThan => open += 1,
                TokenType::GreaterThan => {
                    open = open.saturating_sub(1);
                    if open == 0 {
                        self.stream.next();
                        return;
                    }
                }
                _ => {}
            }
            self.stream.next();
        }
    }

    /// Consumes the `}` closing a declaration body. When it is missing,
    /// records one error and skips past the next `}`, stopping early at a
    /// keyword or `EndOfFile`.
    fn close_scope(&mut self) {
        if self.eat(TokenType::ScopeEnd) {
            return;
        }
        let token = self.stream.peek_current().clone();
        self.record(&token, &[TokenType::ScopeEnd]);
        loop {
            let kind = self.stream.peek_current().kind;
            match kind {
                TokenType::ScopeEnd => {
                    self.stream.next();
                    return;
                }
                TokenType::Keyword | TokenType::EndOfFile => return,
                _ => {
                    self.stream.next();
                }
            }
        }
    }

    // -- Grammar productions --

    fn parse_schema(&mut self) -> SchemaDefinition {
        self.stream.next();
        let name = self.expect(TokenType::Literal);
        let generics = if self.at(TokenType::LesserThan) {
            self.parse_generics()
        } else {
            Vec::new()
        };

        self.expect(TokenType::ScopeStart);

        let mut fields = Vec::new();
        loop {
            let kind = self.stream.peek_current().kind;
            match kind {
                TokenType::ScopeEnd | TokenType::Keyword | TokenType::EndOfFile => break,
                TokenType::Literal | TokenType::At => fields.push(self.parse_field()),
                _ => {
                    let token = self.stream.next().clone();
                    self.record(
                        &token,
                        &[TokenType::Literal, TokenType::At, TokenType::ScopeEnd],
                    );
                }
            }
        }

        self.close_scope();
        self.eat(TokenType::SemiColon);

        let mut schema = SchemaDefinition::new(name.value, fields);
        schema.generics = generics;
        schema
    }

    fn parse_field(&mut self) -> FieldExpression {
        let mut annotations = Vec::new();
        while self.at(TokenType::At) {
            annotations.push(self.parse_annotation());
        }

        let name = self.expect(TokenType::Literal);
        self.expect(TokenType::Colon);
        let field_type = self.parse_type();
        let is_optional = self.eat(TokenType::QuestionMark);
        self.eat(TokenType::Comma);

        let mut field = FieldExpression::new(name.value, field_type);
        field.is_optional = is_optional;
        field.annotations = annotations;
        field
    }

    fn parse_annotation(&mut self) -> AnnotationExpression {
        self.stream.next();
        let kind = self.expect(TokenType::Literal);
        self.expect(TokenType::LeftParen);
        let value = self.expect(TokenType::Literal);
        self.expect(TokenType::RightParen);

        AnnotationExpression::new(AnnotationKind::from_name(&kind.value), unquote(&value.value))
    }

    fn parse_type(&mut self) -> TypeExpression {
        let token = self.stream.peek_current().clone();
        if !matches!(token.kind, TokenType::Literal | TokenType::PrimitiveType) {
            self.record(&token, &[TokenType::Literal, TokenType::PrimitiveType]);
            return TypeExpression::new(token.value);
        }
        self.stream.next();

        if !self.at(TokenType::LesserThan) {
            return TypeExpression::new(token.value);
        }
        if self.depth >= MAX_GENERIC_DEPTH {
            let open = self.stream.peek_current().clone();
            self.record(&open, &[TokenType::Comma, TokenType::GreaterThan]);
            self.skip_generic_list();
            return TypeExpression::new(token.value);
        }
        TypeExpression::with_generics(token.value, self.parse_generics())
    }

    /// Parses `<` type (`,` type)* `>`. The cursor must be on the `<`.
    fn parse_generics(&mut self) -> Vec<TypeExpression> {
        self.depth += 1;
        let generics = self.parse_generic_list();
        self.depth -= 1;
        generics
    }

    fn parse_generic_list(&mut self) -> Vec<TypeExpression> {
        self.stream.next();
        let mut generics = Vec::new();

        loop {
            let token = self.stream.peek_current().clone();
            match token.kind {
                TokenType::Literal | TokenType::PrimitiveType => {
                    generics.push(self.parse_type());
                    if self.eat(TokenType::Comma) {
                        continue;
                    }
                    if !self.eat(TokenType::GreaterThan) {
                        let token = self.stream.peek_current().clone();
                        self.record(&token, &[TokenType::Comma, TokenType::GreaterThan]);
                    }
                    break;
                }
                TokenType::GreaterThan => {
                    self.record(&token, &[TokenType::Literal, TokenType::PrimitiveType]);
                    self.stream.next();
                    break;
                }
                _ => {
                    self.record(&token, &[TokenType::Literal, TokenType::PrimitiveType]);
                    break;
                }
            }
        }

        generics
    }

    fn parse_enum(&mut self) -> EnumDefinition {
        self.stream.next();
        let name = self.expect(TokenType::Literal);
        self.expect(TokenType::ScopeStart);

        let mut values = Vec::new();
        while self.at(TokenType::Literal) {
            values.push(self.stream.next().value.clone());
            self.eat(TokenType::Comma);
        }

        self.close_scope();
        self.eat(TokenType::SemiColon);

        EnumDefinition::new(name.value, values)
    }
}

/// Strips one pair of surrounding double quotes, if present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
