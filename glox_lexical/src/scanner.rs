//! Contains the [`Scanner`], the state machine that turns source code into tokens.

use std::sync::Arc;

use glox_base::{
    diagnostic::Handler,
    source_file::{self, ByteIndex, SourceFile},
};

use crate::{
    error::{self, InvalidNumericLiteral, UnexpectedCharacter, UnterminatedString},
    token::{Token, TokenKind},
    token_stream::TokenStream,
};

/// Scans one unit of source code (a script file or a prompt line) into a [`TokenStream`].
///
/// The scanner looks at most two characters ahead and never backtracks. A scanner is consumed
/// by [`Self::scan_tokens`], so every unit of source code gets a fresh one.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    iter: source_file::Iterator<'a>,
    line: usize,
    tokens: Vec<Token>,
}

/// Checks if the given character can start an identifier or a keyword.
fn is_first_identifier_character(character: char) -> bool {
    character.is_ascii_alphabetic() || character == '_'
}

/// Checks if the given character can continue an identifier or a keyword.
fn is_identifier_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of the given source file, on line 1.
    #[must_use]
    pub fn new(source_file: &'a Arc<SourceFile>) -> Self {
        Self {
            iter: source_file.iter(),
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole source file.
    ///
    /// Every lexical error is sent to the `handler`, after which scanning resumes at the next
    /// character; the returned stream holds every token that could be produced.
    #[must_use]
    pub fn scan_tokens(mut self, handler: &dyn Handler<error::Error>) -> TokenStream {
        while let Some((start, character)) = self.iter.next() {
            self.scan_token(start, character, handler);
        }

        self.tokens.into()
    }

    fn scan_token(
        &mut self,
        start: ByteIndex,
        character: char,
        handler: &dyn Handler<error::Error>,
    ) {
        match character {
            '(' => self.add_token(start, TokenKind::LeftParen),
            ')' => self.add_token(start, TokenKind::RightParen),
            '{' => self.add_token(start, TokenKind::LeftBrace),
            '}' => self.add_token(start, TokenKind::RightBrace),
            ',' => self.add_token(start, TokenKind::Comma),
            '.' => self.add_token(start, TokenKind::Dot),
            '-' => self.add_token(start, TokenKind::Minus),
            '+' => self.add_token(start, TokenKind::Plus),
            ';' => self.add_token(start, TokenKind::Semicolon),
            '*' => self.add_token(start, TokenKind::Star),

            '!' => self.add_operator(start, TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_operator(start, TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_operator(start, TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_operator(start, TokenKind::GreaterEqual, TokenKind::Greater),

            '/' => {
                if self.iter.next_if_eq('/') {
                    // the new line is left for the line counter
                    self.walk_iter(|character| character != '\n');
                } else {
                    self.add_token(start, TokenKind::Slash);
                }
            }

            '\n' => self.line += 1,
            ' ' | '\r' | '\t' => {}

            '"' => self.handle_string(start, handler),
            character if character.is_ascii_digit() => self.handle_number(start, handler),
            character if is_first_identifier_character(character) => {
                self.handle_identifier_and_keyword(start);
            }

            character => handler.receive(
                UnexpectedCharacter {
                    span: self.iter.span_from(start),
                    character,
                    line: self.line,
                }
                .into(),
            ),
        }
    }

    /// Increments the iterator until the predicate returns false.
    fn walk_iter(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some((_, character)) = self.iter.peek() {
            if !predicate(character) {
                break;
            }

            self.iter.next();
        }
    }

    fn add_token(&mut self, start: ByteIndex, kind: TokenKind) {
        let span = self.iter.span_from(start);
        self.tokens.push(Token::new(kind, span, None, self.line));
    }

    /// Adds `with_equal` if the next character is `=`, otherwise `single`.
    fn add_operator(&mut self, start: ByteIndex, with_equal: TokenKind, single: TokenKind) {
        let kind = if self.iter.next_if_eq('=') {
            with_equal
        } else {
            single
        };

        self.add_token(start, kind);
    }

    fn handle_string(&mut self, start: ByteIndex, handler: &dyn Handler<error::Error>) {
        let line = self.line;
        let opening_quote = self.iter.span_from(start);

        while let Some((_, character)) = self.iter.next() {
            match character {
                '"' => {
                    let span = self.iter.span_from(start);
                    let lexeme = span.str();
                    let text = lexeme[1..lexeme.len() - 1].to_owned();

                    self.tokens
                        .push(Token::new(TokenKind::String, span, Some(text.into()), line));
                    return;
                }
                '\n' => self.line += 1,
                _ => {}
            }
        }

        handler.receive(
            UnterminatedString {
                span: opening_quote,
                line,
            }
            .into(),
        );
    }

    fn handle_number(&mut self, start: ByteIndex, handler: &dyn Handler<error::Error>) {
        // whole number part
        self.walk_iter(|character| character.is_ascii_digit());

        // a `.` is only part of the number when a digit follows it
        let has_fraction = matches!(self.iter.peek(), Some((_, '.')))
            && matches!(self.iter.peek_second(), Some((_, next)) if next.is_ascii_digit());

        if has_fraction {
            self.iter.next();
            self.walk_iter(|character| character.is_ascii_digit());
        }

        let span = self.iter.span_from(start);
        let value = span.str().parse::<f64>();

        match value {
            Ok(value) => {
                self.tokens
                    .push(Token::new(TokenKind::Number, span, Some(value.into()), self.line));
            }
            Err(..) => handler.receive(
                InvalidNumericLiteral {
                    span,
                    line: self.line,
                }
                .into(),
            ),
        }
    }

    fn handle_identifier_and_keyword(&mut self, start: ByteIndex) {
        self.walk_iter(is_identifier_character);

        let span = self.iter.span_from(start);
        let kind = TokenKind::from_word(span.str());

        self.tokens.push(Token::new(kind, span, None, self.line));
    }
}
