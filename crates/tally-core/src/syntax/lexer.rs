// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for tally expressions.
//!
//! This module converts one line of source text into a stream of
//! [`Token`]s. The lexer is hand-written for maximum control over error
//! recovery.
//!
//! # Design Principles
//!
//! - **Error recovery**: Never panic on malformed input; emit
//!   [`TokenKind::Error`] and a [`Diagnostic`], then keep scanning
//! - **Exact text**: Every token carries the text it was scanned from,
//!   so the token stream reconstructs the input line byte for byte
//! - **Precise spans**: Every token carries its exact source location
//!
//! # Example
//!
//! ```
//! use tally_core::syntax::lex;
//!
//! let (tokens, diagnostics) = lex("1 + 2");
//! assert!(diagnostics.is_empty());
//! assert_eq!(tokens.len(), 5); // 1, space, +, space, 2
//! ```

use super::{Diagnostic, Span, Token, TokenKind};

use std::iter::Peekable;
use std::str::CharIndices;

/// A lexer that tokenizes one line of arithmetic source text.
///
/// Number tokens take a maximal run of ASCII digits; whitespace tokens
/// take a maximal run of Unicode whitespace. Everything the grammar does
/// not know becomes a [`TokenKind::Error`] token plus a diagnostic, and
/// scanning continues with the next character.
///
/// The lexer implements [`Iterator`] for easy consumption; the iterator
/// stops before the end-of-file token. Call [`Lexer::next_token`]
/// directly to observe the end-of-file token itself.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
    /// Problems found so far, in scan order.
    diagnostics: Vec<Diagnostic>,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("remaining", &self.source.get(self.position..).unwrap_or(""))
            .finish()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the current byte position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "input lines over 4GB are not supported"
    )]
    fn current_position(&self) -> u32 {
        self.position as u32
    }

    /// Creates a span from start to current position.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_position())
    }

    /// Extracts source text for a span.
    fn text_for(&self, span: Span) -> &'src str {
        &self.source[span.as_range()]
    }

    /// Scans and returns the next token.
    ///
    /// At end of input this returns the end-of-file token, with text
    /// `"\0"` and an empty span, and keeps returning it if called again.
    pub fn next_token(&mut self) -> Token {
        let start = self.current_position();

        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, Span::new(start, start), "\0");
        };

        if c.is_ascii_digit() {
            return self.lex_number(start);
        }

        if c.is_whitespace() {
            self.advance_while(char::is_whitespace);
            let span = self.span_from(start);
            return Token::new(TokenKind::Whitespace, span, self.text_for(span));
        }

        self.advance();
        let span = self.span_from(start);
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            _ => {
                self.diagnostics.push(Diagnostic::error(
                    format!("ERROR: bad character in input: '{c}'"),
                    span,
                ));
                TokenKind::Error
            }
        };
        Token::new(kind, span, self.text_for(span))
    }

    /// Lexes a maximal run of ASCII digits into a number token.
    fn lex_number(&mut self, start: u32) -> Token {
        self.advance_while(|c| c.is_ascii_digit());
        let span = self.span_from(start);
        let text = self.text_for(span);
        let value = match text.parse::<i32>() {
            Ok(value) => value,
            Err(_) => {
                // The message quotes the whole input line, not just the
                // digits that overflowed.
                self.diagnostics.push(Diagnostic::error(
                    format!("the number {} isn't valid int32", self.source),
                    span,
                ));
                0
            }
        };
        Token::number(span, text, value)
    }

    /// Returns the diagnostics collected so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the lexer and returns all collected diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind().is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Convenience function to lex source into tokens (excluding EOF) plus
/// the collected diagnostics.
#[must_use]
pub fn lex(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.by_ref().collect();
    (tokens, lexer.into_diagnostics())
}

/// Like [`lex`], but the token stream ends with the end-of-file token.
///
/// This is the form the parser consumes: the trailing end-of-file token
/// is what lets it report "expected more input" with a position.
#[must_use]
pub fn lex_with_eof(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = token.kind().is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    (tokens, lexer.into_diagnostics())
}
