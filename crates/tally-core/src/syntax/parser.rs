// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for tally expressions.
//!
//! This parser builds an [`Expression`] tree from a stream of tokens.
//!
//! # Design Philosophy
//!
//! - **Error recovery is mandatory**: the parser MUST always produce a
//!   tree, substituting zero-width missing tokens where input ran out or
//!   had the wrong kind
//! - **Multiple errors**: report all errors, don't stop at the first
//! - **Precise spans**: every diagnostic points at an exact location
//! - **No lookahead surprises**: the token cursor clamps to the trailing
//!   end-of-file token, so peeking never runs out of bounds
//!
//! # Grammar
//!
//! ```text
//! expression → term
//! term       → factor ( ( "+" | "-" ) primary )*
//! factor     → primary ( ( "*" | "/" ) primary )*
//! primary    → "(" expression ")" | number
//! ```
//!
//! Note the right operand of an additive step is `primary`, not
//! `factor`: `*` and `/` bind tighter only up to the first `+` or `-`.
//! After that, a `*` or `/` ends the expression, and whatever follows it
//! surfaces as a trailing unexpected-token diagnostic. `2 * 3 + 4`
//! parses fully; `2 + 3 * 4` parses as `(2 + 3)` with a diagnostic at
//! the `*`.
//!
//! # Usage
//!
//! ```
//! use tally_core::syntax::Parser;
//!
//! let tree = Parser::new("(1 + 2) * 3").parse();
//! assert!(!tree.has_diagnostics());
//! ```

use crate::ast::{Expression, SyntaxTree};

use super::{Diagnostic, Token, TokenKind, lex_with_eof};

/// A recursive descent parser over one line of source text.
///
/// Construction runs the lexer eagerly: the parser starts from the full
/// token stream with trivia (whitespace and bad characters) dropped, and
/// adopts the lexer's diagnostics so they precede its own.
#[derive(Debug)]
pub struct Parser {
    /// The tokens being parsed. Always ends with an end-of-file token.
    tokens: Vec<Token>,
    /// Current token index.
    position: usize,
    /// Accumulated diagnostics.
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Creates a parser over the meaningful tokens of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let (tokens, diagnostics) = lex_with_eof(text);
        let tokens = tokens
            .into_iter()
            .filter(|token| !token.kind().is_trivia())
            .collect();
        Self {
            tokens,
            position: 0,
            diagnostics,
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Returns the token at `offset` from the cursor, clamped to the
    /// trailing end-of-file token.
    fn peek(&self, offset: usize) -> &Token {
        let index = self.position + offset;
        if index < self.tokens.len() {
            &self.tokens[index]
        } else {
            // The lexer guarantees a trailing EOF token, so past-the-end
            // lookahead lands there rather than panicking.
            self.tokens
                .last()
                .expect("parser has no tokens; expected at least an EOF token")
        }
    }

    /// Returns the current token.
    fn current(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the current token kind.
    fn current_kind(&self) -> TokenKind {
        self.current().kind()
    }

    /// Consumes the current token and returns it.
    fn next_token(&mut self) -> Token {
        let current = self.current().clone();
        self.position += 1;
        current
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// Otherwise records a diagnostic and returns a zero-width missing
    /// token of the expected kind at the current position, leaving the
    /// offending token in place for the caller above to retry.
    fn expect(&mut self, expected: TokenKind) -> Token {
        if self.current_kind() == expected {
            return self.next_token();
        }

        let actual = self.current_kind();
        let span = self.current().span();
        self.diagnostics.push(Diagnostic::error(
            format!("ERROR : unexpected token <{actual}> , expected<{expected}> "),
            span,
        ));
        Token::missing(expected, span.start())
    }

    // ========================================================================
    // Grammar Productions
    // ========================================================================

    /// Parses the whole line: one expression followed by end of input.
    #[must_use]
    pub fn parse(mut self) -> SyntaxTree {
        let root = self.parse_expression();
        let eof_token = self.expect(TokenKind::Eof);
        SyntaxTree::new(root, eof_token, self.diagnostics)
    }

    fn parse_expression(&mut self) -> Expression {
        self.parse_term()
    }

    /// Additive level. Each step folds the accumulated left operand with
    /// a `primary` right operand, so the result is left-associative and
    /// multiplicative grouping applies only before the first `+`/`-`.
    fn parse_term(&mut self) -> Expression {
        let mut left = self.parse_factor();

        while matches!(self.current_kind(), TokenKind::Plus | TokenKind::Minus) {
            let operator = self.next_token();
            let right = self.parse_primary();
            left = Expression::Binary {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            };
        }

        left
    }

    /// Multiplicative level.
    fn parse_factor(&mut self) -> Expression {
        let mut left = self.parse_primary();

        while matches!(self.current_kind(), TokenKind::Star | TokenKind::Slash) {
            let operator = self.next_token();
            let right = self.parse_primary();
            left = Expression::Binary {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            };
        }

        left
    }

    /// A parenthesized sub-expression or a bare number literal.
    fn parse_primary(&mut self) -> Expression {
        if self.current_kind() == TokenKind::LeftParen {
            let open_paren = self.next_token();
            let expression = Box::new(self.parse_expression());
            let close_paren = self.expect(TokenKind::RightParen);
            return Expression::Parenthesized {
                open_paren,
                expression,
                close_paren,
            };
        }

        let literal = self.expect(TokenKind::Number);
        Expression::Number { literal }
    }
}
