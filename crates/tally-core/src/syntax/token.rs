// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for tally lexical analysis.
//!
//! This module defines the tokens produced by the lexer. Every token
//! records its exact source text, so concatenating the text of all
//! scanned tokens (trivia included, in scan order) reconstructs the input
//! line byte for byte.
//!
//! # Token Structure
//!
//! Each token consists of:
//! - A [`TokenKind`] indicating the type of token
//! - A [`Span`] indicating its location in the input line
//! - The exact source text it was scanned from
//! - For number tokens, the parsed `i32` value

use ecow::EcoString;

use super::Span;

/// The kind of token, not including source location or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A decimal integer literal: `42`
    Number,

    /// A maximal run of whitespace (trivia; dropped before parsing)
    Whitespace,

    /// Addition operator: `+`
    Plus,

    /// Subtraction operator: `-`
    Minus,

    /// Multiplication operator: `*`
    Star,

    /// Division operator: `/`
    Slash,

    /// Left parenthesis: `(`
    LeftParen,

    /// Right parenthesis: `)`
    RightParen,

    /// An unrecognized character (trivia; dropped before parsing)
    Error,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns the stable display label for this kind.
    ///
    /// Labels appear verbatim in diagnostics and in parse tree output, so
    /// they are part of the observable surface and must not change.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Number => "NumberToken",
            Self::Whitespace => "WhitespaceToken",
            Self::Plus => "PlusToken",
            Self::Minus => "MinusToken",
            Self::Star => "StarToken",
            Self::Slash => "SlashToken",
            Self::LeftParen => "OpenParenthesisToken",
            Self::RightParen => "CloseParenthesisToken",
            Self::Error => "BadToken",
            Self::Eof => "EndOfFileToken",
        }
    }

    /// Returns `true` for tokens the parser drops before matching the
    /// grammar: whitespace and bad characters.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Error)
    }

    /// Returns `true` if this is a binary operator.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }

    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A token with its source location, exact text, and parsed value.
///
/// # Examples
///
/// ```
/// use tally_core::syntax::{Span, Token, TokenKind};
///
/// let token = Token::number(Span::new(0, 2), "42", 42);
/// assert_eq!(token.kind(), TokenKind::Number);
/// assert_eq!(token.text(), "42");
/// assert_eq!(token.value(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
    text: EcoString,
    value: Option<i32>,
}

impl Token {
    /// Creates a new token with no value.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span, text: impl Into<EcoString>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
            value: None,
        }
    }

    /// Creates a number token carrying its parsed value.
    #[must_use]
    pub fn number(span: Span, text: impl Into<EcoString>, value: i32) -> Self {
        Self {
            kind: TokenKind::Number,
            span,
            text: text.into(),
            value: Some(value),
        }
    }

    /// Creates the zero-width token error recovery substitutes for a
    /// missing one: the expected kind at `position`, with empty text and
    /// no value.
    #[must_use]
    pub fn missing(kind: TokenKind, position: u32) -> Self {
        Self {
            kind,
            span: Span::new(position, position),
            text: EcoString::new(),
            value: None,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the source span of this token.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the exact source text this token was scanned from.
    ///
    /// Empty for tokens synthesized by error recovery; `"\0"` for the
    /// end-of-file token.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the parsed value for number tokens.
    #[must_use]
    pub const fn value(&self) -> Option<i32> {
        self.value
    }

    /// Returns `true` if this token was synthesized by error recovery
    /// rather than scanned from the input.
    ///
    /// Scanned tokens always have text (the end-of-file token's is
    /// `"\0"`), so empty text means synthesized.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.text.is_empty()
    }
}
