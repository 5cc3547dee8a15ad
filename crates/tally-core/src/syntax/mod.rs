// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexing and parsing for tally expressions.
//!
//! This module contains the lexer, the parser, and the diagnostic type
//! they share.
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts one line of source text into a stream of
//! [`Token`]s. Each token carries its source location via [`Span`] and
//! its exact source text, so the stream reconstructs the line byte for
//! byte.
//!
//! ```
//! use tally_core::syntax::Lexer;
//!
//! let tokens: Vec<_> = Lexer::new("1 + 2").collect();
//! assert_eq!(tokens.len(), 5); // 1, space, +, space, 2
//! ```
//!
//! See [`TokenKind`] for all supported syntactic elements.
//!
//! # Parsing
//!
//! [`Parser::new`] lexes the line, drops trivia (whitespace and bad
//! characters), and [`Parser::parse`] builds a
//! [`SyntaxTree`](crate::ast::SyntaxTree) from what remains.
//!
//! # Error Handling
//!
//! Neither stage ever fails. Both collect [`Diagnostic`]s and carry on,
//! and the parser substitutes zero-width missing tokens where the input
//! didn't match the grammar. A tree whose diagnostics are non-empty is
//! complete in shape but not trustworthy in content.

mod diagnostic;
mod lexer;
mod parser;
mod span;
mod token;


pub use diagnostic::Diagnostic;
pub use lexer::{Lexer, lex, lex_with_eof};
pub use parser::Parser;
pub use span::Span;
pub use token::{Token, TokenKind};
