// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! tally expression pipeline.
//!
//! This crate contains the core evaluation pipeline:
//! - Lexical analysis (tokenization)
//! - Parsing (syntax tree construction)
//! - Evaluation (tree walking)
//!
//! The stages run strictly left to right, text to tokens to tree to
//! value, and the first two never abort: malformed input produces a
//! complete [`ast::SyntaxTree`] plus collected [`syntax::Diagnostic`]s.
//! Whoever drives the pipeline checks the diagnostics and only then asks
//! the [`eval::Evaluator`] for a value.

#![doc = include_str!("../../../README.md")]

pub mod ast;
pub mod eval;
pub mod syntax;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{Expression, SyntaxNode, SyntaxTree};
    pub use crate::eval::{EvalError, Evaluator};
    pub use crate::syntax::{Diagnostic, Span, Token, TokenKind};
}
