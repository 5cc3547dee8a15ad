// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Syntax tree for tally expressions.
//!
//! The parser builds an [`Expression`] tree bottom-up; each node
//! exclusively owns its children, and every leaf is a [`Token`] scanned
//! from (or synthesized into) the input line. [`SyntaxTree`] bundles the
//! root with the end-of-file token and all collected diagnostics, and
//! [`SyntaxNode`] offers a uniform borrowed view over nodes and leaves
//! for display traversal.

use crate::syntax::{Diagnostic, Parser, Span, Token, TokenKind};

/// An arithmetic expression node.
///
/// Node kinds are closed: the evaluator matches exhaustively, so a
/// malformed tree shape is unrepresentable rather than a runtime error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// An integer literal: `42`
    Number {
        /// The number token carrying the parsed value.
        literal: Token,
    },

    /// A binary operation: `1 + 2`
    Binary {
        /// The left operand.
        left: Box<Expression>,
        /// The operator token.
        operator: Token,
        /// The right operand.
        right: Box<Expression>,
    },

    /// A parenthesized sub-expression: `(1 + 2)`
    Parenthesized {
        /// The `(` token.
        open_paren: Token,
        /// The inner expression.
        expression: Box<Expression>,
        /// The `)` token.
        close_paren: Token,
    },
}

impl Expression {
    /// Returns the source span covered by this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Number { literal } => literal.span(),
            Self::Binary { left, right, .. } => left.span().merge(right.span()),
            Self::Parenthesized {
                open_paren,
                close_paren,
                ..
            } => open_paren.span().merge(close_paren.span()),
        }
    }

    /// Returns the stable display label for this node.
    ///
    /// Like token kind labels, these appear verbatim in parse tree
    /// output and must not change.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Number { .. } => "NumberExpression",
            Self::Binary { .. } => "BinaryExpression",
            Self::Parenthesized { .. } => "ParenthesizedExpression",
        }
    }
}

/// A borrowed view of one node in the syntax tree: an expression or one
/// of its leaf tokens.
///
/// This is the traversal surface for the parse tree printer: a label,
/// the ordered children, and a display value for number tokens. Children
/// appear in source order, so walking the view left to right visits the
/// line left to right.
#[derive(Debug, Clone, Copy)]
pub enum SyntaxNode<'a> {
    /// An inner expression node.
    Expression(&'a Expression),
    /// A leaf token.
    Token(&'a Token),
}

impl<'a> SyntaxNode<'a> {
    /// Returns the display label for this node.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Expression(expression) => expression.label(),
            Self::Token(token) => token.kind().label(),
        }
    }

    /// Returns the ordered direct children of this node.
    ///
    /// Tokens are leaves and have none.
    #[must_use]
    pub fn children(self) -> Vec<SyntaxNode<'a>> {
        match self {
            Self::Token(_) => Vec::new(),
            Self::Expression(expression) => match expression {
                Expression::Number { literal } => vec![Self::Token(literal)],
                Expression::Binary {
                    left,
                    operator,
                    right,
                } => vec![
                    Self::Expression(left),
                    Self::Token(operator),
                    Self::Expression(right),
                ],
                Expression::Parenthesized {
                    open_paren,
                    expression,
                    close_paren,
                } => vec![
                    Self::Token(open_paren),
                    Self::Expression(expression),
                    Self::Token(close_paren),
                ],
            },
        }
    }

    /// Returns the display value for number tokens, if any.
    #[must_use]
    pub const fn value(self) -> Option<i32> {
        match self {
            Self::Token(token) => token.value(),
            Self::Expression(_) => None,
        }
    }
}

/// The result of parsing one line of source text.
///
/// Parsing always produces a tree. When the input was malformed the tree
/// still has the right shape, with zero-width missing tokens standing in
/// for what the parser expected, and [`SyntaxTree::diagnostics`] is
/// non-empty. Callers must check the diagnostics before evaluating.
///
/// # Examples
///
/// ```
/// use tally_core::ast::SyntaxTree;
///
/// let tree = SyntaxTree::parse("2 * 3 + 4");
/// assert!(!tree.has_diagnostics());
///
/// let tree = SyntaxTree::parse("2 +");
/// assert!(tree.has_diagnostics());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    root: Expression,
    eof_token: Token,
    diagnostics: Vec<Diagnostic>,
}

impl SyntaxTree {
    pub(crate) fn new(root: Expression, eof_token: Token, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            root,
            eof_token,
            diagnostics,
        }
    }

    /// Lexes and parses `text` into a syntax tree.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Parser::new(text).parse()
    }

    /// Returns the root expression.
    #[must_use]
    pub const fn root(&self) -> &Expression {
        &self.root
    }

    /// Returns the end-of-file token the parser consumed last.
    ///
    /// Its kind is always [`TokenKind::Eof`]; it is a synthesized
    /// missing token when the parser stopped before real end of input.
    #[must_use]
    pub const fn eof_token(&self) -> &Token {
        &self.eof_token
    }

    /// Returns every diagnostic the pipeline collected, the lexer's
    /// first in scan order, then the parser's in parse order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if any stage reported a problem.
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Returns the root as a [`SyntaxNode`] for display traversal.
    #[must_use]
    pub const fn root_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::Expression(&self.root)
    }
}
