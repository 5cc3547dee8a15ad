// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Tree-walking evaluation of tally expressions.
//!
//! The evaluator walks a diagnostic-free [`Expression`] tree and folds it
//! into a single `i32`. Errors carry source locations ([`Span`]) and
//! integrate with [`miette`] for rich reporting.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Expression;
use crate::syntax::{Span, TokenKind};

/// An evaluation failure.
///
/// Syntax problems never reach the evaluator (callers check the tree's
/// diagnostics first), so the only failures here are runtime arithmetic
/// and operator tokens outside the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero {
        /// The operator token's location.
        #[label("this division")]
        span: Span,
    },

    /// A binary node carried an operator token outside the four
    /// arithmetic kinds. Parser-built trees never contain one; trees
    /// assembled by hand can.
    #[error("unsupported binary operator <{kind}>")]
    UnsupportedOperator {
        /// The offending operator kind.
        kind: TokenKind,
        /// The operator token's location.
        #[label("this operator")]
        span: Span,
    },
}

/// A tree-walking evaluator.
///
/// The caller is responsible for checking
/// [`diagnostics`](crate::ast::SyntaxTree::diagnostics) before
/// evaluating: a recovered tree evaluates without panicking (missing
/// number tokens count as `0`), but the result is meaningless.
///
/// Arithmetic wraps at 32 bits and division truncates toward zero, so
/// every value-producing path is total: `2147483647 + 1` wraps rather
/// than aborting, and `-2147483648 / -1` wraps to `-2147483648`.
///
/// # Examples
///
/// ```
/// use tally_core::ast::SyntaxTree;
/// use tally_core::eval::Evaluator;
///
/// let tree = SyntaxTree::parse("(1 + 2) * 3");
/// assert!(!tree.has_diagnostics());
/// assert_eq!(Evaluator::new(tree.root()).evaluate(), Ok(9));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    root: &'a Expression,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `root`.
    #[must_use]
    pub const fn new(root: &'a Expression) -> Self {
        Self { root }
    }

    /// Computes the tree's value.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] when a divisor evaluates to
    /// zero, and [`EvalError::UnsupportedOperator`] for operator tokens
    /// outside the grammar.
    pub fn evaluate(&self) -> Result<i32, EvalError> {
        Self::evaluate_expression(self.root)
    }

    fn evaluate_expression(expression: &Expression) -> Result<i32, EvalError> {
        match expression {
            Expression::Number { literal } => Ok(literal.value().unwrap_or(0)),
            Expression::Binary {
                left,
                operator,
                right,
            } => {
                let left = Self::evaluate_expression(left)?;
                let right = Self::evaluate_expression(right)?;
                match operator.kind() {
                    TokenKind::Plus => Ok(left.wrapping_add(right)),
                    TokenKind::Minus => Ok(left.wrapping_sub(right)),
                    TokenKind::Star => Ok(left.wrapping_mul(right)),
                    TokenKind::Slash => {
                        if right == 0 {
                            Err(EvalError::DivisionByZero {
                                span: operator.span(),
                            })
                        } else {
                            Ok(left.wrapping_div(right))
                        }
                    }
                    kind => Err(EvalError::UnsupportedOperator {
                        kind,
                        span: operator.span(),
                    }),
                }
            }
            Expression::Parenthesized { expression, .. } => Self::evaluate_expression(expression),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SyntaxTree;
    use crate::syntax::Token;

    fn eval(text: &str) -> Result<i32, EvalError> {
        let tree = SyntaxTree::parse(text);
        assert!(
            !tree.has_diagnostics(),
            "unexpected diagnostics for {text:?}: {:?}",
            tree.diagnostics()
        );
        Evaluator::new(tree.root()).evaluate()
    }

    #[test]
    fn literal_evaluates_to_itself() {
        assert_eq!(eval("0"), Ok(0));
        assert_eq!(eval("42"), Ok(42));
        assert_eq!(eval("2147483647"), Ok(i32::MAX));
    }

    #[test]
    fn basic_arithmetic() {
        assert_eq!(eval("1+2"), Ok(3));
        assert_eq!(eval("7-5"), Ok(2));
        assert_eq!(eval("6*7"), Ok(42));
        assert_eq!(eval("9/3"), Ok(3));
    }

    #[test]
    fn multiplication_groups_before_first_additive() {
        assert_eq!(eval("2*3+4"), Ok(10));
        assert_eq!(eval("12/4-1"), Ok(2));
    }

    #[test]
    fn parentheses_override_grouping() {
        assert_eq!(eval("(1+2)*3"), Ok(9));
        assert_eq!(eval("((2))"), Ok(2));
    }

    #[test]
    fn left_associative_chains() {
        assert_eq!(eval("10-2-3"), Ok(5));
        assert_eq!(eval("100/5/2"), Ok(10));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(eval("7/2"), Ok(3));
        assert_eq!(eval("(0-7)/2"), Ok(-3));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let tree = SyntaxTree::parse("1/0");
        assert!(!tree.has_diagnostics());
        let result = Evaluator::new(tree.root()).evaluate();
        assert_eq!(
            result,
            Err(EvalError::DivisionByZero {
                span: Span::new(1, 2)
            })
        );
    }

    #[test]
    fn division_by_computed_zero_is_an_error() {
        let tree = SyntaxTree::parse("5/(2-2)");
        let result = Evaluator::new(tree.root()).evaluate();
        assert!(matches!(result, Err(EvalError::DivisionByZero { .. })));
    }

    #[test]
    fn division_error_reports_the_leftmost_failure() {
        // Evaluation is depth-first left to right, so the first faulting
        // division wins.
        assert_eq!(
            eval("1/0*2/0"),
            Err(EvalError::DivisionByZero {
                span: Span::new(1, 2)
            })
        );
    }

    #[test]
    fn addition_wraps_at_i32_max() {
        assert_eq!(eval("2147483647+1"), Ok(i32::MIN));
    }

    #[test]
    fn multiplication_wraps() {
        assert_eq!(eval("2147483647*2"), Ok(-2));
    }

    #[test]
    fn min_divided_by_minus_one_wraps() {
        assert_eq!(eval("(0-2147483647-1)/(0-1)"), Ok(i32::MIN));
    }

    #[test]
    fn division_error_display() {
        let error = EvalError::DivisionByZero {
            span: Span::new(1, 2),
        };
        assert_eq!(error.to_string(), "division by zero");
    }

    #[test]
    fn unsupported_operator_on_hand_built_tree() {
        // The parser never produces a binary node with a parenthesis for
        // an operator, but the tree type does not forbid it.
        let left = Expression::Number {
            literal: Token::number(Span::new(0, 1), "1", 1),
        };
        let right = Expression::Number {
            literal: Token::number(Span::new(2, 3), "2", 2),
        };
        let tree = Expression::Binary {
            left: Box::new(left),
            operator: Token::new(TokenKind::LeftParen, Span::new(1, 2), "("),
            right: Box::new(right),
        };

        let result = Evaluator::new(&tree).evaluate();
        assert_eq!(
            result,
            Err(EvalError::UnsupportedOperator {
                kind: TokenKind::LeftParen,
                span: Span::new(1, 2),
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "unsupported binary operator <OpenParenthesisToken>"
        );
    }

    #[test]
    fn recovered_tree_still_evaluates_without_panicking() {
        // Callers are expected not to do this, but it must not crash.
        let tree = SyntaxTree::parse("1+");
        assert!(tree.has_diagnostics());
        assert_eq!(Evaluator::new(tree.root()).evaluate(), Ok(1));
    }
}
