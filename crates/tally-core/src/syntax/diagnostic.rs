// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic collection.
//!
//! The pipeline never aborts on malformed input. The lexer and the parser
//! run to completion, recording a `Diagnostic` for every problem they
//! find, and still hand back a complete token stream or syntax tree.
//! Callers inspect the collected diagnostics to decide whether the result
//! is safe to evaluate.

use ecow::EcoString;

use super::Span;

/// A diagnostic message describing one problem in the input.
///
/// Diagnostics are ordered: everything the lexer reported comes before
/// everything the parser reported, each in the order of discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The error message.
    pub message: EcoString,
    /// The source location.
    pub span: Span,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    #[must_use]
    pub fn error(message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
