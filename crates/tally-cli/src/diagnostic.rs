// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Beautiful error diagnostics using miette.
//!
//! Converts tally-core diagnostics into miette-formatted errors with:
//! - The offending expression as source context
//! - Arrows pointing to the error location
//! - Diagnostic codes for easy reference

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use miette::{Diagnostic, SourceSpan};
use tally_core::syntax::Diagnostic as CoreDiagnostic;

/// A syntax diagnostic with rich formatting.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(tally::syntax))]
pub struct SyntaxDiagnostic {
    /// Human-readable error message, verbatim from the pipeline
    pub message: String,
    /// The expression for context
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the error
    #[label("here")]
    pub span: SourceSpan,
}

impl SyntaxDiagnostic {
    /// Create a new diagnostic from a tally-core diagnostic.
    pub fn from_core_diagnostic(diagnostic: &CoreDiagnostic, source: &str) -> Self {
        Self {
            message: diagnostic.message.to_string(),
            src: miette::NamedSource::new("expression", source.to_string()),
            span: diagnostic.span.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::syntax::Span;

    #[test]
    fn from_core_diagnostic_preserves_message_and_span() {
        let core = CoreDiagnostic::error("ERROR: bad character in input: '@'", Span::new(2, 3));
        let diag = SyntaxDiagnostic::from_core_diagnostic(&core, "1+@2");

        assert_eq!(diag.message, "ERROR: bad character in input: '@'");
        assert_eq!(diag.span.offset(), 2);
        assert_eq!(diag.span.len(), 1);
    }

    #[test]
    fn from_core_diagnostic_zero_length_span() {
        let core = CoreDiagnostic::error("unexpected end", Span::new(4, 4));
        let diag = SyntaxDiagnostic::from_core_diagnostic(&core, "1+2+");

        assert_eq!(diag.span.offset(), 4);
        assert_eq!(diag.span.len(), 0);
    }
}
