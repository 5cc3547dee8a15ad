// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `tally eval` — evaluate a single expression and print its value.
//!
//! This command runs one expression through the lexer, parser, and
//! evaluator, printing the value to stdout. Syntax diagnostics render as
//! miette reports on stderr and the command exits non-zero, which makes
//! it usable from scripts:
//!
//! ```bash
//! tally eval '(1 + 2) * 3'     # prints 9
//! tally eval --tree '1 + 2'    # parse tree on stdout, then 3
//! ```

use miette::Result;

use tally_core::ast::SyntaxTree;
use tally_core::eval::Evaluator;

use crate::commands::repl::{color, display};
use crate::diagnostic::SyntaxDiagnostic;

/// Evaluate `expression`, printing the parse tree first when `tree` is set.
///
/// Returns an error when the expression has syntax diagnostics or fails
/// to evaluate, so script callers can rely on the exit code.
pub fn run_eval(expression: &str, tree: bool) -> Result<()> {
    let parsed = SyntaxTree::parse(expression);

    if tree {
        let rendered = display::render_tree(parsed.root_node());
        print!("{}", color::paint(color::GRAY, &rendered));
    }

    if parsed.has_diagnostics() {
        for diagnostic in parsed.diagnostics() {
            let report = miette::Report::new(SyntaxDiagnostic::from_core_diagnostic(
                diagnostic, expression,
            ));
            eprintln!("{report:?}");
        }
        let count = parsed.diagnostics().len();
        let plural = if count == 1 { "" } else { "s" };
        miette::bail!("{count} syntax error{plural} in expression");
    }

    let value = Evaluator::new(parsed.root())
        .evaluate()
        .map_err(|error| miette::Report::new(error).with_source_code(expression.to_string()))?;
    println!("{value}");

    Ok(())
}
