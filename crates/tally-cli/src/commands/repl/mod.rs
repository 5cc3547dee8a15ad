// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Interactive REPL for int32 arithmetic expressions.
//!
//! This module implements the `tally repl` command (also the default when
//! no subcommand is given). Each input line runs through the full
//! pipeline in-process:
//!
//! ```text
//! line ──▶ lexer ──▶ parser ──▶ syntax tree ──▶ evaluator ──▶ value
//!              │          │
//!              └──────────┴──▶ diagnostics (printed, evaluation skipped)
//! ```
//!
//! # Usage
//!
//! ```bash
//! tally            # Start interactive REPL
//! tally repl       # Same thing, spelled out
//! ```
//!
//! A blank line or `:exit` ends the session. `:tree` toggles a parse
//! tree dump before each result, useful for seeing how an expression
//! was grouped.

use miette::{IntoDiagnostic, Result};
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{DefaultEditor, Editor};

use tally_core::ast::SyntaxTree;
use tally_core::eval::Evaluator;

pub mod color;
pub(crate) mod display;

use display::{format_diagnostic, format_error, format_value, history_path, print_help};

/// Run the interactive REPL until the user exits.
pub fn run() -> Result<()> {
    println!("tally v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for available commands, :exit or a blank line to quit.");
    println!();

    // Set up rustyline editor
    let mut rl: Editor<(), FileHistory> = DefaultEditor::new().into_diagnostic()?;

    // Load history; a missing file is normal on first run
    let history_file = history_path()?;
    if let Err(error) = rl.load_history(&history_file) {
        tracing::debug!("No REPL history loaded: {error}");
    }

    let mut show_tree = false;

    // Main REPL loop
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();

                // A blank line ends the session.
                if line.is_empty() {
                    println!("Goodbye!");
                    break;
                }

                let _ = rl.add_history_entry(line);

                // Handle special commands
                match line {
                    ":exit" | ":quit" | ":q" => {
                        println!("Goodbye!");
                        break;
                    }
                    ":help" | ":h" | ":?" => {
                        print_help();
                    }
                    ":tree" => {
                        show_tree = !show_tree;
                        println!(
                            "{}",
                            if show_tree {
                                "Showing parse trees."
                            } else {
                                "Not showing parse trees."
                            }
                        );
                    }
                    _ => evaluate_line(line, show_tree),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C — discard the current line
                println!();
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                eprintln!("Readline error: {e}");
                break;
            }
        }
    }

    // Save history
    let _ = rl.save_history(&history_file);

    Ok(())
}

/// Parse and evaluate one input line, printing the outcome.
///
/// Any diagnostic suppresses evaluation; the value prints only after a
/// clean parse. Evaluation errors (division by zero) print as errors
/// without ending the session.
fn evaluate_line(source: &str, show_tree: bool) {
    let tree = SyntaxTree::parse(source);

    if show_tree {
        let rendered = display::render_tree(tree.root_node());
        print!("{}", color::paint(color::GRAY, &rendered));
    }

    if tree.has_diagnostics() {
        for diagnostic in tree.diagnostics() {
            eprintln!("{}", format_diagnostic(&diagnostic.message));
        }
        return;
    }

    match Evaluator::new(tree.root()).evaluate() {
        Ok(value) => println!("{}", format_value(value)),
        Err(error) => eprintln!("{}", format_error(&error.to_string())),
    }
}
