// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! REPL display formatting, help text, and history.

use std::fs;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tally_core::ast::SyntaxNode;

use crate::paths::tally_dir;

use super::color;

/// Return the path to the REPL history file, creating the parent directory
/// if needed.
///
/// The `TALLY_HISTORY` environment variable (if set and non-empty)
/// overrides the default `~/.tally/history`; no directory is created for
/// an override path.
pub(crate) fn history_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("TALLY_HISTORY") {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let dir = tally_dir()?;
    fs::create_dir_all(&dir).into_diagnostic()?;
    Ok(dir.join("history"))
}

/// Render a syntax tree as an indented branch diagram.
///
/// Pure string building; callers decide coloring. Number tokens print
/// their value after the label, every other node prints its label alone.
pub(crate) fn render_tree(root: SyntaxNode<'_>) -> String {
    let mut out = String::new();
    render_node(&mut out, root, "", true);
    out
}

fn render_node(out: &mut String, node: SyntaxNode<'_>, indent: &str, is_last: bool) {
    let marker = if is_last { "└── " } else { "├── " };
    out.push_str(indent);
    out.push_str(marker);
    out.push_str(node.label());
    if let Some(value) = node.value() {
        out.push(' ');
        out.push_str(&value.to_string());
    }
    out.push('\n');

    let child_indent = format!("{indent}{}", if is_last { "    " } else { "│   " });
    let children = node.children();
    let last_index = children.len().saturating_sub(1);
    for (index, child) in children.into_iter().enumerate() {
        render_node(out, child, &child_indent, index == last_index);
    }
}

/// Format an evaluated value for REPL display.
pub(crate) fn format_value(value: i32) -> String {
    color::paint(color::YELLOW, &value.to_string())
}

/// Format a syntax diagnostic line for REPL display.
pub(crate) fn format_diagnostic(message: &str) -> String {
    color::paint(color::RED, message)
}

/// Format an evaluation error message for REPL display.
pub(crate) fn format_error(msg: &str) -> String {
    if color::is_enabled() {
        format!("{}{}Error:{} {msg}", color::BOLD, color::RED, color::RESET)
    } else {
        format!("Error: {msg}")
    }
}

/// Print help message.
pub(crate) fn print_help() {
    println!("tally REPL commands:");
    println!();
    println!("  :help, :h       Show this help message");
    println!("  :tree           Toggle parse tree display");
    println!("  :exit, :q       Exit the REPL (a blank line also exits)");
    println!();
    println!("Anything else is evaluated as an int32 arithmetic expression:");
    println!("  numbers, + - * /, and parentheses, e.g. (1 + 2) * 3");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    use serial_test::serial;
    use tally_core::ast::SyntaxTree;

    /// RAII guard that saves and restores `COLOR_ENABLED` on drop.
    struct ColorGuard {
        prev: bool,
    }

    impl ColorGuard {
        fn set(enabled: bool) -> Self {
            let prev = color::COLOR_ENABLED.load(Ordering::Relaxed);
            color::COLOR_ENABLED.store(enabled, Ordering::Relaxed);
            Self { prev }
        }
    }

    impl Drop for ColorGuard {
        fn drop(&mut self) {
            color::COLOR_ENABLED.store(self.prev, Ordering::Relaxed);
        }
    }

    #[test]
    fn render_tree_single_number() {
        let tree = SyntaxTree::parse("42");
        let rendered = render_tree(tree.root_node());
        assert_eq!(rendered, "└── NumberExpression\n    └── NumberToken 42\n");
    }

    #[test]
    fn render_tree_binary_expression() {
        let tree = SyntaxTree::parse("1 + 2");
        let rendered = render_tree(tree.root_node());
        let expected = "\
└── BinaryExpression
    ├── NumberExpression
    │   └── NumberToken 1
    ├── PlusToken
    └── NumberExpression
        └── NumberToken 2
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn render_tree_parenthesized_expression() {
        let tree = SyntaxTree::parse("(1)*2");
        let rendered = render_tree(tree.root_node());
        let expected = "\
└── BinaryExpression
    ├── ParenthesizedExpression
    │   ├── OpenParenthesisToken
    │   ├── NumberExpression
    │   │   └── NumberToken 1
    │   └── CloseParenthesisToken
    ├── StarToken
    └── NumberExpression
        └── NumberToken 2
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn render_tree_missing_token_has_no_value() {
        // "1+" recovers with a zero-width number token; it renders as a
        // bare label with no trailing value.
        let tree = SyntaxTree::parse("1+");
        let rendered = render_tree(tree.root_node());
        assert!(rendered.ends_with("└── NumberExpression\n        └── NumberToken\n"));
    }

    #[test]
    #[serial(color)]
    fn format_value_plain_when_disabled() {
        let _guard = ColorGuard::set(false);
        assert_eq!(format_value(7), "7");
        assert_eq!(format_value(-3), "-3");
    }

    #[test]
    #[serial(color)]
    fn format_value_yellow_when_enabled() {
        let _guard = ColorGuard::set(true);
        assert_eq!(format_value(7), "\x1b[33m7\x1b[0m");
    }

    #[test]
    #[serial(color)]
    fn format_diagnostic_red_when_enabled() {
        let _guard = ColorGuard::set(true);
        assert_eq!(format_diagnostic("bad"), "\x1b[31mbad\x1b[0m");
    }

    #[test]
    #[serial(color)]
    fn format_error_prefixes_message() {
        let _guard = ColorGuard::set(false);
        assert_eq!(format_error("division by zero"), "Error: division by zero");
    }

    #[test]
    #[serial(history)]
    fn history_path_respects_env_var() {
        // SAFETY: This test runs serially and only modifies the environment temporarily
        unsafe {
            std::env::set_var("TALLY_HISTORY", "/tmp/test-tally-history");
        }
        let path = history_path().expect("Failed to get history_path");
        assert_eq!(path, PathBuf::from("/tmp/test-tally-history"));
        // SAFETY: Cleaning up test state
        unsafe {
            std::env::remove_var("TALLY_HISTORY");
        }
    }

    #[test]
    #[serial(history)]
    fn history_path_ignores_empty_env_var() {
        // SAFETY: This test runs serially and only modifies the environment temporarily
        unsafe {
            std::env::set_var("TALLY_HISTORY", "");
        }
        let path = history_path().expect("Failed to get history_path");
        assert!(
            path.ends_with(".tally/history"),
            "Empty env var should use default"
        );
        // SAFETY: Cleaning up test state
        unsafe {
            std::env::remove_var("TALLY_HISTORY");
        }
    }
}
