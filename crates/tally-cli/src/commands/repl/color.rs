// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! ANSI color support for the tally REPL.
//!
//! Provides ANSI color codes and a global color-enabled flag that respects
//! the `NO_COLOR` environment variable and `--no-color` CLI flag.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag controlling whether color output is enabled.
/// Made `pub(super)` for test access in sibling modules.
pub(super) static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// Initialize color support based on CLI flag and environment.
///
/// Color is disabled if:
/// - `no_color_flag` is true (`--no-color` CLI argument)
/// - `NO_COLOR` environment variable is set (per <https://no-color.org/>)
/// - `TERM` environment variable is `dumb` (minimal terminal)
/// - stdout is not a terminal (piped output)
/// - stderr is not a terminal (error output is piped)
pub fn init(no_color_flag: bool) {
    let is_dumb_term = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
    let enabled = !no_color_flag
        && std::env::var_os("NO_COLOR").is_none()
        && !is_dumb_term
        && std::io::IsTerminal::is_terminal(&std::io::stdout())
        && std::io::IsTerminal::is_terminal(&std::io::stderr());
    COLOR_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns whether color output is currently enabled.
#[must_use]
pub fn is_enabled() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed)
}

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const GRAY: &str = "\x1b[90m";

/// Wrap text with color codes if color is enabled.
#[must_use]
pub fn paint(color: &str, text: &str) -> String {
    if is_enabled() {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}
