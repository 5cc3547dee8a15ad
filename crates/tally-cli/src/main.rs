// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! tally command-line interface.
//!
//! This is the main entry point for the `tally` command.

use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::{self, EnvFilter};

mod commands;
mod diagnostic;
mod paths;

/// tally: an interactive calculator for int32 arithmetic
#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Disable ANSI colors in output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start an interactive REPL (the default)
    Repl,

    /// Evaluate a single expression and print its value
    Eval {
        /// The expression to evaluate
        expression: String,

        /// Print the parse tree before the value
        #[arg(long)]
        tree: bool,
    },
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    // Log to stderr (stdout is the REPL surface)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::repl::color::init(cli.no_color);

    let result = match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => commands::repl::run(),
        Command::Eval { expression, tree } => commands::eval::run_eval(&expression, tree),
    };

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
