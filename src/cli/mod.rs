//! CLI module for SCOUT
//!
//! Command-line interface for the scout-research binary. Uses clap for
//! argument parsing and owo-colors for terminal output.

use clap::Parser;
use std::path::PathBuf;

/// SCOUT - deep research from the command line
#[derive(Parser, Debug)]
#[command(
    name = "scout-research",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "SCOUT - Structured Concurrent Orchestration of research Tasks",
    long_about = "Runs a deep-research workflow: plans prioritized searches, executes them\n\
                  concurrently under a bounded time budget, synthesizes a structured report,\n\
                  and optionally delivers it by email.",
    after_help = "EXAMPLES:\n    \
                  scout-research \"state of rust adoption in 2026\"\n    \
                  scout-research \"llm inference pricing\" --deliver -r team@example.com\n    \
                  scout-research \"quantum networking\" --output report.md"
)]
pub struct Cli {
    /// The research query to investigate
    pub query: String,

    /// Send the finished report to the delivery channel
    #[arg(short, long)]
    pub deliver: bool,

    /// Recipient address, overriding the configured default
    #[arg(short, long, requires = "deliver")]
    pub recipient: Option<String>,

    /// Write the rendered markdown report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
