//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "taskcheck",
    version,
    about = "Validate embedded shell scripts in Taskfiles with shellcheck",
    long_about = "taskcheck — extracts shell fragments embedded in Taskfile command lists, \
rewrites {{.VAR}} template placeholders into shell variables, and runs shellcheck over each \
fragment.\n\nExit code 0 means every examined script is clean; 1 means findings were reported \
or shellcheck is not installed.",
    after_help = "Examples:\n  taskcheck\n  taskcheck --root infra\n  taskcheck --output json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, help = "Validation root containing Taskfiles (default: current dir)")]
    pub root: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}
