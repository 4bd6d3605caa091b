//! taskcheck CLI binary entry point.
//! Runs the validation pipeline over discovered Taskfiles and prints the report.

mod cli;
mod diagnostics;
mod extract;
mod models;
mod output;
mod shellcheck;
mod taskfile;
mod template;
mod validate;

use clap::Parser;
use cli::Cli;
use shellcheck::SystemRunner;

fn main() {
    let cli = Cli::parse();
    let root = cli.root.unwrap_or_else(|| ".".to_string());
    let out_mode = cli.output.unwrap_or_else(|| "human".to_string());

    match validate::run_validation(&root, &SystemRunner) {
        Ok(report) => {
            output::print_report(&report, &out_mode);
            if report.summary.failed > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
