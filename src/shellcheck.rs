//! Linter invocation behind a narrow process abstraction.
//!
//! `CommandRunner` is not tied to shellcheck — it runs any external
//! command with text piped to stdin. The production implementation spawns
//! real processes; tests substitute a double returning canned output, so
//! the parser and aggregator are testable without shellcheck installed.

use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Program name of the external shell static analyzer.
pub const SHELLCHECK_BIN: &str = "shellcheck";

/// Captured result of one external command.
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Blocking external-command execution with piped stdin.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], stdin_text: &str) -> io::Result<ProcessOutput>;
}

/// Production runner backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], stdin_text: &str) -> io::Result<ProcessOutput> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Feed stdin from a separate thread: if the child fills an output
        // pipe while we are still blocked writing, a single-threaded
        // write-then-read would deadlock.
        let stdin_handle = child.stdin.take();
        let input = stdin_text.as_bytes().to_vec();
        let writer = std::thread::spawn(move || {
            if let Some(mut stdin) = stdin_handle {
                let _ = stdin.write_all(&input);
            }
        });

        let out = child.wait_with_output()?;
        let _ = writer.join();

        Ok(ProcessOutput {
            exit_code: out.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }
}

/// Run shellcheck over one neutralized script.
///
/// The script is piped on stdin so findings report against the synthetic
/// unit `-` rather than a real path. Diagnostics are taken from stderr,
/// falling back to stdout (shellcheck writes findings to stdout in its
/// default format; wrappers and some builds route them to stderr).
pub fn run_shellcheck(
    runner: &dyn CommandRunner,
    script: &str,
) -> io::Result<(i32, String)> {
    let out = runner.run(SHELLCHECK_BIN, &["-s", "bash", "-"], script)?;
    let text = if out.stderr.is_empty() {
        out.stdout
    } else {
        out.stderr
    };
    Ok((out.exit_code, text))
}
