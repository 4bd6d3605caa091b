//! Validation driver: discovers Taskfiles, runs the extraction pipeline
//! over each, and aggregates per-script results into a single report.
//!
//! Files are processed in sorted order; scripts within a file lint in
//! parallel but are collected back in extraction order, so the rendered
//! report is identical to a sequential run.

use crate::diagnostics;
use crate::extract;
use crate::models::task::CandidateScript;
use crate::models::{ScriptReport, Summary, ValidationReport};
use crate::shellcheck::{self, CommandRunner, SHELLCHECK_BIN};
use crate::taskfile;
use crate::template;
use glob::glob;
use rayon::prelude::*;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Glob patterns for Taskfile discovery, relative to the root.
const TASKFILE_PATTERNS: [&str; 4] = [
    "Taskfile*.yml",
    "Taskfile*.yaml",
    "tasks/Taskfile*.yml",
    "tasks/Taskfile*.yaml",
];

/// Fatal whole-run failures. Per-file and per-script problems are
/// contained in the report instead.
#[derive(Debug)]
pub enum RunError {
    /// The linter binary is not installed; partial results would be
    /// misleadingly presented as passing.
    LinterMissing,
    /// The linter was found but could not be executed.
    Process(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::LinterMissing => write!(
                f,
                "{} not found. Install it first (e.g. apt install shellcheck / brew install shellcheck).",
                SHELLCHECK_BIN
            ),
            RunError::Process(e) => write!(f, "failed to run {}: {}", SHELLCHECK_BIN, e),
        }
    }
}

/// Run the whole validation over every discovered Taskfile under `root`.
///
/// Nothing is printed here; the caller renders the returned report. That
/// keeps the fatal path clean: a missing linter aborts with zero
/// validation output.
pub fn run_validation(
    root: &str,
    runner: &(dyn CommandRunner + Sync),
) -> Result<ValidationReport, RunError> {
    let mut scripts: Vec<ScriptReport> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    for path in discover_taskfiles(root) {
        let (doc, warn) = taskfile::load_taskfile(&path);
        if let Some(w) = warn {
            warnings.push(w);
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        let candidates = extract::extract_scripts(&doc);
        let mut file_reports: Vec<ScriptReport> = candidates
            .par_iter()
            .map(|c| lint_script(runner, &file_name, c))
            .collect::<Result<Vec<_>, RunError>>()?;
        scripts.append(&mut file_reports);
    }

    let summary = Summary {
        scripts: scripts.len(),
        failed: scripts.iter().filter(|s| !s.passed).count(),
        issues: scripts.iter().map(|s| s.issue_count).sum(),
    };
    Ok(ValidationReport {
        scripts,
        warnings,
        summary,
    })
}

/// Glob for Taskfiles under the root and its `tasks/` subdirectory,
/// deterministically sorted.
fn discover_taskfiles(root: &str) -> Vec<PathBuf> {
    let root = PathBuf::from(root);
    let mut files: Vec<PathBuf> = Vec::new();
    for pat in TASKFILE_PATTERNS {
        let pattern = root.join(pat).to_string_lossy().into_owned();
        if let Ok(entries) = glob(&pattern) {
            for entry in entries.flatten() {
                if entry.is_file() {
                    files.push(entry);
                }
            }
        }
    }
    files.sort();
    files.dedup();
    files
}

/// Neutralize, lint, and parse one candidate script.
fn lint_script(
    runner: &dyn CommandRunner,
    file_name: &str,
    candidate: &CandidateScript,
) -> Result<ScriptReport, RunError> {
    let neutralized = template::neutralize(&candidate.text);
    let (exit_code, output) =
        shellcheck::run_shellcheck(runner, &neutralized).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                RunError::LinterMissing
            } else {
                RunError::Process(e)
            }
        })?;

    let mut report = ScriptReport {
        file: file_name.to_string(),
        task: candidate.task.clone(),
        cmd_index: candidate.cmd_index,
        total_cmds: candidate.total_cmds,
        passed: exit_code == 0,
        diagnostics: Vec::new(),
        raw_lines: Vec::new(),
        issue_count: 0,
    };
    if exit_code != 0 {
        if output.trim().is_empty() {
            // The linter failed without saying why; still one issue.
            report.issue_count = 1;
        } else {
            let parsed = diagnostics::parse_output(&output);
            report.diagnostics = parsed.diagnostics;
            report.raw_lines = parsed.raw_lines;
            report.issue_count = parsed.issue_count;
        }
    }
    Ok(report)
}
