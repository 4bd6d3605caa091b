//! Shared data models for validation results and the Taskfile schema.

pub mod task;

use serde::Serialize;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
/// Severity levels shellcheck assigns to findings.
pub enum Severity {
    Error,
    Warning,
    Info,
    Style,
}

impl Severity {
    /// Map a severity token from linter output. Unknown tokens fall back
    /// to `Style` so format drift never drops a finding.
    pub fn parse(s: &str) -> Severity {
        match s {
            "error" => Severity::Error,
            "warning" | "warn" => Severity::Warning,
            "info" => Severity::Info,
            _ => Severity::Style,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Style => "style",
        }
    }
}

#[derive(Serialize, Clone, Debug)]
/// One structured finding from the shell linter.
pub struct Diagnostic {
    /// Line number within the script; `None` means unlocated.
    pub line: Option<u32>,
    pub severity: Severity,
    /// Linter-assigned code, e.g. `SC2086`. Opaque to this tool.
    pub code: String,
    pub message: String,
    pub suggestion: Option<String>,
}

#[derive(Serialize, Debug)]
/// Per-script validation outcome.
pub struct ScriptReport {
    /// File name (not full path) of the owning Taskfile, for display.
    pub file: String,
    pub task: String,
    pub cmd_index: usize,
    pub total_cmds: usize,
    /// True when the linter exited 0.
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
    /// Verbatim linter output lines, carried only when the report text
    /// matched none of the known diagnostic patterns.
    pub raw_lines: Vec<String>,
    /// Unique diagnostic codes in this script (0 for passing scripts).
    pub issue_count: usize,
}

#[derive(Serialize, Debug)]
/// Aggregated totals used by printers and for the exit code.
pub struct Summary {
    /// Scripts examined, passing ones included.
    pub scripts: usize,
    /// Scripts where the linter exited non-zero.
    pub failed: usize,
    /// Sum of per-script unique-code issue counts.
    pub issues: usize,
}

#[derive(Serialize, Debug)]
/// Whole-run validation results container.
pub struct ValidationReport {
    pub scripts: Vec<ScriptReport>,
    /// Non-fatal per-file warnings (e.g. a Taskfile that failed to parse).
    pub warnings: Vec<String>,
    pub summary: Summary,
}
