//! Report rendering for validation results.
//!
//! Supports `human` (default) and `json` outputs. Human output groups
//! diagnostics under a per-script header and ends with a single verdict
//! line; passing scripts contribute to the count only. The JSON form is a
//! direct serialization of the `ValidationReport`.

use crate::models::{ScriptReport, Severity, ValidationReport};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "❌",
        Severity::Warning => "⚠️ ",
        Severity::Info => "ℹ️ ",
        Severity::Style => "•",
    }
}

/// Print the validation report in the requested format.
///
/// Warnings go to stderr, findings and the verdict to stdout; the exit
/// code decision stays with the caller.
pub fn print_report(report: &ValidationReport, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(report)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            println!("\n🔍 Validating embedded scripts in Taskfiles...");
            for warn in &report.warnings {
                eprintln!("⚠️  Warning: {}", warn);
            }
            for script in report.scripts.iter().filter(|s| !s.passed) {
                print_script(script, color);
            }
            println!();
            if report.summary.failed == 0 {
                let verdict = format!(
                    "✅ Taskfile script validation passed ({} embedded scripts)",
                    report.summary.scripts
                );
                if color {
                    println!("{}", verdict.green().bold());
                } else {
                    println!("{}", verdict);
                }
            } else {
                let verdict = format!(
                    "❌ Taskfile script validation found {} issue(s) in {} script(s)",
                    report.summary.issues, report.summary.failed
                );
                if color {
                    println!("{}", verdict.red().bold());
                } else {
                    println!("{}", verdict);
                }
            }
        }
    }
}

fn print_script(script: &ScriptReport, color: bool) {
    let label = if script.total_cmds > 1 {
        format!("task '{}' (cmd #{})", script.task, script.cmd_index)
    } else {
        format!("task '{}'", script.task)
    };
    let header = format!("📄 {} → {}", script.file, label);
    if color {
        println!("\n{}", header.bold());
    } else {
        println!("\n{}", header);
    }

    if !script.diagnostics.is_empty() {
        for diag in &script.diagnostics {
            let line_prefix = diag
                .line
                .map(|n| format!("Line {}: ", n))
                .unwrap_or_default();
            println!(
                "  {} {}{} ({}): {}",
                severity_icon(diag.severity),
                line_prefix,
                diag.code,
                diag.severity.label(),
                diag.message
            );
            if let Some(suggestion) = &diag.suggestion {
                println!("    💡 Suggestion: {}", suggestion);
            }
        }
    } else if !script.raw_lines.is_empty() {
        // Fallback passthrough for unrecognized linter output.
        for line in &script.raw_lines {
            println!("  {}", line);
        }
    } else {
        println!("  ⚠️  shellcheck found issues (no detailed output)");
    }
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &ValidationReport) -> JsonVal {
    serde_json::to_value(report).unwrap()
}
