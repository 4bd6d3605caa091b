//! Diagnostic parser: turns shellcheck's textual report into structured
//! records.
//!
//! The report is line oriented. A marker line `In - line N:` sets the
//! line-number context for the diagnostics that follow it; each
//! `SC#### (severity): message` line emits one record; a trailing
//! `Did you mean:` line attaches to the record just emitted. The scanner
//! is an explicit two-state machine over that context so it can be
//! exercised against crafted sample reports without a real linter.
//!
//! If a non-empty report matches none of the known patterns (the tool
//! changed its output format), every non-footer non-blank line is carried
//! verbatim and the report counts as exactly one issue: format drift
//! degrades to noisy-but-visible, never silently swallowed.

use crate::models::{Diagnostic, Severity};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Parsed form of one script's linter report.
pub struct ParsedOutput {
    pub diagnostics: Vec<Diagnostic>,
    /// Verbatim lines, populated only on the fallback path.
    pub raw_lines: Vec<String>,
    /// Unique diagnostic codes (fallback path counts as one).
    pub issue_count: usize,
}

/// Line-number context while scanning the report.
#[derive(Clone, Copy)]
enum Cursor {
    /// No marker seen yet; diagnostics are unlocated.
    Outside,
    /// Inside the snippet that follows `In - line N:`.
    AtLine(u32),
}

const FOOTER_PREFIX: &str = "For more information:";
const SUGGESTION_MARKER: &str = "Did you mean:";

fn line_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^In\s+-\s+line\s+(\d+):").unwrap())
}

fn finding_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"SC(\d+)\s*\((\w+)\):\s*(.+)").unwrap())
}

/// Parse one shellcheck report.
pub fn parse_output(output: &str) -> ParsedOutput {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut codes: BTreeSet<String> = BTreeSet::new();
    let mut cursor = Cursor::Outside;

    for raw in output.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(FOOTER_PREFIX) {
            continue;
        }

        if let Some(caps) = line_marker_re().captures(line) {
            // The capture is all digits; only absurd lengths overflow.
            if let Ok(n) = caps[1].parse::<u32>() {
                cursor = Cursor::AtLine(n);
            }
            continue;
        }

        if let Some(caps) = finding_re().captures(line) {
            let code = format!("SC{}", &caps[1]);
            codes.insert(code.clone());
            diagnostics.push(Diagnostic {
                line: match cursor {
                    Cursor::AtLine(n) => Some(n),
                    Cursor::Outside => None,
                },
                severity: Severity::parse(&caps[2]),
                code,
                message: caps[3].to_string(),
                suggestion: None,
            });
            continue;
        }

        if let Some(pos) = line.find(SUGGESTION_MARKER) {
            let suggestion = line[pos + SUGGESTION_MARKER.len()..].trim();
            if !suggestion.is_empty() {
                if let Some(last) = diagnostics.last_mut() {
                    last.suggestion = Some(suggestion.to_string());
                }
            }
        }
    }

    if diagnostics.is_empty() && !output.trim().is_empty() {
        // Unrecognized format: pass everything through and count one.
        let raw_lines: Vec<String> = output
            .lines()
            .filter(|l| !l.trim().is_empty() && !l.trim_start().starts_with(FOOTER_PREFIX))
            .map(str::to_string)
            .collect();
        return ParsedOutput {
            diagnostics,
            raw_lines,
            issue_count: 1,
        };
    }

    ParsedOutput {
        issue_count: codes.len(),
        diagnostics,
        raw_lines: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
In - line 1:
if [ -z \"$X\" ]; then
          ^-- SC2154 (warning): X is referenced but not assigned.

In - line 3:
  rm $FILES
     ^-- SC2086 (info): Double quote to prevent globbing and word splitting.
     Did you mean: rm \"$FILES\"

For more information:
  https://www.shellcheck.net/wiki/SC2086 -- Double quote to prevent globbing...
";

    #[test]
    fn test_parses_line_context_and_findings() {
        let parsed = parse_output(SAMPLE);
        assert_eq!(parsed.diagnostics.len(), 2);
        assert_eq!(parsed.issue_count, 2);
        assert!(parsed.raw_lines.is_empty());

        let first = &parsed.diagnostics[0];
        assert_eq!(first.line, Some(1));
        assert_eq!(first.code, "SC2154");
        assert_eq!(first.severity, Severity::Warning);
        assert_eq!(first.message, "X is referenced but not assigned.");
        assert!(first.suggestion.is_none());

        let second = &parsed.diagnostics[1];
        assert_eq!(second.line, Some(3));
        assert_eq!(second.code, "SC2086");
        assert_eq!(second.severity, Severity::Info);
        assert_eq!(second.suggestion.as_deref(), Some("rm \"$FILES\""));
    }

    #[test]
    fn test_dedup_by_code_keeps_all_occurrences() {
        let report = "\
In - line 1:
  a $X
    ^-- SC2086 (info): Double quote to prevent globbing.

In - line 2:
  b $Y
    ^-- SC2086 (info): Double quote to prevent globbing.
";
        let parsed = parse_output(report);
        assert_eq!(parsed.diagnostics.len(), 2);
        assert_eq!(parsed.issue_count, 1);
    }

    #[test]
    fn test_finding_before_any_marker_is_unlocated() {
        let parsed = parse_output("^-- SC1000 (error): broken\n");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].line, None);
    }

    #[test]
    fn test_footer_only_report_counts_one_conservative_issue() {
        // Nothing recognizable and nothing worth echoing, but the linter
        // did fail: count one issue rather than zero.
        let report = "\n\nFor more information:\n";
        let parsed = parse_output(report);
        assert!(parsed.diagnostics.is_empty());
        assert!(parsed.raw_lines.is_empty());
        assert_eq!(parsed.issue_count, 1);
    }

    #[test]
    fn test_unrecognized_format_falls_back_verbatim() {
        let report = "totally new output style\nwith two lines\n\nFor more information: x\n";
        let parsed = parse_output(report);
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(
            parsed.raw_lines,
            vec![
                "totally new output style".to_string(),
                "with two lines".to_string()
            ]
        );
        // Exactly one issue regardless of how many lines drifted.
        assert_eq!(parsed.issue_count, 1);
    }

    #[test]
    fn test_empty_output_is_clean() {
        let parsed = parse_output("");
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.issue_count, 0);
    }
}
