//! Script extraction: picks the command strings worth linting.
//!
//! The classification is deliberately lopsided. Single-line commands with
//! no substitution or branching are skipped so the linter is not flooded
//! with trivial invocations; anything multi-line or containing `$`,
//! `if [`, `for ` or `while ` is exactly the kind of text prone to
//! quoting and word-splitting bugs, so it is always taken.

use crate::models::task::{CandidateScript, TaskfileDoc};

/// Markers the document format leaves behind for "no-op command".
const NULL_MARKERS: [&str; 2] = ["null", "~"];

/// Pure classification predicate: does this command string carry enough
/// shell logic to be worth linting?
pub fn looks_like_script(script: &str) -> bool {
    script.lines().count() > 1
        || script.contains('$')
        || script.contains("if [")
        || script.contains("for ")
        || script.contains("while ")
}

/// Walk a mapped Taskfile and emit one `CandidateScript` per qualifying
/// command entry, in task order then command order.
pub fn extract_scripts(doc: &TaskfileDoc) -> Vec<CandidateScript> {
    let mut out = Vec::new();
    for task in &doc.tasks {
        let total = task.cmds.len();
        for (idx, cmd) in task.cmds.iter().enumerate() {
            let script = cmd.trim();
            if script.is_empty() || NULL_MARKERS.contains(&script) {
                continue;
            }
            if looks_like_script(script) {
                out.push(CandidateScript {
                    task: task.name.clone(),
                    cmd_index: idx,
                    text: script.to_string(),
                    total_cmds: total,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::TaskSpec;
    use std::path::PathBuf;

    fn doc_with(cmds: Vec<&str>) -> TaskfileDoc {
        TaskfileDoc {
            path: PathBuf::from("Taskfile.yml"),
            tasks: vec![TaskSpec {
                name: "t".into(),
                cmds: cmds.into_iter().map(String::from).collect(),
            }],
        }
    }

    #[test]
    fn test_plain_single_line_commands_excluded() {
        assert!(!looks_like_script("echo hello"));
        assert!(!looks_like_script("docker build ."));
        assert!(!looks_like_script("cargo test --release"));
    }

    #[test]
    fn test_control_constructs_included() {
        assert!(looks_like_script("echo $HOME"));
        assert!(looks_like_script("if [ -f x ]; then cat x; fi"));
        assert!(looks_like_script("for f in *.txt; do rm \"$f\"; done"));
        assert!(looks_like_script("while read -r line; do :; done"));
    }

    #[test]
    fn test_multi_line_always_included() {
        assert!(looks_like_script("echo a\necho b"));
        // Even with no shell constructs at all.
        assert!(looks_like_script("true\ntrue"));
    }

    #[test]
    fn test_substring_match_requires_trailing_space() {
        // "for"/"while" embedded in a longer word must not trigger.
        assert!(!looks_like_script("cargo fmt --check-formatting"));
        assert!(!looks_like_script("forge-test run"));
        // A real loop keyword does.
        assert!(looks_like_script("for x in a b; do echo ok; done"));
    }

    #[test]
    fn test_extract_skips_empty_and_null_markers() {
        let doc = doc_with(vec!["", "  ", "null", "~", "echo $X"]);
        let scripts = extract_scripts(&doc);
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].text, "echo $X");
        assert_eq!(scripts[0].cmd_index, 4);
        assert_eq!(scripts[0].total_cmds, 5);
    }

    #[test]
    fn test_extract_preserves_internal_lines_and_trims_ends() {
        let doc = doc_with(vec!["\nif [ -z \"$X\" ]; then\n  echo missing\nfi\n"]);
        let scripts = extract_scripts(&doc);
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].text, "if [ -z \"$X\" ]; then\n  echo missing\nfi");
    }

    #[test]
    fn test_zero_candidates_for_trivial_task() {
        let doc = doc_with(vec!["echo hello"]);
        assert!(extract_scripts(&doc).is_empty());
    }
}
