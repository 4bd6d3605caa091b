//! Task-definition document schema: the mapped shape of a Taskfile plus
//! the candidate scripts the extractor produces from it.

use std::path::PathBuf;

/// A Taskfile after the one-time mapping step: path plus ordered tasks.
///
/// Built once per file by `taskfile::load_taskfile`; never mutated
/// afterwards. A malformed source file maps to an empty task list.
pub struct TaskfileDoc {
    pub path: PathBuf,
    pub tasks: Vec<TaskSpec>,
}

/// One named task with its ordered command strings.
///
/// A scalar `cmds` in the source is normalized to a one-element list.
/// Non-string command entries (structured sub-task references) carry no
/// embedded shell and are dropped during mapping.
pub struct TaskSpec {
    pub name: String,
    pub cmds: Vec<String>,
}

/// A command entry selected for linting.
///
/// `text` is the whole-string-trimmed command; internal line breaks are
/// kept verbatim so linter line numbers map 1:1 back onto it.
pub struct CandidateScript {
    pub task: String,
    /// Zero-based index within the owning task's command list.
    pub cmd_index: usize,
    pub text: String,
    /// Total commands in the owning task; >1 enables the `(cmd #i)`
    /// disambiguation in report headers.
    pub total_cmds: usize,
}
