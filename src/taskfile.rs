//! Taskfile reader: parses a YAML task-definition file and maps it into
//! the fixed `TaskfileDoc` shape in one explicit step.
//!
//! Two document layouts are recognized: an explicit `tasks:` mapping, and
//! the flat layout where every top-level key holding a mapping (except
//! `version`, `includes`, `vars`) is a task. The decision is made once per
//! file here; downstream components only ever see `TaskfileDoc`.

use crate::models::task::{TaskSpec, TaskfileDoc};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Top-level keys that are never tasks in the flat layout.
const RESERVED_KEYS: [&str; 3] = ["version", "includes", "vars"];

/// Load and map a Taskfile.
///
/// A file that cannot be read or parsed yields an empty task set plus a
/// warning naming the file; one malformed file must not abort the run.
/// A root that is not a mapping yields an empty task set silently.
pub fn load_taskfile(path: &Path) -> (TaskfileDoc, Option<String>) {
    let empty = |warn: Option<String>| {
        (
            TaskfileDoc {
                path: path.to_path_buf(),
                tasks: Vec::new(),
            },
            warn,
        )
    };
    let text = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            return empty(Some(format!(
                "Failed to read {}: {}",
                path.to_string_lossy(),
                e
            )));
        }
    };
    let root: Value = match serde_yaml::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            return empty(Some(format!(
                "Failed to parse {}: {}",
                path.to_string_lossy(),
                e
            )));
        }
    };
    (
        TaskfileDoc {
            path: path.to_path_buf(),
            tasks: map_document(&root),
        },
        None,
    )
}

/// Map a parsed YAML root into the ordered task list.
fn map_document(root: &Value) -> Vec<TaskSpec> {
    let Some(mapping) = root.as_mapping() else {
        return Vec::new();
    };
    let mut tasks: Vec<TaskSpec> = Vec::new();
    if let Some(explicit) = root.get("tasks").and_then(Value::as_mapping) {
        for (key, body) in explicit {
            push_task(&mut tasks, key, body);
        }
    } else {
        for (key, body) in mapping {
            let reserved = key
                .as_str()
                .is_some_and(|k| RESERVED_KEYS.contains(&k));
            if !reserved && body.is_mapping() {
                push_task(&mut tasks, key, body);
            }
        }
    }
    tasks
}

fn push_task(tasks: &mut Vec<TaskSpec>, key: &Value, body: &Value) {
    let Some(name) = key.as_str() else { return };
    let Some(body) = body.as_mapping() else { return };
    let cmds = match body.iter().find(|(k, _)| k.as_str() == Some("cmds")) {
        Some((_, Value::String(s))) => vec![s.clone()],
        Some((_, Value::Sequence(seq))) => seq
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };
    tasks.push(TaskSpec {
        name: name.to_string(),
        cmds,
    });
}
