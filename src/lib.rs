//! taskcheck core library.
//!
//! This crate exposes the embedded-script validation pipeline for
//! Taskfiles: extraction of shell fragments, template neutralization,
//! shellcheck invocation, diagnostic parsing, and report aggregation.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `taskfile`: YAML Taskfile reader and shape mapping.
//! - `extract`: Script-like classification and candidate extraction.
//! - `template`: `{{.VAR}}` placeholder neutralization.
//! - `shellcheck`: External-process abstraction and linter invocation.
//! - `diagnostics`: Parser for shellcheck's textual report.
//! - `validate`: Discovery, pipeline driving, and aggregation.
//! - `models`: Data models for tasks, diagnostics, and report structs.
//! - `output`: Human/JSON printers for the validation report.
//!
//! Note: All documentation comments are written in English by convention.
pub mod cli;
pub mod diagnostics;
pub mod extract;
pub mod models;
pub mod output;
pub mod shellcheck;
pub mod taskfile;
pub mod template;
pub mod validate;
