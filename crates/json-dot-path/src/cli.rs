//! Core logic behind the `json-dot-path` binary.
//!
//! - `lookup`        — pretty JSON of the value at a dotted path
//! - `lookup_string` — text rendering of the value at a dotted path
//! - `list_paths`    — every leaf path in the document, optionally only those
//!                     below a prefix

use serde_json::Value;

use crate::document::DotJson;
use crate::enumerate::{enumerate_paths_with, EnumerateOptions};
use crate::path::is_child;
use crate::resolve::{locate, resolve_string};
use crate::DotPathError;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Document(DotPathError),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e)     => write!(f, "{e}"),
            CliError::Document(e) => write!(f, "{e}"),
            CliError::NotFound(p) => write!(f, "NOT_FOUND: {p}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self { CliError::Json(e) }
}

impl From<DotPathError> for CliError {
    fn from(e: DotPathError) -> Self { CliError::Document(e) }
}

// ── Lookup ────────────────────────────────────────────────────────────────

fn find<'a>(doc: &'a DotJson, path: &str) -> Result<&'a Value, CliError> {
    locate(doc.origin(), path).map_err(|e| match e {
        // A null document parses fine and simply has nothing in it.
        DotPathError::NotFound { .. }
        | DotPathError::NotAnObject { .. }
        | DotPathError::NotAnObjectRoot => CliError::NotFound(path.to_string()),
        other => CliError::Document(other),
    })
}

/// Look up a dotted path in a JSON document and return it as pretty JSON.
pub fn lookup(doc_json: &str, path: &str) -> Result<String, CliError> {
    let doc = DotJson::parse(doc_json)?;
    let val = find(&doc, path)?;
    Ok(serde_json::to_string_pretty(val)?)
}

/// Look up a dotted path and render it with `resolve_string`.
///
/// Strings come back without quotes; a missing path renders as `null`.
/// Only an undecodable document is an error.
pub fn lookup_string(doc_json: &str, path: &str) -> Result<String, CliError> {
    let doc = DotJson::parse(doc_json)?;
    Ok(resolve_string(doc.origin(), path))
}

// ── Listing ───────────────────────────────────────────────────────────────

/// List every leaf path in a JSON document.
///
/// With `under`, only paths strictly below that prefix are kept.
pub fn list_paths(
    doc_json: &str,
    options: &EnumerateOptions,
    under: Option<&str>,
) -> Result<Vec<String>, CliError> {
    let doc = DotJson::parse(doc_json)?;
    let mut paths = enumerate_paths_with(doc.origin(), options);
    if let Some(prefix) = under {
        paths.retain(|p| is_child(prefix, p));
    }
    Ok(paths)
}
