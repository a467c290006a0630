//! Dotted-path access over `serde_json` documents.
//!
//! Paths are object keys joined with `.` (`"server.tls.cert"`). Navigation is
//! read-only and never fails loudly: anything that cannot be reached comes
//! back as `None`. Use [`locate`] when the reason matters.
//!
//! # Example
//!
//! ```
//! use json_dot_path::{enumerate_paths, resolve, resolve_string, resolve_string_list};
//! use serde_json::json;
//!
//! let doc = json!({"a": {"b": {"c": 5}}, "list": [1, "two", null]});
//!
//! assert_eq!(resolve(&doc, "a.b.c"), Some(&json!(5)));
//! assert_eq!(resolve(&doc, "a.b.c.d"), None);
//! assert_eq!(resolve_string(&doc, "a.missing"), "null");
//! assert_eq!(
//!     resolve_string_list(&doc, "list"),
//!     Some(vec!["1".to_string(), "two".to_string(), "null".to_string()])
//! );
//! assert_eq!(enumerate_paths(&doc), vec!["a.b.c", "list"]);
//! ```

use thiserror::Error;

pub mod cli;
pub mod document;
pub mod enumerate;
pub mod path;
pub mod resolve;

pub use document::DotJson;
pub use enumerate::{enumerate_paths, enumerate_paths_with, EnumerateOptions};
pub use path::{is_child, join_path, split_path, SEPARATOR};
pub use resolve::{
    locate, resolve, resolve_array, resolve_object, resolve_string, resolve_string_list,
    to_text,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DotPathError {
    #[error("empty path")]
    EmptyPath,
    #[error("document root is not an object")]
    NotAnObjectRoot,
    #[error("no value at `{path}`")]
    NotFound { path: String },
    #[error("value at `{path}` is not an object")]
    NotAnObject { path: String },
    #[error("invalid JSON: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for DotPathError {
    fn from(e: serde_json::Error) -> Self {
        DotPathError::Parse(e.to_string())
    }
}
