//! Leaf path enumeration.

use serde_json::{Map, Value};

use crate::path::join_path;

/// Options for [`enumerate_paths_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerateOptions {
    /// Emit empty nested objects as leaves instead of dropping them.
    pub include_empty_objects: bool,
}

/// List the dotted path of every non-object value in the document.
///
/// Keys are visited depth-first in document order. Arrays, scalars and
/// nulls are leaves; empty nested objects contribute nothing. A root that
/// is not an object yields no paths.
///
/// # Example
///
/// ```
/// use json_dot_path::enumerate_paths;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1, "c": {}}, "d": [1, 2]});
/// assert_eq!(enumerate_paths(&doc), vec!["a.b", "d"]);
/// ```
pub fn enumerate_paths(root: &Value) -> Vec<String> {
    enumerate_paths_with(root, &EnumerateOptions::default())
}

/// [`enumerate_paths`] with explicit options.
pub fn enumerate_paths_with(root: &Value, options: &EnumerateOptions) -> Vec<String> {
    let mut out = Vec::new();
    if let Value::Object(map) = root {
        let mut segments = Vec::new();
        collect(map, &mut segments, options, &mut out);
    }
    out
}

fn collect<'a>(
    map: &'a Map<String, Value>,
    segments: &mut Vec<&'a str>,
    options: &EnumerateOptions,
    out: &mut Vec<String>,
) {
    for (key, val) in map {
        segments.push(key.as_str());
        match val {
            Value::Object(child) if !(child.is_empty() && options.include_empty_objects) => {
                collect(child, segments, options, out)
            }
            _ => out.push(join_path(segments.as_slice())),
        }
        segments.pop();
    }
}
