use serde_json::{Map, Value};
use tracing::debug;

use crate::path::SEPARATOR;
use crate::DotPathError;

/// Text rendering used by the string accessors.
const NULL_TEXT: &str = "null";

/// Find the value at a dotted path, reporting why navigation stopped.
///
/// The root must be an object. Each segment is looked up as a key in the
/// value reached so far; every value except the last one must itself be an
/// object. The final value may be anything, including an explicit `null`.
///
/// # Errors
///
/// - `DotPathError::EmptyPath` - the path is `""`
/// - `DotPathError::NotAnObjectRoot` - the root is not an object
/// - `DotPathError::NotFound` - a key is missing; `path` is the prefix up to
///   and including the missing segment
/// - `DotPathError::NotAnObject` - a non-final segment reached a scalar,
///   array or null; `path` is the prefix that reached it
///
/// # Example
///
/// ```
/// use json_dot_path::{locate, DotPathError};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 5}});
/// assert_eq!(locate(&doc, "a.b"), Ok(&json!(5)));
/// assert_eq!(
///     locate(&doc, "a.b.x"),
///     Err(DotPathError::NotAnObject { path: "a.b".to_string() })
/// );
/// ```
pub fn locate<'a>(root: &'a Value, path: &str) -> Result<&'a Value, DotPathError> {
    if path.is_empty() {
        return Err(DotPathError::EmptyPath);
    }
    if !root.is_object() {
        return Err(DotPathError::NotAnObjectRoot);
    }

    let mut current = root;
    // Byte offset of the end of the prefix walked so far.
    let mut end = 0;
    for (step_idx, segment) in path.split(SEPARATOR).enumerate() {
        let map = match current {
            Value::Object(map) => map,
            _ => {
                return Err(DotPathError::NotAnObject {
                    path: path[..end].to_string(),
                })
            }
        };
        end = if step_idx == 0 {
            segment.len()
        } else {
            end + 1 + segment.len()
        };
        current = map.get(segment).ok_or_else(|| DotPathError::NotFound {
            path: path[..end].to_string(),
        })?;
    }
    Ok(current)
}

/// Get the value at a dotted path, or `None` if it cannot be reached.
///
/// Failures are logged at `debug` level and never returned.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    match locate(root, path) {
        Ok(val) => Some(val),
        Err(e) => {
            debug!(path = %path, error = %e, "dotted path did not resolve");
            None
        }
    }
}

/// Render a value as text: strings as-is, everything else as compact JSON.
///
/// # Example
///
/// ```
/// use json_dot_path::to_text;
/// use serde_json::json;
///
/// assert_eq!(to_text(&json!("plain")), "plain");
/// assert_eq!(to_text(&json!(1.5)), "1.5");
/// assert_eq!(to_text(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
/// ```
pub fn to_text(val: &Value) -> String {
    match val {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Get the value at a dotted path as text.
///
/// Never absent: an unreachable path renders as `"null"`, same as an
/// explicit JSON null.
pub fn resolve_string(root: &Value, path: &str) -> String {
    match resolve(root, path) {
        Some(val) => to_text(val),
        None => NULL_TEXT.to_string(),
    }
}

/// Get the object at a dotted path.
pub fn resolve_object<'a>(root: &'a Value, path: &str) -> Option<&'a Map<String, Value>> {
    match resolve(root, path) {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Get the array at a dotted path.
pub fn resolve_array<'a>(root: &'a Value, path: &str) -> Option<&'a Vec<Value>> {
    match resolve(root, path) {
        Some(Value::Array(arr)) => Some(arr),
        _ => None,
    }
}

/// Get the array at a dotted path with every element rendered by [`to_text`].
///
/// Non-string elements are stringified, not rejected.
pub fn resolve_string_list(root: &Value, path: &str) -> Option<Vec<String>> {
    let arr = resolve_array(root, path)?;
    Some(arr.iter().map(to_text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locate_nested() {
        let doc = json!({"a": {"b": {"c": 5}}});
        assert_eq!(locate(&doc, "a.b.c"), Ok(&json!(5)));
        assert_eq!(locate(&doc, "a.b"), Ok(&json!({"c": 5})));
        assert_eq!(locate(&doc, "a"), Ok(&json!({"b": {"c": 5}})));
    }

    #[test]
    fn test_locate_errors() {
        let doc = json!({"a": {"b": 5, "n": null}});

        assert_eq!(locate(&doc, ""), Err(DotPathError::EmptyPath));
        assert_eq!(
            locate(&json!([1, 2]), "a"),
            Err(DotPathError::NotAnObjectRoot)
        );
        assert_eq!(locate(&Value::Null, "a"), Err(DotPathError::NotAnObjectRoot));
        assert_eq!(
            locate(&doc, "a.x.y"),
            Err(DotPathError::NotFound {
                path: "a.x".to_string()
            })
        );
        assert_eq!(
            locate(&doc, "a.n.y"),
            Err(DotPathError::NotAnObject {
                path: "a.n".to_string()
            })
        );
        assert_eq!(
            locate(&doc, "a.b.x.y"),
            Err(DotPathError::NotAnObject {
                path: "a.b".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_single_segment_any_type() {
        let doc = json!({"s": "x", "n": 1, "arr": [1], "obj": {}, "nil": null});
        assert_eq!(resolve(&doc, "s"), Some(&json!("x")));
        assert_eq!(resolve(&doc, "n"), Some(&json!(1)));
        assert_eq!(resolve(&doc, "arr"), Some(&json!([1])));
        assert_eq!(resolve(&doc, "obj"), Some(&json!({})));
        assert_eq!(resolve(&doc, "nil"), Some(&Value::Null));
        assert_eq!(resolve(&doc, "missing"), None);
    }

    #[test]
    fn test_resolve_through_array_is_absent() {
        let doc = json!({"a": [{"b": 1}]});
        assert_eq!(resolve(&doc, "a.0.b"), None);
        assert_eq!(resolve(&doc, "a.b"), None);
    }

    #[test]
    fn test_resolve_empty_segments() {
        let doc = json!({"a": {"": {"b": 1}, "x": 2}, "": 3});
        assert_eq!(resolve(&doc, "a..b"), Some(&json!(1)));
        assert_eq!(resolve(&doc, "a."), Some(&json!({"b": 1})));
        assert_eq!(resolve(&doc, ".a"), None);
        assert_eq!(resolve(&json!({"": 3}), "."), None);
        assert_eq!(resolve(&doc, "."), None);
    }

    #[test]
    fn test_resolve_string() {
        let doc = json!({"s": "text", "n": 42, "f": 1.5, "b": false, "nil": null,
                         "obj": {"k": "v"}, "arr": [1, "a"]});
        assert_eq!(resolve_string(&doc, "s"), "text");
        assert_eq!(resolve_string(&doc, "n"), "42");
        assert_eq!(resolve_string(&doc, "f"), "1.5");
        assert_eq!(resolve_string(&doc, "b"), "false");
        assert_eq!(resolve_string(&doc, "nil"), "null");
        assert_eq!(resolve_string(&doc, "obj"), r#"{"k":"v"}"#);
        assert_eq!(resolve_string(&doc, "arr"), r#"[1,"a"]"#);
        assert_eq!(resolve_string(&doc, "missing.deep"), "null");
        assert_eq!(resolve_string(&Value::Null, "a.b"), "null");
    }

    #[test]
    fn test_resolve_object_and_array() {
        let doc = json!({"obj": {"k": 1}, "arr": [1, 2], "s": "x"});

        assert_eq!(
            resolve_object(&doc, "obj").and_then(|m| m.get("k")),
            Some(&json!(1))
        );
        assert_eq!(resolve_object(&doc, "arr"), None);
        assert_eq!(resolve_object(&doc, "s"), None);
        assert_eq!(resolve_object(&doc, "missing"), None);

        assert_eq!(resolve_array(&doc, "arr"), Some(&vec![json!(1), json!(2)]));
        assert_eq!(resolve_array(&doc, "obj"), None);
        assert_eq!(resolve_array(&doc, "s"), None);
    }

    #[test]
    fn test_resolve_string_list() {
        let doc = json!({"list": [1, 2, 3], "mixed": ["a", true, null, {"x": 1}], "s": "x"});
        assert_eq!(
            resolve_string_list(&doc, "list"),
            Some(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        );
        assert_eq!(
            resolve_string_list(&doc, "mixed"),
            Some(vec![
                "a".to_string(),
                "true".to_string(),
                "null".to_string(),
                r#"{"x":1}"#.to_string()
            ])
        );
        assert_eq!(resolve_string_list(&doc, "s"), None);
        assert_eq!(resolve_string_list(&doc, "missing"), None);
        assert_eq!(resolve_string_list(&json!({"e": []}), "e"), Some(vec![]));
    }
}
