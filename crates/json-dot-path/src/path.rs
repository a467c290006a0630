//! Dotted path helpers.

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Split a dotted path into its segments.
///
/// Every segment is kept, including empty ones, so `"a..b"` addresses the
/// empty-string key between `a` and `b`. An empty path has no segments.
///
/// # Example
///
/// ```
/// use json_dot_path::split_path;
///
/// assert_eq!(split_path(""), Vec::<&str>::new());
/// assert_eq!(split_path("a.b.c"), vec!["a", "b", "c"]);
/// assert_eq!(split_path("a..b"), vec!["a", "", "b"]);
/// assert_eq!(split_path("a."), vec!["a", ""]);
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split(SEPARATOR).collect()
}

/// Join segments back into a dotted path.
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(segment.as_ref());
    }
    out
}

/// Check if `child` lies strictly below `parent`.
///
/// # Example
///
/// ```
/// use json_dot_path::is_child;
///
/// assert!(is_child("a", "a.b"));
/// assert!(!is_child("a", "ab.c"));
/// assert!(!is_child("a.b", "a.b"));
/// ```
pub fn is_child(parent: &str, child: &str) -> bool {
    let parent = split_path(parent);
    let child = split_path(child);
    if parent.len() >= child.len() {
        return false;
    }
    parent.iter().zip(&child).all(|(p, c)| p == c)
}
