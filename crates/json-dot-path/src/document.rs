//! Owning document wrapper.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::enumerate::enumerate_paths;
use crate::resolve::{
    resolve, resolve_array, resolve_object, resolve_string, resolve_string_list,
};
use crate::DotPathError;

/// A JSON document with dotted-path accessors.
///
/// The held value is normally an object; a `null` document is allowed and
/// behaves as an empty one.
///
/// # Example
///
/// ```
/// use json_dot_path::DotJson;
///
/// let doc: DotJson = r#"{"db": {"host": "localhost", "port": 5432}}"#.parse().unwrap();
/// assert_eq!(doc.get_string("db.port"), "5432");
/// assert_eq!(doc.all_paths(), vec!["db.host", "db.port"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DotJson {
    root: Value,
}

impl DotJson {
    /// Wrap an already decoded document.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Decode JSON text into a document.
    ///
    /// # Errors
    ///
    /// - `DotPathError::Parse` - the text is not valid JSON
    /// - `DotPathError::NotAnObjectRoot` - the text is valid JSON but neither
    ///   an object nor `null`
    pub fn parse(text: &str) -> Result<Self, DotPathError> {
        let root: Value = serde_json::from_str(text)?;
        match root {
            Value::Object(_) | Value::Null => Ok(Self { root }),
            _ => Err(DotPathError::NotAnObjectRoot),
        }
    }

    /// The held document.
    pub fn origin(&self) -> &Value {
        &self.root
    }

    /// Give back the held document.
    pub fn into_inner(self) -> Value {
        self.root
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        resolve(&self.root, path)
    }

    pub fn get_string(&self, path: &str) -> String {
        resolve_string(&self.root, path)
    }

    pub fn get_object(&self, path: &str) -> Option<&Map<String, Value>> {
        resolve_object(&self.root, path)
    }

    pub fn get_array(&self, path: &str) -> Option<&Vec<Value>> {
        resolve_array(&self.root, path)
    }

    pub fn get_string_list(&self, path: &str) -> Option<Vec<String>> {
        resolve_string_list(&self.root, path)
    }

    /// Every leaf path; each one can be fed back into [`DotJson::get`].
    pub fn all_paths(&self) -> Vec<String> {
        enumerate_paths(&self.root)
    }
}

impl From<Value> for DotJson {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

impl From<Map<String, Value>> for DotJson {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(Value::Object(map))
    }
}

impl FromStr for DotJson {
    type Err = DotPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DotJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
