//! Records and the is-set predicate.
//!
//! A [`Record`] is one item being edited, keyed by descriptor name. Its shape
//! comes from the schema rather than a static type, so every read here coerces
//! instead of failing: absent scalars read as `""`, non-array tag values read
//! as no tags.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One structured item being edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a record from any JSON value. Non-objects become an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Shallow merge of a single key; every other key is left as is.
    pub fn merged(&self, name: &str, value: Value) -> Self {
        let mut next = self.clone();
        next.0.insert(name.to_string(), value);
        next
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Whether the named field holds a real value.
    pub fn is_field_set(&self, name: &str) -> bool {
        is_set(self.get(name))
    }

    /// Display text for a scalar field. Absent and null read as `""`.
    pub fn text(&self, name: &str) -> String {
        match self.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Tag list for a tag-set field. Non-arrays read as empty; non-string
    /// elements are skipped.
    pub fn tags(&self, name: &str) -> Vec<String> {
        match self.get(name) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Truthiness of a field, used for switches.
    pub fn flag(&self, name: &str) -> bool {
        match self.get(name) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// Numeric value of a field. Numeric strings are parsed; anything else is `None`.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        record.into_value()
    }
}

/// Whether a stored value counts as set.
///
/// Set means a non-empty array, or anything other than absent, null and the
/// empty string. `0` and `false` are real values and count as set.
pub fn is_set(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_set_rules() {
        assert!(!is_set(None));
        assert!(!is_set(Some(&Value::Null)));
        assert!(!is_set(Some(&json!(""))));
        assert!(!is_set(Some(&json!([]))));
        assert!(is_set(Some(&json!(" "))));
        assert!(is_set(Some(&json!(["a"]))));
        assert!(is_set(Some(&json!(0))));
        assert!(is_set(Some(&json!(false))));
        assert!(is_set(Some(&json!({}))));
    }

    #[test]
    fn merged_leaves_other_keys() {
        let record = Record::new().with("a", "x").with("extra", 7);
        let next = record.merged("b", json!(["1"]));
        assert_eq!(next.get("a"), Some(&json!("x")));
        assert_eq!(next.get("extra"), Some(&json!(7)));
        assert_eq!(next.get("b"), Some(&json!(["1"])));
        assert!(!record.contains("b"));
    }

    #[test]
    fn text_coerces_for_display() {
        let record = Record::new()
            .with("null", Value::Null)
            .with("num", 53)
            .with("flag", true)
            .with("s", "hello");
        assert_eq!(record.text("missing"), "");
        assert_eq!(record.text("null"), "");
        assert_eq!(record.text("num"), "53");
        assert_eq!(record.text("flag"), "true");
        assert_eq!(record.text("s"), "hello");
        // display coercion never writes back
        assert!(!record.contains("missing"));
    }

    #[test]
    fn tags_read_defensively() {
        let record = Record::new()
            .with("str", "a,b")
            .with("mixed", json!(["a", 1, "b", null]))
            .with("num", 3);
        assert!(record.tags("str").is_empty());
        assert!(record.tags("num").is_empty());
        assert!(record.tags("missing").is_empty());
        assert_eq!(record.tags("mixed"), vec!["a", "b"]);
    }

    #[test]
    fn flag_truthiness() {
        let record = Record::new()
            .with("t", true)
            .with("zero", 0)
            .with("one", 1)
            .with("empty", "")
            .with("word", "yes")
            .with("list", json!([]));
        assert!(record.flag("t"));
        assert!(!record.flag("zero"));
        assert!(record.flag("one"));
        assert!(!record.flag("empty"));
        assert!(record.flag("word"));
        assert!(record.flag("list"));
        assert!(!record.flag("missing"));
    }

    #[test]
    fn number_parses_strings() {
        let record = Record::new()
            .with("n", 443)
            .with("s", " 8080 ")
            .with("bad", "http");
        assert_eq!(record.number("n"), Some(443.0));
        assert_eq!(record.number("s"), Some(8080.0));
        assert_eq!(record.number("bad"), None);
        assert_eq!(record.number("missing"), None);
    }

    #[test]
    fn from_value_non_object_is_empty() {
        assert!(Record::from_value(json!([1, 2])).is_empty());
        let record = Record::from_value(json!({"a": "x"}));
        assert_eq!(record.text("a"), "x");
    }
}
