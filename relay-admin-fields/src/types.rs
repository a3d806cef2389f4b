//! Field descriptor types.
//!
//! A [`FieldDescriptor`] describes one editable attribute of a record: its key,
//! its kind, presentation hints, and an optional visibility predicate. The
//! data-only parts serialize to/from YAML via serde so schemas can live on disk;
//! visibility predicates and custom renderers are attached in code.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::Record;

/// A single option in a select field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: Value,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// An option whose label is its own string value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value: Value::String(value),
        }
    }
}

/// A caller-supplied editor that fully replaces default dispatch for one field.
///
/// The implementation owns both reading and writing of the field value.
pub trait CustomField: Send + Sync {
    /// Produce the opaque view payload for the current value.
    fn render(&self, current: Option<&Value>) -> Value;

    /// Turn a user input into the next stored value, or `None` to ignore it.
    fn apply(&self, current: Option<&Value>, input: Value) -> Option<Value>;
}

/// Shared handle to a [`CustomField`].
#[derive(Clone)]
pub struct CustomRenderer(Arc<dyn CustomField>);

impl CustomRenderer {
    pub fn new(field: impl CustomField + 'static) -> Self {
        Self(Arc::new(field))
    }

    pub fn render(&self, current: Option<&Value>) -> Value {
        self.0.render(current)
    }

    pub fn apply(&self, current: Option<&Value>, input: Value) -> Option<Value> {
        self.0.apply(current, input)
    }
}

impl fmt::Debug for CustomRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomRenderer")
    }
}

impl PartialEq for CustomRenderer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// The kind of a field. Determines how it is edited and what its empty value is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Time,
    Number,
    Select {
        #[serde(default)]
        options: Vec<SelectOption>,
    },
    Switch,
    Textarea,
    Tags,
    #[serde(skip)]
    Custom(CustomRenderer),
}

impl FieldKind {
    /// The value a freshly synthesized row holds for this kind.
    pub fn empty_value(&self) -> Value {
        match self {
            FieldKind::Tags => Value::Array(Vec::new()),
            FieldKind::Switch => Value::Bool(false),
            _ => Value::String(String::new()),
        }
    }
}

/// Predicate deciding whether a field is shown for a given record.
#[derive(Clone)]
pub struct Visibility(Arc<dyn Fn(&Record) -> bool + Send + Sync>);

impl Visibility {
    pub fn new(predicate: impl Fn(&Record) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    pub fn test(&self, record: &Record) -> bool {
        (self.0)(record)
    }
}

impl fmt::Debug for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Visibility")
    }
}

/// Presentation hints. Passed through to the view untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Presentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// A field descriptor: the complete schema for one editable attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(flatten)]
    pub presentation: Presentation,
    #[serde(skip)]
    pub visible: Option<Visibility>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            presentation: Presentation::default(),
            visible: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn time(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Time)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn select(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self::new(name, FieldKind::Select { options })
    }

    pub fn switch(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Switch)
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Textarea)
    }

    pub fn tags(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Tags)
    }

    pub fn custom(name: impl Into<String>, field: impl CustomField + 'static) -> Self {
        Self::new(name, FieldKind::Custom(CustomRenderer::new(field)))
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.presentation.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.presentation.placeholder = Some(placeholder.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.presentation.prefix = Some(prefix.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.presentation.class_name = Some(class_name.into());
        self
    }

    /// Show the field only for records satisfying `predicate`.
    pub fn visible_when(
        mut self,
        predicate: impl Fn(&Record) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.visible = Some(Visibility::new(predicate));
        self
    }

    /// Whether the field is shown for `record`. Fields without a predicate always are.
    pub fn is_visible(&self, record: &Record) -> bool {
        self.visible.as_ref().is_none_or(|v| v.test(record))
    }

    /// The value a freshly synthesized row holds for this field.
    pub fn empty_value(&self) -> Value {
        self.kind.empty_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_kind_select_yaml_round_trip() {
        let kind = FieldKind::Select {
            options: vec![
                SelectOption::plain("direct"),
                SelectOption::new("SOCKS5", "socks"),
            ],
        };
        let yaml = serde_yaml_ng::to_string(&kind).unwrap();
        let parsed: FieldKind = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(kind, parsed);
    }

    #[test]
    fn field_kind_tags_from_yaml() {
        let parsed: FieldKind = serde_yaml_ng::from_str("kind: tags").unwrap();
        assert_eq!(parsed, FieldKind::Tags);
    }

    #[test]
    fn custom_kind_does_not_serialize() {
        struct Echo;
        impl CustomField for Echo {
            fn render(&self, current: Option<&Value>) -> Value {
                current.cloned().unwrap_or(Value::Null)
            }
            fn apply(&self, _current: Option<&Value>, input: Value) -> Option<Value> {
                Some(input)
            }
        }
        let field = FieldDescriptor::custom("port", Echo);
        assert!(serde_yaml_ng::to_string(&field).is_err());
    }

    #[test]
    fn descriptor_yaml_uses_type_key_and_flattened_hints() {
        let field = FieldDescriptor::text("address")
            .label("Address")
            .placeholder("example.com");
        let yaml = serde_yaml_ng::to_string(&field).unwrap();
        assert!(yaml.contains("type:"));
        assert!(yaml.contains("placeholder: example.com"));
        assert!(!yaml.contains("presentation"));
        assert!(!yaml.contains("prefix"));
    }

    #[test]
    fn descriptor_from_yaml() {
        let yaml = r#"
name: protocol
type:
  kind: select
  options:
    - label: Direct
      value: direct
    - label: HTTP
      value: http
label: Protocol
"#;
        let field: FieldDescriptor = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(field.name, "protocol");
        assert_eq!(field.presentation.label.as_deref(), Some("Protocol"));
        assert!(field.visible.is_none());
        if let FieldKind::Select { ref options } = field.kind {
            assert_eq!(options.len(), 2);
            assert_eq!(options[1].value, json!("http"));
        } else {
            panic!("expected Select kind");
        }
    }

    #[test]
    fn empty_values_per_kind() {
        assert_eq!(FieldDescriptor::tags("t").empty_value(), json!([]));
        assert_eq!(FieldDescriptor::switch("s").empty_value(), json!(false));
        assert_eq!(FieldDescriptor::text("x").empty_value(), json!(""));
        assert_eq!(FieldDescriptor::number("n").empty_value(), json!(""));
        assert_eq!(FieldDescriptor::textarea("a").empty_value(), json!(""));
        assert_eq!(
            FieldDescriptor::select("o", Vec::new()).empty_value(),
            json!("")
        );
    }

    #[test]
    fn visibility_predicate() {
        let field = FieldDescriptor::text("password")
            .visible_when(|r| r.get("protocol") == Some(&json!("shadowsocks")));
        let mut record = Record::new();
        assert!(!field.is_visible(&record));
        record.insert("protocol", "shadowsocks");
        assert!(field.is_visible(&record));
        assert!(FieldDescriptor::text("tag").is_visible(&Record::new()));
    }
}
