//! ObjectInput: edits one record against a schema.

use std::collections::HashMap;

use relay_admin_fields::{render, FieldEvent, Record, Schema};
use serde_json::Value;
use tracing::{debug, trace};

use crate::view::FieldView;

/// Local editing buffer for one record.
///
/// The buffer mirrors the caller's record until the user edits it. Every
/// accepted edit merges one field into the buffer and returns the whole merged
/// record; [`replace`](Self::replace) throws the buffer away and starts over
/// from the caller's value.
#[derive(Debug, Clone)]
pub struct ObjectInput {
    schema: Schema,
    record: Record,
    tag_entries: HashMap<String, String>,
}

impl ObjectInput {
    pub fn new(schema: Schema, record: Record) -> Self {
        Self {
            schema,
            record,
            tag_entries: HashMap::new(),
        }
    }

    /// Start from the schema's default record.
    pub fn with_defaults(schema: Schema) -> Self {
        let record = schema.default_record();
        Self::new(schema, record)
    }

    /// The current buffer.
    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn into_record(self) -> Record {
        self.record
    }

    /// Replace the buffer with the caller's record. Pending tag entries are dropped.
    pub fn replace(&mut self, record: Record) {
        trace!("object input reset from external record");
        self.record = record;
        self.tag_entries.clear();
    }

    /// Merge one field value into the buffer and return the full record.
    ///
    /// Returns `None` without touching the buffer when `name` is not in the
    /// schema or the field is hidden for the current record.
    pub fn edit(&mut self, name: &str, value: Value) -> Option<&Record> {
        let field = self.schema.get(name)?;
        if !field.is_visible(&self.record) {
            trace!(field = name, "edit on hidden field ignored");
            return None;
        }
        self.commit(name, value)
    }

    /// Route a user event through the field's renderer and commit the result.
    pub fn apply(&mut self, name: &str, event: FieldEvent) -> Option<&Record> {
        let field = self.schema.get(name)?;
        let mut entry = self.tag_entries.remove(name).unwrap_or_default();
        let value = relay_admin_fields::apply(field, &self.record, &mut entry, event);
        if !entry.is_empty() {
            self.tag_entries.insert(name.to_string(), entry);
        }
        self.commit(name, value?)
    }

    /// Pending entry text of a tag-set field.
    pub fn tag_entry(&self, name: &str) -> &str {
        self.tag_entries.get(name).map(String::as_str).unwrap_or("")
    }

    /// Render visible fields in schema order.
    pub fn render(&self) -> Vec<FieldView> {
        self.schema
            .iter()
            .filter_map(|field| {
                let widget = render(field, &self.record, self.tag_entry(&field.name))?;
                Some(FieldView {
                    name: field.name.clone(),
                    presentation: field.presentation.clone(),
                    widget,
                })
            })
            .collect()
    }

    fn commit(&mut self, name: &str, value: Value) -> Option<&Record> {
        self.record = self.record.merged(name, value);
        debug!(field = name, "record committed");
        Some(&self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_admin_fields::{FieldDescriptor, SelectOption, Widget};
    use serde_json::json;

    fn route_schema() -> Schema {
        Schema::new(vec![
            FieldDescriptor::select(
                "protocol",
                vec![SelectOption::plain("direct"), SelectOption::plain("shadowsocks")],
            ),
            FieldDescriptor::text("password")
                .visible_when(|r| r.get("protocol") == Some(&json!("shadowsocks"))),
            FieldDescriptor::tags("ports"),
        ])
        .unwrap()
    }

    #[test]
    fn edit_returns_full_merged_record() {
        let mut input = ObjectInput::new(
            route_schema(),
            Record::new().with("protocol", "direct").with("note", "kept"),
        );
        let committed = input.edit("ports", json!(["80"])).cloned().unwrap();
        assert_eq!(
            committed.into_value(),
            json!({"protocol": "direct", "note": "kept", "ports": ["80"]})
        );
    }

    #[test]
    fn editing_one_field_keeps_hidden_field_value() {
        let mut input = ObjectInput::new(
            route_schema(),
            Record::new()
                .with("protocol", "direct")
                .with("password", "secret"),
        );
        input.apply("ports", FieldEvent::TagEntry("443".into()));
        let committed = input.apply("ports", FieldEvent::TagConfirm).unwrap();
        assert_eq!(committed.get("password"), Some(&json!("secret")));
        assert_eq!(committed.get("ports"), Some(&json!(["443"])));
    }

    #[test]
    fn hidden_field_is_not_editable_or_rendered() {
        let mut input = ObjectInput::new(route_schema(), Record::new().with("protocol", "direct"));
        assert!(input.edit("password", json!("x")).is_none());
        assert!(input
            .apply("password", FieldEvent::Input("x".into()))
            .is_none());
        assert!(!input.record().contains("password"));
        let names: Vec<_> = input.render().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["protocol", "ports"]);
    }

    #[test]
    fn revealed_field_renders_in_schema_order() {
        let mut input = ObjectInput::with_defaults(route_schema());
        input.apply("protocol", FieldEvent::Choose(1)).unwrap();
        let names: Vec<_> = input.render().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["protocol", "password", "ports"]);
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut input = ObjectInput::with_defaults(route_schema());
        assert!(input.edit("nope", json!(1)).is_none());
        assert!(!input.record().contains("nope"));
    }

    #[test]
    fn replace_discards_buffer_and_entries() {
        let mut input = ObjectInput::with_defaults(route_schema());
        input.apply("ports", FieldEvent::TagEntry("8080".into()));
        input.edit("protocol", json!("shadowsocks"));
        input.replace(Record::new().with("protocol", "direct"));
        assert_eq!(input.record(), &Record::new().with("protocol", "direct"));
        assert_eq!(input.tag_entry("ports"), "");
    }

    #[test]
    fn tag_entry_shows_in_render() {
        let mut input = ObjectInput::with_defaults(route_schema());
        assert!(input
            .apply("ports", FieldEvent::TagEntry("53".into()))
            .is_none());
        let view = input
            .render()
            .into_iter()
            .find(|v| v.name == "ports")
            .unwrap();
        assert_eq!(
            view.widget,
            Widget::Tags {
                tags: Vec::new(),
                entry: "53".into(),
            }
        );
    }

    #[test]
    fn number_keystrokes_build_up_a_negative_value() {
        let schema = Schema::new(vec![FieldDescriptor::number("n")]).unwrap();
        let mut input = ObjectInput::with_defaults(schema);
        let committed = input.apply("n", FieldEvent::Input("-".into())).cloned();
        assert_eq!(committed.unwrap().get("n"), Some(&json!("-")));
        let committed = input.apply("n", FieldEvent::Input("-5".into())).cloned();
        assert_eq!(committed.unwrap().get("n"), Some(&json!(-5)));
        assert_eq!(input.into_record().number("n"), Some(-5.0));
    }
}
