//! Per-kind dispatch from a descriptor to a widget and back.
//!
//! [`render`] turns a descriptor plus the current record into a [`Widget`];
//! [`apply`] turns a user [`FieldEvent`] into the next stored value for that
//! field. Both return `None` for fields hidden by their visibility predicate.

use serde_json::Value;
use tracing::trace;

use crate::types::{FieldDescriptor, FieldKind, SelectOption};
use crate::value::Record;

/// The editing affordance for one visible field.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// Single-line input for text, time and number fields.
    Input {
        value: String,
        numeric: bool,
        time: bool,
    },
    /// Single-value selector. `selected` is the index of the matching option.
    Select {
        options: Vec<SelectOption>,
        selected: Option<usize>,
    },
    Switch {
        checked: bool,
    },
    Textarea {
        value: String,
    },
    /// Chip list plus the pending entry box.
    Tags {
        tags: Vec<String>,
        entry: String,
    },
    /// Payload produced by a custom renderer.
    Custom(Value),
    /// The slot exists but has nothing to show (a select without options).
    Empty,
}

/// A user input aimed at one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// New contents of a text, time, number or textarea input.
    Input(String),
    /// Pick the option at this index.
    Choose(usize),
    Toggle(bool),
    /// New contents of a tag entry box.
    TagEntry(String),
    /// Confirm keypress in a tag entry box.
    TagConfirm,
    TagRemove(String),
    /// Input routed to a custom renderer.
    Custom(Value),
}

/// Render one field, or `None` when it is hidden for `record`.
pub fn render(field: &FieldDescriptor, record: &Record, tag_entry: &str) -> Option<Widget> {
    if !field.is_visible(record) {
        return None;
    }
    let current = record.get(&field.name);
    let widget = match &field.kind {
        FieldKind::Select { options } if options.is_empty() => Widget::Empty,
        FieldKind::Select { options } => Widget::Select {
            options: options.clone(),
            selected: current.and_then(|v| options.iter().position(|o| &o.value == v)),
        },
        FieldKind::Switch => Widget::Switch {
            checked: record.flag(&field.name),
        },
        FieldKind::Textarea => Widget::Textarea {
            value: record.text(&field.name),
        },
        FieldKind::Tags => Widget::Tags {
            tags: record.tags(&field.name),
            entry: tag_entry.to_string(),
        },
        FieldKind::Custom(custom) => Widget::Custom(custom.render(current)),
        FieldKind::Text | FieldKind::Time | FieldKind::Number => Widget::Input {
            value: record.text(&field.name),
            numeric: matches!(field.kind, FieldKind::Number),
            time: matches!(field.kind, FieldKind::Time),
        },
    };
    Some(widget)
}

/// Apply a user event to one field.
///
/// Returns the next stored value for the field, or `None` when the event is a
/// no-op: the field is hidden, the event does not fit the field kind, or the
/// input was rejected. `tag_entry` is the field's pending entry text; it is
/// updated by entry events and cleared when a tag is accepted.
pub fn apply(
    field: &FieldDescriptor,
    record: &Record,
    tag_entry: &mut String,
    event: FieldEvent,
) -> Option<Value> {
    if !field.is_visible(record) {
        trace!(field = %field.name, "event on hidden field ignored");
        return None;
    }
    let current = record.get(&field.name);
    match (&field.kind, event) {
        (FieldKind::Custom(custom), FieldEvent::Custom(input)) => custom.apply(current, input),
        (FieldKind::Select { options }, FieldEvent::Choose(index)) => {
            options.get(index).map(|o| o.value.clone())
        }
        (FieldKind::Switch, FieldEvent::Toggle(on)) => Some(Value::Bool(on)),
        (FieldKind::Text | FieldKind::Time | FieldKind::Textarea, FieldEvent::Input(text)) => {
            Some(Value::String(text))
        }
        (FieldKind::Number, FieldEvent::Input(text)) => Some(parse_number(text)),
        (FieldKind::Tags, FieldEvent::TagEntry(text)) => {
            *tag_entry = text;
            None
        }
        (FieldKind::Tags, FieldEvent::TagConfirm) => {
            let tags = add_tag(record.tags(&field.name), tag_entry)?;
            tag_entry.clear();
            Some(tags_value(tags))
        }
        (FieldKind::Tags, FieldEvent::TagRemove(tag)) => {
            Some(tags_value(remove_tag(record.tags(&field.name), &tag)))
        }
        (kind, event) => {
            trace!(field = %field.name, ?kind, ?event, "event does not apply to field kind");
            None
        }
    }
}

/// Append a trimmed entry, rejecting empty entries and duplicates.
fn add_tag(mut tags: Vec<String>, entry: &str) -> Option<Vec<String>> {
    let tag = entry.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return None;
    }
    tags.push(tag.to_string());
    Some(tags)
}

/// Remove the first matching tag, keeping the order of the rest.
fn remove_tag(mut tags: Vec<String>, tag: &str) -> Vec<String> {
    if let Some(pos) = tags.iter().position(|t| t == tag) {
        tags.remove(pos);
    }
    tags
}

fn tags_value(tags: Vec<String>) -> Value {
    Value::Array(tags.into_iter().map(Value::String).collect())
}

/// Empty input clears the field. Text that is not a finite number yet
/// (`-`, `1e`) is kept as typed so the next keystroke can complete it.
fn parse_number(text: String) -> Value {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Value::String(String::new());
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::from(n);
    }
    match trimmed.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
        Some(n) => Value::Number(n),
        None => Value::String(text),
    }
}
