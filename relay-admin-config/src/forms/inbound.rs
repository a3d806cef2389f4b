use relay_admin_fields::{CustomField, FieldDescriptor, FormRecord, Record, Schema};
use serde_json::{json, Value};

use super::ObjectSection;
use crate::convert::{numbers_to_tags, tags_to_numbers};
use crate::error::ConfigResult;
use crate::relay::{InboundSettings, RelayConfig};

/// Field names of the inbound form, in display order.
pub const INBOUND_FIELDS: [&str; 4] = ["listen", "port", "sniffing", "allowed_ports"];

/// Port entry that only accepts values in `1..=65535`.
///
/// Renders `{ "value": <text>, "valid": <bool> }`. Accepts string or numeric
/// input; an empty string clears the port.
pub struct PortField;

impl PortField {
    fn parse(input: &Value) -> Option<u16> {
        let port = match input {
            Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        port.filter(|p| *p != 0)
    }
}

impl CustomField for PortField {
    fn render(&self, current: Option<&Value>) -> Value {
        let text = match current {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        let valid = text.is_empty() || current.and_then(Self::parse).is_some();
        json!({ "value": text, "valid": valid })
    }

    fn apply(&self, _current: Option<&Value>, input: Value) -> Option<Value> {
        if input.as_str().is_some_and(|s| s.trim().is_empty()) {
            return Some(json!(""));
        }
        Self::parse(&input).map(|p| json!(p))
    }
}

impl FormRecord for InboundSettings {
    fn to_record(&self) -> Record {
        Record::new()
            .with("listen", self.listen.clone())
            .with("port", self.port.map_or(json!(""), |p| json!(p)))
            .with("sniffing", self.sniffing)
            .with("allowed_ports", json!(numbers_to_tags(&self.allowed_ports)))
    }

    fn from_record(record: &Record) -> Self {
        Self {
            listen: record.text("listen").trim().to_string(),
            port: record.get("port").and_then(PortField::parse),
            sniffing: record.flag("sniffing"),
            allowed_ports: tags_to_numbers(&record.tags("allowed_ports")),
        }
    }
}

impl ObjectSection for InboundSettings {
    const NAME: &'static str = "inbound";

    fn schema(_config: &RelayConfig) -> ConfigResult<Schema> {
        Ok(Schema::new(vec![
            FieldDescriptor::text("listen")
                .label("Listen address")
                .placeholder("127.0.0.1"),
            FieldDescriptor::custom("port", PortField).label("Port"),
            FieldDescriptor::switch("sniffing").label("Sniffing"),
            FieldDescriptor::tags("allowed_ports").label("Allowed ports"),
        ])?)
    }

    fn item(config: &RelayConfig) -> Self {
        config.inbound.clone()
    }

    fn store_item(config: &mut RelayConfig, item: Self) {
        config.inbound = item;
    }
}
