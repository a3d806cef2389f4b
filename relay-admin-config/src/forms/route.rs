use relay_admin_fields::{FieldDescriptor, FormRecord, Record, Schema, SelectOption};
use serde_json::{json, Value};

use super::ListSection;
use crate::convert::{lines_to_text, numbers_to_tags, tags_to_numbers, text_to_lines};
use crate::error::ConfigResult;
use crate::relay::{OutboundRoute, Protocol, RelayConfig};

/// Field names of an outbound route row, in display order.
pub const ROUTE_FIELDS: [&str; 8] = [
    "tag", "protocol", "address", "port", "password", "ip_cidrs", "ports", "enabled",
];

fn protocol_of(record: &Record) -> Protocol {
    Protocol::parse(&record.text("protocol")).unwrap_or_default()
}

impl FormRecord for OutboundRoute {
    fn to_record(&self) -> Record {
        Record::new()
            .with("tag", self.tag.clone())
            .with("protocol", self.protocol.as_str())
            .with("address", self.address.clone())
            .with("port", self.port.map_or(json!(""), |p| json!(p)))
            .with("password", self.password.clone())
            .with("ip_cidrs", lines_to_text(&self.ip_cidrs))
            .with("ports", json!(numbers_to_tags(&self.ports)))
            .with("enabled", self.enabled)
    }

    fn from_record(record: &Record) -> Self {
        let protocol = protocol_of(record);
        Self {
            tag: record.text("tag").trim().to_string(),
            protocol,
            address: if protocol.is_proxy() {
                record.text("address").trim().to_string()
            } else {
                String::new()
            },
            port: record
                .number("port")
                .filter(|n| protocol.is_proxy() && n.fract() == 0.0)
                .and_then(|n| u16::try_from(n as i64).ok()),
            password: if protocol == Protocol::Shadowsocks {
                record.text("password")
            } else {
                String::new()
            },
            ip_cidrs: text_to_lines(&record.text("ip_cidrs")),
            ports: tags_to_numbers(&record.tags("ports")),
            // unset reads as enabled; only an explicit `false` turns a route off
            enabled: !matches!(record.get("enabled"), Some(Value::Bool(false))),
        }
    }
}

impl ListSection for OutboundRoute {
    const NAME: &'static str = "routes";

    fn schema(_config: &RelayConfig) -> ConfigResult<Schema> {
        let protocols = Protocol::ALL
            .iter()
            .map(|p| SelectOption::new(p.label(), p.as_str()))
            .collect();
        Ok(Schema::new(vec![
            FieldDescriptor::text("tag").label("Tag"),
            FieldDescriptor::select("protocol", protocols).label("Protocol"),
            FieldDescriptor::text("address")
                .label("Server")
                .placeholder("host or IP")
                .visible_when(|r| protocol_of(r).is_proxy()),
            FieldDescriptor::number("port")
                .label("Port")
                .visible_when(|r| protocol_of(r).is_proxy()),
            FieldDescriptor::text("password")
                .label("Password")
                .visible_when(|r| protocol_of(r) == Protocol::Shadowsocks),
            FieldDescriptor::textarea("ip_cidrs")
                .label("IP ranges")
                .placeholder("one CIDR per line"),
            FieldDescriptor::tags("ports").label("Ports"),
            // a select rather than a switch so a fresh row stays a draft
            FieldDescriptor::select(
                "enabled",
                vec![SelectOption::new("On", true), SelectOption::new("Off", false)],
            )
            .label("Status"),
        ])?)
    }

    fn items(config: &RelayConfig) -> Vec<Self> {
        config.routes.clone()
    }

    fn store_items(config: &mut RelayConfig, items: Vec<Self>) {
        config.routes = items;
    }
}
