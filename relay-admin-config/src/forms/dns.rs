use relay_admin_fields::{FieldDescriptor, FormRecord, Record, Schema, SelectOption};
use serde_json::json;

use super::ListSection;
use crate::error::ConfigResult;
use crate::relay::{DnsRule, RelayConfig};

/// Field names of a DNS rule row, in display order.
pub const DNS_RULE_FIELDS: [&str; 2] = ["domains", "server"];

impl FormRecord for DnsRule {
    fn to_record(&self) -> Record {
        Record::new()
            .with("domains", json!(self.domains))
            .with("server", self.server.clone())
            .with("disabled", self.disabled)
    }

    fn from_record(record: &Record) -> Self {
        Self {
            domains: record.tags("domains"),
            server: record.text("server"),
            disabled: record.flag("disabled"),
        }
    }
}

impl ListSection for DnsRule {
    const NAME: &'static str = "dns.rules";

    /// The server choice is limited to the configured upstream servers.
    fn schema(config: &RelayConfig) -> ConfigResult<Schema> {
        let servers = config
            .dns
            .servers
            .iter()
            .map(|s| SelectOption::plain(s.clone()))
            .collect();
        Ok(Schema::new(vec![
            FieldDescriptor::tags("domains")
                .label("Domains")
                .placeholder("example.com"),
            FieldDescriptor::select("server", servers).label("Server"),
        ])?)
    }

    fn items(config: &RelayConfig) -> Vec<Self> {
        config.dns.rules.clone()
    }

    fn store_items(config: &mut RelayConfig, items: Vec<Self>) {
        config.dns.rules = items;
    }
}
