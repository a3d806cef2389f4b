//! Form records for each editable section of the relay configuration.
//!
//! Each section names its schema, how to read its items out of a
//! [`RelayConfig`], and how to write edited items back.

mod dns;
mod inbound;
mod route;

pub use dns::DNS_RULE_FIELDS;
pub use inbound::{PortField, INBOUND_FIELDS};
pub use route::ROUTE_FIELDS;

use relay_admin_fields::{FormRecord, Schema};

use crate::error::ConfigResult;
use crate::relay::RelayConfig;

/// A list of records edited with an `ArrayInput`.
pub trait ListSection: FormRecord {
    /// Section name, used in logs.
    const NAME: &'static str;

    /// Schema for the rows. May depend on other parts of the configuration.
    fn schema(config: &RelayConfig) -> ConfigResult<Schema>;

    fn items(config: &RelayConfig) -> Vec<Self>;

    fn store_items(config: &mut RelayConfig, items: Vec<Self>);
}

/// A single record edited with an `ObjectInput`.
pub trait ObjectSection: FormRecord {
    const NAME: &'static str;

    fn schema(config: &RelayConfig) -> ConfigResult<Schema>;

    fn item(config: &RelayConfig) -> Self;

    fn store_item(config: &mut RelayConfig, item: Self);
}
