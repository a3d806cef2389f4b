//! # Relay Admin Configuration
//!
//! Call-site wiring around the schema-driven editors: the relay configuration
//! document, where it is stored, how each section maps onto editor records, and
//! the pages that tie a fetch, an edit session and a save together.
//!
//! ## Modules
//!
//! - [`settings`] - admin tool settings loaded with Figment (defaults, files, env)
//! - [`store`] - the [`ConfigStore`] persistence trait with file and memory backends
//! - [`relay`] - the relay configuration document
//! - [`forms`] - per-section schemas and typed record conversions
//! - [`convert`] - textarea and numeric tag-set conventions
//! - [`page`] - list and object editing pages
//! - [`logging`] - tracing subscriber setup
//!
//! ## Usage
//!
//! ```no_run
//! use relay_admin_config::{AdminSettings, FileConfigStore, RoutesPage};
//! use relay_admin_fields::FieldEvent;
//!
//! # async fn example() -> relay_admin_config::ConfigResult<()> {
//! let settings = AdminSettings::load()?;
//! relay_admin_config::logging::init(&settings.log_filter);
//!
//! let store = FileConfigStore::new(&settings.config_path);
//! let mut page = RoutesPage::load(&store, settings.insert_position()).await?;
//! page.editor_mut().add_row();
//! page.editor_mut()
//!     .apply(0, "tag", FieldEvent::Input("lan".into()));
//! page.save(&store).await?;
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod error;
pub mod forms;
pub mod logging;
pub mod page;
pub mod relay;
pub mod settings;
pub mod store;

pub use error::{ConfigError, ConfigResult};
pub use forms::{ListSection, ObjectSection, PortField};
pub use page::{DnsRulesPage, InboundPage, ListPage, ObjectPage, RoutesPage};
pub use relay::{DnsRule, DnsSettings, InboundSettings, OutboundRoute, Protocol, RelayConfig};
pub use settings::AdminSettings;
pub use store::{ConfigStore, FileConfigStore, MemoryConfigStore};
