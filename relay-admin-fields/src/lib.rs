//! Field descriptors, records and field rendering
//!
//! `relay-admin-fields` is the schema half of the relay admin editors. It knows
//! nothing about DNS rules or outbound routes; call sites describe their records
//! with a [`Schema`] and hand [`Record`]s to the editor controllers.
//!
//! # Architecture
//!
//! - **Schema-only descriptors**: [`FieldDescriptor`] is immutable data shared by
//!   every row of one editor
//! - **Keyed records**: [`Record`] is a JSON object; keys outside the schema are
//!   carried along untouched
//! - **Exhaustive dispatch**: [`render`] and [`apply`] match on [`FieldKind`] and
//!   never fail; malformed stored values are coerced instead

pub mod error;
pub mod form;
pub mod render;
pub mod schema;
pub mod types;
pub mod value;

pub use error::{FieldsError, Result};
pub use form::FormRecord;
pub use render::{apply, render, FieldEvent, Widget};
pub use schema::Schema;
pub use types::{
    CustomField, CustomRenderer, FieldDescriptor, FieldKind, Presentation, SelectOption,
    Visibility,
};
pub use value::{is_set, Record};
