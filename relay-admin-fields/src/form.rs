//! Typed records for call sites.
//!
//! Editors work on keyed [`Record`]s. Each call site defines one concrete type
//! for the items it edits and converts at the boundary with [`FormRecord`].

use crate::value::Record;

/// A concrete record type that can be edited through a schema.
pub trait FormRecord: Sized {
    /// Project the value into the keyed form the editor displays.
    fn to_record(&self) -> Record;

    /// Read a value back out of an edited record.
    ///
    /// Must not fail: malformed or missing fields fall back to defaults.
    fn from_record(record: &Record) -> Self;
}
