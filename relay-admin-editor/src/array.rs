//! ArrayInput: edits an ordered list of records with draft rows.
//!
//! The list buffer is rendered in full, but the caller only ever sees the rows
//! that are set: a row with no real value in any schema field is a draft. A
//! draft becomes visible to the caller the moment one of its fields gets a
//! value and drops out again if every field is cleared.

use relay_admin_fields::{FieldEvent, Record, Schema};
use serde_json::Value;
use tracing::debug;

use crate::object::ObjectInput;
use crate::view::{ListView, RowView};

/// Where new rows go, and where the add control sits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertPosition {
    #[default]
    Back,
    Front,
}

impl InsertPosition {
    pub fn from_front(front: bool) -> Self {
        if front {
            Self::Front
        } else {
            Self::Back
        }
    }
}

/// Local editing buffer for a list of records.
///
/// Always holds at least one row. Edits return the committed collection, i.e.
/// the buffer with draft rows filtered out.
#[derive(Debug, Clone)]
pub struct ArrayInput {
    schema: Schema,
    rows: Vec<ObjectInput>,
    position: InsertPosition,
}

impl ArrayInput {
    /// Seed from the caller's records, or a single default row when there are none.
    pub fn new(schema: Schema, records: Vec<Record>, position: InsertPosition) -> Self {
        let mut input = Self {
            schema,
            rows: Vec::new(),
            position,
        };
        if records.is_empty() {
            let row = input.default_row();
            input.rows.push(row);
        } else {
            input.seed(records);
        }
        input
    }

    /// Number of rendered rows, drafts included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: the buffer holds at least one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, drafts included.
    pub fn rows(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter().map(ObjectInput::record)
    }

    pub fn row(&self, index: usize) -> Option<&ObjectInput> {
        self.rows.get(index)
    }

    /// The collection as the caller sees it: rows with at least one set field.
    pub fn committed(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(ObjectInput::record)
            .filter(|r| self.schema.is_record_set(r))
            .cloned()
            .collect()
    }

    /// Take the caller's collection.
    ///
    /// A non-empty collection replaces the whole buffer. An empty one is
    /// ignored so drafts survive a fetch that has no committed rows yet.
    pub fn replace(&mut self, records: Vec<Record>) {
        if records.is_empty() {
            debug!(rows = self.rows.len(), "empty external collection ignored");
            return;
        }
        self.seed(records);
    }

    /// Insert a default row at the editing frontier. Emits nothing.
    pub fn add_row(&mut self) {
        let row = self.default_row();
        match self.position {
            InsertPosition::Front => self.rows.insert(0, row),
            InsertPosition::Back => self.rows.push(row),
        }
        debug!(rows = self.rows.len(), position = ?self.position, "draft row added");
    }

    /// Replace one row with `record` and return the committed collection.
    pub fn update_row(&mut self, index: usize, record: Record) -> Option<Vec<Record>> {
        self.rows.get_mut(index)?.replace(record);
        Some(self.emit())
    }

    /// Merge one field value into a row and return the committed collection.
    pub fn edit_row(&mut self, index: usize, name: &str, value: Value) -> Option<Vec<Record>> {
        self.rows.get_mut(index)?.edit(name, value)?;
        Some(self.emit())
    }

    /// Route a user event to one row's field and return the committed collection.
    pub fn apply(&mut self, index: usize, name: &str, event: FieldEvent) -> Option<Vec<Record>> {
        self.rows.get_mut(index)?.apply(name, event)?;
        Some(self.emit())
    }

    /// Delete a row and return the committed collection.
    ///
    /// Deleting the last row leaves a fresh default row in its place.
    pub fn remove_row(&mut self, index: usize) -> Option<Vec<Record>> {
        if index >= self.rows.len() {
            return None;
        }
        self.rows.remove(index);
        if self.rows.is_empty() {
            let row = self.default_row();
            self.rows.push(row);
        }
        Some(self.emit())
    }

    /// Render every row, drafts included.
    pub fn render(&self) -> ListView {
        let frontier = match self.position {
            InsertPosition::Front => 0,
            InsertPosition::Back => self.rows.len().saturating_sub(1),
        };
        let can_delete = self.rows.len() > 1;
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| RowView {
                index,
                fields: row.render(),
                can_delete,
                add_control: index == frontier,
            })
            .collect();
        ListView { rows }
    }

    fn seed(&mut self, records: Vec<Record>) {
        debug!(rows = records.len(), "list input reset from external collection");
        self.rows = records
            .into_iter()
            .map(|r| ObjectInput::new(self.schema.clone(), r))
            .collect();
    }

    fn default_row(&self) -> ObjectInput {
        ObjectInput::with_defaults(self.schema.clone())
    }

    fn emit(&self) -> Vec<Record> {
        let committed = self.committed();
        debug!(
            rows = self.rows.len(),
            committed = committed.len(),
            "list committed"
        );
        committed
    }
}
