//! View models produced by the editors.

use relay_admin_fields::{Presentation, Widget};

/// One rendered field slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub name: String,
    pub presentation: Presentation,
    pub widget: Widget,
}

/// One rendered row of a list editor.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub index: usize,
    pub fields: Vec<FieldView>,
    /// Whether the delete control is offered on this row.
    pub can_delete: bool,
    /// Whether the add control is attached to this row.
    pub add_control: bool,
}

/// A rendered list editor.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub rows: Vec<RowView>,
}

impl ListView {
    /// Index of the row carrying the add control.
    pub fn add_control_index(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.add_control)
    }
}
