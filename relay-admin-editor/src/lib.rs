//! Schema-driven record and list editors
//!
//! Two controllers bind a [`Schema`](relay_admin_fields::Schema) to data owned
//! by the caller:
//!
//! - [`ObjectInput`] edits one record
//! - [`ArrayInput`] edits an ordered list of records, with draft rows
//!
//! Both follow the same contract. The caller pushes its current value down with
//! `replace`, user input goes in through `apply`/`edit`, and every accepted
//! edit returns the value the caller should take as its new state. Nothing is
//! batched; each returned value is the complete post-edit state.

pub mod array;
pub mod object;
pub mod view;

pub use array::{ArrayInput, InsertPosition};
pub use object::ObjectInput;
pub use view::{FieldView, ListView, RowView};
