//! The ordered descriptor list shared by one editor instance.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::types::FieldDescriptor;
use crate::value::Record;

/// An immutable, ordered list of field descriptors.
///
/// Cloning is cheap; every row of an editor shares the same descriptors and
/// editing never mutates them.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Arc<[FieldDescriptor]>,
}

impl Schema {
    /// Build a schema, rejecting empty and duplicate names.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (position, field) in fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(FieldsError::EmptyFieldName { position });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(FieldsError::DuplicateFieldName {
                    name: field.name.clone(),
                });
            }
        }
        debug!(fields = fields.len(), "schema built");
        Ok(Self {
            fields: fields.into(),
        })
    }

    /// Load a schema from a YAML list of descriptors.
    ///
    /// Visibility predicates and custom renderers cannot be expressed in YAML;
    /// attach them in code with [`Schema::map`].
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let fields: Vec<FieldDescriptor> = serde_yaml_ng::from_str(yaml)?;
        Self::new(fields)
    }

    /// Rebuild the schema with `f` applied to every descriptor.
    pub fn map(&self, f: impl FnMut(FieldDescriptor) -> FieldDescriptor) -> Result<Self> {
        Self::new(self.fields.iter().cloned().map(f).collect())
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Synthesize a default row: every field set to its kind's empty value.
    pub fn default_record(&self) -> Record {
        let mut record = Record::new();
        for field in self.fields.iter() {
            record.insert(field.name.clone(), field.empty_value());
        }
        record
    }

    /// A record is set when any schema field holds a real value.
    ///
    /// Keys outside the schema do not count.
    pub fn is_record_set(&self, record: &Record) -> bool {
        self.fields.iter().any(|f| record.is_field_set(&f.name))
    }
}
