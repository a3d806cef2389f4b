//! Editing pages: fetch a section, edit it, save it back.
//!
//! A page owns one editor and a copy of the configuration it was loaded from.
//! Saving writes the committed rows into that copy and hands the whole document
//! to the store, so sections a page does not edit are preserved.

use std::marker::PhantomData;

use relay_admin_editor::{ArrayInput, InsertPosition, ObjectInput};
use relay_admin_fields::FormRecord;
use tracing::{debug, info};

use crate::error::ConfigResult;
use crate::forms::{ListSection, ObjectSection};
use crate::relay::{DnsRule, InboundSettings, OutboundRoute, RelayConfig};
use crate::store::ConfigStore;

/// Page editing a list section with an [`ArrayInput`].
#[derive(Debug)]
pub struct ListPage<S> {
    base: RelayConfig,
    editor: ArrayInput,
    _section: PhantomData<S>,
}

pub type RoutesPage = ListPage<OutboundRoute>;
pub type DnsRulesPage = ListPage<DnsRule>;

impl<S: ListSection> ListPage<S> {
    /// Fetch the configuration and build the editor. Absence loads as empty.
    pub async fn load(store: &dyn ConfigStore, position: InsertPosition) -> ConfigResult<Self> {
        let base = store.fetch().await?.unwrap_or_default();
        let schema = S::schema(&base)?;
        let records = S::items(&base).iter().map(FormRecord::to_record).collect();
        debug!(section = S::NAME, "list page loaded");
        Ok(Self {
            editor: ArrayInput::new(schema, records, position),
            base,
            _section: PhantomData,
        })
    }

    /// Fetch again and push the result into the editor.
    ///
    /// An empty section leaves the editor's drafts in place.
    pub async fn reload(&mut self, store: &dyn ConfigStore) -> ConfigResult<()> {
        let base = store.fetch().await?.unwrap_or_default();
        let records = S::items(&base).iter().map(FormRecord::to_record).collect();
        self.editor.replace(records);
        self.base = base;
        debug!(section = S::NAME, "list page reloaded");
        Ok(())
    }

    pub fn editor(&self) -> &ArrayInput {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ArrayInput {
        &mut self.editor
    }

    /// The configuration the page was last loaded from or saved as.
    pub fn base(&self) -> &RelayConfig {
        &self.base
    }

    /// Typed view of the committed rows.
    pub fn items(&self) -> Vec<S> {
        self.editor
            .committed()
            .iter()
            .map(S::from_record)
            .collect()
    }

    /// Save the committed rows. On failure the editor and base are left untouched.
    pub async fn save(&mut self, store: &dyn ConfigStore) -> ConfigResult<()> {
        let mut next = self.base.clone();
        let items = self.items();
        let count = items.len();
        S::store_items(&mut next, items);
        store.update(&next).await?;
        self.base = next;
        info!(section = S::NAME, items = count, "section saved");
        Ok(())
    }
}

/// Page editing a single-record section with an [`ObjectInput`].
#[derive(Debug)]
pub struct ObjectPage<S> {
    base: RelayConfig,
    editor: ObjectInput,
    _section: PhantomData<S>,
}

pub type InboundPage = ObjectPage<InboundSettings>;

impl<S: ObjectSection> ObjectPage<S> {
    pub async fn load(store: &dyn ConfigStore) -> ConfigResult<Self> {
        let base = store.fetch().await?.unwrap_or_default();
        let schema = S::schema(&base)?;
        let record = S::item(&base).to_record();
        debug!(section = S::NAME, "object page loaded");
        Ok(Self {
            editor: ObjectInput::new(schema, record),
            base,
            _section: PhantomData,
        })
    }

    /// Fetch again; the editor buffer is replaced outright.
    pub async fn reload(&mut self, store: &dyn ConfigStore) -> ConfigResult<()> {
        let base = store.fetch().await?.unwrap_or_default();
        self.editor.replace(S::item(&base).to_record());
        self.base = base;
        debug!(section = S::NAME, "object page reloaded");
        Ok(())
    }

    pub fn editor(&self) -> &ObjectInput {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ObjectInput {
        &mut self.editor
    }

    pub fn base(&self) -> &RelayConfig {
        &self.base
    }

    pub fn item(&self) -> S {
        S::from_record(self.editor.record())
    }

    pub async fn save(&mut self, store: &dyn ConfigStore) -> ConfigResult<()> {
        let mut next = self.base.clone();
        S::store_item(&mut next, self.item());
        store.update(&next).await?;
        self.base = next;
        info!(section = S::NAME, "section saved");
        Ok(())
    }
}
