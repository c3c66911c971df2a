//! Discovery of configuration keys.
//!
//! Where item declarations come from is up to the implementor of
//! [`ItemSource`]; the collection only needs flat `(name, facts)` entries.

use std::fmt;

use crate::error::Result;
use crate::fact::Fact;
use crate::item::Item;

/// A discovered configuration key and its facts.
#[derive(Debug)]
pub struct ItemEntry {
    pub name: String,
    pub facts: Vec<Fact>,
}

impl ItemEntry {
    /// Creates an entry.
    pub fn new(name: impl Into<String>, facts: impl IntoIterator<Item = Fact>) -> Self {
        Self {
            name: name.into(),
            facts: facts.into_iter().collect(),
        }
    }

    /// Converts into an [`Item`], validating the name.
    pub fn into_item(self) -> Result<Item> {
        Item::new(self.name, self.facts)
    }
}

/// Produces item entries for a [`CollectionBuilder`](crate::CollectionBuilder).
///
/// Facts are owned by the items they end up in, so a source hands its
/// entries over rather than lending them. After a successful call a source
/// may have nothing left to give.
pub trait ItemSource: Send + fmt::Debug {
    /// Hands over the discovered entries.
    fn entries(&mut self) -> Result<Vec<ItemEntry>>;
}

/// Items registered programmatically.
///
/// Registered entries are handed out once; a second call to
/// [`entries`](ItemSource::entries) yields nothing.
#[derive(Debug, Default)]
pub struct StaticSource {
    entries: Vec<ItemEntry>,
}

impl StaticSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item, builder style.
    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>, facts: impl IntoIterator<Item = Fact>) -> Self {
        self.register(name, facts);
        self
    }

    /// Registers an item.
    pub fn register(&mut self, name: impl Into<String>, facts: impl IntoIterator<Item = Fact>) {
        self.entries.push(ItemEntry::new(name, facts));
    }

    /// Number of entries not yet handed out.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ItemSource for StaticSource {
    fn entries(&mut self) -> Result<Vec<ItemEntry>> {
        Ok(std::mem::take(&mut self.entries))
    }
}
