//! Name-unique, change-notifying sets of items.
//!
//! [`ItemCollection`] is not synchronized. Callers that share one across
//! threads must serialize mutation themselves.

mod builder;

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::debug;

pub use builder::CollectionBuilder;

use crate::error::{Error, Result};
use crate::item::Item;

/// What a change notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionAction {
    Add,
    Remove,
}

/// A change published after a successful mutation.
#[derive(Debug, Clone, Copy)]
pub enum CollectionEvent<'a> {
    Added(&'a [&'a Item]),
    Removed(&'a Item),
}

impl CollectionEvent<'_> {
    /// Whether this reports an add or a removal.
    pub fn action(&self) -> CollectionAction {
        match self {
            CollectionEvent::Added(_) => CollectionAction::Add,
            CollectionEvent::Removed(_) => CollectionAction::Remove,
        }
    }

    /// Names of the affected items.
    pub fn names(&self) -> Vec<&str> {
        match self {
            CollectionEvent::Added(items) => items.iter().map(|item| item.name()).collect(),
            CollectionEvent::Removed(item) => vec![item.name()],
        }
    }
}

/// Handle returned by [`ItemCollection::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&CollectionEvent<'_>) + Send>;

/// A set of items keyed by name.
///
/// Adding a name that is already present fails with
/// [`Error::DuplicateName`] and leaves the collection untouched. Batch adds
/// are all-or-nothing.
///
/// Observers registered with [`subscribe`](Self::subscribe) are called
/// synchronously after every successful mutation. Late subscribers do not
/// see earlier changes.
///
/// ```
/// use dragon_meta::{Fact, Item, ItemCollection, TypeDescriptor};
///
/// let mut items = ItemCollection::new();
/// items.add(Item::new("Port", [Fact::from(TypeDescriptor::<u16>::from_str_parser())])?)?;
///
/// assert!(items.add(Item::new("Port", [])?).is_err());
/// assert_eq!(items.len(), 1);
/// # Ok::<(), dragon_meta::Error>(())
/// ```
#[derive(Default)]
pub struct ItemCollection {
    items: HashMap<String, Item>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl ItemCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection seeded with `items`.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self> {
        let mut collection = Self::new();
        collection.add_range(items)?;
        Ok(collection)
    }

    /// Creates a builder reading items from sources.
    pub fn builder() -> CollectionBuilder {
        CollectionBuilder::default()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an item with exactly this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Looks up an item by name.
    pub fn get(&self, name: &str) -> Result<&Item> {
        self.find(name)
            .ok_or_else(|| Error::KeyNotFound(name.to_string()))
    }

    /// Looks up an item by name, `None` if absent.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Mutable access for appending facts. Not reported to observers.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Item> {
        self.items
            .get_mut(name)
            .ok_or_else(|| Error::KeyNotFound(name.to_string()))
    }

    /// Iterates the items in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Iterates the item names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Adds one item. Fails if its name is already present.
    pub fn add(&mut self, item: Item) -> Result<()> {
        self.add_range([item])
    }

    /// Adds every item, or none of them.
    ///
    /// Fails if any name is already present or appears twice in `items`.
    pub fn add_range(&mut self, items: impl IntoIterator<Item = Item>) -> Result<()> {
        let items: Vec<Item> = items.into_iter().collect();

        let mut seen = HashSet::new();
        let mut conflicts: Vec<String> = Vec::new();
        for item in &items {
            let name = item.name();
            let duplicate = self.items.contains_key(name) || !seen.insert(name);
            if duplicate && !conflicts.iter().any(|c| c == name) {
                conflicts.push(name.to_string());
            }
        }
        if !conflicts.is_empty() {
            debug!(names = ?conflicts, "rejected items with duplicate names");
            return Err(Error::DuplicateName { names: conflicts });
        }
        if items.is_empty() {
            return Ok(());
        }

        let names: Vec<String> = items.iter().map(|item| item.name().to_string()).collect();
        for item in items {
            self.items.insert(item.name().to_string(), item);
        }
        debug!(?names, total = self.items.len(), "added items");

        let added: Vec<&Item> = names.iter().filter_map(|name| self.items.get(name)).collect();
        let event = CollectionEvent::Added(&added);
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
        Ok(())
    }

    /// Removes an item by name. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.take(name).is_some()
    }

    /// Removes and returns an item by name.
    pub fn take(&mut self, name: &str) -> Option<Item> {
        let item = self.items.remove(name)?;
        debug!(name, total = self.items.len(), "removed item");

        let event = CollectionEvent::Removed(&item);
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
        Some(item)
    }

    /// Names among `candidates` that already exist in the collection.
    ///
    /// Read-only; use it to validate a merge before committing it.
    pub fn check_for_duplicates<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a Item>,
    ) -> Vec<&'a str> {
        candidates
            .into_iter()
            .map(Item::name)
            .filter(|name| self.items.contains_key(*name))
            .collect()
    }

    /// Registers an observer for subsequent changes.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CollectionEvent<'_>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Detaches an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }
}

impl fmt::Debug for ItemCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemCollection")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a Item;
    type IntoIter = std::collections::hash_map::Values<'a, String, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}
