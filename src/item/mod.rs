//! Configuration items: a name plus the facts attached to it.

mod query;

use crate::error::{Error, Result};
use crate::fact::Fact;

/// A named configuration key holding an ordered list of facts.
///
/// Facts keep their insertion order and are only ever appended.
#[derive(Debug)]
pub struct Item {
    name: String,
    facts: Vec<Fact>,
}

impl Item {
    /// Creates an item. Fails if `name` is empty or blank.
    pub fn new(name: impl Into<String>, facts: impl IntoIterator<Item = Fact>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("name", "item name is empty"));
        }
        Ok(Self {
            name,
            facts: facts.into_iter().collect(),
        })
    }

    /// The item's key, unique within its collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All facts, in insertion order.
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Appends a fact.
    pub fn add_fact(&mut self, fact: impl Into<Fact>) {
        self.facts.push(fact.into());
    }

    /// Appends a fact, builder style.
    #[must_use]
    pub fn with_fact(mut self, fact: impl Into<Fact>) -> Self {
        self.add_fact(fact);
        self
    }
}
