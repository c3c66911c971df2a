use tracing::debug;

use super::ItemCollection;
use crate::error::Result;
use crate::source::{ItemEntry, ItemSource};

/// Builder collecting items from one or more [`ItemSource`]s.
///
/// Sources are read in registration order and their items are committed
/// with a single all-or-nothing add, so a name declared by two sources
/// fails the whole build.
///
/// ## Example
///
/// ```
/// use dragon_meta::{Fact, ItemCollection, StaticSource, TypeDescriptor};
///
/// let items = ItemCollection::builder()
///     .with_source(
///         StaticSource::new()
///             .with_item("Port", [Fact::from(TypeDescriptor::<u16>::from_str_parser().with_default(8080))])
///             .with_item("Verbose", [Fact::flag("Switch")]),
///     )
///     .build()?;
///
/// assert_eq!(items.get("Port")?.default_value::<u16>()?, &8080);
/// # Ok::<(), dragon_meta::Error>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct CollectionBuilder {
    sources: Vec<Box<dyn ItemSource>>,
}

impl CollectionBuilder {
    /// Adds a source. Sources are read in registration order.
    pub fn with_source(mut self, source: impl ItemSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Adds a single entry without a dedicated source.
    pub fn with_entry(self, entry: ItemEntry) -> Self {
        self.with_source(Single(Some(entry)))
    }

    /// Reads every source and commits all items at once.
    pub fn build(self) -> Result<ItemCollection> {
        let mut items = Vec::new();
        for mut source in self.sources {
            let entries = source.entries()?;
            debug!(?source, count = entries.len(), "read item source");
            for entry in entries {
                items.push(entry.into_item()?);
            }
        }
        ItemCollection::from_items(items)
    }
}

#[derive(Debug)]
struct Single(Option<ItemEntry>);

impl ItemSource for Single {
    fn entries(&mut self) -> Result<Vec<ItemEntry>> {
        Ok(self.0.take().into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fact::Fact;
    use crate::source::StaticSource;

    #[derive(Debug)]
    struct Failing;

    impl ItemSource for Failing {
        fn entries(&mut self) -> Result<Vec<ItemEntry>> {
            Err(Error::KeyNotFound("registry".into()))
        }
    }

    #[test]
    fn test_merges_sources_in_order() {
        let items = ItemCollection::builder()
            .with_source(StaticSource::new().with_item("A", []))
            .with_source(StaticSource::new().with_item("B", [Fact::flag("Hidden")]))
            .with_entry(ItemEntry::new("C", []))
            .build()
            .unwrap();

        assert_eq!(items.len(), 3);
        assert!(items.get("B").unwrap().has_flag("hidden"));
    }

    #[test]
    fn test_duplicate_across_sources_fails() {
        let result = ItemCollection::builder()
            .with_source(StaticSource::new().with_item("A", []))
            .with_source(StaticSource::new().with_item("A", []))
            .build();

        assert!(matches!(result, Err(Error::DuplicateName { names }) if names == ["A"]));
    }

    #[test]
    fn test_invalid_entry_fails() {
        let result = ItemCollection::builder()
            .with_entry(ItemEntry::new(" ", []))
            .build();
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_source_error_propagates() {
        let result = ItemCollection::builder().with_source(Failing).build();
        assert!(matches!(result, Err(Error::KeyNotFound(_))));
    }

    #[test]
    fn test_single_entry_is_handed_out_once() {
        let mut single = Single(Some(ItemEntry::new("A", [])));
        assert_eq!(single.entries().unwrap().len(), 1);
        assert!(single.entries().unwrap().is_empty());
    }

    #[test]
    fn test_empty_builder() {
        assert!(ItemCollection::builder().build().unwrap().is_empty());
    }
}
