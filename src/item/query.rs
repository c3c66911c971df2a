//! Typed questions answered over an item's facts.
//!
//! The `try_*` family reports absence or mismatch as `None`/`false`; the
//! remaining accessors fail with [`Error::TypeMismatch`] so call sites can
//! assert what they expect.
//!
//! When an item carries several type descriptors, the first one in
//! insertion order answers the untyped queries.

use super::Item;
use crate::error::{Error, Result};
use crate::fact::{DeclaredType, Fact, Flag, LocalizedTextFact, TypeDescriptor, TypeFact};
use crate::text::DESCRIPTION_LABEL;

impl Item {
    /// The first type descriptor, type-erased.
    pub fn type_fact(&self) -> Option<&dyn TypeFact> {
        self.facts().iter().find_map(Fact::as_type)
    }

    pub fn declared_type(&self) -> Option<DeclaredType> {
        self.type_fact().map(|fact| fact.declared_type())
    }

    /// Rendering of the first type descriptor's default.
    pub fn default_as_text(&self) -> Option<String> {
        self.type_fact()?.default_as_text()
    }

    /// The first descriptor for exactly `T`.
    pub fn descriptor<T: 'static>(&self) -> Option<&TypeDescriptor<T>> {
        self.facts().iter().find_map(Fact::downcast::<T>)
    }

    fn typed_default<T: 'static>(&self) -> Option<&T> {
        self.facts()
            .iter()
            .filter_map(Fact::downcast::<T>)
            .find_map(TypeDescriptor::default_value)
    }

    /// The default declared for `T`.
    pub fn default_value<T: 'static>(&self) -> Result<&T> {
        self.typed_default().ok_or_else(|| self.mismatch::<T>())
    }

    pub fn try_default_value<T: 'static>(&self) -> Option<&T> {
        self.typed_default()
    }

    /// Whether any type descriptor carries a default.
    pub fn has_default(&self) -> bool {
        self.facts()
            .iter()
            .filter_map(Fact::as_type)
            .any(|fact| fact.has_default())
    }

    pub fn has_default_of<T: 'static>(&self) -> bool {
        self.typed_default::<T>().is_some()
    }

    /// Whether the item declares exactly `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.descriptor::<T>().is_some()
    }

    /// Whether the declared type is assignable to `ty`.
    pub fn is_type(&self, ty: DeclaredType) -> bool {
        self.declared_type()
            .is_some_and(|declared| declared.is_assignable_to(ty))
    }

    pub fn try_parse<T: 'static>(&self, text: &str) -> Option<T> {
        self.descriptor::<T>()?.try_parse(text)
    }

    /// Parses `text`, falling back to the declared default, then to `T::default()`.
    pub fn parse_or_default<T>(&self, text: &str) -> Result<T>
    where
        T: Clone + Default + 'static,
    {
        self.try_parse_or_default(text)
            .ok_or_else(|| self.mismatch::<T>())
    }

    /// Like [`parse_or_default`](Self::parse_or_default); `None` only if the item is not `T`.
    pub fn try_parse_or_default<T>(&self, text: &str) -> Option<T>
    where
        T: Clone + Default + 'static,
    {
        let descriptor = self.descriptor::<T>()?;
        Some(
            descriptor
                .try_parse(text)
                .or_else(|| self.typed_default::<T>().cloned())
                .unwrap_or_default(),
        )
    }

    pub fn flags(&self) -> impl Iterator<Item = &Flag> {
        self.facts().iter().filter_map(Fact::as_flag)
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.try_get_flag(name).is_some()
    }

    /// Case-insensitive flag lookup.
    pub fn try_get_flag(&self, name: &str) -> Option<&Flag> {
        self.flags().find(|flag| flag.matches(name))
    }

    /// The first localized-text fact with the given label.
    pub fn text(&self, label: &str) -> Option<&LocalizedTextFact> {
        self.facts()
            .iter()
            .filter_map(Fact::as_text)
            .find(|fact| fact.label() == label)
    }

    pub fn description_info(&self) -> Option<&LocalizedTextFact> {
        self.text(DESCRIPTION_LABEL)
    }

    /// The description in `language`, `None` when the item has none.
    pub fn description_for(&self, language: &str) -> Result<Option<String>> {
        match self.description_info() {
            Some(fact) => fact.text_for(language),
            None => Ok(None),
        }
    }

    fn mismatch<T>(&self) -> Error {
        Error::TypeMismatch {
            item: self.name().to_string(),
            expected: std::any::type_name::<T>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::text::StaticText;

    fn port() -> Item {
        Item::new(
            "Port",
            [
                Fact::from(TypeDescriptor::<i32>::from_str_parser().with_default(8080)),
                Fact::flag("Verbose"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_declared_type_and_default() {
        let item = port();
        assert_eq!(item.declared_type(), Some(DeclaredType::of::<i32>()));
        assert_eq!(item.default_value::<i32>().unwrap(), &8080);
        assert_eq!(item.try_default_value::<i32>(), Some(&8080));
        assert_eq!(item.default_as_text().as_deref(), Some("8080"));
        assert!(item.has_default());
        assert!(item.has_default_of::<i32>());
        assert!(!item.has_default_of::<i64>());
    }

    #[test]
    fn test_default_of_wrong_type_is_mismatch() {
        let err = port().default_value::<i64>().unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { expected: "i64", .. }));
        assert_eq!(port().try_default_value::<i64>(), None);
    }

    #[test]
    fn test_descriptor_without_default() {
        let descriptor = TypeDescriptor::<String>::from_str_parser();
        let item = Item::new("Name", [Fact::from(descriptor)]).unwrap();
        assert!(item.is::<String>());
        assert!(!item.has_default());
        assert!(item.default_value::<String>().is_err());
        assert_eq!(item.parse_or_default::<String>("x").unwrap(), "x");
    }

    #[test]
    fn test_exact_and_covariant_type_checks() {
        let item = port();
        assert!(item.is::<i32>());
        assert!(!item.is::<i64>());
        assert!(item.is_type(DeclaredType::of::<i32>()));
        assert!(item.is_type(DeclaredType::any()));
        assert!(!item.is_type(DeclaredType::of::<i64>()));
    }

    #[test]
    fn test_untyped_item() {
        let item = Item::new("Loose", [Fact::flag("Hidden")]).unwrap();
        assert_eq!(item.declared_type(), None);
        assert!(!item.is_type(DeclaredType::any()));
        assert!(!item.has_default());
        assert_eq!(item.try_parse::<i32>("1"), None);
        assert_eq!(item.try_parse_or_default::<i32>("1"), None);
        assert!(matches!(
            item.parse_or_default::<i32>("1"),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_parse_cascade() {
        let item = port();
        assert_eq!(item.try_parse::<i32>("443"), Some(443));
        assert_eq!(item.try_parse::<i32>("not-a-number"), None);
        assert_eq!(item.parse_or_default::<i32>("443").unwrap(), 443);
        assert_eq!(item.parse_or_default::<i32>("not-a-number").unwrap(), 8080);
        assert_eq!(item.try_parse_or_default::<i64>("443"), None);
    }

    fn resolve<T: Clone + Default + 'static>(item: &Item, text: &str) -> (Option<T>, Option<T>) {
        (item.try_parse::<T>(text), item.try_parse_or_default::<T>(text))
    }

    #[test]
    fn test_queries_from_generic_caller() {
        let item = port();
        assert_eq!(resolve::<i32>(&item, "443"), (Some(443), Some(443)));
        assert_eq!(resolve::<i32>(&item, "nope"), (None, Some(8080)));
        assert_eq!(resolve::<i64>(&item, "443"), (None, None));
    }

    #[test]
    fn test_parse_falls_back_to_zero_value() {
        let descriptor = TypeDescriptor::<u8>::from_str_parser();
        let item = Item::new("Retries", [Fact::from(descriptor)]).unwrap();
        assert_eq!(item.parse_or_default::<u8>("many").unwrap(), 0);
        assert_eq!(item.try_parse_or_default::<u8>("3"), Some(3));
    }

    #[test]
    fn test_first_descriptor_wins() {
        let item = Item::new(
            "Ambiguous",
            [
                Fact::from(TypeDescriptor::<u16>::new().with_default(1)),
                Fact::from(TypeDescriptor::<String>::new().with_default("one".to_string())),
            ],
        )
        .unwrap();
        assert_eq!(item.declared_type(), Some(DeclaredType::of::<u16>()));
        assert_eq!(item.default_as_text().as_deref(), Some("1"));
        assert!(item.is::<String>());
        assert_eq!(item.default_value::<String>().unwrap(), "one");
    }

    #[test]
    fn test_flags_ignore_case() {
        let item = port();
        assert!(item.has_flag("Verbose"));
        assert!(item.has_flag("verbose"));
        assert!(item.has_flag("VERBOSE"));
        assert!(!item.has_flag("Quiet"));
        assert_eq!(item.try_get_flag("vErBoSe").map(Flag::name), Some("Verbose"));
        assert_eq!(item.flags().count(), 1);
    }

    #[test]
    fn test_description_lookup() {
        let text = StaticText::new(DESCRIPTION_LABEL, "Port to listen on")
            .with_translation("fr", "Port d'écoute")
            .unwrap();
        let item = port().with_fact(Fact::localized(Arc::new(text)));

        assert_eq!(item.description_info().map(|d| d.label()), Some(DESCRIPTION_LABEL));
        assert_eq!(
            item.description_for("fr").unwrap().as_deref(),
            Some("Port d'écoute")
        );
        assert_eq!(
            item.description_for("de").unwrap().as_deref(),
            Some("Port to listen on")
        );
    }

    #[test]
    fn test_missing_description_is_absent() {
        assert!(port().description_info().is_none());
        assert_eq!(port().description_for("en").unwrap(), None);

        let item = port().with_fact(Fact::text(DESCRIPTION_LABEL, None));
        assert!(item.description_info().is_some());
        assert_eq!(item.description_for("en").unwrap(), None);
    }

    #[test]
    fn test_other_labels_are_not_descriptions() {
        let hint = StaticText::new("Hint", "e.g. 8080");
        let item = port().with_fact(Fact::localized(Arc::new(hint)));
        assert!(item.description_info().is_none());
        assert_eq!(
            item.text("Hint").and_then(|t| t.text_for("en").unwrap()).as_deref(),
            Some("e.g. 8080")
        );
    }
}
