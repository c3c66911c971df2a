use std::sync::Arc;

use tracing::debug;

use super::{LocalizedText, StringStore};
use crate::error::Result;

/// Localized text resolved on demand from a [`StringStore`].
///
/// Any lookup failure resolves to an empty string.
#[derive(Debug, Clone)]
pub struct ResourceText {
    label: String,
    key: String,
    store: Arc<dyn StringStore>,
}

impl ResourceText {
    /// Creates a text resolving `key` in `store`.
    pub fn new(label: impl Into<String>, key: impl Into<String>, store: Arc<dyn StringStore>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            store,
        }
    }

    /// The resource key looked up in the store.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl LocalizedText for ResourceText {
    fn label(&self) -> &str {
        &self.label
    }

    fn text_for(&self, language: &str) -> Result<String> {
        Ok(self.store.lookup(language, &self.key).unwrap_or_else(|e| {
            debug!(key = %self.key, %language, %e, "resource lookup failed");
            String::new()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{Culture, StoreError, TomlStringStore};

    #[derive(Debug)]
    struct Unavailable;

    impl StringStore for Unavailable {
        fn lookup(&self, _culture: &str, _key: &str) -> std::result::Result<String, StoreError> {
            Err(StoreError::FileNotFound("strings.toml".into()))
        }
    }

    fn store() -> Arc<dyn StringStore> {
        Arc::new(
            TomlStringStore::from_toml_str(
                r#"
                PortDescription = "Port to listen on"
                [de]
                PortDescription = "Anschluss"
                "#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_resolves_through_store() {
        let text = ResourceText::new("Description", "PortDescription", store());
        assert_eq!(text.label(), "Description");
        assert_eq!(text.text_for("de").unwrap(), "Anschluss");
        let de_at = Culture::new("de-AT").unwrap();
        assert_eq!(text.text_for_culture(&de_at).unwrap(), "Anschluss");
        assert_eq!(text.text_for("it").unwrap(), "Port to listen on");
    }

    #[test]
    fn test_failures_become_empty() {
        let missing = ResourceText::new("Description", "NoSuchKey", store());
        assert_eq!(missing.text_for("de").unwrap(), "");
        assert_eq!(missing.text_for("").unwrap(), "");

        let unavailable = ResourceText::new("Description", "PortDescription", Arc::new(Unavailable));
        assert_eq!(unavailable.text_for("en").unwrap(), "");
    }
}
