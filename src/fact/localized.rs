use std::sync::Arc;

use crate::error::Result;
use crate::text::LocalizedText;

/// A labelled piece of localized text attached to an item.
///
/// The text itself is optional; resolving a fact without one yields `None`.
#[derive(Debug, Clone)]
pub struct LocalizedTextFact {
    label: String,
    text: Option<Arc<dyn LocalizedText>>,
}

impl LocalizedTextFact {
    /// Creates a fact; `text` may be absent.
    pub fn new(label: impl Into<String>, text: Option<Arc<dyn LocalizedText>>) -> Self {
        Self {
            label: label.into(),
            text,
        }
    }

    /// What piece of text this is.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The underlying text, if any.
    pub fn text(&self) -> Option<&Arc<dyn LocalizedText>> {
        self.text.as_ref()
    }

    /// Resolves the text for a language code.
    pub fn text_for(&self, language: &str) -> Result<Option<String>> {
        self.text
            .as_ref()
            .map(|text| text.text_for(language))
            .transpose()
    }
}
