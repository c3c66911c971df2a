use std::collections::HashMap;

use super::LocalizedText;
use crate::error::{Error, Result};

/// Localized text held in memory: a default plus per-language translations.
#[derive(Debug, Clone)]
pub struct StaticText {
    label: String,
    default: String,
    translations: HashMap<String, String>,
}

impl StaticText {
    /// Creates a text with no translations.
    pub fn new(label: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default: default.into(),
            translations: HashMap::new(),
        }
    }

    /// Adds a translation. Fails if `language` is empty.
    pub fn with_translation(
        mut self,
        language: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self> {
        let language = language.into();
        if language.trim().is_empty() {
            return Err(Error::invalid_argument("language", "language code is empty"));
        }
        self.translations.insert(language, text.into());
        Ok(self)
    }

    /// Builds from a map of translations, validating every code.
    pub fn from_translations<I, K, V>(
        label: impl Into<String>,
        default: impl Into<String>,
        translations: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        translations
            .into_iter()
            .try_fold(Self::new(label, default), |text, (language, value)| {
                text.with_translation(language, value)
            })
    }

    /// The text returned for languages without a translation.
    pub fn default_text(&self) -> &str {
        &self.default
    }
}

impl LocalizedText for StaticText {
    fn label(&self) -> &str {
        &self.label
    }

    fn text_for(&self, language: &str) -> Result<String> {
        if language.trim().is_empty() {
            return Err(Error::invalid_argument("language", "language code is empty"));
        }
        Ok(self
            .translations
            .get(language)
            .unwrap_or(&self.default)
            .clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Culture;

    fn description() -> StaticText {
        StaticText::new("Description", "No description")
            .with_translation("fr", "Pas de description? Non!")
            .unwrap()
    }

    #[test]
    fn test_mapped_and_default() {
        let text = description();
        assert_eq!(text.label(), "Description");
        assert_eq!(text.text_for("fr").unwrap(), "Pas de description? Non!");
        assert_eq!(text.text_for("de").unwrap(), "No description");
    }

    #[test]
    fn test_culture_uses_full_name() {
        let text = description();
        let fr_ca = Culture::new("fr-CA").unwrap();
        assert_eq!(text.text_for_culture(&fr_ca).unwrap(), "No description");
    }

    #[test]
    fn test_empty_code_rejected() {
        assert!(matches!(
            description().text_for(""),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            StaticText::new("Description", "x").with_translation("", "y"),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_from_translations() {
        let text = StaticText::from_translations(
            "Description",
            "Port",
            [("de", "Anschluss"), ("es", "Puerto")],
        )
        .unwrap();
        assert_eq!(text.text_for("es").unwrap(), "Puerto");
        assert_eq!(text.default_text(), "Port");
    }
}
