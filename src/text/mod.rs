//! Localized text resolution.
//!
//! A [`LocalizedText`] resolves a labelled piece of text for a language code.
//! [`StaticText`] keeps its translations in memory; [`ResourceText`] defers to
//! an external [`StringStore`] and never fails outward.

mod culture;
mod resource;
mod static_text;
mod store;

use std::fmt;

pub use culture::Culture;
pub use resource::ResourceText;
pub use static_text::StaticText;
pub use store::{StoreError, StringStore, TomlStringStore};

use crate::error::Result;

/// Label of the well-known description text.
pub const DESCRIPTION_LABEL: &str = "Description";

/// Resolves a labelled text for a language or culture code.
pub trait LocalizedText: fmt::Debug + Send + Sync {
    /// What piece of text this is, e.g. `"Description"`.
    fn label(&self) -> &str;

    fn text_for(&self, language: &str) -> Result<String>;

    fn text_for_culture(&self, culture: &Culture) -> Result<String> {
        self.text_for(culture.name())
    }
}
