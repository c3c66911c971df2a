//! Self-describing configuration metadata.
//!
//! Declare configuration keys as [`Item`]s, attach typed [`Fact`]s to them
//! (declared type with parser and default, boolean [`Flag`]s, localized
//! descriptions) and let tooling query an [`ItemCollection`] without
//! per-key glue.
//!
//! ```
//! use std::sync::Arc;
//! use dragon_meta::{Fact, Item, ItemCollection, StaticText, TypeDescriptor, DESCRIPTION_LABEL};
//!
//! let description = StaticText::new(DESCRIPTION_LABEL, "Port to listen on")
//!     .with_translation("fr", "Port d'écoute")?;
//!
//! let port = Item::new(
//!     "Port",
//!     [
//!         Fact::from(TypeDescriptor::<u16>::from_str_parser().with_default(8080)),
//!         Fact::flag("Required"),
//!         Fact::localized(Arc::new(description)),
//!     ],
//! )?;
//!
//! let items = ItemCollection::from_items([port])?;
//! let port = items.get("Port")?;
//!
//! assert_eq!(port.parse_or_default::<u16>("443")?, 443);
//! assert_eq!(port.parse_or_default::<u16>("http")?, 8080);
//! assert!(port.has_flag("required"));
//! assert_eq!(port.description_for("fr")?.as_deref(), Some("Port d'écoute"));
//! # Ok::<(), dragon_meta::Error>(())
//! ```

pub mod collection;
mod error;
pub mod fact;
pub mod item;
pub mod source;
pub mod text;

pub use collection::{
    CollectionAction, CollectionBuilder, CollectionEvent, ItemCollection, SubscriptionId,
};
pub use error::{Error, Result};
pub use fact::{
    DeclaredType, Fact, Flag, LocalizedTextFact, ParseError, TypeDescriptor, TypeFact,
};
pub use item::Item;
pub use source::{ItemEntry, ItemSource, StaticSource};
pub use text::{
    Culture, LocalizedText, ResourceText, StaticText, StoreError, StringStore, TomlStringStore,
    DESCRIPTION_LABEL,
};
