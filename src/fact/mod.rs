//! Facts: typed, queryable units of metadata attached to an item.
//!
//! A [`Fact`] is one of three variants. Type descriptors are stored
//! type-erased behind [`TypeFact`] so that tooling can enumerate them
//! without knowing `T`; typed call sites recover the concrete
//! [`TypeDescriptor<T>`] through [`Fact::downcast`].

mod descriptor;
mod flag;
mod localized;

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub use descriptor::{ParseError, TypeDescriptor, TypeFact};
pub use flag::Flag;
pub use localized::LocalizedTextFact;

use crate::text::LocalizedText;

/// Runtime identity of a declared value type.
#[derive(Debug, Clone, Copy)]
pub struct DeclaredType {
    id: TypeId,
    name: &'static str,
}

impl DeclaredType {
    /// Identity of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The universal target type. Every declared type is assignable to it.
    pub fn any() -> Self {
        Self::of::<dyn Any>()
    }

    /// The underlying `TypeId`.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type name, e.g. `"i32"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Covariant check: true for the same type or for [`DeclaredType::any`].
    pub fn is_assignable_to(&self, target: DeclaredType) -> bool {
        *self == target || target == Self::any()
    }
}

impl PartialEq for DeclaredType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DeclaredType {}

impl Hash for DeclaredType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A unit of metadata owned by an [`Item`](crate::Item).
#[derive(Debug)]
pub enum Fact {
    Type(Box<dyn TypeFact>),
    Flag(Flag),
    Text(LocalizedTextFact),
}

impl Fact {
    /// A flag fact.
    pub fn flag(name: impl Into<String>) -> Self {
        Fact::Flag(Flag::new(name))
    }

    /// A localized-text fact with an explicit label.
    pub fn text(label: impl Into<String>, text: Option<Arc<dyn LocalizedText>>) -> Self {
        Fact::Text(LocalizedTextFact::new(label, text))
    }

    /// Wraps a localized text under its own label.
    pub fn localized(text: Arc<dyn LocalizedText>) -> Self {
        let label = text.label().to_string();
        Fact::Text(LocalizedTextFact::new(label, Some(text)))
    }

    /// The type-erased descriptor, if this is a type fact.
    pub fn as_type(&self) -> Option<&dyn TypeFact> {
        match self {
            Fact::Type(descriptor) => Some(descriptor.as_ref()),
            _ => None,
        }
    }

    /// The flag, if this is a flag fact.
    pub fn as_flag(&self) -> Option<&Flag> {
        match self {
            Fact::Flag(flag) => Some(flag),
            _ => None,
        }
    }

    /// The localized text, if this is a text fact.
    pub fn as_text(&self) -> Option<&LocalizedTextFact> {
        match self {
            Fact::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Checked downcast to the descriptor for exactly `T`.
    ///
    /// Returns `None` for non-type facts and for descriptors of any other type.
    pub fn downcast<T: 'static>(&self) -> Option<&TypeDescriptor<T>> {
        self.as_type()?.as_any().downcast_ref::<TypeDescriptor<T>>()
    }
}

impl<T> From<TypeDescriptor<T>> for Fact
where
    T: fmt::Debug + Send + Sync + 'static,
{
    fn from(descriptor: TypeDescriptor<T>) -> Self {
        Fact::Type(Box::new(descriptor))
    }
}

impl From<Flag> for Fact {
    fn from(flag: Flag) -> Self {
        Fact::Flag(flag)
    }
}

impl From<LocalizedTextFact> for Fact {
    fn from(text: LocalizedTextFact) -> Self {
        Fact::Text(text)
    }
}
