//! Declared value types with optional parser and default.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use super::DeclaredType;

type BoxError = Box<dyn StdError + Send + Sync>;
type Parser<T> = Box<dyn Fn(&str) -> Result<T, ParseError> + Send + Sync>;

/// Why a text could not be turned into a value.
///
/// Produced by [`TypeDescriptor::parse`]. It never escapes
/// [`TypeDescriptor::try_parse`] or the item-level query layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("no parser declared for this type")]
    NoParser,

    #[error("invalid value '{text}': {source}")]
    Invalid { text: String, source: BoxError },

    #[error("parser panicked on '{0}'")]
    Panicked(String),
}

/// Type-erased view of a [`TypeDescriptor`].
///
/// Lets generic tooling enumerate declared types and defaults without
/// naming `T`.
pub trait TypeFact: fmt::Debug + Send + Sync {
    fn declared_type(&self) -> DeclaredType;

    fn has_parser(&self) -> bool;

    fn has_default(&self) -> bool;

    /// Human-readable rendering of the default, `None` when there is none.
    fn default_as_text(&self) -> Option<String>;

    /// Whether `text` parses successfully. Never fails.
    fn accepts(&self, text: &str) -> bool;

    fn as_any(&self) -> &dyn Any;
}

/// Declares that an item holds values of type `T`.
///
/// The parser and the default are independent: a descriptor may carry
/// either, both, or neither. A default is always an already-constructed
/// value.
///
/// ```
/// use dragon_meta::TypeDescriptor;
///
/// let port = TypeDescriptor::<u16>::from_str_parser().with_default(8080);
/// assert_eq!(port.try_parse("443"), Some(443));
/// assert_eq!(port.try_parse("http"), None);
/// assert_eq!(port.default_as_text().as_deref(), Some("8080"));
/// ```
pub struct TypeDescriptor<T> {
    parser: Option<Parser<T>>,
    default: Option<T>,
    render: fn(&T) -> String,
}

impl<T> TypeDescriptor<T>
where
    T: fmt::Debug + Send + Sync + 'static,
{
    /// A descriptor with neither parser nor default.
    pub fn new() -> Self {
        Self {
            parser: None,
            default: None,
            render: |value| format!("{value:?}"),
        }
    }
}

impl<T: 'static> TypeDescriptor<T> {
    /// Sets the parse function. Errors of any type are accepted and wrapped.
    pub fn with_parser<F, E>(mut self, parse: F) -> Self
    where
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.parser = Some(Box::new(move |text| {
            parse(text).map_err(|e| ParseError::Invalid {
                text: text.to_string(),
                source: e.into(),
            })
        }));
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Overrides how [`default_as_text`](Self::default_as_text) renders the value.
    pub fn rendered_with(mut self, render: fn(&T) -> String) -> Self {
        self.render = render;
        self
    }

    /// Runtime identity of `T`.
    pub fn declared_type(&self) -> DeclaredType {
        DeclaredType::of::<T>()
    }

    /// Whether a parse function is set.
    pub fn has_parser(&self) -> bool {
        self.parser.is_some()
    }

    /// Whether a default is set.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The default, if set.
    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// Human-readable rendering of the default.
    pub fn default_as_text(&self) -> Option<String> {
        self.default.as_ref().map(self.render)
    }

    /// Runs the parser, trapping both returned errors and panics.
    ///
    /// A panicking parser is still a bug in the parser: the panic hook runs
    /// as usual (printing to stderr by default) before the panic is turned
    /// into [`ParseError::Panicked`]. Parsers should return `Err` instead.
    pub fn parse(&self, text: &str) -> Result<T, ParseError> {
        let parser = self.parser.as_ref().ok_or(ParseError::NoParser)?;
        match panic::catch_unwind(AssertUnwindSafe(|| parser(text))) {
            Ok(result) => result,
            Err(_) => {
                warn!(ty = std::any::type_name::<T>(), %text, "parser panicked");
                Err(ParseError::Panicked(text.to_string()))
            }
        }
    }

    /// Parses `text`, or `None` when there is no parser or parsing fails.
    pub fn try_parse(&self, text: &str) -> Option<T> {
        self.parse(text).ok()
    }
}

impl<T> TypeDescriptor<T>
where
    T: FromStr + fmt::Display + fmt::Debug + Send + Sync + 'static,
    T::Err: Into<BoxError>,
{
    /// A descriptor parsing with [`str::parse`] and rendering with `Display`.
    pub fn from_str_parser() -> Self {
        Self::new()
            .with_parser(str::parse::<T>)
            .rendered_with(|value| value.to_string())
    }
}

impl<T> Default for TypeDescriptor<T>
where
    T: fmt::Debug + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type", &std::any::type_name::<T>())
            .field("has_parser", &self.parser.is_some())
            .field("default", &self.default)
            .finish()
    }
}

impl<T> TypeFact for TypeDescriptor<T>
where
    T: fmt::Debug + Send + Sync + 'static,
{
    fn declared_type(&self) -> DeclaredType {
        TypeDescriptor::declared_type(self)
    }

    fn has_parser(&self) -> bool {
        TypeDescriptor::has_parser(self)
    }

    fn has_default(&self) -> bool {
        TypeDescriptor::has_default(self)
    }

    fn default_as_text(&self) -> Option<String> {
        TypeDescriptor::default_as_text(self)
    }

    fn accepts(&self, text: &str) -> bool {
        self.parse(text).is_ok()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
