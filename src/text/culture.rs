use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A culture code such as `"en"` or `"en-US"`.
///
/// Only the shape of the code is checked. Underscores are accepted as
/// separators and normalized to `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Culture {
    name: String,
    language_len: usize,
}

impl Culture {
    pub fn new(code: &str) -> Result<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Err(Error::invalid_argument("culture", "culture code is empty"));
        }

        let name = code.replace('_', "-");
        let language_len = name.find('-').unwrap_or(name.len());
        if language_len == 0 || name.ends_with('-') {
            return Err(Error::invalid_argument(
                "culture",
                format!("malformed culture code '{code}'"),
            ));
        }

        Ok(Self { name, language_len })
    }

    /// The full code, e.g. `"en-US"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The language part, e.g. `"en"`.
    pub fn language(&self) -> &str {
        &self.name[..self.language_len]
    }

    /// The part after the language, e.g. `"US"`.
    pub fn region(&self) -> Option<&str> {
        self.name.get(self.language_len + 1..)
    }

    /// The language-only parent culture, `None` for a language-only culture.
    pub fn parent(&self) -> Option<Culture> {
        self.region().map(|_| Culture {
            name: self.language().to_string(),
            language_len: self.language_len,
        })
    }
}

impl FromStr for Culture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Culture::new(s)
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
