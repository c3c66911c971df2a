/// A named boolean marker.
///
/// Flags compare by name, ignoring case.
#[derive(Debug, Clone)]
pub struct Flag {
    name: String,
}

impl Flag {
    /// Creates a flag with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `name` equals this flag's name, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }
}

impl PartialEq for Flag {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.name)
    }
}

impl Eq for Flag {}

/// Unicode case-insensitive comparison, independent of locale.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
