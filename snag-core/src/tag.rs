//! Failure tags - the discriminant carried by every failure value

use std::fmt;

/// Process-wide identity of the default (untagged) failure discriminant.
///
/// The namespaced form keeps it from colliding with any key a caller would
/// plausibly choose for their own failures. Filtering by `MARKER` matches
/// exactly the untagged failures; its textual value is stable within a
/// version so failure values produced by one component stay recognizable by
/// another in the same process.
pub const MARKER: &str = "snag::untagged";

/// The discriminant identifying which kind of failure a value represents.
///
/// The key space is {`Marker`} ∪ {caller-chosen strings}. Using a sum type
/// rather than a bare string means a legitimate success value can never be
/// mistaken for a failure: recognition is a discriminant check, not a
/// structural guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The default discriminant for failures constructed without a key
    Marker,
    /// A caller-chosen key discriminating this failure from others
    Key(String),
}

impl Tag {
    /// Create a tag from a caller-supplied key.
    ///
    /// An empty key and the literal [`MARKER`] both normalize to
    /// [`Tag::Marker`], so "no key" cannot be spelled two different ways.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        if key.is_empty() || key == MARKER {
            Tag::Marker
        } else {
            Tag::Key(key)
        }
    }

    /// The textual form of this tag; [`MARKER`] for untagged failures
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Marker => MARKER,
            Tag::Key(key) => key,
        }
    }

    /// Is this the default (untagged) discriminant?
    pub fn is_marker(&self) -> bool {
        matches!(self, Tag::Marker)
    }

    /// Exact equality against a filter key.
    ///
    /// `matches(MARKER)` is true only for the default discriminant, and a
    /// keyed tag matches only its own key.
    pub fn matches(&self, key: &str) -> bool {
        self.as_str() == key
    }
}

impl From<&str> for Tag {
    fn from(key: &str) -> Self {
        Tag::new(key)
    }
}

impl From<String> for Tag {
    fn from(key: String) -> Self {
        Tag::new(key)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
