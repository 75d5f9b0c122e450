//! The Failure value

use crate::tag::Tag;
use std::any::Any;
use std::fmt;

/// Type-erased payload carried out of a panicking operation.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// A recoverable failure represented as an ordinary value.
///
/// A failure carries exactly two things:
/// - `tag`: which kind of failure this is - the default [`Tag::Marker`] or a
///   caller-chosen key
/// - `ctx`: an optional, arbitrary context payload - diagnostic data, a
///   source error, or the payload of a captured panic
///
/// Failures are immutable once constructed; the builder methods consume and
/// return by value. There is no `PartialEq`: the context is type-erased, so
/// the comparison idiom is the tag plus a [`ctx_ref`](Failure::ctx_ref)
/// downcast.
///
/// # Example
///
/// ```rust
/// use snag_core::Failure;
///
/// let failure = Failure::new("not_found").with_ctx("page 'intro' missing");
///
/// assert!(failure.is_tagged("not_found"));
/// assert_eq!(failure.ctx_ref::<&str>(), Some(&"page 'intro' missing"));
/// ```
pub struct Failure {
    tag: Tag,
    ctx: Option<Box<dyn Any + Send>>,
}

impl Failure {
    /// Create a failure with the default tag and no context
    pub fn untagged() -> Self {
        Failure {
            tag: Tag::Marker,
            ctx: None,
        }
    }

    /// Create a failure discriminated by the given key.
    ///
    /// An empty key normalizes to the default tag, see [`Tag::new`].
    pub fn new(key: impl Into<Tag>) -> Self {
        Failure {
            tag: key.into(),
            ctx: None,
        }
    }

    /// Create an untagged failure whose context is a captured panic payload.
    pub fn from_panic(payload: PanicPayload) -> Self {
        Failure::untagged().with_payload(payload)
    }

    // =========================================================================
    // Builders (chainable)
    // =========================================================================

    /// Attach a context payload.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if a context was already attached.
    pub fn with_ctx(mut self, ctx: impl Any + Send) -> Self {
        debug_assert!(self.ctx.is_none(), "context already set");
        self.ctx = Some(Box::new(ctx));
        self
    }

    /// Attach a captured panic payload as the context.
    ///
    /// The payload box is stored as-is, so a later
    /// [`ctx_ref`](Failure::ctx_ref) downcast sees the originally panicked
    /// type rather than a re-boxed wrapper. This is the builder for custom
    /// catchers: `|payload| Failure::new("io").with_payload(payload)`.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if a context was already attached.
    pub fn with_payload(mut self, payload: PanicPayload) -> Self {
        debug_assert!(self.ctx.is_none(), "context already set");
        self.ctx = Some(payload);
        self
    }

    /// Attach a source error as the context payload.
    ///
    /// Wraps the error through [`anyhow::Error`] so foreign error types do
    /// not leak into the failure's surface; [`source_ref`](Failure::source_ref)
    /// and [`std::error::Error::source`] recover it.
    pub fn with_source(self, source: impl Into<anyhow::Error>) -> Self {
        self.with_ctx(source.into())
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the tag discriminating this failure
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// The textual form of the tag; [`MARKER`](crate::MARKER) when untagged
    pub fn tag_str(&self) -> &str {
        self.tag.as_str()
    }

    /// Does this failure carry the default tag?
    pub fn is_untagged(&self) -> bool {
        self.tag.is_marker()
    }

    /// Exact tag comparison against a filter key.
    ///
    /// A keyed failure matches only its own key; an untagged failure matches
    /// only [`MARKER`](crate::MARKER).
    pub fn is_tagged(&self, key: &str) -> bool {
        self.tag.matches(key)
    }

    /// Was a context payload attached?
    pub fn has_ctx(&self) -> bool {
        self.ctx.is_some()
    }

    /// Downcast the context payload to a concrete type
    pub fn ctx_ref<T: Any>(&self) -> Option<&T> {
        self.ctx.as_ref()?.downcast_ref::<T>()
    }

    /// Best-effort textual rendering of the context payload.
    ///
    /// Covers the payloads this system itself produces: panic messages
    /// (`&str` or `String`) and source errors ([`anyhow::Error`]). Anything
    /// else is opaque and yields `None`.
    pub fn ctx_message(&self) -> Option<String> {
        let ctx = self.ctx.as_ref()?;
        if let Some(s) = ctx.downcast_ref::<&str>() {
            return Some((*s).to_string());
        }
        if let Some(s) = ctx.downcast_ref::<String>() {
            return Some(s.clone());
        }
        if let Some(e) = ctx.downcast_ref::<anyhow::Error>() {
            return Some(e.to_string());
        }
        None
    }

    /// Get the source error, if the context holds one
    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.ctx_ref::<anyhow::Error>()
    }
}

// =============================================================================
// Display - compact, single-line format for logs
// =============================================================================

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failure({})", self.tag)?;

        if let Some(message) = self.ctx_message() {
            write!(f, ": {}", message)?;
        } else if self.has_ctx() {
            write!(f, ": <opaque context>")?;
        }

        Ok(())
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "failure({})", self.tag)?;
        writeln!(f, "    Tag: {:?}", self.tag)?;

        match (self.ctx_message(), self.has_ctx()) {
            (Some(message), _) => writeln!(f, "    Context: {}", message)?,
            (None, true) => writeln!(f, "    Context: <opaque>")?,
            (None, false) => writeln!(f, "    Context: <none>")?,
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

// =============================================================================
// Convenient From implementations
// =============================================================================

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Failure::untagged().with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::MARKER;

    #[test]
    fn test_untagged_round_trip() {
        let failure = Failure::untagged();
        assert!(failure.is_untagged());
        assert_eq!(failure.tag_str(), MARKER);
        assert!(!failure.has_ctx());
    }

    #[test]
    fn test_keyed_round_trip() {
        let failure = Failure::new("timeout").with_ctx(30u64);
        assert!(failure.is_tagged("timeout"));
        assert!(!failure.is_tagged("parse"));
        assert!(!failure.is_tagged(MARKER));
        assert_eq!(failure.ctx_ref::<u64>(), Some(&30));
    }

    #[test]
    fn test_marker_filtering() {
        assert!(Failure::untagged().is_tagged(MARKER));
        assert!(!Failure::new("timeout").is_tagged(MARKER));
    }

    #[test]
    fn test_empty_key_collapses() {
        assert!(Failure::new("").is_untagged());
        assert!(Failure::new(MARKER).is_untagged());
    }

    #[test]
    fn test_ctx_downcast_misses_other_types() {
        let failure = Failure::new("parse").with_ctx("unexpected token".to_string());
        assert_eq!(failure.ctx_ref::<u32>(), None);
        assert_eq!(
            failure.ctx_ref::<String>(),
            Some(&"unexpected token".to_string())
        );
    }

    #[test]
    fn test_json_ctx_payload() {
        let diag = serde_json::json!({ "attempt": 3, "host": "db-1" });
        let failure = Failure::new("db_unreachable").with_ctx(diag.clone());
        assert_eq!(failure.ctx_ref::<serde_json::Value>(), Some(&diag));
    }

    #[test]
    fn test_from_panic_keeps_payload_type() {
        let payload: PanicPayload = Box::new("boom");
        let failure = Failure::from_panic(payload);
        assert!(failure.is_untagged());
        assert_eq!(failure.ctx_ref::<&str>(), Some(&"boom"));
        assert_eq!(failure.ctx_message().as_deref(), Some("boom"));
    }

    #[test]
    fn test_with_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.json not found");
        let failure = Failure::new("config_missing").with_source(io_err);

        assert!(failure.source_ref().is_some());
        assert!(failure.source().is_some());
        assert_eq!(
            failure.ctx_message().as_deref(),
            Some("config.json not found")
        );
    }

    #[test]
    fn test_from_anyhow() {
        let failure = Failure::from(anyhow::anyhow!("backend unavailable"));
        assert!(failure.is_untagged());
        assert_eq!(failure.ctx_message().as_deref(), Some("backend unavailable"));
    }

    #[test]
    fn test_display() {
        let failure = Failure::new("timeout").with_ctx("deadline of 30s exceeded");
        assert_eq!(
            failure.to_string(),
            "failure(timeout): deadline of 30s exceeded"
        );

        let opaque = Failure::new("timeout").with_ctx(30u64);
        assert_eq!(opaque.to_string(), "failure(timeout): <opaque context>");

        assert_eq!(Failure::untagged().to_string(), format!("failure({})", MARKER));
    }

    #[test]
    fn test_debug_format() {
        let debug = format!("{:?}", Failure::new("parse").with_ctx("bad input"));
        assert!(debug.contains("failure(parse)"));
        assert!(debug.contains("Context: bad input"));
    }
}
