//! Recognition and narrowing of failure results

use crate::failure::Failure;

/// Recognition surface over `Result<T, Failure>`.
///
/// One trait serves both halves of failure handling: generic detection
/// ([`is_failure`](FailureCheck::is_failure)) and discriminated,
/// one-key-at-a-time handling ([`is_tagged`](FailureCheck::is_tagged) and
/// the narrowing [`failure_tagged`](FailureCheck::failure_tagged)). Chaining
/// calls with different keys mirrors a switch over a closed tag set, without
/// a hierarchy of failure subtypes.
///
/// All methods are total and side-effect-free.
///
/// # Example
///
/// ```rust
/// use snag_core::{Failure, FailureCheck, Result};
///
/// fn fetch(id: u32) -> Result<&'static str> {
///     match id {
///         0 => Err(Failure::new("not_found").with_ctx(id)),
///         1 => Err(Failure::new("forbidden")),
///         _ => Ok("payload"),
///     }
/// }
///
/// let result = fetch(0);
/// if let Some(failure) = result.failure_tagged("not_found") {
///     assert_eq!(failure.ctx_ref::<u32>(), Some(&0));
/// } else if result.is_tagged("forbidden") {
///     unreachable!("id 0 is missing, not forbidden");
/// }
/// ```
pub trait FailureCheck {
    /// Classification: is this result a failure value at all?
    fn is_failure(&self) -> bool;

    /// Filtering: is this a failure carrying exactly the given tag?
    ///
    /// False for successes and for failures with any other tag, including
    /// an untagged failure when `key` is not the marker.
    fn is_tagged(&self, key: &str) -> bool;

    /// Narrow to the failure value, regardless of tag
    fn failure(&self) -> Option<&Failure>;

    /// Narrow to the failure value only when its tag matches `key` exactly
    fn failure_tagged(&self, key: &str) -> Option<&Failure>;
}

impl<T> FailureCheck for Result<T, Failure> {
    fn is_failure(&self) -> bool {
        self.is_err()
    }

    fn is_tagged(&self, key: &str) -> bool {
        matches!(self, Err(failure) if failure.is_tagged(key))
    }

    fn failure(&self) -> Option<&Failure> {
        self.as_ref().err()
    }

    fn failure_tagged(&self, key: &str) -> Option<&Failure> {
        self.failure().filter(|failure| failure.is_tagged(key))
    }
}
