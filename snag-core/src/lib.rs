//! # snag-core
//!
//! The value contract behind snag: recoverable failures as ordinary return
//! values, discriminated by a tag instead of a type hierarchy.
//!
//! ## Design Philosophy
//!
//! - **Tag**: know *which* failure occurred - the process-wide [`MARKER`]
//!   for untagged failures, or a caller-chosen key
//! - **Context**: an optional, arbitrary payload to assist in locating the
//!   cause - diagnostic data, a source error, or a captured panic payload
//! - **Recognition**: a single predicate surface ([`FailureCheck`]) that
//!   classifies and filters by tag, never by structural guessing
//!
//! ## Usage
//!
//! ```rust
//! use snag_core::{Failure, FailureCheck, Result};
//!
//! fn lookup(id: u32) -> Result<&'static str> {
//!     if id == 0 {
//!         return Err(Failure::new("not_found").with_ctx(id));
//!     }
//!     Ok("alice")
//! }
//!
//! let hit = lookup(7);
//! assert!(!hit.is_failure());
//!
//! let miss = lookup(0);
//! assert!(miss.is_tagged("not_found"));
//! assert_eq!(miss.failure().and_then(|f| f.ctx_ref::<u32>()), Some(&0));
//! ```
//!
//! ## Principles
//!
//! - Failures are plain values: constructing one never fails, has no side
//!   effects, and nothing is thrown
//! - External errors are absorbed with [`Failure::with_source`] so raw error
//!   types do not leak through the surface
//! - The returned failure is the only signal: no logging, no retry, no
//!   aggregation policy lives here

mod check;
mod failure;
mod tag;

pub use check::FailureCheck;
pub use failure::{Failure, PanicPayload};
pub use tag::{Tag, MARKER};

/// Result type alias pairing any success with a [`Failure`]
pub type Result<T> = std::result::Result<T, Failure>;
