//! # snag
//!
//! Recoverable failures as ordinary return values.
//!
//! Application code that wants strongly distinguishable failures without
//! unstructured panic propagation gets four collaborating pieces:
//!
//! - **Failure values** ([`Failure`]): a tag - the process-wide [`MARKER`]
//!   or a caller-chosen key - plus an optional context payload
//! - **Recognition** ([`FailureCheck`]): one predicate surface that
//!   classifies any result and filters by tag
//! - **Adapters** ([`run`], [`run_future`] and the `_catch` variants):
//!   execute a possibly-panicking, possibly-asynchronous operation and
//!   guarantee the outcome is a success value or a failure value
//! - **Wrapping** ([`wrap`], [`wrap_catch`]): produce a reusable callable
//!   with the same arguments that never lets a panic escape
//!
//! ## Usage
//!
//! ```rust
//! use snag::{run_catch, Failure, FailureCheck};
//!
//! fn parse_config(raw: &str) -> u32 {
//!     raw.parse().unwrap_or_else(|_| panic!("unparseable config: {raw}"))
//! }
//!
//! let result = run_catch(
//!     || parse_config("not valid"),
//!     |payload| Failure::new("config_invalid").with_payload(payload),
//! );
//!
//! if let Some(failure) = result.failure_tagged("config_invalid") {
//!     eprintln!("rejected: {}", failure);
//! }
//! # assert!(result.is_tagged("config_invalid"));
//! # assert_eq!(
//! #     result.failure().unwrap().ctx_message().as_deref(),
//! #     Some("unparseable config: not valid"),
//! # );
//! ```
//!
//! What a caller does with a recognized failure - retry, log, surface - is
//! entirely up to them; only the representation and recognition live here.

mod run;
mod wrap;

// Re-export the core value contract so consumers depend on one crate.
pub use snag_core::{Failure, FailureCheck, PanicPayload, Result, Tag, MARKER};

pub use run::{run, run_catch, run_future, run_future_catch};
pub use wrap::{wrap, wrap_catch, Operation};
