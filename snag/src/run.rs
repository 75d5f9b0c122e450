//! Adapters that convert panicking operations into failure values.
//!
//! `run` and `run_catch` execute a synchronous operation; `run_future` and
//! `run_future_catch` execute an asynchronous one. In every case abnormal
//! termination is captured at the adapter boundary and comes back as an
//! `Err(Failure)` - a panic never propagates past an adapter. (Builds with
//! `panic = "abort"` terminate before anything is catchable; that is outside
//! any adapter's contract.)
//!
//! Operations execute behind [`AssertUnwindSafe`]; whatever state the
//! operation left half-updated when it panicked is the caller's concern.

use futures_util::FutureExt;
use snag_core::{Failure, PanicPayload, Result};
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Invoke `op`, converting a panic into an untagged failure whose context is
/// the panic payload.
///
/// A normal completion is returned unchanged.
///
/// # Example
///
/// ```rust
/// use snag::{run, FailureCheck};
///
/// let ok = run(|| "success");
/// assert_eq!(ok.unwrap(), "success");
///
/// let failed: snag::Result<()> = run(|| panic!("worker died"));
/// assert!(failed.is_failure());
/// assert_eq!(
///     failed.failure().and_then(|f| f.ctx_message()).as_deref(),
///     Some("worker died"),
/// );
/// ```
pub fn run<T, F>(op: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    run_catch(op, Failure::from_panic)
}

/// Invoke `op`, handing the payload of a panic to `catcher`.
///
/// The catcher decides the failure's tag and context; the type signature
/// enforces that it produces a [`Failure`] and nothing else.
pub fn run_catch<T, F, C>(op: F, catcher: C) -> Result<T>
where
    F: FnOnce() -> T,
    C: FnOnce(PanicPayload) -> Failure,
{
    catch_unwind(AssertUnwindSafe(op)).map_err(catcher)
}

/// Invoke `op` to obtain a future, then await it, converting a panic at
/// either step into an untagged failure.
///
/// Taking a future-*producing* closure keeps parity with [`run`]: an
/// operation that panics before its future even exists is captured the same
/// way as one whose future panics mid-flight. There is no cancellation
/// support; timeouts belong to the caller's own future machinery.
///
/// # Example
///
/// ```rust
/// use snag::{run_future, FailureCheck};
///
/// # tokio_test::block_on(async {
/// let ok = run_future(|| async { 21 * 2 }).await;
/// assert_eq!(ok.unwrap(), 42);
///
/// let failed: snag::Result<()> = run_future(|| async { panic!("rejected") }).await;
/// assert!(failed.is_failure());
/// # });
/// ```
pub async fn run_future<T, Fut, F>(op: F) -> Result<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    run_future_catch(op, Failure::from_panic).await
}

/// Async analog of [`run_catch`]: a panic while constructing or awaiting the
/// future is handed to `catcher`.
pub async fn run_future_catch<T, Fut, F, C>(op: F, catcher: C) -> Result<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
    C: FnOnce(PanicPayload) -> Failure,
{
    match catch_unwind(AssertUnwindSafe(op)) {
        Ok(fut) => match AssertUnwindSafe(fut).catch_unwind().await {
            Ok(value) => Ok(value),
            Err(payload) => Err(catcher(payload)),
        },
        Err(payload) => Err(catcher(payload)),
    }
}
