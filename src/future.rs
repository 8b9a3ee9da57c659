//! Async integration - outcomes from deferred computations.
//!
//! A deferred computation settles exactly once, with either a fulfilled
//! value or a rejection. This module adapts that boundary into
//! [`Outcome`] values:
//!
//! - [`from_future`] awaits a `Future<Output = Result<T, X>>` and maps the
//!   typed rejection into the outcome's error; the rejection is always
//!   captured, never propagated past the returned future.
//! - [`wrap_future`] is the deferred arm of [`wrap`](crate::wrap::wrap):
//!   it awaits inside a panic boundary and applies the same normalization
//!   and coercion rules to the settled value.
//! - [`OutcomeFutureExt`] is the method-position spelling of
//!   [`from_future`] for fluent chains.
//!
//! The wrappers introduce no reordering or reentrancy of their own: the
//! caller suspends at the await point and resumes once, in the host
//! runtime's ordinary settlement order. There is no cancellation or
//! timeout surface here; cancelling the underlying work is that work's
//! business and is observed as an ordinary rejection.
//!
//! # Examples
//!
//! ```rust
//! use upshot::fault::Fault;
//! use upshot::future::from_future;
//! use upshot::outcome::Outcome;
//!
//! # futures::executor::block_on(async {
//! let rejected = async { Err::<i32, _>("connection reset") };
//! let outcome: Outcome<i32, Fault> =
//!     from_future(rejected, |rejection| Fault::new(rejection)).await;
//! assert_eq!(outcome.failure(), Some(Fault::new("connection reset")));
//! # });
//! ```

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::fault::Fault;
use crate::outcome::Outcome;
use crate::wrap::{IntoOutcome, coerce_panic};

/// Adapts a deferred computation into a deferred outcome.
///
/// Awaits the future and produces `Success` on fulfillment; a rejection is
/// mapped through `map_rejection` into the outcome's error and never
/// propagates past the returned future.
///
/// # Examples
///
/// ```rust
/// use upshot::fault::Fault;
/// use upshot::future::from_future;
/// use upshot::outcome::{succeed, Outcome};
///
/// # futures::executor::block_on(async {
/// let fulfilled = async { Ok::<_, Fault>(21) };
/// let outcome: Outcome<i32> = from_future(fulfilled, |rejection| rejection).await;
/// assert_eq!(outcome.map(|x| x * 2), succeed(42));
/// # });
/// ```
pub async fn from_future<T, X, E, Fut, M>(future: Fut, map_rejection: M) -> Outcome<T, E>
where
    Fut: Future<Output = Result<T, X>>,
    M: FnOnce(X) -> E,
{
    match future.await {
        Ok(payload) => Outcome::Success(payload),
        Err(rejection) => Outcome::Failure(map_rejection(rejection)),
    }
}

/// Awaits a deferred computation inside a panic boundary, yielding an
/// outcome.
///
/// The deferred arm of [`wrap`](crate::wrap::wrap): on settlement the
/// value is normalized through [`IntoOutcome`] (plain value, `Outcome`
/// passed through unchanged, `Result` bridged), and a panic raised while
/// polling is coerced to a [`Fault`] by the same rules as the synchronous
/// boundary. The future is consumed either way; nothing of it is observed
/// after a panic.
///
/// # Examples
///
/// ```rust
/// use upshot::future::wrap_future;
/// use upshot::outcome::{succeed, Outcome};
///
/// # futures::executor::block_on(async {
/// // A settled Outcome passes through unchanged, never nested
/// let flattened: Outcome<i32> = wrap_future(async { succeed::<i32, _>(7) }).await;
/// assert_eq!(flattened, succeed(7));
/// # });
/// ```
pub async fn wrap_future<T, R, Fut>(future: Fut) -> Outcome<T, Fault>
where
    Fut: Future<Output = R>,
    R: IntoOutcome<T, Fault>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(settled) => settled.into_outcome(),
        Err(payload) => Outcome::Failure(coerce_panic(payload)),
    }
}

/// Method-position adaptation of fallible futures into outcome futures.
///
/// Blanket-implemented for every `Future<Output = Result<T, X>>`, so any
/// fallible future can finish a chain with
/// [`into_outcome_with`](Self::into_outcome_with).
///
/// # Examples
///
/// ```rust
/// use upshot::fault::Fault;
/// use upshot::future::OutcomeFutureExt;
/// use upshot::outcome::Outcome;
///
/// # futures::executor::block_on(async {
/// let outcome: Outcome<i32, Fault> = async { Ok::<_, Fault>(42) }
///     .into_outcome_with(|rejection| rejection)
///     .await;
/// assert_eq!(outcome.unwrap(), 42);
/// # });
/// ```
pub trait OutcomeFutureExt<T, X>: Future<Output = Result<T, X>> + Sized {
    /// Adapts this future with [`from_future`], mapping its rejection
    /// through `map_rejection`.
    fn into_outcome_with<E, M>(self, map_rejection: M) -> impl Future<Output = Outcome<T, E>>
    where
        M: FnOnce(X) -> E;
}

impl<Fut, T, X> OutcomeFutureExt<T, X> for Fut
where
    Fut: Future<Output = Result<T, X>>,
{
    fn into_outcome_with<E, M>(self, map_rejection: M) -> impl Future<Output = Outcome<T, E>>
    where
        M: FnOnce(X) -> E,
    {
        from_future(self, map_rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::succeed;
    use rstest::rstest;

    async fn explode() -> i32 {
        panic!("deferred oops")
    }

    #[rstest]
    #[tokio::test]
    async fn from_future_maps_rejection() {
        let outcome: Outcome<i32, Fault> =
            from_future(async { Err::<i32, _>("boom") }, Fault::new).await;
        assert_eq!(outcome, Outcome::Failure(Fault::new("boom")));
    }

    #[rstest]
    #[tokio::test]
    async fn wrap_future_captures_polling_panic() {
        let outcome: Outcome<i32> = wrap_future(explode()).await;
        assert_eq!(outcome, Outcome::Failure(Fault::new("deferred oops")));
    }

    #[rstest]
    #[tokio::test]
    async fn wrap_future_wraps_plain_settlement() {
        let outcome: Outcome<i32> = wrap_future(async { 5 }).await;
        assert_eq!(outcome, succeed(5));
    }
}
