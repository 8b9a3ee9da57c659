//! The `wrap` constructor - a panic boundary that yields outcomes.
//!
//! [`wrap`] executes a zero-argument operation and converts whatever
//! happens into an [`Outcome`]:
//!
//! - a panic becomes a `Failure` (a [`Fault`] payload passes through
//!   verbatim, text payloads become the fault's message)
//! - a plain return value becomes a `Success`
//! - a returned `Outcome` is passed through unchanged, never nested
//! - a returned `Result` is bridged, its error coerced to a [`Fault`]
//!
//! The return-value normalization is the [`IntoOutcome`] trait; its impl
//! set is the exhaustive "is this already an outcome" discrimination, so a
//! nested `Outcome<Outcome<_>>` cannot arise from `wrap`.
//!
//! This is the sole boundary that converts panics into data. Once inside an
//! `Outcome`, a failure stays data until an extractor is invoked.
//!
//! # Examples
//!
//! ```rust
//! use upshot::outcome::{succeed, Outcome};
//! use upshot::wrap::wrap;
//!
//! // A plain return becomes a Success
//! let plain: Outcome<i32> = wrap(|| 7);
//! assert_eq!(plain, succeed(7));
//!
//! // A panic becomes a Failure carrying the panic text
//! let caught: Outcome<i32> = wrap(|| -> i32 { panic!("oops") });
//! assert_eq!(caught.failure_ref().map(|fault| fault.message().to_string()),
//!            Some("oops".to_string()));
//!
//! // A returned Outcome is flattened, not nested
//! let flattened: Outcome<i32> = wrap(|| succeed::<i32, _>(7));
//! assert_eq!(flattened, succeed(7));
//! ```

use std::any::Any;
use std::panic::{self, UnwindSafe};

use crate::fault::{ErrorLike, Fault};
use crate::outcome::Outcome;

/// A value that `wrap` can normalize into an [`Outcome`].
///
/// Exactly three kinds of value are normalizable: an `Outcome` (passed
/// through unchanged, so wrapping never nests), a `Result` (bridged, the
/// error coerced to a [`Fault`] via its message), and any other value
/// (wrapped as a `Success`). Static dispatch over this impl set replaces a
/// runtime "is this already an outcome" check.
///
/// When more than one impl could apply to an operation's return type,
/// annotate the target payload type to select one, as with any Rust trait
/// resolution.
///
/// # Examples
///
/// ```rust
/// use upshot::outcome::{succeed, Outcome};
/// use upshot::wrap::IntoOutcome;
///
/// let outcome: Outcome<i32> = 7.into_outcome();
/// assert_eq!(outcome, succeed(7));
/// ```
pub trait IntoOutcome<T, E> {
    /// Normalizes `self` into an `Outcome`.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for T {
    /// A plain value becomes a `Success` payload.
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::Success(self)
    }
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    /// An outcome is already normalized and passes through unchanged.
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<T, X: ErrorLike> IntoOutcome<T, Fault> for Result<T, X> {
    /// A `Result` is bridged; the rejection is coerced to a [`Fault`]
    /// carrying its message. The original error value is not preserved.
    #[inline]
    fn into_outcome(self) -> Outcome<T, Fault> {
        match self {
            Ok(payload) => Outcome::Success(payload),
            Err(error) => Outcome::Failure(Fault::new(error.message())),
        }
    }
}

/// Executes an operation inside a panic boundary, yielding an `Outcome`.
///
/// The operation's return value is normalized through [`IntoOutcome`]:
/// plain values become `Success`, an `Outcome` passes through unchanged
/// (never nested), and a `Result` is bridged with its error coerced to a
/// [`Fault`].
///
/// A panic raised by the operation is captured, never propagated:
///
/// - a [`Fault`] payload (via [`std::panic::panic_any`]) passes through
///   verbatim
/// - a `&str` or `String` payload becomes the fault's message
/// - any other payload becomes a fault with a fixed description, since a
///   type-erased payload exposes no textual representation
///
/// # Examples
///
/// ```rust
/// use upshot::fault::Fault;
/// use upshot::outcome::{fail, succeed, Outcome};
/// use upshot::wrap::wrap;
///
/// // Bridging a fallible std operation
/// let parsed: Outcome<i32> = wrap(|| "42".parse::<i32>());
/// assert_eq!(parsed, succeed(42));
///
/// // A failure computed inside the operation passes through unchanged
/// let inner: Outcome<i32> = wrap(|| fail::<i32, Fault, _>("rejected"));
/// assert_eq!(inner, fail("rejected"));
/// ```
pub fn wrap<T, R, F>(operation: F) -> Outcome<T, Fault>
where
    F: FnOnce() -> R + UnwindSafe,
    R: IntoOutcome<T, Fault>,
{
    match panic::catch_unwind(operation) {
        Ok(returned) => returned.into_outcome(),
        Err(payload) => Outcome::Failure(coerce_panic(payload)),
    }
}

/// Coerces a caught panic payload into a [`Fault`].
///
/// Checked in order: a `Fault` passes through verbatim, then owned and
/// borrowed text become the message, then everything else collapses to a
/// fixed description.
pub(crate) fn coerce_panic(payload: Box<dyn Any + Send>) -> Fault {
    match payload.downcast::<Fault>() {
        Ok(fault) => *fault,
        Err(payload) => match payload.downcast::<String>() {
            Ok(text) => Fault::new(*text),
            Err(payload) => match payload.downcast::<&str>() {
                Ok(text) => Fault::new(*text),
                Err(_) => Fault::new("panicked with a non-text payload"),
            },
        },
    }
}
