//! Outcome type - the result of a fallible computation.
//!
//! This module provides the `Outcome<T, E>` type, which represents the
//! result of a computation that is either a `Success(T)` or a `Failure(E)`.
//! It replaces ad-hoc panic- or sentinel-based error signaling with an
//! explicit, composable value that must be inspected before its payload is
//! used:
//!
//! - Failures propagate through combinators as data, never as panics
//! - Only the extraction methods may raise, and only at the call site
//! - Every combinator consumes `self` and returns a new value
//!
//! # Examples
//!
//! ```rust
//! use upshot::outcome::{fail, succeed, Outcome};
//!
//! // Creating Outcome values
//! let success: Outcome<i32> = succeed(42);
//! let failure: Outcome<i32> = fail("boom");
//!
//! // Pattern matching
//! match success {
//!     Outcome::Success(payload) => println!("Got payload: {}", payload),
//!     Outcome::Failure(error) => println!("Got error: {}", error),
//! }
//!
//! // Using fold to handle both cases
//! let result = failure.fold(
//!     |payload| format!("Payload: {}", payload),
//!     |error| format!("Error: {}", error),
//! );
//! assert_eq!(result, "Error: boom");
//! ```

use std::fmt;

use crate::fault::{ErrorLike, Fault};

/// The result of a fallible computation.
///
/// `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. Exactly one of
/// the payload and the error is present, carried by the variant itself, and
/// the value is immutable after construction: every combinator consumes
/// `self` and produces a new `Outcome`.
///
/// # Type Parameters
///
/// * `T` - The type of the success payload
/// * `E` - The type of the failure error, [`Fault`] by default
///
/// # Examples
///
/// ```rust
/// use upshot::outcome::{fail, succeed, Outcome};
///
/// let success: Outcome<i32> = succeed(42);
/// let failure: Outcome<i32> = fail("error");
///
/// // Map over the payload
/// let doubled = success.map(|x| x * 2);
/// assert_eq!(doubled, succeed(84));
///
/// // Failures pass through untouched
/// let still_failed = failure.map(|x| x * 2);
/// assert!(still_failed.is_failure());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "status", content = "value", rename_all = "snake_case")
)]
pub enum Outcome<T, E = Fault> {
    /// The success variant, carrying the payload.
    Success(T),
    /// The failure variant, carrying the error.
    Failure(E),
}

// =============================================================================
// Free Constructors
// =============================================================================

/// Builds a `Success` outcome wrapping the payload.
///
/// # Examples
///
/// ```rust
/// use upshot::outcome::{succeed, Outcome};
///
/// let outcome: Outcome<i32> = succeed(5);
/// assert_eq!(outcome.unwrap(), 5);
/// ```
#[inline]
pub fn succeed<T, E>(payload: T) -> Outcome<T, E> {
    Outcome::Success(payload)
}

/// Builds a `Failure` outcome from an error-like value or a plain message.
///
/// Plain text is lifted into a minimal [`Fault`] carrying that message;
/// an error-like value is stored as-is.
///
/// # Examples
///
/// ```rust
/// use upshot::fault::Fault;
/// use upshot::outcome::{fail, Outcome};
///
/// // A plain message is lifted into a Fault
/// let lifted: Outcome<i32> = fail("boom");
/// assert_eq!(lifted.failure(), Some(Fault::new("boom")));
///
/// // An error-like value is stored verbatim
/// let stored: Outcome<i32> = fail(Fault::new("disk full"));
/// assert_eq!(stored.failure(), Some(Fault::new("disk full")));
/// ```
#[inline]
pub fn fail<T, E, M>(error: M) -> Outcome<T, E>
where
    E: ErrorLike,
    M: Into<E>,
{
    Outcome::Failure(error.into())
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// let success: Outcome<i32> = succeed(42);
    /// assert!(success.is_success());
    ///
    /// let failure: Outcome<i32> = fail("boom");
    /// assert!(!failure.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// let failure: Outcome<i32> = fail("boom");
    /// assert!(failure.is_failure());
    ///
    /// let success: Outcome<i32> = succeed(42);
    /// assert!(!success.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the outcome into an `Option<T>`, consuming it.
    ///
    /// Returns `Some(payload)` for a `Success`, otherwise `None`. This is
    /// the extraction with an absent-value failure policy: the error is
    /// discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// let success: Outcome<i32> = succeed(42);
    /// assert_eq!(success.success(), Some(42));
    ///
    /// let failure: Outcome<i32> = fail("boom");
    /// assert_eq!(failure.success(), None);
    /// ```
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure(_) => None,
        }
    }

    /// Converts the outcome into an `Option<E>`, consuming it.
    ///
    /// Returns `Some(error)` for a `Failure`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::fault::Fault;
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// let failure: Outcome<i32> = fail("boom");
    /// assert_eq!(failure.failure(), Some(Fault::new("boom")));
    ///
    /// let success: Outcome<i32> = succeed(42);
    /// assert_eq!(success.failure(), None);
    /// ```
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the payload if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// let success: Outcome<i32> = succeed(42);
    /// assert_eq!(success.success_ref(), Some(&42));
    ///
    /// let failure: Outcome<i32> = fail("boom");
    /// assert_eq!(failure.success_ref(), None);
    /// ```
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::fault::Fault;
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// let failure: Outcome<i32> = fail("boom");
    /// assert_eq!(failure.failure_ref(), Some(&Fault::new("boom")));
    ///
    /// let success: Outcome<i32> = succeed(42);
    /// assert_eq!(success.failure_ref(), None);
    /// ```
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the payload if this is a `Success`.
    ///
    /// If this is `Success(payload)`, returns `Success(function(payload))`.
    /// If this is `Failure(error)`, returns the failure unchanged and the
    /// function is never invoked.
    ///
    /// Satisfies the functor laws: `outcome.map(|x| x)` is `outcome`, and
    /// `outcome.map(f).map(g)` is `outcome.map(|x| g(f(x)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// let success: Outcome<i32> = succeed(21);
    /// assert_eq!(success.map(|x| x * 2), succeed(42));
    ///
    /// let failure: Outcome<i32> = fail("boom");
    /// assert!(failure.map(|x| x * 2).is_failure());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(payload) => Outcome::Success(function(payload)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the error if this is a `Failure`.
    ///
    /// If this is `Failure(error)`, returns `Failure(function(error))`.
    /// If this is `Success(payload)`, returns the success unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::fault::Fault;
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// let failure: Outcome<i32> = fail("boom");
    /// let annotated = failure.map_error(|error| Fault::new(format!("fetch: {error}")));
    /// assert_eq!(annotated.failure(), Some(Fault::new("fetch: boom")));
    /// ```
    #[inline]
    pub fn map_error<D, F>(self, function: F) -> Outcome<T, D>
    where
        F: FnOnce(E) -> D,
    {
        match self {
            Self::Success(payload) => Outcome::Success(payload),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Applies one of two functions depending on the variant, keeping the
    /// variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::fault::Fault;
    /// use upshot::outcome::{succeed, Outcome};
    ///
    /// let outcome: Outcome<i32> = succeed(21);
    /// let both = outcome.bimap(|x| x * 2, |error: Fault| error.message().len());
    /// assert_eq!(both, succeed(42));
    /// ```
    #[inline]
    pub fn bimap<U, D, F, G>(self, on_success: F, on_failure: G) -> Outcome<U, D>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> D,
    {
        match self {
            Self::Success(payload) => Outcome::Success(on_success(payload)),
            Self::Failure(error) => Outcome::Failure(on_failure(error)),
        }
    }

    // =========================================================================
    // Monadic and Applicative Operations
    // =========================================================================

    /// Chains a function that itself returns an `Outcome` (monadic bind).
    ///
    /// If this is `Success(payload)`, returns `function(payload)` directly,
    /// never a nested outcome. If this is `Failure(error)`, short-circuits
    /// and returns the failure unchanged; the function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// fn reciprocal(x: f64) -> Outcome<f64> {
    ///     if x == 0.0 { fail("division by zero") } else { succeed(1.0 / x) }
    /// }
    ///
    /// assert_eq!(succeed(4.0).flat_map(reciprocal), succeed(0.25));
    /// assert!(succeed(0.0).flat_map(reciprocal).is_failure());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(payload) => function(payload),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a wrapped function to a wrapped argument (applicative apply).
    ///
    /// The payload of `self` must be a unary function. If both sides are
    /// `Success`, returns `Success(function(argument))`. A function-side
    /// failure takes priority over an argument-side failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::fault::Fault;
    /// use upshot::outcome::{succeed, Outcome};
    ///
    /// let function: Outcome<_, Fault> = succeed(|x: i32| x * 2);
    /// assert_eq!(function.apply(succeed(21)), succeed(42));
    /// ```
    #[inline]
    pub fn apply<A, B>(self, argument: Outcome<A, E>) -> Outcome<B, E>
    where
        T: FnOnce(A) -> B,
    {
        match (self, argument) {
            (Self::Success(function), Outcome::Success(value)) => {
                Outcome::Success(function(value))
            }
            (Self::Failure(error), _) => Outcome::Failure(error),
            (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the outcome by applying exactly one of two functions.
    ///
    /// This is exhaustive two-branch dispatch as a method: the variant
    /// selects the branch, the branch runs synchronously, and its return
    /// value is returned. No default branch exists or is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// let success: Outcome<i32> = succeed(42);
    /// let rendered = success.fold(|x| x.to_string(), |error| error.to_string());
    /// assert_eq!(rendered, "42");
    ///
    /// let failure: Outcome<i32> = fail("boom");
    /// let rendered = failure.fold(|x| x.to_string(), |error| error.to_string());
    /// assert_eq!(rendered, "boom");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_success: F, on_failure: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Success(payload) => on_success(payload),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Side-Effect Hooks
    // =========================================================================

    /// Invokes an effect with the payload if this is a `Success`.
    ///
    /// The effect is for side effects only; the outcome is returned
    /// unchanged either way, so hooks can be chained freely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{succeed, Outcome};
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32> = succeed(42).on_success(|payload| seen = Some(*payload));
    /// assert_eq!(seen, Some(42));
    /// assert_eq!(outcome, succeed(42));
    /// ```
    #[inline]
    pub fn on_success<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(payload) = &self {
            effect(payload);
        }
        self
    }

    /// Invokes an effect with the error if this is a `Failure`.
    ///
    /// Symmetric to [`on_success`](Self::on_success): a no-op on `Success`,
    /// and the outcome is returned unchanged either way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{fail, Outcome};
    /// use upshot::fault::Fault;
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32> = fail("boom").on_failure(|error: &Fault| seen = Some(error.to_string()));
    /// assert_eq!(seen, Some("boom".to_string()));
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn on_failure<F>(self, effect: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            effect(error);
        }
        self
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the payload, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics on a `Failure`, using the contained error's message, or a
    /// generic message when the error's message is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{succeed, Outcome};
    ///
    /// let outcome: Outcome<i32> = succeed(42);
    /// assert_eq!(outcome.unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: ErrorLike,
    {
        match self {
            Self::Success(payload) => payload,
            Self::Failure(error) => {
                let message = error.message();
                if message.is_empty() {
                    panic!("called `Outcome::unwrap()` on a `Failure` value");
                }
                panic!("{message}");
            }
        }
    }

    /// Returns the payload, or the fallback if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// let success: Outcome<i32> = succeed(42);
    /// assert_eq!(success.unwrap_or(0), 42);
    ///
    /// let failure: Outcome<i32> = fail("boom");
    /// assert_eq!(failure.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Success(payload) => payload,
            Self::Failure(_) => fallback,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a `Result`, preserving the raw error.
    ///
    /// This is the extraction whose failure policy is "hand back the
    /// error-like value itself": the caller discriminates on the returned
    /// `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::fault::Fault;
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// let success: Outcome<i32> = succeed(42);
    /// assert_eq!(success.into_result(), Ok(42));
    ///
    /// let failure: Outcome<i32> = fail("boom");
    /// assert_eq!(failure.into_result(), Err(Fault::new("boom")));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default, E> Outcome<T, E> {
    /// Returns the payload, or `T::default()` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{fail, succeed, Outcome};
    ///
    /// let success: Outcome<i32> = succeed(42);
    /// assert_eq!(success.unwrap_or_default(), 42);
    ///
    /// let failure: Outcome<i32> = fail("boom");
    /// assert_eq!(failure.unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Success(payload) => payload,
            Self::Failure(_) => T::default(),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(payload) => formatter.debug_tuple("Success").field(payload).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a `Result` to an `Outcome`.
    ///
    /// `Ok(payload)` becomes `Success(payload)`, and `Err(error)` becomes
    /// `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{succeed, Outcome};
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let outcome: Outcome<i32, String> = ok.into();
    /// assert_eq!(outcome, succeed(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a `Result`.
    ///
    /// `Success(payload)` becomes `Ok(payload)`, and `Failure(error)`
    /// becomes `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{fail, Outcome};
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// let result: Result<i32, String> = failure.into();
    /// assert_eq!(result, Err("boom".to_string()));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

// =============================================================================
// Auto-trait Assertions
// =============================================================================

static_assertions::assert_impl_all!(Outcome<i32, Fault>: Send, Sync);
static_assertions::assert_impl_all!(Outcome<String, Fault>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn outcome_success_construction() {
        let outcome: Outcome<i32> = succeed(42);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
    }

    #[rstest]
    fn outcome_failure_construction() {
        let outcome: Outcome<i32> = fail("boom");
        assert!(outcome.is_failure());
        assert!(!outcome.is_success());
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, Fault> = Ok(42);
        let outcome: Outcome<i32> = ok.into();
        let result: Result<i32, Fault> = outcome.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, Fault> = Err(Fault::new("boom"));
        let outcome: Outcome<i32> = err.into();
        let result: Result<i32, Fault> = outcome.into();
        assert_eq!(result, Err(Fault::new("boom")));
    }

    #[rstest]
    fn debug_formats_variant_names() {
        let success: Outcome<i32> = succeed(1);
        let failure: Outcome<i32> = fail("boom");
        assert_eq!(format!("{success:?}"), "Success(1)");
        assert_eq!(format!("{failure:?}"), "Failure(Fault(\"boom\"))");
    }
}
