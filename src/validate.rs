//! Validation-chain extraction - `unwrap_validated` and `Verdict`.
//!
//! [`Outcome::unwrap_validated`] runs an ordered sequence of validation
//! callbacks against the outcome before extracting the payload. Each
//! callback sees the payload and the error (exactly one is present) and
//! answers with a [`Verdict`] driving one of four control actions:
//! escape, continue, fail fast with a message, or fail fast with a
//! structured value raised verbatim.
//!
//! The tagged `Verdict` type replaces dispatch on the runtime type of a
//! single return slot, so "this check passed" ([`Verdict::Continue`]) and
//! "stop validating entirely" ([`Verdict::Accept`]) cannot be confused by
//! accident - but see the escape caveat on [`Verdict::Accept`].
//!
//! # Examples
//!
//! ```rust
//! use upshot::outcome::{succeed, Outcome};
//! use upshot::validate::{Validator, Verdict};
//!
//! let validators: Vec<Validator<i32, _>> = vec![
//!     Box::new(|payload, _| match payload {
//!         Some(value) if *value > 0 => Verdict::Continue,
//!         _ => Verdict::reject("must be positive"),
//!     }),
//! ];
//!
//! let outcome: Outcome<i32> = succeed(10);
//! assert_eq!(outcome.unwrap_validated(validators), 10);
//! ```

use std::any::Any;
use std::fmt;
use std::panic::resume_unwind;

use crate::fault::ErrorLike;
use crate::outcome::Outcome;

/// The answer a validation callback gives for one link of the chain.
///
/// Evaluated in order, first match wins; see each variant for the control
/// action it drives.
pub enum Verdict {
    /// Escape: terminate the entire chain immediately and extract the
    /// payload, skipping all remaining validators - even ones that would
    /// reject.
    ///
    /// `Accept` means "stop validating entirely", not "this check passed";
    /// a validator that answers `Accept` whenever its own condition holds
    /// will unintentionally short-circuit every later check. Answer
    /// [`Verdict::Continue`] for "this check passed".
    Accept,
    /// Continue to the next validator in the chain.
    Continue,
    /// Fail fast: raise with this text as the message. No further
    /// validators run.
    Reject(String),
    /// Fail fast: raise this structured value verbatim, observable via
    /// [`std::panic::catch_unwind`] and a downcast. No further validators
    /// run.
    Abort(Box<dyn Any + Send>),
}

impl Verdict {
    /// Builds a [`Verdict::Reject`] from any message type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::validate::Verdict;
    ///
    /// let verdict = Verdict::reject("out of range");
    /// assert!(matches!(verdict, Verdict::Reject(message) if message == "out of range"));
    /// ```
    #[inline]
    pub fn reject(message: impl Into<String>) -> Self {
        Self::Reject(message.into())
    }

    /// Builds a [`Verdict::Abort`] carrying a structured value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::validate::Verdict;
    ///
    /// #[derive(Debug)]
    /// struct Denied { code: u16 }
    ///
    /// let verdict = Verdict::abort(Denied { code: 403 });
    /// assert!(matches!(verdict, Verdict::Abort(_)));
    /// ```
    #[inline]
    pub fn abort(value: impl Any + Send) -> Self {
        Self::Abort(Box::new(value))
    }
}

impl fmt::Debug for Verdict {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => formatter.write_str("Accept"),
            Self::Continue => formatter.write_str("Continue"),
            Self::Reject(message) => formatter.debug_tuple("Reject").field(message).finish(),
            Self::Abort(_) => formatter.write_str("Abort(..)"),
        }
    }
}

/// A boxed validation callback, one link of a validation chain.
///
/// Invoked with the payload and the error; exactly one is `Some`,
/// depending on the outcome's variant. The lifetime bounds the state the
/// callback may borrow.
pub type Validator<'a, T, E> = Box<dyn FnOnce(Option<&T>, Option<&E>) -> Verdict + 'a>;

impl<T, E> Outcome<T, E> {
    /// Extracts the payload after running a chain of validation callbacks.
    ///
    /// Each callback is invoked in order with `(payload, error)` - exactly
    /// one is `Some` - and its [`Verdict`] drives the chain:
    ///
    /// 1. [`Verdict::Accept`] terminates the chain immediately and
    ///    extracts, skipping all remaining validators (see the escape
    ///    caveat on [`Verdict::Accept`]).
    /// 2. [`Verdict::Continue`] moves on to the next callback.
    /// 3. [`Verdict::Reject`] raises with its text; no further callbacks
    ///    run.
    /// 4. [`Verdict::Abort`] raises its value verbatim; no further
    ///    callbacks run.
    ///
    /// When every callback continues (or the chain is empty), a `Success`
    /// yields its payload and a `Failure` raises with the contained
    /// error's message.
    ///
    /// # Panics
    ///
    /// Panics when a validator answers `Reject` (with that message) or
    /// `Abort` (with that value, verbatim), and when extraction reaches a
    /// `Failure`: an exhausted chain over a `Failure` - or an `Accept` on
    /// one, which has no payload to extract - raises with the contained
    /// error's message, or a generic message when it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::outcome::{succeed, Outcome};
    /// use upshot::validate::{Validator, Verdict};
    ///
    /// let range_check: Validator<i32, _> = Box::new(|payload, _| match payload {
    ///     Some(value) if *value > 0 => Verdict::Continue,
    ///     _ => Verdict::reject("must be positive"),
    /// });
    ///
    /// let outcome: Outcome<i32> = succeed(10);
    /// assert_eq!(outcome.unwrap_validated(vec![range_check]), 10);
    /// ```
    pub fn unwrap_validated<'a, I>(self, validators: I) -> T
    where
        I: IntoIterator<Item = Validator<'a, T, E>>,
        E: ErrorLike,
    {
        for validator in validators {
            match validator(self.success_ref(), self.failure_ref()) {
                Verdict::Accept => break,
                Verdict::Continue => {}
                Verdict::Reject(message) => panic!("{message}"),
                Verdict::Abort(value) => resume_unwind(value),
            }
        }
        match self {
            Self::Success(payload) => payload,
            Self::Failure(error) => {
                let message = error.message();
                if message.is_empty() {
                    panic!("called `Outcome::unwrap_validated()` on a `Failure` value");
                }
                panic!("{message}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{fail, succeed};
    use rstest::rstest;

    #[rstest]
    fn empty_chain_returns_success_payload() {
        let outcome: Outcome<i32> = succeed(10);
        assert_eq!(outcome.unwrap_validated(Vec::new()), 10);
    }

    #[rstest]
    #[should_panic(expected = "boom")]
    fn empty_chain_raises_original_failure() {
        let outcome: Outcome<i32> = fail("boom");
        outcome.unwrap_validated(Vec::new());
    }

    #[rstest]
    fn accept_escapes_immediately() {
        let validators: Vec<Validator<i32, _>> = vec![
            Box::new(|_, _| Verdict::Accept),
            Box::new(|_, _| Verdict::reject("never reached")),
        ];
        let outcome: Outcome<i32> = succeed(10);
        assert_eq!(outcome.unwrap_validated(validators), 10);
    }
}
