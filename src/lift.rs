//! Lifting plain functions over outcomes.
//!
//! The `lift` family turns an n-ary plain function into a function over n
//! outcomes. The supplied outcomes are scanned in argument order; the
//! first `Failure` encountered (the leftmost) is returned immediately
//! without invoking the target function, and when all are `Success` the
//! target function is applied to the unwrapped payloads.
//!
//! [`lift2`]..[`lift5`] are the function-position combinators; the
//! [`lift!`](crate::lift!) macro is the call-position form for arbitrary
//! arity.
//!
//! # Examples
//!
//! ```rust
//! use upshot::lift::lift2;
//! use upshot::outcome::{fail, succeed, Outcome};
//!
//! let add = lift2(|a: i32, b: i32| a + b);
//! let sum: Outcome<i32> = add(succeed(2), succeed(3));
//! assert_eq!(sum, succeed(5));
//!
//! // The leftmost failure wins and the target function never runs
//! let add = lift2(|a: i32, b: i32| a + b);
//! let outcome: Outcome<i32> = add(fail("first"), fail("second"));
//! assert_eq!(outcome, fail("first"));
//! ```

use crate::outcome::Outcome;

macro_rules! define_lift {
    ($(#[$docs:meta])* $name:ident => $($value:ident: $param:ident),+) => {
        $(#[$docs])*
        pub fn $name<$($param,)+ R, E, F>(
            function: F,
        ) -> impl FnOnce($(Outcome<$param, E>),+) -> Outcome<R, E>
        where
            F: FnOnce($($param),+) -> R,
        {
            move |$($value),+| {
                $(
                    let $value = match $value {
                        Outcome::Success(payload) => payload,
                        Outcome::Failure(error) => return Outcome::Failure(error),
                    };
                )+
                Outcome::Success(function($($value),+))
            }
        }
    };
}

define_lift! {
    /// Lifts a binary function into a function over two outcomes.
    ///
    /// The leftmost `Failure` is returned without invoking the function;
    /// two `Success` values are unwrapped, applied, and rewrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::lift::lift2;
    /// use upshot::outcome::{succeed, Outcome};
    ///
    /// let join = lift2(|host: String, port: u16| format!("{host}:{port}"));
    /// let address: Outcome<String> = join(succeed("localhost".to_string()), succeed(8080));
    /// assert_eq!(address, succeed("localhost:8080".to_string()));
    /// ```
    lift2 => first: A, second: B
}

define_lift! {
    /// Lifts a ternary function into a function over three outcomes.
    ///
    /// Same scan rule as [`lift2`]: the leftmost `Failure` wins.
    lift3 => first: A, second: B, third: C
}

define_lift! {
    /// Lifts a 4-ary function into a function over four outcomes.
    ///
    /// Same scan rule as [`lift2`]: the leftmost `Failure` wins.
    lift4 => first: A, second: B, third: C, fourth: D
}

define_lift! {
    /// Lifts a 5-ary function into a function over five outcomes.
    ///
    /// Same scan rule as [`lift2`]: the leftmost `Failure` wins.
    lift5 => first: A, second: B, third: C, fourth: D, fifth: G
}

/// Applies a plain function to any number of outcomes in call position.
///
/// The outcomes are evaluated and scanned left to right; the first
/// `Failure` is returned immediately without invoking the function or
/// inspecting the remaining outcomes' payloads.
///
/// # Examples
///
/// ```rust
/// use upshot::lift;
/// use upshot::outcome::{fail, succeed, Outcome};
///
/// let sum: Outcome<i32> = lift!(
///     |a: i32, b: i32, c: i32| a + b + c,
///     succeed(1),
///     succeed(2),
///     succeed(3),
/// );
/// assert_eq!(sum, succeed(6));
///
/// let short_circuited: Outcome<i32> = lift!(
///     |a: i32, b: i32| a + b,
///     fail("leftmost"),
///     succeed(2),
/// );
/// assert_eq!(short_circuited, fail("leftmost"));
/// ```
#[macro_export]
macro_rules! lift {
    ($function:expr $(, $outcome:expr)+ $(,)?) => {{
        (|| {
            $crate::outcome::Outcome::Success($function($(
                match $outcome {
                    $crate::outcome::Outcome::Success(payload) => payload,
                    $crate::outcome::Outcome::Failure(error) => {
                        return $crate::outcome::Outcome::Failure(error);
                    }
                }
            ),+))
        })()
    }};
}
