//! Unit tests for the lift combinator family and the lift! macro.
//!
//! Lifting turns an n-ary plain function into a function over n outcomes.
//! The outcomes are scanned in argument order; the first Failure (the
//! leftmost) is returned immediately and the target function never runs.

use std::cell::Cell;

use upshot::fault::Fault;
use upshot::lift;
use upshot::lift::{lift2, lift3, lift4, lift5};
use upshot::outcome::{Outcome, fail, succeed};
use rstest::rstest;

// =============================================================================
// Function-Position Combinators
// =============================================================================

#[rstest]
fn lift2_applies_the_function_to_two_successes() {
    let join = lift2(|host: String, port: u16| format!("{host}:{port}"));
    let address: Outcome<String> = join(succeed("localhost".to_string()), succeed(8080));
    assert_eq!(address, succeed("localhost:8080".to_string()));
}

#[rstest]
fn lift2_returns_the_leftmost_failure() {
    let add = lift2(|a: i32, b: i32| a + b);
    let outcome: Outcome<i32> = add(fail("first"), fail("second"));
    assert_eq!(outcome.failure(), Some(Fault::new("first")));
}

#[rstest]
fn lift2_never_invokes_the_function_on_failure() {
    let invoked = Cell::new(false);
    let add = lift2(|a: i32, b: i32| {
        invoked.set(true);
        a + b
    });
    let outcome: Outcome<i32> = add(succeed(1), fail("boom"));
    assert!(outcome.is_failure());
    assert!(!invoked.get());
}

#[rstest]
fn lift3_applies_in_argument_order() {
    let combine = lift3(|a: i32, b: i32, c: i32| a * 100 + b * 10 + c);
    let outcome: Outcome<i32> = combine(succeed(1), succeed(2), succeed(3));
    assert_eq!(outcome, succeed(123));
}

#[rstest]
fn lift4_returns_the_leftmost_of_two_failures() {
    let combine = lift4(|a: i32, b: i32, c: i32, d: i32| a + b + c + d);
    let outcome: Outcome<i32> = combine(succeed(1), fail("second"), succeed(3), fail("fourth"));
    assert_eq!(outcome.failure(), Some(Fault::new("second")));
}

#[rstest]
fn lift5_applies_all_five_payloads() {
    let combine = lift5(|a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e);
    let outcome: Outcome<i32> =
        combine(succeed(1), succeed(2), succeed(3), succeed(4), succeed(5));
    assert_eq!(outcome, succeed(15));
}

// =============================================================================
// Call-Position Macro
// =============================================================================

#[rstest]
fn lift_macro_applies_on_all_success() {
    let outcome: Outcome<i32> = lift!(|a: i32, b: i32, c: i32| a + b + c, succeed(1), succeed(2), succeed(3));
    assert_eq!(outcome, succeed(6));
}

#[rstest]
fn lift_macro_short_circuits_on_the_leftmost_failure() {
    let outcome: Outcome<i32> = lift!(
        |a: i32, b: i32| a + b,
        fail("leftmost"),
        fail("rightmost"),
    );
    assert_eq!(outcome.failure(), Some(Fault::new("leftmost")));
}

#[rstest]
fn lift_macro_evaluates_each_argument_once_in_order() {
    let order = Cell::new(Vec::new());
    let record = |label: &'static str, outcome: Outcome<i32>| {
        let mut seen = order.take();
        seen.push(label);
        order.set(seen);
        outcome
    };

    let outcome: Outcome<i32> = lift!(
        |a: i32, b: i32| a + b,
        record("first", succeed(1)),
        record("second", succeed(2)),
    );
    assert_eq!(outcome, succeed(3));
    assert_eq!(order.take(), vec!["first", "second"]);
}
