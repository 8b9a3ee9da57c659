#![cfg(feature = "async")]
//! Unit tests for the async integration.
//!
//! These tests cover the deferred constructors:
//! - from_future: fulfillment -> Success, rejection mapped -> Failure,
//!   never propagated past the returned future
//! - wrap_future: the deferred arm of wrap, with the same normalization
//!   and panic-coercion rules as the synchronous boundary
//! - OutcomeFutureExt::into_outcome_with: method-position adaptation

use std::fmt;

use upshot::fault::Fault;
use upshot::future::{OutcomeFutureExt, from_future, wrap_future};
use upshot::outcome::{Outcome, fail, succeed};
use rstest::rstest;

/// A domain rejection type for mapping tests.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Timeout {
    after_ms: u64,
}

impl fmt::Display for Timeout {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "timed out after {}ms", self.after_ms)
    }
}

impl std::error::Error for Timeout {}

// =============================================================================
// from_future
// =============================================================================

#[rstest]
#[tokio::test]
async fn from_future_resolves_fulfillment_to_success() {
    let fulfilled = async { Ok::<_, Fault>(21) };
    let outcome: Outcome<i32> = from_future(fulfilled, |rejection| rejection).await;
    assert_eq!(outcome.map(|x| x * 2), succeed(42));
}

#[rstest]
#[tokio::test]
async fn from_future_maps_the_rejection_into_a_failure() {
    // The rejection must resolve to a Failure, never escape the future.
    let rejected = async { Err::<i32, _>("connection reset") };
    let outcome: Outcome<i32> = from_future(rejected, Fault::new).await;
    assert_eq!(outcome.failure(), Some(Fault::new("connection reset")));
}

#[rstest]
#[tokio::test]
async fn from_future_maps_into_a_domain_error_type() {
    let rejected = async { Err::<i32, _>(750_u64) };
    let outcome: Outcome<i32, Timeout> =
        from_future(rejected, |after_ms| Timeout { after_ms }).await;
    assert_eq!(outcome.failure(), Some(Timeout { after_ms: 750 }));
}

#[rstest]
#[tokio::test]
async fn into_outcome_with_adapts_in_method_position() {
    let outcome: Outcome<i32> = async { Ok::<_, Fault>(42) }
        .into_outcome_with(|rejection| rejection)
        .await;
    assert_eq!(outcome.unwrap(), 42);
}

// =============================================================================
// wrap_future
// =============================================================================

async fn explode() -> i32 {
    panic!("deferred oops")
}

#[rstest]
#[tokio::test]
async fn wrap_future_wraps_a_plain_settlement_as_success() {
    let outcome: Outcome<i32> = wrap_future(async { 5 }).await;
    assert_eq!(outcome, succeed(5));
}

#[rstest]
#[tokio::test]
async fn wrap_future_flattens_a_settled_success() {
    let outcome: Outcome<i32> = wrap_future(async { succeed::<i32, _>(7) }).await;
    assert_eq!(outcome, succeed(7));
}

#[rstest]
#[tokio::test]
async fn wrap_future_passes_a_settled_failure_through() {
    let outcome: Outcome<i32> = wrap_future(async { fail::<i32, Fault, _>("inner") }).await;
    assert_eq!(outcome.failure(), Some(Fault::new("inner")));
}

#[rstest]
#[tokio::test]
async fn wrap_future_bridges_a_settled_result() {
    let outcome: Outcome<i32> = wrap_future(async { "42".parse::<i32>() }).await;
    assert_eq!(outcome, succeed(42));
}

#[rstest]
#[tokio::test]
async fn wrap_future_captures_a_panic_while_polling() {
    let outcome: Outcome<i32> = wrap_future(explode()).await;
    assert_eq!(outcome.failure(), Some(Fault::new("deferred oops")));
}

#[rstest]
#[tokio::test]
async fn wrap_future_chains_like_any_other_constructor() {
    let outcome: Outcome<i32> = wrap_future(async { 20 }).await;
    let doubled = outcome.map(|x| x * 2).flat_map(|x| succeed::<i32, _>(x + 2));
    assert_eq!(doubled.unwrap(), 42);
}
