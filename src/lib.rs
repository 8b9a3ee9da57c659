//! # upshot
//!
//! A success/failure `Outcome` type for Rust with a rich combinator
//! surface, validation-chain extraction, and async integration.
//!
//! ## Overview
//!
//! [`Outcome<T, E>`](outcome::Outcome) represents the result of a fallible
//! computation as exactly one of two cases: a `Success` carrying a payload,
//! or a `Failure` carrying an error-like value. Failures stay inspectable
//! data all the way through a combinator chain; raising is confined to the
//! explicit extraction points.
//!
//! - **Constructors**: [`succeed`](outcome::succeed), [`fail`](outcome::fail),
//!   [`wrap`](wrap::wrap) (the panic boundary), and the async adapters in
//!   [`future`].
//! - **Transformers**: `map`, `map_error`, `flat_map`, `apply`, and the
//!   [`lift2`](lift::lift2)..[`lift5`](lift::lift5) family.
//! - **Extractors**: `unwrap`, `success`, `unwrap_or`, `into_result`, and
//!   the validation-chain extractor
//!   [`unwrap_validated`](outcome::Outcome::unwrap_validated).
//! - **Dispatch and hooks**: `fold`, `on_success`, `on_failure`.
//!
//! ## Feature Flags
//!
//! - `async`: async constructors (`from_future`, `wrap_future`) and the
//!   `OutcomeFutureExt` extension trait (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `Outcome` and `Fault`
//!
//! ## Example
//!
//! ```rust
//! use upshot::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, Fault> {
//!     wrap(|| raw.trim().parse::<u16>())
//! }
//!
//! let port = parse_port(" 8080 ").map(|port| port + 1).unwrap_or(80);
//! assert_eq!(port, 8081);
//!
//! let fallback = parse_port("not a port").unwrap_or(80);
//! assert_eq!(fallback, 80);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use upshot::prelude::*;
/// ```
pub mod prelude {

    pub use crate::fault::*;

    pub use crate::outcome::*;

    pub use crate::wrap::*;

    pub use crate::lift::*;

    pub use crate::validate::*;

    #[cfg(feature = "async")]
    pub use crate::future::*;
}

pub mod fault;

pub mod outcome;

pub mod wrap;

pub mod lift;

pub mod validate;

#[cfg(feature = "async")]
pub mod future;
