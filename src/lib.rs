//! # lambars-outcome
//!
//! Success/failure and present/absent containers for Rust, with a closed set
//! of combinators, accumulating batch aggregation, and asynchronous adapters.
//!
//! ## Overview
//!
//! - **Containers**: [`Maybe`](control::Maybe) (`Some` / `None`) and
//!   [`Outcome`](control::Outcome) (`Success` / `Failure` with a message)
//! - **Combinators**: `match_with`, `match_void`, `bind`, `map`, explicit
//!   conversions, and strict accessors returning typed errors
//! - **Aggregation**: `choose` and `aggregate`, which visit every element and
//!   report every failure instead of stopping at the first one
//! - **Async adapters**: the same operations over deferred outcomes
//!   (anything that is `IntoFuture<Output = Outcome<T>>`)
//!
//! ## Feature Flags
//!
//! - `control`: `Maybe`, `Outcome`, conversions and accessor errors
//! - `aggregate`: `choose`, `aggregate`, `FromIterator` for `Outcome`
//! - `async`: asynchronous adapters (uses `futures` and `pin-project-lite`)
//! - `tokio`: `aggregate_spawned`, which runs each input as a tokio task
//! - `serde`: `Serialize`/`Deserialize` for both containers
//! - `tracing`: debug events from the aggregation functions
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_outcome::prelude::*;
//!
//! fn parse_port(text: &str) -> Outcome<u16> {
//!     Outcome::from_result(text.parse::<u16>())
//!         .bind(|port| if port == 0 { Outcome::failure("port 0 is reserved") } else { Outcome::success(port) })
//! }
//!
//! assert_eq!(
//!     aggregate(["80", "0", "443"].map(parse_port)),
//!     Outcome::failure("port 0 is reserved")
//! );
//! assert_eq!(
//!     aggregate(["80", "443"].map(parse_port)),
//!     Outcome::success(vec![80, 443])
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambars_outcome::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "aggregate")]
    pub use crate::aggregate::*;

    #[cfg(feature = "async")]
    pub use crate::asynchronous::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "aggregate")]
pub mod aggregate;

#[cfg(feature = "async")]
pub mod asynchronous;
