//! Asynchronous adapters for `Outcome` combinators and batch operations.
//!
//! A *deferred outcome* is any value implementing
//! `IntoFuture<Output = Outcome<T>>`: an `async` block, an `async fn` call,
//! a `tokio` task wrapped to yield an `Outcome`, and so on. The adapters in
//! this module accept deferred outcomes instead of outcomes and return
//! futures of the combined result:
//!
//! - [`match_async`], [`match_void_async`], [`bind_async`], [`map_async`]:
//!   single-outcome combinators, returning the nameable [`MapOutcome`] future
//! - [`bind_deferred`]: a bind whose binder is itself deferred
//! - [`aggregate_async`], [`aggregate_async_with_separator`], [`choose_async`]:
//!   batch operations that await every input and combine in input order
//! - [`OutcomeFutureExt`]: the single-outcome adapters as methods
//!
//! With the `tokio` feature, `aggregate_spawned` and
//! `aggregate_spawned_with_separator` submit each input as its own task.
//!
//! The adapters do not change any success or failure semantics: a binder is
//! never run on a failure, and aggregation still visits every input and
//! reports every failure message.
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::asynchronous::{aggregate_async, map_async};
//! use lambars_outcome::control::Outcome;
//!
//! async fn fetch(id: u32) -> Outcome<String> {
//!     if id % 2 == 0 {
//!         Outcome::success(format!("record {id}"))
//!     } else {
//!         Outcome::failure(format!("record {id} is missing"))
//!     }
//! }
//!
//! # futures::executor::block_on(async {
//! let doubled = map_async(async { Outcome::success(21) }, |n| n * 2).await;
//! assert_eq!(doubled, Outcome::success(42));
//!
//! let all = aggregate_async(vec![fetch(1), fetch(2), fetch(3)]).await;
//! assert_eq!(
//!     all,
//!     Outcome::failure("record 1 is missing, record 3 is missing")
//! );
//!
//! let found = aggregate_async(vec![fetch(2), fetch(4)]).await;
//! assert_eq!(
//!     found,
//!     Outcome::success(vec!["record 2".to_string(), "record 4".to_string()])
//! );
//! # });
//! ```

mod adapters;
mod batch;
mod future;
#[cfg(feature = "tokio")]
mod spawned;

pub use adapters::{
    OutcomeFutureExt, bind_async, bind_deferred, map_async, match_async, match_void_async,
};
pub use batch::{aggregate_async, aggregate_async_with_separator, choose_async};
pub use future::MapOutcome;
#[cfg(feature = "tokio")]
pub use spawned::{aggregate_spawned, aggregate_spawned_with_separator};
