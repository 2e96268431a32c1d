//! Batch aggregation over computations submitted to the tokio runtime.
//!
//! [`aggregate_async`](super::aggregate_async) drives its inputs on the
//! calling task. The functions here instead spawn each computation as its
//! own tokio task, so CPU-heavy or blocking-prone work runs in parallel on a
//! multi-threaded runtime. Aggregation still happens in input order.

use std::future::Future;

use futures::future::join_all;

use crate::aggregate::{DEFAULT_ERROR_SEPARATOR, aggregate_with_separator};
use crate::control::Outcome;

/// Spawns every computation, then aggregates the results with
/// [`DEFAULT_ERROR_SEPARATOR`].
///
/// See [`aggregate_spawned_with_separator`].
///
/// # Panics
///
/// Panics if called outside a tokio runtime, or if a spawned computation
/// panicked.
pub async fn aggregate_spawned<I, F, T>(computations: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Outcome<T>> + Send + 'static,
    T: Send + 'static,
{
    aggregate_spawned_with_separator(computations, DEFAULT_ERROR_SEPARATOR).await
}

/// Spawns every computation on the current tokio runtime, waits for all of
/// them, then aggregates the results in input order.
///
/// A computation that panicked resumes its panic on the caller. A task that
/// was cancelled, which only happens while the runtime shuts down, is
/// recorded as a failure naming its position in the input.
///
/// # Panics
///
/// Panics if called outside a tokio runtime, or if a spawned computation
/// panicked.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::asynchronous::aggregate_spawned_with_separator;
/// use lambars_outcome::control::Outcome;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let squares = (1..=3).map(|n: i32| async move { Outcome::success(n * n) });
/// let outcome = aggregate_spawned_with_separator(squares, ", ").await;
/// assert_eq!(outcome, Outcome::success(vec![1, 4, 9]));
/// # });
/// ```
pub async fn aggregate_spawned_with_separator<I, F, T>(
    computations: I,
    separator: &str,
) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Outcome<T>> + Send + 'static,
    T: Send + 'static,
{
    let handles: Vec<_> = computations.into_iter().map(tokio::spawn).collect();
    let joined = join_all(handles).await;

    let outcomes = joined
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(outcome) => outcome,
            Err(error) if error.is_panic() => std::panic::resume_unwind(error.into_panic()),
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(index, "spawned computation was cancelled");
                Outcome::failure(format!("computation {index} was cancelled"))
            }
        });

    aggregate_with_separator(outcomes, separator)
}
