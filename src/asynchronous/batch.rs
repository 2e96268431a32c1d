//! Asynchronous counterparts of `aggregate` and `choose`.

use std::future::IntoFuture;
use std::vec;

use futures::future::join_all;

use crate::aggregate::{Choose, DEFAULT_ERROR_SEPARATOR, aggregate_with_separator, choose};
use crate::control::Outcome;

/// Resolves every deferred outcome, then aggregates them with
/// [`DEFAULT_ERROR_SEPARATOR`].
///
/// See [`aggregate_async_with_separator`].
pub async fn aggregate_async<I, D, T>(deferred: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = D>,
    D: IntoFuture<Output = Outcome<T>>,
{
    aggregate_async_with_separator(deferred, DEFAULT_ERROR_SEPARATOR).await
}

/// Resolves every deferred outcome, then aggregates them.
///
/// All inputs are polled concurrently on the calling task and every one is
/// awaited, even after one of them has failed. The values and failure
/// messages are combined in input order, whatever order the inputs
/// complete in.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::asynchronous::aggregate_async_with_separator;
/// use lambars_outcome::control::Outcome;
/// use futures::future::ready;
///
/// # futures::executor::block_on(async {
/// let outcome = aggregate_async_with_separator(
///     vec![
///         ready(Outcome::<i32>::failure("first")),
///         ready(Outcome::success(2)),
///         ready(Outcome::failure("third")),
///     ],
///     " / ",
/// )
/// .await;
/// assert_eq!(outcome, Outcome::failure("first / third"));
/// # });
/// ```
pub async fn aggregate_async_with_separator<I, D, T>(
    deferred: I,
    separator: &str,
) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = D>,
    D: IntoFuture<Output = Outcome<T>>,
{
    let outcomes = join_all(deferred.into_iter().map(IntoFuture::into_future)).await;
    aggregate_with_separator(outcomes, separator)
}

/// Resolves every deferred outcome, then returns the lazy [`Choose`] over
/// them.
///
/// `error_handler` is not called while awaiting; it runs as the returned
/// iterator is consumed, in input order.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::asynchronous::choose_async;
/// use lambars_outcome::control::Outcome;
/// use futures::future::ready;
///
/// # futures::executor::block_on(async {
/// let mut errors = Vec::new();
/// let kept: Vec<_> = choose_async(
///     vec![ready(Outcome::failure("a")), ready(Outcome::success(1))],
///     |message| errors.push(message),
/// )
/// .await
/// .collect();
/// assert_eq!(kept, vec![Outcome::success(1)]);
/// assert_eq!(errors, vec!["a".to_string()]);
/// # });
/// ```
pub async fn choose_async<I, D, T, H>(
    deferred: I,
    error_handler: H,
) -> Choose<vec::IntoIter<Outcome<T>>, H>
where
    I: IntoIterator<Item = D>,
    D: IntoFuture<Output = Outcome<T>>,
    H: FnMut(String),
{
    let outcomes = join_all(deferred.into_iter().map(IntoFuture::into_future)).await;
    choose(outcomes, error_handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;
    use rstest::rstest;

    #[rstest]
    fn test_aggregate_async_all_success() {
        let outcome = block_on(aggregate_async(vec![
            ready(Outcome::success(1)),
            ready(Outcome::success(2)),
            ready(Outcome::success(3)),
        ]));
        assert_eq!(outcome, Outcome::success(vec![1, 2, 3]));
    }

    #[rstest]
    fn test_aggregate_async_empty() {
        let outcome = block_on(aggregate_async(
            Vec::<futures::future::Ready<Outcome<i32>>>::new(),
        ));
        assert_eq!(outcome, Outcome::success(Vec::new()));
    }

    #[rstest]
    fn test_choose_async_handler_runs_on_consumption() {
        let mut errors = Vec::new();
        let chosen = block_on(choose_async(
            vec![
                ready(Outcome::<i32>::failure("a")),
                ready(Outcome::failure("b")),
            ],
            |message| errors.push(message),
        ));
        assert_eq!(chosen.count(), 0);
        assert_eq!(errors, vec!["a".to_string(), "b".to_string()]);
    }
}
