//! Asynchronous counterparts of the single-outcome combinators.
//!
//! Each adapter takes a deferred outcome, i.e. anything that implements
//! `IntoFuture<Output = Outcome<T>>`, and returns a future of the combined
//! result. Resolution order and failure semantics are those of the
//! synchronous combinator; the adapter only decides when the caller awaits.

use std::future::{Future, IntoFuture};

use crate::control::Outcome;

use super::future::MapOutcome;

/// Awaits `deferred`, then dispatches to exactly one of the two functions.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::asynchronous::match_async;
/// use lambars_outcome::control::Outcome;
///
/// # futures::executor::block_on(async {
/// let described = match_async(
///     async { Outcome::success(3) },
///     |value| format!("got {value}"),
///     |message| format!("failed: {message}"),
/// )
/// .await;
/// assert_eq!(described, "got 3");
/// # });
/// ```
pub fn match_async<D, T, U, S, F>(
    deferred: D,
    when_success: S,
    when_failure: F,
) -> MapOutcome<D::IntoFuture, impl FnOnce(Outcome<T>) -> U>
where
    D: IntoFuture<Output = Outcome<T>>,
    S: FnOnce(T) -> U,
    F: FnOnce(String) -> U,
{
    MapOutcome::new(deferred.into_future(), move |outcome: Outcome<T>| {
        outcome.match_with(when_success, when_failure)
    })
}

/// Awaits `deferred`, then runs exactly one of two side-effecting functions.
pub fn match_void_async<D, T, S, F>(
    deferred: D,
    when_success: S,
    when_failure: F,
) -> MapOutcome<D::IntoFuture, impl FnOnce(Outcome<T>)>
where
    D: IntoFuture<Output = Outcome<T>>,
    S: FnOnce(T),
    F: FnOnce(String),
{
    MapOutcome::new(deferred.into_future(), move |outcome: Outcome<T>| {
        outcome.match_void(when_success, when_failure);
    })
}

/// Awaits `deferred`, then binds the value with a synchronous binder.
///
/// The binder is never called when the awaited outcome is a `Failure`; the
/// failure message is carried through unchanged.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::asynchronous::bind_async;
/// use lambars_outcome::control::Outcome;
///
/// # futures::executor::block_on(async {
/// let checked = bind_async(async { Outcome::success(-2) }, |n: i32| {
///     if n < 0 { Outcome::failure("negative") } else { Outcome::success(n) }
/// })
/// .await;
/// assert_eq!(checked, Outcome::failure("negative"));
/// # });
/// ```
pub fn bind_async<D, T, U, F>(
    deferred: D,
    binder: F,
) -> MapOutcome<D::IntoFuture, impl FnOnce(Outcome<T>) -> Outcome<U>>
where
    D: IntoFuture<Output = Outcome<T>>,
    F: FnOnce(T) -> Outcome<U>,
{
    MapOutcome::new(deferred.into_future(), move |outcome: Outcome<T>| {
        outcome.bind(binder)
    })
}

/// Awaits `deferred`, then maps the value of a `Success`.
pub fn map_async<D, T, U, F>(
    deferred: D,
    mapper: F,
) -> MapOutcome<D::IntoFuture, impl FnOnce(Outcome<T>) -> Outcome<U>>
where
    D: IntoFuture<Output = Outcome<T>>,
    F: FnOnce(T) -> U,
{
    MapOutcome::new(deferred.into_future(), move |outcome: Outcome<T>| {
        outcome.map(mapper)
    })
}

/// Awaits `deferred`, then binds the value with a binder that is itself
/// deferred.
///
/// On `Failure`, the binder is neither called nor awaited.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::asynchronous::bind_deferred;
/// use lambars_outcome::control::Outcome;
///
/// async fn load(id: u32) -> Outcome<String> {
///     Outcome::success(format!("user-{id}"))
/// }
///
/// # futures::executor::block_on(async {
/// let user = bind_deferred(async { Outcome::success(7) }, load).await;
/// assert_eq!(user, Outcome::success("user-7".to_string()));
/// # });
/// ```
pub async fn bind_deferred<D, T, U, F, E>(deferred: D, binder: F) -> Outcome<U>
where
    D: IntoFuture<Output = Outcome<T>>,
    F: FnOnce(T) -> E,
    E: IntoFuture<Output = Outcome<U>>,
{
    match deferred.await {
        Outcome::Success(value) => binder(value).await,
        Outcome::Failure(message) => Outcome::Failure(message),
    }
}

/// Method-call syntax for the adapters on any future of an [`Outcome`].
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::asynchronous::OutcomeFutureExt;
/// use lambars_outcome::control::Outcome;
///
/// # futures::executor::block_on(async {
/// let length = async { Outcome::success("four".to_string()) }
///     .map_outcome(|text| text.len())
///     .bind_outcome(|length| Outcome::success(length * 2))
///     .await;
/// assert_eq!(length, Outcome::success(8));
/// # });
/// ```
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// See [`match_async`].
    fn match_outcome<U, S, F>(self, when_success: S, when_failure: F) -> impl Future<Output = U>
    where
        S: FnOnce(T) -> U,
        F: FnOnce(String) -> U,
    {
        match_async(self, when_success, when_failure)
    }

    /// See [`match_void_async`].
    fn match_void_outcome<S, F>(self, when_success: S, when_failure: F) -> impl Future<Output = ()>
    where
        S: FnOnce(T),
        F: FnOnce(String),
    {
        match_void_async(self, when_success, when_failure)
    }

    /// See [`bind_async`].
    fn bind_outcome<U, F>(self, binder: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        bind_async(self, binder)
    }

    /// See [`map_async`].
    fn map_outcome<U, F>(self, mapper: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        map_async(self, mapper)
    }
}

impl<Fut, T> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[rstest]
    fn test_bind_async_skips_binder_on_failure() {
        let calls = Cell::new(0);
        let bound = block_on(bind_async(
            future::ready(Outcome::<i32>::failure("e")),
            |value| {
                calls.set(calls.get() + 1);
                Outcome::success(value)
            },
        ));
        assert_eq!(bound, Outcome::failure("e"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_match_void_async_runs_failure_branch() {
        let seen = RefCell::new(Vec::new());
        block_on(match_void_async(
            future::ready(Outcome::<i32>::failure("e")),
            |value| seen.borrow_mut().push(value.to_string()),
            |message| seen.borrow_mut().push(message),
        ));
        assert_eq!(seen.into_inner(), vec!["e".to_string()]);
    }

    #[rstest]
    fn test_bind_deferred_does_not_create_binder_future_on_failure() {
        let calls = Cell::new(0);
        let bound = block_on(bind_deferred(
            future::ready(Outcome::<i32>::failure("e")),
            |value| {
                calls.set(calls.get() + 1);
                future::ready(Outcome::success(value))
            },
        ));
        assert_eq!(bound, Outcome::failure("e"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_extension_methods_chain() {
        let described = block_on(
            future::ready(Outcome::success(2))
                .map_outcome(|value| value + 1)
                .match_outcome(|value| value.to_string(), |message| message),
        );
        assert_eq!(described, "3");
    }
}
