//! The future returned by the single-outcome adapters.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::future::FusedFuture;
use pin_project_lite::pin_project;

pin_project! {
    /// Future that resolves an inner deferred outcome, then applies a
    /// synchronous combinator to it.
    ///
    /// Returned by [`match_async`](super::match_async),
    /// [`match_void_async`](super::match_void_async),
    /// [`bind_async`](super::bind_async) and [`map_async`](super::map_async).
    /// The combinator runs exactly once, on the poll that sees the inner
    /// future complete.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct MapOutcome<Fut, F> {
        #[pin]
        future: Fut,
        function: Option<F>,
    }
}

impl<Fut, F> MapOutcome<Fut, F> {
    pub(crate) const fn new(future: Fut, function: F) -> Self {
        Self {
            future,
            function: Some(function),
        }
    }
}

impl<Fut, F, U> Future for MapOutcome<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> U,
{
    type Output = U;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let output = ready!(this.future.poll(context));
        // INVARIANT: the function is taken only on the poll that completes the future
        let function = this.function.take().expect(
            "MapOutcome internal error: polled after completion. \
             This indicates the future was polled again after returning Ready.",
        );
        Poll::Ready(function(output))
    }
}

impl<Fut, F, U> FusedFuture for MapOutcome<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> U,
{
    fn is_terminated(&self) -> bool {
        self.function.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Outcome;
    use futures::future::{self, FutureExt};
    use rstest::rstest;

    #[rstest]
    fn test_map_outcome_applies_function_once_ready() {
        let mut mapped = MapOutcome::new(
            future::ready(Outcome::success(2)),
            |outcome: Outcome<i32>| outcome.map(|value| value * 3),
        );
        assert!(!mapped.is_terminated());
        assert_eq!((&mut mapped).now_or_never(), Some(Outcome::success(6)));
        assert!(mapped.is_terminated());
    }

    #[rstest]
    fn test_map_outcome_pending_does_not_run_function() {
        let mut calls = 0;
        let mut mapped = MapOutcome::new(
            future::pending::<Outcome<i32>>(),
            |outcome: Outcome<i32>| {
                calls += 1;
                outcome
            },
        );
        assert_eq!((&mut mapped).now_or_never(), None);
        assert!(!mapped.is_terminated());
        drop(mapped);
        assert_eq!(calls, 0);
    }
}
