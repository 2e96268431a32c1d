//! Lazy filtering of an outcome sequence down to its successes.

use std::iter::FusedIterator;

use crate::control::Outcome;

/// Iterator returned by [`choose`].
///
/// Yields every `Success` of the underlying iterator unchanged and hands the
/// message of every `Failure` to the error handler before skipping it.
/// Nothing happens until the iterator is advanced.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Choose<I, H> {
    outcomes: I,
    error_handler: H,
}

impl<I, H> Choose<I, H> {
    pub(crate) const fn new(outcomes: I, error_handler: H) -> Self {
        Self {
            outcomes,
            error_handler,
        }
    }
}

impl<I, H, T> Iterator for Choose<I, H>
where
    I: Iterator<Item = Outcome<T>>,
    H: FnMut(String),
{
    type Item = Outcome<T>;

    fn next(&mut self) -> Option<Self::Item> {
        for outcome in self.outcomes.by_ref() {
            match outcome {
                Outcome::Success(_) => return Some(outcome),
                Outcome::Failure(message) => (self.error_handler)(message),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.outcomes.size_hint();
        (0, upper)
    }
}

impl<I, H, T> FusedIterator for Choose<I, H>
where
    I: FusedIterator<Item = Outcome<T>>,
    H: FnMut(String),
{
}

/// Keeps the successes of `outcomes`, reporting each failure message to
/// `error_handler` in encounter order.
///
/// The successes are yielded as `Outcome`s, not unwrapped. The handler runs
/// as the returned iterator is consumed, so a partially consumed `Choose`
/// has only reported the failures it has passed.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::aggregate::choose;
/// use lambars_outcome::control::Outcome;
///
/// let mut errors = Vec::new();
/// let kept: Vec<Outcome<i32>> = choose(
///     vec![Outcome::success(1), Outcome::failure("a"), Outcome::success(2), Outcome::failure("b")],
///     |message| errors.push(message),
/// )
/// .collect();
///
/// assert_eq!(kept, vec![Outcome::success(1), Outcome::success(2)]);
/// assert_eq!(errors, vec!["a".to_string(), "b".to_string()]);
/// ```
pub fn choose<I, T, H>(outcomes: I, error_handler: H) -> Choose<I::IntoIter, H>
where
    I: IntoIterator<Item = Outcome<T>>,
    H: FnMut(String),
{
    Choose::new(outcomes.into_iter(), error_handler)
}

/// Like [`choose`], but hands the whole failed `Outcome` to the handler.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::aggregate::choose_failures;
/// use lambars_outcome::control::Outcome;
///
/// let mut failures = Vec::new();
/// let kept = choose_failures(
///     vec![Outcome::failure("a"), Outcome::success(1)],
///     |failure: Outcome<i32>| failures.push(failure),
/// )
/// .count();
///
/// assert_eq!(kept, 1);
/// assert_eq!(failures, vec![Outcome::failure("a")]);
/// ```
pub fn choose_failures<I, T, H>(
    outcomes: I,
    mut error_handler: H,
) -> Choose<I::IntoIter, impl FnMut(String)>
where
    I: IntoIterator<Item = Outcome<T>>,
    H: FnMut(Outcome<T>),
{
    choose(outcomes, move |message| {
        error_handler(Outcome::Failure(message))
    })
}
