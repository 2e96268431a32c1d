//! Method-call syntax for the aggregation functions.

use crate::control::Outcome;

use super::choose::{Choose, choose};
use super::collect::{DEFAULT_ERROR_SEPARATOR, aggregate_with_separator};

/// Extension methods for iterators over [`Outcome`]s.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::aggregate::OutcomeIteratorExt;
/// use lambars_outcome::control::Outcome;
///
/// let ages = ["31", "-4", "x"].into_iter().map(|text| {
///     Outcome::from_result(text.parse::<i32>()).bind(|age| {
///         if age < 0 { Outcome::failure(format!("{age} is negative")) } else { Outcome::success(age) }
///     })
/// });
///
/// assert_eq!(
///     ages.aggregate_with_separator(" | "),
///     Outcome::failure("-4 is negative | invalid digit found in string")
/// );
/// ```
pub trait OutcomeIteratorExt<T>: Iterator<Item = Outcome<T>> + Sized {
    /// See [`choose`](super::choose()).
    fn choose<H>(self, error_handler: H) -> Choose<Self, H>
    where
        H: FnMut(String),
    {
        choose(self, error_handler)
    }

    /// See [`aggregate`](super::aggregate()).
    fn aggregate(self) -> Outcome<Vec<T>> {
        aggregate_with_separator(self, DEFAULT_ERROR_SEPARATOR)
    }

    /// See [`aggregate_with_separator`](super::aggregate_with_separator()).
    fn aggregate_with_separator(self, separator: &str) -> Outcome<Vec<T>> {
        aggregate_with_separator(self, separator)
    }
}

impl<I, T> OutcomeIteratorExt<T> for I where I: Iterator<Item = Outcome<T>> {}
