//! Accumulating aggregation of outcome sequences.

use crate::control::Outcome;

use super::choose::choose;

/// Separator placed between failure messages when none is given.
pub const DEFAULT_ERROR_SEPARATOR: &str = ", ";

/// Combines a sequence of outcomes into one, using
/// [`DEFAULT_ERROR_SEPARATOR`] between failure messages.
///
/// See [`aggregate_with_separator`] for the full contract.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::aggregate::aggregate;
/// use lambars_outcome::control::Outcome;
///
/// assert_eq!(
///     aggregate(vec![Outcome::success(1), Outcome::success(2), Outcome::success(3)]),
///     Outcome::success(vec![1, 2, 3])
/// );
/// assert_eq!(
///     aggregate(vec![Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]),
///     Outcome::failure("a, b")
/// );
/// ```
pub fn aggregate<I, T>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    aggregate_with_separator(outcomes, DEFAULT_ERROR_SEPARATOR)
}

/// Combines a sequence of outcomes into one.
///
/// The sequence is consumed exactly once and to the end, even after a
/// failure. If every element succeeded, the result is a `Success` holding
/// the values in input order. Otherwise it is a single `Failure` whose
/// message joins every failure message, in input order, with `separator`.
///
/// Messages are accumulated with a separator in front of each one, and only
/// the first occurrence of `separator` in the accumulated text is removed.
/// This is not a trim: a first message that itself begins with the separator
/// text keeps that prefix.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::aggregate::aggregate_with_separator;
/// use lambars_outcome::control::Outcome;
///
/// let outcomes = vec![Outcome::<i32>::failure("name is empty"), Outcome::failure("age is negative")];
/// assert_eq!(
///     aggregate_with_separator(outcomes, "; "),
///     Outcome::failure("name is empty; age is negative")
/// );
/// ```
pub fn aggregate_with_separator<I, T>(outcomes: I, separator: &str) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    accumulate(outcomes, separator)
}

/// Shared implementation of `aggregate` and `FromIterator`, generic over the
/// collection the success values are gathered into.
pub(crate) fn accumulate<I, T, C>(outcomes: I, separator: &str) -> Outcome<C>
where
    I: IntoIterator<Item = Outcome<T>>,
    C: FromIterator<T>,
{
    let mut messages = String::new();
    let mut failure_count = 0_usize;

    let values: C = choose(outcomes, |message| {
        failure_count += 1;
        messages.push_str(separator);
        messages.push_str(&message);
    })
    .filter_map(Outcome::into_option)
    .collect();

    if failure_count == 0 {
        return Outcome::Success(values);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        failure_count,
        separator,
        "aggregated outcomes contain failures"
    );

    Outcome::Failure(messages.replacen(separator, "", 1))
}

// =============================================================================
// FromIterator Implementation
// =============================================================================

impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    /// Collects outcomes with [`aggregate`] semantics: every element is
    /// visited and every failure message is reported, joined by
    /// [`DEFAULT_ERROR_SEPARATOR`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::control::Outcome;
    ///
    /// let parsed: Outcome<Vec<i32>> = ["1", "x", "3", "y"]
    ///     .iter()
    ///     .map(|text| Outcome::from_result(text.parse::<i32>()))
    ///     .collect();
    /// assert_eq!(
    ///     parsed,
    ///     Outcome::failure("invalid digit found in string, invalid digit found in string")
    /// );
    /// ```
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(outcomes: I) -> Self {
        accumulate(outcomes, DEFAULT_ERROR_SEPARATOR)
    }
}
