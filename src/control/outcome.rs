//! Outcome type - a success carrying a value or a failure carrying a message.
//!
//! `Outcome<T>` is the library's fallible container. A `Failure` holds a
//! human-readable message and is plain data: it is never raised, only passed
//! along. Chaining with [`Outcome::bind`] stops at the first failure, while
//! the batch operations in [`crate::aggregate`] keep going and report every
//! failure at once.
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::control::Outcome;
//!
//! fn parse(text: &str) -> Outcome<i32> {
//!     text.parse::<i32>().into()
//! }
//!
//! fn positive(number: i32) -> Outcome<i32> {
//!     if number > 0 {
//!         Outcome::success(number)
//!     } else {
//!         Outcome::failure(format!("{number} is not positive"))
//!     }
//! }
//!
//! assert_eq!(parse("21").bind(positive).map(|n| n * 2), Outcome::success(42));
//! assert_eq!(parse("-1").bind(positive), Outcome::failure("-1 is not positive"));
//! ```

use super::error::{GetErrorOrThrowError, GetValueOrThrowError};

/// The result of a computation that either succeeded with a value or
/// failed with a message.
///
/// # Laws
///
/// `Outcome` satisfies the functor and monad laws, with `success` as `pure`:
///
/// ```text
/// Outcome::success(v).map(|x| x) == Outcome::success(v)
/// outcome.map(f).map(g) == outcome.map(|x| g(f(x)))
/// Outcome::success(v).bind(f) == f(v)
/// Outcome::failure(m).bind(f) == Outcome::failure(m)   // f is never called
/// ```
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::control::Outcome;
///
/// let ok: Outcome<i32> = Outcome::success(1);
/// let failed: Outcome<i32> = Outcome::failure("boom");
///
/// assert_eq!(ok.get_error_or_default(), "");
/// assert_eq!(failed.get_error_or_default(), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed; the message explains why.
    Failure(String),
}

impl<T> Outcome<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Wraps a successful value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure with the given message.
    #[inline]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the value of a `Success`; a failure message is cloned.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(message) => Outcome::Failure(message.clone()),
        }
    }

    /// Returns the failure message without consuming the outcome.
    #[inline]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Dispatches to exactly one of the two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::control::Outcome;
    ///
    /// let text = Outcome::success(3).match_with(|n| n.to_string(), |message| message);
    /// assert_eq!(text, "3");
    ///
    /// let text = Outcome::<i32>::failure("bad").match_with(|n| n.to_string(), |message| message);
    /// assert_eq!(text, "bad");
    /// ```
    #[inline]
    pub fn match_with<U, S, F>(self, when_success: S, when_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(String) -> U,
    {
        match self {
            Self::Success(value) => when_success(value),
            Self::Failure(message) => when_failure(message),
        }
    }

    /// Dispatches to exactly one of two side-effecting functions.
    #[inline]
    pub fn match_void<S, F>(self, when_success: S, when_failure: F)
    where
        S: FnOnce(T),
        F: FnOnce(String),
    {
        match self {
            Self::Success(value) => when_success(value),
            Self::Failure(message) => when_failure(message),
        }
    }

    /// Runs `when_success` on the value of a `Success`; does nothing on failure.
    #[inline]
    pub fn if_success<S>(self, when_success: S)
    where
        S: FnOnce(T),
    {
        if let Self::Success(value) = self {
            when_success(value);
        }
    }

    /// Runs `when_failure` on the message of a `Failure`; does nothing on success.
    #[inline]
    pub fn if_failure<F>(self, when_failure: F)
    where
        F: FnOnce(String),
    {
        if let Self::Failure(message) = self {
            when_failure(message);
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Chains a computation that may itself fail.
    ///
    /// On `Failure`, `binder` is not called and the same message is carried
    /// into the returned `Outcome<U>`. Panics raised by `binder` are not
    /// caught.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::control::Outcome;
    ///
    /// let reciprocal = |n: f64| {
    ///     if n == 0.0 { Outcome::failure("division by zero") } else { Outcome::success(1.0 / n) }
    /// };
    ///
    /// assert_eq!(Outcome::success(4.0).bind(reciprocal), Outcome::success(0.25));
    /// assert_eq!(Outcome::success(0.0).bind(reciprocal), Outcome::failure("division by zero"));
    /// assert_eq!(Outcome::failure("earlier").bind(reciprocal), Outcome::failure("earlier"));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, binder: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => binder(value),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Transforms the value of a `Success`.
    ///
    /// Only the returned value is wrapped; a panic inside `mapper` propagates
    /// to the caller instead of becoming a `Failure`.
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|value| Outcome::success(mapper(value)))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value, or `default` on failure.
    #[inline]
    pub fn get_value_or_default(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value, or computes one from the failure message.
    #[inline]
    pub fn get_value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(String) -> T,
    {
        self.match_with(|value| value, fallback)
    }

    /// Returns the failure message, or an empty string on success.
    #[inline]
    pub fn get_error_or_default(self) -> String {
        match self {
            Self::Success(_) => String::new(),
            Self::Failure(message) => message,
        }
    }

    /// Returns the value of a `Success`.
    ///
    /// # Errors
    ///
    /// Returns [`GetValueOrThrowError`] carrying the failure message when
    /// called on a `Failure`.
    #[inline]
    pub fn get_value_or_throw(self) -> Result<T, GetValueOrThrowError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(GetValueOrThrowError::new(message)),
        }
    }

    /// Returns the message of a `Failure`.
    ///
    /// # Errors
    ///
    /// Returns [`GetErrorOrThrowError`] when called on a `Success`. The error
    /// never contains the wrapped value.
    #[inline]
    pub fn get_error_or_throw(self) -> Result<String, GetErrorOrThrowError> {
        match self {
            Self::Success(_) => Err(GetErrorOrThrowError),
            Self::Failure(message) => Ok(message),
        }
    }

    /// Converts into a standard library `Result` with the message as error.
    #[inline]
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(message),
        }
    }

    /// Builds an `Outcome` from any standard library `Result`, rendering the
    /// error with its `Display` implementation.
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: std::fmt::Display,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.to_string()),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: std::fmt::Display,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

static_assertions::assert_impl_all!(Outcome<i32>: Send, Sync);
static_assertions::assert_impl_all!(Outcome<Vec<String>>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_success_construction() {
        let outcome = Outcome::success(42);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
    }

    #[rstest]
    fn test_failure_construction() {
        let outcome: Outcome<i32> = Outcome::failure("e");
        assert!(outcome.is_failure());
        assert_eq!(outcome.error(), Some("e"));
    }

    #[rstest]
    fn test_bind_on_failure_keeps_message_and_skips_binder() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32> = Outcome::failure("first");
        let bound: Outcome<String> = outcome.bind(|value| {
            calls.set(calls.get() + 1);
            Outcome::success(value.to_string())
        });
        assert_eq!(bound, Outcome::failure("first"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_bind_failure_on_success() {
        let bound: Outcome<i32> = Outcome::success(42).bind(|_| Outcome::failure("e"));
        assert_eq!(bound, Outcome::failure("e"));
    }

    #[rstest]
    #[should_panic(expected = "mapper exploded")]
    fn test_map_does_not_catch_panics() {
        let _ = Outcome::success(1).map(|_: i32| -> i32 { panic!("mapper exploded") });
    }

    #[rstest]
    #[case(Outcome::success(42), 42)]
    #[case(Outcome::failure("e"), 0)]
    fn test_get_value_or_default(#[case] outcome: Outcome<i32>, #[case] expected: i32) {
        assert_eq!(outcome.get_value_or_default(0), expected);
    }

    #[rstest]
    fn test_get_value_or_else_receives_message() {
        let outcome: Outcome<usize> = Outcome::failure("four");
        assert_eq!(outcome.get_value_or_else(|message| message.len()), 4);
    }

    #[rstest]
    fn test_strict_accessors() {
        assert_eq!(Outcome::success(1).get_value_or_throw(), Ok(1));
        assert_eq!(
            Outcome::<i32>::failure("e").get_value_or_throw(),
            Err(GetValueOrThrowError::new("e"))
        );
        assert_eq!(
            Outcome::<i32>::failure("e").get_error_or_throw(),
            Ok("e".to_string())
        );
        assert_eq!(
            Outcome::success(1).get_error_or_throw(),
            Err(GetErrorOrThrowError)
        );
    }

    #[rstest]
    fn test_if_success_and_if_failure() {
        let mut log = Vec::new();
        Outcome::success(1).if_success(|value| log.push(format!("value {value}")));
        Outcome::<i32>::failure("m").if_success(|value| log.push(format!("value {value}")));
        Outcome::<i32>::failure("m").if_failure(|message| log.push(format!("error {message}")));
        Outcome::success(2).if_failure(|message| log.push(format!("error {message}")));
        assert_eq!(log, vec!["value 1".to_string(), "error m".to_string()]);
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let outcome: Outcome<i32> = "12".parse::<i32>().into();
        assert_eq!(outcome, Outcome::success(12));

        let outcome: Outcome<i32> = "x".parse::<i32>().into();
        assert_eq!(outcome, Outcome::failure("invalid digit found in string"));

        let result: Result<i32, String> = Outcome::<i32>::failure("e").into();
        assert_eq!(result, Err("e".to_string()));
    }

    #[rstest]
    fn test_as_ref_does_not_consume() {
        let outcome = Outcome::success(vec![1, 2, 3]);
        assert_eq!(outcome.as_ref().map(Vec::len), Outcome::success(3));
        assert_eq!(outcome, Outcome::success(vec![1, 2, 3]));
    }
}
