//! Explicit conversions between `Maybe` and `Outcome`.
//!
//! Neither type is a subtype of the other. Going from `Maybe` to `Outcome`
//! needs a message for the absent case; going back discards the message.

use super::maybe::Maybe;
use super::outcome::Outcome;

impl<T> Maybe<T> {
    /// Converts into an `Outcome`, producing the failure message lazily.
    ///
    /// `on_none` runs only when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::control::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::some(1).into_outcome(|| "missing"), Outcome::success(1));
    /// assert_eq!(Maybe::<i32>::none().into_outcome(|| "missing"), Outcome::failure("missing"));
    /// ```
    #[inline]
    pub fn into_outcome<M, F>(self, on_none: F) -> Outcome<T>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        self.match_with(Outcome::success, || Outcome::failure(on_none()))
    }
}

impl<T> Outcome<T> {
    /// Converts into a `Maybe`, discarding any failure message.
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        self.match_with(Maybe::some, |_| Maybe::none())
    }

    /// Converts into a standard library `Option`, discarding any failure message.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into_maybe().into_option()
    }

    /// Builds an `Outcome` from an `Option` with a ready-made message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::control::Outcome;
    ///
    /// assert_eq!(Outcome::of_optional(Some(42), "e"), Outcome::success(42));
    /// assert_eq!(Outcome::<i32>::of_optional(None, "e"), Outcome::failure("e"));
    /// ```
    #[inline]
    pub fn of_optional(optional: Option<T>, on_absent: impl Into<String>) -> Self {
        match optional {
            Some(value) => Self::Success(value),
            None => Self::failure(on_absent),
        }
    }

    /// Builds an `Outcome` from a possibly missing value, producing the
    /// message only when the value is missing.
    #[inline]
    pub fn of_nullable<M, F>(value: Option<T>, on_null: F) -> Self
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        Self::of_maybe(Maybe::from_nullable(value), on_null)
    }

    /// Builds an `Outcome` from a `Maybe`; same as [`Maybe::into_outcome`].
    #[inline]
    pub fn of_maybe<M, F>(maybe: Maybe<T>, on_none: F) -> Self
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        maybe.into_outcome(on_none)
    }
}
