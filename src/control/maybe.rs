//! Maybe type - a value that is either present or absent.
//!
//! This module provides the `Maybe<T>` type, which is either `Some(T)` or
//! `None`. Unlike the standard library's `Option`, it exposes the closed
//! combinator vocabulary shared with [`Outcome`](super::Outcome):
//! `match_with`, `bind`, `map`, and the strict accessors.
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::control::Maybe;
//!
//! let port = Maybe::some("8080")
//!     .bind(|text| Maybe::from_nullable(text.parse::<u16>().ok()))
//!     .map(|port| port + 1);
//! assert_eq!(port, Maybe::some(8081));
//!
//! let described = Maybe::<u16>::none().match_with(|port| port.to_string(), || "none".into());
//! assert_eq!(described, "none");
//! ```

use std::any::type_name;

use super::error::GetValueOrThrowError;

/// A value that is either present (`Some`) or absent (`None`).
///
/// Ordering matches `Option`: `None` sorts before every `Some`.
///
/// # Type Parameters
///
/// * `T` - The type of the present value
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::control::Maybe;
///
/// let present = Maybe::some(3);
/// let absent: Maybe<i32> = Maybe::none();
///
/// assert_eq!(present.get_value_or_default(0), 3);
/// assert_eq!(absent.get_value_or_default(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    #[default]
    None,
    /// A present value.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a `Maybe` from a value that may be missing.
    ///
    /// `Option::None` plays the role of the null sentinel and yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(1)), Maybe::some(1));
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::none());
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        value.map_or(Self::None, Self::Some)
    }

    /// Creates a `Maybe` from a standard library `Option`.
    ///
    /// Identical to [`from_nullable`](Self::from_nullable); kept for callers
    /// that think of the input as an optional rather than a nullable value.
    #[inline]
    pub fn from_optional(optional: Option<T>) -> Self {
        Self::from_nullable(optional)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
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
    /// use lambars_outcome::control::Maybe;
    ///
    /// let length = Maybe::some("hello").match_with(str::len, || 0);
    /// assert_eq!(length, 5);
    /// ```
    #[inline]
    pub fn match_with<U, S, N>(self, when_some: S, when_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => when_some(value),
            Self::None => when_none(),
        }
    }

    /// Dispatches to exactly one of two side-effecting functions.
    #[inline]
    pub fn match_void<S, N>(self, when_some: S, when_none: N)
    where
        S: FnOnce(T),
        N: FnOnce(),
    {
        match self {
            Self::Some(value) => when_some(value),
            Self::None => when_none(),
        }
    }

    /// Runs `when_some` on the value if present; does nothing otherwise.
    #[inline]
    pub fn if_some<S>(self, when_some: S)
    where
        S: FnOnce(T),
    {
        if let Self::Some(value) = self {
            when_some(value);
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Chains a computation that may itself produce no value.
    ///
    /// `binder` is called at most once, and never on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::control::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).bind(half), Maybe::some(4));
    /// assert_eq!(Maybe::some(3).bind(half), Maybe::none());
    /// assert_eq!(Maybe::none().bind(half), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, binder: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.match_with(binder, Maybe::none)
    }

    /// Transforms the value if present.
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|value| Maybe::some(mapper(value)))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value, or `default` if absent.
    #[inline]
    pub fn get_value_or_default(self, default: T) -> T {
        self.match_with(|value| value, || default)
    }

    /// Returns the value, or computes one if absent.
    #[inline]
    pub fn get_value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.match_with(|value| value, fallback)
    }

    /// Returns the value, or an error naming the absent type.
    ///
    /// # Errors
    ///
    /// Returns [`GetValueOrThrowError`] when called on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).get_value_or_throw(), Ok(1));
    ///
    /// let error = Maybe::<i32>::none().get_value_or_throw().unwrap_err();
    /// assert!(error.message().contains("Maybe<i32>"));
    /// ```
    pub fn get_value_or_throw(self) -> Result<T, GetValueOrThrowError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(GetValueOrThrowError::new(format!(
                "cannot get value from '{}'",
                type_name::<Self>()
            ))),
        }
    }

    /// Converts into a standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// `None` at either level yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    /// assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
    /// assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_nullable(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
