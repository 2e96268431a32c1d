//! Error types raised by the strict accessors of `Maybe` and `Outcome`.
//!
//! A `Failure` or a `None` is ordinary data and never surfaces as one of
//! these errors on its own. They are produced only when calling code asks
//! for a value (or a message) that the container does not hold, through
//! `get_value_or_throw` or `get_error_or_throw`.

/// Raised when a value is requested from a `Failure` or a `None`.
///
/// For an `Outcome`, the message is the failure message itself. For a
/// `Maybe`, it names the absent type.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::control::{GetValueOrThrowError, Outcome};
///
/// let outcome: Outcome<i32> = Outcome::failure("disk full");
/// let error = outcome.get_value_or_throw().unwrap_err();
/// assert_eq!(error, GetValueOrThrowError::new("disk full"));
/// assert_eq!(format!("{error}"), "disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetValueOrThrowError {
    message: String,
}

impl GetValueOrThrowError {
    /// Creates the error with the given diagnostic message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for GetValueOrThrowError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for GetValueOrThrowError {}

/// Raised when an error message is requested from a `Success`.
///
/// The message is fixed and never contains the wrapped value.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::control::{GetErrorOrThrowError, Outcome};
///
/// let outcome = Outcome::success(42);
/// assert_eq!(outcome.get_error_or_throw(), Err(GetErrorOrThrowError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetErrorOrThrowError;

impl GetErrorOrThrowError {
    /// The diagnostic carried by every `GetErrorOrThrowError`.
    pub const MESSAGE: &'static str = "Tried to get error message from a success.";
}

impl std::fmt::Display for GetErrorOrThrowError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for GetErrorOrThrowError {}

/// Any contract violation raised by a strict accessor.
///
/// Useful when a function calls both kinds of accessor and wants a single
/// error type to propagate with `?`.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::control::{AccessError, Outcome};
///
/// fn describe(outcome: Outcome<i32>) -> Result<String, AccessError> {
///     let value = outcome.get_value_or_throw()?;
///     Ok(value.to_string())
/// }
///
/// let error = describe(Outcome::failure("missing")).unwrap_err();
/// assert_eq!(format!("{error}"), "missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A value was requested from a `Failure` or a `None`.
    GetValueOrThrow(GetValueOrThrowError),
    /// An error message was requested from a `Success`.
    GetErrorOrThrow(GetErrorOrThrowError),
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GetValueOrThrow(error) => write!(formatter, "{error}"),
            Self::GetErrorOrThrow(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for AccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GetValueOrThrow(error) => Some(error),
            Self::GetErrorOrThrow(error) => Some(error),
        }
    }
}

impl From<GetValueOrThrowError> for AccessError {
    fn from(error: GetValueOrThrowError) -> Self {
        Self::GetValueOrThrow(error)
    }
}

impl From<GetErrorOrThrowError> for AccessError {
    fn from(error: GetErrorOrThrowError) -> Self {
        Self::GetErrorOrThrow(error)
    }
}
