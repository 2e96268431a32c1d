//! Core containers for optional and fallible values.
//!
//! This module provides the two sum types the rest of the crate is built on:
//!
//! - [`Maybe`]: a value that is present (`Some`) or absent (`None`)
//! - [`Outcome`]: a success carrying a value or a failure carrying a message
//!
//! Both are immutable; every combinator returns a new value. Conversions
//! between them are explicit (`Maybe::into_outcome`, `Outcome::into_maybe`).
//!
//! # Examples
//!
//! ## Short-Circuiting Chains
//!
//! ```rust
//! use lambars_outcome::control::Outcome;
//!
//! let mut stages_run = 0;
//! let outcome = Outcome::<i32>::failure("validation failed")
//!     .bind(|n| { stages_run += 1; Outcome::success(n + 1) })
//!     .map(|n| n * 2);
//!
//! assert_eq!(outcome, Outcome::failure("validation failed"));
//! assert_eq!(stages_run, 0);
//! ```
//!
//! ## Converting Absence into Failure
//!
//! ```rust
//! use lambars_outcome::control::{Maybe, Outcome};
//!
//! let user = Maybe::from_nullable(None::<&str>).into_outcome(|| "user not found");
//! assert_eq!(user, Outcome::failure("user not found"));
//! ```

mod conversion;
mod error;
mod maybe;
mod outcome;

pub use error::{AccessError, GetErrorOrThrowError, GetValueOrThrowError};
pub use maybe::Maybe;
pub use outcome::Outcome;
