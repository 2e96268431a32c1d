//! Batch operations over sequences of outcomes.
//!
//! Unlike [`Outcome::bind`](crate::control::Outcome::bind), which stops at
//! the first failure, the operations here visit every element and report
//! every failure:
//!
//! - [`choose`]: lazily keeps the successes, handing each failure message to
//!   a handler in encounter order
//! - [`aggregate`]: turns a sequence of outcomes into one outcome of a `Vec`,
//!   joining all failure messages when any element failed
//!
//! `Outcome<C>` also implements `FromIterator<Outcome<T>>` with `aggregate`
//! semantics, and [`OutcomeIteratorExt`] offers both operations as methods.
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::aggregate::{aggregate, choose};
//! use lambars_outcome::control::Outcome;
//!
//! fn validate(name: &str) -> Outcome<String> {
//!     if name.is_empty() {
//!         Outcome::failure("name must not be empty")
//!     } else {
//!         Outcome::success(name.to_uppercase())
//!     }
//! }
//!
//! let names = ["ada", "", "grace"];
//! assert_eq!(
//!     aggregate(names.iter().map(|name| validate(name))),
//!     Outcome::failure("name must not be empty")
//! );
//!
//! let mut rejected = 0;
//! let accepted: Vec<Outcome<String>> = choose(names.iter().map(|name| validate(name)), |_| rejected += 1).collect();
//! assert_eq!(accepted.len(), 2);
//! assert_eq!(rejected, 1);
//! ```

mod choose;
mod collect;
mod ext;

pub use choose::{Choose, choose, choose_failures};
pub use collect::{DEFAULT_ERROR_SEPARATOR, aggregate, aggregate_with_separator};
pub use ext::OutcomeIteratorExt;
