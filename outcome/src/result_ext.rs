//! Extensions for lifting `Result` values into outcomes.
//!
//! These helpers let code built on `?` hand its results to callers that
//! branch on outcomes instead.
//!
//! - Use [`OutcomeResultExt::into_outcome`] for any `Result<T, E>` whose
//!   error implements [`Display`](fmt::Display); the error text becomes the
//!   single failure message.
//! - `Result<(), E>` converts into a plain [`Outcome`] through [`From`].
//!
//! An [`OutcomeError`](crate::OutcomeError) keeps all of its messages when
//! converted with [`From`] instead of `into_outcome`.
//!
//! # Examples
//!
//! ```
//! use outcome::{Outcome, OutcomeResultExt};
//!
//! let parsed = "8080".parse::<u16>().into_outcome();
//! assert_eq!(parsed.value(), Some(&8080));
//!
//! let rejected = "http".parse::<u16>().into_outcome();
//! assert_eq!(rejected.error(), Some("invalid digit found in string"));
//!
//! let written = Outcome::from(Err::<(), _>("read-only file system"));
//! assert_eq!(written.error(), Some("read-only file system"));
//! ```

use std::fmt;

use crate::{Outcome, ValueOutcome};

/// Generic extension for turning any `Result<T, E>` with `E: Display` into a
/// [`ValueOutcome<T>`].
pub trait OutcomeResultExt<T, E> {
    /// Convert `Ok(value)` into a success holding `value` and `Err(e)` into a
    /// failure whose only message is `e.to_string()`.
    fn into_outcome(self) -> ValueOutcome<T>;
}

impl<T, E> OutcomeResultExt<T, E> for Result<T, E>
where
    E: fmt::Display,
{
    fn into_outcome(self) -> ValueOutcome<T> {
        match self {
            Ok(value) => ValueOutcome::succeed_with(value),
            Err(err) => ValueOutcome::fail_with(err.to_string()),
        }
    }
}

impl<E> From<Result<(), E>> for Outcome
where
    E: fmt::Display,
{
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::succeed(),
            Err(err) => Self::fail_with(err.to_string()),
        }
    }
}
