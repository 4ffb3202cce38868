//! Explicit success and failure values for expected failure paths.
//!
//! An outcome is built once by a factory function and then read. It records
//! whether the operation succeeded and, when it did not, the error messages
//! that describe why. Two shapes share the same capability set through the
//! [`Verdict`] trait:
//!
//! - [`Outcome`] carries only the status and its messages.
//! - [`ValueOutcome`] additionally carries an optional value of any type.
//!
//! ```
//! use outcome::{Outcome, ValueOutcome};
//!
//! let saved = Outcome::succeed();
//! assert!(saved.is_successful());
//!
//! let parsed: ValueOutcome<u16> = ValueOutcome::fail_many(["bad port", "out of range"]);
//! assert!(parsed.is_failed());
//! assert_eq!(parsed.error(), Some("bad port"));
//! assert_eq!(parsed.value(), None);
//! ```
//!
//! Outcomes convert into [`Result`] through `into_result`, yielding an
//! [`OutcomeError`] on failure, and [`OutcomeResultExt`] lifts an ordinary
//! `Result` back into a [`ValueOutcome`].

mod error;
mod messages;
mod outcome;
mod result_ext;
mod verdict;

pub use error::{FailureMessages, OutcomeError};
pub use messages::IntoMessages;
pub use outcome::{Outcome, ValueOutcome};
pub use result_ext::OutcomeResultExt;
pub use verdict::Verdict;
