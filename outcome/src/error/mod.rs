//! Error type produced when a failed outcome is surfaced as a `Result`.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::FailureMessages;
pub use types::OutcomeError;

pub(crate) use aggregate::write_numbered;
