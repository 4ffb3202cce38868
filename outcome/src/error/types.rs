//! Primary error enum for failed outcomes.

use thiserror::Error;

use super::aggregate::FailureMessages;

/// A failed outcome converted into an error value.
///
/// The variant reflects how many messages the failure carried. Build it with
/// [`OutcomeError::from_messages`] to get the matching variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OutcomeError {
    /// The operation failed without reporting a message.
    #[error("operation failed without an error message")]
    Unreported,

    /// The operation failed with exactly one message.
    #[error("operation failed: {0}")]
    Reported(String),

    /// The operation failed with several messages.
    #[error("operation failed with multiple errors:\n{0}")]
    Aggregate(Box<FailureMessages>),
}
