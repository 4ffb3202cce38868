//! Constructors and accessors for `OutcomeError`.

use std::slice;

use super::{FailureMessages, OutcomeError};

impl OutcomeError {
    /// Builds the error matching the number of messages supplied.
    ///
    /// It returns:
    /// * [`Self::Unreported`] when there are no messages;
    /// * [`Self::Reported`] for exactly one message; and
    /// * [`Self::Aggregate`] combining every message for two or more.
    ///
    /// ```
    /// use outcome::OutcomeError;
    ///
    /// assert_eq!(OutcomeError::from_messages(Vec::new()), OutcomeError::Unreported);
    /// assert_eq!(
    ///     OutcomeError::from_messages(vec!["boom".into()]),
    ///     OutcomeError::Reported("boom".into())
    /// );
    /// ```
    #[must_use]
    pub fn from_messages(mut messages: Vec<String>) -> Self {
        if messages.len() > 1 {
            return Self::Aggregate(Box::new(FailureMessages::new(messages)));
        }
        messages.pop().map_or(Self::Unreported, Self::Reported)
    }

    /// Borrow the messages in reporting order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Unreported => &[],
            Self::Reported(message) => slice::from_ref(message),
            Self::Aggregate(messages) => messages.as_slice(),
        }
    }

    /// Take ownership of the messages in reporting order.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        match self {
            Self::Unreported => Vec::new(),
            Self::Reported(message) => vec![message],
            Self::Aggregate(messages) => (*messages).into_iter().collect(),
        }
    }
}
