//! Ordered collection of failure messages and its numbered rendering.

use std::fmt;

/// Messages carried by an [`OutcomeError::Aggregate`](super::OutcomeError::Aggregate).
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, OutcomeError};
///
/// let err = Outcome::fail_many(["port missing", "host missing"])
///     .into_result()
///     .unwrap_err();
/// if let OutcomeError::Aggregate(messages) = err {
///     assert_eq!(messages.len(), 2);
///     assert_eq!(messages.to_string(), "1: port missing\n2: host missing");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureMessages(Vec<String>);

impl FailureMessages {
    /// Create a collection from messages in reporting order.
    #[must_use]
    pub const fn new(messages: Vec<String>) -> Self {
        Self(messages)
    }

    /// Iterate over the messages.
    #[must_use = "iterators should be consumed to inspect messages"]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Borrow the messages as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[String] {
        self.0.as_slice()
    }

    /// Number of messages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection holds no messages.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Writes `1: first`, `2: second`, ... separated by newlines.
pub(crate) fn write_numbered(f: &mut fmt::Formatter<'_>, messages: &[String]) -> fmt::Result {
    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "{}: {message}", i + 1)?;
    }
    Ok(())
}

impl fmt::Display for FailureMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_numbered(f, &self.0)
    }
}

impl<'a> IntoIterator for &'a FailureMessages {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for FailureMessages {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
