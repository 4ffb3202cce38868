//! Value-less outcome.

use crate::{IntoMessages, OutcomeError, Verdict};

/// Success or failure of an operation that produces no value.
///
/// Instances are built only through the factory functions and never change
/// afterwards. The success flag is fixed by the factory; the error list is
/// diagnostic payload and does not influence it.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// let outcome = Outcome::fail_many(vec!["a", "b"]);
/// assert!(outcome.is_failed());
/// assert_eq!(outcome.error(), Some("a"));
/// assert_eq!(outcome.errors().get(1).map(String::as_str), Some("b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an outcome reports whether the operation succeeded"]
pub struct Outcome {
    successful: bool,
    errors: Vec<String>,
}

impl Outcome {
    /// A successful outcome with no errors.
    pub const fn succeed() -> Self {
        Self {
            successful: true,
            errors: Vec::new(),
        }
    }

    /// A failed outcome with no errors.
    pub const fn fail() -> Self {
        Self {
            successful: false,
            errors: Vec::new(),
        }
    }

    /// A failed outcome carrying a single message.
    ///
    /// An empty message is kept as an entry of its own.
    pub fn fail_with(message: impl Into<String>) -> Self {
        Self::failed(vec![message.into()])
    }

    /// A failed outcome carrying every supplied message in order.
    ///
    /// An absent collection (`None`) yields an empty error list.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let outcome = Outcome::fail_many(None::<Vec<String>>);
    /// assert!(outcome.is_failed());
    /// assert!(outcome.errors().is_empty());
    /// ```
    pub fn fail_many(messages: impl IntoMessages) -> Self {
        Self::failed(messages.into_messages())
    }

    pub(crate) fn failed(errors: Vec<String>) -> Self {
        tracing::trace!(errors = errors.len(), "constructed failed outcome");
        Self {
            successful: false,
            errors,
        }
    }

    /// Whether a success factory built this outcome.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        self.successful
    }

    /// Whether a failure factory built this outcome.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.successful
    }

    /// Error messages in insertion order; empty for successes.
    #[must_use]
    pub const fn errors(&self) -> &[String] {
        self.errors.as_slice()
    }

    /// The first error message, if there is one.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    /// Converts the outcome into a [`Result`] so it can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns an [`OutcomeError`] holding the error messages when the
    /// outcome is a failure.
    pub fn into_result(self) -> Result<(), OutcomeError> {
        if self.successful {
            return Ok(());
        }
        tracing::debug!(
            errors = self.errors.len(),
            "failed outcome surfaced as error"
        );
        Err(OutcomeError::from_messages(self.errors))
    }
}

impl Verdict for Outcome {
    fn is_successful(&self) -> bool {
        self.successful
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl From<OutcomeError> for Outcome {
    fn from(err: OutcomeError) -> Self {
        Self::failed(err.into_messages())
    }
}
