//! Outcome carrying an optional value.

use crate::{IntoMessages, Outcome, OutcomeError, Verdict};

/// Success or failure of an operation that may produce a value of type `T`.
///
/// A value is present only when a success factory was handed one. A success
/// without a value is legitimate; a failure never has one.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use outcome::ValueOutcome;
///
/// let client = Arc::new(String::from("acme"));
/// let outcome = ValueOutcome::succeed_with(Arc::clone(&client));
/// assert!(outcome.is_successful());
/// assert!(outcome.value().is_some_and(|found| Arc::ptr_eq(found, &client)));
///
/// let missing: ValueOutcome<Arc<String>> = ValueOutcome::fail_with("not found");
/// assert_eq!(missing.error(), Some("not found"));
/// assert!(missing.value().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an outcome reports whether the operation succeeded"]
pub struct ValueOutcome<T> {
    status: Outcome,
    value: Option<T>,
}

impl<T> ValueOutcome<T> {
    /// A successful outcome without a value.
    pub const fn succeed() -> Self {
        Self {
            status: Outcome::succeed(),
            value: None,
        }
    }

    /// A successful outcome holding `value`.
    pub const fn succeed_with(value: T) -> Self {
        Self::succeed_optional(Some(value))
    }

    /// A successful outcome holding whatever `value` contains.
    ///
    /// `None` still produces a success; success does not require a value.
    pub const fn succeed_optional(value: Option<T>) -> Self {
        Self {
            status: Outcome::succeed(),
            value,
        }
    }

    /// A failed outcome with no errors.
    pub const fn fail() -> Self {
        Self {
            status: Outcome::fail(),
            value: None,
        }
    }

    /// A failed outcome carrying a single message.
    pub fn fail_with(message: impl Into<String>) -> Self {
        Outcome::fail_with(message).into()
    }

    /// A failed outcome carrying every supplied message in order.
    ///
    /// An absent collection (`None`) yields an empty error list.
    pub fn fail_many(messages: impl IntoMessages) -> Self {
        Outcome::fail_many(messages).into()
    }

    /// Whether a success factory built this outcome.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        self.status.is_successful()
    }

    /// Whether a failure factory built this outcome.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.status.is_failed()
    }

    /// Error messages in insertion order; empty for successes.
    #[must_use]
    pub const fn errors(&self) -> &[String] {
        self.status.errors()
    }

    /// The first error message, if there is one.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }

    /// Borrow the value, if one was supplied.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The status without the value.
    #[must_use]
    pub const fn status(&self) -> &Outcome {
        &self.status
    }

    /// Take the value, discarding the status.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Split into the status and the value.
    #[must_use]
    pub fn into_parts(self) -> (Outcome, Option<T>) {
        (self.status, self.value)
    }

    /// Converts the outcome into a [`Result`] so it can be propagated with `?`.
    ///
    /// ```
    /// use outcome::{OutcomeError, ValueOutcome};
    ///
    /// fn port() -> Result<u16, OutcomeError> {
    ///     let parsed = ValueOutcome::succeed_with(8080_u16).into_result()?;
    ///     Ok(parsed.unwrap_or(80))
    /// }
    /// assert_eq!(port().ok(), Some(8080));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an [`OutcomeError`] holding the error messages when the
    /// outcome is a failure.
    pub fn into_result(self) -> Result<Option<T>, OutcomeError> {
        let (status, value) = self.into_parts();
        status.into_result().map(|()| value)
    }
}

impl<T> Verdict for ValueOutcome<T> {
    fn is_successful(&self) -> bool {
        self.status.is_successful()
    }

    fn errors(&self) -> &[String] {
        self.status.errors()
    }
}

impl<T> From<Outcome> for ValueOutcome<T> {
    fn from(status: Outcome) -> Self {
        Self {
            status,
            value: None,
        }
    }
}

impl<T> From<OutcomeError> for ValueOutcome<T> {
    fn from(err: OutcomeError) -> Self {
        Outcome::from(err).into()
    }
}
