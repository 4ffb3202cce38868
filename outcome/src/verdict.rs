//! Capability set shared by every outcome shape.

/// Read-only view over the status of an outcome.
///
/// Implemented by [`Outcome`](crate::Outcome) and
/// [`ValueOutcome`](crate::ValueOutcome) so callers can inspect either shape
/// generically, including through `&dyn Verdict`.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, ValueOutcome, Verdict};
///
/// fn first_problem(verdict: &dyn Verdict) -> Option<&str> {
///     verdict.is_failed().then(|| verdict.error()).flatten()
/// }
///
/// assert_eq!(first_problem(&Outcome::fail_with("disk full")), Some("disk full"));
/// assert_eq!(first_problem(&ValueOutcome::succeed_with(3_u8)), None);
/// ```
pub trait Verdict {
    /// Whether the outcome was built by a success factory.
    fn is_successful(&self) -> bool;

    /// Error messages in the order they were supplied.
    fn errors(&self) -> &[String];

    /// Exact logical complement of [`Verdict::is_successful`].
    fn is_failed(&self) -> bool {
        !self.is_successful()
    }

    /// The first error message, if any.
    fn error(&self) -> Option<&str> {
        self.errors().first().map(String::as_str)
    }
}
