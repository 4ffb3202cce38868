//! Normalization of message collections accepted by `fail_many`.

/// Converts a collection of messages into the owned list stored by a failed
/// outcome.
///
/// `None` stands for an absent collection and always normalizes to an empty
/// list. Owned `String` messages are moved, never copied.
///
/// # Examples
///
/// ```
/// use outcome::IntoMessages;
///
/// assert_eq!(["a", "b"].into_messages(), vec!["a", "b"]);
/// assert!(None::<Vec<String>>.into_messages().is_empty());
/// ```
pub trait IntoMessages {
    /// Produce the ordered message list.
    fn into_messages(self) -> Vec<String>;
}

impl<S> IntoMessages for Vec<S>
where
    S: Into<String>,
{
    fn into_messages(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S, const N: usize> IntoMessages for [S; N]
where
    S: Into<String>,
{
    fn into_messages(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S> IntoMessages for &[S]
where
    S: Clone + Into<String>,
{
    fn into_messages(self) -> Vec<String> {
        self.iter().cloned().map(Into::into).collect()
    }
}

impl<M> IntoMessages for Option<M>
where
    M: IntoMessages,
{
    fn into_messages(self) -> Vec<String> {
        self.map_or_else(Vec::new, IntoMessages::into_messages)
    }
}
