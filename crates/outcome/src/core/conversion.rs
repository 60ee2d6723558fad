//! Conversions between [`Outcome`] and the std `Result`/`Option` types
//!
//! `Outcome<T, E>` and `Result<T, E>` carry the same information, so the
//! conversions in both directions are lossless.

use crate::core::outcome::Outcome;

// =============================================================================
// std Result
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> Outcome<T, E> {
    /// Convert into a std `Result`, e.g. to use `?` in a std-returning function
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

// =============================================================================
// Collecting
// =============================================================================

/// Collect an iterator of outcomes, stopping at the first `Err`
///
/// ```rust
/// use outcome::Outcome;
///
/// let all: Outcome<Vec<u8>, &str> = vec![Outcome::Ok(1), Outcome::Ok(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Ok(vec![1, 2]));
///
/// let first_bad: Outcome<Vec<u8>, &str> =
///     vec![Outcome::Ok(1), Outcome::Err("a"), Outcome::Err("b")].into_iter().collect();
/// assert_eq!(first_bad, Outcome::Err("a"));
/// ```
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected = iter
            .into_iter()
            .map_while(|item| match item {
                Outcome::Ok(value) => Some(value),
                Outcome::Err(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Self::Err(error),
            None => Self::Ok(collected),
        }
    }
}
