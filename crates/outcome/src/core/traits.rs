//! Extension traits bringing std types into [`Outcome`] chains

use crate::core::outcome::Outcome;

/// Convert a std `Result` into an [`Outcome`] at the end of a method chain
pub trait IntoOutcome<T, E> {
    /// Convert into an [`Outcome`]
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

/// Method forms of [`Outcome::from_option`] and [`Outcome::from_option_else`]
///
/// ```rust
/// use outcome::{OptionOutcomeExt, Outcome};
///
/// let ports = [("http", 80), ("https", 443)];
/// let lookup = |name: &str| ports.iter().find(|(n, _)| *n == name).map(|(_, p)| *p);
///
/// assert_eq!(lookup("https").present_or("unknown scheme"), Outcome::Ok(443));
/// assert_eq!(lookup("gopher").present_or("unknown scheme"), Outcome::Err("unknown scheme"));
/// ```
pub trait OptionOutcomeExt<T> {
    /// `Ok(value)` if present, otherwise `Err(error)`
    fn present_or<E>(self, error: E) -> Outcome<T, E>;

    /// `Ok(value)` if present, otherwise `Err(f())`; `f` runs only when absent
    fn present_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E;
}

impl<T> OptionOutcomeExt<T> for Option<T> {
    #[inline]
    fn present_or<E>(self, error: E) -> Outcome<T, E> {
        Outcome::from_option(self, error)
    }

    #[inline]
    fn present_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        Outcome::from_option_else(self, f)
    }
}
