//! The [`Outcome`] enum and variant inspection

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use static_assertions::assert_impl_all;

/// Either a success value (`Ok`) or a failure value (`Err`)
///
/// An `Outcome` is never modified in place. Every combinator consumes the
/// value and returns a new one, possibly with a different success or failure
/// type parameter:
///
/// ```rust
/// use outcome::Outcome;
///
/// let parsed: Outcome<u16, String> = Outcome::Ok(8080);
/// let described = parsed
///     .map(|port| format!("listening on {port}"))
///     .map_err(|e| e.len());
///
/// assert_eq!(described, Outcome::Ok("listening on 8080".to_string()));
/// ```
///
/// Two outcomes are equal when they hold the same variant and equal values.
/// Comparison, ordering and hashing are only available when both `T` and `E`
/// support them.
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome<T, E> {
    /// Success value
    Ok(T),
    /// Failure value
    Err(E),
}

assert_impl_all!(Outcome<String, String>: Send, Sync, Clone, Eq, std::hash::Hash);
assert_impl_all!(Outcome<u64, &'static str>: Send, Sync, Copy);

impl<T, E> Outcome<T, E> {
    /// Returns `true` for the `Ok` variant
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for the `Err` variant
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if this is `Ok` and the value satisfies `f`
    #[inline]
    pub fn is_ok_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `f`
    #[inline]
    pub fn is_err_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => f(error),
        }
    }

    /// The success value, discarding any error
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// The failure value, discarding any success value
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Borrow the contained value without consuming `self`
    ///
    /// Lets several readers run combinator chains over one instance.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }
}

/// `Value(v)` for success, `Err(e)` for failure
impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Value({value})"),
            Self::Err(error) => write!(f, "Err({error})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    type Probe = Outcome<i32, &'static str>;

    #[test]
    fn test_variant_inspection() {
        let ok = Probe::Ok(5);
        let err = Probe::Err("bad");

        assert!(ok.is_ok());
        assert!(!ok.is_err());
        assert!(err.is_err());
        assert!(!err.is_ok());

        assert!(ok.is_ok_and(|v| v == 5));
        assert!(!ok.is_ok_and(|v| v > 5));
        assert!(!err.is_ok_and(|_| true));
        assert!(err.is_err_and(|e| e == "bad"));
        assert!(!ok.is_err_and(|_| true));
    }

    #[test]
    fn test_option_views() {
        assert_eq!(Probe::Ok(5).ok(), Some(5));
        assert_eq!(Probe::Ok(5).err(), None);
        assert_eq!(Probe::Err("bad").ok(), None);
        assert_eq!(Probe::Err("bad").err(), Some("bad"));
    }

    #[test]
    fn test_as_ref_leaves_original_usable() {
        let original: Outcome<String, String> = Outcome::Ok("payload".to_string());

        let length = original.as_ref().map(String::len);

        assert_eq!(length, Outcome::Ok(7));
        assert_eq!(original, Outcome::Ok("payload".to_string()));
    }

    #[test]
    fn test_equality_is_by_variant_and_value() {
        assert_eq!(Probe::Ok(1), Probe::Ok(1));
        assert_ne!(Probe::Ok(1), Probe::Ok(2));
        assert_ne!(Probe::Err("a"), Probe::Err("b"));

        let same_payload: Outcome<i32, i32> = Outcome::Ok(0);
        assert_ne!(same_payload, Outcome::Err(0));
    }

    #[test]
    fn test_hash_follows_equality() {
        let mut seen = HashSet::new();
        assert!(seen.insert(Probe::Ok(1)));
        assert!(!seen.insert(Probe::Ok(1)));
        assert!(seen.insert(Probe::Err("x")));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Probe::Ok(5).to_string(), "Value(5)");
        assert_eq!(Probe::Err("bad").to_string(), "Err(bad)");
    }

    #[test]
    fn test_shared_across_threads() {
        let shared = std::sync::Arc::new(Outcome::<u32, String>::Ok(21));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = std::sync::Arc::clone(&shared);
                std::thread::spawn(move || Outcome::as_ref(&shared).map(|v| v * 2).ok())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().ok().flatten(), Some(42));
        }
        assert_eq!(*shared, Outcome::Ok(21));
    }
}
