//! Combinators for chaining on success and recovering on failure
//!
//! Eager forms (`and`, `or`) take an already built [`Outcome`]; lazy forms
//! (`and_then`, `or_else`) take a closure that only runs on the matching
//! variant. None of them drop a failure silently: an `Err` is either passed
//! through, transformed, or handed to the caller's recovery closure.

use crate::core::outcome::Outcome;

// =============================================================================
// Success side
// =============================================================================

impl<T, E> Outcome<T, E> {
    /// `other` if this is `Ok`, otherwise this `Err`
    ///
    /// The success value of `self` is discarded.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Feed the success value into `f`, short-circuiting on `Err`
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let positive = |x: i32| if x > 0 { Outcome::Ok(x) } else { Outcome::Err("neg") };
    ///
    /// assert_eq!(Outcome::Ok(5).and_then(positive), Outcome::Ok(5));
    /// assert_eq!(Outcome::Ok(-1).and_then(positive), Outcome::Err("neg"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transform the success value, leaving an `Err` untouched
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// `f(value)` on `Ok`, otherwise `default`
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    /// `f(value)` on `Ok`, otherwise `default(error)`
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => default(error),
        }
    }

    /// Call `f` with a reference to the success value and pass `self` on
    ///
    /// Handy for attaching logging to a chain without breaking it.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Call `f` with a reference to the failure value and pass `self` on
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Remove one level of nesting
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

// =============================================================================
// Failure side
// =============================================================================

impl<T, E> Outcome<T, E> {
    /// This `Ok` re-typed to the failure type of `other`, otherwise `other`
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Recover from an `Err` through `f`; an `Ok` skips `f`
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let cached: Outcome<u32, &str> = Outcome::Err("cache miss");
    /// let loaded = cached.or_else(|_| Outcome::<u32, String>::Ok(7));
    ///
    /// assert_eq!(loaded, Outcome::Ok(7));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Transform the failure value, leaving an `Ok` untouched
    #[inline]
    pub fn map_err<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }
}
