//! Terminal operations: take the value out and end the chain
//!
//! Only `unwrap`, `expect`, `unwrap_err` and `expect_err` can panic, and they
//! do so with an [`UnwrapError`] payload carrying the unexpected value. Every
//! other operation here is total.

use std::borrow::Cow;
use std::fmt;

use crate::core::error::UnwrapError;
use crate::core::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// The success value
    ///
    /// # Panics
    ///
    /// On `Err(e)`, panics with `UnwrapError<E>` as the payload. The original
    /// `e` is recoverable with [`catch_unwrap`](crate::catch_unwrap) or
    /// [`UnwrapError::from_panic`]. Prefer [`Outcome::unwrap_or`],
    /// [`Outcome::unwrap_or_else`] or [`Outcome::try_unwrap`].
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug + Send + 'static,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => UnwrapError::new(error).raise(),
        }
    }

    /// Like [`Outcome::unwrap`], attaching `message` to the panic payload
    #[inline]
    #[track_caller]
    pub fn expect(self, message: impl Into<Cow<'static, str>>) -> T
    where
        E: fmt::Debug + Send + 'static,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => UnwrapError::with_context(error, message).raise(),
        }
    }

    /// The failure value; panics with `UnwrapError<T>` on `Ok`
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug + Send + 'static,
    {
        match self {
            Self::Ok(value) => UnwrapError::new(value).raise(),
            Self::Err(error) => error,
        }
    }

    /// Like [`Outcome::unwrap_err`], attaching `message` to the panic payload
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: impl Into<Cow<'static, str>>) -> E
    where
        T: fmt::Debug + Send + 'static,
    {
        match self {
            Self::Ok(value) => UnwrapError::with_context(value, message).raise(),
            Self::Err(error) => error,
        }
    }

    /// The success value, or the misuse as a std `Result` instead of a panic
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError<E>>
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(UnwrapError::new(error)),
        }
    }

    /// The success value, or `fallback`
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback,
        }
    }

    /// The success value, or `f(error)`; `f` only runs on `Err`
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// The success value, or `T::default()`
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }
}
