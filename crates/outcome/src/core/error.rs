//! [`UnwrapError`]: the payload raised when an unwrap hits the wrong variant
//!
//! `unwrap` and `expect` on an `Err` panic with an [`UnwrapError`] as the
//! panic payload (via [`std::panic::panic_any`]), so the original failure
//! value travels with the panic instead of being formatted into a message.
//! [`catch_unwrap`] and [`UnwrapError::from_panic`] get it back.

// Standard library
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::panic::{self, UnwindSafe};

// External dependencies
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Internal
use crate::core::outcome::Outcome;

/// Raised by `unwrap`/`expect` when the outcome held the other variant
///
/// For `unwrap`/`expect` the inner value is the failure value `E`; for
/// `unwrap_err`/`expect_err` it is the unexpected success value.
///
/// ```rust
/// use outcome::{Outcome, UnwrapError, catch_unwrap};
///
/// let caught = catch_unwrap::<_, &'static str, _>(|| {
///     Outcome::<u8, &'static str>::Err("offline").unwrap()
/// });
///
/// let error: UnwrapError<&'static str> = caught.err().unwrap();
/// assert_eq!(*error.inner(), "offline");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("{}called unwrap on the wrong variant: {inner:?}", ContextPrefix(.context.as_deref()))]
pub struct UnwrapError<E: fmt::Debug> {
    /// The value the caller did not expect
    inner: E,
    /// Message passed to `expect`, if any
    context: Option<Cow<'static, str>>,
}

struct ContextPrefix<'a>(Option<&'a str>);

impl fmt::Display for ContextPrefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(context) => write!(f, "{context}: "),
            None => Ok(()),
        }
    }
}

impl<E: fmt::Debug> UnwrapError<E> {
    /// Wrap a value with no context message
    #[must_use]
    pub const fn new(inner: E) -> Self {
        Self {
            inner,
            context: None,
        }
    }

    /// Wrap a value together with the message the caller passed to `expect`
    #[must_use]
    pub fn with_context(inner: E, context: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            context: Some(context.into()),
        }
    }

    /// The original value, untouched
    pub const fn inner(&self) -> &E {
        &self.inner
    }

    /// Take the original value back
    pub fn into_inner(self) -> E {
        self.inner
    }

    /// The `expect` message, if one was given
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl<E: fmt::Debug + Send + 'static> UnwrapError<E> {
    /// Log the misuse and panic with `self` as the payload
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        tracing::error!(
            target: "outcome::unwrap",
            error = ?self.inner,
            context = self.context.as_deref(),
            location = %panic::Location::caller(),
            "unwrap on the wrong Outcome variant"
        );
        panic::panic_any(self)
    }

    /// Recover an [`UnwrapError`] from a caught panic payload
    ///
    /// Payloads of any other type are handed back unchanged so the caller can
    /// [`resume_unwind`](std::panic::resume_unwind) them.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Result<Self, Box<dyn Any + Send>> {
        payload.downcast::<Self>().map(|boxed| *boxed)
    }
}

/// Run `f`, turning an unwrap misuse inside it back into a represented failure
///
/// A panic raised by `unwrap`/`expect` on an `Outcome<_, E>` comes back as
/// `Err(UnwrapError<E>)`. Any other panic keeps unwinding.
pub fn catch_unwrap<T, E, F>(f: F) -> Outcome<T, UnwrapError<E>>
where
    E: fmt::Debug + Send + 'static,
    F: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => match UnwrapError::<E>::from_panic(payload) {
            Ok(error) => Outcome::Err(error),
            Err(other) => panic::resume_unwind(other),
        },
    }
}
