//! Constructors that bridge [`Option`] into [`Outcome`]
//!
//! `Outcome::Ok(value)` and `Outcome::Err(error)` are the plain constructors.
//! The functions here cover the "value may be absent" case: a present value
//! becomes `Ok`, an absent one becomes the supplied `Err`.

use crate::core::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// `Ok(value)` if `candidate` is `Some(value)`, otherwise `Err(error)`
    ///
    /// `error` is built up front even when it is not needed. Use
    /// [`Outcome::from_option_else`] when constructing it is costly.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let found = Outcome::from_option(Some(3), "missing");
    /// assert_eq!(found, Outcome::Ok(3));
    ///
    /// let absent = Outcome::<i32, _>::from_option(None, "missing");
    /// assert_eq!(absent, Outcome::Err("missing"));
    /// ```
    #[inline]
    pub fn from_option(candidate: Option<T>, error: E) -> Self {
        match candidate {
            Some(value) => Self::Ok(value),
            None => Self::Err(error),
        }
    }

    /// `Ok(value)` if `candidate` is `Some(value)`, otherwise `Err(f())`
    ///
    /// `f` runs only when `candidate` is `None`.
    #[inline]
    pub fn from_option_else<F>(candidate: Option<T>, f: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match candidate {
            Some(value) => Self::Ok(value),
            None => Self::Err(f()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Token(u32);

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Missing(&'static str);

    #[rstest]
    #[case(Some(Token(0)), Outcome::Ok(Token(0)))]
    #[case(None, Outcome::Err(Missing("token")))]
    fn test_from_option(
        #[case] candidate: Option<Token>,
        #[case] expected: Outcome<Token, Missing>,
    ) {
        assert_eq!(Outcome::from_option(candidate, Missing("token")), expected);
    }

    #[rstest]
    #[case(Some(Token(0)), Outcome::Ok(Token(0)), 0)]
    #[case(None, Outcome::Err(Missing("token")), 1)]
    fn test_from_option_else(
        #[case] candidate: Option<Token>,
        #[case] expected: Outcome<Token, Missing>,
        #[case] supplier_calls: u32,
    ) {
        let calls = Cell::new(0);

        let result = Outcome::from_option_else(candidate, || {
            calls.set(calls.get() + 1);
            Missing("token")
        });

        assert_eq!(result, expected);
        assert_eq!(calls.get(), supplier_calls);
    }

    #[test]
    fn test_present_empty_value_is_still_ok() {
        let empty = Outcome::from_option(Some(String::new()), "absent");
        assert_eq!(empty, Outcome::Ok(String::new()));
    }
}
