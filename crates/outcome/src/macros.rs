//! Early-return macros for functions that return [`Outcome`](crate::Outcome)
//!
//! Stable Rust only lets `?` work on std types, so these cover the two common
//! shapes of early return.

/// Return `Outcome::Err(error)` from the enclosing function unless `condition` holds
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, ensure};
///
/// fn validate_age(age: u32) -> Outcome<u32, &'static str> {
///     ensure!(age >= 18, "must be 18+");
///     ensure!(age <= 120, "invalid age");
///     Outcome::Ok(age)
/// }
///
/// assert_eq!(validate_age(30), Outcome::Ok(30));
/// assert_eq!(validate_age(16), Outcome::Err("must be 18+"));
/// ```
#[macro_export]
macro_rules! ensure {
    ($condition:expr, $error:expr $(,)?) => {
        if !($condition) {
            return $crate::Outcome::Err($error);
        }
    };
}

/// Take the success value out of an `Outcome`, or return its error
///
/// The error is converted with [`From`], so a function can gather several
/// failure types into one.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, attempt};
///
/// #[derive(Debug, PartialEq)]
/// enum ConfigError {
///     Missing(&'static str),
///     BadPort,
/// }
///
/// impl From<std::num::ParseIntError> for ConfigError {
///     fn from(_: std::num::ParseIntError) -> Self {
///         ConfigError::BadPort
///     }
/// }
///
/// fn port(raw: Option<&str>) -> Outcome<u16, ConfigError> {
///     let text = attempt!(Outcome::from_option(raw, ConfigError::Missing("port")));
///     let port = attempt!(Outcome::from(text.parse::<u16>()));
///     Outcome::Ok(port)
/// }
///
/// assert_eq!(port(Some("8080")), Outcome::Ok(8080));
/// assert_eq!(port(Some("http")), Outcome::Err(ConfigError::BadPort));
/// assert_eq!(port(None), Outcome::Err(ConfigError::Missing("port")));
/// ```
#[macro_export]
macro_rules! attempt {
    ($outcome:expr $(,)?) => {
        match $outcome {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(error) => {
                return $crate::Outcome::Err(::core::convert::From::from(error));
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::Outcome;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq, Eq)]
    struct Wide(u64);

    impl From<u8> for Wide {
        fn from(code: u8) -> Self {
            Self(u64::from(code))
        }
    }

    #[test]
    fn test_ensure_macro() {
        fn positive(x: i32) -> Outcome<i32, &'static str> {
            ensure!(x > 0, "neg");
            Outcome::Ok(x)
        }

        assert_eq!(positive(5), Outcome::Ok(5));
        assert_eq!(positive(-1), Outcome::Err("neg"));
    }

    #[test]
    fn test_attempt_short_circuits() {
        fn sum(a: Outcome<u32, u8>, b: Outcome<u32, u8>) -> Outcome<u32, Wide> {
            let a = attempt!(a);
            let b = attempt!(b);
            Outcome::Ok(a + b)
        }

        assert_eq!(sum(Outcome::Ok(1), Outcome::Ok(2)), Outcome::Ok(3));
        assert_eq!(sum(Outcome::Err(4), Outcome::Ok(2)), Outcome::Err(Wide(4)));
        assert_eq!(sum(Outcome::Ok(1), Outcome::Err(5)), Outcome::Err(Wide(5)));
    }

    #[test]
    fn test_attempt_skips_later_steps() {
        fn pipeline(start: Outcome<u32, u8>, reached: &mut bool) -> Outcome<u32, u8> {
            let value = attempt!(start);
            *reached = true;
            Outcome::Ok(value)
        }

        let mut reached = false;
        assert_eq!(pipeline(Outcome::Err(1), &mut reached), Outcome::Err(1));
        assert!(!reached);
    }
}
