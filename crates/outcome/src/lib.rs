//! # Outcome
//!
//! Explicit, typed success/failure values with a combinator algebra.
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! fn positive(x: i32) -> Outcome<i32, &'static str> {
//!     ensure!(x > 0, "neg");
//!     Outcome::Ok(x)
//! }
//!
//! let doubled = Outcome::Ok(5).and_then(positive).map(|x| x * 2);
//! assert_eq!(doubled, Outcome::Ok(10));
//!
//! let fallback = Outcome::Ok(-1).and_then(positive).unwrap_or(0);
//! assert_eq!(fallback, 0);
//! ```
//!
//! ## Features
//!
//! - **Exhaustive**: `Outcome<T, E>` is a plain enum, the compiler checks every `match`
//! - **Lazy where it matters**: `and_then`, `or_else`, `unwrap_or_else`, `from_option_else`
//! - **Recoverable misuse**: `unwrap` on an `Err` panics with an [`UnwrapError`] payload
//!   that still holds the original failure value
//! - **Interop**: converts to and from [`std::result::Result`] and [`Option`]
//!
//! ## Cargo features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`] and [`UnwrapError`]

pub mod core;

pub mod macros;

// === Public API Exports ===

/// The success/failure sum type
pub use crate::core::Outcome;

/// Payload raised by `unwrap`/`expect` on the wrong variant
pub use crate::core::{UnwrapError, catch_unwrap};

/// Extension traits for std `Result` and `Option`
pub use crate::core::{IntoOutcome, OptionOutcomeExt};

/// Everything needed to write code against [`Outcome`]
pub mod prelude {
    pub use super::{IntoOutcome, OptionOutcomeExt, Outcome, UnwrapError, catch_unwrap};

    pub use crate::{attempt, ensure};
}
