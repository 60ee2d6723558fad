//! Core types and operations
//!
//! - [`outcome`](crate::core::outcome) - The [`Outcome`] enum and variant inspection
//! - [`constructors`](crate::core::constructors) - Constructors bridging from [`Option`]
//! - [`combinators`](crate::core::combinators) - Success-side and failure-side combinators
//! - [`terminal`](crate::core::terminal) - Unwrap-style terminal operations
//! - [`error`](crate::core::error) - [`UnwrapError`] and panic recovery
//! - [`conversion`](crate::core::conversion) - std `Result`/`Option` interop, collecting
//! - [`traits`](crate::core::traits) - Extension traits for std types

pub mod combinators;
pub mod constructors;
pub mod conversion;
pub mod error;
pub mod outcome;
pub mod terminal;
pub mod traits;

pub use error::{UnwrapError, catch_unwrap};
pub use outcome::Outcome;
pub use traits::{IntoOutcome, OptionOutcomeExt};
