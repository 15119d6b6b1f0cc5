//! # valor
//!
//! Fluent optional and outcome containers for composing fallible operations
//! without explicit branching.
//!
//! ## Overview
//!
//! This library provides two small value abstractions and a combinator API
//! over them:
//!
//! - **Optional container** ([`Optional<T>`](optional::Optional)): a value or
//!   nothing, with chaining, defaulting, and inspection combinators.
//! - **Outcome container** ([`Outcome<T>`](outcome::Outcome)): success with a
//!   payload (or `Outcome<()>` for none) or a failure carrying an opaque
//!   [`Fault`](outcome::Fault), with short-circuiting chains, recovery
//!   combinators, and panic-safe capture constructors.
//!
//! A producer returns an `Optional` or `Outcome` instead of a nullable value
//! or a panic; consumers chain combinators to transform, branch, or extract,
//! only unwrapping at the boundary where a concrete value or fatal failure
//! must be produced.
//!
//! ## Feature Flags
//!
//! - `optional`: the optional container and its combinators
//! - `outcome`: the outcome container, `Fault`, and interconversion with
//!   `Optional` (implies `optional`)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use valor::prelude::*;
//!
//! fn parse(input: &str) -> Outcome<i32> {
//!     Outcome::capture(|| input.parse::<i32>().unwrap())
//! }
//!
//! let doubled = parse("21").then(|n| n * 2).value_or(0);
//! assert_eq!(doubled, 42);
//!
//! let recovered = parse("not a number").catch(|_fault| -1).value_or(0);
//! assert_eq!(recovered, -1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use valor::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "optional")]
    pub use crate::optional::*;

    #[cfg(feature = "outcome")]
    pub use crate::outcome::*;
}

#[cfg(feature = "optional")]
pub mod optional;

#[cfg(feature = "outcome")]
pub mod outcome;
