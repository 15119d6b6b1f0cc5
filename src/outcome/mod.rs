//! The outcome container.
//!
//! This module provides [`Outcome<T>`], a success-or-failure wrapper whose
//! failure state carries an opaque [`Fault`], together with a fluent
//! combinator API:
//!
//! - Chaining with short-circuit: [`then`](Outcome::then),
//!   [`then_with`](Outcome::then_with)
//! - Panic-safe chaining: [`try_then`](Outcome::try_then),
//!   [`try_catch`](Outcome::try_catch)
//! - Recovery: [`catch`](Outcome::catch), [`catch_with`](Outcome::catch_with)
//! - Inspection: [`if_success`](Outcome::if_success),
//!   [`if_failed`](Outcome::if_failed)
//!
//! Chains behave like a single early-return pipeline without explicit
//! control-flow statements: once an outcome is failed, every subsequent
//! success-path continuation is skipped and the original cause propagates
//! unchanged.
//!
//! # Examples
//!
//! ```rust
//! use valor::outcome::Outcome;
//!
//! fn checked_div(dividend: i32, divisor: i32) -> Outcome<i32> {
//!     if divisor == 0 {
//!         Outcome::fail("division by zero")
//!     } else {
//!         Outcome::ok(dividend / divisor)
//!     }
//! }
//!
//! let result = checked_div(84, 2)
//!     .then(|quotient| quotient + 1)
//!     .value_or(0);
//! assert_eq!(result, 43);
//!
//! let recovered = checked_div(84, 0)
//!     .then(|quotient| quotient + 1) // skipped
//!     .catch(|_fault| -1)
//!     .value_or(0);
//! assert_eq!(recovered, -1);
//! ```

mod fault;
mod outcome;

pub use fault::Fault;
pub use outcome::Outcome;
