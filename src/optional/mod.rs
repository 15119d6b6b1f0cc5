//! The optional container.
//!
//! This module provides [`Optional<T>`], a value-or-absent wrapper with a
//! fluent combinator API:
//!
//! - Chaining: [`then`](Optional::then), [`then_with`](Optional::then_with)
//! - Defaulting: [`or`](Optional::or), [`or_else`](Optional::or_else),
//!   [`value_or`](Optional::value_or)
//! - Inspection without unwrapping: [`if_some`](Optional::if_some),
//!   [`if_none`](Optional::if_none)
//!
//! # Examples
//!
//! ```rust
//! use valor::optional::Optional;
//!
//! let display = Optional::some(7)
//!     .then(|n| n * 6)
//!     .if_some(|n| println!("got {n}"))
//!     .value_or(0);
//! assert_eq!(display, 42);
//!
//! let fallback = Optional::<i32>::none().or_else(|| 42);
//! assert_eq!(fallback.value(), 42);
//! ```

mod optional;

pub use optional::Optional;
