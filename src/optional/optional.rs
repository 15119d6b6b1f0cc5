//! Optional type - a value that may be absent.
//!
//! This module provides the `Optional<T>` type, a value-or-absent wrapper
//! carrying a fluent combinator API. Unlike direct use of
//! `std::option::Option`, the combinators here are designed for single-line
//! pipelines that transform, default, or inspect the value without explicit
//! `match` branching; none of them ever panics on the absent path.
//!
//! Panicking is reserved for the direct accessors ([`Optional::value`] and
//! [`Optional::value_ref`]), which signal a contract violation when called in
//! the wrong state.
//!
//! # Examples
//!
//! ```rust
//! use valor::optional::Optional;
//!
//! // Creating optionals
//! let present = Optional::some(42);
//! let absent: Optional<i32> = Optional::none();
//!
//! // Chaining without unwrapping
//! let formatted = present
//!     .then(|n| format!("#{n}"))
//!     .value_or_else(|| "<missing>".to_string());
//! assert_eq!(formatted, "#42");
//!
//! // The absent path short-circuits the whole chain
//! let formatted = absent
//!     .then(|n| format!("#{n}"))
//!     .value_or_else(|| "<missing>".to_string());
//! assert_eq!(formatted, "<missing>");
//! ```

use std::fmt;

#[cfg(feature = "outcome")]
use crate::outcome::{Fault, Outcome};

/// A value that may be absent.
///
/// `Optional<T>` either holds a value of type `T` or nothing. It is an
/// immutable value type: no combinator mutates an existing instance, and
/// every operation either returns a fresh instance or passes `self` through
/// unchanged.
///
/// Absence follows Rust's native convention: [`Optional::maybe`] maps
/// `std::option::Option::None` to the absent state.
///
/// # Examples
///
/// ```rust
/// use valor::optional::Optional;
///
/// let user_id = Optional::some(7_u64);
/// assert!(user_id.has_value());
///
/// let doubled = user_id.then(|id| id * 2);
/// assert_eq!(doubled.value(), 14);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Returns an empty `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// let absent: Optional<i32> = Optional::none();
    /// assert!(!absent.has_value());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self { value: None }
    }

    /// Creates an `Optional` holding the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// let present = Optional::some("hello");
    /// assert!(present.has_value());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an `Optional` from a nullable value.
    ///
    /// The result is present iff `value` is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// assert!(Optional::maybe(Some(1)).has_value());
    /// assert!(!Optional::maybe(None::<i32>).has_value());
    /// ```
    #[inline]
    pub const fn maybe(value: Option<T>) -> Self {
        Self { value }
    }

    // =========================================================================
    // State Checking
    // =========================================================================

    /// Returns `true` if this `Optional` holds a value.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    // =========================================================================
    // Direct Value Access
    // =========================================================================

    /// Returns the held value, consuming the optional.
    ///
    /// # Panics
    ///
    /// Panics if the `Optional` is empty. Reaching this panic is a
    /// programming error: combinators never call it on the absent path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// assert_eq!(Optional::some(42).value(), 42);
    /// ```
    #[inline]
    pub fn value(self) -> T {
        match self.value {
            Some(value) => value,
            None => panic!("called `Optional::value()` on an empty `Optional`"),
        }
    }

    /// Returns a reference to the held value.
    ///
    /// # Panics
    ///
    /// Panics if the `Optional` is empty.
    #[inline]
    pub fn value_ref(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => panic!("called `Optional::value_ref()` on an empty `Optional`"),
        }
    }

    // =========================================================================
    // Defaulting Extraction
    // =========================================================================

    /// Returns the held value, or `T::default()` if empty.
    ///
    /// The zero-value policy is explicit: only types implementing
    /// [`Default`] have this method. For other types use
    /// [`value_or`](Self::value_or) or [`value_or_else`](Self::value_or_else).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// assert_eq!(Optional::some(42).value_or_default(), 42);
    /// assert_eq!(Optional::<i32>::none().value_or_default(), 0);
    /// ```
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    /// Returns the held value, or `default` if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// assert_eq!(Optional::some(42).value_or(0), 42);
    /// assert_eq!(Optional::<i32>::none().value_or(7), 7);
    /// ```
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Returns the held value, or the result of `supplier` if empty.
    ///
    /// `supplier` is invoked only on the absent path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// assert_eq!(Optional::some(42).value_or_else(|| 7), 42);
    /// assert_eq!(Optional::<i32>::none().value_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(supplier)
    }

    // =========================================================================
    // Inspection (Passthrough)
    // =========================================================================

    /// Invokes `action` with a reference to the value iff present.
    ///
    /// Returns the same `Optional`; the state is never altered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// let mut seen = None;
    /// Optional::some(42).if_some(|n| seen = Some(*n));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn if_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            action(value);
        }

        self
    }

    /// Invokes `action` iff this `Optional` is empty.
    ///
    /// Returns the same `Optional`; the state is never altered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// let mut missed = false;
    /// Optional::<i32>::none().if_none(|| missed = true);
    /// assert!(missed);
    /// ```
    #[inline]
    pub fn if_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.value.is_none() {
            action();
        }

        self
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Applies a mapping to the value if present.
    ///
    /// If present, returns `some(map(value))`; if empty, returns an empty
    /// `Optional<U>` without invoking `map`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// let length = Optional::some("hello").then(|s| s.len());
    /// assert_eq!(length.value(), 5);
    ///
    /// let length = Optional::<&str>::none().then(|s| s.len());
    /// assert!(!length.has_value());
    /// ```
    #[inline]
    pub fn then<U, F>(self, map: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.value {
            Some(value) => Optional::some(map(value)),
            None => Optional::none(),
        }
    }

    /// Applies a mapping producing another `Optional` if present.
    ///
    /// If present, returns `map(value)` verbatim; if empty, returns an empty
    /// `Optional<U>` without invoking `map`. This is the flattening form of
    /// [`then`](Self::then) for continuations that may themselves come up
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// fn first_char(s: &str) -> Optional<char> {
    ///     Optional::maybe(s.chars().next())
    /// }
    ///
    /// assert_eq!(Optional::some("hi").then_with(first_char).value(), 'h');
    /// assert!(!Optional::some("").then_with(first_char).has_value());
    /// ```
    #[inline]
    pub fn then_with<U, F>(self, map: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.value {
            Some(value) => map(value),
            None => Optional::none(),
        }
    }

    // =========================================================================
    // Defaulting (Container-level)
    // =========================================================================

    /// Returns `self` if present, otherwise an `Optional` holding `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// assert_eq!(Optional::some(1).or(9).value(), 1);
    /// assert_eq!(Optional::none().or(9).value(), 9);
    /// ```
    #[inline]
    pub fn or(self, default: T) -> Self {
        if self.has_value() {
            self
        } else {
            Self::some(default)
        }
    }

    /// Returns `self` if present, otherwise an `Optional` holding the result
    /// of `supplier`.
    ///
    /// `supplier` is invoked only on the absent path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// assert_eq!(Optional::some(1).or_else(|| 9).value(), 1);
    /// assert_eq!(Optional::none().or_else(|| 9).value(), 9);
    /// ```
    #[inline]
    pub fn or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        if self.has_value() {
            self
        } else {
            Self::some(supplier())
        }
    }

    /// Returns `self` if present, otherwise the `Optional` produced by
    /// `supplier`, verbatim.
    ///
    /// The supplied optional may itself be empty; no wrapping occurs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// let primary: Optional<i32> = Optional::none();
    /// let resolved = primary.or_maybe(|| Optional::some(9));
    /// assert_eq!(resolved.value(), 9);
    ///
    /// let still_absent = Optional::<i32>::none().or_maybe(Optional::none);
    /// assert!(!still_absent.has_value());
    /// ```
    #[inline]
    pub fn or_maybe<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.has_value() { self } else { supplier() }
    }

    // =========================================================================
    // Outcome Interop
    // =========================================================================

    /// Converts to an [`Outcome`], using `cause` as the failure when empty.
    ///
    /// Present → `Outcome::ok(value)`; empty → `Outcome::fail(cause)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// let found = Optional::some(42).to_outcome("not found");
    /// assert!(found.is_success());
    ///
    /// let missing = Optional::<i32>::none().to_outcome("not found");
    /// assert!(missing.is_failed());
    /// ```
    #[cfg(feature = "outcome")]
    #[inline]
    pub fn to_outcome<C>(self, cause: C) -> Outcome<T>
    where
        C: Into<Fault>,
    {
        match self.value {
            Some(value) => Outcome::ok(value),
            None => Outcome::fail(cause),
        }
    }

    /// Converts to an [`Outcome`], invoking `factory` for the failure cause
    /// only when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// let key = "alice";
    /// let missing = Optional::<i32>::none()
    ///     .to_outcome_else(|| format!("no entry for {key}"));
    /// assert!(missing.is_failed());
    /// ```
    #[cfg(feature = "outcome")]
    #[inline]
    pub fn to_outcome_else<C, F>(self, factory: F) -> Outcome<T>
    where
        C: Into<Fault>,
        F: FnOnce() -> C,
    {
        match self.value {
            Some(value) => Outcome::ok(value),
            None => Outcome::fail(factory()),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Optional<T> {
    /// The default `Optional` is empty.
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Optional::some").field(value).finish(),
            None => formatter.write_str("Optional::none"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Converts a std `Option` to an `Optional` with [`Optional::maybe`]
    /// semantics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// let present: Optional<i32> = Some(42).into();
    /// assert!(present.has_value());
    /// ```
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::maybe(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Converts an `Optional` back to a std `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::optional::Optional;
    ///
    /// let value: Option<i32> = Optional::some(42).into();
    /// assert_eq!(value, Some(42));
    /// ```
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

// Immutable value type: freely shareable across threads when T is.
static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Clone, Copy);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync, Clone);
