//! Outcome type - success or failure with a cause.
//!
//! This module provides the `Outcome<T>` type, a success/failure wrapper
//! carrying a payload on success and a [`Fault`] on failure. `Outcome<()>`
//! (the default type parameter) is the payload-free form used by operations
//! that succeed without producing a value.
//!
//! An `Outcome` is an immutable value: its state is fixed at construction
//! and every combinator produces a new instance (or passes `self` through).
//! Once failed, the success-path combinators ([`then`](Outcome::then) and
//! friends) are no-ops that propagate the original cause unchanged; only the
//! [`catch`](Outcome::catch) family turns a failure back into success, and
//! only by explicitly handling the cause.
//!
//! # Examples
//!
//! ```rust
//! use valor::outcome::Outcome;
//!
//! fn find_port(configured: Option<u16>) -> Outcome<u16> {
//!     match configured {
//!         Some(port) => Outcome::ok(port),
//!         None => Outcome::fail("no port configured"),
//!     }
//! }
//!
//! let address = find_port(Some(8080))
//!     .then(|port| format!("127.0.0.1:{port}"))
//!     .value_or_else(|| "127.0.0.1:0".to_string());
//! assert_eq!(address, "127.0.0.1:8080");
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind, panic_any};

use crate::optional::Optional;
use crate::outcome::Fault;

/// A success-or-failure value.
///
/// `Outcome<T>` holds either a success payload of type `T` or a [`Fault`]
/// describing why the operation failed. `Outcome` (that is, `Outcome<()>`)
/// represents success without a payload.
///
/// Two channels of failure are kept distinct:
///
/// - **Modeled failure** is the failure state itself, recovered through
///   [`catch`](Self::catch), [`try_catch`](Self::try_catch), or
///   [`match_with`](Self::match_with).
/// - **Programming errors** — reading [`value`](Self::value) on a failure or
///   [`fault`](Self::fault) on a success — panic, and no combinator ever
///   catches them.
///
/// A panic raised *inside* a continuation is only intercepted by the
/// capturing operations ([`capture`](Self::capture),
/// [`try_then`](Self::try_then), [`try_catch`](Self::try_catch), ...), where
/// it becomes a modeled failure. The non-`try` combinators deliberately let
/// continuation panics propagate: an expected divergent path and a buggy
/// continuation are different things.
///
/// # Examples
///
/// ```rust
/// use valor::outcome::Outcome;
///
/// let parsed = Outcome::capture(|| "21".parse::<i32>().unwrap());
/// let result = parsed.then(|n| n * 2);
/// assert_eq!(result.value(), 42);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Outcome<T = ()> {
    state: Result<T, Fault>,
}

impl Outcome {
    /// Returns a successful `Outcome` with no payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// let done = Outcome::done();
    /// assert!(done.is_success());
    /// ```
    #[inline]
    pub const fn done() -> Self {
        Self { state: Ok(()) }
    }
}

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful `Outcome` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// let success = Outcome::ok(42);
    /// assert!(success.is_success());
    /// assert_eq!(success.value(), 42);
    /// ```
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self { state: Ok(value) }
    }

    /// Creates a failed `Outcome` carrying `cause`.
    ///
    /// Accepts anything convertible into a [`Fault`]: a fault itself or a
    /// bare description. Concrete errors are wrapped with [`Fault::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// let failure: Outcome<i32> = Outcome::fail("out of range");
    /// assert!(failure.is_failed());
    /// assert_eq!(failure.fault().to_string(), "out of range");
    /// ```
    #[inline]
    pub fn fail<C>(cause: C) -> Self
    where
        C: Into<Fault>,
    {
        Self {
            state: Err(cause.into()),
        }
    }

    // =========================================================================
    // Execute and Capture
    // =========================================================================

    /// Runs `operation` and captures its result or its panic.
    ///
    /// If `operation` completes, its value is wrapped as success. If it
    /// panics, the unwind is caught and the payload becomes the failure
    /// cause (see [`Fault::from_panic`]). This is the only place, along with
    /// the other capturing operations built on it, where the library
    /// intercepts a panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// let parsed = Outcome::capture(|| "7".parse::<i32>().unwrap());
    /// assert_eq!(parsed.value(), 7);
    ///
    /// let failed = Outcome::capture(|| "x".parse::<i32>().unwrap());
    /// assert!(failed.is_failed());
    /// ```
    pub fn capture<F>(operation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        // The closure is consumed exactly once and nothing it touched is
        // observable after an unwind, so asserting unwind safety is sound.
        match catch_unwind(AssertUnwindSafe(operation)) {
            Ok(value) => Self::ok(value),
            Err(payload) => Self::fail(Fault::from_panic(payload)),
        }
    }

    /// Runs an outcome-producing `operation`, capturing its panic.
    ///
    /// If `operation` completes, its outcome is returned verbatim (including
    /// a failed one). If it panics, the payload becomes the failure cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// let nested = Outcome::capture_with(|| Outcome::<i32>::fail("declined"));
    /// assert!(nested.is_failed());
    /// assert_eq!(nested.fault().to_string(), "declined");
    /// ```
    pub fn capture_with<F>(operation: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match catch_unwind(AssertUnwindSafe(operation)) {
            Ok(outcome) => outcome,
            Err(payload) => Self::fail(Fault::from_panic(payload)),
        }
    }

    // =========================================================================
    // State Checking
    // =========================================================================

    /// Returns `true` if this `Outcome` is a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.state.is_ok()
    }

    /// Returns `true` if this `Outcome` is a failure.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        self.state.is_err()
    }

    // =========================================================================
    // Direct Access
    // =========================================================================

    /// Returns the success payload, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if the `Outcome` is failed. Reaching this panic is a
    /// programming error; use [`value_or`](Self::value_or) or
    /// [`match_with`](Self::match_with) when failure is a possibility.
    #[inline]
    pub fn value(self) -> T {
        match self.state {
            Ok(value) => value,
            Err(_) => panic!("called `Outcome::value()` on a failed `Outcome`"),
        }
    }

    /// Returns a reference to the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the `Outcome` is failed.
    #[inline]
    pub fn value_ref(&self) -> &T {
        match &self.state {
            Ok(value) => value,
            Err(_) => panic!("called `Outcome::value_ref()` on a failed `Outcome`"),
        }
    }

    /// Returns the failure cause, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if the `Outcome` is successful.
    #[inline]
    pub fn fault(self) -> Fault {
        match self.state {
            Ok(_) => panic!("called `Outcome::fault()` on a successful `Outcome`"),
            Err(fault) => fault,
        }
    }

    /// Returns a reference to the failure cause.
    ///
    /// # Panics
    ///
    /// Panics if the `Outcome` is successful.
    #[inline]
    pub fn fault_ref(&self) -> &Fault {
        match &self.state {
            Ok(_) => panic!("called `Outcome::fault_ref()` on a successful `Outcome`"),
            Err(fault) => fault,
        }
    }

    // =========================================================================
    // Branch Dispatch
    // =========================================================================

    /// Dispatches to exactly one branch based on the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// let report = Outcome::ok(42).match_with(
    ///     |value| format!("got {value}"),
    ///     |fault| format!("failed: {fault}"),
    /// );
    /// assert_eq!(report, "got 42");
    /// ```
    #[inline]
    pub fn match_with<TOut, S, F>(self, on_success: S, on_failure: F) -> TOut
    where
        S: FnOnce(T) -> TOut,
        F: FnOnce(Fault) -> TOut,
    {
        match self.state {
            Ok(value) => on_success(value),
            Err(fault) => on_failure(fault),
        }
    }

    // =========================================================================
    // Success-path Chaining
    // =========================================================================

    /// Applies a mapping to the payload if successful.
    ///
    /// On success, returns `ok(map(value))`. On failure, short-circuits:
    /// `map` is never invoked and the original cause propagates, retyped.
    ///
    /// A panic inside `map` is **not** caught; use
    /// [`try_then`](Self::try_then) for continuations that may panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// let doubled = Outcome::ok(21).then(|n| n * 2);
    /// assert_eq!(doubled.value(), 42);
    ///
    /// let skipped = Outcome::<i32>::fail("broken").then(|n| n * 2);
    /// assert!(skipped.is_failed());
    /// ```
    #[inline]
    pub fn then<U, F>(self, map: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            Ok(value) => Outcome::ok(map(value)),
            Err(fault) => Outcome::fail(fault),
        }
    }

    /// Applies an outcome-producing continuation if successful.
    ///
    /// On success, returns `operation(value)` verbatim. On failure,
    /// short-circuits with the original cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// fn reserve(seats: u32) -> Outcome<u32> {
    ///     if seats <= 4 {
    ///         Outcome::ok(seats)
    ///     } else {
    ///         Outcome::fail("not enough seats")
    ///     }
    /// }
    ///
    /// assert!(Outcome::ok(3).then_with(reserve).is_success());
    /// assert!(Outcome::ok(9).then_with(reserve).is_failed());
    /// ```
    #[inline]
    pub fn then_with<U, F>(self, operation: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.state {
            Ok(value) => operation(value),
            Err(fault) => Outcome::fail(fault),
        }
    }

    /// Like [`then`](Self::then), but a panic inside `map` becomes the new
    /// failure cause instead of propagating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// let parsed = Outcome::ok("not a number")
    ///     .try_then(|text| text.parse::<i32>().unwrap());
    /// assert!(parsed.is_failed());
    /// ```
    #[inline]
    pub fn try_then<U, F>(self, map: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            Ok(value) => Outcome::capture(|| map(value)),
            Err(fault) => Outcome::fail(fault),
        }
    }

    /// Like [`then_with`](Self::then_with), but a panic inside `operation`
    /// becomes the new failure cause instead of propagating.
    #[inline]
    pub fn try_then_with<U, F>(self, operation: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.state {
            Ok(value) => Outcome::capture_with(|| operation(value)),
            Err(fault) => Outcome::fail(fault),
        }
    }

    // =========================================================================
    // Failure-path Recovery
    // =========================================================================

    /// Recovers from a failure by producing a replacement payload.
    ///
    /// On failure, returns `ok(handler(cause))`. On success, passthrough:
    /// `handler` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// let recovered = Outcome::<i32>::fail("miss").catch(|_fault| 0);
    /// assert_eq!(recovered.value(), 0);
    ///
    /// let untouched = Outcome::ok(42).catch(|_fault| 0);
    /// assert_eq!(untouched.value(), 42);
    /// ```
    #[inline]
    pub fn catch<F>(self, handler: F) -> Self
    where
        F: FnOnce(Fault) -> T,
    {
        match self.state {
            Ok(value) => Self::ok(value),
            Err(fault) => Self::ok(handler(fault)),
        }
    }

    /// Recovers from a failure by producing a replacement outcome.
    ///
    /// On failure, returns `handler(cause)` verbatim — the handler may
    /// decide to stay failed. On success, passthrough.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::{Fault, Outcome};
    ///
    /// let rerouted = Outcome::<i32>::fail("primary down")
    ///     .catch_with(|fault| Outcome::fail(Fault::message(format!("gave up: {fault}"))));
    /// assert_eq!(rerouted.fault().to_string(), "gave up: primary down");
    /// ```
    #[inline]
    pub fn catch_with<F>(self, handler: F) -> Self
    where
        F: FnOnce(Fault) -> Self,
    {
        match self.state {
            Ok(value) => Self::ok(value),
            Err(fault) => handler(fault),
        }
    }

    /// Like [`catch`](Self::catch), but a panic inside `handler` becomes the
    /// new failure cause instead of propagating.
    #[inline]
    pub fn try_catch<F>(self, handler: F) -> Self
    where
        F: FnOnce(Fault) -> T,
    {
        match self.state {
            Ok(value) => Self::ok(value),
            Err(fault) => Self::capture(|| handler(fault)),
        }
    }

    /// Like [`catch_with`](Self::catch_with), but a panic inside `handler`
    /// becomes the new failure cause instead of propagating.
    #[inline]
    pub fn try_catch_with<F>(self, handler: F) -> Self
    where
        F: FnOnce(Fault) -> Self,
    {
        match self.state {
            Ok(value) => Self::ok(value),
            Err(fault) => Self::capture_with(|| handler(fault)),
        }
    }

    // =========================================================================
    // Inspection (Passthrough)
    // =========================================================================

    /// Invokes `action` with a reference to the payload iff successful.
    ///
    /// Returns the same `Outcome`; the state is never altered.
    #[inline]
    pub fn if_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self.state {
            action(value);
        }

        self
    }

    /// Invokes `action` with a reference to the cause iff failed.
    ///
    /// Returns the same `Outcome`; the state is never altered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// let mut log = Vec::new();
    /// Outcome::<i32>::fail("rejected").if_failed(|fault| log.push(fault.to_string()));
    /// assert_eq!(log, vec!["rejected".to_string()]);
    /// ```
    #[inline]
    pub fn if_failed<F>(self, action: F) -> Self
    where
        F: FnOnce(&Fault),
    {
        if let Err(fault) = &self.state {
            action(fault);
        }

        self
    }

    // =========================================================================
    // Defaulting Extraction
    // =========================================================================

    /// Returns the payload, or `T::default()` if failed.
    ///
    /// The zero-value policy is explicit: only types implementing
    /// [`Default`] have this method.
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.state.unwrap_or_default()
    }

    /// Returns the payload, or `default` if failed.
    ///
    /// On success the given default is ignored entirely.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.state.unwrap_or(default)
    }

    /// Returns the payload, or the result of `supplier` if failed.
    ///
    /// `supplier` is invoked only on the failure path.
    #[inline]
    pub fn value_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.state.unwrap_or_else(|_| supplier())
    }

    // =========================================================================
    // Boundary Escapes
    // =========================================================================

    /// Re-raises the stored cause as a panic if failed; passthrough if
    /// successful.
    ///
    /// This is the designed escape hatch for boundaries that must
    /// interoperate with panic-based handling. The panic payload is the
    /// [`Fault`] itself, so a downstream [`capture`](Self::capture) recovers
    /// the identical cause.
    ///
    /// # Panics
    ///
    /// Panics with the stored [`Fault`] if the `Outcome` is failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// let passthrough = Outcome::ok(42).panic_if_failed();
    /// assert_eq!(passthrough.value(), 42);
    /// ```
    #[inline]
    pub fn panic_if_failed(self) -> Self {
        match self.state {
            Ok(value) => Self::ok(value),
            Err(fault) => panic_any(fault),
        }
    }

    // =========================================================================
    // Optional Interop
    // =========================================================================

    /// Converts to an [`Optional`], discarding the cause on failure.
    ///
    /// Success → `some(value)`; failure → `none()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// assert!(Outcome::ok(42).to_optional().has_value());
    /// assert!(!Outcome::<i32>::fail("gone").to_optional().has_value());
    /// ```
    #[inline]
    pub fn to_optional(self) -> Optional<T> {
        match self.state {
            Ok(value) => Optional::some(value),
            Err(_) => Optional::none(),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Ok(value) => formatter.debug_tuple("Outcome::ok").field(value).finish(),
            Err(fault) => formatter.debug_tuple("Outcome::fail").field(fault).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// Converts a std `Result` into an `Outcome`, wrapping the error as a
    /// [`Fault`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = "42".parse::<i32>().into();
    /// assert_eq!(outcome.value(), 42);
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::fail(Fault::new(error)),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Fault> {
    /// Converts an `Outcome` into a std `Result` carrying the [`Fault`] as
    /// its error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::{Fault, Outcome};
    ///
    /// let result: Result<i32, Fault> = Outcome::ok(42).into();
    /// assert_eq!(result.unwrap(), 42);
    /// ```
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.state
    }
}

// Immutable value type: freely shareable across threads when T is.
static_assertions::assert_impl_all!(Outcome<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Outcome: Send, Sync, Clone);
