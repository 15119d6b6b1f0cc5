//! Fault type - the opaque cause carried by a failed outcome.
//!
//! A [`Fault`] wraps any standard error (`dyn Error + Send + Sync`) behind a
//! cheaply cloneable handle. Cloning never copies the underlying error, so a
//! cause propagated through a combinator chain stays *the same* cause:
//! equality between faults is cause identity, not structural comparison.
//!
//! # Examples
//!
//! ```rust
//! use valor::outcome::Fault;
//! use std::num::ParseIntError;
//!
//! // From a bare description
//! let fault = Fault::message("record not found");
//! assert_eq!(fault.to_string(), "record not found");
//!
//! // From any std error, recoverable by downcast
//! let parse_error = "x".parse::<i32>().unwrap_err();
//! let fault = Fault::new(parse_error);
//! assert!(fault.is::<ParseIntError>());
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// An opaque failure cause.
///
/// `Fault` carries any `Error + Send + Sync` value and always has a
/// human-readable description (its `Display` output). It is the payload of
/// the failure state of [`Outcome`](crate::outcome::Outcome) and of the
/// unwind raised by
/// [`panic_if_failed`](crate::outcome::Outcome::panic_if_failed).
///
/// # Equality
///
/// Two faults are equal iff they share the same underlying cause (clones of
/// one another). This is the relation the short-circuit invariant speaks
/// about — "the original cause propagates unchanged" — and it is what the
/// conversion and propagation tests assert.
#[derive(Clone)]
pub struct Fault {
    cause: Arc<dyn Error + Send + Sync + 'static>,
}

/// A cause created from a bare description rather than a concrete error.
#[derive(Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl Error for Message {}

impl Fault {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Fault` from any standard error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Fault;
    ///
    /// let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    /// let fault = Fault::new(io_error);
    /// assert_eq!(fault.to_string(), "gone");
    /// ```
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            cause: Arc::new(error),
        }
    }

    /// Creates a `Fault` from a bare human-readable description.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Fault;
    ///
    /// let fault = Fault::message("no such user");
    /// assert_eq!(fault.to_string(), "no such user");
    /// ```
    #[inline]
    pub fn message<S>(description: S) -> Self
    where
        S: Into<String>,
    {
        Self::new(Message(description.into()))
    }

    /// Converts a captured panic payload into a `Fault`.
    ///
    /// A payload that is itself a `Fault` (as raised by
    /// [`panic_if_failed`](crate::outcome::Outcome::panic_if_failed)) is
    /// returned as-is, preserving cause identity. String payloads (the usual
    /// `panic!` / `assert!` messages) become message faults; anything else
    /// becomes an opaque description.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Fault;
    ///
    /// let payload = Box::new("boom".to_string());
    /// let fault = Fault::from_panic(payload);
    /// assert_eq!(fault.to_string(), "boom");
    /// ```
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<Self>() {
            Ok(fault) => *fault,
            Err(payload) => match payload.downcast::<String>() {
                Ok(text) => Self::message(*text),
                Err(payload) => match payload.downcast::<&'static str>() {
                    Ok(text) => Self::message(*text),
                    Err(_) => Self::message("panic with a non-string payload"),
                },
            },
        }
    }

    // =========================================================================
    // Cause Access
    // =========================================================================

    /// Returns the underlying error.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.cause
    }

    /// Returns a reference to the underlying error if it is of type `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valor::outcome::Fault;
    /// use std::num::ParseIntError;
    ///
    /// let fault = Fault::new("x".parse::<i32>().unwrap_err());
    /// assert!(fault.downcast_ref::<ParseIntError>().is_some());
    /// ```
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.as_error().downcast_ref::<E>()
    }

    /// Returns `true` if the underlying error is of type `E`.
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }
}

// =============================================================================
// Equality (Cause Identity)
// =============================================================================

impl PartialEq for Fault {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cause, &other.cause)
    }
}

impl Eq for Fault {}

// =============================================================================
// Display / Debug Implementations
// =============================================================================

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, formatter)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Fault").field(&self.cause).finish()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

// No blanket `From<E: Error>` impl: it would conflict with the description
// impls below under the coherence rules (upstream may implement `Error` for
// `String`). Concrete errors go through `Fault::new`.

impl From<String> for Fault {
    /// Wraps a description as a message fault.
    #[inline]
    fn from(description: String) -> Self {
        Self::message(description)
    }
}

impl From<&str> for Fault {
    /// Wraps a description as a message fault.
    #[inline]
    fn from(description: &str) -> Self {
        Self::message(description)
    }
}

static_assertions::assert_impl_all!(Fault: Send, Sync, Clone);
