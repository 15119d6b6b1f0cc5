//! User Service Sample
//!
//! An in-memory user-record store whose whole surface speaks in `valor`
//! containers: lookups return an [`Optional`], mutations return an
//! [`Outcome`]. The service itself contains no combinator logic; it is a
//! plain consumer showing how producers hand back containers instead of
//! nullable values or panics.

use thiserror::Error;
use valor::optional::Optional;
use valor::outcome::{Fault, Outcome};

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique key of the record.
    pub email: String,
    /// Display name.
    pub name: String,
}

impl User {
    /// Creates a user record.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}

/// Domain errors of the user service.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// A record with this email already exists.
    #[error("email {0} already exists")]
    DuplicateKey(String),
    /// No record with this email exists.
    #[error("no user with email {0}")]
    NotFound(String),
}

/// An in-memory user store.
#[derive(Debug, Default)]
pub struct UserService {
    users: Vec<User>,
}

impl UserService {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a user by email.
    pub fn get_user(&self, email: &str) -> Optional<User> {
        Optional::maybe(self.users.iter().find(|user| user.email == email).cloned())
    }

    /// Creates a user, failing with [`UserServiceError::DuplicateKey`] when
    /// the email is already taken.
    pub fn create_user(&mut self, email: &str, name: &str) -> Outcome<User> {
        if self.users.iter().any(|user| user.email == email) {
            return Outcome::fail(Fault::new(UserServiceError::DuplicateKey(email.to_string())));
        }

        let user = User::new(email, name);
        self.users.push(user.clone());
        Outcome::ok(user)
    }

    /// Applies `update` to the user with the given email, failing with
    /// [`UserServiceError::NotFound`] when no such record exists.
    pub fn update_user<F>(&mut self, email: &str, update: F) -> Outcome<User>
    where
        F: FnOnce(User) -> User,
    {
        match self.users.iter().position(|user| user.email == email) {
            Some(index) => {
                let updated = update(self.users[index].clone());
                self.users[index] = updated.clone();
                Outcome::ok(updated)
            }
            None => Outcome::fail(Fault::new(UserServiceError::NotFound(email.to_string()))),
        }
    }

    /// Deletes the user with the given email, failing with
    /// [`UserServiceError::NotFound`] when no such record exists.
    pub fn delete_user(&mut self, email: &str) -> Outcome {
        match self.users.iter().position(|user| user.email == email) {
            Some(index) => {
                self.users.remove(index);
                Outcome::done()
            }
            None => Outcome::fail(Fault::new(UserServiceError::NotFound(email.to_string()))),
        }
    }
}
