//! Public error types for the address-book module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `AddressBookApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// Address with the specified uid was not found.
    #[error("Address not found: {uid}")]
    NotFound { uid: String },

    /// Validation error with the provided data.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl AddressBookError {
    /// Create a `NotFound` error.
    pub fn not_found(uid: impl Into<String>) -> Self {
        Self::NotFound { uid: uid.into() }
    }

    /// Create a Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an Internal error.
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
