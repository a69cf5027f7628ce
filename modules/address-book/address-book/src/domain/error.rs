use address_book_sdk::AddressBookError;
use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Address not found: {uid}")]
    NotFound { uid: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn not_found(uid: impl Into<String>) -> Self {
        Self::NotFound { uid: uid.into() }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for AddressBookError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::NotFound { uid } => AddressBookError::not_found(uid),
            DomainError::Validation { field, message } => {
                AddressBookError::validation(format!("{field}: {message}"))
            }
            DomainError::Database { .. } => AddressBookError::internal(),
        }
    }
}
