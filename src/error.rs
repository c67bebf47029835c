//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating contact records or the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A name or phone value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is already stored on the record
    #[error("Phone number already exists: {0}")]
    DuplicatePhone(String),

    /// The phone number is not stored on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    KeyNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
