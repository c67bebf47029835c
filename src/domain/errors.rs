//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number contains something other than digits.
    InvalidFormat(String),

    /// The provided phone number is not exactly 10 digits long.
    InvalidLength(String),

    /// The provided contact name is empty.
    EmptyName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(phone) => {
                write!(f, "Phone number must contain only digits: {}", phone)
            }
            Self::InvalidLength(phone) => {
                write!(f, "Phone number must be exactly 10 digits: {}", phone)
            }
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
