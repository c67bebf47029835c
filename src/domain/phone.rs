//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits every phone number must have.
pub const PHONE_LENGTH: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly ten ASCII digits. No separators, spaces or
/// country codes are accepted, and nothing is normalized: the value is
/// stored exactly as given.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// Checked in this order:
    /// - Must be non-empty and contain only the digits `0-9`
    /// - Must be exactly 10 characters long
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` for non-digit input and
    /// `ValidationError::InvalidLength` for a digit string of the wrong length.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        Self::validate(&phone)?;
        Ok(Self(phone))
    }

    /// Replace the stored value, validating the new one first.
    ///
    /// On error the current value is left untouched.
    pub fn replace(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = phone.into();
        Self::validate(&phone)?;
        self.0 = phone;
        Ok(())
    }

    /// Check whether a candidate string would be accepted by [`PhoneNumber::new`].
    pub fn is_valid(phone: &str) -> bool {
        Self::validate(phone).is_ok()
    }

    fn validate(phone: &str) -> Result<(), ValidationError> {
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat(phone.to_string()));
        }

        // All characters are ASCII here, so byte length equals char count
        if phone.len() != PHONE_LENGTH {
            return Err(ValidationError::InvalidLength(phone.to_string()));
        }

        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for PhoneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
