//! Contact record: a name plus an ordered list of phone numbers.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::debug;

/// A single contact in the address book.
///
/// Phone numbers keep their insertion order and are unique by value
/// within a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

impl ContactRecord {
    /// Create a record with the given name and no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn phone_count(&self) -> usize {
        self.phones.len()
    }

    /// Validate `number` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::Validation` if `number` is not a valid phone number
    /// - `AddressBookError::DuplicatePhone` if the record already has it
    pub fn add_phone(&mut self, number: &str) -> AddressBookResult<()> {
        let phone = PhoneNumber::new(number)?;
        if self.find_phone(number).is_some() {
            return Err(AddressBookError::DuplicatePhone(number.to_string()));
        }

        self.phones.push(phone);
        debug!(contact = %self.name, phone = number, "Phone added");
        Ok(())
    }

    /// Remove the phone equal to `number`, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if the record has no such phone.
    pub fn remove_phone(&mut self, number: &str) -> AddressBookResult<PhoneNumber> {
        let index = self
            .position(number)
            .ok_or_else(|| AddressBookError::PhoneNotFound(number.to_string()))?;

        let removed = self.phones.remove(index);
        debug!(contact = %self.name, phone = number, "Phone removed");
        Ok(removed)
    }

    /// Find the phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Replace `old` with `new` in place.
    ///
    /// The edited phone keeps its position in the list. Nothing changes if
    /// any check fails.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `AddressBookError::PhoneNotFound` if `old` is not on the record
    /// - `AddressBookError::Validation` if `new` is not a valid phone number
    /// - `AddressBookError::DuplicatePhone` if `new` is already on the record
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AddressBookResult<()> {
        let index = self
            .position(old)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old.to_string()))?;

        // An invalid `new` can never match a stored phone, so this only
        // fires for valid input
        if old != new && self.find_phone(new).is_some() {
            return Err(AddressBookError::DuplicatePhone(new.to_string()));
        }

        self.phones[index].replace(new)?;
        debug!(contact = %self.name, old, new, "Phone edited");
        Ok(())
    }

    fn position(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == number)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}

/// Wire shape used to rebuild a record through its validating operations.
#[derive(Deserialize)]
struct RawContactRecord {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

// Serde support - deserialize with the duplicate phone check applied
impl<'de> Deserialize<'de> for ContactRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawContactRecord::deserialize(deserializer)?;
        let mut record = ContactRecord {
            name: raw.name,
            phones: Vec::with_capacity(raw.phones.len()),
        };
        for phone in raw.phones {
            record
                .add_phone(phone.as_str())
                .map_err(serde::de::Error::custom)?;
        }
        Ok(record)
    }
}
