//! Address book: name-keyed storage of contact records.

use super::record::ContactRecord;
use crate::error::{AddressBookError, AddressBookResult};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::slice;
use tracing::{debug, warn};

/// In-memory store of contact records keyed by contact name.
///
/// Records are owned by the book. [`AddressBook::find_mut`] hands out a
/// live borrow of the stored record, so edits through it are seen by
/// every later lookup.
///
/// Iteration follows the order in which names were first added.
/// Replacing a record keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, ContactRecord>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// A record already stored under the same name is replaced and
    /// returned (last write wins).
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key.clone(), record);

        if previous.is_some() {
            warn!(contact = %key, "Replaced existing contact record");
        } else {
            debug!(contact = %key, "Contact record added");
            self.order.push(key);
        }

        previous
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Look up a record by exact name for in-place editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name` and return it.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::KeyNotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> AddressBookResult<ContactRecord> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| AddressBookError::KeyNotFound(name.to_string()))?;

        self.order.retain(|key| key != name);
        debug!(contact = name, "Contact record deleted");
        Ok(record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            keys: self.order.iter(),
            records: &self.records,
        }
    }
}

/// Iterator over the records of an [`AddressBook`] in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    keys: slice::Iter<'a, String>,
    records: &'a HashMap<String, ContactRecord>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ContactRecord;

    fn next(&mut self) -> Option<Self::Item> {
        // `order` and `records` always hold the same keys
        self.keys.by_ref().find_map(|key| self.records.get(key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a ContactRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Serde support - serialize as a list of records in insertion order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for record in self.iter() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

// Serde support - rebuild from a list of records through `add_record`
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<ContactRecord>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}
