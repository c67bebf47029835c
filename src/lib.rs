//! Address Book - a minimal in-memory contact store.
//!
//! Contacts have a name and an ordered list of validated phone numbers.
//! The address book stores them by name and supports add, find, edit and
//! delete operations.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`PhoneNumber`, `ContactName`)
//! - **models**: `ContactRecord` and the `AddressBook` that stores them
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration for the demonstration binary
//! - **demo**: The demonstration sequence printed by the binary
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, ContactRecord};
//!
//! let mut record = ContactRecord::new("John").unwrap();
//! record.add_phone("1234567890").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//!
//! let john = book.find_mut("John").unwrap();
//! john.edit_phone("1234567890", "1112223333").unwrap();
//!
//! assert_eq!(
//!     book.find("John").unwrap().to_string(),
//!     "Contact name: John, phones: 1112223333"
//! );
//! ```

pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError};
pub use models::{AddressBook, ContactRecord};
