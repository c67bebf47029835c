//! The fixed demonstration sequence run by the `address-book` binary.

use crate::models::{AddressBook, ContactRecord};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

const SEPARATOR: &str = "--------";

/// Build a small book, edit it, and print each stage to `out`.
///
/// Returns the book as it stands after the final delete.
pub fn run<W: Write>(out: &mut W) -> Result<AddressBook> {
    let mut book = AddressBook::new();

    let mut john = ContactRecord::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = ContactRecord::new("Jane")?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    for record in &book {
        writeln!(out, "{}", record)?;
    }
    writeln!(out, "{}", SEPARATOR)?;

    let john = book.find_mut("John").context("John should be in the book")?;
    john.edit_phone("1234567890", "1112223333")?;
    john.remove_phone("5555555555")?;
    writeln!(out, "{}", john)?;
    writeln!(out, "{}", SEPARATOR)?;

    let found = john
        .find_phone("1112223333")
        .context("edited phone should be on John's record")?;
    writeln!(out, "{}: {}", john.name(), found)?;

    book.delete("Jane")?;
    info!(remaining = book.len(), "Demo finished");

    Ok(book)
}
