use tracing::debug;

use super::contact_ops::find_record_mut;
use crate::error::BookResult;
use crate::model::{AddressBook, Birthday};

/// Sets or replaces the birthday of an existing contact.
pub fn add_birthday(book: &mut AddressBook, name: &str, date: &str) -> BookResult<Birthday> {
    let record = find_record_mut(book, name)?;
    let stored = *record.set_birthday(date)?;
    debug!(name, birthday = %stored, "birthday set");
    Ok(stored)
}
