use tracing::{debug, info};

use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Phone, Record};
use crate::validation;

/// What `add_contact` did to the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChange {
    Added,
    Updated,
}

/// Adds `phone` to the contact called `name`, creating the contact first if needed.
/// An invalid phone leaves the book untouched, including not creating the contact.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<ContactChange> {
    let valid_name = validation::non_blank(name, "name")?;
    let phone = Phone::parse(phone)?;

    if let Some(record) = book.find_mut(&valid_name) {
        record.add_phone(phone.as_str())?;
        debug!(name = %valid_name, "phone appended to existing contact");
        return Ok(ContactChange::Updated);
    }

    let mut record = Record::new(&valid_name)?;
    record.add_phone(phone.as_str())?;
    book.add_record(record);
    info!(name = %valid_name, "contact added");
    Ok(ContactChange::Added)
}

pub fn change_phone(book: &mut AddressBook, name: &str, old_phone: &str, new_phone: &str) -> BookResult<()> {
    let record = find_record_mut(book, name)?;
    record.edit_phone(old_phone, new_phone)?;
    debug!(name, "phone changed");
    Ok(())
}

/// Removing a phone the contact does not have is not an error.
pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<bool> {
    let record = find_record_mut(book, name)?;
    let removed = record.remove_phone(phone);
    debug!(name, removed, "remove phone");
    Ok(removed)
}

pub fn delete_contact(book: &mut AddressBook, name: &str) -> bool {
    let removed = book.delete(name.trim()).is_some();
    if removed {
        info!(name, "contact deleted");
    }
    removed
}

pub(crate) fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    let name = name.trim();
    book.find_mut(name)
        .ok_or_else(|| BookError::not_found("Contact", name))
}
